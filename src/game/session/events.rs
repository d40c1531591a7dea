use super::*;

use slotmap::DenseSlotMap;

new_key_type! {
    pub struct ListenerKey;
}

/// Something a renderer or sound system may want to react to. Delivered at most once each.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "detail", rename_all = "camelCase")]
pub enum SessionEvent {
    EnteredBalanceZone(LagrangePointName),
    BoundaryContact(Contact),
    AchievementEarned(String),
    Won,
    TimedOut,
}

pub type Listener = Box<dyn FnMut(&SessionEvent)>;

/// Fire-and-forget delivery of session events to any number of listeners
#[derive(derivative::Derivative, Default)]
#[derivative(Debug)]
pub struct EventBus {
    #[derivative(Debug = "ignore")]
    listeners: DenseSlotMap<ListenerKey, Listener>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Listener) -> ListenerKey {
        self.listeners.insert(listener)
    }

    /// Returns if the listener was subscribed
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    pub fn emit(&mut self, event: &SessionEvent) {
        trace!("event {:?}", event);
        for listener in self.listeners.values_mut() {
            listener(event);
        }
    }
}
