use super::*;

mod clock;
mod error;
mod events;
mod frame;
mod report;
#[allow(clippy::module_inception)]
mod session;
mod stats;

pub use clock::SessionClock;
pub use error::SessionError;
pub use events::{EventBus, Listener, ListenerKey, SessionEvent};
pub use frame::Frame;
pub use report::MissionReport;
pub use session::{Session, SessionStatus};
pub use stats::SessionStats;
