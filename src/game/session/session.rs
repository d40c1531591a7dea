use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    NotStarted,
    Active,
    Won,
    TimedOut,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::TimedOut)
    }
}

/// The result of one call to Session::tick()
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub frame: Frame,
    /// Events raised by this tick, in the order they happened
    pub events: Vec<SessionEvent>,
}

/// One mission: the probe, its sponsor and everything scored about it. Owns all mutable game
/// state, nothing lives outside it.
#[derive(Debug)]
pub struct Session {
    conf: SimConfig,
    sponsor: SponsorProfile,
    bodies: Bodies,
    points: [LagrangePoint; 5],
    status: SessionStatus,
    probe: ProbeState,
    clock: SessionClock,
    scorer: LagrangeScorer,
    satisfaction: SatisfactionState,
    stats: SessionStats,
    report: Option<MissionReport>,
    events: EventBus,
}

impl Session {
    /// Fails without creating a session if the config or sponsor can not be played
    pub fn new(conf: SimConfig, sponsor: SponsorProfile) -> Result<Self, SessionError> {
        conf.validate().map_err(SessionError::InvalidConfig)?;
        sponsor.validate()?;
        Ok(Self {
            bodies: Bodies::from_config(&conf),
            points: lagrange_points(conf.earth_moon_distance),
            status: SessionStatus::NotStarted,
            probe: ProbeState::new(conf.probe_start),
            clock: SessionClock::default(),
            scorer: LagrangeScorer::new(),
            satisfaction: SatisfactionState::new(&sponsor),
            stats: SessionStats::default(),
            report: None,
            events: EventBus::new(),
            conf,
            sponsor,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.conf
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn probe(&self) -> &ProbeState {
        &self.probe
    }

    #[allow(dead_code)]
    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    #[allow(dead_code)]
    pub fn satisfaction(&self) -> &SatisfactionState {
        &self.satisfaction
    }

    #[allow(dead_code)]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn sponsor(&self) -> &SponsorProfile {
        &self.sponsor
    }

    pub fn points(&self) -> &[LagrangePoint] {
        &self.points
    }

    pub fn bodies(&self) -> &Bodies {
        &self.bodies
    }

    /// Only available once the session has been won or timed out
    pub fn report(&self) -> Option<&MissionReport> {
        self.report.as_ref()
    }

    pub fn subscribe(&mut self, listener: Listener) -> ListenerKey {
        self.events.subscribe(listener)
    }

    #[allow(dead_code)]
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.events.unsubscribe(key)
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.status != SessionStatus::NotStarted {
            return Err(SessionError::IllegalTransition {
                from: self.status,
                to: SessionStatus::Active,
            });
        }
        self.begin();
        Ok(())
    }

    /// Plays again with the same sponsor after a session has ended
    pub fn restart(&mut self) -> Result<(), SessionError> {
        if !self.status.is_terminal() {
            return Err(SessionError::IllegalTransition {
                from: self.status,
                to: SessionStatus::Active,
            });
        }
        self.begin();
        Ok(())
    }

    fn begin(&mut self) {
        self.probe = ProbeState::new(self.conf.probe_start);
        self.clock.reset();
        self.scorer.reset();
        self.satisfaction = SatisfactionState::new(&self.sponsor);
        self.stats = SessionStats::default();
        self.report = None;
        self.status = SessionStatus::Active;
        self.clock.active = true;
        info!(
            "{} mission started with {}s on the clock",
            self.sponsor.name,
            self.sponsor.time_limit()
        );
    }

    /// Advances the game by `dt` seconds. Does nothing unless the session is active. A negative
    /// or non-finite dt is treated as 0.
    pub fn tick(&mut self, dt: f64, input: &InputState) -> TickReport {
        let mut events = Vec::new();
        if self.status == SessionStatus::Active {
            let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
            self.advance(dt, input, &mut events);
            for event in &events {
                self.events.emit(event);
            }
        }
        TickReport {
            frame: self.frame(),
            events,
        }
    }

    fn advance(&mut self, dt: f64, input: &InputState, events: &mut Vec<SessionEvent>) {
        let outcome = step_probe(
            &mut self.probe,
            input,
            &self.bodies,
            &self.sponsor,
            &self.conf,
        );
        if let Some(contact) = outcome.contact {
            events.push(SessionEvent::BoundaryContact(contact));
        }
        self.stats
            .record_motion(outcome.travelled, self.probe.speed());

        let update = self
            .scorer
            .update(self.probe.position, &self.points, dt, &self.conf);
        if let (true, Some(point)) = (update.entered, update.tracked) {
            debug!("balancing at {}", point);
            events.push(SessionEvent::EnteredBalanceZone(point));
        }
        self.stats.record_score(&update);
        self.clock.score += update.score_delta;
        self.clock.balance_seconds = update.balance_seconds;
        self.clock.current_point = update.tracked;
        self.clock.elapsed_seconds += dt;
        self.satisfaction.update(
            update.tracked.is_some(),
            update.balance_seconds > self.conf.bonus_balance_time,
        );

        if update.won {
            self.finish(SessionStatus::Won, events);
        } else if self.clock.elapsed_seconds >= self.sponsor.time_limit() {
            self.finish(SessionStatus::TimedOut, events);
        }
    }

    fn finish(&mut self, outcome: SessionStatus, events: &mut Vec<SessionEvent>) {
        self.status = outcome;
        self.clock.active = false;
        self.stats.elapsed = self.clock.elapsed_seconds;
        self.stats.won = outcome == SessionStatus::Won;
        events.push(if self.stats.won {
            SessionEvent::Won
        } else {
            SessionEvent::TimedOut
        });
        for name in self
            .satisfaction
            .check_achievements(&self.sponsor.achievements, &self.stats)
        {
            events.push(SessionEvent::AchievementEarned(name));
        }
        let achievements: Vec<String> = self
            .satisfaction
            .achievements()
            .iter()
            .filter(|(_, earned)| **earned)
            .map(|(name, _)| name.clone())
            .collect();
        let tier = self.satisfaction.tier();
        let report = MissionReport {
            sponsor: self.sponsor.key.clone(),
            outcome,
            tier,
            headline: tier.headline().to_string(),
            satisfaction: self.satisfaction.value(),
            score: self.clock.score,
            mission_score: self
                .sponsor
                .mission_score(&self.stats, achievements.len()),
            achievements,
            stats: self.stats.clone(),
        };
        info!("{}", report);
        self.report = Some(report);
    }

    /// The state of the game as a renderer should draw it
    pub fn frame(&self) -> Frame {
        let nearest = nearest_point(self.probe.position, &self.points);
        let distance = nearest.map(|(_, d)| d);
        let threshold = self.conf.balance_threshold;
        let balancing = self.clock.current_point.is_some();
        let stability = match (balancing, distance) {
            (true, Some(d)) => stability_percent(d, threshold),
            _ => 0,
        };
        let approaching = !balancing && distance.map_or(false, |d| d < threshold * 1.5);
        let radius = self.probe.position.to_vec().magnitude();
        Frame {
            status: self.status,
            sponsor: self.sponsor.key.clone(),
            position: self.probe.position.into(),
            velocity: self.probe.velocity.into(),
            rotation: self.probe.attitude(self.conf.tilt_factor).into(),
            mode: self.probe.mode,
            thruster_active: self.probe.thruster_active,
            nearest_point: nearest.map(|(name, _)| name),
            nearest_distance: distance,
            balancing_at: self.clock.current_point,
            stability_percent: stability,
            approaching,
            boundary_warning: radius > self.conf.boundary_radius * self.conf.boundary_warning,
            elapsed_seconds: self.clock.elapsed_seconds,
            remaining_seconds: self.clock.remaining_seconds(self.sponsor.time_limit()),
            balance_seconds: self.clock.balance_seconds,
            score: self.clock.score,
            satisfaction: self.satisfaction.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::{cell::RefCell, rc::Rc};

    /// Where L1 is with the default Earth-Moon distance
    fn l1() -> Point3<f64> {
        Point3::new(25.5, 0.0, 0.0)
    }

    fn l4() -> Point3<f64> {
        lagrange_points(SimConfig::default().earth_moon_distance)[3].position
    }

    /// No gravity, so a probe left alone stays exactly where it starts
    fn still_config(start: Point3<f64>) -> SimConfig {
        SimConfig {
            gravity_constant: 0.0,
            probe_start: start,
            ..SimConfig::default()
        }
    }

    fn started(conf: SimConfig, sponsor: SponsorProfile) -> Session {
        let mut session = Session::new(conf, sponsor).unwrap();
        session.start().unwrap();
        session
    }

    fn run_until_over(session: &mut Session, dt: f64, max_ticks: usize) -> Vec<TickReport> {
        let mut reports = Vec::new();
        for _ in 0..max_ticks {
            let report = session.tick(dt, &InputState::new());
            reports.push(report);
            if session.status().is_terminal() {
                break;
            }
        }
        reports
    }

    #[test]
    fn invalid_config_is_rejected() {
        let conf = SimConfig {
            winning_time: -1.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            Session::new(conf, plain_sponsor(60.0)),
            Err(SessionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn invalid_sponsor_is_rejected() {
        assert!(matches!(
            Session::new(SimConfig::default(), plain_sponsor(-5.0)),
            Err(SessionError::InvalidProfile(_, _))
        ));
    }

    #[test]
    fn ticking_before_start_does_nothing() {
        let mut session = Session::new(still_config(l1()), plain_sponsor(60.0)).unwrap();
        let report = session.tick(1.0, &InputState::new().with(Control::Up));
        assert_eq!(report.frame.status, SessionStatus::NotStarted);
        assert!(report.events.is_empty());
        assert_eq!(session.probe().position, l1());
        assert_eq!(session.clock().elapsed_seconds, 0.0);
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        let mut session = Session::new(still_config(l1()), plain_sponsor(60.0)).unwrap();
        assert_eq!(
            session.restart(),
            Err(SessionError::IllegalTransition {
                from: SessionStatus::NotStarted,
                to: SessionStatus::Active,
            })
        );
        session.start().unwrap();
        assert!(session.start().is_err());
        assert!(session.restart().is_err());
        assert_eq!(session.status(), SessionStatus::Active);
    }

    #[test]
    fn resting_at_a_point_wins_after_winning_time() {
        let conf = still_config(l1());
        let winning_time = conf.winning_time;
        let mut session = started(conf, plain_sponsor(120.0));
        let reports = run_until_over(&mut session, 0.5, 1000);
        assert_eq!(
            reports[0].events,
            vec![SessionEvent::EnteredBalanceZone(LagrangePointName::L1)]
        );
        // The first tick starts tracking, every one after adds its dt
        for (i, report) in reports.iter().enumerate() {
            assert_relative_eq!(report.frame.balance_seconds, i as f64 * 0.5);
        }
        let last = reports.last().unwrap();
        assert_eq!(last.frame.status, SessionStatus::Won);
        assert!(last.events.contains(&SessionEvent::Won));
        assert_relative_eq!(last.frame.balance_seconds, winning_time);
        assert_relative_eq!(last.frame.score, 10.0 * winning_time);
        assert_eq!(last.frame.stability_percent, 100);
        let report = session.report().unwrap();
        assert_eq!(report.outcome, SessionStatus::Won);
        assert!(report.stats.won);
        assert_eq!(report.headline, "Mission Accomplished!");
    }

    #[test]
    fn ticks_after_the_end_do_nothing() {
        let mut session = started(still_config(l1()), plain_sponsor(120.0));
        run_until_over(&mut session, 0.5, 1000);
        let elapsed = session.clock().elapsed_seconds;
        let report = session.tick(0.5, &InputState::new());
        assert!(report.events.is_empty());
        assert_eq!(session.clock().elapsed_seconds, elapsed);
    }

    #[test]
    fn running_out_of_time_times_out() {
        let mut session = started(still_config(Point3::new(0.0, 0.0, 20.0)), plain_sponsor(2.0));
        let reports = run_until_over(&mut session, 0.5, 100);
        assert_eq!(reports.len(), 4);
        let last = reports.last().unwrap();
        assert_eq!(last.frame.status, SessionStatus::TimedOut);
        assert_eq!(last.events, vec![SessionEvent::TimedOut]);
        assert_eq!(last.frame.remaining_seconds, 0.0);
        // Four ticks away from any point
        assert_eq!(last.frame.satisfaction, 80.0);
        assert_eq!(session.report().unwrap().tier, SatisfactionTier::Accomplished);
    }

    #[test]
    fn winning_beats_timing_out_on_the_same_tick() {
        let mut session = started(still_config(l1()), plain_sponsor(30.5));
        run_until_over(&mut session, 0.5, 1000);
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn satisfaction_falls_while_off_target() {
        let mut session =
            started(still_config(Point3::new(0.0, 0.0, 20.0)), plain_sponsor(100.0));
        let first = session.tick(0.1, &InputState::new());
        assert_eq!(first.frame.satisfaction, 95.0);
        for _ in 0..30 {
            let report = session.tick(0.1, &InputState::new());
            assert!(report.frame.satisfaction >= 0.0);
        }
        assert_eq!(session.satisfaction().value(), 0.0);
    }

    #[test]
    fn restart_resets_everything() {
        let mut session = started(still_config(l1()), plain_sponsor(120.0));
        run_until_over(&mut session, 0.5, 1000);
        session.restart().unwrap();
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.clock().elapsed_seconds, 0.0);
        assert_eq!(session.clock().score, 0.0);
        assert_eq!(session.clock().current_point, None);
        assert_eq!(session.satisfaction().value(), 100.0);
        assert_eq!(*session.stats(), SessionStats::default());
        assert!(session.report().is_none());
    }

    #[test]
    fn spawn_inside_earth_is_pushed_out() {
        let mut session = started(SimConfig::default(), plain_sponsor(60.0));
        let report = session.tick(1.0 / 60.0, &InputState::new());
        assert!(report
            .events
            .contains(&SessionEvent::BoundaryContact(Contact::Exclusion(
                BodyKind::Earth
            ))));
        assert!(session.probe().position.to_vec().magnitude() >= 6.0 - EPSILON);
        assert_eq!(session.status(), SessionStatus::Active);
    }

    #[test]
    fn push_out_of_earth_is_not_counted_as_distance() {
        let mut session = started(SimConfig::default(), plain_sponsor(60.0));
        session.tick(1.0 / 60.0, &InputState::new());
        assert!(session.stats().total_distance < 0.01);
    }

    #[test]
    fn full_thrust_lifts_off_earth() {
        let catalog = SponsorCatalog::builtin();
        for key in &["NASA", "ESA"] {
            let mut session = started(SimConfig::default(), catalog.select(key).unwrap());
            let up = InputState::new().with(Control::Up);
            for _ in 0..300 {
                session.tick(1.0 / 60.0, &up);
            }
            assert!(session.probe().position.z > 15.0, "{} stayed on Earth", key);
        }
    }

    #[test]
    fn steady_thrust_reaches_a_balance_zone() {
        let catalog = SponsorCatalog::builtin();
        let mut input = InputState::new();
        input.set_axis((l4() - Point3::new(0.0, 0.0, 6.0)).normalize());
        for key in &["NASA", "ESA"] {
            let mut session = started(SimConfig::default(), catalog.select(key).unwrap());
            let mut entered = false;
            for _ in 0..(20 * 60) {
                let report = session.tick(1.0 / 60.0, &input);
                if report
                    .events
                    .contains(&SessionEvent::EnteredBalanceZone(LagrangePointName::L4))
                {
                    entered = true;
                    break;
                }
            }
            assert!(entered, "{} never reached L4", key);
        }
    }

    #[test]
    fn bad_dt_does_not_advance_the_clock() {
        let mut session = started(still_config(l1()), plain_sponsor(60.0));
        session.tick(std::f64::NAN, &InputState::new());
        session.tick(-1.0, &InputState::new());
        assert_eq!(session.clock().elapsed_seconds, 0.0);
    }

    #[test]
    fn listeners_hear_the_win() {
        let mut session = started(still_config(l1()), plain_sponsor(120.0));
        let heard = Rc::new(RefCell::new(Vec::new()));
        let sink = heard.clone();
        session.subscribe(Box::new(move |e: &SessionEvent| {
            sink.borrow_mut().push(e.clone())
        }));
        run_until_over(&mut session, 0.5, 1000);
        assert_eq!(
            heard.borrow().first(),
            Some(&SessionEvent::EnteredBalanceZone(LagrangePointName::L1))
        );
        assert!(heard.borrow().contains(&SessionEvent::Won));
    }

    #[test]
    fn sponsor_achievements_feed_mission_score() {
        let nasa = SponsorCatalog::builtin().select("NASA").unwrap();
        let mut session = started(still_config(l1()), nasa);
        let reports = run_until_over(&mut session, 0.5, 1000);
        assert!(reports
            .last()
            .unwrap()
            .events
            .contains(&SessionEvent::AchievementEarned(
                "Precise Positioning".to_string()
            )));
        let report = session.report().unwrap();
        // Balanced for exactly 30s, which is not more than 30s
        assert_eq!(report.achievements, vec!["Precise Positioning".to_string()]);
        assert_eq!(report.mission_score, 30 * 2 + 500);
    }

    #[test]
    fn frame_flags_approach_and_boundary() {
        let near_l3 = Session::new(
            still_config(Point3::new(-30.0, 5.0, 0.0)),
            plain_sponsor(60.0),
        )
        .unwrap();
        let frame = near_l3.frame();
        assert_eq!(frame.nearest_point, Some(LagrangePointName::L3));
        assert!(frame.approaching);
        assert_eq!(frame.stability_percent, 0);
        assert!(!frame.boundary_warning);
        assert_eq!(frame.remaining_seconds, 60.0);

        let far_out = Session::new(
            still_config(Point3::new(0.0, 0.0, 55.0)),
            plain_sponsor(60.0),
        )
        .unwrap();
        assert!(far_out.frame().boundary_warning);
    }

    #[test]
    fn frame_serializes_to_json() {
        let session = Session::new(still_config(l1()), plain_sponsor(60.0)).unwrap();
        let json = serde_json::to_value(session.frame()).unwrap();
        assert_eq!(json["status"], "NotStarted");
        assert_eq!(json["position"][0], 25.5);
        assert_eq!(json["nearest_point"], "L1");
    }
}
