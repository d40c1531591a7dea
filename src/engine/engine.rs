use super::*;

use std::io::Write;

/// Runs sessions headlessly: the autopilot flies, frames go to an optional output and finished
/// missions go into the high score table
pub struct Engine {
    conf: EngineConfig,
    session: Session,
    autopilot: Autopilot,
    metronome: Metronome,
    quit: Arc<AtomicBool>,
    fs: Filesystem,
    high_scores: Option<HighScores>,
    frame_output: Option<Box<dyn Write>>,
    game_time: f64,
}

impl Engine {
    /// Fails if the sponsor is unknown or the sponsors file can not be loaded. The session is
    /// started before this returns.
    pub fn new(
        conf: MasterConfig,
        fs: Filesystem,
        quit: Arc<AtomicBool>,
    ) -> Result<Self, Box<dyn Error>> {
        let MasterConfig { engine, sim, .. } = conf;
        let mut catalog = SponsorCatalog::builtin();
        if let Some(path) = &engine.sponsors_file {
            catalog.extend_from_file(path, &fs)?;
        }
        let sponsor = catalog
            .select(&engine.sponsor)
            .map_err(|e| format!("{}, expected one of {}", e, catalog.keys().join(", ")))?;
        let mut session = Session::new(sim, sponsor)?;
        session.subscribe(Box::new(log_event));
        session.start()?;
        let high_scores = engine
            .score_file
            .as_ref()
            .map(|path| HighScores::load(path, &fs));
        let frame_output: Option<Box<dyn Write>> = if engine.print_frames {
            Some(Box::new(std::io::stdout()))
        } else {
            None
        };
        Ok(Self {
            autopilot: Autopilot::new(engine.autopilot, engine.autopilot_target),
            metronome: Metronome::new(engine.tick_rate),
            conf: engine,
            session,
            quit,
            fs,
            high_scores,
            frame_output,
            game_time: 0.0,
        })
    }

    /// Sends frames somewhere other than stdout
    #[allow(dead_code)]
    pub fn with_frame_output(mut self, output: Box<dyn Write>) -> Self {
        self.frame_output = Some(output);
        self
    }

    #[allow(dead_code)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[allow(dead_code)]
    pub fn high_scores(&self) -> Option<&HighScores> {
        self.high_scores.as_ref()
    }

    /// Runs a single iteration of the game loop
    /// Returns if to continue the game
    pub fn tick(&mut self) -> bool {
        if self.quit.load(Ordering::Relaxed) {
            info!("quit requested, stopping");
            return false;
        }
        let dt = self.conf.dt();
        let input = self.autopilot.input(&self.session);
        let report = self.session.tick(dt, &input);
        self.game_time += dt;
        self.write_frame(&report.frame);

        if self.session.status().is_terminal() && !self.finish_session() {
            return false;
        }
        if let Some(max) = self.conf.max_game_time {
            if self.game_time >= max {
                info!("reached max game time of {}s", max);
                return false;
            }
        }
        self.metronome.wait_for_next_frame();
        true
    }

    fn write_frame(&mut self, frame: &Frame) {
        if let Some(output) = &mut self.frame_output {
            let written = serde_json::to_string(frame)
                .map_err(|e| e.to_string())
                .and_then(|line| writeln!(output, "{}", line).map_err(|e| e.to_string()));
            if written.or_log_error("failed to write frame").is_none() {
                self.frame_output = None;
            }
        }
    }

    /// Records the finished mission. Returns if another session was started.
    fn finish_session(&mut self) -> bool {
        if let Some(report) = self.session.report() {
            if let Some(scores) = &mut self.high_scores {
                match scores.record(HighScore::from(report)) {
                    Some(rank) => info!("new high score, rank {}", rank + 1),
                    None => debug!("mission did not make the high score table"),
                }
                scores.save(&self.fs).or_log_warn("failed to save high scores");
            }
        }
        if self.autopilot.on_finish(self.session.status()) {
            self.session.restart().or_log_error("failed to restart session").is_some()
        } else {
            false
        }
    }
}

/// Stands in for sound cues and HUD flashes when nothing is drawn
fn log_event(event: &SessionEvent) {
    match event {
        SessionEvent::EnteredBalanceZone(point) => info!("balance zone entered at {}", point),
        SessionEvent::BoundaryContact(contact) => debug!("contact with {:?}", contact),
        SessionEvent::AchievementEarned(name) => info!("achievement earned: {}", name),
        SessionEvent::Won => info!("mission won"),
        SessionEvent::TimedOut => info!("mission timed out"),
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if self.metronome.overruns() > 0 {
            warn!("{} frames overran the tick rate", self.metronome.overruns());
        }
        info!("engine stopped after {:.1}s of game time", self.game_time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    /// Collects everything written to it
    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Unpaced, gravity free and near L4 so sessions end quickly
    fn fast_config() -> MasterConfig {
        let mut conf = MasterConfig::default();
        conf.engine.tick_rate = 0.0;
        conf.engine.score_file = Some("scores.json".to_string());
        conf.sim.gravity_constant = 0.0;
        conf.sim.probe_start = Point3::new(15.0, 24.0, 0.0);
        conf
    }

    fn quit_flag() -> Arc<AtomicBool> {
        Arc::new(AtomicBool::new(false))
    }

    fn run(engine: &mut Engine, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while ticks < max_ticks && engine.tick() {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn unknown_sponsor_fails() {
        let mut conf = fast_config();
        conf.engine.sponsor = "Nobody".to_string();
        let result = Engine::new(conf, MockFilesystem::new().boxed(), quit_flag());
        let message = result.err().unwrap().to_string();
        assert!(message.contains("Nobody"));
        assert!(message.contains("NASA, ESA, SpaceX"));
    }

    #[test]
    fn missing_sponsors_file_fails() {
        let mut conf = fast_config();
        conf.engine.sponsors_file = Some("sponsors.toml".to_string());
        let result = Engine::new(conf, MockFilesystem::new().boxed(), quit_flag());
        assert!(result.is_err());
    }

    #[test]
    fn quit_flag_stops_the_loop() {
        let quit = quit_flag();
        let mut engine = Engine::new(fast_config(), MockFilesystem::new().boxed(), quit.clone())
            .unwrap();
        assert!(engine.tick());
        quit.store(true, Ordering::Relaxed);
        assert!(!engine.tick());
    }

    #[test]
    fn stops_at_max_game_time() {
        let mut conf = fast_config();
        conf.engine.autopilot = AutopilotScheme::Off;
        conf.engine.max_game_time = Some(1.0);
        let mut engine = Engine::new(conf, MockFilesystem::new().boxed(), quit_flag()).unwrap();
        let ticks = run(&mut engine, 1000);
        assert!((59..=60).contains(&ticks), "ran {} ticks", ticks);
        assert_eq!(engine.session().status(), SessionStatus::Active);
    }

    #[test]
    fn winning_hold_mission_is_saved_and_ends() {
        let mock = MockFilesystem::new();
        let mut engine = Engine::new(fast_config(), mock.boxed(), quit_flag()).unwrap();
        run(&mut engine, 60 * 180);
        assert_eq!(engine.session().status(), SessionStatus::Won);
        let scores = engine.high_scores().unwrap();
        assert_eq!(scores.entries().len(), 1);
        assert_eq!(scores.entries()[0].sponsor, "NASA");
        assert!(mock.contents("scores.json").unwrap().contains("NASA"));
    }

    #[test]
    fn tour_restarts_with_next_point() {
        let mut conf = fast_config();
        conf.engine.autopilot = AutopilotScheme::Tour;
        let mut engine = Engine::new(conf, MockFilesystem::new().boxed(), quit_flag()).unwrap();
        let mut restarted = false;
        for _ in 0..(60 * 180) {
            assert!(engine.tick());
            if engine.high_scores().unwrap().entries().len() == 1 {
                restarted = true;
                break;
            }
        }
        assert!(restarted);
        assert_eq!(engine.session().status(), SessionStatus::Active);
        assert_eq!(engine.autopilot.target(), LagrangePointName::L5);
    }

    #[test]
    fn read_only_score_file_is_not_fatal() {
        let mut engine = Engine::new(
            fast_config(),
            MockFilesystem::new().read_only().boxed(),
            quit_flag(),
        )
        .unwrap();
        run(&mut engine, 60 * 180);
        assert_eq!(engine.session().status(), SessionStatus::Won);
    }

    #[test]
    fn frames_are_written_as_json_lines() {
        let buffer = SharedBuffer::default();
        let mut conf = fast_config();
        conf.engine.max_game_time = Some(0.04);
        let mut engine = Engine::new(conf, MockFilesystem::new().boxed(), quit_flag())
            .unwrap()
            .with_frame_output(Box::new(buffer.clone()));
        run(&mut engine, 100);
        let text = String::from_utf8(buffer.0.borrow().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let frame: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(frame["sponsor"], "NASA");
        }
    }
}
