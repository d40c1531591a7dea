use super::*;

/// Parameters to create an engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The number of in-game seconds before the engine exits
    pub max_game_time: Option<f64>,
    /// Ticks per wall-clock second, 0 to run as fast as possible
    pub tick_rate: f64,
    pub sponsor: String,
    /// TOML file with extra sponsors
    pub sponsors_file: Option<String>,
    /// JSON file mission results are saved to
    pub score_file: Option<String>,
    pub autopilot: AutopilotScheme,
    pub autopilot_target: LagrangePointName,
    /// If to write every frame to stdout as a line of JSON
    pub print_frames: bool,
}

/// Simulated seconds per tick when the tick rate does not say
const NOMINAL_TICK_RATE: f64 = 60.0;

impl EngineConfig {
    /// Simulated seconds each tick advances the game by
    pub fn dt(&self) -> f64 {
        if self.tick_rate > 0.0 {
            1.0 / self.tick_rate
        } else {
            1.0 / NOMINAL_TICK_RATE
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_game_time: None,
            tick_rate: NOMINAL_TICK_RATE,
            sponsor: "NASA".to_string(),
            sponsors_file: None,
            score_file: None,
            autopilot: AutopilotScheme::Hold,
            autopilot_target: LagrangePointName::L4,
            print_frames: false,
        }
    }
}

/// An empty string turns an optional path off
fn optional_path(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Applied in order of returned vec (NOT in the order the user specifies the entry). All entries
/// are always applied.
pub fn engine_config_entries() -> Vec<Box<dyn ConfigEntry>> {
    vec![
        <dyn ConfigEntry>::new_float(
            "max_game_seconds",
            "seconds of game time to run before exiting, or 0 to run until the game ends",
            60.0 * 60.0,
            |conf, time, source| {
                if time > 0.0 {
                    conf.engine.max_game_time = Some(time);
                    Ok(())
                } else if time == 0.0 {
                    conf.engine.max_game_time = None;
                    Ok(())
                } else {
                    Err(format!(
                        "{} should not be negative",
                        source.unwrap_or("max_game_seconds")
                    )
                    .into())
                }
            },
        ),
        <dyn ConfigEntry>::new_float(
            "tick_rate",
            "ticks per second, or 0 to simulate as fast as possible",
            NOMINAL_TICK_RATE,
            |conf, rate, source| {
                if rate >= 0.0 && rate.is_finite() {
                    conf.engine.tick_rate = rate;
                    Ok(())
                } else {
                    Err(format!(
                        "{} should be a positive number or 0",
                        source.unwrap_or("tick_rate")
                    )
                    .into())
                }
            },
        ),
        <dyn ConfigEntry>::new_string(
            "sponsor",
            "key of the sponsor funding the mission (NASA, ESA, SpaceX or one from the sponsors file)",
            "NASA",
            |conf, key, source| {
                if key.trim().is_empty() {
                    Err(format!("{} should name a sponsor", source.unwrap_or("sponsor")).into())
                } else {
                    conf.engine.sponsor = key.trim().to_string();
                    Ok(())
                }
            },
        ),
        <dyn ConfigEntry>::new_string(
            "sponsors_file",
            "TOML file with extra [[sponsor]] profiles, or empty for only the built in ones",
            "",
            |conf, path, _| {
                conf.engine.sponsors_file = optional_path(path);
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_string(
            "score_file",
            "JSON file to keep the best mission results in, or empty to not keep them",
            "lagrange_scores.json",
            |conf, path, _| {
                conf.engine.score_file = optional_path(path);
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_enum(
            "autopilot",
            "what flies the probe",
            vec![
                <dyn ConfigEntry>::new_enum_variant(
                    "hold",
                    "fly to the target point and balance there",
                    |conf| conf.engine.autopilot = AutopilotScheme::Hold,
                ),
                <dyn ConfigEntry>::new_enum_variant(
                    "tour",
                    "balance at every point in turn, restarting after each win",
                    |conf| conf.engine.autopilot = AutopilotScheme::Tour,
                ),
                <dyn ConfigEntry>::new_enum_variant(
                    "off",
                    "leave the probe to drift",
                    |conf| conf.engine.autopilot = AutopilotScheme::Off,
                ),
            ],
        ),
        <dyn ConfigEntry>::new_string(
            "autopilot_target",
            "Lagrange point (L1 to L5) the autopilot flies to first",
            "L4",
            |conf, name, source| {
                conf.engine.autopilot_target = name
                    .parse()
                    .map_err(|e| format!("{}: {}", source.unwrap_or("autopilot_target"), e))?;
                Ok(())
            },
        ),
        <dyn ConfigEntry>::new_bool(
            "print_frames",
            "write every frame to stdout as a line of JSON",
            false,
            |conf, print, _| {
                conf.engine.print_frames = print;
                Ok(())
            },
        ),
    ]
}
