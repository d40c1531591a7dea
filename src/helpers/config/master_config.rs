use super::*;

/// Configuration for the whole lagrange-probe program
#[derive(Debug, Clone)]
pub struct MasterConfig {
    /// If to exit successfully without playing (for example, after showing --help)
    pub happy_exit: bool,
    pub engine: EngineConfig,
    pub sim: SimConfig,
}

impl Default for MasterConfig {
    /// NOTE: the configuration you get when you run the program is determined by
    /// config_entries(). This is only the starting point those entries are applied to.
    fn default() -> Self {
        Self {
            happy_exit: false,
            engine: EngineConfig::default(),
            sim: SimConfig::default(),
        }
    }
}
