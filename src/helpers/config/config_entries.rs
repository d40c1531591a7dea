use super::*;

/// These entries will be applied in order of returned vec (NOT in the order the user specifies
/// them). All entries are always applied.
pub fn config_entries() -> Vec<Box<dyn ConfigEntry>> {
    let mut entries = vec![<dyn ConfigEntry>::new_bool(
        "help",
        "show this message and exit",
        false,
        |conf, show_help, _| {
            conf.happy_exit = show_help;
            Ok(())
        },
    )];
    entries.extend(engine_config_entries());
    entries.extend(sim_config_entries());
    entries
}
