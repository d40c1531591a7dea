use super::*;

/// Get the configuration from lagrange.toml (if it exists) and the command line
pub fn build_config() -> Result<MasterConfig, Box<dyn Error>> {
    build_config_with(real_filesystem(), std::env::args().collect())
}

/// Command line arguments take precedence over the TOML file, which takes precedence over the
/// defaults
pub fn build_config_with(fs: Filesystem, args: Vec<String>) -> Result<MasterConfig, Box<dyn Error>> {
    let mut builder = ConfigBuilder::new(config_entries());
    if fs.is_file(DEFAULT_TOML_PATH) {
        load_toml(DEFAULT_TOML_PATH, &mut builder, &fs)?;
    }
    parse_args(&mut builder, args)?;
    let mut conf = MasterConfig::default();
    builder.apply_to(&mut conf)?;
    if conf.happy_exit {
        println!("{}", builder.help_text());
    }
    Ok(conf)
}
