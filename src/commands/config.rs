//! Config subcommands handler

use anyhow::Result;

use scriptlog::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    println!("{}", render(&config)?);
    Ok(())
}

/// Print where the configuration file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    let note = if path.exists() { "" } else { " (not created, using defaults)" };
    println!("{}{}", path.display(), note);
    Ok(())
}

fn render(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
