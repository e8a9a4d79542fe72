/// Configuration command handlers
use anyhow::Result;
use floatchat_core::{config::get_config_path, Config};

pub fn handle_config_path() -> Result<()> {
    let path = get_config_path()?;
    let state = if path.exists() { "" } else { " (not created)" };
    println!("{}{state}", path.display());
    Ok(())
}

pub fn handle_config_show(config: &Config) -> Result<()> {
    // Surface invalid classifier overrides before printing
    config.build_classifier()?;
    config.build_detector()?;
    print!("{}", config.to_toml()?);
    Ok(())
}
