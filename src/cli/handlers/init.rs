use crate::config::{CONFIG_FILE_NAME, PostboardConfig};
use crate::error::PostboardError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        let path = config_path.display().to_string();
        return Err(PostboardError::AlreadyInitialized(path).into());
    }

    let config = PostboardConfig::default();
    config.save(&config_path)?;

    println!("{} postboard config in {}", "Initialized".green(), cwd.display());
    println!("  Config: {}", config_path.display());
    println!("  Server: {}:{}", config.server.host, config.server.port);

    Ok(())
}
