//! Config Command
//!
//! Manage WebHunt configuration.
//!
//! Usage:
//!   webhunt config show [-g] [-f text|json]
//!   webhunt config path
//!   webhunt config init [-g] [--force]

use crate::config::ConfigLoader;
use crate::export::ExportFormat;
use crate::types::Result;

/// Show configuration
pub fn show(global: bool, format: ExportFormat) -> Result<()> {
    if global {
        match ConfigLoader::global_config_path() {
            Some(global_path) if global_path.exists() => {
                let content = std::fs::read_to_string(&global_path)?;
                println!("# Global Config: {}\n", global_path.display());
                println!("{}", content);
            }
            Some(_) => {
                println!("No global config found.");
                println!("Run 'webhunt config init --global' to create one.");
            }
            None => println!("Cannot determine global config directory."),
        }
    } else {
        // Merged effective config
        ConfigLoader::show_config(format == ExportFormat::Json)?;
    }
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global configuration
pub fn init_global(force: bool) -> Result<()> {
    let config_path = ConfigLoader::init_global(force)?;
    println!("✓ Initialized global configuration");
    println!("  Config: {}", config_path.display());
    Ok(())
}

/// Initialize project configuration
pub fn init_project(force: bool) -> Result<()> {
    let config_path = ConfigLoader::init_project(force)?;
    println!("✓ Initialized project configuration");
    println!("  Config: {}", config_path.display());
    Ok(())
}
