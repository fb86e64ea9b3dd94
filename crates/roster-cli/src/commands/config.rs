use anyhow::Result;
use colored::Colorize;

use roster_core::config::DashboardConfig;
use roster_infrastructure::ConfigService;

pub fn init(service: &ConfigService) -> Result<()> {
    if service.init()? {
        println!("Created {}", service.path().display());
    } else {
        println!(
            "{} {}",
            "Config already exists:".yellow(),
            service.path().display()
        );
    }
    Ok(())
}

/// Prints the effective config, environment overrides included.
pub fn show(service: &ConfigService, config: &DashboardConfig) -> Result<()> {
    println!("{}", format!("# {}", service.path().display()).dimmed());
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
