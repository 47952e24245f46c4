use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let exists = path.exists();
    let config = Config::load_existing(&path)?;

    let origin = if exists { "" } else { " (not created yet, showing defaults)" };
    println!("{} {}{}", "Config:".bold(), path.display(), origin.dimmed());
    println!();
    print!("{}", serde_yaml::to_string(&config.resolved()?)?);
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    // min_step_ms above max_step_ms is only caught once both are known.
    config.timing()?;
    let path = config.save()?;
    println!(
        "{} Set {} = {} in {}",
        "✓".green(),
        key.bold(),
        value,
        path.display()
    );
    Ok(())
}
