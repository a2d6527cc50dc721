use std::fs;
use std::path::Path;

use anyhow::Context;
use tambola_core::{ColumnCoverage, SessionConfig};

/// Overrides taken from the command line, applied on top of the settings file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub player: Option<String>,
    pub tickets: Option<usize>,
    pub every_column: bool,
    pub max_attempts: Option<u16>,
}

pub fn load(path: Option<&Path>, overrides: Overrides) -> anyhow::Result<SessionConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read settings from {}", path.display()))?;
            parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))?
        }
        None => SessionConfig::default(),
    };

    if let Some(player) = overrides.player {
        config.player_name = Some(player);
    }
    if let Some(tickets) = overrides.tickets {
        config.ticket_count = tickets;
    }
    if overrides.every_column {
        config.generation.coverage = ColumnCoverage::EveryColumn;
    }
    if let Some(max_attempts) = overrides.max_attempts {
        config.generation.max_attempts = max_attempts;
    }

    config.validate()?;
    log::debug!("settings: {:?}", config);
    Ok(config)
}

fn parse(text: &str) -> anyhow::Result<SessionConfig> {
    Ok(toml::from_str(text)?)
}
