use std::fs;

use anyhow::{Context, Ok, Result};

use super::super::args::InitCommand;
use super::helper::finish;
use super::{CommandKind, CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(cmd: InitCommand) -> Result<CommandResult> {
    let config_path = cmd.path.join(CONFIG_FILE_NAME);

    let created = if config_path.exists() {
        false
    } else {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        true
    };

    Ok(finish(
        CommandKind::Init,
        CommandSummary::Init(InitSummary {
            path: config_path,
            created,
        }),
        Vec::new(),
        0,
        0,
        true,
    ))
}
