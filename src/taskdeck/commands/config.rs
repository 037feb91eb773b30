use crate::commands::{CmdMessage, CmdResult};
use crate::config::TaskdeckConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or changes configuration values stored under `config_dir`.
///
/// Bad keys or values come back as an error message, not an `Err`; only
/// failing to read or write the config file aborts the command.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TaskdeckConfig::load(config_dir)?;

    let outcome = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => config.get(&key).map(CmdMessage::info),
        ConfigAction::Set(key, value) => {
            let assigned = config.set(&key, &value);
            if assigned.is_ok() {
                config.save(config_dir)?;
            }
            assigned
                .and_then(|()| config.get(&key))
                .map(|stored| CmdMessage::success(format!("{} set to {}", key, stored)))
        }
    };

    let mut result = CmdResult::default().with_config(config);
    result.add_message(outcome.unwrap_or_else(|e| CmdMessage::error(e.to_string())));
    Ok(result)
}
