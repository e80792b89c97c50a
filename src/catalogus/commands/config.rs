use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::settings::Settings;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(settings_file: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut settings = Settings::load(settings_file)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_settings(settings)),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match settings.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            if let Err(e) = settings.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            settings.save(settings_file)?;
            let display_val = settings.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result.with_settings(settings))
        }
    }
}
