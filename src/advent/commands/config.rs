use crate::commands::{CmdMessage, CmdResult};
use crate::config::AdventConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = AdventConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = AdventConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = AdventConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            if key == "days" {
                result.add_message(CmdMessage::info(
                    "Applies to new calendars; use `advent resize` to change the current one.",
                ));
            }
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_persists_and_reports() {
        let temp = TempDir::new().unwrap();
        let result = run(
            temp.path(),
            ConfigAction::Set("days".into(), "12".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "days set to 12");
        assert_eq!(AdventConfig::load(temp.path()).unwrap().days, 12);
    }

    #[test]
    fn unknown_key_is_error_message() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);

        let result = run(
            temp.path(),
            ConfigAction::Set("colour".into(), "red".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }

    #[test]
    fn show_all_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let result = run(temp.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), AdventConfig::default());
    }
}
