use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ShelfConfig, ShelfPaths};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &ShelfPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShelfConfig::load(&paths.config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> ShelfPaths {
        ShelfPaths {
            config_dir: dir.path().join("config"),
            data_dir: dir.path().join("data"),
        }
    }

    #[test]
    fn set_persists() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);
        run(
            &paths,
            ConfigAction::Set("recent-count".into(), "5".into()),
        )
        .unwrap();

        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().recent_count, 5);
    }

    #[test]
    fn show_key() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("keep-corrupt".into())).unwrap();
        assert_eq!(result.messages[0].content, "keep-corrupt = true");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(run(&paths(&dir), ConfigAction::ShowKey("colour".into())).is_err());
        assert!(run(
            &paths(&dir),
            ConfigAction::Set("colour".into(), "blue".into())
        )
        .is_err());
    }
}
