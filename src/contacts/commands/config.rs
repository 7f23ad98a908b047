use crate::commands::{CmdMessage, CmdResult, ContactsPaths};
use crate::config::ContactsConfig;
use crate::error::{ContactError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &ContactsPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = ContactsConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ContactsConfig::load(dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| ContactError::InvalidInput(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = ContactsConfig::load(dir)?;
            config.set(&key, &value).map_err(ContactError::InvalidInput)?;
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DATA_FILE_KEY;

    fn paths(dir: &tempfile::TempDir) -> ContactsPaths {
        ContactsPaths {
            config_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(&dir);

        run(
            &paths,
            ConfigAction::Set(DATA_FILE_KEY.into(), "people.txt".into()),
        )
        .unwrap();
        let shown = run(&paths, ConfigAction::ShowKey(DATA_FILE_KEY.into())).unwrap();

        assert_eq!(shown.messages[0].content, "people.txt");
    }

    #[test]
    fn unknown_key_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &paths(&dir),
            ConfigAction::Set("colour".into(), "red".into()),
        )
        .unwrap_err();
        assert!(matches!(err, ContactError::InvalidInput(_)));
        assert!(!dir.path().join("contacts.json").exists());

        let err = run(&paths(&dir), ConfigAction::ShowKey("colour".into())).unwrap_err();
        assert!(matches!(err, ContactError::InvalidInput(msg) if msg.contains("colour")));
    }

    #[test]
    fn show_all_returns_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ContactsConfig::default()));
    }
}
