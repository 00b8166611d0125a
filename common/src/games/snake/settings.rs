use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSessionSettings {
    pub field_width: i32,
    pub field_height: i32,
    pub start_x: i32,
    pub start_y: i32,
    /// Segments laid out straight down from the start cell, head first.
    pub initial_length: usize,
    pub move_rate_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SnakeSessionSettings {
    pub fn move_rate(&self) -> Duration {
        Duration::from_millis(self.move_rate_ms)
    }

    pub fn config_manager(
        path: &str,
    ) -> ConfigManager<FileContentConfigProvider, SnakeSessionSettings, YamlConfigSerializer> {
        ConfigManager::from_yaml_file(path)
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0 || self.field_height <= 0 {
            return Err(ConfigError::InvalidGridSize {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !(0..self.field_width).contains(&self.start_x) || !(0..self.field_height).contains(&self.start_y) {
            return Err(ConfigError::StartOutOfBounds {
                x: self.start_x,
                y: self.start_y,
            });
        }
        if self.initial_length == 0 {
            return Err(ConfigError::InvalidInitialLength(self.initial_length));
        }
        if self.initial_length > self.start_y as usize + 1 {
            return Err(ConfigError::BodyOutOfBounds {
                length: self.initial_length,
                start_y: self.start_y,
            });
        }
        if self.initial_length >= (self.field_width as usize) * (self.field_height as usize) {
            return Err(ConfigError::NoRoomForFood);
        }
        if self.move_rate_ms == 0 {
            return Err(ConfigError::InvalidMoveRate);
        }
        Ok(())
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            start_x: 10,
            start_y: 10,
            initial_length: 2,
            move_rate_ms: 500,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_session_settings_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    fn with(update: impl FnOnce(&mut SnakeSessionSettings)) -> SnakeSessionSettings {
        let mut settings = SnakeSessionSettings::default();
        update(&mut settings);
        settings
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSessionSettings::default().validate().is_ok());
        assert_eq!(SnakeSessionSettings::default().move_rate(), Duration::from_millis(500));
    }

    #[test]
    fn test_validate_rejects_bad_grid() {
        let settings = with(|s| s.field_width = 0);
        assert_eq!(
            settings.validate(),
            Err(ConfigError::InvalidGridSize { width: 0, height: 20 })
        );
        assert!(with(|s| s.field_height = -3).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_start_outside_grid() {
        assert_eq!(
            with(|s| s.start_x = 20).validate(),
            Err(ConfigError::StartOutOfBounds { x: 20, y: 10 })
        );
        assert!(with(|s| s.start_y = -1).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_body_below_grid() {
        assert_eq!(
            with(|s| s.start_y = 0).validate(),
            Err(ConfigError::BodyOutOfBounds { length: 2, start_y: 0 })
        );
        assert!(with(|s| {
            s.start_y = 0;
            s.initial_length = 1;
        })
        .validate()
        .is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_length_and_rate() {
        assert_eq!(
            with(|s| s.initial_length = 0).validate(),
            Err(ConfigError::InvalidInitialLength(0))
        );
        assert_eq!(with(|s| s.move_rate_ms = 0).validate(), Err(ConfigError::InvalidMoveRate));
    }

    #[test]
    fn test_validate_requires_room_for_food() {
        let settings = SnakeSessionSettings {
            field_width: 1,
            field_height: 2,
            start_x: 0,
            start_y: 1,
            initial_length: 2,
            move_rate_ms: 100,
            seed: None,
        };
        assert_eq!(settings.validate(), Err(ConfigError::NoRoomForFood));
    }

    #[test]
    fn test_settings_can_be_serialized_and_deserialized_string() {
        let settings = with(|s| s.seed = Some(1234));
        let serializer = YamlConfigSerializer::new();
        let serialized: String = serializer.serialize(&settings).unwrap();
        let deserialized: SnakeSessionSettings = serializer.deserialize(&serialized).unwrap();
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_seed_is_optional_in_yaml() {
        let yaml = "field_width: 8\nfield_height: 6\nstart_x: 3\nstart_y: 3\ninitial_length: 2\nmove_rate_ms: 250\n";
        let serializer = YamlConfigSerializer::new();
        let settings: SnakeSessionSettings = serializer.deserialize(yaml).unwrap();
        assert_eq!(settings.seed, None);
        assert_eq!(settings.field_width, 8);
    }

    #[test]
    fn test_settings_can_be_serialized_and_deserialized_manager() {
        let file_path = get_temp_file_path();
        let manager = SnakeSessionSettings::config_manager(&file_path);

        let settings = with(|s| {
            s.field_width = 12;
            s.seed = Some(9);
        });
        manager.set_config(&settings).unwrap();
        let loaded = manager.get_config().unwrap();
        assert_eq!(settings, loaded);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let manager = SnakeSessionSettings::config_manager(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), SnakeSessionSettings::default());
    }

    #[test]
    fn test_invalid_file_content_is_rejected() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        let invalid = with(|s| s.move_rate_ms = 0);
        let serialized = serde_yaml_ng::to_string(&invalid).unwrap();
        provider.set_config_content(&serialized).unwrap();

        let manager = SnakeSessionSettings::config_manager(&file_path);
        assert_eq!(manager.get_config(), Err(ConfigError::InvalidMoveRate));

        provider.set_config_content("field_width: [").unwrap();
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_set_config_validates_before_writing() {
        let file_path = get_temp_file_path();
        let manager = SnakeSessionSettings::config_manager(&file_path);
        assert!(manager.set_config(&with(|s| s.initial_length = 0)).is_err());
        assert!(!std::path::Path::new(&file_path).exists());
    }
}
