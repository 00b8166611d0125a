use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidGridSize { width: i32, height: i32 },
    StartOutOfBounds { x: i32, y: i32 },
    InvalidInitialLength(usize),
    BodyOutOfBounds { length: usize, start_y: i32 },
    NoRoomForFood,
    InvalidMoveRate,
    Io(String),
    Serialize(String),
    Deserialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidGridSize { width, height } => {
                write!(f, "Grid size must be positive, got {}x{}", width, height)
            }
            ConfigError::StartOutOfBounds { x, y } => {
                write!(f, "Start position ({}, {}) is outside the grid", x, y)
            }
            ConfigError::InvalidInitialLength(length) => {
                write!(f, "Initial body length must be at least 1, got {}", length)
            }
            ConfigError::BodyOutOfBounds { length, start_y } => write!(
                f,
                "Initial body of length {} does not fit below start row {}",
                length, start_y
            ),
            ConfigError::NoRoomForFood => write!(f, "Initial body leaves no free cell for food"),
            ConfigError::InvalidMoveRate => write!(f, "Move rate must be greater than zero"),
            ConfigError::Io(e) => write!(f, "Config file error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::Deserialize(e) => write!(f, "Failed to deserialize config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError>;
    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError> {
        serde_yaml_ng::to_string(config).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError> {
        serde_yaml_ng::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(self.file_path.as_str(), content)?;
        Ok(())
    }
}

/// Loads and stores a validated config. A missing source yields
/// `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    _config: PhantomData<TConfig>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            _config: PhantomData,
        }
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let serialized = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&serialized)
    }
}
