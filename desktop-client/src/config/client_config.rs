use common::config::Validate;
use common::games::tictactoe::Mark;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_client.yaml";

pub const MIN_CELL_SIZE: f32 = 60.0;
pub const MAX_CELL_SIZE: f32 = 200.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct ClientConfig {
    pub human_mark: Mark,
    pub cell_size: f32,
    pub highlight_hover: bool,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("Human mark must be X or O".to_string());
        }
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(format!(
                "Cell size must be between {} and {}, got {}",
                MIN_CELL_SIZE, MAX_CELL_SIZE, self.cell_size
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            cell_size: 100.0,
            highlight_hover: true,
        }
    }
}

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer>;

pub fn get_config_manager(path: &str) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_mark_rejected() {
        let config = ClientConfig {
            human_mark: Mark::Empty,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cell_size_bounds() {
        let small = ClientConfig {
            cell_size: 10.0,
            ..ClientConfig::default()
        };
        let large = ClientConfig {
            cell_size: 500.0,
            ..ClientConfig::default()
        };
        assert!(small.validate().is_err());
        assert!(large.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: ClientConfig = YamlConfigSerializer.deserialize("human_mark: O\n").unwrap();
        assert_eq!(config.human_mark, Mark::O);
        assert_eq!(config.cell_size, 100.0);
        assert!(config.highlight_hover);
    }
}
