mod client_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use client_config::{
    ClientConfig, ClientConfigManager, DEFAULT_CONFIG_PATH, MAX_CELL_SIZE, MIN_CELL_SIZE,
    get_config_manager,
};
