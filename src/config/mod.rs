//! Configuration loading.

mod settings;

pub use settings::{
    expand_env_vars, DatasetSettings, DisplaySettings, Settings, SettingsError,
    DEFAULT_CONFIG_FILE,
};
