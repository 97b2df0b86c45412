pub mod app_config;
pub mod config;
pub mod display;
pub mod record;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use display::{DisplayRecord, ResultSet, COLUMN_LABELS, SHEET_NAME, SOURCE_FIELDS};
pub use record::{FieldValue, RawRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
