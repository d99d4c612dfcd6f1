mod client;
mod config;
mod diff;
mod entity;
mod error;
mod logger;
mod protocol;
mod types;

pub use client::{AtreaClient, AtreaClientBuilder};
pub use config::{AdapterConfig, DEFAULT_NAME};
pub use entity::{ClimateState, ExtraAttributes, SupportedFeatures, TemperatureUnit};
pub use error::{Error, Result};
pub use logger::MessageLogMode;
pub use protocol::{parse_ui_info, PING_PATH, UI_INFO_PATH};
pub use types::*;
