use std::ops::BitOr;

use serde::Serialize;

use crate::types::{FanLevel, HvacAction, HvacMode, Temperature};

/// Climate feature flags advertised to the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SupportedFeatures(u32);

impl SupportedFeatures {
    pub const TARGET_TEMPERATURE: Self = Self(1);
    pub const FAN_MODE: Self = Self(8);

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SupportedFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "\u{00b0}C")]
    Celsius,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ExtraAttributes {
    pub inside_temperature: Option<Temperature>,
    pub outside_temperature: Option<Temperature>,
    pub exhaust_temperature: Option<Temperature>,
}

/// Everything the host renders for the entity, as of the last refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateState {
    pub name: String,
    pub current_temperature: Option<Temperature>,
    pub target_temperature: Option<Temperature>,
    pub hvac_mode: HvacMode,
    pub hvac_modes: Vec<HvacMode>,
    pub hvac_action: HvacAction,
    pub fan_mode: Option<FanLevel>,
    pub fan_modes: Vec<&'static str>,
    pub attributes: ExtraAttributes,
    pub supported_features: SupportedFeatures,
    pub temperature_unit: TemperatureUnit,
}
