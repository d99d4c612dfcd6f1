use std::fmt;

use serde::Serialize;
use serde_json::Number;

/// Temperature in Celsius, exactly as the unit reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    pub fn from_celsius(c: f64) -> Self {
        Self(c)
    }

    pub fn celsius(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}\u{00b0}C", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacMode {
    HeatCool,
    Off,
    FanOnly,
}

impl HvacMode {
    pub fn as_host_str(&self) -> &'static str {
        match self {
            HvacMode::HeatCool => "heat_cool",
            HvacMode::Off => "off",
            HvacMode::FanOnly => "fan_only",
        }
    }

    pub fn from_host_str(s: &str) -> Option<Self> {
        match s {
            "heat_cool" => Some(HvacMode::HeatCool),
            "off" => Some(HvacMode::Off),
            "fan_only" => Some(HvacMode::FanOnly),
            _ => None,
        }
    }
}

pub const SUPPORTED_HVAC_MODES: [HvacMode; 3] =
    [HvacMode::HeatCool, HvacMode::Off, HvacMode::FanOnly];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HvacAction {
    #[default]
    Off,
    Heating,
    Idle,
}

impl HvacAction {
    pub fn as_host_str(&self) -> &'static str {
        match self {
            HvacAction::Off => "off",
            HvacAction::Heating => "heating",
            HvacAction::Idle => "idle",
        }
    }
}

/// Raw `fan_power_req` value (a percentage), surfaced as the fan mode.
/// Kept as the JSON number the unit sent, so `45` stays `45`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FanLevel(Number);

impl FanLevel {
    pub fn new(value: impl Into<Number>) -> Self {
        Self(value.into())
    }

    /// `None` for NaN or infinite values.
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self)
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }

    pub fn value(&self) -> f64 {
        self.0.as_f64().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for FanLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Labels offered to fan-mode selectors. These do not correspond to
/// `FanLevel` values; the unit only reports a percentage.
pub const FAN_MODES: [&str; 5] = ["on_low", "on_high", "auto_low", "auto_high", "off"];

/// Last successfully parsed `ui_info` document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceSnapshot {
    pub setpoint: Option<Temperature>,
    pub supply_temperature: Option<Temperature>,
    pub inside_temperature: Option<Temperature>,
    pub outside_temperature: Option<Temperature>,
    pub exhaust_temperature: Option<Temperature>,
    pub fan_level: Option<FanLevel>,
    /// Not mapped from `ui_info`; stays `None`.
    pub mode: Option<i64>,
    /// Not mapped from `ui_info`; stays `None`.
    pub active: Option<bool>,
}

impl DeviceSnapshot {
    pub fn hvac_action(&self) -> HvacAction {
        match self.mode {
            None | Some(0) => HvacAction::Off,
            Some(_) if self.active.unwrap_or(false) => HvacAction::Heating,
            Some(_) => HvacAction::Idle,
        }
    }
}

/// Options accepted by `set_temperature`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SetTemperature {
    pub temperature: Option<Temperature>,
}

impl SetTemperature {
    pub fn temperature(temp: Temperature) -> Self {
        Self {
            temperature: Some(temp),
        }
    }
}
