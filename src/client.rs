use tracing::{debug, trace};

use crate::config::{AdapterConfig, DEFAULT_NAME};
use crate::entity::{ClimateState, ExtraAttributes, SupportedFeatures, TemperatureUnit};
use crate::logger::{MessageLogMode, MessageLogger};
use crate::protocol::{parse_ui_info, PING_PATH, UI_INFO_PATH};
use crate::types::*;
use crate::Result;

pub struct AtreaClientBuilder {
    host: String,
    name: String,
    protocol: String,
    credentials: Option<(String, String)>,
    log_mode: Option<MessageLogMode>,
    log_path: Option<String>,
}

impl AtreaClientBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            name: DEFAULT_NAME.to_string(),
            protocol: "http".to_string(),
            credentials: None,
            log_mode: None,
            log_path: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Stored with the client. The unit's `ui_info` and `ping` endpoints
    /// are unauthenticated, so they are not sent.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    pub fn protocol(mut self, proto: &str) -> Self {
        self.protocol = proto.to_string();
        self
    }

    pub fn message_log(mut self, mode: MessageLogMode, path: impl Into<String>) -> Self {
        self.log_mode = Some(mode);
        self.log_path = Some(path.into());
        self
    }

    /// Build the client and check the unit answers `/api/ping`.
    /// No client is returned if it does not.
    pub async fn connect(self) -> Result<AtreaClient> {
        let http = reqwest::Client::builder().build()?;

        let logger = match (self.log_mode, self.log_path) {
            (Some(mode), Some(path)) => Some(MessageLogger::new(mode, &path)?),
            _ => None,
        };

        let mut client = AtreaClient {
            http,
            base_url: format!("{}://{}", self.protocol, self.host),
            host: self.host,
            name: self.name,
            credentials: self.credentials,
            snapshot: DeviceSnapshot::default(),
            logger,
        };
        client.ping().await?;
        Ok(client)
    }
}

/// One Atrea unit exposed as a climate entity.
///
/// State only changes through [`AtreaClient::refresh`]; every accessor reads
/// the snapshot taken by the last successful refresh.
pub struct AtreaClient {
    http: reqwest::Client,
    base_url: String,
    host: String,
    name: String,
    credentials: Option<(String, String)>,
    snapshot: DeviceSnapshot,
    logger: Option<MessageLogger>,
}

impl AtreaClient {
    pub fn builder(host: impl Into<String>) -> AtreaClientBuilder {
        AtreaClientBuilder::new(host)
    }

    /// Validate `config`, then connect as [`AtreaClientBuilder::connect`] does.
    pub async fn from_config(config: &AdapterConfig) -> Result<Self> {
        config.validate()?;
        let mut builder = Self::builder(config.host.clone()).name(config.name.clone());
        if let Some((username, password)) = config.credentials() {
            builder = builder.credentials(username, password);
        }
        builder.connect().await
    }

    async fn ping(&mut self) -> Result<()> {
        let url = format!("{}{}", self.base_url, PING_PATH);
        debug!(url = %url, "pinging Atrea unit");
        self.get_logged(&url, PING_PATH).await?;
        Ok(())
    }

    /// GET `url`, log the response whatever its status, then fail on a
    /// non-success status.
    async fn get_logged(&mut self, url: &str, path: &str) -> Result<String> {
        if let Some(ref mut logger) = self.logger {
            logger.log_request("GET", path);
        }

        let resp = self.http.get(url).send().await?;
        let status_check = resp.error_for_status_ref().map(|_| ());
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        if let Some(ref mut logger) = self.logger {
            logger.log_response(path, status, &body);
        }

        status_check?;
        Ok(body)
    }

    /// Fetch `/api/ui_info` and replace the snapshot. On any error the
    /// previous snapshot is kept as it was.
    pub async fn refresh(&mut self) -> Result<()> {
        let url = format!("{}{}", self.base_url, UI_INFO_PATH);
        debug!(url = %url, "fetching ui_info");
        let body = self.get_logged(&url, UI_INFO_PATH).await?;

        let snapshot = parse_ui_info(&body)?;
        trace!(?snapshot, "ui_info parsed");
        self.snapshot = snapshot;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(|(u, _)| u.as_str())
    }

    pub fn snapshot(&self) -> &DeviceSnapshot {
        &self.snapshot
    }

    /// Supply air temperature.
    pub fn current_temperature(&self) -> Option<Temperature> {
        self.snapshot.supply_temperature
    }

    pub fn target_temperature(&self) -> Option<Temperature> {
        self.snapshot.setpoint
    }

    pub fn fan_mode(&self) -> Option<FanLevel> {
        self.snapshot.fan_level.clone()
    }

    pub fn fan_modes(&self) -> &'static [&'static str] {
        &FAN_MODES
    }

    pub fn hvac_action(&self) -> HvacAction {
        self.snapshot.hvac_action()
    }

    /// Always `HeatCool`; the unit's operating mode is not mapped.
    pub fn hvac_mode(&self) -> HvacMode {
        HvacMode::HeatCool
    }

    pub fn hvac_modes(&self) -> &'static [HvacMode] {
        &SUPPORTED_HVAC_MODES
    }

    pub fn extra_state_attributes(&self) -> ExtraAttributes {
        ExtraAttributes {
            inside_temperature: self.snapshot.inside_temperature,
            outside_temperature: self.snapshot.outside_temperature,
            exhaust_temperature: self.snapshot.exhaust_temperature,
        }
    }

    pub fn supported_features(&self) -> SupportedFeatures {
        SupportedFeatures::TARGET_TEMPERATURE | SupportedFeatures::FAN_MODE
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        TemperatureUnit::Celsius
    }

    pub fn state(&self) -> ClimateState {
        ClimateState {
            name: self.name.clone(),
            current_temperature: self.current_temperature(),
            target_temperature: self.target_temperature(),
            hvac_mode: self.hvac_mode(),
            hvac_modes: self.hvac_modes().to_vec(),
            hvac_action: self.hvac_action(),
            fan_mode: self.fan_mode(),
            fan_modes: self.fan_modes().to_vec(),
            attributes: self.extra_state_attributes(),
            supported_features: self.supported_features(),
            temperature_unit: self.temperature_unit(),
        }
    }

    // -- Command methods --
    // The unit's write API is not wired up yet; both calls are accepted and dropped.

    pub fn set_hvac_mode(&mut self, mode: HvacMode) -> Result<()> {
        debug!(mode = mode.as_host_str(), "set_hvac_mode ignored");
        Ok(())
    }

    pub fn set_temperature(&mut self, options: SetTemperature) -> Result<()> {
        debug!(temperature = ?options.temperature, "set_temperature ignored");
        Ok(())
    }
}
