use serde_json::{Number, Value};

use crate::types::{DeviceSnapshot, FanLevel, Temperature};
use crate::{Error, Result};

pub const PING_PATH: &str = "/api/ping";
pub const UI_INFO_PATH: &str = "/api/ui_info";

const TEMP_REQUEST: &str = "/result/requests/temp_request";
const FAN_POWER_REQ: &str = "/result/requests/fan_power_req";
const TEMP_SUP: &str = "/result/unit/temp_sup";
const TEMP_IDA: &str = "/result/unit/temp_ida";
const TEMP_ODA: &str = "/result/unit/temp_oda";
const TEMP_EHA: &str = "/result/unit/temp_eha";

fn number_at(doc: &Value, pointer: &str) -> Result<f64> {
    match doc.pointer(pointer) {
        Some(v) => v
            .as_f64()
            .ok_or_else(|| Error::Schema(format!("{pointer} is not a number: {v}"))),
        None => Err(Error::Schema(format!("missing {pointer}"))),
    }
}

fn raw_number_at(doc: &Value, pointer: &str) -> Result<Number> {
    match doc.pointer(pointer) {
        Some(Value::Number(n)) => Ok(n.clone()),
        Some(v) => Err(Error::Schema(format!("{pointer} is not a number: {v}"))),
        None => Err(Error::Schema(format!("missing {pointer}"))),
    }
}

fn temperature_at(doc: &Value, pointer: &str) -> Result<Temperature> {
    number_at(doc, pointer).map(Temperature::from_celsius)
}

pub fn parse_ui_info_value(doc: &Value) -> Result<DeviceSnapshot> {
    Ok(DeviceSnapshot {
        setpoint: Some(temperature_at(doc, TEMP_REQUEST)?),
        supply_temperature: Some(temperature_at(doc, TEMP_SUP)?),
        inside_temperature: Some(temperature_at(doc, TEMP_IDA)?),
        outside_temperature: Some(temperature_at(doc, TEMP_ODA)?),
        exhaust_temperature: Some(temperature_at(doc, TEMP_EHA)?),
        fan_level: Some(FanLevel::new(raw_number_at(doc, FAN_POWER_REQ)?)),
        mode: None,
        active: None,
    })
}

pub fn parse_ui_info(body: &str) -> Result<DeviceSnapshot> {
    let doc: Value = serde_json::from_str(body)
        .map_err(|e| Error::Schema(format!("ui_info is not JSON: {e}")))?;
    parse_ui_info_value(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "code": "OK",
            "error": null,
            "result": {
                "requests": {
                    "fan_power_req": 45,
                    "temp_request": 21.0,
                    "work_regime": "VENTILATION"
                },
                "states": { "active": {} },
                "unit": {
                    "fan_eta_factor": 45,
                    "fan_sup_factor": 45,
                    "mode_current": "NORMAL",
                    "season_current": "HEATING",
                    "temp_eha": 13.6,
                    "temp_eta": 20.4,
                    "temp_ida": 20.4,
                    "temp_oda": 10.0,
                    "temp_oda_mean": 9.875,
                    "temp_sup": 19.3
                }
            }
        })
    }

    #[test]
    fn maps_consumed_fields() {
        let snap = parse_ui_info(&sample().to_string()).unwrap();
        assert_eq!(snap.setpoint.unwrap().celsius(), 21.0);
        assert_eq!(snap.supply_temperature.unwrap().celsius(), 19.3);
        assert_eq!(snap.inside_temperature.unwrap().celsius(), 20.4);
        assert_eq!(snap.outside_temperature.unwrap().celsius(), 10.0);
        assert_eq!(snap.exhaust_temperature.unwrap().celsius(), 13.6);
        let fan = snap.fan_level.unwrap();
        assert_eq!(fan.value(), 45.0);
        assert!(fan.as_number().is_u64());
    }

    #[test]
    fn fractional_fan_level_kept() {
        let mut doc = sample();
        *doc.pointer_mut(FAN_POWER_REQ).unwrap() = json!(37.5);
        let snap = parse_ui_info_value(&doc).unwrap();
        assert_eq!(snap.fan_level.unwrap().to_string(), "37.5");
    }

    #[test]
    fn mode_and_active_never_mapped() {
        let snap = parse_ui_info_value(&sample()).unwrap();
        assert_eq!(snap.mode, None);
        assert_eq!(snap.active, None);
    }

    #[test]
    fn ignores_unconsumed_fields() {
        let mut doc = sample();
        let unit = doc.pointer_mut("/result/unit").unwrap().as_object_mut().unwrap();
        unit.remove("temp_eta");
        unit.remove("mode_current");
        unit.insert("new_field".into(), json!("whatever"));
        assert!(parse_ui_info_value(&doc).is_ok());
    }

    #[test]
    fn missing_field_is_schema_error() {
        for pointer in [TEMP_REQUEST, FAN_POWER_REQ, TEMP_SUP, TEMP_IDA, TEMP_ODA, TEMP_EHA] {
            let mut doc = sample();
            let (parent, key) = pointer.rsplit_once('/').unwrap();
            doc.pointer_mut(parent)
                .unwrap()
                .as_object_mut()
                .unwrap()
                .remove(key);
            let err = parse_ui_info_value(&doc).unwrap_err();
            assert!(err.is_schema_mismatch(), "{pointer}: {err}");
            assert!(err.to_string().contains(pointer));
        }
    }

    #[test]
    fn non_numeric_field_is_schema_error() {
        let mut doc = sample();
        *doc.pointer_mut(TEMP_SUP).unwrap() = json!("warm");
        let err = parse_ui_info_value(&doc).unwrap_err();
        assert!(err.is_schema_mismatch());
    }

    #[test]
    fn malformed_body_is_schema_error() {
        let err = parse_ui_info("<html>busy</html>").unwrap_err();
        assert!(err.is_schema_mismatch());
        let err = parse_ui_info("").unwrap_err();
        assert!(err.is_schema_mismatch());
    }

    #[test]
    fn error_envelope_without_result_is_schema_error() {
        let doc = json!({"code": "ERR", "error": "busy", "result": null});
        assert!(parse_ui_info_value(&doc).unwrap_err().is_schema_mismatch());
    }
}
