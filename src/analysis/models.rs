use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder value for a parameter that has never been set
pub const UNSET_PARAM_VALUE: &str = "-";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Device identity as carried through the work queue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceRef {
    pub id: String,
    pub name: String,
}

impl From<Device> for DeviceRef {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            name: device.name,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DataPoint {
    pub variable: String,
    #[serde(default)]
    pub value: Value,
    pub time: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub sent: bool,
}

impl Parameter {
    /// A parameter record that does not exist on the device yet
    pub fn unset(key: impl Into<String>) -> Self {
        Self {
            id: None,
            key: key.into(),
            value: UNSET_PARAM_VALUE.to_string(),
            sent: false,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Parameter values must be strings; render any reading value as one.
///
/// Non-string values use their JSON spelling (`true`, `23.5`), and `null`
/// becomes the unset placeholder.
pub fn value_to_param_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => UNSET_PARAM_VALUE.to_string(),
        other => other.to_string(),
    }
}
