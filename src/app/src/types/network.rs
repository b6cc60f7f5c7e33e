use serde::{Deserialize, Deserializer, Serialize};
use serde_valid::Validate;

/// Asset key of the padlock shown next to protected networks
pub const LOCK_ICON: &str = "lock-wifi";

/// Asset key of the scan button icon
pub const SCAN_ICON: &str = "wifi-find";

/// A network reported by one scan-status response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Display name, not guaranteed unique
    pub ssid: String,
    /// Signal strength in dBm, more negative is weaker
    pub rssi: i32,
    #[serde(deserialize_with = "deserialize_protection_flag")]
    pub is_protected: bool,
}

impl Network {
    pub fn signal_bucket(&self) -> u8 {
        signal_bucket(self.rssi)
    }

    pub fn signal_icon(&self) -> String {
        signal_icon(self.signal_bucket())
    }
}

/// Map an RSSI value to a signal bucket from 0 (weakest) to 4 (strongest)
pub fn signal_bucket(rssi: i32) -> u8 {
    match rssi {
        r if r >= -50 => 4,
        r if r >= -60 => 3,
        r if r >= -70 => 2,
        r if r >= -80 => 1,
        _ => 0,
    }
}

/// Asset key of the signal icon for a bucket (e.g. "wifi-3")
pub fn signal_icon(bucket: u8) -> String {
    format!("wifi-{bucket}")
}

// The device agent prints the flag as 0/1 while other agents send real booleans.
fn deserialize_protection_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => Ok(flag),
        Flag::Int(value) => Ok(value != 0),
        Flag::Text(text) => match text.as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid protection flag: {other}"
            ))),
        },
    }
}

/// Credentials submitted to the device agent
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Credentials {
    #[validate(min_length = 1)]
    #[validate(max_length = 32)]
    pub ssid: String,
    pub password: String,
    pub is_protected: bool,
}

impl Credentials {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>, is_protected: bool) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
            is_protected,
        }
    }

    /// Encode as an `application/x-www-form-urlencoded` body
    ///
    /// The agent compares `isProtected` against "1", so the flag is sent as 1/0.
    pub fn to_form_body(&self) -> String {
        format!(
            "ssid={}&password={}&isProtected={}",
            urlencoding::encode(&self.ssid),
            urlencoding::encode(&self.password),
            if self.is_protected { "1" } else { "0" }
        )
    }
}
