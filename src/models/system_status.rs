use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub id: i32,
    pub protection: bool,
    pub vpn: bool,
    pub max_mode: bool,
    pub autopilot: bool,
    pub threats_detected: i64,
    pub last_scan: DateTime<Utc>,
}

impl SystemStatus {
    /// Column defaults for a freshly created record.
    #[must_use]
    pub fn with_defaults(id: i32) -> Self {
        Self {
            id,
            protection: true,
            vpn: true,
            max_mode: false,
            autopilot: true,
            threats_detected: 0,
            last_scan: Utc::now(),
        }
    }

    /// Overwrites every field the patch carries and keeps the rest.
    pub fn apply(&mut self, patch: SystemStatusPatch) {
        if let Some(protection) = patch.protection {
            self.protection = protection;
        }
        if let Some(vpn) = patch.vpn {
            self.vpn = vpn;
        }
        if let Some(max_mode) = patch.max_mode {
            self.max_mode = max_mode;
        }
        if let Some(autopilot) = patch.autopilot {
            self.autopilot = autopilot;
        }
        if let Some(threats) = patch.threats_detected {
            self.threats_detected = threats;
        }
        if let Some(last_scan) = patch.last_scan {
            self.last_scan = last_scan;
        }
    }
}

/// Partial update for [`SystemStatus`].
///
/// A field that is omitted keeps its stored value. A field that is present
/// must carry a value of the right type: `null` is rejected rather than being
/// read as "clear this field", and unknown keys are rejected too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SystemStatusPatch {
    #[serde(default, deserialize_with = "present")]
    pub protection: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub vpn: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub max_mode: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub autopilot: Option<bool>,
    #[serde(default, deserialize_with = "present")]
    pub threats_detected: Option<i64>,
    #[serde(default, deserialize_with = "present")]
    pub last_scan: Option<DateTime<Utc>>,
}

impl SystemStatusPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.protection.is_none()
            && self.vpn.is_none()
            && self.max_mode.is_none()
            && self.autopilot.is_none()
            && self.threats_detected.is_none()
            && self.last_scan.is_none()
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
