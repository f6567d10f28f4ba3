//! Exposure records

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// How an exposure was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExposureType {
    #[default]
    #[serde(rename = "EXPOSURE_TYPE_UNKNOWN")]
    Unknown,
    #[serde(rename = "EXPOSURE_TYPE_AUTOMATIC")]
    Automatic,
    #[serde(rename = "EXPOSURE_TYPE_MANUAL")]
    Manual,
}

impl ExposureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExposureType::Unknown => "EXPOSURE_TYPE_UNKNOWN",
            ExposureType::Automatic => "EXPOSURE_TYPE_AUTOMATIC",
            ExposureType::Manual => "EXPOSURE_TYPE_MANUAL",
        }
    }
}

impl fmt::Display for ExposureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured exposure of one experiment group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exposure {
    pub unit_id: String,
    pub group_id: i64,
    pub project_id: String,
    /// Upload time, unix seconds
    pub time: i64,
    pub layer_key: String,
    pub exp_key: String,
    pub unit_type: String,
    pub cluster_id: String,
    pub sdk_type: String,
    pub sdk_version: String,
    pub exposure_type: ExposureType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<HashMap<String, String>>,
}

/// Batch of exposures sent to one sink
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureGroup {
    pub exposures: Vec<Exposure>,
}

impl ExposureGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, exposure: Exposure) {
        self.exposures.push(exposure);
    }

    /// Move every exposure of `other` to the end of this batch
    pub fn append(&mut self, other: &mut ExposureGroup) {
        self.exposures.append(&mut other.exposures);
    }

    pub fn len(&self) -> usize {
        self.exposures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exposures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exposure_type_wire_names() {
        assert_eq!(ExposureType::Manual.to_string(), "EXPOSURE_TYPE_MANUAL");
        assert_eq!(
            serde_json::to_string(&ExposureType::Automatic).unwrap(),
            "\"EXPOSURE_TYPE_AUTOMATIC\""
        );
    }
}
