//! Response and variable types for the launch API

use chrono::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub rocket_name: String,
    pub rocket_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_patch_small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_patch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikipedia: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_link: Option<String>,
}

/// Result of a launch as far as the API knows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Success,
    Failed,
    Unknown,
}

impl LaunchOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            LaunchOutcome::Success => "Success",
            LaunchOutcome::Failed => "Failed",
            LaunchOutcome::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub id: String,
    pub mission_name: String,
    pub launch_date_local: String,
    #[serde(default)]
    pub launch_success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub rocket: Rocket,
    #[serde(default)]
    pub links: Links,
}

impl Launch {
    pub fn outcome(&self) -> LaunchOutcome {
        match self.launch_success {
            Some(true) => LaunchOutcome::Success,
            Some(false) => LaunchOutcome::Failed,
            None => LaunchOutcome::Unknown,
        }
    }

    /// Local launch date as `YYYY-MM-DD`, or the raw value if unparseable
    pub fn launch_date(&self) -> String {
        DateTime::parse_from_rfc3339(&self.launch_date_local)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| self.launch_date_local.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub rocket_type: String,
    pub active: bool,
    #[serde(default)]
    pub cost_per_launch: Option<u64>,
    #[serde(default)]
    pub success_rate_pct: Option<f64>,
    #[serde(default)]
    pub first_flight: Option<String>,
    pub country: String,
    pub company: String,
}

// Query variables

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LaunchesVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchVariables {
    pub id: String,
}

// Query response payloads (the `data` object)

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchesData {
    #[serde(default)]
    pub launches: Vec<Launch>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchData {
    pub launch: Option<Launch>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RocketsData {
    #[serde(default)]
    pub rockets: Vec<RocketInfo>,
}
