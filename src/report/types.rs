// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! JSON output schema
//!
//! Field names are camelCase on the wire; the parent process reads them as-is.

use serde::Serialize;

use crate::error::{AppError, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalQuality {
    Excellent,
    Good,
    Fair,
    Poor,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConnectionType {
    #[serde(rename = "wired")]
    Wired,
    #[serde(rename = "wifi_2g")]
    Wifi2g,
    #[serde(rename = "wifi_5g")]
    Wifi5g,
    #[serde(rename = "wifi_6g")]
    Wifi6g,
}

impl ConnectionType {
    #[must_use]
    pub fn is_wifi(self) -> bool {
        !matches!(self, Self::Wired)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LteSignal {
    pub network_type: i32,
    pub network_type_name: String,
    pub rsrp: Option<i32>,
    pub rsrq: Option<i32>,
    pub snr: Option<i32>,
    pub signal_strength: u8,
    pub signal_quality: SignalQuality,
}

impl Default for LteSignal {
    fn default() -> Self {
        Self {
            network_type: 0,
            network_type_name: "Unknown".to_string(),
            rsrp: None,
            rsrq: None,
            snr: None,
            signal_strength: 0,
            signal_quality: SignalQuality::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimInfo {
    pub status: i32,
    pub status_text: String,
    pub is_ok: bool,
}

impl Default for SimInfo {
    fn default() -> Self {
        Self {
            status: 0,
            status_text: "Unknown".to_string(),
            is_ok: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WanTraffic {
    pub download_bytes_per_sec: u64,
    pub upload_bytes_per_sec: u64,
    pub total_download_bytes: u64,
    pub total_upload_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedDevice {
    pub mac_address: String,
    pub ip_address: String,
    pub hostname: String,
    pub display_name: String,
    pub connection_type: ConnectionType,
    pub signal_strength: Option<i32>,
    pub download_bytes_per_sec: u64,
    pub upload_bytes_per_sec: u64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceCounts {
    pub total: usize,
    pub wired: usize,
    pub wifi: usize,
    pub active: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub wan_ip: String,
    pub uptime_seconds: u64,
    pub isp_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub firmware_version: String,
    pub model: String,
}

/// Complete router snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterStatus {
    pub timestamp: i64,
    pub lte: LteSignal,
    pub sim: SimInfo,
    pub wan: WanTraffic,
    pub devices: Vec<ConnectedDevice>,
    pub device_counts: DeviceCounts,
    pub connection: ConnectionInfo,
    pub system: SystemInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessReport {
    pub success: bool,
    pub timestamp: i64,
    pub data: RouterStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureReport {
    pub success: bool,
    pub error: String,
    pub error_code: ErrorCode,
    pub timestamp: i64,
}

/// The single JSON object printed on stdout
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Success(SuccessReport),
    Failure(FailureReport),
}

impl Report {
    #[must_use]
    pub fn success(data: RouterStatus) -> Self {
        Self::Success(SuccessReport {
            success: true,
            timestamp: data.timestamp,
            data,
        })
    }

    #[must_use]
    pub fn failure(error: &AppError, timestamp: i64) -> Self {
        Self::Failure(FailureReport {
            success: false,
            error: error.to_string(),
            error_code: error.code(),
            timestamp,
        })
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Serializes the report as one line of JSON
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Json`] if serialization fails.
    pub fn to_json_line(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }
}
