// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Router status report
//!
//! Turns the raw router API data into the fixed JSON document consumed by
//! the parent process.

mod builder;
mod display;
mod types;

use crate::config::RouterConfig;
use crate::error::Result;
use crate::tplink::TplinkClient;

pub use builder::{collect, count_devices, device_entry, lte_sections};
pub use display::{
    SIM_READY, connection_type, get_display_name, get_network_type_name, get_signal_quality,
    get_signal_strength, get_sim_status_text,
};
pub use types::{
    ConnectedDevice, ConnectionInfo, ConnectionType, DeviceCounts, FailureReport, LteSignal,
    Report, RouterStatus, SignalQuality, SimInfo, SuccessReport, SystemInfo, WanTraffic,
};

/// Milliseconds since the Unix epoch
#[must_use]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Fetches the status of the configured router as a report
///
/// Never fails: every error is turned into a failure report stamped with
/// `timestamp`.
pub async fn fetch(config: RouterConfig, timestamp: i64) -> Report {
    match fetch_status(config, timestamp).await {
        Ok(status) => {
            tracing::debug!(
                "Collected router status: {} devices",
                status.device_counts.total
            );
            Report::success(status)
        }
        Err(e) => {
            tracing::warn!("Router status collection failed: {}", e);
            Report::failure(&e, timestamp)
        }
    }
}

async fn fetch_status(config: RouterConfig, timestamp: i64) -> Result<RouterStatus> {
    config.validate()?;
    let mut client = TplinkClient::new(config)?;
    Ok(collect(&mut client, timestamp).await?)
}
