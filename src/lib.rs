// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # TP-Link Router Status
//!
//! Command-line adapter that reads the status of a TP-Link LTE router and
//! prints it as a single JSON object for a parent process.
//!
//! ## Main modules
//! - `config`: command-line and environment configuration
//! - `error`: error types and error codes
//! - `report`: JSON report assembly and display helpers
//! - `tplink`: TP-Link router management API client
//! - `prelude`: commonly used types and traits

mod config;
mod error;
mod report;
mod tplink;
pub mod prelude;

// Re-export commonly used types
/// Router connection configuration
pub use config::{RouterConfig, defaults, env_vars};

/// Application error, result type and error codes
pub use error::{AppError, ErrorCode, Result};

/// Report assembly and output schema
pub use report::{
    ConnectedDevice, ConnectionInfo, ConnectionType, DeviceCounts, FailureReport, LteSignal,
    Report, RouterStatus, SIM_READY, SignalQuality, SimInfo, SuccessReport, SystemInfo,
    WanTraffic, collect, connection_type, count_devices, device_entry, fetch, get_display_name,
    get_network_type_name, get_signal_quality, get_signal_strength, get_sim_status_text,
    lte_sections, now_millis,
};

/// Router API client and its data types
pub use tplink::{
    ConnectionKind, Device, Firmware, Ipv4Status, LteStatus, RouterApi, RouterError, Status,
    TplinkClient,
};

/// TP-Link act wire format (public for tests)
pub use tplink::{ActItem, ActResponse, ActType, encode_acts, parse_response};
