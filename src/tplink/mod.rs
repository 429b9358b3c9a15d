// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! TP-Link router management API client module
//!
//! This module logs in to TP-Link MR-series LTE routers through their web
//! interface and reads status, firmware, LTE and IPv4 information using the
//! router's `cgi` act protocol.

mod client;
mod connection;
mod error;
mod types;

// Re-export public types and functions
pub use client::{RouterApi, TplinkClient};
pub use connection::{ActItem, ActResponse, ActType, encode_acts, parse_response};
pub use error::RouterError;
pub use types::{ConnectionKind, Device, Firmware, Ipv4Status, LteStatus, Status};
