// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Derived display values for the status report

use super::types::{ConnectionType, SignalQuality};

/// RSRP at or above which the signal is reported as 100%
const RSRP_BEST: i32 = -44;

/// RSRP at or below which the signal is reported as 0%
const RSRP_WORST: i32 = -140;

/// Maps RSRP (dBm) onto a 0-100 percentage
///
/// Linear between -140 dBm and -44 dBm, truncated towards zero.
#[must_use]
pub fn get_signal_strength(rsrp: Option<i32>) -> u8 {
    let Some(rsrp) = rsrp else {
        return 0;
    };
    if rsrp >= RSRP_BEST {
        return 100;
    }
    if rsrp <= RSRP_WORST {
        return 0;
    }
    let percent = (rsrp - RSRP_WORST) * 100 / (RSRP_BEST - RSRP_WORST);
    u8::try_from(percent).unwrap_or(0)
}

/// Coarse signal rating from RSRP
#[must_use]
pub fn get_signal_quality(rsrp: Option<i32>) -> SignalQuality {
    match rsrp {
        None => SignalQuality::Unknown,
        Some(v) if v > -80 => SignalQuality::Excellent,
        Some(v) if v > -90 => SignalQuality::Good,
        Some(v) if v > -100 => SignalQuality::Fair,
        Some(_) => SignalQuality::Poor,
    }
}

#[must_use]
pub fn get_network_type_name(network_type: i32) -> &'static str {
    match network_type {
        0 => "No Service",
        1 => "GSM",
        2 => "WCDMA",
        3 => "4G LTE",
        4 => "TD-SCDMA",
        5 => "CDMA 1x",
        6 => "CDMA 1x Ev-Do",
        7 => "4G+ LTE",
        _ => "Unknown",
    }
}

#[must_use]
pub fn get_sim_status_text(status: i32) -> &'static str {
    match status {
        0 => "No SIM card detected or SIM card error",
        1 => "No SIM card detected",
        2 => "SIM card error",
        3 => "SIM card prepared",
        4 => "SIM locked",
        5 => "SIM unlocked",
        6 => "PIN locked",
        7 => "SIM card is locked permanently",
        8 => "Suspension of transmission",
        9 => "Unopened",
        _ => "Unknown",
    }
}

/// SIM status code of a usable, unlocked SIM
pub const SIM_READY: i32 = 5;

/// Name shown for a device: its hostname, or a MAC-derived placeholder
#[must_use]
pub fn get_display_name(hostname: &str, mac: &str) -> String {
    let hostname = hostname.trim();
    if !hostname.is_empty() {
        return hostname.to_string();
    }
    // last two octets, e.g. "EE:FF" -> "EEFF"
    let chars: Vec<char> = mac.chars().collect();
    if chars.len() >= 5 {
        let tail: String = chars[chars.len() - 5..]
            .iter()
            .filter(|c| **c != ':' && **c != '-')
            .collect();
        return format!("Unknown-{tail}");
    }
    "Unknown".to_string()
}

/// Classifies a device connection from the router's label for it
#[must_use]
pub fn connection_type(label: &str) -> ConnectionType {
    let label = label.to_lowercase();
    if label.contains("6g") {
        ConnectionType::Wifi6g
    } else if label.contains("5g") {
        ConnectionType::Wifi5g
    } else if ["2.4", "2g", "wifi", "wireless"]
        .iter()
        .any(|n| label.contains(n))
    {
        ConnectionType::Wifi2g
    } else {
        ConnectionType::Wired
    }
}
