// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Type definitions for TP-Link router data

/// How a client device is attached to the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionKind {
    Wired,
    Host2G,
    Host5G,
    Host6G,
    #[default]
    Unknown,
}

impl ConnectionKind {
    /// Maps the router's `X_TP_ConnType` code
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "0" => Self::Wired,
            "1" => Self::Host2G,
            "2" => Self::Host5G,
            "3" => Self::Host6G,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wired => "WIRED",
            Self::Host2G => "HOST_2G",
            Self::Host5G => "HOST_5G",
            Self::Host6G => "HOST_6G",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// A client known to the router's DHCP/host table
#[derive(Debug, Clone, Default)]
pub struct Device {
    pub macaddr: String,
    pub ipaddr: String,
    pub hostname: String,
    pub connection: ConnectionKind,
    pub active: bool,
    pub signal: Option<i32>,
    pub down_speed: Option<u64>,
    pub up_speed: Option<u64>,
    pub packets_sent: Option<u64>,
    pub packets_received: Option<u64>,
}

/// General router status
#[derive(Debug, Clone, Default)]
pub struct Status {
    pub wan_macaddr: Option<String>,
    pub wan_ipv4_addr: Option<String>,
    pub wan_ipv4_uptime: Option<u64>,
    pub lan_macaddr: Option<String>,
    pub lan_ipv4_addr: Option<String>,
    pub cpu_usage: Option<f64>,
    pub mem_usage: Option<f64>,
    pub wired_total: usize,
    pub wifi_clients_total: usize,
    pub devices: Vec<Device>,
}

/// Hardware and firmware identification
#[derive(Debug, Clone, Default)]
pub struct Firmware {
    pub hardware_version: String,
    pub model: String,
    pub firmware_version: String,
}

/// LTE link, signal and traffic counters
#[derive(Debug, Clone, Default)]
pub struct LteStatus {
    pub enable: bool,
    pub connect_status: i32,
    pub network_type: i32,
    pub roaming: bool,
    pub sim_status: i32,
    pub total_statistics: u64,
    pub cur_statistics: u64,
    pub cur_rx_speed: u64,
    pub cur_tx_speed: u64,
    pub sig_level: i32,
    pub rsrp: Option<i32>,
    pub rsrq: Option<i32>,
    pub snr: Option<i32>,
    pub isp_name: String,
    pub sms_unread_count: u32,
}

/// IPv4 addressing of the WAN and LAN sides
#[derive(Debug, Clone, Default)]
pub struct Ipv4Status {
    pub wan_macaddr: String,
    pub wan_ipv4_ipaddr: String,
    pub wan_ipv4_gateway: String,
    pub wan_ipv4_conntype: String,
    pub wan_ipv4_netmask: String,
    pub wan_ipv4_pridns: String,
    pub wan_ipv4_snddns: String,
    pub wan_ipv4_uptime: Option<u64>,
    pub lan_macaddr: String,
    pub lan_ipv4_ipaddr: String,
    pub lan_ipv4_netmask: String,
    pub lan_ipv4_dhcp_enable: bool,
}
