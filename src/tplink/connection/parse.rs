// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Act queries and response parsing
//!
//! Each `*_acts` builder is paired with the parser below it; parsers look up
//! results by the act's position in the builder.

use std::collections::HashMap;

use super::protocol::{ActItem, ActResponse, ActType};
use crate::tplink::types::{ConnectionKind, Device, Firmware, Ipv4Status, LteStatus, Status};

type Attrs = HashMap<String, String>;

fn text(attrs: Option<&Attrs>, key: &str) -> String {
    attrs
        .and_then(|a| a.get(key))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

fn non_empty(attrs: Option<&Attrs>, key: &str) -> Option<String> {
    Some(text(attrs, key)).filter(|v| !v.is_empty())
}

/// Integer attribute; tolerates float renderings such as `"12.0"`
#[allow(clippy::cast_possible_truncation)]
fn int(attrs: Option<&Attrs>, key: &str) -> Option<i64> {
    let raw = attrs?.get(key)?.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
}

fn int32(attrs: Option<&Attrs>, key: &str) -> Option<i32> {
    int(attrs, key).and_then(|v| i32::try_from(v).ok())
}

fn uint(attrs: Option<&Attrs>, key: &str) -> Option<u64> {
    int(attrs, key).and_then(|v| u64::try_from(v).ok())
}

fn flag(attrs: Option<&Attrs>, key: &str) -> bool {
    matches!(text(attrs, key).as_str(), "1" | "true")
}

pub(crate) fn firmware_acts() -> Vec<ActItem> {
    vec![ActItem::new(
        ActType::Get,
        "IGD_DEV_INFO",
        &["hardwareVersion", "modelName", "softwareVersion"],
    )]
}

pub(crate) fn parse_firmware(response: &ActResponse) -> Firmware {
    let info = response.first(0);
    Firmware {
        hardware_version: text(info, "hardwareVersion"),
        model: text(info, "modelName"),
        firmware_version: text(info, "softwareVersion"),
    }
}

pub(crate) fn status_acts() -> Vec<ActItem> {
    vec![
        ActItem::new(
            ActType::GetStack,
            "LAN_IP_INTF",
            &["X_TP_MACAddress", "IPInterfaceIPAddress"],
        ),
        ActItem::new(
            ActType::GetStack,
            "WAN_IP_CONN",
            &["enable", "MACAddress", "externalIPAddress", "uptime"],
        ),
        ActItem::new(
            ActType::GetList,
            "LAN_HOST_ENTRY",
            &["IPAddress", "MACAddress", "hostName", "X_TP_ConnType", "active"],
        ),
        ActItem::new(
            ActType::GetStack,
            "LAN_WLAN_ASSOC_DEV",
            &[
                "associatedDeviceMACAddress",
                "X_TP_TotalPacketsSent",
                "X_TP_TotalPacketsReceived",
            ],
        ),
    ]
}

/// Picks the WAN connection that is enabled and has an address, else the first one
fn active_wan<'a>(entries: &[&'a Attrs]) -> Option<&'a Attrs> {
    entries
        .iter()
        .copied()
        .find(|e| flag(Some(*e), "enable") && non_empty(Some(*e), "externalIPAddress").is_some())
        .or_else(|| entries.first().copied())
}

fn normalize_mac(mac: &str) -> String {
    mac.trim().replace('-', ":").to_uppercase()
}

pub(crate) fn parse_status(response: &ActResponse) -> Status {
    let lan = response.first(0);
    let wan = active_wan(&response.list(1));

    let wireless: HashMap<String, &Attrs> = response
        .list(3)
        .into_iter()
        .filter_map(|a| {
            non_empty(Some(a), "associatedDeviceMACAddress").map(|mac| (normalize_mac(&mac), a))
        })
        .collect();

    let mut devices = Vec::new();
    for host in response.list(2) {
        let host = Some(host);
        let Some(macaddr) = non_empty(host, "MACAddress") else {
            continue;
        };
        let assoc = wireless.get(&normalize_mac(&macaddr)).copied();
        let mut connection = ConnectionKind::from_code(&text(host, "X_TP_ConnType"));
        if connection == ConnectionKind::Unknown && assoc.is_some() {
            connection = ConnectionKind::Host2G;
        }
        devices.push(Device {
            ipaddr: text(host, "IPAddress"),
            hostname: text(host, "hostName"),
            connection,
            // entries without the attribute are reported as active
            active: host
                .and_then(|h| h.get("active"))
                .is_none_or(|v| matches!(v.trim(), "1" | "true")),
            packets_sent: uint(assoc, "X_TP_TotalPacketsSent"),
            packets_received: uint(assoc, "X_TP_TotalPacketsReceived"),
            macaddr,
            ..Device::default()
        });
    }

    let wired_total = devices
        .iter()
        .filter(|d| d.active && d.connection == ConnectionKind::Wired)
        .count();

    Status {
        wan_macaddr: non_empty(wan, "MACAddress"),
        wan_ipv4_addr: non_empty(wan, "externalIPAddress"),
        wan_ipv4_uptime: uint(wan, "uptime"),
        lan_macaddr: non_empty(lan, "X_TP_MACAddress"),
        lan_ipv4_addr: non_empty(lan, "IPInterfaceIPAddress"),
        cpu_usage: None,
        mem_usage: None,
        wired_total,
        wifi_clients_total: wireless.len(),
        devices,
    }
}

pub(crate) fn lte_status_acts() -> Vec<ActItem> {
    vec![
        ActItem::new(
            ActType::Get,
            "WAN_LTE_LINK_CFG",
            &[
                "enable",
                "connectStatus",
                "networkType",
                "roamingStatus",
                "simStatus",
            ],
        )
        .with_stack("2,1,0,0,0,0"),
        ActItem::new(
            ActType::Get,
            "WAN_LTE_INTF_CFG",
            &[
                "curStatistics",
                "totalStatistics",
                "curRxSpeed",
                "curTxSpeed",
            ],
        )
        .with_stack("2,0,0,0,0,0"),
        ActItem::new(
            ActType::Get,
            "LTE_NET_STATUS",
            &[
                "smsUnreadCount",
                "sigLevel",
                "rfInfoRsrp",
                "rfInfoRsrq",
                "rfInfoSnr",
            ],
        )
        .with_stack("2,1,0,0,0,0"),
        ActItem::new(ActType::Get, "LTE_PROF_STAT", &["spn", "ispName"])
            .with_stack("2,1,0,0,0,0"),
    ]
}

pub(crate) fn parse_lte_status(response: &ActResponse) -> LteStatus {
    let link = response.first(0);
    let intf = response.first(1);
    let net = response.first(2);
    let prof = response.first(3);

    LteStatus {
        enable: flag(link, "enable"),
        connect_status: int32(link, "connectStatus").unwrap_or(0),
        network_type: int32(link, "networkType").unwrap_or(0),
        roaming: flag(link, "roamingStatus"),
        sim_status: int32(link, "simStatus").unwrap_or(0),
        total_statistics: uint(intf, "totalStatistics").unwrap_or(0),
        cur_statistics: uint(intf, "curStatistics").unwrap_or(0),
        cur_rx_speed: uint(intf, "curRxSpeed").unwrap_or(0),
        cur_tx_speed: uint(intf, "curTxSpeed").unwrap_or(0),
        sig_level: int32(net, "sigLevel").unwrap_or(0),
        rsrp: int32(net, "rfInfoRsrp"),
        rsrq: int32(net, "rfInfoRsrq"),
        snr: int32(net, "rfInfoSnr"),
        isp_name: non_empty(prof, "ispName")
            .or_else(|| non_empty(prof, "spn"))
            .unwrap_or_default(),
        sms_unread_count: int(net, "smsUnreadCount")
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0),
    }
}

pub(crate) fn ipv4_status_acts() -> Vec<ActItem> {
    vec![
        ActItem::new(
            ActType::GetStack,
            "LAN_IP_INTF",
            &[
                "X_TP_MACAddress",
                "IPInterfaceIPAddress",
                "IPInterfaceSubnetMask",
            ],
        ),
        ActItem::new(ActType::Get, "LAN_HOST_CFG", &["DHCPServerEnable"])
            .with_stack("1,0,0,0,0,0"),
        ActItem::new(
            ActType::GetStack,
            "WAN_IP_CONN",
            &[
                "enable",
                "MACAddress",
                "externalIPAddress",
                "defaultGateway",
                "name",
                "subnetMask",
                "DNSServers",
                "uptime",
            ],
        ),
    ]
}

pub(crate) fn parse_ipv4_status(response: &ActResponse) -> Ipv4Status {
    let lan = response.first(0);
    let dhcp = response.first(1);
    let wan = active_wan(&response.list(2));

    let dns = text(wan, "DNSServers");
    let mut servers = dns.split(',').map(str::trim).filter(|s| !s.is_empty());

    Ipv4Status {
        wan_macaddr: text(wan, "MACAddress"),
        wan_ipv4_ipaddr: text(wan, "externalIPAddress"),
        wan_ipv4_gateway: text(wan, "defaultGateway"),
        wan_ipv4_conntype: text(wan, "name"),
        wan_ipv4_netmask: text(wan, "subnetMask"),
        wan_ipv4_pridns: servers.next().unwrap_or_default().to_string(),
        wan_ipv4_snddns: servers.next().unwrap_or_default().to_string(),
        wan_ipv4_uptime: uint(wan, "uptime"),
        lan_macaddr: text(lan, "X_TP_MACAddress"),
        lan_ipv4_ipaddr: text(lan, "IPInterfaceIPAddress"),
        lan_ipv4_netmask: text(lan, "IPInterfaceSubnetMask"),
        lan_ipv4_dhcp_enable: flag(dhcp, "DHCPServerEnable"),
    }
}

#[cfg(test)]
mod tests {
    use super::super::protocol::parse_response;
    use super::*;

    #[test]
    fn test_parse_firmware_complete() {
        let response = parse_response(
            "[0,0,0,0,0,0]0\nhardwareVersion=MR6400 v5 00000005\nmodelName=TL-MR6400\n\
             softwareVersion=1.1.0 0.9.1 v0001.0 Build 210608\n[error]0",
        )
        .unwrap();

        let firmware = parse_firmware(&response);

        assert_eq!(firmware.hardware_version, "MR6400 v5 00000005");
        assert_eq!(firmware.model, "TL-MR6400");
        assert_eq!(firmware.firmware_version, "1.1.0 0.9.1 v0001.0 Build 210608");
    }

    #[test]
    fn test_parse_firmware_empty() {
        let firmware = parse_firmware(&ActResponse::default());
        assert!(firmware.model.is_empty());
        assert!(firmware.firmware_version.is_empty());
    }

    #[test]
    fn test_parse_status_devices() {
        let response = parse_response(
            "[1,0,0,0,0,0]0\nX_TP_MACAddress=50:C7:BF:00:00:01\nIPInterfaceIPAddress=192.168.1.1\n\
             [1,1,0,0,0,0]1\nenable=1\nMACAddress=50:C7:BF:00:00:02\nexternalIPAddress=10.64.1.20\nuptime=3600\n\
             [1,0,0,0,0,0]2\nIPAddress=192.168.1.100\nMACAddress=AA:BB:CC:DD:EE:01\nhostName=laptop\nX_TP_ConnType=1\nactive=1\n\
             [2,0,0,0,0,0]2\nIPAddress=192.168.1.101\nMACAddress=AA:BB:CC:DD:EE:02\nhostName=\nX_TP_ConnType=0\nactive=0\n\
             [1,1,1,0,0,0]3\nassociatedDeviceMACAddress=aa-bb-cc-dd-ee-01\nX_TP_TotalPacketsSent=120\nX_TP_TotalPacketsReceived=340\n\
             [error]0",
        )
        .unwrap();

        let status = parse_status(&response);

        assert_eq!(status.lan_ipv4_addr.as_deref(), Some("192.168.1.1"));
        assert_eq!(status.wan_ipv4_addr.as_deref(), Some("10.64.1.20"));
        assert_eq!(status.wan_ipv4_uptime, Some(3600));
        assert_eq!(status.devices.len(), 2);

        let laptop = &status.devices[0];
        assert_eq!(laptop.hostname, "laptop");
        assert_eq!(laptop.connection, ConnectionKind::Host2G);
        assert!(laptop.active);
        assert_eq!(laptop.packets_sent, Some(120));
        assert_eq!(laptop.packets_received, Some(340));

        let idle = &status.devices[1];
        assert_eq!(idle.connection, ConnectionKind::Wired);
        assert!(!idle.active);
        assert!(idle.packets_sent.is_none());

        assert_eq!(status.wired_total, 0);
        assert_eq!(status.wifi_clients_total, 1);
        assert!(status.cpu_usage.is_none());
    }

    #[test]
    fn test_parse_status_skips_hosts_without_mac() {
        let response =
            parse_response("[1,0,0,0,0,0]2\nIPAddress=192.168.1.5\nhostName=ghost\n[error]0")
                .unwrap();
        let status = parse_status(&response);
        assert!(status.devices.is_empty());
        assert!(status.wan_ipv4_addr.is_none());
    }

    #[test]
    fn test_parse_status_missing_active_means_active() {
        let response =
            parse_response("[1,0,0,0,0,0]2\nMACAddress=AA:BB:CC:DD:EE:03\n[error]0").unwrap();
        let status = parse_status(&response);
        assert!(status.devices[0].active);
        assert_eq!(status.devices[0].connection, ConnectionKind::Unknown);
    }

    #[test]
    fn test_active_wan_prefers_enabled_with_address() {
        let response = parse_response(
            "[1,1,0,0,0,0]1\nenable=0\nexternalIPAddress=0.0.0.0\n\
             [1,2,0,0,0,0]1\nenable=1\nexternalIPAddress=\n\
             [1,3,0,0,0,0]1\nenable=1\nexternalIPAddress=100.64.0.7\n[error]0",
        )
        .unwrap();
        let status = parse_status(&response);
        assert_eq!(status.wan_ipv4_addr.as_deref(), Some("100.64.0.7"));
    }

    #[test]
    fn test_parse_lte_status_complete() {
        let response = parse_response(
            "[2,1,0,0,0,0]0\nenable=1\nconnectStatus=4\nnetworkType=3\nroamingStatus=0\nsimStatus=5\n\
             [2,0,0,0,0,0]1\ncurStatistics=1000\ntotalStatistics=2048.0\ncurRxSpeed=5120\ncurTxSpeed=640\n\
             [2,1,0,0,0,0]2\nsmsUnreadCount=2\nsigLevel=3\nrfInfoRsrp=-95\nrfInfoRsrq=-11\nrfInfoSnr=7\n\
             [2,1,0,0,0,0]3\nspn=\nispName=Vodafone\n[error]0",
        )
        .unwrap();

        let lte = parse_lte_status(&response);

        assert!(lte.enable);
        assert_eq!(lte.network_type, 3);
        assert_eq!(lte.sim_status, 5);
        assert_eq!(lte.total_statistics, 2048);
        assert_eq!(lte.cur_rx_speed, 5120);
        assert_eq!(lte.cur_tx_speed, 640);
        assert_eq!(lte.rsrp, Some(-95));
        assert_eq!(lte.rsrq, Some(-11));
        assert_eq!(lte.snr, Some(7));
        assert_eq!(lte.isp_name, "Vodafone");
        assert_eq!(lte.sms_unread_count, 2);
    }

    #[test]
    fn test_parse_lte_status_garbage_numbers() {
        let response = parse_response(
            "[2,1,0,0,0,0]0\nnetworkType=n/a\n[2,1,0,0,0,0]2\nrfInfoRsrp=\n\
             [2,1,0,0,0,0]3\nspn=Orange\n[error]0",
        )
        .unwrap();
        let lte = parse_lte_status(&response);
        assert_eq!(lte.network_type, 0);
        assert!(lte.rsrp.is_none());
        assert_eq!(lte.isp_name, "Orange");
    }

    #[test]
    fn test_parse_ipv4_status() {
        let response = parse_response(
            "[1,0,0,0,0,0]0\nX_TP_MACAddress=50:C7:BF:00:00:01\nIPInterfaceIPAddress=192.168.1.1\nIPInterfaceSubnetMask=255.255.255.0\n\
             [1,0,0,0,0,0]1\nDHCPServerEnable=1\n\
             [1,1,0,0,0,0]2\nenable=1\nMACAddress=50:C7:BF:00:00:02\nexternalIPAddress=10.64.1.20\n\
             defaultGateway=10.64.1.1\nname=ipoe_lte\nsubnetMask=255.255.255.252\nDNSServers=8.8.8.8, 1.1.1.1\nuptime=120\n\
             [error]0",
        )
        .unwrap();

        let ipv4 = parse_ipv4_status(&response);

        assert_eq!(ipv4.wan_ipv4_ipaddr, "10.64.1.20");
        assert_eq!(ipv4.wan_ipv4_gateway, "10.64.1.1");
        assert_eq!(ipv4.wan_ipv4_conntype, "ipoe_lte");
        assert_eq!(ipv4.wan_ipv4_pridns, "8.8.8.8");
        assert_eq!(ipv4.wan_ipv4_snddns, "1.1.1.1");
        assert_eq!(ipv4.wan_ipv4_uptime, Some(120));
        assert_eq!(ipv4.lan_ipv4_netmask, "255.255.255.0");
        assert!(ipv4.lan_ipv4_dhcp_enable);
    }

    #[test]
    fn test_act_builders_have_expected_shape() {
        assert_eq!(firmware_acts().len(), 1);
        assert_eq!(status_acts()[2].oid, "LAN_HOST_ENTRY");
        assert_eq!(status_acts()[2].kind, ActType::GetList);
        assert_eq!(lte_status_acts()[2].oid, "LTE_NET_STATUS");
        assert_eq!(ipv4_status_acts()[1].stack, "1,0,0,0,0,0");
    }
}
