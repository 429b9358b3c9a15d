// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Assembles a [`RouterStatus`] from router API calls

use crate::tplink::{Device, LteStatus, RouterApi, RouterError, Status};

use super::display::{
    SIM_READY, connection_type, get_display_name, get_network_type_name, get_signal_quality,
    get_signal_strength, get_sim_status_text,
};
use super::types::{
    ConnectedDevice, ConnectionInfo, DeviceCounts, LteSignal, RouterStatus, SimInfo, SystemInfo,
    WanTraffic,
};

/// Logs in, reads everything the report needs and logs out again.
///
/// Status and firmware are mandatory; LTE and IPv4 data are best-effort and
/// fall back to defaults. Logout failures are ignored.
///
/// # Errors
///
/// Returns the first error from authentication, `get_status` or `get_firmware`.
pub async fn collect<R>(router: &mut R, timestamp: i64) -> Result<RouterStatus, RouterError>
where
    R: RouterApi + ?Sized,
{
    router.authenticate().await?;
    let result = gather(&*router, timestamp).await;
    if let Err(e) = router.logout().await {
        tracing::debug!("Logout failed: {}", e);
    }
    result
}

async fn gather<R>(router: &R, timestamp: i64) -> Result<RouterStatus, RouterError>
where
    R: RouterApi + ?Sized,
{
    let status = router.get_status().await?;
    let firmware = router.get_firmware().await?;

    let mut connection = ConnectionInfo {
        wan_ip: status.wan_ipv4_addr.clone().unwrap_or_default(),
        uptime_seconds: status.wan_ipv4_uptime.unwrap_or(0),
        isp_name: String::new(),
    };

    let (lte, sim, wan) = match router.get_lte_status().await {
        Ok(info) => {
            connection.isp_name.clone_from(&info.isp_name);
            lte_sections(&info)
        }
        Err(e) => {
            tracing::debug!("LTE status unavailable: {}", e);
            (LteSignal::default(), SimInfo::default(), WanTraffic::default())
        }
    };

    if connection.wan_ip.is_empty() {
        match router.get_ipv4_status().await {
            Ok(ipv4) => {
                connection.wan_ip = ipv4.wan_ipv4_ipaddr;
                if connection.uptime_seconds == 0 {
                    connection.uptime_seconds = ipv4.wan_ipv4_uptime.unwrap_or(0);
                }
            }
            Err(e) => tracing::debug!("IPv4 status unavailable: {}", e),
        }
    }

    let devices: Vec<ConnectedDevice> = status
        .devices
        .iter()
        .filter(|d| d.active)
        .map(device_entry)
        .collect();
    let device_counts = count_devices(&devices);

    let model = if firmware.model.is_empty() {
        firmware.hardware_version
    } else {
        firmware.model
    };

    Ok(RouterStatus {
        timestamp,
        lte,
        sim,
        wan,
        devices,
        device_counts,
        connection,
        system: system_info(&status, firmware.firmware_version, model),
    })
}

/// Signal, SIM and WAN traffic sections derived from LTE status
#[must_use]
pub fn lte_sections(info: &LteStatus) -> (LteSignal, SimInfo, WanTraffic) {
    let lte = LteSignal {
        network_type: info.network_type,
        network_type_name: get_network_type_name(info.network_type).to_string(),
        rsrp: info.rsrp,
        rsrq: info.rsrq,
        snr: info.snr,
        signal_strength: get_signal_strength(info.rsrp),
        signal_quality: get_signal_quality(info.rsrp),
    };

    let sim = SimInfo {
        status: info.sim_status,
        status_text: get_sim_status_text(info.sim_status).to_string(),
        is_ok: info.sim_status == SIM_READY,
    };

    // The router only reports a combined total
    let half = info.total_statistics / 2;
    let wan = WanTraffic {
        download_bytes_per_sec: info.cur_rx_speed,
        upload_bytes_per_sec: info.cur_tx_speed,
        total_download_bytes: half,
        total_upload_bytes: half,
    };

    (lte, sim, wan)
}

#[must_use]
pub fn device_entry(device: &Device) -> ConnectedDevice {
    ConnectedDevice {
        mac_address: device.macaddr.clone(),
        ip_address: device.ipaddr.clone(),
        hostname: device.hostname.clone(),
        display_name: get_display_name(&device.hostname, &device.macaddr),
        connection_type: connection_type(device.connection.label()),
        signal_strength: device.signal,
        download_bytes_per_sec: device.down_speed.unwrap_or(0),
        upload_bytes_per_sec: device.up_speed.unwrap_or(0),
        is_active: true,
    }
}

#[must_use]
pub fn count_devices(devices: &[ConnectedDevice]) -> DeviceCounts {
    let wifi = devices
        .iter()
        .filter(|d| d.connection_type.is_wifi())
        .count();
    DeviceCounts {
        total: devices.len(),
        wired: devices.len() - wifi,
        wifi,
        active: devices.len(),
    }
}

fn system_info(status: &Status, firmware_version: String, model: String) -> SystemInfo {
    SystemInfo {
        cpu_usage: status.cpu_usage.unwrap_or(0.0),
        memory_usage: status.mem_usage.unwrap_or(0.0),
        firmware_version,
        model,
    }
}
