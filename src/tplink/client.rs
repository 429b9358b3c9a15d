// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! High-level TP-Link client

use async_trait::async_trait;

use crate::config::RouterConfig;

use super::connection::{
    Session, firmware_acts, ipv4_status_acts, lte_status_acts, parse_firmware, parse_ipv4_status,
    parse_lte_status, parse_status, status_acts,
};
use super::error::RouterError;
use super::types::{Firmware, Ipv4Status, LteStatus, Status};

/// Operations offered by a router management API
///
/// Getters require a prior successful [`RouterApi::authenticate`].
#[async_trait]
pub trait RouterApi: Send + Sync {
    async fn authenticate(&mut self) -> Result<(), RouterError>;

    async fn get_status(&self) -> Result<Status, RouterError>;

    async fn get_firmware(&self) -> Result<Firmware, RouterError>;

    async fn get_lte_status(&self) -> Result<LteStatus, RouterError>;

    async fn get_ipv4_status(&self) -> Result<Ipv4Status, RouterError>;

    async fn logout(&mut self) -> Result<(), RouterError>;
}

/// TP-Link MR-series router client
///
/// Speaks the `cgi` act protocol of the router web interface over one
/// cookie-backed HTTP session.
pub struct TplinkClient {
    config: RouterConfig,
    session: Session,
}

impl TplinkClient {
    /// Creates a client for the router described by `config`
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::MissingDependency`] when HTTPS is requested but
    /// TLS support is not compiled in, or [`RouterError::Http`] when the HTTP
    /// client cannot be built.
    pub fn new(config: RouterConfig) -> Result<Self, RouterError> {
        let session = Session::new(&config)?;
        Ok(Self { config, session })
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

#[async_trait]
impl RouterApi for TplinkClient {
    async fn authenticate(&mut self) -> Result<(), RouterError> {
        tracing::debug!("Authenticating to {}", self.config.base_url());
        self.session
            .login(&self.config.username, &self.config.password)
            .await
    }

    async fn get_status(&self) -> Result<Status, RouterError> {
        let response = self.session.act(&status_acts()).await?;
        let status = parse_status(&response);
        tracing::trace!("Status: {} devices", status.devices.len());
        Ok(status)
    }

    async fn get_firmware(&self) -> Result<Firmware, RouterError> {
        let response = self.session.act(&firmware_acts()).await?;
        Ok(parse_firmware(&response))
    }

    async fn get_lte_status(&self) -> Result<LteStatus, RouterError> {
        let response = self.session.act(&lte_status_acts()).await?;
        let lte = parse_lte_status(&response);
        tracing::trace!(
            "LTE: network type {}, RSRP {:?}, SIM status {}",
            lte.network_type,
            lte.rsrp,
            lte.sim_status
        );
        Ok(lte)
    }

    async fn get_ipv4_status(&self) -> Result<Ipv4Status, RouterError> {
        let response = self.session.act(&ipv4_status_acts()).await?;
        Ok(parse_ipv4_status(&response))
    }

    async fn logout(&mut self) -> Result<(), RouterError> {
        self.session.logout().await
    }
}
