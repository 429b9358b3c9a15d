// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use tplink_router_status::prelude::*;
//! ```

// Core types
pub use crate::config::RouterConfig;
pub use crate::error::{AppError, ErrorCode, Result};

// Report types
pub use crate::report::{Report, RouterStatus, collect, fetch, now_millis};

// Router client
pub use crate::tplink::{
    Device, Firmware, Ipv4Status, LteStatus, RouterApi, RouterError, Status, TplinkClient,
};
