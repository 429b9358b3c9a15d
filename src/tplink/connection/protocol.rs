// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! TP-Link `cgi` act wire format
//!
//! A request bundles several acts. The query string lists the act types in
//! order (`cgi?1&5&6`), the body carries one block per act:
//!
//! ```text
//! [IGD_DEV_INFO#0,0,0,0,0,0#0,0,0,0,0,0]0,2\r\n
//! modelName\r\n
//! softwareVersion\r\n
//! ```
//!
//! The response echoes a `[stack]index` header per returned object followed by
//! `key=value` lines and ends with `[error]code`.

use std::collections::HashMap;

use crate::tplink::error::RouterError;

pub const DEFAULT_STACK: &str = "0,0,0,0,0,0";

/// Act operation type, encoded as its numeric code in the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActType {
    Get = 1,
    Set = 2,
    Add = 3,
    Del = 4,
    GetList = 5,
    GetStack = 6,
    Op = 7,
    Cgi = 8,
}

impl ActType {
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A single operation inside an act request
#[derive(Debug, Clone)]
pub struct ActItem {
    pub kind: ActType,
    pub oid: &'static str,
    pub stack: &'static str,
    pub pstack: &'static str,
    pub attrs: Vec<&'static str>,
}

impl ActItem {
    #[must_use]
    pub fn new(kind: ActType, oid: &'static str, attrs: &[&'static str]) -> Self {
        Self {
            kind,
            oid,
            stack: DEFAULT_STACK,
            pstack: DEFAULT_STACK,
            attrs: attrs.to_vec(),
        }
    }

    #[must_use]
    pub fn with_stack(mut self, stack: &'static str) -> Self {
        self.stack = stack;
        self
    }
}

/// Encodes acts into the `cgi?...` path-and-query and the request body
#[must_use]
pub fn encode_acts(acts: &[ActItem]) -> (String, String) {
    let types: Vec<String> = acts.iter().map(|a| a.kind.code().to_string()).collect();
    let path = format!("cgi?{}", types.join("&"));

    let mut body = String::new();
    for (index, act) in acts.iter().enumerate() {
        body.push_str(&format!(
            "[{}#{}#{}]{},{}\r\n",
            act.oid,
            act.stack,
            act.pstack,
            index,
            act.attrs.len()
        ));
        for attr in &act.attrs {
            body.push_str(attr);
            body.push_str("\r\n");
        }
    }
    (path, body)
}

/// One object returned for an act
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActBlock {
    pub index: usize,
    pub stack: String,
    pub attrs: HashMap<String, String>,
}

/// Parsed act response
#[derive(Debug, Clone, Default)]
pub struct ActResponse {
    pub blocks: Vec<ActBlock>,
    pub error: i64,
}

impl ActResponse {
    /// First object returned for the act at `index`
    #[must_use]
    pub fn first(&self, index: usize) -> Option<&HashMap<String, String>> {
        self.blocks
            .iter()
            .find(|b| b.index == index)
            .map(|b| &b.attrs)
    }

    /// All objects returned for the act at `index` (GL/GS acts)
    #[must_use]
    pub fn list(&self, index: usize) -> Vec<&HashMap<String, String>> {
        self.blocks
            .iter()
            .filter(|b| b.index == index)
            .map(|b| &b.attrs)
            .collect()
    }
}

/// Parses a raw act response body
///
/// # Errors
///
/// Returns [`RouterError::Protocol`] when the `[error]` trailer is missing,
/// malformed, or carries a non-zero code.
pub fn parse_response(text: &str) -> Result<ActResponse, RouterError> {
    let mut response = ActResponse::default();
    let mut current: Option<ActBlock> = None;
    let mut error: Option<i64> = None;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("[error]") {
            if let Some(block) = current.take() {
                response.blocks.push(block);
            }
            let code = rest.trim().parse::<i64>().map_err(|_| {
                RouterError::Protocol(format!("Malformed error trailer: {line}"))
            })?;
            error = Some(code);
            break;
        }

        if let Some(rest) = line.strip_prefix('[') {
            if let Some((stack, index)) = rest.split_once(']') {
                if let Ok(index) = index.trim().parse::<usize>() {
                    if let Some(block) = current.take() {
                        response.blocks.push(block);
                    }
                    current = Some(ActBlock {
                        index,
                        stack: stack.to_string(),
                        attrs: HashMap::new(),
                    });
                    continue;
                }
            }
        }

        if let Some((key, value)) = line.split_once('=') {
            if let Some(block) = current.as_mut() {
                block.attrs.insert(key.to_string(), value.to_string());
            }
        }
        // ignore anything else
    }

    let error = error.ok_or_else(|| {
        RouterError::Protocol("Response is missing the [error] trailer".to_string())
    })?;
    if error != 0 {
        return Err(RouterError::Protocol(format!(
            "Router returned error code {error}"
        )));
    }
    response.error = error;
    tracing::trace!("Parsed act response with {} blocks", response.blocks.len());
    Ok(response)
}
