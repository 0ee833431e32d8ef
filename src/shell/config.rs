// Environment-derived configuration for the shell.
//
// Responsibilities
// - Resolve the bind address from BIND_ADDR, falling back to the default.
// - Fail at startup on an unparseable value instead of panicking later.

use anyhow::Context;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub bind_addr: SocketAddr,
}

impl ShellConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Ok(Self {
            bind_addr: parse_bind_addr(&raw)?,
        })
    }
}

fn parse_bind_addr(raw: &str) -> anyhow::Result<SocketAddr> {
    raw.parse()
        .with_context(|| format!("invalid bind address: {raw}"))
}
