// Host address lookup — resolves the machine's own address by hostname.
//
// Modeled as a swap-ready collaborator so tests can substitute a failing
// resolver and exercise the sentinel path without touching the network.

use std::net::{IpAddr, ToSocketAddrs};

use anyhow::{Context, Result};
use tracing::warn;

/// The literal written to the report when resolution fails. The lookup is
/// the one place in the run where failure is swallowed.
pub const UNKNOWN_IP: &str = "Unknown IP";

/// Resolves the current host's network address.
pub trait AddressResolver {
    fn resolve(&self) -> Result<IpAddr>;
}

/// Resolver backed by the system hostname and name resolution — asks the
/// resolver what address the host's own name maps to.
pub struct SystemResolver;

impl AddressResolver for SystemResolver {
    fn resolve(&self) -> Result<IpAddr> {
        let hostname = gethostname::gethostname();
        let hostname = hostname.to_str().context("Hostname is not valid UTF-8")?;

        let addrs: Vec<IpAddr> = (hostname, 0u16)
            .to_socket_addrs()
            .with_context(|| format!("Failed to resolve hostname: {hostname}"))?
            .map(|sa| sa.ip())
            .collect();

        // Prefer IPv4 when the resolver returns both families.
        addrs
            .iter()
            .find(|ip| ip.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .with_context(|| format!("Hostname resolved to no addresses: {hostname}"))
    }
}

/// Collapse resolution to a display string: the address on success, the
/// [`UNKNOWN_IP`] sentinel on any failure. Never empty, never an error.
pub fn host_address(resolver: &dyn AddressResolver) -> String {
    match resolver.resolve() {
        Ok(ip) => ip.to_string(),
        Err(e) => {
            warn!(error = %e, "Host address lookup failed, using sentinel");
            UNKNOWN_IP.to_string()
        }
    }
}
