use std::io;
use thiserror::Error;
use tracing::{debug, warn};
use trust_dns_resolver::{
    Resolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    proto::op::ResponseCode,
};

use crate::config::CleanerConfig;

#[cfg(test)]
use mockall::automock;

/// A single mail-exchange entry for a domain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Why an MX lookup failed outright (as opposed to answering with no
/// records).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MxLookupError {
    #[error("DNS query timed out")]
    Timeout,
    #[error("no nameservers available for resolving the domain")]
    NoNameservers,
    #[error("DNS resolution error: {0}")]
    Other(String),
}

/// Classified outcome of one MX lookup.
///
/// `NoRecords` covers both an answer with zero MX records and a domain that
/// does not exist; the two causes are logged differently at the lookup
/// boundary but are identical to callers. `Failed` never propagates as an
/// error — a domain that cannot be resolved is treated exactly like a domain
/// with no mail service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MxStatus {
    Records(Vec<MxRecord>),
    NoRecords,
    Failed(MxLookupError),
}

impl MxStatus {
    /// True iff the lookup produced at least one mail-exchange entry.
    pub fn has_records(&self) -> bool {
        matches!(self, Self::Records(records) if !records.is_empty())
    }
}

/// Mail-exchange resolution seam.
///
/// The cleaning pipeline only depends on this trait, so tests substitute a
/// mock and never touch the network.
#[cfg_attr(test, automock)]
pub trait MxResolve {
    fn resolve_mx(&self, domain: &str) -> MxStatus;
}

/// MX resolution over the system's blocking DNS resolver.
pub struct SystemMxResolver {
    resolver: Resolver,
}

impl SystemMxResolver {
    /// Creates a resolver with the configured per-request timeout and retry
    /// attempts on the default resolver configuration.
    pub fn new(config: &CleanerConfig) -> io::Result<Self> {
        let mut opts = ResolverOpts::default();
        opts.timeout = config.dns_timeout;
        opts.attempts = config.dns_attempts;

        let resolver =
            Resolver::new(ResolverConfig::default(), opts).map_err(io::Error::other)?;
        Ok(Self { resolver })
    }
}

impl MxResolve for SystemMxResolver {
    fn resolve_mx(&self, domain: &str) -> MxStatus {
        match self.resolver.mx_lookup(domain) {
            Ok(lookup) => {
                let mut records: Vec<MxRecord> = lookup
                    .iter()
                    .map(|mx| MxRecord::new(mx.preference(), mx.exchange().to_utf8()))
                    .collect();

                if records.is_empty() {
                    warn!("no MX records found for {domain}");
                    return MxStatus::NoRecords;
                }

                records.sort();
                debug!("{domain} has {} MX record(s)", records.len());
                MxStatus::Records(records)
            }
            Err(err) => classify_failure(domain, &err),
        }
    }
}

/// Maps a resolution error onto the outcome the pipeline consumes. Every
/// branch is reported here and returned as data; none are raised.
fn classify_failure(domain: &str, err: &ResolveError) -> MxStatus {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            warn!("domain {domain} does not exist");
            MxStatus::NoRecords
        }
        ResolveErrorKind::NoRecordsFound { .. } => {
            warn!("no MX records found for {domain}");
            MxStatus::NoRecords
        }
        ResolveErrorKind::Timeout => {
            warn!("DNS query for {domain} timed out");
            MxStatus::Failed(MxLookupError::Timeout)
        }
        ResolveErrorKind::NoConnections => {
            warn!("no nameservers available for resolving {domain}");
            MxStatus::Failed(MxLookupError::NoNameservers)
        }
        _ => {
            warn!("DNS resolution error for {domain}: {err}");
            MxStatus::Failed(MxLookupError::Other(err.to_string()))
        }
    }
}
