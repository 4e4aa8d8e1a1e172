// Wordlist brute-force resolver - sequential or bounded-concurrency DNS lookups
// Licensed under GPL-3.0

use crate::output;
use crate::wordlist::Wordlist;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use std::net::IpAddr;

/// A successfully resolved candidate, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Full hostname (`word.domain`)
    pub hostname: String,
    /// First resolved address
    pub ip: IpAddr,
}

/// Name lookup backend.
///
/// A lookup miss (name does not exist) and any other resolution failure are
/// both reported as `None`; the scan makes no distinction between them.
#[async_trait]
pub trait Lookup: Send + Sync {
    async fn lookup_ip(&self, name: &str) -> Option<IpAddr>;
}

/// System DNS via hickory-resolver.
pub struct DnsLookup {
    resolver: TokioAsyncResolver,
}

impl DnsLookup {
    pub fn new() -> Self {
        let resolver =
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());
        Self { resolver }
    }
}

impl Default for DnsLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Lookup for DnsLookup {
    async fn lookup_ip(&self, name: &str) -> Option<IpAddr> {
        self.resolver
            .lookup_ip(name)
            .await
            .ok()
            .and_then(|response| response.iter().next())
    }
}

/// Brute-force scanner: tries `word.domain` for every wordlist entry.
pub struct WordlistResolver<L: Lookup> {
    lookup: L,
    concurrency: usize,
}

impl WordlistResolver<DnsLookup> {
    /// Scanner backed by the system DNS resolver.
    pub fn new(concurrency: usize) -> Self {
        Self::with_lookup(DnsLookup::new(), concurrency)
    }
}

impl<L: Lookup> WordlistResolver<L> {
    /// Scanner with an injected lookup backend.
    pub fn with_lookup(lookup: L, concurrency: usize) -> Self {
        Self {
            lookup,
            concurrency: concurrency.max(1),
        }
    }

    /// Attempt resolution of every candidate, reporting each hit as it
    /// resolves and a summary count at the end.
    ///
    /// Returns successes only. With concurrency 1 the lookups run strictly
    /// one at a time in wordlist order, so discovery order equals wordlist
    /// order; with a larger pool only the final set is guaranteed.
    pub async fn scan(&self, domain: &str, wordlist: &Wordlist) -> Vec<Discovery> {
        output::progress(&format!(
            "Scanning {} subdomains for {}...",
            wordlist.len(),
            domain
        ));

        let discoveries: Vec<Discovery> = stream::iter(wordlist.words())
            .map(|word| {
                let hostname = format!("{}.{}", word, domain);
                async move {
                    let ip = self.lookup.lookup_ip(&hostname).await?;
                    output::found(&hostname, &ip.to_string());
                    Some(Discovery { hostname, ip })
                }
            })
            .buffer_unordered(self.concurrency)
            .filter_map(|hit| async move { hit })
            .collect()
            .await;

        output::progress(&format!(
            "Scan complete. {} valid subdomains found.",
            discoveries.len()
        ));

        discoveries
    }
}
