// crt.sh record parsing and subdomain extraction
// Licensed under GPL-3.0

use serde::Deserialize;
use std::collections::BTreeSet;

/// One certificate record from the crt.sh JSON output.
///
/// `name_value` carries one or more subject names for the certificate,
/// newline-delimited.
#[derive(Debug, Clone, Deserialize)]
pub struct CrtshRecord {
    #[serde(default)]
    pub name_value: String,
}

/// Extract the unique subdomains of `domain` from crt.sh records.
///
/// Each name is trimmed and retained only if it ends with the target domain
/// (exact, case-sensitive suffix match). Names are kept as returned by the
/// service, wildcard entries included. The BTreeSet deduplicates and yields
/// lexicographic order.
pub fn extract_subdomains(records: &[CrtshRecord], domain: &str) -> BTreeSet<String> {
    let mut subdomains = BTreeSet::new();

    for record in records {
        for name in record.name_value.lines() {
            let name = name.trim();
            if name.ends_with(domain) {
                subdomains.insert(name.to_string());
            }
        }
    }

    subdomains
}
