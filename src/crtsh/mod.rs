// crt.sh Certificate Transparency Search Module
//
// Retrieves historically observed subdomains for a target domain from the
// crt.sh certificate transparency search service.

pub mod client;
pub mod parser;

pub use client::{CrtshClient, CrtshConfig};
pub use parser::CrtshRecord;
