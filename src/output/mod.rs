// Console reporting - progress, diagnostics and result listings
// Licensed under GPL-3.0

use colored::Colorize;
use std::collections::BTreeSet;

/// Progress line to stdout.
pub fn progress(message: &str) {
    println!("{} {}", "[+]".green().bold(), message);
}

/// Diagnostic line to stderr.
pub fn diagnostic(message: &str) {
    eprintln!("{} {}", "[!]".red().bold(), message);
}

/// A resolved candidate, reported as it is discovered.
pub fn found(hostname: &str, ip: &str) {
    println!("{} {} -> {}", "[FOUND]".green().bold(), hostname.cyan(), ip);
}

/// Count plus full sorted listing of a subdomain set.
pub fn subdomain_set(subdomains: &BTreeSet<String>) {
    progress(&format!("Found {} unique subdomains:", subdomains.len()));
    for subdomain in subdomains {
        println!("{subdomain}");
    }
}
