//! `resolv.conf(5)` generation and parsing.
//!
//! Only the `nameserver` and `search` keywords are understood. Everything
//! else (`options`, `domain`, `sortlist`, comments) is skipped when reading
//! and never produced when writing.

use crate::config::OsConfig;
use crate::error::{ResolverError, Result};
use crate::fqdn::Fqdn;
use std::fmt::Write as _;
use std::net::IpAddr;

/// Second header line of every generated file.
const DO_NOT_EDIT: &str = "# DO NOT EDIT THIS FILE BY HAND -- CHANGES WILL BE OVERWRITTEN";

/// Returns the marker identifying files generated for `app`.
///
/// ```
/// assert_eq!(direct_resolver::resolv_conf::marker("myapp"), "generated by myapp");
/// ```
#[must_use]
pub fn marker(app: &str) -> String {
    format!("generated by {app}")
}

/// Generates resolver file content.
///
/// ```text
/// # resolv.conf(5) file generated by myapp
/// # DO NOT EDIT THIS FILE BY HAND -- CHANGES WILL BE OVERWRITTEN
///
/// nameserver 100.100.100.100
/// search corp.example.com
/// ```
///
/// The `search` line is omitted when `domains` is empty.
#[must_use]
pub fn format_resolv_conf(app: &str, servers: &[IpAddr], domains: &[Fqdn]) -> String {
    let mut out = format!("# resolv.conf(5) file {}\n{DO_NOT_EDIT}\n\n", marker(app));
    for ns in servers {
        let _ = writeln!(out, "nameserver {ns}");
    }
    if !domains.is_empty() {
        out.push_str("search");
        for domain in domains {
            out.push(' ');
            out.push_str(domain.without_trailing_dot());
        }
        out.push('\n');
    }
    out
}

/// Parses resolver file content into an [`OsConfig`].
///
/// A trimmed line that starts with `nameserver` or `search` is read as that
/// keyword even without a following space, so `nameservers 1.1.1.1` is a
/// malformed nameserver line rather than an unknown one.
///
/// Every `search` line contributes its names in order; a second line does
/// not replace the first.
///
/// # Errors
///
/// Returns [`ResolverError::InvalidNameserver`] or
/// [`ResolverError::InvalidSearchDomain`] with the offending line.
pub fn parse_resolv_conf(text: &str) -> Result<OsConfig> {
    let mut config = OsConfig::new();
    for line in text.lines() {
        let line = line.trim();
        if let Some(addr) = line.strip_prefix("nameserver") {
            let ip = addr
                .trim()
                .parse::<IpAddr>()
                .map_err(|source| ResolverError::InvalidNameserver {
                    line: line.to_string(),
                    source,
                })?;
            config.nameservers.push(ip);
        } else if let Some(names) = line.strip_prefix("search") {
            for name in names.split_whitespace() {
                let fqdn = Fqdn::new(name).map_err(|source| ResolverError::InvalidSearchDomain {
                    line: line.to_string(),
                    source,
                })?;
                config.search_domains.push(fqdn);
            }
        }
    }
    Ok(config)
}
