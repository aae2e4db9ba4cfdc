//! Error types.

use thiserror::Error;

/// Result alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Errors returned by resolver operations.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Filesystem I/O failed (typically `PermissionDenied` on `/etc`).
    ///
    /// Missing files are never reported through this variant by the
    /// manager; absence is a state, not a failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `nameserver` line did not carry a valid IP literal.
    #[error("invalid nameserver line {line:?}: {source}")]
    InvalidNameserver {
        /// The offending line, trimmed.
        line: String,
        /// Why the address was rejected.
        source: std::net::AddrParseError,
    },

    /// A `search` line contained a token that is not a domain name.
    #[error("invalid search domain in line {line:?}: {source}")]
    InvalidSearchDomain {
        /// The offending line, trimmed.
        line: String,
        /// Why the name was rejected.
        source: FqdnError,
    },

    /// The OS random source failed while naming a temporary file.
    #[error("random source unavailable: {0}")]
    RandomSource(#[source] rand::Error),
}

impl ResolverError {
    /// Returns `true` if the underlying I/O error is `PermissionDenied`.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied)
    }

    /// Returns `true` for parse failures of resolver file content.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidNameserver { .. } | Self::InvalidSearchDomain { .. }
        )
    }
}

/// Reasons a string is not a valid fully-qualified domain name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FqdnError {
    /// Two consecutive dots, or a dot-only name other than the root.
    #[error("empty label in {name:?}")]
    EmptyLabel {
        /// The rejected name.
        name: String,
    },

    /// A label exceeds 63 bytes.
    #[error("label {label:?} is {len} bytes, maximum is 63")]
    LabelTooLong {
        /// The offending label.
        label: String,
        /// Its length in bytes.
        len: usize,
    },

    /// The whole name exceeds 253 bytes.
    #[error("name is {len} bytes, maximum is 253")]
    NameTooLong {
        /// Length in bytes, excluding the trailing dot.
        len: usize,
    },

    /// The name contains a byte that cannot appear in a resolver file.
    #[error("invalid character {ch:?} in {name:?}")]
    InvalidChar {
        /// The rejected name.
        name: String,
        /// The first invalid character.
        ch: char,
    },
}
