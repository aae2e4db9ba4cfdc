//! Fully-qualified domain names for `search` lines.

use crate::error::FqdnError;
use std::fmt;
use std::str::FromStr;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A validated domain name, always stored with its trailing dot.
///
/// Labels are not held to hostname rules: DNS labels may carry nearly any
/// byte, so only emptiness, length, and bytes that would break the
/// line-oriented resolver format are rejected.
///
/// ```
/// use direct_resolver::Fqdn;
///
/// let name: Fqdn = "corp.example.com".parse().unwrap();
/// assert_eq!(name.as_str(), "corp.example.com.");
/// assert_eq!(name.without_trailing_dot(), "corp.example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fqdn(String);

impl Fqdn {
    /// Validates `name` and normalises it to end with a dot.
    ///
    /// A single leading dot is dropped. The empty string and `"."` both
    /// denote the root.
    ///
    /// # Errors
    ///
    /// Returns an [`FqdnError`] describing the first rule `name` breaks.
    pub fn new(name: &str) -> Result<Self, FqdnError> {
        if name.is_empty() || name == "." {
            return Ok(Self::root());
        }
        let name = name.strip_prefix('.').unwrap_or(name);
        let bare = name.strip_suffix('.').unwrap_or(name);

        if let Some(ch) = bare
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '#' | ';'))
        {
            return Err(FqdnError::InvalidChar {
                name: name.to_string(),
                ch,
            });
        }
        if bare.len() > MAX_NAME_LEN {
            return Err(FqdnError::NameTooLong { len: bare.len() });
        }
        for label in bare.split('.') {
            if label.is_empty() {
                return Err(FqdnError::EmptyLabel {
                    name: name.to_string(),
                });
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(FqdnError::LabelTooLong {
                    label: label.to_string(),
                    len: label.len(),
                });
            }
        }
        Ok(Self(format!("{bare}.")))
    }

    /// The root name, `.`.
    #[must_use]
    pub fn root() -> Self {
        Self(".".to_string())
    }

    /// Returns `true` for the root name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "."
    }

    /// The name with its trailing dot.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The presentation form used in resolver files.
    ///
    /// The root keeps its dot, since an empty token cannot be written.
    #[must_use]
    pub fn without_trailing_dot(&self) -> &str {
        if self.is_root() {
            &self.0
        } else {
            &self.0[..self.0.len() - 1]
        }
    }
}

impl FromStr for Fqdn {
    type Err = FqdnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Fqdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fqdn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
