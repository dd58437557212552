use std::fmt;
use std::str::FromStr;

use crate::error::{LocatorError, LocatorResult};
use crate::normalize::normalize_path;

/// An absolute hierarchical address in the target store.
///
/// A locator is a scheme/authority/path triple rendered as
/// `scheme://authority/path`. Instances are always canonical: the path is
/// normalized and carries no trailing separator (the root path `/` is its
/// own canonical form). Locators are transient values; the engine never
/// retains them across invocations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locator {
    scheme: String,
    authority: String,
    path: String,
}

impl Locator {
    /// Parse a locator from its `scheme://authority/path` form.
    ///
    /// The path component may be denormalized (`.`/`..` segments,
    /// duplicate or trailing separators); it is normalized here. A
    /// missing path is treated as the root path.
    pub fn parse(input: &str) -> LocatorResult<Self> {
        let (scheme, rest) = input.split_once("://").ok_or_else(|| {
            LocatorError::InvalidLocator {
                input: input.to_string(),
                reason: "missing '://' scheme separator".to_string(),
            }
        })?;
        if scheme.is_empty() {
            return Err(LocatorError::InvalidLocator {
                input: input.to_string(),
                reason: "empty scheme".to_string(),
            });
        }
        let (authority, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, "/"),
        };
        Ok(Self {
            scheme: scheme.to_string(),
            authority: authority.to_string(),
            path: normalize_path(path),
        })
    }

    /// The scheme component.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The authority component (may be empty).
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// The normalized, trailing-separator-free path component.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The locator one level up, or `None` at the root.
    pub fn parent(&self) -> Option<Locator> {
        if self.path == "/" {
            return None;
        }
        let cut = self.path.rfind('/').expect("canonical path is absolute");
        let parent_path = if cut == 0 { "/" } else { &self.path[..cut] };
        Some(Self {
            scheme: self.scheme.clone(),
            authority: self.authority.clone(),
            path: parent_path.to_string(),
        })
    }

    /// Join `name` onto this locator with exactly one separator and
    /// re-normalize.
    ///
    /// Deliberately crate-private: child derivation without the
    /// containment check must not leave this crate. Use
    /// [`DirResolver::child_location`](crate::DirResolver::child_location).
    pub(crate) fn join_child(&self, name: &str) -> Locator {
        let joined = if self.path == "/" {
            format!("/{name}")
        } else {
            format!("{}/{name}", self.path)
        };
        Self {
            scheme: self.scheme.clone(),
            authority: self.authority.clone(),
            path: normalize_path(&joined),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.authority, self.path)
    }
}

impl FromStr for Locator {
    type Err = LocatorError;

    fn from_str(input: &str) -> LocatorResult<Self> {
        Self::parse(input)
    }
}
