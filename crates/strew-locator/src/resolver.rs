use crate::error::{LocatorError, LocatorResult};
use crate::locator::Locator;

/// A directory's canonical location and the safe way to derive its
/// children.
///
/// `child_location` joins a name onto the directory, re-normalizes, and
/// requires the result to stay inside the directory's subtree. The check
/// is containment after normalization, not a `..` blacklist: a name whose
/// traversal segments net back inside the directory is accepted.
#[derive(Clone, Debug)]
pub struct DirResolver {
    dir: Locator,
}

impl DirResolver {
    /// Build a resolver over a directory location.
    ///
    /// [`Locator`] values are canonical by construction, so no further
    /// normalization happens here.
    pub fn new(dir: &Locator) -> Self {
        Self { dir: dir.clone() }
    }

    /// The canonical directory location.
    pub fn dir(&self) -> &Locator {
        &self.dir
    }

    /// Derive the location of the entry `name` inside this directory.
    ///
    /// Fails with [`LocatorError::Escape`] when the normalized result does
    /// not have this directory's path (plus a separator) as a prefix --
    /// including a name that resolves to the directory itself.
    pub fn child_location(&self, name: &str) -> LocatorResult<Locator> {
        let child = self.dir.join_child(name);
        let dir_path = self.dir.path();
        let contained = if dir_path == "/" {
            child.path() != "/"
        } else {
            child.path().len() > dir_path.len() + 1
                && child.path().starts_with(dir_path)
                && child.path().as_bytes()[dir_path.len()] == b'/'
        };
        if !contained {
            return Err(LocatorError::Escape {
                name: name.to_string(),
                resolved: child.to_string(),
                enclosing: self.dir.to_string(),
            });
        }
        Ok(child)
    }
}
