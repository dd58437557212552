use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use strew_locator::Locator;

use crate::error::{StorageError, StorageResult};
use crate::traits::{check_cancel, CreateDirOptions, DirectoryCreator, LeafWriter, WriteOptions};

/// An entry in the in-memory tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Directory,
    Text(String),
    Bytes(Vec<u8>),
}

/// One recorded backend call, in issue order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    CreateDir {
        locator: String,
        recursive: bool,
        mode: Option<u32>,
    },
    WriteText {
        locator: String,
        content: String,
    },
    WriteBytes {
        locator: String,
        content: Vec<u8>,
    },
}

#[derive(Default)]
struct State {
    entries: HashMap<String, Entry>,
    ops: Vec<Op>,
}

/// In-memory target store for tests and embedding.
///
/// Entries are held behind a `RwLock` keyed by the locator's display
/// form. Besides the tree itself, the store records every call it
/// receives in an ordered [`Op`] log, so tests can assert on exactly
/// which operations the engine issued and in what order.
///
/// Non-recursive directory creation enforces the parent-must-exist rule;
/// leaf writes require the parent directory to exist.
pub struct MemoryFs {
    state: RwLock<State>,
}

impl MemoryFs {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }

    /// Snapshot of the ordered operation log.
    pub fn ops(&self) -> Vec<Op> {
        self.state.read().expect("lock poisoned").ops.clone()
    }

    /// The entry at `locator`, if any.
    pub fn entry(&self, locator: &Locator) -> Option<Entry> {
        self.state
            .read()
            .expect("lock poisoned")
            .entries
            .get(&locator.to_string())
            .cloned()
    }

    /// Returns `true` if any entry exists at `locator`.
    pub fn contains(&self, locator: &Locator) -> bool {
        self.entry(locator).is_some()
    }

    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        self.state.read().expect("lock poisoned").entries.len()
    }

    /// Returns `true` if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_dir(state: &State, locator: &Locator) -> bool {
        // The scheme root always exists as a directory.
        locator.parent().is_none()
            || matches!(state.entries.get(&locator.to_string()), Some(Entry::Directory))
    }
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryFs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryFs")
            .field("entries", &self.len())
            .finish()
    }
}

#[async_trait]
impl DirectoryCreator for MemoryFs {
    async fn create_dir(
        &self,
        locator: &Locator,
        options: &CreateDirOptions,
    ) -> StorageResult<()> {
        check_cancel(&options.cancel)?;
        let mut state = self.state.write().expect("lock poisoned");
        state.ops.push(Op::CreateDir {
            locator: locator.to_string(),
            recursive: options.recursive,
            mode: options.mode,
        });

        if options.recursive {
            // Materialize the whole ancestor chain, root first.
            let mut chain = vec![locator.clone()];
            let mut cursor = locator.clone();
            while let Some(parent) = cursor.parent() {
                chain.push(parent.clone());
                cursor = parent;
            }
            for ancestor in chain.into_iter().rev() {
                let key = ancestor.to_string();
                match state.entries.get(&key) {
                    None => {
                        state.entries.insert(key, Entry::Directory);
                    }
                    Some(Entry::Directory) => {}
                    Some(_) => return Err(StorageError::AlreadyExists { path: key }),
                }
            }
            return Ok(());
        }

        if let Some(parent) = locator.parent() {
            if !Self::is_dir(&state, &parent) {
                return Err(StorageError::ParentMissing {
                    path: locator.to_string(),
                });
            }
        }
        let key = locator.to_string();
        if state.entries.contains_key(&key) {
            return Err(StorageError::AlreadyExists { path: key });
        }
        state.entries.insert(key, Entry::Directory);
        Ok(())
    }
}

#[async_trait]
impl LeafWriter for MemoryFs {
    async fn write_text(
        &self,
        locator: &Locator,
        content: &str,
        options: &WriteOptions,
    ) -> StorageResult<()> {
        self.write_entry(
            locator,
            Entry::Text(content.to_string()),
            Op::WriteText {
                locator: locator.to_string(),
                content: content.to_string(),
            },
            options,
        )
    }

    async fn write_bytes(
        &self,
        locator: &Locator,
        content: &[u8],
        options: &WriteOptions,
    ) -> StorageResult<()> {
        self.write_entry(
            locator,
            Entry::Bytes(content.to_vec()),
            Op::WriteBytes {
                locator: locator.to_string(),
                content: content.to_vec(),
            },
            options,
        )
    }
}

impl MemoryFs {
    fn write_entry(
        &self,
        locator: &Locator,
        entry: Entry,
        op: Op,
        options: &WriteOptions,
    ) -> StorageResult<()> {
        check_cancel(&options.cancel)?;
        let mut state = self.state.write().expect("lock poisoned");
        state.ops.push(op);
        if let Some(parent) = locator.parent() {
            if !Self::is_dir(&state, &parent) {
                return Err(StorageError::ParentMissing {
                    path: locator.to_string(),
                });
            }
        }
        state.entries.insert(locator.to_string(), entry);
        Ok(())
    }
}
