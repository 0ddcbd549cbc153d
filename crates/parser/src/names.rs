//! Name interner for identifier text.
//!
//! Interns identifiers to dense 32-bit ids so that every later stage can
//! compare and store names without touching the text again.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A dense id for an interned name.
///
/// Ids are allocated in insertion order and are never reused or invalidated
/// for the lifetime of the [`NameTable`] that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NameId(u32);

impl NameId {
    /// Sentinel for "no such name".
    pub const INVALID: NameId = NameId(u32::MAX);

    pub fn new(id: u32) -> Self {
        NameId(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameId({})", self.0)
    }
}

/// Bidirectional mapping between identifier text and [`NameId`].
///
/// The table owns the text; the lookup index keys on owned strings so ids and
/// borrowed names stay valid for the table's whole lifetime. The index is
/// skipped during serialization and rebuilt afterwards.
#[derive(Serialize, Deserialize)]
pub struct NameTable {
    names: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, NameId>,
}

impl NameTable {
    pub fn new() -> Self {
        NameTable {
            names: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Look up a name without interning it.
    pub fn lookup(&self, name: &str) -> Option<NameId> {
        self.index.get(name).copied()
    }

    /// Intern a name, returning its id. Idempotent: equal text always maps to
    /// the same id.
    pub fn intern(&mut self, name: &str) -> NameId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = NameId::new(self.names.len() as u32);
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    /// Get the text for an id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this table.
    pub fn name_of(&self, id: NameId) -> &str {
        &self.names[id.as_u32() as usize]
    }

    /// Number of interned names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Rebuild the lookup index from the name vector. Needed after
    /// deserialization since the index is not serialized.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        for (idx, name) in self.names.iter().enumerate() {
            self.index.insert(name.clone(), NameId::new(idx as u32));
        }
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new()
    }
}
