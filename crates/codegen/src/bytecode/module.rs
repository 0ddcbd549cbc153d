//! Compiled module structure.

use super::function::Function;
use brio_parser::NameId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A self-contained compiled module.
///
/// Owns its string literals and instruction vectors; names are referenced by
/// id, so the module is serializable independently of the name table that
/// issued them. The function map is insertion-ordered, which keeps
/// disassembly deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BytecodeModule {
    pub functions: IndexMap<NameId, Function>,
    /// String literal pool referenced by `LISTR` operands.
    pub str_lits: Vec<String>,
    /// Module-level global variable names; functions are not included.
    pub global_names: Vec<NameId>,
}

impl BytecodeModule {
    pub fn new() -> Self {
        BytecodeModule {
            functions: IndexMap::new(),
            str_lits: Vec::new(),
            global_names: Vec::new(),
        }
    }

    pub fn add_function(&mut self, function: Function) {
        self.functions.insert(function.name, function);
    }

    pub fn get_function(&self, name: NameId) -> Option<&Function> {
        self.functions.get(&name)
    }
}

impl Default for BytecodeModule {
    fn default() -> Self {
        Self::new()
    }
}
