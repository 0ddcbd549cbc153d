//! Scoped local-variable slot table.

use brio_parser::NameId;
use std::collections::HashMap;

/// Maps names to local slots across a stack of shadowing scopes.
///
/// Slots are handed out monotonically for the whole function; leaving a scope
/// removes its bindings from visibility but never recycles their slots, so
/// `len()` is the function's local high-water mark.
pub(super) struct ScopedLocalNameTable {
    next_slot: usize,
    /// Innermost scope last; each entry lists the names bound in that scope.
    scopes: Vec<Vec<NameId>>,
    /// Per-name stack of slots, innermost binding last.
    bindings: HashMap<NameId, Vec<usize>>,
}

impl ScopedLocalNameTable {
    pub(super) fn new() -> Self {
        ScopedLocalNameTable {
            next_slot: 0,
            scopes: Vec::new(),
            bindings: HashMap::new(),
        }
    }

    /// Slot of the innermost live binding for `name`.
    pub(super) fn lookup(&self, name: NameId) -> Option<usize> {
        self.bindings.get(&name).and_then(|stack| stack.last()).copied()
    }

    /// Bind `name` to a fresh slot in the innermost scope. Function
    /// parameters are added before any scope opens and stay bound until the
    /// table is reset for the next function.
    pub(super) fn add(&mut self, name: NameId) -> usize {
        let slot = self.next_slot;
        self.next_slot += 1;
        self.bindings.entry(name).or_default().push(slot);
        if let Some(scope) = self.scopes.last_mut() {
            scope.push(name);
        }
        slot
    }

    pub(super) fn enter_scope(&mut self) {
        self.scopes.push(Vec::new());
    }

    /// Drop the innermost scope's bindings. `next_slot` is untouched.
    pub(super) fn leave_scope(&mut self) {
        let Some(scope) = self.scopes.pop() else { return };
        for name in scope {
            if let Some(stack) = self.bindings.get_mut(&name) {
                stack.pop();
                if stack.is_empty() {
                    self.bindings.remove(&name);
                }
            }
        }
    }

    /// Total slots ever allocated, the function's `local_count`.
    pub(super) fn len(&self) -> usize {
        self.next_slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_monotone_across_scopes() {
        let mut locals = ScopedLocalNameTable::new();
        let a = NameId::new(0);
        let b = NameId::new(1);
        let c = NameId::new(2);

        assert_eq!(locals.add(a), 0);
        locals.enter_scope();
        assert_eq!(locals.add(b), 1);
        locals.leave_scope();
        locals.enter_scope();
        // Slot 1 is dead but never handed out again.
        assert_eq!(locals.add(c), 2);
        locals.leave_scope();

        assert_eq!(locals.len(), 3);
    }

    #[test]
    fn test_leave_scope_removes_visibility() {
        let mut locals = ScopedLocalNameTable::new();
        let x = NameId::new(0);

        locals.enter_scope();
        locals.add(x);
        assert_eq!(locals.lookup(x), Some(0));
        locals.leave_scope();
        assert_eq!(locals.lookup(x), None);
    }

    #[test]
    fn test_lookup_finds_innermost_binding() {
        let mut locals = ScopedLocalNameTable::new();
        let x = NameId::new(0);

        let outer = locals.add(x);
        locals.enter_scope();
        let inner = locals.add(x);
        assert_ne!(outer, inner);
        assert_eq!(locals.lookup(x), Some(inner));
        locals.leave_scope();
        assert_eq!(locals.lookup(x), Some(outer));
    }

    #[test]
    fn test_parameters_survive_block_scopes() {
        let mut locals = ScopedLocalNameTable::new();
        let p = NameId::new(0);

        locals.add(p); // parameter, no scope open yet
        locals.enter_scope();
        locals.leave_scope();
        assert_eq!(locals.lookup(p), Some(0));
    }
}
