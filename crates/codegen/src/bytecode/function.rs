//! Function bytecode representation.

use super::instruction::{Instruction, Operand};
use super::opcode::Opcode;
use brio_parser::NameId;
use serde::{Deserialize, Serialize};

/// A compiled function: a flat instruction vector plus slot bookkeeping.
///
/// The first `arg_count` local slots hold the positional parameters in
/// declaration order. `local_count` is the high-water mark of slots ever
/// allocated in the function; slots are not reused when scopes close, so
/// `arg_count <= local_count` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    pub name: NameId,
    pub arg_count: usize,
    pub local_count: usize,
    pub instructions: Vec<Instruction>,
}

impl Function {
    pub fn new(name: NameId) -> Self {
        Function {
            name,
            arg_count: 0,
            local_count: 0,
            instructions: Vec::new(),
        }
    }

    /// Append an instruction and return its index, so forward jumps can be
    /// patched once their target is known.
    pub fn emit(&mut self, opcode: Opcode, operand: Operand) -> usize {
        self.instructions.push(Instruction::new(opcode, operand));
        self.instructions.len() - 1
    }

    /// Overwrite the operand of the jump at `at` with an absolute target
    /// index. A target equal to `len()` is fall-through to the function end.
    pub fn patch_jump(&mut self, at: usize, target: usize) {
        self.instructions[at].operand = Operand::index(target);
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
