//! Bytecode instruction representation.
//!
//! Every instruction is an opcode plus exactly one operand slot. The slot is
//! 64 bits wide and its interpretation is opcode-determined: an immediate
//! integer, a float bit pattern, a boolean, an interned name, or an index
//! (local slot, jump target, pool entry, argument count). Opcodes that take
//! no operand leave the slot zero.

use super::opcode::Opcode;
use brio_parser::NameId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single 64-bit operand slot.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand(u64);

impl Operand {
    /// The zero slot, for opcodes without a meaningful operand and for jump
    /// placeholders awaiting back-patching.
    pub const NONE: Operand = Operand(0);

    pub fn int(value: u64) -> Self {
        Operand(value)
    }

    pub fn num(value: f64) -> Self {
        Operand(value.to_bits())
    }

    pub fn boolean(value: bool) -> Self {
        Operand(u64::from(value))
    }

    pub fn name(id: NameId) -> Self {
        Operand(u64::from(id.as_u32()))
    }

    pub fn index(idx: usize) -> Self {
        Operand(idx as u64)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from_bits(self.0)
    }

    pub fn as_bool(self) -> bool {
        self.0 != 0
    }

    pub fn as_name(self) -> NameId {
        NameId::new(self.0 as u32)
    }

    pub fn as_index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operand({})", self.0)
    }
}

/// One bytecode instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand: Operand,
}

impl Instruction {
    pub fn new(opcode: Opcode, operand: Operand) -> Self {
        Instruction { opcode, operand }
    }
}
