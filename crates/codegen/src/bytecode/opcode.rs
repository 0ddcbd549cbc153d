//! Opcode definitions for the stack-machine instruction set.
//!
//! 53 opcodes organized by family:
//! - Arithmetic and logical operations (pop operands, push one result)
//! - Stack and literal operations (immediates, locals, globals, stack shuffles)
//! - Object operations (property access, construction)
//! - Control flow (jumps, calls, returns)
//! - Sentinels (`NOP`, `INVALID`)
//!
//! Discriminants are stable across versions; consumers use them as array
//! indices and in serialized modules.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Opcode {
    // Sentinels (0-1)
    Nop = 0,
    Invalid = 1,

    // Arithmetic and logical (2-24)
    Add = 2,
    Sub = 3,
    Mul = 4,
    Div = 5,
    Mod = 6,
    Pow = 7,
    IntDiv = 8,
    Neg = 9,
    BitXor = 10,
    BitAnd = 11,
    BitOr = 12,
    BitNot = 13,
    Shl = 14,
    Shr = 15,
    Eq = 16,
    Ne = 17,
    Lt = 18,
    Le = 19,
    Gt = 20,
    Ge = 21,
    And = 22,
    Or = 23,
    Not = 24,

    // Stack and literals (25-40)
    LoadInt = 25,
    LoadNum = 26,
    LoadNull = 27,
    LoadBool = 28,
    LoadStr = 29,
    LoadArr = 30,
    LoadObj = 31,
    LoadLambda = 32,
    LoadGlobal = 33,
    LoadLocal = 34,
    StoreGlobal = 35,
    StoreLocal = 36,
    PopN = 37,
    Swap = 38,
    Rot3 = 39,
    Dup = 40,

    // Object (41-45)
    GetProp = 41,
    SetProp = 42,
    GetDyn = 43,
    SetDyn = 44,
    NewObject = 45,

    // Control flow (46-52)
    Jump = 46,
    JumpZero = 47,
    JumpNotZero = 48,
    Call = 49,
    Ret = 50,
    RetNull = 51,
    Yield = 52,
}

impl Opcode {
    /// Assembly mnemonic, used by the disassembler.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::Invalid => "INVALID",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::Pow => "POW",
            Opcode::IntDiv => "IDIV",
            Opcode::Neg => "NEG",
            Opcode::BitXor => "BXOR",
            Opcode::BitAnd => "BAND",
            Opcode::BitOr => "BOR",
            Opcode::BitNot => "BNOT",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
            Opcode::Eq => "EQ",
            Opcode::Ne => "NE",
            Opcode::Lt => "LT",
            Opcode::Le => "LE",
            Opcode::Gt => "GT",
            Opcode::Ge => "GE",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Not => "NOT",
            Opcode::LoadInt => "LII",
            Opcode::LoadNum => "LIN",
            Opcode::LoadNull => "LINULL",
            Opcode::LoadBool => "LIBOOL",
            Opcode::LoadStr => "LISTR",
            Opcode::LoadArr => "LIARR",
            Opcode::LoadObj => "LIOBJ",
            Opcode::LoadLambda => "LILAMBDA",
            Opcode::LoadGlobal => "LDGLOBAL",
            Opcode::LoadLocal => "LDLOCAL",
            Opcode::StoreGlobal => "STGLOBAL",
            Opcode::StoreLocal => "STLOCAL",
            Opcode::PopN => "POPN",
            Opcode::Swap => "SWP",
            Opcode::Rot3 => "ROT3",
            Opcode::Dup => "DUP",
            Opcode::GetProp => "GET",
            Opcode::SetProp => "SET",
            Opcode::GetDyn => "GETDNY",
            Opcode::SetDyn => "SETDNY",
            Opcode::NewObject => "NEWOBJ",
            Opcode::Jump => "JMP",
            Opcode::JumpZero => "JZ",
            Opcode::JumpNotZero => "JNZ",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::RetNull => "RETNULL",
            Opcode::Yield => "YIELD",
        }
    }

    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Opcode::Nop),
            1 => Some(Opcode::Invalid),
            2 => Some(Opcode::Add),
            3 => Some(Opcode::Sub),
            4 => Some(Opcode::Mul),
            5 => Some(Opcode::Div),
            6 => Some(Opcode::Mod),
            7 => Some(Opcode::Pow),
            8 => Some(Opcode::IntDiv),
            9 => Some(Opcode::Neg),
            10 => Some(Opcode::BitXor),
            11 => Some(Opcode::BitAnd),
            12 => Some(Opcode::BitOr),
            13 => Some(Opcode::BitNot),
            14 => Some(Opcode::Shl),
            15 => Some(Opcode::Shr),
            16 => Some(Opcode::Eq),
            17 => Some(Opcode::Ne),
            18 => Some(Opcode::Lt),
            19 => Some(Opcode::Le),
            20 => Some(Opcode::Gt),
            21 => Some(Opcode::Ge),
            22 => Some(Opcode::And),
            23 => Some(Opcode::Or),
            24 => Some(Opcode::Not),
            25 => Some(Opcode::LoadInt),
            26 => Some(Opcode::LoadNum),
            27 => Some(Opcode::LoadNull),
            28 => Some(Opcode::LoadBool),
            29 => Some(Opcode::LoadStr),
            30 => Some(Opcode::LoadArr),
            31 => Some(Opcode::LoadObj),
            32 => Some(Opcode::LoadLambda),
            33 => Some(Opcode::LoadGlobal),
            34 => Some(Opcode::LoadLocal),
            35 => Some(Opcode::StoreGlobal),
            36 => Some(Opcode::StoreLocal),
            37 => Some(Opcode::PopN),
            38 => Some(Opcode::Swap),
            39 => Some(Opcode::Rot3),
            40 => Some(Opcode::Dup),
            41 => Some(Opcode::GetProp),
            42 => Some(Opcode::SetProp),
            43 => Some(Opcode::GetDyn),
            44 => Some(Opcode::SetDyn),
            45 => Some(Opcode::NewObject),
            46 => Some(Opcode::Jump),
            47 => Some(Opcode::JumpZero),
            48 => Some(Opcode::JumpNotZero),
            49 => Some(Opcode::Call),
            50 => Some(Opcode::Ret),
            51 => Some(Opcode::RetNull),
            52 => Some(Opcode::Yield),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_round_trip() {
        for byte in 0u8..=52 {
            let opcode = Opcode::from_u8(byte).expect("discriminant in range");
            assert_eq!(opcode as u8, byte);
        }
        assert_eq!(Opcode::from_u8(53), None);
        assert_eq!(Opcode::from_u8(255), None);
    }

    #[test]
    fn test_mnemonics_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for byte in 0u8..=52 {
            let opcode = Opcode::from_u8(byte).expect("discriminant in range");
            assert!(seen.insert(opcode.mnemonic()), "duplicate {}", opcode.mnemonic());
        }
    }
}
