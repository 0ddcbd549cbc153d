//! Brio back half: the bytecode data model and the single-pass compiler.
//!
//! [`compiler::parse`] consumes a [`brio_parser::TokenizeResult`] and emits a
//! [`BytecodeModule`] for a stack-based virtual machine: named functions with
//! flat instruction vectors, a string-literal pool, and the module's global
//! names. Compilation is fail-fast; the first syntax error aborts it.
//!
//! ```
//! use brio_codegen::compiler::parse;
//! use brio_parser::{NameTable, lexer};
//!
//! let mut names = NameTable::new();
//! let tokens = lexer::tokenize("Function id(x) Return x; End", &mut names);
//! let module = parse(tokens, &names).unwrap();
//! assert_eq!(module.functions.len(), 1);
//! ```

pub mod bytecode;
pub mod compiler;

pub use bytecode::{BytecodeModule, Function, Instruction, Opcode, Operand};
pub use compiler::parse;
