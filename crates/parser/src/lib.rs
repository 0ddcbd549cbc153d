//! Brio front half: name interning and lexing.
//!
//! The pipeline is strictly linear: source bytes go through [`lexer::tokenize`]
//! into a token stream plus a string-literal pool, which the bytecode compiler
//! (`brio_codegen`) consumes in a single pass. All stages share one
//! [`NameTable`], created by the caller before lexing and outliving the
//! compiled module; names cross the boundary as dense [`NameId`]s, never as
//! text.
//!
//! ```
//! use brio_parser::{NameTable, lexer};
//!
//! let mut names = NameTable::new();
//! let result = lexer::tokenize("Function main() Return 0; End", &mut names);
//! assert!(result.error.is_none());
//! ```

pub mod error;
pub mod lexer;
pub mod names;

pub use error::{SourceLocation, SyntaxError};
pub use lexer::{Payload, Token, TokenKind, TokenizeResult, tokenize};
pub use names::{NameId, NameTable};
