//! Single-pass parser / code generator.
//!
//! Recursive descent over the token stream, emitting instructions directly
//! into the function being compiled. There is no AST; the only tree built is
//! a small transient expression tree (`expr::ExprNode`) so the left-hand side
//! of a potential assignment can be classified before anything is emitted.
//!
//! Errors are fail-fast: the first [`SyntaxError`] aborts the compilation.

mod expr;
mod scope;
mod stmt;

use crate::bytecode::{BytecodeModule, Function};
use brio_parser::lexer::{Token, TokenKind, TokenizeResult};
use brio_parser::{NameTable, SourceLocation, SyntaxError};
use scope::ScopedLocalNameTable;

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Compile a tokenized module into bytecode.
///
/// Inherits the lexer's error, if any, and refuses to proceed past it. On
/// success the lexer's string-literal pool moves into the module.
pub fn parse(tokens: TokenizeResult, names: &NameTable) -> Result<BytecodeModule, SyntaxError> {
    if let Some(error) = tokens.error {
        return Err(error);
    }

    Parser {
        tokens: tokens.tokens,
        pos: 0,
        str_lits: tokens.str_literals,
        names,
        locals: ScopedLocalNameTable::new(),
    }
    .parse_module()
}

struct Parser<'names> {
    tokens: Vec<Token>,
    pos: usize,
    str_lits: Vec<String>,
    names: &'names NameTable,
    locals: ScopedLocalNameTable,
}

impl Parser<'_> {
    fn parse_module(mut self) -> Result<BytecodeModule, SyntaxError> {
        let mut module = BytecodeModule::new();

        while !self.at_end() {
            let tok = self.peek();
            match tok.kind {
                TokenKind::Function => {
                    let func = self.parse_function()?;
                    module.add_function(func);
                }
                TokenKind::Declare => {
                    return Err(SyntaxError::new(
                        "global variable declarations not implemented yet",
                        tok.loc,
                    ));
                }
                TokenKind::Import => {
                    return Err(SyntaxError::new("imports not implemented yet", tok.loc));
                }
                _ => {
                    return Err(SyntaxError::new(
                        format!(
                            "{} can not appear at the top-level of a module",
                            tok.kind.name()
                        ),
                        tok.loc,
                    ));
                }
            }
        }

        module.str_lits = self.str_lits;
        Ok(module)
    }

    /// `Function <ident> ( [params] ) <block>`
    fn parse_function(&mut self) -> ParseResult<Function> {
        self.locals = ScopedLocalNameTable::new();

        self.expect(TokenKind::Function)?;
        let name = self.expect(TokenKind::Ident)?;
        let mut func = Function::new(name.name_id());

        self.expect(TokenKind::LeftParen)?;
        if !self.match_token(TokenKind::RightParen) {
            loop {
                let param = self.expect(TokenKind::Ident)?;
                let id = param.name_id();
                if self.locals.lookup(id).is_some() {
                    return Err(SyntaxError::new(
                        format!("duplicate local name {}", self.names.name_of(id)),
                        param.loc,
                    ));
                }

                self.locals.add(id);
                func.arg_count += 1;
                func.local_count += 1;

                if self.match_token(TokenKind::RightParen) {
                    break;
                }
                self.expect(TokenKind::Comma)?;
            }
        }

        self.parse_block(&mut func, false)?;
        Ok(func)
    }

    /// A statement sequence up to `End`. When `if_block` is set the block
    /// also stops, without consuming, at `Else` / `ElseIf` / `End`; the
    /// if-else parser decides what comes next.
    fn parse_block(&mut self, func: &mut Function, if_block: bool) -> ParseResult<()> {
        self.locals.enter_scope();

        loop {
            let tok = self.peek();
            if tok.kind == TokenKind::Eof {
                return Err(SyntaxError::new("unexpected end of file", tok.loc));
            }

            if if_block
                && matches!(
                    tok.kind,
                    TokenKind::Else | TokenKind::ElseIf | TokenKind::End
                )
            {
                break;
            }
            if self.match_token(TokenKind::End) {
                break;
            }

            self.parse_statement(func)?;
        }

        self.locals.leave_scope();
        Ok(())
    }

    fn peek(&self) -> Token {
        self.tokens
            .get(self.pos)
            .copied()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, SourceLocation::default()))
    }

    fn at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consume and return the current token; at `(eof)` the position stays
    /// put so the EOF token is returned forever after.
    fn bump(&mut self) -> Token {
        let tok = self.peek();
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        tok
    }

    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.bump();
            return true;
        }
        false
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let tok = self.bump();
        if tok.kind != kind {
            return Err(SyntaxError::new(
                format!("expected {}, got {}", kind.name(), tok.kind.name()),
                tok.loc,
            ));
        }
        Ok(tok)
    }
}
