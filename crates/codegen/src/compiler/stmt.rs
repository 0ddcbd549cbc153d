//! Statement compilation: declarations, returns, if/else chains with jump
//! patching, assignments, and expression statements.

use super::expr::{Lvalue, binary_opcode, binary_precedence, is_assignment};
use super::{ParseResult, Parser};
use crate::bytecode::{Function, Opcode, Operand};
use brio_parser::SyntaxError;
use brio_parser::lexer::TokenKind;
use smallvec::SmallVec;

/// Indices of jump instructions awaiting a back-patched target.
type JumpList = SmallVec<[usize; 4]>;

/// Point every recorded jump at the next instruction to be emitted.
fn patch_to_here(func: &mut Function, jumps: &JumpList) {
    let target = func.len();
    for &at in jumps {
        func.patch_jump(at, target);
    }
}

impl Parser<'_> {
    pub(super) fn parse_statement(&mut self, func: &mut Function) -> ParseResult<()> {
        match self.peek().kind {
            TokenKind::Declare => self.parse_declare(func),
            TokenKind::If => self.parse_if_else(func),
            TokenKind::Return => {
                self.bump();
                if self.peek().kind == TokenKind::Semicolon {
                    func.emit(Opcode::RetNull, Operand::NONE);
                } else {
                    self.parse_expr(func, 0)?;
                    func.emit(Opcode::Ret, Operand::NONE);
                }
                self.expect(TokenKind::Semicolon)?;
                Ok(())
            }
            _ => self.parse_assign(func),
        }
    }

    /// `Declare <ident> [= <expr>] (, <ident> [= <expr>])* ;`
    ///
    /// Each name gets a fresh slot; an initializer is evaluated and stored
    /// into it, leaving nothing on the stack.
    fn parse_declare(&mut self, func: &mut Function) -> ParseResult<()> {
        self.expect(TokenKind::Declare)?;

        loop {
            let tok = self.expect(TokenKind::Ident)?;
            let id = tok.name_id();
            if self.locals.lookup(id).is_some() {
                return Err(SyntaxError::new(
                    format!("variable {} already declared", self.names.name_of(id)),
                    tok.loc,
                ));
            }

            let slot = self.locals.add(id);
            func.local_count += 1;

            if self.match_token(TokenKind::Equal) {
                self.parse_expr(func, 0)?;
                func.emit(Opcode::StoreLocal, Operand::index(slot));
            }

            if self.match_token(TokenKind::Semicolon) {
                break;
            }
            self.expect(TokenKind::Comma)?;
        }

        Ok(())
    }

    /// `If <cond> Then <block> (ElseIf <cond> Then <block>)* (Else <block>)? End`
    fn parse_if_else(&mut self, func: &mut Function) -> ParseResult<()> {
        self.expect(TokenKind::If)?;

        let mut then_jumps = JumpList::new();
        let mut else_jumps = JumpList::new();
        self.parse_if_cond(func, &mut then_jumps, &mut else_jumps)?;
        self.expect(TokenKind::Then)?;

        patch_to_here(func, &then_jumps);
        self.parse_block(func, true)?;

        // Skip the remaining arms once a taken body finishes.
        let mut end_jumps = JumpList::new();
        if matches!(self.peek().kind, TokenKind::ElseIf | TokenKind::Else) {
            end_jumps.push(func.emit(Opcode::Jump, Operand::NONE));
        }
        patch_to_here(func, &else_jumps);

        while self.match_token(TokenKind::ElseIf) {
            let mut arm_then_jumps = JumpList::new();
            let mut arm_else_jumps = JumpList::new();
            self.parse_if_cond(func, &mut arm_then_jumps, &mut arm_else_jumps)?;
            self.expect(TokenKind::Then)?;

            patch_to_here(func, &arm_then_jumps);
            self.parse_block(func, true)?;

            if matches!(self.peek().kind, TokenKind::ElseIf | TokenKind::Else) {
                end_jumps.push(func.emit(Opcode::Jump, Operand::NONE));
            }
            patch_to_here(func, &arm_else_jumps);
        }

        if self.match_token(TokenKind::Else) {
            // Terminal arm; its block consumes the End.
            self.parse_block(func, false)?;
        } else {
            self.expect(TokenKind::End)?;
        }

        patch_to_here(func, &end_jumps);
        Ok(())
    }

    /// A chain of sub-conditions separated by `||` / `&&`, each parsed above
    /// connective precedence so the connectives stay visible here.
    ///
    /// `||` emits a `JNZ` into the then-jumps (the condition is already
    /// decided true); `&&` emits a `JZ` into the else-jumps. The final
    /// sub-condition, with `Then` in sight, emits the closing `JZ`.
    fn parse_if_cond(
        &mut self,
        func: &mut Function,
        then_jumps: &mut JumpList,
        else_jumps: &mut JumpList,
    ) -> ParseResult<()> {
        let min_prec = binary_precedence(TokenKind::OrOr) + 1;
        loop {
            self.parse_expr(func, min_prec)?;

            if self.match_token(TokenKind::OrOr) {
                then_jumps.push(func.emit(Opcode::JumpNotZero, Operand::NONE));
            } else if self.match_token(TokenKind::AndAnd) {
                else_jumps.push(func.emit(Opcode::JumpZero, Operand::NONE));
            }

            if self.peek().kind == TokenKind::Then {
                break;
            }
        }

        else_jumps.push(func.emit(Opcode::JumpZero, Operand::NONE));
        Ok(())
    }

    /// An assignment or a bare expression statement, decided after the left
    /// expression has been parsed (but not yet emitted).
    fn parse_assign(&mut self, func: &mut Function) -> ParseResult<()> {
        let lhs = self.parse_expr_tree(0)?;

        if self.match_token(TokenKind::Semicolon) {
            // Expression statement; the value is discarded.
            lhs.emit(func);
            func.emit(Opcode::PopN, Operand::index(1));
            return Ok(());
        }

        let op = self.peek();
        if !is_assignment(op.kind) {
            return Err(SyntaxError::new("unexpected token", op.loc));
        }
        self.bump();

        let lvalue = lhs.lvalue();
        if lvalue == Lvalue::None {
            return Err(SyntaxError::new("cannot assign to rvalue", op.loc));
        }

        self.parse_expr(func, 0)?;

        if lvalue == Lvalue::Simple {
            if op.kind == TokenKind::Equal {
                lhs.emit_store(func);
            } else {
                // The RHS is on top; reload the target and swap back into
                // operand order before applying the operation.
                lhs.emit(func);
                func.emit(Opcode::Swap, Operand::NONE);
                func.emit(binary_opcode(op.kind), Operand::NONE);
                lhs.emit_store(func);
            }
        } else {
            return Err(SyntaxError::new("TDOD: assign to member", op.loc));
        }

        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }
}
