//! Expression parsing and emission.
//!
//! Precedence climbing over a transient expression tree. The tree exists so
//! an assignment's left-hand side can be inspected (lvalue or not, which slot
//! or name) before any code is emitted; everything else emits as soon as the
//! statement parser asks for it.

use super::{ParseResult, Parser};
use crate::bytecode::{Function, Opcode, Operand};
use brio_parser::lexer::TokenKind;
use brio_parser::{NameId, SyntaxError};

/// Not a binary operator.
const NO_PRECEDENCE: i32 = -1;

/// Binary-operator precedence; larger binds tighter. Postfix call, index,
/// and member access sit above every arithmetic operator.
pub(super) fn binary_precedence(kind: TokenKind) -> i32 {
    match kind {
        TokenKind::OrOr | TokenKind::AndAnd => 40,
        TokenKind::Pipe => 50,
        TokenKind::Caret => 51,
        TokenKind::Ampersand => 52,
        TokenKind::EqualEqual | TokenKind::NotEqual => 60,
        TokenKind::Less | TokenKind::Greater | TokenKind::LessEqual | TokenKind::GreaterEqual => 65,
        TokenKind::LeftShift | TokenKind::RightShift => 70,
        TokenKind::Plus | TokenKind::Minus => 80,
        TokenKind::Star | TokenKind::Slash | TokenKind::DoubleSlash | TokenKind::Percent => 90,
        TokenKind::DoubleStar => 95,
        TokenKind::LeftBracket | TokenKind::LeftParen => 100,
        TokenKind::Dot => 110,
        _ => NO_PRECEDENCE,
    }
}

/// The opcode an operator token lowers to. Compound-assignment operators map
/// to the same opcode as their plain form; non-operators map to `INVALID`.
pub(super) fn binary_opcode(kind: TokenKind) -> Opcode {
    match kind {
        TokenKind::Plus | TokenKind::PlusEqual => Opcode::Add,
        TokenKind::Minus | TokenKind::MinusEqual => Opcode::Sub,
        TokenKind::Star | TokenKind::StarEqual => Opcode::Mul,
        TokenKind::Slash | TokenKind::SlashEqual => Opcode::Div,
        TokenKind::DoubleSlash | TokenKind::DoubleSlashEqual => Opcode::IntDiv,
        TokenKind::Percent | TokenKind::PercentEqual => Opcode::Mod,
        TokenKind::DoubleStar | TokenKind::DoubleStarEqual => Opcode::Pow,
        TokenKind::LeftShift | TokenKind::LeftShiftEqual => Opcode::Shl,
        TokenKind::RightShift | TokenKind::RightShiftEqual => Opcode::Shr,
        TokenKind::Ampersand | TokenKind::AmpersandEqual => Opcode::BitAnd,
        TokenKind::Pipe | TokenKind::PipeEqual => Opcode::BitOr,
        TokenKind::Caret | TokenKind::CaretEqual => Opcode::BitXor,
        TokenKind::Tilde => Opcode::BitNot,
        TokenKind::EqualEqual => Opcode::Eq,
        TokenKind::NotEqual => Opcode::Ne,
        TokenKind::Less => Opcode::Lt,
        TokenKind::Greater => Opcode::Gt,
        TokenKind::LessEqual => Opcode::Le,
        TokenKind::GreaterEqual => Opcode::Ge,
        TokenKind::AndAnd => Opcode::And,
        TokenKind::OrOr => Opcode::Or,
        TokenKind::Bang => Opcode::Not,
        _ => Opcode::Invalid,
    }
}

pub(super) fn is_assignment(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Equal
            | TokenKind::PlusEqual
            | TokenKind::MinusEqual
            | TokenKind::StarEqual
            | TokenKind::SlashEqual
            | TokenKind::DoubleSlashEqual
            | TokenKind::PercentEqual
            | TokenKind::DoubleStarEqual
            | TokenKind::LeftShiftEqual
            | TokenKind::RightShiftEqual
            | TokenKind::AmpersandEqual
            | TokenKind::PipeEqual
            | TokenKind::CaretEqual
    )
}

/// What an expression denotes on the left of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Lvalue {
    /// Not assignable.
    None,
    /// A bare local or global reference.
    Simple,
    /// A member or index place; stores are not implemented.
    Compound,
}

/// A transient expression tree, built only far enough to defer emission.
pub(super) enum ExprNode {
    LitInt(u64),
    LitNum(f64),
    LitStr(usize),
    LitBool(bool),
    Null,
    Local(usize),
    Global(NameId),
    Unary(Opcode, Box<ExprNode>),
    Binary(Opcode, Box<ExprNode>, Box<ExprNode>),
    Member(Box<ExprNode>, NameId),
    Index(Box<ExprNode>, Box<ExprNode>),
    Call(Box<ExprNode>, Vec<ExprNode>),
}

impl ExprNode {
    /// Emit code that leaves the expression's value on top of the stack.
    pub(super) fn emit(&self, func: &mut Function) {
        match self {
            ExprNode::LitInt(value) => {
                func.emit(Opcode::LoadInt, Operand::int(*value));
            }
            ExprNode::LitNum(value) => {
                func.emit(Opcode::LoadNum, Operand::num(*value));
            }
            ExprNode::LitStr(idx) => {
                func.emit(Opcode::LoadStr, Operand::index(*idx));
            }
            ExprNode::LitBool(value) => {
                func.emit(Opcode::LoadBool, Operand::boolean(*value));
            }
            ExprNode::Null => {
                func.emit(Opcode::LoadNull, Operand::NONE);
            }
            ExprNode::Local(slot) => {
                func.emit(Opcode::LoadLocal, Operand::index(*slot));
            }
            ExprNode::Global(name) => {
                func.emit(Opcode::LoadGlobal, Operand::name(*name));
            }
            ExprNode::Unary(opcode, operand) => {
                operand.emit(func);
                func.emit(*opcode, Operand::NONE);
            }
            ExprNode::Binary(opcode, lhs, rhs) => {
                lhs.emit(func);
                rhs.emit(func);
                func.emit(*opcode, Operand::NONE);
            }
            ExprNode::Member(object, name) => {
                object.emit(func);
                func.emit(Opcode::GetProp, Operand::name(*name));
            }
            ExprNode::Index(object, key) => {
                object.emit(func);
                key.emit(func);
                func.emit(Opcode::GetDyn, Operand::NONE);
            }
            ExprNode::Call(callee, args) => {
                for arg in args {
                    arg.emit(func);
                }
                callee.emit(func);
                func.emit(Opcode::Call, Operand::index(args.len()));
            }
        }
    }

    pub(super) fn lvalue(&self) -> Lvalue {
        match self {
            ExprNode::Local(_) | ExprNode::Global(_) => Lvalue::Simple,
            ExprNode::Member(..) | ExprNode::Index(..) => Lvalue::Compound,
            _ => Lvalue::None,
        }
    }

    /// Emit the store for a simple lvalue; pops the stored value. No-op for
    /// anything else, which the assignment parser rules out beforehand.
    pub(super) fn emit_store(&self, func: &mut Function) {
        match self {
            ExprNode::Local(slot) => {
                func.emit(Opcode::StoreLocal, Operand::index(*slot));
            }
            ExprNode::Global(name) => {
                func.emit(Opcode::StoreGlobal, Operand::name(*name));
            }
            _ => {}
        }
    }
}

impl Parser<'_> {
    /// Parse an expression and emit it immediately.
    pub(super) fn parse_expr(&mut self, func: &mut Function, min_prec: i32) -> ParseResult<()> {
        let expr = self.parse_expr_tree(min_prec)?;
        expr.emit(func);
        Ok(())
    }

    /// Precedence climbing. The right operand of an operator at precedence
    /// `p` is parsed with minimum precedence `p`, so an equal-precedence
    /// chain groups rightward.
    pub(super) fn parse_expr_tree(&mut self, min_prec: i32) -> ParseResult<ExprNode> {
        let mut left = self.parse_unary()?;

        while binary_precedence(self.peek().kind) >= min_prec {
            let op = self.bump();
            left = match op.kind {
                TokenKind::LeftParen => {
                    // Function call; the value list consumes the `)`.
                    let args = self.parse_value_list(TokenKind::RightParen)?;
                    ExprNode::Call(Box::new(left), args)
                }
                TokenKind::Dot => {
                    let member = self.expect(TokenKind::Ident)?;
                    ExprNode::Member(Box::new(left), member.name_id())
                }
                TokenKind::LeftBracket => {
                    let key = self.parse_expr_tree(0)?;
                    self.expect(TokenKind::RightBracket)?;
                    ExprNode::Index(Box::new(left), Box::new(key))
                }
                _ => {
                    let right = self.parse_expr_tree(binary_precedence(op.kind))?;
                    ExprNode::Binary(binary_opcode(op.kind), Box::new(left), Box::new(right))
                }
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<ExprNode> {
        let opcode = match self.peek().kind {
            TokenKind::Minus => Opcode::Neg,
            TokenKind::Bang => Opcode::Not,
            TokenKind::Tilde => Opcode::BitNot,
            _ => return self.parse_primary(),
        };

        self.bump();
        let operand = self.parse_unary()?;
        Ok(ExprNode::Unary(opcode, Box::new(operand)))
    }

    fn parse_primary(&mut self) -> ParseResult<ExprNode> {
        let tok = self.peek();
        match tok.kind {
            TokenKind::LeftParen => {
                self.bump();
                let expr = self.parse_expr_tree(0)?;
                self.expect(TokenKind::RightParen)?;
                Ok(expr)
            }
            TokenKind::Ident => {
                let tok = self.bump();
                let id = tok.name_id();
                match self.locals.lookup(id) {
                    Some(slot) => Ok(ExprNode::Local(slot)),
                    None => Ok(ExprNode::Global(id)),
                }
            }
            TokenKind::True => {
                self.bump();
                Ok(ExprNode::LitBool(true))
            }
            TokenKind::False => {
                self.bump();
                Ok(ExprNode::LitBool(false))
            }
            TokenKind::Null => {
                self.bump();
                Ok(ExprNode::Null)
            }
            TokenKind::Integer => Ok(ExprNode::LitInt(self.bump().integer_value())),
            TokenKind::Number => Ok(ExprNode::LitNum(self.bump().number_value())),
            TokenKind::Str => Ok(ExprNode::LitStr(self.bump().str_index())),
            _ => Err(SyntaxError::new("primary expression expected", tok.loc)),
        }
    }

    /// Comma-separated expressions up to `term` (consumed). Trailing commas
    /// are accepted.
    fn parse_value_list(&mut self, term: TokenKind) -> ParseResult<Vec<ExprNode>> {
        let mut values = Vec::new();
        while !self.match_token(term) {
            values.push(self.parse_expr_tree(0)?);
            if self.peek().kind != term {
                self.expect(TokenKind::Comma)?;
            }
        }
        Ok(values)
    }
}
