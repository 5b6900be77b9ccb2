use std::fmt::{self, Display};

use crate::Nat;

/// A byte range within one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
  pub start: usize,
  pub end: usize,
}

#[derive(Debug, Clone)]
pub enum Stmt {
  Expr(Expr),
  /// `name = value`, or `name op= value` when `op` is set.
  Assign { name: Ident, op: Option<BinaryOp>, value: Expr },
  /// `name++` or `name--`.
  Step { name: Ident, increment: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
  pub span: Span,
  pub name: String,
}

#[derive(Debug, Clone)]
pub struct Expr {
  pub span: Span,
  pub kind: ExprKind,
}

#[derive(Debug, Clone)]
pub enum ExprKind {
  Num(Nat),
  Var(String),
  Call(Ident, Vec<Expr>),
  Binary(BinaryOp, Box<Expr>, Box<Expr>),
  Compare(ComparisonOp, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
  Rem,
  Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
  Eq,
  Ne,
  Lt,
  Le,
  Gt,
  Ge,
}

impl Display for BinaryOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      BinaryOp::Add => "+",
      BinaryOp::Sub => "-",
      BinaryOp::Mul => "*",
      BinaryOp::Div => "/",
      BinaryOp::Rem => "%",
      BinaryOp::Pow => "^",
    })
  }
}

impl Display for ComparisonOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      ComparisonOp::Eq => "==",
      ComparisonOp::Ne => "!=",
      ComparisonOp::Lt => "<",
      ComparisonOp::Le => "<=",
      ComparisonOp::Gt => ">",
      ComparisonOp::Ge => ">=",
    })
  }
}
