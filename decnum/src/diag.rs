use std::fmt::{self, Display};

use crate::{
  ast::{BinaryOp, Span},
  lexer::{Token, TokenSet},
  Nat, NatError,
};

macro_rules! diags {
  ($(
    $name:ident $({ $($field:ident: $ty:ty),* $(,)? })?
      [$($fmt:tt)*]
  )*) => {
    #[derive(Debug, Clone)]
    pub enum Diag {
      $( $name { span: Span, $($($field: $ty),*)? },)*
    }

    impl Diag {
      pub fn span(&self) -> Span {
        match self {
          $( Self::$name { span, .. } => *span, )*
        }
      }
    }

    impl Display for Diag {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
          $( Self::$name { span: _, $($($field),*)? } => write!(f, $($fmt)*),)*
        }
      }
    }
  };
}

diags! {
  LexError
    ["lexing error"]
  UnexpectedToken { expected: TokenSet, found: Option<Token> }
    ["expected one of {expected:?}; found {}", describe(found)]
  InvalidNum { num: String }
    ["invalid numeric literal `{num}`"]
  InvalidAssignTarget
    ["only a variable can be assigned to"]
  UnknownVar { name: String }
    ["cannot find variable `{name}`"]
  UnknownFn { name: String }
    ["cannot find function `{name}`"]
  BadArgCount { name: String, expected: usize, got: usize }
    ["`{name}` expects {expected} argument{}; was passed {got}", plural(*expected, "s", "")]
  ExpectedNum
    ["expected a number; found a boolean"]
  BadOperand { op: BinaryOp }
    ["cannot apply operator `{op}` to a boolean"]
  TooLarge { value: Nat }
    ["`{value}` is too large to be used as a count or index"]
  Arith { err: NatError }
    ["{err}"]
}

fn describe(found: &Option<Token>) -> String {
  match found {
    Some(token) => format!("{token:?}"),
    None => "end of line".to_owned(),
  }
}

fn plural<'a>(n: usize, plural: &'a str, singular: &'a str) -> &'a str {
  if n == 1 {
    singular
  } else {
    plural
  }
}

impl Diag {
  /// Renders the diagnostic as `error <line>:<column> - <message>`, with both
  /// positions starting at one.
  pub fn report(&self, line: usize) -> String {
    format!("error {}:{} - {}", line, self.span().start + 1, self)
  }
}
