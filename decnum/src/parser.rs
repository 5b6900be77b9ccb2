use logos::{Lexer, Logos};

use crate::{
  ast::{BinaryOp, ComparisonOp, Expr, ExprKind, Ident, Span, Stmt},
  diag::Diag,
  lexer::{Token, TokenSet},
  Nat,
};

pub struct Parser<'src> {
  lexer: Lexer<'src, Token>,
  token: Option<Token>,
  last_token_end: usize,
  expected: TokenSet,
}

type Parse<T = ()> = Result<T, Diag>;

impl<'src> Parser<'src> {
  pub fn new(src: &'src str) -> Self {
    let lexer = Token::lexer(src);
    Parser { lexer, token: None, last_token_end: 0, expected: TokenSet::default() }
  }

  /// Parses one line of input; `Ok(None)` if it holds only whitespace and
  /// comments.
  pub fn parse_line(src: &'src str) -> Parse<Option<Stmt>> {
    let mut parser = Parser::new(src);
    parser.bump()?;
    if parser.token.is_none() {
      return Ok(None);
    }
    let stmt = parser.parse_stmt()?;
    if parser.token.is_some() {
      return parser.unexpected();
    }
    Ok(Some(stmt))
  }

  fn bump(&mut self) -> Parse {
    self.expected.reset();
    self.last_token_end = self.lexer.span().end;
    self.token = match self.lexer.next() {
      None => None,
      Some(Ok(token)) => Some(token),
      Some(Err(())) => {
        let span = self.lexer.span();
        Err(Diag::LexError { span: Span { start: span.start, end: span.end } })?
      }
    };
    Ok(())
  }

  fn check(&mut self, kind: Token) -> bool {
    self.expected.add(kind);
    self.token == Some(kind)
  }

  fn eat(&mut self, kind: Token) -> Parse<bool> {
    let matches = self.check(kind);
    if matches {
      self.bump()?;
    }
    Ok(matches)
  }

  fn expect(&mut self, kind: Token) -> Parse<&'src str> {
    if self.check(kind) {
      let token = self.lexer.slice();
      self.bump()?;
      Ok(token)
    } else {
      self.unexpected()
    }
  }

  fn unexpected<T>(&self) -> Parse<T> {
    Err(Diag::UnexpectedToken { span: self.span(), expected: self.expected, found: self.token })
  }

  /// The span of the current token, or an empty span at the end of the line.
  fn span(&self) -> Span {
    if self.token.is_none() {
      let len = self.lexer.source().len();
      return Span { start: len, end: len };
    }
    let span = self.lexer.span();
    Span { start: span.start, end: span.end }
  }

  fn start_span(&self) -> usize {
    self.lexer.span().start
  }

  fn end_span(&self, start: usize) -> Span {
    Span { start, end: self.last_token_end }
  }

  fn parse_stmt(&mut self) -> Parse<Stmt> {
    let target = self.parse_expr()?;
    if let Some(op) = self.assign_op() {
      let name = Self::assign_target(target)?;
      self.bump()?;
      let value = self.parse_expr()?;
      return Ok(Stmt::Assign { name, op, value });
    }
    for (token, increment) in [(Token::PlusPlus, true), (Token::MinusMinus, false)] {
      if self.check(token) {
        let name = Self::assign_target(target)?;
        self.bump()?;
        return Ok(Stmt::Step { name, increment });
      }
    }
    Ok(Stmt::Expr(target))
  }

  fn assign_op(&mut self) -> Option<Option<BinaryOp>> {
    let ops = [
      (Token::Eq, None),
      (Token::PlusEq, Some(BinaryOp::Add)),
      (Token::MinusEq, Some(BinaryOp::Sub)),
      (Token::StarEq, Some(BinaryOp::Mul)),
      (Token::SlashEq, Some(BinaryOp::Div)),
      (Token::PercentEq, Some(BinaryOp::Rem)),
      (Token::CaretEq, Some(BinaryOp::Pow)),
    ];
    ops.into_iter().find_map(|(token, op)| self.check(token).then_some(op))
  }

  fn assign_target(target: Expr) -> Parse<Ident> {
    match target.kind {
      ExprKind::Var(name) => Ok(Ident { span: target.span, name }),
      _ => Err(Diag::InvalidAssignTarget { span: target.span }),
    }
  }

  pub(crate) fn parse_expr(&mut self) -> Parse<Expr> {
    let start = self.start_span();
    let lhs = self.parse_sum()?;
    let ops = [
      (Token::EqEq, ComparisonOp::Eq),
      (Token::Ne, ComparisonOp::Ne),
      (Token::Lt, ComparisonOp::Lt),
      (Token::Le, ComparisonOp::Le),
      (Token::Gt, ComparisonOp::Gt),
      (Token::Ge, ComparisonOp::Ge),
    ];
    for (token, op) in ops {
      if self.eat(token)? {
        let rhs = self.parse_sum()?;
        let span = self.end_span(start);
        return Ok(Expr { span, kind: ExprKind::Compare(op, Box::new(lhs), Box::new(rhs)) });
      }
    }
    Ok(lhs)
  }

  fn parse_sum(&mut self) -> Parse<Expr> {
    let ops = [(Token::Plus, BinaryOp::Add), (Token::Minus, BinaryOp::Sub)];
    self.parse_left_assoc(&ops, Self::parse_product)
  }

  fn parse_product(&mut self) -> Parse<Expr> {
    let ops = [
      (Token::Star, BinaryOp::Mul),
      (Token::Slash, BinaryOp::Div),
      (Token::Percent, BinaryOp::Rem),
    ];
    self.parse_left_assoc(&ops, Self::parse_power)
  }

  fn parse_left_assoc(
    &mut self,
    ops: &[(Token, BinaryOp)],
    mut parse_operand: impl FnMut(&mut Self) -> Parse<Expr>,
  ) -> Parse<Expr> {
    let start = self.start_span();
    let mut lhs = parse_operand(self)?;
    'outer: loop {
      for &(token, op) in ops {
        if self.eat(token)? {
          let rhs = parse_operand(self)?;
          let span = self.end_span(start);
          lhs = Expr { span, kind: ExprKind::Binary(op, Box::new(lhs), Box::new(rhs)) };
          continue 'outer;
        }
      }
      return Ok(lhs);
    }
  }

  fn parse_power(&mut self) -> Parse<Expr> {
    let start = self.start_span();
    let base = self.parse_atom()?;
    if self.eat(Token::Caret)? {
      let exponent = self.parse_power()?;
      let span = self.end_span(start);
      return Ok(Expr {
        span,
        kind: ExprKind::Binary(BinaryOp::Pow, Box::new(base), Box::new(exponent)),
      });
    }
    Ok(base)
  }

  fn parse_atom(&mut self) -> Parse<Expr> {
    let start = self.start_span();

    if self.check(Token::Num) {
      let token = self.expect(Token::Num)?;
      let num = parse_num(token).ok_or_else(|| Diag::InvalidNum {
        span: self.end_span(start),
        num: token.to_owned(),
      })?;
      return Ok(Expr { span: self.end_span(start), kind: ExprKind::Num(num) });
    }

    if self.check(Token::Ident) {
      let name = self.expect(Token::Ident)?.to_owned();
      let name_span = self.end_span(start);
      if self.eat(Token::OpenParen)? {
        let ident = Ident { span: name_span, name };
        let mut args = Vec::new();
        while !self.check(Token::CloseParen) {
          args.push(self.parse_expr()?);
          if !self.eat(Token::Comma)? {
            break;
          }
        }
        self.expect(Token::CloseParen)?;
        return Ok(Expr { span: self.end_span(start), kind: ExprKind::Call(ident, args) });
      }
      return Ok(Expr { span: self.end_span(start), kind: ExprKind::Var(name) });
    }

    if self.eat(Token::OpenParen)? {
      let inner = self.parse_expr()?;
      self.expect(Token::CloseParen)?;
      return Ok(Expr { span: self.end_span(start), kind: inner.kind });
    }

    self.unexpected()
  }
}

/// Parses a decimal literal, ignoring `_` separators; `None` if it has no
/// digits.
fn parse_num(token: &str) -> Option<Nat> {
  let digits: String = token.chars().filter(|&c| c != '_').collect();
  digits.parse().ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(src: &str) -> Stmt {
    Parser::parse_line(src).unwrap().unwrap()
  }

  fn show(expr: &Expr) -> String {
    match &expr.kind {
      ExprKind::Num(n) => n.to_string(),
      ExprKind::Var(name) => name.clone(),
      ExprKind::Call(f, args) => {
        format!("{}({})", f.name, args.iter().map(show).collect::<Vec<_>>().join(", "))
      }
      ExprKind::Binary(op, a, b) => format!("({} {op} {})", show(a), show(b)),
      ExprKind::Compare(op, a, b) => format!("({} {op} {})", show(a), show(b)),
    }
  }

  fn show_expr(src: &str) -> String {
    match parse(src) {
      Stmt::Expr(expr) => show(&expr),
      stmt => panic!("expected an expression, got {stmt:?}"),
    }
  }

  #[test]
  fn precedence() {
    assert_eq!(show_expr("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(show_expr("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(show_expr("2 ^ 3 ^ 2"), "(2 ^ (3 ^ 2))");
    assert_eq!(show_expr("2 * 3 ^ 2 % 5"), "((2 * (3 ^ 2)) % 5)");
    assert_eq!(show_expr("(1 + 2) * 3"), "((1 + 2) * 3)");
    assert_eq!(show_expr("a + 1 >= b"), "((a + 1) >= b)");
    assert_eq!(show_expr("digit(fact(1_000), 0)"), "digit(fact(1000), 0)");
  }

  #[test]
  fn spans() {
    let Stmt::Expr(expr) = parse("  12 + foo") else { panic!() };
    assert_eq!(expr.span, Span { start: 2, end: 10 });
    let ExprKind::Binary(_, lhs, rhs) = &expr.kind else { panic!() };
    assert_eq!(lhs.span, Span { start: 2, end: 4 });
    assert_eq!(rhs.span, Span { start: 7, end: 10 });
  }

  #[test]
  fn statements() {
    match parse("x = 5") {
      Stmt::Assign { name, op: None, value } => {
        assert_eq!(name.name, "x");
        assert_eq!(show(&value), "5");
      }
      stmt => panic!("{stmt:?}"),
    }
    assert!(matches!(parse("total ^= 2"), Stmt::Assign { op: Some(BinaryOp::Pow), .. }));
    assert!(matches!(parse("n++"), Stmt::Step { increment: true, .. }));
    assert!(matches!(parse("n--"), Stmt::Step { increment: false, .. }));
  }

  #[test]
  fn blank_lines() {
    assert!(Parser::parse_line("").unwrap().is_none());
    assert!(Parser::parse_line("   # just a comment").unwrap().is_none());
  }

  #[test]
  fn errors() {
    assert!(matches!(Parser::parse_line("1 +"), Err(Diag::UnexpectedToken { found: None, .. })));
    assert!(matches!(Parser::parse_line("3 = 4"), Err(Diag::InvalidAssignTarget { .. })));
    assert!(matches!(Parser::parse_line("(x + 1)++"), Err(Diag::InvalidAssignTarget { .. })));
    assert!(matches!(Parser::parse_line("1 & 2"), Err(Diag::LexError { .. })));
    assert!(matches!(
      Parser::parse_line("1 2"),
      Err(Diag::UnexpectedToken { found: Some(Token::Num), .. })
    ));
  }
}
