use std::{
  fmt::{self, Debug},
  mem::transmute,
};

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"#[^\n]*")]
#[repr(u8)]
pub enum Token {
  #[token("(")]
  OpenParen,
  #[token(")")]
  CloseParen,
  #[token(",")]
  Comma,

  #[token("+")]
  Plus,
  #[token("-")]
  Minus,
  #[token("*")]
  Star,
  #[token("/")]
  Slash,
  #[token("%")]
  Percent,
  #[token("^")]
  Caret,

  #[token("++")]
  PlusPlus,
  #[token("--")]
  MinusMinus,

  #[token("=")]
  Eq,
  #[token("+=")]
  PlusEq,
  #[token("-=")]
  MinusEq,
  #[token("*=")]
  StarEq,
  #[token("/=")]
  SlashEq,
  #[token("%=")]
  PercentEq,
  #[token("^=")]
  CaretEq,

  #[token("==")]
  EqEq,
  #[token("!=")]
  Ne,
  #[token("<")]
  Lt,
  #[token("<=")]
  Le,
  #[token(">")]
  Gt,
  #[token(">=")]
  Ge,

  #[regex(r"[0-9][0-9_]*")]
  Num,
  #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
  Ident,
}

impl Token {
  const COUNT: u8 = Token::Ident as u8 + 1;

  pub fn into_u8(self) -> u8 {
    self as u8
  }

  /// ## Safety
  /// `value` was returned by `Token::into_u8`
  pub unsafe fn from_u8(value: u8) -> Self {
    debug_assert!(value < Self::COUNT);
    transmute::<u8, Token>(value)
  }
}

/// A set of tokens, used to record what the parser would have accepted.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
  pub fn reset(&mut self) {
    self.0 = 0;
  }

  pub fn add(&mut self, kind: Token) {
    self.0 |= 1 << kind.into_u8();
  }

  pub fn contains(&self, kind: Token) -> bool {
    self.0 & (1 << kind.into_u8()) != 0
  }
}

impl IntoIterator for TokenSet {
  type Item = Token;
  type IntoIter = TokenSetIter;

  fn into_iter(self) -> Self::IntoIter {
    TokenSetIter(self.0)
  }
}

#[derive(Clone, Copy)]
pub struct TokenSetIter(u64);

impl Iterator for TokenSetIter {
  type Item = Token;

  fn next(&mut self) -> Option<Self::Item> {
    if self.0 == 0 {
      None
    } else {
      let x = self.0.trailing_zeros() as u8;
      self.0 ^= 1 << x;
      Some(unsafe { Token::from_u8(x) })
    }
  }
}

impl Debug for TokenSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(*self).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lex(src: &str) -> Vec<Result<Token, ()>> {
    Token::lexer(src).collect()
  }

  #[test]
  fn longest_operator_wins() {
    use Token::*;
    assert_eq!(lex("x++ y-- a+=b ^= <= == !="), [
      Ok(Ident),
      Ok(PlusPlus),
      Ok(Ident),
      Ok(MinusMinus),
      Ok(Ident),
      Ok(PlusEq),
      Ok(Ident),
      Ok(CaretEq),
      Ok(Le),
      Ok(EqEq),
      Ok(Ne),
    ]);
  }

  #[test]
  fn numbers_and_comments() {
    let mut lexer = Token::lexer("1_000 fact(20) # trailing comment");
    assert_eq!(lexer.next(), Some(Ok(Token::Num)));
    assert_eq!(lexer.slice(), "1_000");
    assert_eq!(lexer.next(), Some(Ok(Token::Ident)));
    assert_eq!(lexer.next(), Some(Ok(Token::OpenParen)));
    assert_eq!(lexer.next(), Some(Ok(Token::Num)));
    assert_eq!(lexer.next(), Some(Ok(Token::CloseParen)));
    assert_eq!(lexer.next(), None);
  }

  #[test]
  fn unknown_character() {
    assert_eq!(lex("3 & 4"), [Ok(Token::Num), Err(()), Ok(Token::Num)]);
  }

  #[test]
  fn token_set_iterates_in_order() {
    let mut set = TokenSet::default();
    set.add(Token::Ident);
    set.add(Token::Num);
    set.add(Token::OpenParen);
    assert!(set.contains(Token::Num));
    assert!(!set.contains(Token::Plus));
    assert_eq!(set.into_iter().collect::<Vec<_>>(), [Token::OpenParen, Token::Num, Token::Ident]);
    assert_eq!(format!("{set:?}"), "{OpenParen, Num, Ident}");
    set.reset();
    assert_eq!(set.into_iter().count(), 0);
  }
}
