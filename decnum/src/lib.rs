//! Arbitrary-precision natural numbers stored as decimal digits, and a small
//! line-oriented calculator language over them.
//!
//! [`Nat`] is the value type; [`seq`] builds factorials, Fibonacci and Catalan
//! numbers on top of it; [`eval::Calculator`] runs calculator statements.

pub mod ast;
pub mod diag;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod seq;

mod error;
mod nat;

pub use error::*;
pub use nat::{sqrt, Nat};
