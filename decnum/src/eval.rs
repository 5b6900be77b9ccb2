use std::fmt::{self, Display};

use indexmap::IndexMap;

use crate::{
  ast::{BinaryOp, ComparisonOp, Expr, ExprKind, Ident, Span, Stmt},
  diag::Diag,
  parser::Parser,
  seq, sqrt, Nat, NatError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
  Nat(Nat),
  Bool(bool),
}

impl Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Nat(n) => Display::fmt(n, f),
      Value::Bool(b) => Display::fmt(b, f),
    }
  }
}

/// Evaluates calculator statements one line at a time, keeping variables
/// between lines in definition order.
#[derive(Debug, Default)]
pub struct Calculator {
  vars: IndexMap<String, Nat>,
}

impl Calculator {
  /// Runs one line; returns the value of an expression statement, or `None`
  /// for assignments and blank lines. A failing statement changes nothing.
  pub fn exec(&mut self, line: &str) -> Result<Option<Value>, Diag> {
    match Parser::parse_line(line)? {
      Some(stmt) => self.exec_stmt(stmt),
      None => Ok(None),
    }
  }

  pub fn exec_stmt(&mut self, stmt: Stmt) -> Result<Option<Value>, Diag> {
    match stmt {
      Stmt::Expr(expr) => self.eval(&expr).map(Some),
      Stmt::Assign { name, op: None, value } => {
        let value = self.eval_nat(&value)?;
        self.vars.insert(name.name, value);
        Ok(None)
      }
      Stmt::Assign { name, op: Some(op), value } => {
        let rhs = self.eval_nat(&value)?;
        let span = name.span;
        let var = self.var_mut(&name)?;
        let result = match op {
          BinaryOp::Sub => var.sub_assign(&rhs),
          BinaryOp::Div => var.div_assign(&rhs),
          BinaryOp::Rem => var.rem_assign(&rhs),
          BinaryOp::Add => {
            var.add_assign(&rhs);
            Ok(())
          }
          BinaryOp::Mul => {
            var.mul_assign(&rhs);
            Ok(())
          }
          BinaryOp::Pow => {
            var.pow_assign(&rhs);
            Ok(())
          }
        };
        result.map_err(|err| Diag::Arith { span, err })?;
        Ok(None)
      }
      Stmt::Step { name, increment } => {
        let span = name.span;
        let var = self.var_mut(&name)?;
        if increment {
          var.increment();
        } else {
          var.decrement().map_err(|err| Diag::Arith { span, err })?;
        }
        Ok(None)
      }
    }
  }

  pub fn get(&self, name: &str) -> Option<&Nat> {
    self.vars.get(name)
  }

  pub fn vars(&self) -> impl Iterator<Item = (&str, &Nat)> {
    self.vars.iter().map(|(name, value)| (name.as_str(), value))
  }

  fn var_mut(&mut self, name: &Ident) -> Result<&mut Nat, Diag> {
    self
      .vars
      .get_mut(&name.name)
      .ok_or_else(|| Diag::UnknownVar { span: name.span, name: name.name.clone() })
  }

  pub fn eval(&self, expr: &Expr) -> Result<Value, Diag> {
    let span = expr.span;
    let arith = |err: NatError| Diag::Arith { span, err };
    Ok(match &expr.kind {
      ExprKind::Num(n) => Value::Nat(n.clone()),
      ExprKind::Var(name) => match self.vars.get(name) {
        Some(value) => Value::Nat(value.clone()),
        None => Err(Diag::UnknownVar { span, name: name.clone() })?,
      },
      ExprKind::Call(f, args) => Value::Nat(self.call(f, args)?),
      ExprKind::Binary(op, lhs, rhs) => {
        let (a, b) = (self.eval_operand(lhs, *op)?, self.eval_operand(rhs, *op)?);
        Value::Nat(match op {
          BinaryOp::Add => a.add(&b),
          BinaryOp::Sub => a.sub(&b).map_err(arith)?,
          BinaryOp::Mul => a.mul(&b),
          BinaryOp::Div => a.div(&b).map_err(arith)?,
          BinaryOp::Rem => a.rem(&b).map_err(arith)?,
          BinaryOp::Pow => a.pow(&b),
        })
      }
      ExprKind::Compare(op, lhs, rhs) => {
        let (a, b) = (self.eval_nat(lhs)?, self.eval_nat(rhs)?);
        Value::Bool(match op {
          ComparisonOp::Eq => a == b,
          ComparisonOp::Ne => a != b,
          ComparisonOp::Lt => a < b,
          ComparisonOp::Le => a <= b,
          ComparisonOp::Gt => a > b,
          ComparisonOp::Ge => a >= b,
        })
      }
    })
  }

  fn eval_nat(&self, expr: &Expr) -> Result<Nat, Diag> {
    match self.eval(expr)? {
      Value::Nat(n) => Ok(n),
      Value::Bool(_) => Err(Diag::ExpectedNum { span: expr.span }),
    }
  }

  fn eval_operand(&self, expr: &Expr, op: BinaryOp) -> Result<Nat, Diag> {
    match self.eval(expr)? {
      Value::Nat(n) => Ok(n),
      Value::Bool(_) => Err(Diag::BadOperand { span: expr.span, op }),
    }
  }

  fn call(&self, f: &Ident, args: &[Expr]) -> Result<Nat, Diag> {
    let arity = match f.name.as_str() {
      "sqrt" | "fact" | "fib" | "catalan" | "digits" => 1,
      "digit" => 2,
      _ => Err(Diag::UnknownFn { span: f.span, name: f.name.clone() })?,
    };
    if args.len() != arity {
      let got = args.len();
      return Err(Diag::BadArgCount { span: f.span, name: f.name.clone(), expected: arity, got });
    }
    let args = args
      .iter()
      .map(|arg| Ok((self.eval_nat(arg)?, arg.span)))
      .collect::<Result<Vec<_>, Diag>>()?;
    let (n, span) = &args[0];
    Ok(match f.name.as_str() {
      "sqrt" => sqrt(n),
      "fact" => seq::factorial(count(n, *span)?),
      "fib" => seq::fibonacci(count(n, *span)?),
      "catalan" => seq::catalan(count(n, *span)?),
      "digits" => Nat::from(n.digit_count()),
      "digit" => {
        let (position, position_span) = &args[1];
        let index = usize::try_from(count(position, *position_span)?)
          .map_err(|_| Diag::TooLarge { span: *position_span, value: position.clone() })?;
        Nat::from(n.digit(index).map_err(|err| Diag::Arith { span: *position_span, err })?)
      }
      _ => unreachable!(),
    })
  }
}

fn count(n: &Nat, span: Span) -> Result<u64, Diag> {
  n.to_u64().ok_or_else(|| Diag::TooLarge { span, value: n.clone() })
}

impl Display for Calculator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (name, value) in &self.vars {
      writeln!(f, "{name} = {value}")?;
    }
    Ok(())
  }
}
