use std::{
  fs,
  io::{self, Read, Write},
  path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Args;

use crate::{Session, StatsArgs};

#[derive(Debug, Args)]
pub struct DecnumRunCommand {
  /// The script to run, or `-` to read it from stdin.
  #[arg(default_value = "main.dn")]
  src: PathBuf,
  /// Keep going after a statement fails.
  #[arg(long, short)]
  keep_going: bool,
  #[command(flatten)]
  stats: StatsArgs,
}

impl DecnumRunCommand {
  pub fn execute(self) -> Result<()> {
    let src = if self.src.as_os_str() == "-" {
      let mut src = String::new();
      io::stdin().read_to_string(&mut src)?;
      src
    } else {
      fs::read_to_string(&self.src)
        .with_context(|| format!("cannot read file `{}`", self.src.display()))?
    };
    let mut session = Session::default();
    run_lines(&mut session, src.lines(), self.keep_going)?;
    session.check(&self.stats);
    Ok(())
  }
}

#[derive(Debug, Args)]
pub struct DecnumEvalCommand {
  /// Statements to evaluate in order.
  #[arg(required = true)]
  statements: Vec<String>,
  #[command(flatten)]
  stats: StatsArgs,
}

impl DecnumEvalCommand {
  pub fn execute(self) -> Result<()> {
    let mut session = Session::default();
    run_lines(&mut session, self.statements.iter().map(String::as_str), false)?;
    session.check(&self.stats);
    Ok(())
  }
}

fn run_lines<'a>(
  session: &mut Session,
  lines: impl IntoIterator<Item = &'a str>,
  keep_going: bool,
) -> Result<()> {
  let stdout = io::stdout();
  let mut out = stdout.lock();
  for (i, line) in lines.into_iter().enumerate() {
    if !session.exec(i + 1, line, &mut out)? && !keep_going {
      break;
    }
  }
  out.flush()?;
  Ok(())
}
