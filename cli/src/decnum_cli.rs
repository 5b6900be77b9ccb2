mod repl;
mod run;

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser};
use clap_complete::{generate, Shell};

pub use repl::DecnumReplCommand;
pub use run::{DecnumEvalCommand, DecnumRunCommand};

#[derive(Debug, Parser)]
#[command(
  name = "decnum",
  version,
  about = "Arbitrary-precision decimal calculator",
  propagate_version = true
)]
pub enum DecnumCommand {
  #[command(about = "Run a calculator script, one statement per line")]
  Run(DecnumRunCommand),
  #[command(about = "Evaluate statements given as arguments")]
  Eval(DecnumEvalCommand),
  #[command(about = "Start an interactive session")]
  Repl(DecnumReplCommand),
  #[command(about = "Print a shell completion script")]
  Completion(DecnumCompletionCommand),
}

impl DecnumCommand {
  pub fn execute() -> Result<()> {
    match Self::parse() {
      DecnumCommand::Run(run) => run.execute(),
      DecnumCommand::Eval(eval) => eval.execute(),
      DecnumCommand::Repl(repl) => repl.execute(),
      DecnumCommand::Completion(completion) => completion.execute(),
    }
  }
}

#[derive(Debug, Args)]
pub struct DecnumCompletionCommand {
  #[arg(value_enum)]
  shell: Shell,
}

impl DecnumCompletionCommand {
  pub fn execute(self) -> Result<()> {
    generate(self.shell, &mut DecnumCommand::command(), "decnum", &mut io::stdout());
    Ok(())
  }
}
