use std::io::{self, BufRead, IsTerminal, StdinLock, Write};

use anyhow::Result;
use clap::Args;
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{Session, StatsArgs};

#[derive(Debug, Args)]
pub struct DecnumReplCommand {
  /// Echo each input line, for use with piped input.
  #[arg(long)]
  echo: bool,
  #[command(flatten)]
  stats: StatsArgs,
}

impl DecnumReplCommand {
  pub fn execute(self) -> Result<()> {
    let mut input = Input::new()?;
    let mut session = Session::default();
    let mut line_no = 0;
    while let Some(line) = input.read_line()? {
      line_no += 1;
      if self.echo {
        println!("> {line}");
      }
      match line.trim() {
        ":quit" => break,
        ":vars" => print!("{}", session.calc),
        _ => {
          session.exec(line_no, &line, &mut io::stdout())?;
        }
      }
      io::stdout().flush()?;
    }
    session.report(&self.stats);
    Ok(())
  }
}

/// Line editing on a terminal; plain line reads from a pipe, which never
/// writes a prompt.
enum Input {
  Editor(DefaultEditor),
  Piped(StdinLock<'static>),
}

impl Input {
  fn new() -> Result<Self> {
    let stdin = io::stdin();
    Ok(if stdin.is_terminal() {
      Input::Editor(DefaultEditor::new()?)
    } else {
      Input::Piped(stdin.lock())
    })
  }

  fn read_line(&mut self) -> Result<Option<String>> {
    match self {
      Input::Editor(editor) => loop {
        match editor.readline("> ") {
          Ok(line) => {
            _ = editor.add_history_entry(line.as_str());
            return Ok(Some(line));
          }
          Err(ReadlineError::Interrupted) => continue,
          Err(ReadlineError::Eof) => return Ok(None),
          Err(err) => Err(err)?,
        }
      },
      Input::Piped(stdin) => {
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
          return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
      }
    }
  }
}
