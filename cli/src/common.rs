use std::{
  fmt::{self, Display, Write as _},
  io::{self, Write},
  process::exit,
  str,
  time::{Duration, Instant},
};

use clap::Args;

use decnum::eval::{Calculator, Value};

#[derive(Debug, Default, Clone, Args)]
pub struct StatsArgs {
  /// Print statistics about the session to stderr when it ends.
  #[arg(long, env = "DECNUM_STATS")]
  stats: bool,
  /// Leave timing out of the statistics.
  #[arg(long)]
  no_perf: bool,
}

/// A calculator plus the bookkeeping shared by every command.
pub struct Session {
  pub calc: Calculator,
  pub stats: Stats,
  started: Instant,
}

impl Default for Session {
  fn default() -> Self {
    Session { calc: Calculator::default(), stats: Stats::default(), started: Instant::now() }
  }
}

impl Session {
  /// Executes one line, writing its value to `out` and any error to stderr.
  /// Returns whether the line succeeded.
  pub fn exec(&mut self, line_no: usize, line: &str, out: &mut impl Write) -> io::Result<bool> {
    let result = self.calc.exec(line);
    let content = line.trim_start();
    if !content.is_empty() && !content.starts_with('#') {
      self.stats.statements += 1;
    }
    match result {
      Ok(Some(value)) => {
        self.stats.printed += 1;
        if let Value::Nat(n) = &value {
          self.stats.largest = self.stats.largest.max(n.digit_count() as u64);
        }
        writeln!(out, "{value}")?;
        Ok(true)
      }
      Ok(None) => Ok(true),
      Err(diag) => {
        self.stats.failed += 1;
        eprintln!("{}", diag.report(line_no));
        Ok(false)
      }
    }
  }

  /// Prints statistics to stderr if they were requested.
  pub fn report(&mut self, args: &StatsArgs) {
    for (_, value) in self.calc.vars() {
      self.stats.largest = self.stats.largest.max(value.digit_count() as u64);
    }
    self.stats.time = (!args.no_perf).then(|| self.started.elapsed());
    if args.stats {
      eprintln!("{}", self.stats);
    }
  }

  pub fn success(&self) -> bool {
    self.stats.failed == 0
  }

  /// Reports statistics, then exits if any statement failed.
  pub fn check(mut self, args: &StatsArgs) {
    self.report(args);
    if !self.success() {
      exit(1);
    }
  }
}

/// Statistics about a calculator session.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
  /// Non-blank lines executed, including failed ones.
  pub statements: u64,
  /// Expression statements whose value was printed.
  pub printed: u64,
  pub failed: u64,
  /// The most digits in any printed value or variable.
  pub largest: u64,
  pub time: Option<Duration>,
}

impl Display for Stats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let lines = [
      ("Statements", None),
      ("  Executed", Some((self.statements, ""))),
      ("  Printed", Some((self.printed, ""))),
      ("  Failed", Some((self.failed, ""))),
      ("", None),
      ("Values", None),
      ("  Largest", Some((self.largest, "digits"))),
    ]
    .into_iter()
    .chain(self.time.into_iter().flat_map(|time| {
      [("", None), ("Performance", None), ("  Time", Some((time.as_millis() as u64, "ms")))]
    }));

    let max_label_width = lines.clone().map(|x| x.0.len()).max().unwrap_or(0) + 1;
    let max_value =
      lines.clone().filter_map(|x| x.1).map(|x| x.0).max().unwrap_or(0).max(1_000_000);
    let max_value_width = measure_int(max_value);

    for (label, value) in lines {
      f.write_char('\n')?;
      f.write_str(label)?;
      if let Some((mut value, unit)) = value {
        let value_width = measure_int(value);
        for _ in 0..(max_label_width + 2 + max_value_width - label.len() - value_width) {
          f.write_char(' ')?;
        }

        let mut text_buf = [0; measure_int(u64::MAX)];
        let mut index = text_buf.len();
        let mut digits = 0;
        while value != 0 || digits == 0 {
          if digits != 0 && digits % 3 == 0 {
            index -= 1;
            text_buf[index] = b'_';
          }
          index -= 1;
          text_buf[index] = b'0' + (value % 10) as u8;
          value /= 10;
          digits += 1;
        }
        f.write_str(str::from_utf8(&text_buf[index..]).map_err(|_| fmt::Error)?)?;

        if !unit.is_empty() {
          f.write_char(' ')?;
          f.write_str(unit)?;
        }
      }
    }

    Ok(())
  }
}

/// Count the number of characters needed to pretty-print an integer.
const fn measure_int(int: u64) -> usize {
  if int == 0 {
    1
  } else {
    let digits = int.ilog10() + 1;
    (digits + (digits - 1) / 3) as usize
  }
}
