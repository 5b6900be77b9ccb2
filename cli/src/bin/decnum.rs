use anyhow::Result;
use decnum_cli::DecnumCommand;

fn main() -> Result<()> {
  DecnumCommand::execute()
}
