mod common;
mod decnum_cli;

pub use common::*;
pub use decnum_cli::*;
