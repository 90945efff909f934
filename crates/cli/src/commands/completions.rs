//! Shell completion generation command.
//!
//! Output is always written to stdout; users redirect it into their shell's
//! completion directory.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};

pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = crate::args::Cli::command();
    generate(shell, &mut cmd, "lap-cli", &mut io::stdout());
    Ok(())
}
