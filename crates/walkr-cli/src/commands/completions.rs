use clap::{Args, CommandFactory};
use clap_complete::Shell;

use super::CmdResult;
use crate::Cli;

#[derive(Args)]
pub struct CompletionsArgs {
    /// Target shell
    shell: Shell,
}

pub fn run(args: CompletionsArgs) -> CmdResult {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "walkr", &mut std::io::stdout());
    Ok(())
}
