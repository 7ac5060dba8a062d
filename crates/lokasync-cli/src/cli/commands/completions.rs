//! `lokasync completions <shell>` – print shell completions to stdout.

use clap::CommandFactory;
use clap_complete::Shell;

pub fn run_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
