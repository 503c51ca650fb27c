use colored::Colorize;
use money_render::{cli::run_cli, init};

fn main() {
    init();

    if let Err(err) = run_cli() {
        eprintln!("{} {err}", "Error:".red());
        std::process::exit(1);
    }
}
