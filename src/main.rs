mod launch;
mod menu;

use clap::Parser;
use colored::Colorize;

/// dlaunch main parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let code = match launch::handle_launch() {
        Ok(code) => code,
        Err(e) => {
            println!("{}", format!("Error: {e:#}").red());
            1
        }
    };

    std::process::exit(code);
}
