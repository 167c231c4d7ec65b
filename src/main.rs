mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod sheet;
mod utils;

use clap::Parser;

use cli::{Cli, TerminalPicker, parse_command};
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();

    // Keep stderr quiet for JSON consumers and --quiet
    let config = if cli.json || cli.quiet {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(config);
    set_debug(cli.debug);

    let steps = parse_command(cli.command, cli.no_rename);
    let result = app::run(&cli, steps, &mut TerminalPicker)
        .and_then(|report| app::print_report(&cli, &report));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
