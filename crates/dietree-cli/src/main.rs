mod cli;
mod commands;


use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::CommandError;
use commands::dump::DumpArgs;
use commands::sections::SectionsArgs;

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dispatch(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(command: Command) -> Result<(), CommandError> {
    match command {
        Command::Dump { layout, output } => {
            let to_stdout = output.to_stdout();
            commands::dump::run(DumpArgs {
                config: layout.config()?,
                color: output.color.should_colorize(to_stdout),
                output: (!to_stdout).then_some(output.output),
                omit: output.omit,
                show_forms: !output.no_forms,
                show_abbrevs: !output.no_abbrevs,
            })
        }
        Command::Sections { layout, json } => commands::sections::run(SectionsArgs {
            config: layout.config()?,
            json,
        }),
    }
}
