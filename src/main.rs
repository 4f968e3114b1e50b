use bedpe2vcf::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{convert, paste},
    io::readers::stdin_is_terminal,
    utils::util::{handle_conv_error_and_exit, Result},
};
use clap::{CommandFactory, Parser};
use std::time;

fn print_subcommand_help(name: &str) {
    let mut command = Cli::command();
    if let Some(subcommand) = command.find_subcommand_mut(name) {
        let _ = subcommand.print_help();
    }
}

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    log::trace!("CLI options set: {:?}", cli);

    // No input file and nothing piped in: show usage rather than wait on the terminal
    if cli.command.needs_usage(stdin_is_terminal()) {
        print_subcommand_help(cli.command.name());
        std::process::exit(1);
    }

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        &**FULL_VERSION,
        cli.command.name()
    );

    let start_timer = time::Instant::now();
    match cli.command {
        Command::Convert(args) => {
            log::trace!("Convert arguments: {:#?}", args);
            convert(args)?
        }
        Command::Paste(args) => {
            log::trace!("Paste arguments: {:#?}", args);
            paste(args)?
        }
    }
    log::info!("Total execution time: {:.2?}", start_timer.elapsed());

    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_conv_error_and_exit(e);
    }
}
