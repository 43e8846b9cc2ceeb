use clap::Parser;
use makeitso::cli::commands::Cli;
use makeitso::cli::handlers;

fn main() {
    makeitso::logging::init();
    let cli = Cli::parse();

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
