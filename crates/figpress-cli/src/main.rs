//! Figpress CLI - Build exam-diagram and survey-analysis PDF reports

mod cli;
mod status;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    // Logging is initialized by the app once the flags are known
    let mut app = cli::FigpressApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
