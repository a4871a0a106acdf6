use clap::Parser;

use wxdaily::cli::{self, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let result = match args.command {
        Commands::Send(args) => cli::send::execute(args).await,
        Commands::Context(args) => cli::context::execute(args).await,
        Commands::Check(CheckCommand::Config(args)) => cli::check::execute_config(args).await,
        Commands::Check(CheckCommand::Token(args)) => cli::check::execute_token(args).await,
    };

    if let Err(e) = result {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
