use clap::Parser;
use order_review::cli::{self, Cli};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli.logging().init();

    match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "order-review failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
