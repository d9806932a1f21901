//! `order-review` command line.

mod interactive;
pub mod logging;

use crate::client::MarketplaceClient;
use crate::domain::order::{OrderAction, OrderApi};
use crate::error::ReviewError;
use crate::host::ReviewHost;
use crate::network::{API_URL_ENV, DEFAULT_API_URL};
use crate::review::OrderReview;
use crate::shared::OrderId;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

pub use interactive::{parse_command, HostCommand};
pub use logging::{LogFormat, LoggingConfig};

#[derive(Parser, Debug)]
#[command(name = "order-review", version, about = "Review, accept or reject a marketplace sale")]
pub struct Cli {
    /// Marketplace API base URL.
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub base_url: String,

    /// Log level filter (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch an order and print the review modal.
    Show { order_id: OrderId },
    /// Accept the sale.
    Accept { order_id: OrderId },
    /// Reject (decline) the sale.
    Reject { order_id: OrderId },
    /// Interactive review: open/close the modal and act on it from stdin.
    Review { order_id: OrderId },
}

impl Cli {
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }
}

pub async fn run(cli: Cli) -> Result<ExitCode, ReviewError> {
    let client = MarketplaceClient::builder()
        .base_url(&cli.base_url)
        .build()?;
    tracing::debug!(base_url = client.base_url(), "Marketplace client ready");
    let review = OrderReview::new(client);

    match cli.command {
        Command::Show { order_id } => {
            review.show(order_id).await;
            let view = review.view().await;
            print!("{}", view);
            Ok(exit_code(view.fetch_error().is_none()))
        }
        Command::Accept { order_id } => decide(&review, order_id, OrderAction::Accept).await,
        Command::Reject { order_id } => decide(&review, order_id, OrderAction::Reject).await,
        Command::Review { order_id } => {
            interactive::run(ReviewHost::new(review, order_id)).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn decide<A: OrderApi>(
    review: &OrderReview<A>,
    order_id: OrderId,
    action: OrderAction,
) -> Result<ExitCode, ReviewError> {
    review.show(order_id).await;
    if review.view().await.fetch_error().is_some() {
        print!("{}", review.view().await);
        return Ok(ExitCode::FAILURE);
    }

    let result = review.act(action).await;
    print!("{}", review.view().await);
    Ok(exit_code(result.is_ok()))
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
