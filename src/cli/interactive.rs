//! Interactive host loop over stdin.

use crate::domain::order::{OrderAction, OrderApi};
use crate::error::ReviewError;
use crate::host::ReviewHost;
use crate::shared::OrderId;

use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "commands: open | close | toggle | accept | reject | refresh | order <id> | help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Open,
    Close,
    Toggle,
    Act(OrderAction),
    Refresh,
    Order(OrderId),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<HostCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(HostCommand::Help);
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "open" => HostCommand::Open,
        "close" => HostCommand::Close,
        "toggle" => HostCommand::Toggle,
        "accept" => HostCommand::Act(OrderAction::Accept),
        "reject" | "decline" => HostCommand::Act(OrderAction::Reject),
        "refresh" => HostCommand::Refresh,
        "order" => {
            let id = parts
                .next()
                .ok_or_else(|| "usage: order <id>".to_string())?;
            HostCommand::Order(
                id.parse()
                    .map_err(|_| format!("not an order id: {}", id))?,
            )
        }
        "help" | "?" => HostCommand::Help,
        "quit" | "exit" | "q" => HostCommand::Quit,
        other => return Err(format!("unknown command: {} ({})", other, HELP)),
    };
    Ok(command)
}

async fn apply<A: OrderApi>(host: &mut ReviewHost<A>, command: HostCommand) {
    match command {
        HostCommand::Open => host.open().await,
        HostCommand::Close => host.close(),
        HostCommand::Toggle => host.toggle().await,
        HostCommand::Refresh => host.review().refresh().await,
        HostCommand::Order(order_id) => host.set_order(order_id).await,
        HostCommand::Act(action) => {
            if !host.is_open() {
                println!("open the modal first");
                return;
            }
            match host.review().act(action).await {
                Ok(_) => {}
                Err(e @ (ReviewError::ActionNotAllowed { .. } | ReviewError::OrderNotLoaded)) => {
                    println!("{}", e)
                }
                // Request failures render as the modal's action error banner.
                Err(e) => tracing::debug!(%action, error = %e, "Order action failed"),
            }
        }
        HostCommand::Help => println!("{}", HELP),
        HostCommand::Quit => {}
    }
}

async fn render<A: OrderApi>(host: &ReviewHost<A>) {
    match host.render().await {
        Some(view) => print!("{}", view),
        None => println!("Modal closed. Type `open` to show it."),
    }
}

pub(super) async fn run<A: OrderApi>(mut host: ReviewHost<A>) -> Result<(), ReviewError> {
    host.mount().await;
    render(&host).await;
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(HostCommand::Quit) => break,
            Ok(HostCommand::Help) => println!("{}", HELP),
            Ok(command) => {
                apply(&mut host, command).await;
                render(&host).await;
            }
            Err(message) => println!("{}", message),
        }
    }
    Ok(())
}
