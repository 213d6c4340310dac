use log::info;
use tradedesk_core::Side;
use tradedesk_runner::cli::{Invocation, parse_args};
use tradedesk_runner::{Desk, DeskConfig};

fn print_help() {
    eprintln!(
        r#"Tradedesk - order entry desk with simulated execution

USAGE:
    tradedesk [OPTIONS]

OPTIONS:
    --config <PATH>     Load quotes, orders and portfolios from a JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Run with the demo watchlist
    tradedesk

    # Run with config file
    tradedesk --config desk.json
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let invocation = match parse_args(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_help();
            std::process::exit(1);
        }
    };

    let config = match invocation {
        Invocation::Help => {
            print_help();
            return Ok(());
        }
        Invocation::Run { config: Some(path) } => {
            info!("Loading configuration from: {}", path.display());
            DeskConfig::from_file(&path)?
        }
        Invocation::Run { config: None } => {
            info!("Using demo configuration");
            DeskConfig::demo()
        }
    };

    let mut desk = Desk::new(config);
    info!("Desk: {}", desk.name);
    info!("Loaded {} orders", desk.load().await?);

    let symbol = desk.first_symbol().await?;
    let executed = desk.place_market_order(&symbol, Side::Buy, 1).await?;
    info!(
        "{} {} x {} filled at {}",
        executed.side, executed.symbol, executed.quantity, executed.execution_price
    );

    info!("Order book:");
    for order in desk.manager.orders().await {
        info!(
            "  {} {} {} {} x {} @ {} [{}]",
            order.id,
            order.side,
            order.kind,
            order.symbol,
            order.quantity,
            order.execution_price,
            order.status
        );
    }

    for (id, summary) in desk.portfolio_summaries().await? {
        info!(
            "Portfolio {}: invested {} current {} P&L {} ({}%)",
            id, summary.invested, summary.current_value, summary.pnl, summary.pnl_percent
        );
    }

    Ok(())
}
