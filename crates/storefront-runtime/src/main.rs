use anyhow::{Context, Result};
use sf_01_cart_engine::CheckoutState;
use storefront_runtime::render::render_summary;
use storefront_runtime::{Command, Reply, StorefrontApp, StorefrontConfig};
use storefront_telemetry::{init_logging, log_event, TelemetryConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(&TelemetryConfig::from_env()).context("initializing logging")?;

    let config = StorefrontConfig::from_env();
    config.validate().context("invalid configuration")?;
    log_event!(info, "runtime", "starting farm storefront", ?config);

    let app = StorefrontApp::start(&config).await?;
    println!("{}", app.render());
    println!("Type 'help' for commands.");

    // Timer-driven transitions arrive without a command; print them here.
    let mut updates = app.subscribe();
    let display_name = app.display_name().to_string();
    let theme = app.theme().clone();
    let renderer = tokio::spawn(async move {
        let mut last = updates.borrow_and_update().state;
        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            let timer_driven = matches!(
                (last, snapshot.state),
                (CheckoutState::Submitting, CheckoutState::Confirmed)
                    | (CheckoutState::Confirmed, CheckoutState::Idle)
            );
            last = snapshot.state;
            if timer_driven {
                println!("{}", render_summary(&snapshot, &display_name, &theme));
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(command)) => match app.handle(command)? {
                        Reply::Output(text) => println!("{text}"),
                        Reply::Quit => break,
                    },
                    Err(e) => println!("{e}"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("[runtime] interrupt received");
                break;
            }
        }
    }

    app.shutdown();
    log_event!(info, "runtime", "storefront stopped", category = %app.category());
    renderer.abort();
    if let Err(e) = renderer.await {
        if !e.is_cancelled() {
            warn!("[runtime] renderer task failed: {e}");
        }
    }
    Ok(())
}
