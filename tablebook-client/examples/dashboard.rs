// tablebook-client/examples/dashboard.rs
// Print today's dashboard, or search by phone number
//
// Run: cargo run -p tablebook-client --example dashboard [mobile_number]

use tablebook_client::{CancellationToken, ClientConfig, Gateway};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Using reservation API");
    let gateway = Gateway::new(&config)?;

    // Ctrl-C cancels whatever is in flight
    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    if let Some(mobile_number) = std::env::args().nth(1) {
        let found = gateway.search_by_phone(&mobile_number, Some(&token)).await?;
        if found.is_empty() {
            println!("No reservations found");
        }
        for r in &found.reservations {
            println!(
                "{:>5}  {}  {}  {:<24} {:>2} people  {}",
                r.reservation_id,
                r.display_date(),
                r.display_time(),
                r.full_name(),
                r.people,
                r.status
            );
        }
        return Ok(());
    }

    let dashboard = gateway
        .load_dashboard(shared::datetime::today(), Some(&token))
        .await?;

    println!("Reservations for {}", dashboard.date);
    for r in dashboard.active_reservations() {
        println!(
            "{:>5}  {}  {:<24} {:>2} people  {}",
            r.reservation_id,
            r.display_time(),
            r.full_name(),
            r.people,
            r.status
        );
    }

    println!();
    println!("Tables");
    for t in &dashboard.tables {
        println!(
            "{:>5}  {:<12} cap {:>2}  {}",
            t.table_id,
            t.table_name,
            t.capacity,
            t.status_label()
        );
    }

    Ok(())
}
