use atrea_climate::AtreaClient;
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> atrea_climate::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let host = args.get(1).expect("usage: monitor <host> [interval_secs]");
    let interval = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(30));

    println!("Connecting to {host}...");
    let mut client = AtreaClient::builder(host).connect().await?;
    println!("Connected. Polling every {}s...", interval.as_secs());

    loop {
        match client.refresh().await {
            Ok(()) => {
                let attrs = client.extra_state_attributes();
                let fmt = |t: Option<atrea_climate::Temperature>| {
                    t.map(|t| t.to_string()).unwrap_or_else(|| "?".to_string())
                };
                println!(
                    "[{}] supply: {} | target: {} | fan: {} | inside: {} | outside: {} | exhaust: {} | {:?}",
                    client.name(),
                    fmt(client.current_temperature()),
                    fmt(client.target_temperature()),
                    client
                        .fan_mode()
                        .map(|f| format!("{f}%"))
                        .unwrap_or_else(|| "?".to_string()),
                    fmt(attrs.inside_temperature),
                    fmt(attrs.outside_temperature),
                    fmt(attrs.exhaust_temperature),
                    client.hvac_action(),
                );
            }
            Err(e) => eprintln!("[{}] unavailable: {e}", client.name()),
        }
        tokio::time::sleep(interval).await;
    }
}
