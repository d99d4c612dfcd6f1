use atrea_climate::{AdapterConfig, AtreaClient, HvacMode};

/// Run with: ATREA_HOST=172.30.0.11 cargo test --test integration -- --ignored
/// Requires a reachable Atrea unit on the LAN.
#[tokio::test]
#[ignore]
async fn connect_and_refresh_real_unit() {
    let host = std::env::var("ATREA_HOST").unwrap_or_else(|_| "172.30.0.11".to_string());
    let config = AdapterConfig::new(host);

    let mut client = AtreaClient::from_config(&config)
        .await
        .expect("unit should answer /api/ping");

    for i in 0..3 {
        client
            .refresh()
            .await
            .unwrap_or_else(|e| panic!("refresh {i} failed: {e}"));
        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
    }

    assert!(client.current_temperature().is_some());
    assert!(client.target_temperature().is_some());
    assert!(client.fan_mode().is_some());
    assert_eq!(client.hvac_mode(), HvacMode::HeatCool);
    println!("{}", serde_json::to_string_pretty(&client.state()).unwrap());
}
