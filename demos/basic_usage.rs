//! Basic usage example: make a few calls and print the accumulated notices.

use api_notify::{ApiClient, RequestConfig, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("api_notify=debug")
        .init();

    let mut defaults = RequestConfig::new();
    defaults.base_url = Some("https://httpbin.org".into());

    let client = ApiClient::builder().default_config(defaults).build();

    // httpbin responses carry no `message` field, so no success notice is
    // recorded, but the parsed body still comes back.
    let response = client.get("/json").send().await?;
    println!("status: {}", response.status);

    // A failing call records a warning notice keyed by the URL.
    let _ = client.get("/status/404").send().await;

    let store = client.store();
    for (id, notice) in store.warning_all().await {
        println!("warning[{id}]: {:?}", notice.text);
    }

    Ok(())
}
