use pushover::{PushoverClient, TextOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let message = std::env::var("PUSHOVER_MESSAGE")
        .unwrap_or_else(|_| "Hello from the pushover demo.".to_owned());

    // PUSHOVER_APP_TOKEN and PUSHOVER_USER_TOKEN must be set.
    let client = PushoverClient::from_env()?;
    let sent = client.send_text(message, TextOptions::default()).await?;
    println!("sent: {sent}");

    Ok(())
}
