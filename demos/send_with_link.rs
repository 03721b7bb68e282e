use std::io;

use pushover::{PushoverClient, TextOptions};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let link = std::env::var("PUSHOVER_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "PUSHOVER_URL environment variable is required",
        )
    })?;

    let client = PushoverClient::from_env()?;
    let sent = client
        .send_text(
            "New deployment completed",
            TextOptions {
                title: Some("Deployment Status".to_owned()),
                url: Some(Url::parse(&link)?),
                url_title: Some("View deployment logs".to_owned()),
            },
        )
        .await?;
    println!("sent: {sent}");

    Ok(())
}
