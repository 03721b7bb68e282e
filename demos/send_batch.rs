use pushover::PushoverClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = PushoverClient::from_env()?;

    let alert = client.create_message("Critical error in production");
    alert.set("title", Some("Production Alert"));
    alert.set("url", Some("https://dashboard.example.com/errors/123"));
    alert.set("url_title", Some("View error details"));
    alert.set("priority", Some(1));

    client.create_message("Nightly backup finished");

    let results = client.send_all().await?;
    println!("sent {} message(s)", results.len());

    Ok(())
}
