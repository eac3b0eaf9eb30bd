use std::io;

use smsru_plain::{ApiId, SmsRuClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_id = std::env::var("SMSRU_API_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSRU_API_ID environment variable is required",
        )
    })?;

    let client = SmsRuClient::new(ApiId::new(api_id)?);
    client.check_auth().await?;

    println!("api_id accepted");

    Ok(())
}
