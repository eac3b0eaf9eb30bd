use std::io;

use smsru_plain::{ApiId, MessageText, RawPhoneNumber, SendOptions, SendSms, SmsRuClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_id = std::env::var("SMSRU_API_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSRU_API_ID environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("SMSRU_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSRU_PHONE environment variable is required",
        )
    })?;

    let client = SmsRuClient::new(ApiId::new(api_id)?);
    let phone = RawPhoneNumber::new(phone_raw)?;
    let text = MessageText::new("Hello from the smsru-plain demo.")?;
    let request = SendSms::to_one(phone, text, SendOptions::default());

    let response = client.cost(&request).await?;
    println!("cost: {} RUB", response.total);

    Ok(())
}
