use std::io;

use smsru_plain::{ApiId, SmsId, SmsRuClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_id = std::env::var("SMSRU_API_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSRU_API_ID environment variable is required",
        )
    })?;
    let sms_id_raw = std::env::var("SMSRU_SMS_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSRU_SMS_ID environment variable is required",
        )
    })?;

    let client = SmsRuClient::new(ApiId::new(api_id)?);
    let sms_id = SmsId::new(sms_id_raw)?;

    let response = client.status(&sms_id).await?;
    println!(
        "{}: {} ({})",
        response.sms_id.as_str(),
        response.status_code.as_i32(),
        response.status_code.meaning()
    );

    Ok(())
}
