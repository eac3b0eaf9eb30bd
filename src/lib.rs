//! Typed Rust client for the SMS.RU legacy plain-text HTTP API.
//!
//! Responses on this API are `text/plain`, with lines separated by `\n`:
//! the first line is a numeric status code (100 = OK), the remaining lines
//! are operation-specific payload parts. The design is a domain layer of
//! strong types, a transport layer for wire-format quirks, and a small
//! client layer orchestrating requests.
//!
//! ```rust,no_run
//! use smsru_plain::{ApiId, MessageText, RawPhoneNumber, SendOptions, SendSms, SmsRuClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsru_plain::SmsRuError> {
//!     let client = SmsRuClient::new(ApiId::new("...")?);
//!     let phone = RawPhoneNumber::new("+79251234567")?;
//!     let msg = MessageText::new("hello")?;
//!     let request = SendSms::to_one(phone, msg, SendOptions::default());
//!     let _resp = client.send(&request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{SmsRuClient, SmsRuClientBuilder, SmsRuError};
pub use domain::{
    ApiId, BALANCE_CURRENCY, Balance, CostResponse, KnownStatusCode, MessageText, PhoneNumber,
    RawPhoneNumber, SEND_SMS_MAX_RECIPIENTS, SendOptions, SendResponse, SendSms, SenderId, SmsId,
    SmsResult, StatusCode, StatusResponse, TtlMinutes, UnixTimestamp, ValidationError,
};
