//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SEND_SMS_MAX_RECIPIENTS, SEND_TIME_WINDOW_SECS, SendOptions, SendSms};
pub use response::{BALANCE_CURRENCY, Balance, CostResponse, SendResponse, SmsResult, StatusResponse};
pub use validation::ValidationError;
pub use value::{
    ApiId, KnownStatusCode, MessageText, PhoneNumber, RawPhoneNumber, SenderId, SmsId, StatusCode,
    TtlMinutes, UNKNOWN_STATUS_MEANING, UnixTimestamp,
};
