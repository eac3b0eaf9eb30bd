use rust_decimal::Decimal;

use crate::domain::value::{SmsId, StatusCode};

/// Account balance in the provider's single supported currency.
pub const BALANCE_CURRENCY: &str = "RUB";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Balance amount plus its (fixed) currency code.
pub struct Balance {
    pub amount: Decimal,
    pub currency: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome for one recipient of a send request.
///
/// Either an assigned message id (with status code 100) or a per-recipient
/// error code with no id.
pub struct SmsResult {
    pub sms_id: Option<String>,
    pub status_code: StatusCode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-recipient outcomes, positionally aligned with the request's
/// recipient list.
pub struct SendResponse {
    pub results: Vec<SmsResult>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Cost of sending a message.
///
/// `costs` is always empty: the provider reports no per-recipient breakdown.
pub struct CostResponse {
    pub total: Decimal,
    pub costs: Vec<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Delivery state of an already-sent message.
pub struct StatusResponse {
    pub sms_id: SmsId,
    pub status_code: StatusCode,
}
