use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TooManyRecipients { max: usize, actual: usize },
    InvalidPhoneNumber { input: String },
    TtlOutOfRange { actual_secs: u64 },
    SendTimeTooFarAhead { scheduled: u64, deadline: u64 },
    UnsupportedCurrency { requested: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooManyRecipients { max, actual } => {
                write!(f, "too many recipients: {actual} (max {max})")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::TtlOutOfRange { actual_secs } => {
                write!(f, "ttl out of range: {actual_secs}s (expected 1m..=24h)")
            }
            Self::SendTimeTooFarAhead {
                scheduled,
                deadline,
            } => {
                write!(
                    f,
                    "scheduled send time {scheduled} is more than 30 days ahead (latest {deadline})"
                )
            }
            Self::UnsupportedCurrency { requested } => {
                write!(f, "unsupported currency: {requested} (only RUB)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
