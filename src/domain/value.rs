use std::time::Duration;

use crate::domain::validation::ValidationError;

use phonenumber::country;

/// Meaning string reported for status codes this crate does not know.
pub const UNKNOWN_STATUS_MEANING: &str = "<UnknownStatus>";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS.RU `api_id` token.
///
/// Invariant: non-empty after trimming.
pub struct ApiId(String);

impl ApiId {
    /// Query field name used by SMS.RU (`api_id`).
    pub const FIELD: &'static str = "api_id";

    /// Create a validated [`ApiId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Displayable sender name (`from`).
///
/// Invariant: non-empty after trimming. The value must be approved for your SMS.RU account.
pub struct SenderId(String);

impl SenderId {
    /// Query field name used by SMS.RU (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`msg`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Query field name used by SMS.RU (`msg`).
    pub const FIELD: &'static str = "msg";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// SMS.RU message id (`sms_id`) returned by `sms/send`.
///
/// Invariant: non-empty after trimming.
pub struct SmsId(String);

impl SmsId {
    /// Query field name used by SMS.RU (`sms_id`).
    pub const FIELD: &'static str = "sms_id";

    /// Create a validated [`SmsId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sms id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to SMS.RU (`to`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Query field name used by SMS.RU (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to SMS.RU.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        // Preserve E.164 normalization semantics for opt-in `PhoneNumber`.
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Query field name used by SMS.RU (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds (`time`).
///
/// This is used by SMS.RU for scheduled sends.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Query field name used by SMS.RU (`time`).
    pub const FIELD: &'static str = "time";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// TTL (time-to-live) for delivery attempts in minutes (`ttl`).
///
/// Invariant: `1..=1440`.
pub struct TtlMinutes(u16);

impl TtlMinutes {
    /// Query field name used by SMS.RU (`ttl`).
    pub const FIELD: &'static str = "ttl";

    /// Minimum allowed TTL value.
    pub const MIN: u16 = 1;
    /// Maximum allowed TTL value (24 hours).
    pub const MAX: u16 = 1440;

    /// Create a validated TTL value.
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::TtlOutOfRange {
                actual_secs: u64::from(value) * 60,
            });
        }
        Ok(Self(value))
    }

    /// Create a TTL from a [`Duration`] in `[1 minute, 24 hours]`.
    ///
    /// The wire unit is whole minutes; a sub-minute remainder is truncated.
    pub fn from_duration(value: Duration) -> Result<Self, ValidationError> {
        let secs = value.as_secs();
        if !(60..=86_400).contains(&secs) {
            return Err(ValidationError::TtlOutOfRange { actual_secs: secs });
        }
        Ok(Self((secs / 60) as u16))
    }

    /// Get the underlying TTL value.
    pub fn value(self) -> u16 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMS.RU status code as found on the first line of a plain-text response
/// (and per recipient in `sms/send` responses).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// The code SMS.RU uses for a successful request (`100`).
    pub const OK: Self = Self(100);

    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by SMS.RU.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Returns `true` for the OK code (`100`).
    pub fn is_ok(self) -> bool {
        self == Self::OK
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Human-readable meaning of this code, or [`UNKNOWN_STATUS_MEANING`]
    /// when the code is not in the provider's documented table.
    ///
    /// Diagnostics only; control flow must branch on the numeric code.
    pub fn meaning(self) -> &'static str {
        self.known()
            .map_or(UNKNOWN_STATUS_MEANING, KnownStatusCode::meaning)
    }

    /// Returns `true` if this status code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_retryable()
        )
    }

    /// Returns `true` if this status code represents an authentication/authorization error.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known SMS.RU status codes supported by this crate.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from
/// [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    MessageNotFound,
    RequestOkOrQueued,
    SentWaitingForOperator,
    SentWaitingForDelivery,
    Delivered,
    NotDeliveredTimeout,
    NotDeliveredRejectedByOperator,
    NotDeliveredPhoneFailure,
    NotDeliveredUnknown,
    NotDeliveredRejected,
    Read,
    NotDeliveredBadRoute,
    IncorrectApiToken,
    NotEnoughMoney,
    BadPhoneNumber,
    NoMessageBody,
    SenderNotApproved,
    MessageBodyTooLarge,
    UserDefinedLimitReached,
    BadRoute,
    IncorrectTime,
    PhoneNumberBlockedByUser,
    HttpMethodNotAllowed,
    ApiMethodNotFound,
    IncorrectBodyEncoding,
    TooManyPhoneNumbers,
    TemporarilyUnavailable,
    DailyPerNumberLimitReached,
    SameMessagePerMinuteLimitReached,
    SameMessagePerDayLimitReached,
    SpamDetected,
    ExpiredApiToken,
    IncorrectLoginOrPassword,
    AuthorizedButNotActivated,
    AuthorizedButTwoFaIncorrect,
    AuthorizedButTooManyTwoFaSent,
    AuthorizedButTooManyIncorrectTwoFa,
    InternalServerError,
    CallbackIncorrectUrl,
    CallbackNotFound,
}

impl KnownStatusCode {
    /// Convert a raw SMS.RU integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => Self::MessageNotFound,
            100 => Self::RequestOkOrQueued,
            101 => Self::SentWaitingForOperator,
            102 => Self::SentWaitingForDelivery,
            103 => Self::Delivered,
            104 => Self::NotDeliveredTimeout,
            105 => Self::NotDeliveredRejectedByOperator,
            106 => Self::NotDeliveredPhoneFailure,
            107 => Self::NotDeliveredUnknown,
            108 => Self::NotDeliveredRejected,
            110 => Self::Read,
            150 => Self::NotDeliveredBadRoute,
            200 => Self::IncorrectApiToken,
            201 => Self::NotEnoughMoney,
            202 => Self::BadPhoneNumber,
            203 => Self::NoMessageBody,
            204 => Self::SenderNotApproved,
            205 => Self::MessageBodyTooLarge,
            206 => Self::UserDefinedLimitReached,
            207 => Self::BadRoute,
            208 => Self::IncorrectTime,
            209 => Self::PhoneNumberBlockedByUser,
            210 => Self::HttpMethodNotAllowed,
            211 => Self::ApiMethodNotFound,
            212 => Self::IncorrectBodyEncoding,
            213 => Self::TooManyPhoneNumbers,
            220 => Self::TemporarilyUnavailable,
            230 => Self::DailyPerNumberLimitReached,
            231 => Self::SameMessagePerMinuteLimitReached,
            232 => Self::SameMessagePerDayLimitReached,
            233 => Self::SpamDetected,
            300 => Self::ExpiredApiToken,
            301 => Self::IncorrectLoginOrPassword,
            302 => Self::AuthorizedButNotActivated,
            303 => Self::AuthorizedButTwoFaIncorrect,
            304 => Self::AuthorizedButTooManyTwoFaSent,
            305 => Self::AuthorizedButTooManyIncorrectTwoFa,
            500 => Self::InternalServerError,
            901 => Self::CallbackIncorrectUrl,
            902 => Self::CallbackNotFound,
            _ => return None,
        })
    }

    /// Human-readable meaning, as documented by the provider.
    pub fn meaning(self) -> &'static str {
        match self {
            Self::MessageNotFound => "Message not found",
            Self::RequestOkOrQueued => "OK",
            Self::SentWaitingForOperator => "Sent, waiting for operator",
            Self::SentWaitingForDelivery => "Sent, waiting for delivery",
            Self::Delivered => "Delivered",
            Self::NotDeliveredTimeout => "Not delivered: Timeout",
            Self::NotDeliveredRejectedByOperator => "Not delivered: Rejected by operator",
            Self::NotDeliveredPhoneFailure => "Not delivered: Phone failure",
            Self::NotDeliveredUnknown => "Not delivered: Unknown error",
            Self::NotDeliveredRejected => "Not delivered: Rejected",
            Self::Read => "Message has been read",
            Self::NotDeliveredBadRoute => "Not delivered: Bad route",
            Self::IncorrectApiToken => "Bad request: Incorrect API token",
            Self::NotEnoughMoney => "Bad request: Not enough money",
            Self::BadPhoneNumber => "Bad request: Incorrect phone number",
            Self::NoMessageBody => "Bad request: No message body",
            Self::SenderNotApproved => "Bad request: Sender is not approved",
            Self::MessageBodyTooLarge => "Bad request: Body too large",
            Self::UserDefinedLimitReached => "Limits: Admin defined limit is reached",
            Self::BadRoute => "Bad request: Bad route",
            Self::IncorrectTime => "Bad request: Incorrect time",
            Self::PhoneNumberBlockedByUser => "Bad request: Phone number is locked by admin",
            Self::HttpMethodNotAllowed => "Bad request: HTTP method not allowed",
            Self::ApiMethodNotFound => "Bad request: HTTP route not found",
            Self::IncorrectBodyEncoding => "Bad request: Incorrect body encoding",
            Self::TooManyPhoneNumbers => "Bad request: Too much phone numbers (recipients)",
            Self::TemporarilyUnavailable => "Server: Temporary unavailable",
            Self::DailyPerNumberLimitReached => "Limits: Daily limit per phone number is reached",
            Self::SameMessagePerMinuteLimitReached => {
                "Limits: Same message per minute per phone number is reached"
            }
            Self::SameMessagePerDayLimitReached => {
                "Limits: Same message per day per phone number is reached"
            }
            Self::SpamDetected => "Limits: Spam detected",
            Self::ExpiredApiToken => "Bad request: API token is expired",
            Self::IncorrectLoginOrPassword => "Bad request: Incorrect login or password",
            Self::AuthorizedButNotActivated => "Bad request: Authorized, but not activated",
            Self::AuthorizedButTwoFaIncorrect => "Bad request: Authorized, but 2FA is incorrect",
            Self::AuthorizedButTooManyTwoFaSent => {
                "Bad request: Authorized, but too much sending 2FA"
            }
            Self::AuthorizedButTooManyIncorrectTwoFa => {
                "Bad request: Authorized, but too much incorrect 2FA"
            }
            Self::InternalServerError => "Server: Internal server error",
            Self::CallbackIncorrectUrl => "Callbacks: Incorrect URL",
            Self::CallbackNotFound => "Callbacks: No registered callback",
        }
    }

    /// Whether this status is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::TemporarilyUnavailable
                | Self::AuthorizedButTooManyTwoFaSent
                | Self::AuthorizedButTooManyIncorrectTwoFa
                | Self::InternalServerError
        )
    }

    /// Whether this status indicates invalid/expired credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::IncorrectApiToken
                | Self::ExpiredApiToken
                | Self::IncorrectLoginOrPassword
                | Self::AuthorizedButNotActivated
        )
    }
}
