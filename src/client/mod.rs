//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rust_decimal::Decimal;
use url::Url;

use crate::domain::{
    ApiId, BALANCE_CURRENCY, Balance, CostResponse, SendResponse, SendSms, SmsId, SmsResult,
    StatusCode, StatusResponse, UnixTimestamp, ValidationError,
};
use crate::transport::{self, UNDECODABLE_STATUS};

const DEFAULT_BASE_URL: &str = "https://sms.ru/";

const AUTH_CHECK_PATH: &str = "auth/check";
const BALANCE_PATH: &str = "my/balance";
const SENDERS_PATH: &str = "my/senders";
const SEND_PATH: &str = "sms/send";
const COST_PATH: &str = "sms/cost";
const STATUS_PATH: &str = "sms/status";

/// How many HTTP redirects a single API call may follow.
const REDIRECT_LIMIT: usize = 5;

/// Parts of this many bytes or fewer in a `sms/send` response are numeric
/// per-recipient error codes; longer parts are assigned message ids. A real
/// id this short would be misclassified, but the provider has never issued
/// one.
const ERROR_CODE_MAX_LEN: usize = 3;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).query(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsRuClient`].
///
/// Non-validation variants keep the raw response body (lossily decoded)
/// so callers can log exactly what the provider sent.
pub enum SmsRuError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with an HTTP status other than 200.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16 },

    /// The provider answered with a non-OK status code on the first line.
    #[error("API error {status_code:?}: {meaning}")]
    Api {
        status_code: StatusCode,
        meaning: &'static str,
        body: String,
    },

    /// The response body was empty or its first line was not a number.
    #[error("empty or undecodable API response")]
    UndecodableResponse { body: String },

    /// The response carried fewer payload parts than the operation requires.
    #[error("unexpected number of response parts: got {got}, expected at least {required}")]
    TooFewParts {
        required: usize,
        got: usize,
        body: String,
    },

    /// A `sms/send` response whose part count does not line up with the
    /// request's recipient count.
    #[error("response part count {got} does not match recipient count (expected {expected})")]
    PartCountMismatch {
        expected: usize,
        got: usize,
        body: String,
    },

    /// A response part that should be numeric (or a decimal amount) was not.
    #[error("cannot parse {field} from response part: {raw:?}")]
    NumericField { field: &'static str, raw: String },

    /// The configured base URL (or a path joined onto it) is not a valid URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`SmsRuClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct SmsRuClientBuilder {
    api_id: ApiId,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsRuClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_id: ApiId) -> Self {
        Self {
            api_id,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (all operation paths are joined onto it).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsRuClient`].
    pub fn build(self) -> Result<SmsRuClient, SmsRuError> {
        let base_url = parse_base_url(&self.base_url)?;

        let mut builder =
            reqwest::Client::builder().redirect(reqwest::redirect::Policy::limited(REDIRECT_LIMIT));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsRuError::Transport(Box::new(err)))?;

        Ok(SmsRuClient {
            api_id: self.api_id,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn parse_base_url(value: &str) -> Result<Url, SmsRuError> {
    let mut url = Url::parse(value)?;
    // Relative path joins replace the last segment unless the base path ends
    // with a slash.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[derive(Clone)]
/// Client for the SMS.RU legacy plain-text API.
///
/// Responses are `text/plain` bodies: the first line is a numeric status
/// code (100 = OK), the remaining lines are operation-specific parts. This
/// type orchestrates request validation, query encoding, and response
/// decoding; every operation performs exactly one HTTP round trip.
pub struct SmsRuClient {
    api_id: ApiId,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for SmsRuClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsRuClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

struct PlainResponse {
    parts: Vec<Vec<u8>>,
    body: Vec<u8>,
}

impl SmsRuClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`SmsRuClient::builder`].
    pub fn new(api_id: ApiId) -> Self {
        SmsRuClientBuilder::new(api_id)
            .build()
            .expect("default client configuration is valid")
    }

    /// Start building a client with custom settings.
    pub fn builder(api_id: ApiId) -> SmsRuClientBuilder {
        SmsRuClientBuilder::new(api_id)
    }

    /// Verify that the configured `api_id` is accepted by the provider.
    ///
    /// Succeeds iff the lightweight `auth/check` call returns the OK code.
    pub async fn check_auth(&self) -> Result<(), SmsRuError> {
        self.call(AUTH_CHECK_PATH, Vec::new(), 0).await.map(|_| ())
    }

    /// Get the account balance (always denominated in RUB).
    pub async fn balance(&self) -> Result<Balance, SmsRuError> {
        let response = self.call(BALANCE_PATH, Vec::new(), 1).await?;
        let amount = parse_decimal_part("balance", &response.parts[0])?;
        Ok(Balance {
            amount,
            currency: BALANCE_CURRENCY,
        })
    }

    /// Get the account balance in the requested currency.
    ///
    /// The provider is single-currency: anything other than `"RUB"` (matched
    /// case-insensitively, surrounding whitespace ignored) is a validation
    /// error and no network call is made.
    pub async fn balance_in(&self, currency: &str) -> Result<Decimal, SmsRuError> {
        let currency = currency.trim().to_uppercase();
        match currency.as_str() {
            BALANCE_CURRENCY => Ok(self.balance().await?.amount),
            "" => Err(ValidationError::Empty { field: "currency" }.into()),
            _ => Err(ValidationError::UnsupportedCurrency {
                requested: currency,
            }
            .into()),
        }
    }

    /// List the sender names approved for this account.
    ///
    /// An empty list is a valid result (no senders registered yet).
    pub async fn senders(&self) -> Result<Vec<String>, SmsRuError> {
        let response = self.call(SENDERS_PATH, Vec::new(), 0).await?;
        Ok(response
            .parts
            .iter()
            .map(|part| String::from_utf8_lossy(part).into_owned())
            .collect())
    }

    /// Send a message to the request's recipients in one API call.
    ///
    /// The response carries one part per recipient (an assigned message id,
    /// or a numeric error code for that recipient) plus a trailing balance
    /// figure which this operation ignores. Results come back positionally
    /// aligned with [`SendSms::recipients`].
    pub async fn send(&self, request: &SendSms) -> Result<SendResponse, SmsRuError> {
        let time = request.options().effective_time(now())?;
        let params = transport::encode_send_query(request, time);

        let expected = request.recipients().len() + 1;
        let response = self.call(SEND_PATH, params, expected).await?;
        if response.parts.len() != expected {
            return Err(SmsRuError::PartCountMismatch {
                expected,
                got: response.parts.len(),
                body: lossy(&response.body),
            });
        }

        let results = response.parts[..expected - 1]
            .iter()
            .map(|part| classify_send_part(part))
            .collect();
        Ok(SendResponse { results })
    }

    /// Query the cost of sending the request without sending it.
    ///
    /// The provider reports a total only; the per-recipient breakdown in
    /// [`CostResponse::costs`] is always empty.
    pub async fn cost(&self, request: &SendSms) -> Result<CostResponse, SmsRuError> {
        // The provider rejects far-future schedules even on cost checks,
        // although `time` itself is never sent here.
        request.options().effective_time(now())?;
        let params = transport::encode_cost_query(request);

        let response = self.call(COST_PATH, params, 2).await?;
        let total = parse_decimal_part("cost", &response.parts[0])?;
        Ok(CostResponse {
            total,
            costs: Vec::new(),
        })
    }

    /// Query the delivery state of an already-sent message.
    pub async fn status(&self, sms_id: &SmsId) -> Result<StatusResponse, SmsRuError> {
        let params = transport::encode_status_query(sms_id);
        let response = self.call(STATUS_PATH, params, 1).await?;

        let part = &response.parts[0];
        let code = std::str::from_utf8(part)
            .ok()
            .and_then(|text| text.parse::<i32>().ok())
            .ok_or_else(|| SmsRuError::NumericField {
                field: "status code",
                raw: lossy(part),
            })?;

        Ok(StatusResponse {
            sms_id: sms_id.clone(),
            status_code: StatusCode::new(code),
        })
    }

    /// Perform one API round trip and classify the decoded response.
    ///
    /// Attaches `api_id`, requires HTTP 200, decodes the line-delimited
    /// body, and fails unless the first line carries the OK code and at
    /// least `required_parts` parts follow it.
    async fn call(
        &self,
        path: &str,
        params: Vec<(String, String)>,
        required_parts: usize,
    ) -> Result<PlainResponse, SmsRuError> {
        let url = self.base_url.join(path)?;

        let mut all_params = Vec::with_capacity(params.len() + 1);
        all_params.push((ApiId::FIELD.to_owned(), self.api_id.as_str().to_owned()));
        all_params.extend(params);

        let response = self
            .http
            .get(url.as_str(), all_params)
            .await
            .map_err(SmsRuError::Transport)?;

        if response.status != 200 {
            return Err(SmsRuError::HttpStatus {
                status: response.status,
            });
        }

        let decoded = transport::decode(&response.body);
        if decoded.status_code == UNDECODABLE_STATUS {
            return Err(SmsRuError::UndecodableResponse {
                body: lossy(&response.body),
            });
        }

        let status_code = StatusCode::new(decoded.status_code);
        if !status_code.is_ok() {
            return Err(SmsRuError::Api {
                status_code,
                meaning: status_code.meaning(),
                body: lossy(&response.body),
            });
        }

        if decoded.parts.len() < required_parts {
            return Err(SmsRuError::TooFewParts {
                required: required_parts,
                got: decoded.parts.len(),
                body: lossy(&response.body),
            });
        }

        let parts = decoded.parts.into_iter().map(<[u8]>::to_vec).collect();
        Ok(PlainResponse {
            parts,
            body: response.body,
        })
    }
}

fn classify_send_part(part: &[u8]) -> SmsResult {
    if part.len() <= ERROR_CODE_MAX_LEN {
        let code = std::str::from_utf8(part)
            .ok()
            .and_then(|text| text.parse::<i32>().ok())
            .unwrap_or(0);
        SmsResult {
            sms_id: None,
            status_code: StatusCode::new(code),
        }
    } else {
        SmsResult {
            sms_id: Some(String::from_utf8_lossy(part).into_owned()),
            status_code: StatusCode::OK,
        }
    }
}

fn parse_decimal_part(field: &'static str, part: &[u8]) -> Result<Decimal, SmsRuError> {
    std::str::from_utf8(part)
        .ok()
        .and_then(|text| text.parse::<Decimal>().ok())
        .ok_or_else(|| SmsRuError::NumericField {
            field,
            raw: lossy(part),
        })
}

fn lossy(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

fn now() -> UnixTimestamp {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    UnixTimestamp::new(secs)
}
