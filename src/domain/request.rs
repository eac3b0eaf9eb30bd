use std::net::IpAddr;

use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, RawPhoneNumber, SenderId, TtlMinutes, UnixTimestamp};

/// The provider rejects requests with more than 100 recipients (code 213).
pub const SEND_SMS_MAX_RECIPIENTS: usize = 100;

/// Scheduled sends must lie within this window past "now".
pub const SEND_TIME_WINDOW_SECS: u64 = 30 * 86_400;

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub from: Option<SenderId>,
    pub ip: Option<IpAddr>,
    pub time: Option<UnixTimestamp>,
    pub ttl: Option<TtlMinutes>,
    pub daytime: bool,
    pub translit: bool,
}

impl SendOptions {
    /// Resolve the scheduled-send time against `now`.
    ///
    /// A time more than 30 days ahead is an error. A time at or before `now`
    /// collapses to `None` (send immediately) rather than failing. The
    /// options value itself is never mutated.
    pub fn effective_time(
        &self,
        now: UnixTimestamp,
    ) -> Result<Option<UnixTimestamp>, ValidationError> {
        let Some(time) = self.time else {
            return Ok(None);
        };
        let deadline = now.value() + SEND_TIME_WINDOW_SECS;
        if time.value() > deadline {
            return Err(ValidationError::SendTimeTooFarAhead {
                scheduled: time.value(),
                deadline,
            });
        }
        if time.value() <= now.value() {
            return Ok(None);
        }
        Ok(Some(time))
    }
}

#[derive(Debug, Clone)]
/// A send (or cost) request: one message to one or more recipients.
pub struct SendSms {
    recipients: Vec<RawPhoneNumber>,
    msg: MessageText,
    options: SendOptions,
}

impl SendSms {
    /// Build a request for a single recipient.
    pub fn to_one(recipient: RawPhoneNumber, msg: MessageText, options: SendOptions) -> Self {
        Self {
            recipients: vec![recipient],
            msg,
            options,
        }
    }

    /// Build a request for up to [`SEND_SMS_MAX_RECIPIENTS`] recipients.
    pub fn to_many(
        recipients: Vec<RawPhoneNumber>,
        msg: MessageText,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        if recipients.len() > SEND_SMS_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: SEND_SMS_MAX_RECIPIENTS,
                actual: recipients.len(),
            });
        }
        Ok(Self {
            recipients,
            msg,
            options,
        })
    }

    pub fn recipients(&self) -> &[RawPhoneNumber] {
        &self.recipients
    }

    pub fn msg(&self) -> &MessageText {
        &self.msg
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> RawPhoneNumber {
        RawPhoneNumber::new("+79251234567").unwrap()
    }

    fn msg() -> MessageText {
        MessageText::new("hello").unwrap()
    }

    #[test]
    fn to_many_rejects_empty_and_oversized_lists() {
        let err = SendSms::to_many(Vec::new(), msg(), SendOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: RawPhoneNumber::FIELD
            }
        ));

        let recipients = vec![phone(); SEND_SMS_MAX_RECIPIENTS + 1];
        let err = SendSms::to_many(recipients, msg(), SendOptions::default()).unwrap_err();
        assert!(matches!(err, ValidationError::TooManyRecipients { .. }));
    }

    #[test]
    fn to_one_wraps_recipient_into_list_form() {
        let req = SendSms::to_one(phone(), msg(), SendOptions::default());
        assert_eq!(req.recipients(), &[phone()]);
    }

    #[test]
    fn effective_time_passes_through_near_future() {
        let options = SendOptions {
            time: Some(UnixTimestamp::new(1_000_100)),
            ..Default::default()
        };
        let effective = options.effective_time(UnixTimestamp::new(1_000_000)).unwrap();
        assert_eq!(effective, Some(UnixTimestamp::new(1_000_100)));
        // The request options keep the original value.
        assert_eq!(options.time, Some(UnixTimestamp::new(1_000_100)));
    }

    #[test]
    fn effective_time_collapses_past_and_now_to_unset() {
        let now = UnixTimestamp::new(1_000_000);
        for scheduled in [999_000, 1_000_000] {
            let options = SendOptions {
                time: Some(UnixTimestamp::new(scheduled)),
                ..Default::default()
            };
            assert_eq!(options.effective_time(now).unwrap(), None);
        }
    }

    #[test]
    fn effective_time_rejects_more_than_thirty_days_ahead() {
        let now = UnixTimestamp::new(1_000_000);
        let deadline = 1_000_000 + SEND_TIME_WINDOW_SECS;

        let at_deadline = SendOptions {
            time: Some(UnixTimestamp::new(deadline)),
            ..Default::default()
        };
        assert!(at_deadline.effective_time(now).is_ok());

        let past_deadline = SendOptions {
            time: Some(UnixTimestamp::new(deadline + 1)),
            ..Default::default()
        };
        let err = past_deadline.effective_time(now).unwrap_err();
        assert!(matches!(err, ValidationError::SendTimeTooFarAhead { .. }));
    }

    #[test]
    fn effective_time_is_none_when_unset() {
        let options = SendOptions::default();
        assert_eq!(
            options.effective_time(UnixTimestamp::new(1_000_000)).unwrap(),
            None
        );
    }
}
