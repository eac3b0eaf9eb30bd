use crate::domain::{
    MessageText, RawPhoneNumber, SendSms, SenderId, SmsId, TtlMinutes, UnixTimestamp,
};

/// Encode `sms/send` query parameters.
///
/// `time` is the already-resolved scheduled-send time (see
/// `SendOptions::effective_time`); the raw option value is never sent.
pub fn encode_send_query(
    request: &SendSms,
    time: Option<UnixTimestamp>,
) -> Vec<(String, String)> {
    let options = request.options();
    let mut params = Vec::<(String, String)>::new();

    push_recipients_and_msg(&mut params, request);
    push_from(&mut params, options.from.as_ref());
    if let Some(ip) = options.ip {
        params.push(("ip".to_owned(), ip.to_string()));
    }
    if let Some(time) = time {
        params.push((UnixTimestamp::FIELD.to_owned(), time.value().to_string()));
    }
    if let Some(ttl) = options.ttl {
        params.push((TtlMinutes::FIELD.to_owned(), ttl.value().to_string()));
    }
    if options.daytime {
        params.push(("daytime".to_owned(), "1".to_owned()));
    }
    if options.translit {
        params.push(("translit".to_owned(), "1".to_owned()));
    }

    params
}

/// Encode `sms/cost` query parameters.
///
/// Cost estimation ignores scheduling, TTL, and the daytime flag.
pub fn encode_cost_query(request: &SendSms) -> Vec<(String, String)> {
    let options = request.options();
    let mut params = Vec::<(String, String)>::new();

    push_recipients_and_msg(&mut params, request);
    push_from(&mut params, options.from.as_ref());
    if options.translit {
        params.push(("translit".to_owned(), "1".to_owned()));
    }

    params
}

/// Encode `sms/status` query parameters.
pub fn encode_status_query(sms_id: &SmsId) -> Vec<(String, String)> {
    vec![(SmsId::FIELD.to_owned(), sms_id.as_str().to_owned())]
}

fn push_recipients_and_msg(params: &mut Vec<(String, String)>, request: &SendSms) {
    let to = request
        .recipients()
        .iter()
        .map(RawPhoneNumber::raw)
        .collect::<Vec<_>>()
        .join(",");
    params.push((RawPhoneNumber::FIELD.to_owned(), to));
    params.push((
        MessageText::FIELD.to_owned(),
        request.msg().as_str().to_owned(),
    ));
}

fn push_from(params: &mut Vec<(String, String)>, from: Option<&SenderId>) {
    if let Some(from) = from {
        params.push((SenderId::FIELD.to_owned(), from.as_str().to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;

    use crate::domain::SendOptions;

    use super::*;

    #[test]
    fn encode_send_query_with_all_options() {
        let p1 = RawPhoneNumber::new("+79251234567").unwrap();
        let p2 = RawPhoneNumber::new("+74993221627").unwrap();
        let msg = MessageText::new("hello").unwrap();

        let options = SendOptions {
            from: Some(SenderId::new("brand").unwrap()),
            ip: Some(IpAddr::from([127, 0, 0, 1])),
            ttl: Some(TtlMinutes::new(60).unwrap()),
            daytime: true,
            translit: true,
            ..Default::default()
        };

        let req = SendSms::to_many(vec![p1, p2], msg, options).unwrap();
        let params = encode_send_query(&req, Some(UnixTimestamp::new(1_700_000_000)));

        assert_eq!(
            params,
            vec![
                ("to".to_owned(), "+79251234567,+74993221627".to_owned()),
                ("msg".to_owned(), "hello".to_owned()),
                ("from".to_owned(), "brand".to_owned()),
                ("ip".to_owned(), "127.0.0.1".to_owned()),
                ("time".to_owned(), "1700000000".to_owned()),
                ("ttl".to_owned(), "60".to_owned()),
                ("daytime".to_owned(), "1".to_owned()),
                ("translit".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_send_query_omits_unset_options() {
        let req = SendSms::to_one(
            RawPhoneNumber::new("+79251234567").unwrap(),
            MessageText::new("hello").unwrap(),
            SendOptions::default(),
        );
        let params = encode_send_query(&req, None);

        assert_eq!(
            params,
            vec![
                ("to".to_owned(), "+79251234567".to_owned()),
                ("msg".to_owned(), "hello".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_send_query_uses_resolved_time_not_raw_option() {
        let options = SendOptions {
            time: Some(UnixTimestamp::new(123)),
            ..Default::default()
        };
        let req = SendSms::to_one(
            RawPhoneNumber::new("+79251234567").unwrap(),
            MessageText::new("hello").unwrap(),
            options,
        );

        // A past scheduled time resolves to None, so no `time` param goes out.
        let params = encode_send_query(&req, None);
        assert!(!params.iter().any(|(key, _)| key == "time"));
    }

    #[test]
    fn encode_cost_query_keeps_only_cost_relevant_params() {
        let options = SendOptions {
            from: Some(SenderId::new("brand").unwrap()),
            ip: Some(IpAddr::from([127, 0, 0, 1])),
            time: Some(UnixTimestamp::new(1_700_000_000)),
            ttl: Some(TtlMinutes::new(60).unwrap()),
            daytime: true,
            translit: true,
        };
        let req = SendSms::to_one(
            RawPhoneNumber::new("+79251234567").unwrap(),
            MessageText::new("hello").unwrap(),
            options,
        );
        let params = encode_cost_query(&req);

        assert_eq!(
            params,
            vec![
                ("to".to_owned(), "+79251234567".to_owned()),
                ("msg".to_owned(), "hello".to_owned()),
                ("from".to_owned(), "brand".to_owned()),
                ("translit".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_status_query_carries_sms_id() {
        let sms_id = SmsId::new("202041-1000004").unwrap();
        assert_eq!(
            encode_status_query(&sms_id),
            vec![("sms_id".to_owned(), "202041-1000004".to_owned())]
        );
    }
}
