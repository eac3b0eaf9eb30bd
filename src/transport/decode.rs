/// Status code reported for a payload that could not be decoded at all
/// (empty body or a non-numeric first line). Distinct from every code the
/// provider actually issues.
pub const UNDECODABLE_STATUS: i32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A plain-text API payload split into its status line and parts.
///
/// Constructed fresh per response; parts borrow from the response body.
pub struct DecodedPayload<'a> {
    pub status_code: i32,
    pub parts: Vec<&'a [u8]>,
}

/// Split a plain-text API body into a status code and its payload parts.
///
/// Lines are separated by `\n`, with no `\r` trimming and no deduplication.
/// A single trailing `\n` terminates the last line without producing an
/// empty part; interior empty lines are preserved. The first line parses as
/// a decimal integer, with any undecodable content (including an empty body)
/// yielding [`UNDECODABLE_STATUS`]. Part contents are not interpreted here.
pub fn decode(body: &[u8]) -> DecodedPayload<'_> {
    if body.is_empty() {
        return DecodedPayload {
            status_code: UNDECODABLE_STATUS,
            parts: Vec::new(),
        };
    }

    let body = body.strip_suffix(b"\n").unwrap_or(body);
    let mut lines = body.split(|&byte| byte == b'\n');

    let status_line = lines.next().unwrap_or_default();
    let status_code = std::str::from_utf8(status_line)
        .ok()
        .and_then(|line| line.parse::<i32>().ok())
        .unwrap_or(UNDECODABLE_STATUS);

    DecodedPayload {
        status_code,
        parts: lines.collect(),
    }
}
