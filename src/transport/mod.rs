//! Transport layer: wire-format details of the plain-text API (query
//! encoding and line-delimited response decoding).

mod decode;
mod query;

pub use decode::{DecodedPayload, UNDECODABLE_STATUS, decode};
pub use query::{encode_cost_query, encode_send_query, encode_status_query};
