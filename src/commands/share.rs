use crate::services::trip_codec::{decode_share_code, encode_share_code, TripRequest};

use super::CommandResult;

pub fn trip_share_encode(payload: &TripRequest) -> CommandResult<String> {
    Ok(encode_share_code(payload)?)
}

pub fn trip_share_decode(code: &str) -> CommandResult<TripRequest> {
    Ok(decode_share_code(code)?)
}
