//! Shareable selection reference: the resolved 4-tuple as four key/value
//! pairs (`curr`, `io`, `denom`, `emis`) joined `k=v&k=v`, suitable for
//! embedding in a URL.
//!
//! Decoding is lenient by contract: unknown keys and malformed pairs are
//! ignored, and stale values are re-defaulted by the next resolution pass
//! instead of failing.

use rail_model::SelectionState;

const KEY_CURRENCY: &str = "curr";
const KEY_IO_MODULE: &str = "io";
const KEY_DENOMINATION: &str = "denom";
const KEY_EMISSION: &str = "emis";

/// Serialize a selection to its shareable reference. Unset fields are
/// omitted; field order is fixed.
pub fn encode_share_ref(state: &SelectionState) -> String {
    let mut pairs = Vec::with_capacity(4);
    for (key, value) in [
        (KEY_CURRENCY, &state.currency),
        (KEY_IO_MODULE, &state.io_module),
        (KEY_DENOMINATION, &state.denomination),
        (KEY_EMISSION, &state.emission),
    ] {
        if let Some(value) = value {
            pairs.push(format!("{key}={}", percent_encode(value)));
        }
    }
    pairs.join("&")
}

/// Parse a shareable reference back into a (possibly partial) selection.
/// Never fails; anything unusable is simply dropped.
pub fn decode_share_ref(reference: &str) -> SelectionState {
    let mut state = SelectionState::default();
    for pair in reference.trim().split('&') {
        let Some((key, raw)) = pair.split_once('=') else {
            continue;
        };
        let value = percent_decode(raw);
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            KEY_CURRENCY => state.currency = Some(value),
            KEY_IO_MODULE => state.io_module = Some(value),
            KEY_DENOMINATION => state.denomination = Some(value),
            KEY_EMISSION => state.emission = Some(value),
            _ => {}
        }
    }
    state
}

fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|digit| digit as u8)
}

fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%'
            && index + 2 < bytes.len()
            && let (Some(high), Some(low)) = (hex_digit(bytes[index + 1]), hex_digit(bytes[index + 2]))
        {
            decoded.push(high << 4 | low);
            index += 3;
            continue;
        }
        decoded.push(bytes[index]);
        index += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_in_fixed_key_order() {
        let state = SelectionState {
            currency: Some("EUR".to_string()),
            io_module: Some("A1".to_string()),
            denomination: Some("50".to_string()),
            emission: Some("2019".to_string()),
        };
        assert_eq!(encode_share_ref(&state), "curr=EUR&io=A1&denom=50&emis=2019");
    }

    #[test]
    fn round_trips_values_needing_escapes() {
        let state = SelectionState {
            currency: Some("EUR".to_string()),
            io_module: Some("A 1&B=2".to_string()),
            denomination: Some("50.00".to_string()),
            emission: Some("2019/II".to_string()),
        };
        let reference = encode_share_ref(&state);
        assert_eq!(decode_share_ref(&reference), state);
    }

    #[test]
    fn unset_fields_are_omitted() {
        let state = SelectionState {
            currency: Some("EUR".to_string()),
            ..SelectionState::default()
        };
        assert_eq!(encode_share_ref(&state), "curr=EUR");
    }

    #[test]
    fn decode_ignores_garbage() {
        let state = decode_share_ref("curr=EUR&bogus&what=ever&io=&denom=50");
        assert_eq!(state.currency.as_deref(), Some("EUR"));
        assert!(state.io_module.is_none());
        assert_eq!(state.denomination.as_deref(), Some("50"));
        assert!(state.emission.is_none());
    }

    #[test]
    fn decode_tolerates_unescaped_and_truncated_percent_sequences() {
        let state = decode_share_ref("curr=100%&io=A%2");
        assert_eq!(state.currency.as_deref(), Some("100%"));
        assert_eq!(state.io_module.as_deref(), Some("A%2"));
    }

    #[test]
    fn empty_reference_decodes_to_unset_state() {
        assert!(decode_share_ref("").is_unset());
        assert!(decode_share_ref("   ").is_unset());
    }
}
