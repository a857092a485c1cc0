use alloy_primitives::{FixedBytes, U256, hex};
use thiserror::Error;

/// Failure modes of the field codec. Every conversion either succeeds or
/// reports exactly one of these; no partial results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid decimal string: {0}")]
    InvalidDecimal(String),
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("decimal value does not fit in 256 bits")]
    Uint256OutOfRange,
}

/// Decimal string to unsigned integer, e.g. a slot path segment.
pub fn parse_uint(value: &str) -> Result<u64, DecodeError> {
    value
        .parse::<u64>()
        .map_err(|err| DecodeError::InvalidDecimal(err.to_string()))
}

/// `0x`-prefixed hex string to a fixed-size byte array. The prefix is
/// optional, the length is not.
pub fn parse_hex_bytes<const N: usize>(value: &str) -> Result<FixedBytes<N>, DecodeError> {
    let bytes = hex::decode(value).map_err(|err| DecodeError::InvalidHex(err.to_string()))?;
    if bytes.len() != N {
        return Err(DecodeError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    Ok(FixedBytes::from_slice(&bytes))
}

/// Decimal string to a 256-bit integer, rejecting anything above 2^256−1.
pub fn parse_uint256(value: &str) -> Result<U256, DecodeError> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(DecodeError::InvalidDecimal(value.to_string()));
    }
    U256::from_str_radix(value, 10).map_err(|_| DecodeError::Uint256OutOfRange)
}

/// 256-bit integer to its SSZ form: 32 bytes, least significant first,
/// zero padded.
pub fn uint256_to_ssz_bytes(value: &U256) -> [u8; 32] {
    value.to_le_bytes()
}

/// Inverse of [`uint256_to_ssz_bytes`]; guards against malformed input from
/// the binary side.
pub fn uint256_from_ssz_bytes(bytes: &[u8]) -> Result<U256, DecodeError> {
    if bytes.len() != 32 {
        return Err(DecodeError::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        });
    }
    Ok(U256::from_le_slice(bytes))
}

pub fn uint256_to_decimal(value: &U256) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use rstest::rstest;

    use super::{
        DecodeError, parse_hex_bytes, parse_uint, parse_uint256, uint256_from_ssz_bytes,
        uint256_to_decimal, uint256_to_ssz_bytes,
    };

    const UINT256_MAX: &str =
        "115792089237316195423570985008687907853269984665640564039457584007913129639935";

    #[rstest]
    #[case("0", 0)]
    #[case("1", 1)]
    #[case("18446744073709551615", u64::MAX)]
    fn parse_uint_accepts_decimal(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_uint(input), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("-1")]
    #[case("18446744073709551616")]
    fn parse_uint_rejects_non_decimal(#[case] input: &str) {
        assert!(matches!(parse_uint(input), Err(DecodeError::InvalidDecimal(_))));
    }

    #[test]
    fn parse_hex_bytes_checks_length() {
        let root = parse_hex_bytes::<32>(&format!("0x{}", "11".repeat(32)))
            .expect("32-byte hex decodes");
        assert_eq!(root[0], 0x11);

        assert_eq!(
            parse_hex_bytes::<32>("0x1122"),
            Err(DecodeError::InvalidLength {
                expected: 32,
                actual: 2
            })
        );
        assert!(matches!(
            parse_hex_bytes::<32>("0xzz"),
            Err(DecodeError::InvalidHex(_))
        ));
    }

    #[test]
    fn uint256_round_trips_at_boundaries() {
        for value in [U256::ZERO, U256::from(1), U256::MAX] {
            let decimal = uint256_to_decimal(&value);
            assert_eq!(parse_uint256(&decimal), Ok(value));

            let ssz = uint256_to_ssz_bytes(&value);
            assert_eq!(uint256_from_ssz_bytes(&ssz), Ok(value));
        }
        assert_eq!(uint256_to_decimal(&U256::MAX), UINT256_MAX);
    }

    #[test]
    fn uint256_ssz_bytes_are_little_endian_padded() {
        let ssz = uint256_to_ssz_bytes(&U256::from(0x0102u64));
        assert_eq!(ssz[0], 0x02);
        assert_eq!(ssz[1], 0x01);
        assert!(ssz[2..].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn parse_uint256_rejects_overflow_and_garbage() {
        let over_max = format!("{UINT256_MAX}0");
        assert_eq!(parse_uint256(&over_max), Err(DecodeError::Uint256OutOfRange));
        assert!(matches!(
            parse_uint256("0x10"),
            Err(DecodeError::InvalidDecimal(_))
        ));
        assert!(matches!(parse_uint256(""), Err(DecodeError::InvalidDecimal(_))));
    }

    #[test]
    fn uint256_from_ssz_bytes_rejects_wrong_length() {
        assert_eq!(
            uint256_from_ssz_bytes(&[0u8; 31]),
            Err(DecodeError::InvalidLength {
                expected: 32,
                actual: 31
            })
        );
    }
}
