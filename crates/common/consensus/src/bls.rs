use alloy_primitives::FixedBytes;

pub const BYTES_PER_SIGNATURE: usize = 96;
pub const BYTES_PER_PUBLIC_KEY: usize = 48;

pub type BLSSignature = FixedBytes<BYTES_PER_SIGNATURE>;
pub type PublicKey = FixedBytes<BYTES_PER_PUBLIC_KEY>;

/// Compressed serialization of the G2 identity. Substituted for the randao
/// reveal when `skip_randao_verification` is requested.
pub fn point_at_infinity() -> BLSSignature {
    let mut bytes = [0u8; BYTES_PER_SIGNATURE];
    bytes[0] = 0xc0;
    BLSSignature::from(bytes)
}

pub fn is_point_at_infinity(signature: &BLSSignature) -> bool {
    *signature == point_at_infinity()
}
