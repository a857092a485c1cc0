use alloy_primitives::FixedBytes;
use ssz_types::{FixedVector, typenum};

pub const BYTES_PER_COMMITMENT: usize = 48;
pub const BYTES_PER_PROOF: usize = 48;
pub const BYTES_PER_BLOB: usize = 131072;

pub type KZGCommitment = FixedBytes<BYTES_PER_COMMITMENT>;
pub type KZGProof = FixedBytes<BYTES_PER_PROOF>;

/// Raw blob data committed to by a [`KZGCommitment`]. Hex-encoded on the wire
/// via `ssz_types::serde_utils::hex_fixed_vec` at the field that carries it.
pub type Blob = FixedVector<u8, typenum::U131072>;
