use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::serde_utils::hex_fixed_vec;
use tree_hash_derive::TreeHash;

use crate::{
    bls::BLSSignature,
    polynomial_commitments::{Blob, KZGCommitment, KZGProof},
};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, Default)]
#[serde(deny_unknown_fields)]
pub struct BlobSidecar {
    pub block_root: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    pub block_parent_root: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    #[serde(with = "hex_fixed_vec")]
    pub blob: Blob,
    pub kzg_commitment: KZGCommitment,
    pub kzg_proof: KZGProof,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash, Default)]
#[serde(deny_unknown_fields)]
pub struct SignedBlobSidecar {
    pub message: BlobSidecar,
    pub signature: BLSSignature,
}

/// Root-only counterpart of [`BlobSidecar`]: commits to the blob without
/// carrying its data.
#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Encode, Decode, TreeHash, Default,
)]
#[serde(deny_unknown_fields)]
pub struct BlindedBlobSidecar {
    pub block_root: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    pub block_parent_root: B256,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    pub blob_root: B256,
    pub kzg_commitment: KZGCommitment,
    pub kzg_proof: KZGProof,
}

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Encode, Decode, TreeHash, Default,
)]
#[serde(deny_unknown_fields)]
pub struct SignedBlindedBlobSidecar {
    pub message: BlindedBlobSidecar,
    pub signature: BLSSignature,
}
