use alloy_primitives::B256;
use pharos_consensus::{block::BeaconBlock, bls::BLSSignature};

/// Parameters handed to the block builder for one produce request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRequest {
    pub slot: u64,
    pub randao_reveal: BLSSignature,
    pub graffiti: B256,
    pub skip_randao_verification: bool,
}

/// What the block builder returns: a fork-tagged block plus the metadata the
/// response envelope carries through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ProducedBlock {
    pub block: BeaconBlock,
    pub is_blinded: bool,
    /// Market value of the execution payload in wei. Zero when the payload is
    /// blinded (the value is unknowable from the header alone) or when the
    /// builder genuinely observed zero.
    pub payload_value: u64,
}
