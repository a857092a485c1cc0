use alloy_primitives::B256;
use serde::Serialize;
use ssz::Encode;

use crate::{altair, bellatrix, capella, deneb, fork::ForkName, phase0};

/// Canonical representation of an unsigned block, one arm per fork and
/// blinding state. Deneb arms bundle the block with its blob sidecars.
///
/// Serialization is untagged: each arm serializes as its fork's wire shape,
/// so the enum can sit directly in a versioned response envelope.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(untagged)]
pub enum BeaconBlock {
    Phase0(phase0::BeaconBlock),
    Altair(altair::BeaconBlock),
    Bellatrix(bellatrix::BeaconBlock),
    BlindedBellatrix(bellatrix::BlindedBeaconBlock),
    Capella(capella::BeaconBlock),
    BlindedCapella(capella::BlindedBeaconBlock),
    Deneb(deneb::BeaconBlockContents),
    BlindedDeneb(deneb::BlindedBeaconBlockContents),
}

impl BeaconBlock {
    pub fn fork_name(&self) -> ForkName {
        match self {
            BeaconBlock::Phase0(_) => ForkName::Phase0,
            BeaconBlock::Altair(_) => ForkName::Altair,
            BeaconBlock::Bellatrix(_) | BeaconBlock::BlindedBellatrix(_) => ForkName::Bellatrix,
            BeaconBlock::Capella(_) | BeaconBlock::BlindedCapella(_) => ForkName::Capella,
            BeaconBlock::Deneb(_) | BeaconBlock::BlindedDeneb(_) => ForkName::Deneb,
        }
    }

    /// Blinded arms carry only the execution payload header, never the
    /// transaction list. The payload's market value is unknowable from a
    /// blinded block alone.
    pub fn is_blinded(&self) -> bool {
        matches!(
            self,
            BeaconBlock::BlindedBellatrix(_)
                | BeaconBlock::BlindedCapella(_)
                | BeaconBlock::BlindedDeneb(_)
        )
    }

    pub fn slot(&self) -> u64 {
        match self {
            BeaconBlock::Phase0(block) => block.slot,
            BeaconBlock::Altair(block) => block.slot,
            BeaconBlock::Bellatrix(block) => block.slot,
            BeaconBlock::BlindedBellatrix(block) => block.slot,
            BeaconBlock::Capella(block) => block.slot,
            BeaconBlock::BlindedCapella(block) => block.slot,
            BeaconBlock::Deneb(contents) => contents.block.slot,
            BeaconBlock::BlindedDeneb(contents) => contents.blinded_block.slot,
        }
    }

    pub fn proposer_index(&self) -> u64 {
        match self {
            BeaconBlock::Phase0(block) => block.proposer_index,
            BeaconBlock::Altair(block) => block.proposer_index,
            BeaconBlock::Bellatrix(block) => block.proposer_index,
            BeaconBlock::BlindedBellatrix(block) => block.proposer_index,
            BeaconBlock::Capella(block) => block.proposer_index,
            BeaconBlock::BlindedCapella(block) => block.proposer_index,
            BeaconBlock::Deneb(contents) => contents.block.proposer_index,
            BeaconBlock::BlindedDeneb(contents) => contents.blinded_block.proposer_index,
        }
    }

    pub fn parent_root(&self) -> B256 {
        match self {
            BeaconBlock::Phase0(block) => block.parent_root,
            BeaconBlock::Altair(block) => block.parent_root,
            BeaconBlock::Bellatrix(block) => block.parent_root,
            BeaconBlock::BlindedBellatrix(block) => block.parent_root,
            BeaconBlock::Capella(block) => block.parent_root,
            BeaconBlock::BlindedCapella(block) => block.parent_root,
            BeaconBlock::Deneb(contents) => contents.block.parent_root,
            BeaconBlock::BlindedDeneb(contents) => contents.blinded_block.parent_root,
        }
    }

    pub fn state_root(&self) -> B256 {
        match self {
            BeaconBlock::Phase0(block) => block.state_root,
            BeaconBlock::Altair(block) => block.state_root,
            BeaconBlock::Bellatrix(block) => block.state_root,
            BeaconBlock::BlindedBellatrix(block) => block.state_root,
            BeaconBlock::Capella(block) => block.state_root,
            BeaconBlock::BlindedCapella(block) => block.state_root,
            BeaconBlock::Deneb(contents) => contents.block.state_root,
            BeaconBlock::BlindedDeneb(contents) => contents.blinded_block.state_root,
        }
    }

    pub fn as_ssz_bytes(&self) -> Vec<u8> {
        match self {
            BeaconBlock::Phase0(block) => block.as_ssz_bytes(),
            BeaconBlock::Altair(block) => block.as_ssz_bytes(),
            BeaconBlock::Bellatrix(block) => block.as_ssz_bytes(),
            BeaconBlock::BlindedBellatrix(block) => block.as_ssz_bytes(),
            BeaconBlock::Capella(block) => block.as_ssz_bytes(),
            BeaconBlock::BlindedCapella(block) => block.as_ssz_bytes(),
            BeaconBlock::Deneb(contents) => contents.as_ssz_bytes(),
            BeaconBlock::BlindedDeneb(contents) => contents.as_ssz_bytes(),
        }
    }
}

/// Canonical representation of a signed block, mirroring [`BeaconBlock`].
/// This is what the publish path resolves into and hands to the proposal
/// collaborator.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(untagged)]
pub enum SignedBeaconBlock {
    Phase0(phase0::SignedBeaconBlock),
    Altair(altair::SignedBeaconBlock),
    Bellatrix(bellatrix::SignedBeaconBlock),
    BlindedBellatrix(bellatrix::SignedBlindedBeaconBlock),
    Capella(capella::SignedBeaconBlock),
    BlindedCapella(capella::SignedBlindedBeaconBlock),
    Deneb(deneb::SignedBeaconBlockContents),
    BlindedDeneb(deneb::SignedBlindedBeaconBlockContents),
}

impl SignedBeaconBlock {
    pub fn fork_name(&self) -> ForkName {
        match self {
            SignedBeaconBlock::Phase0(_) => ForkName::Phase0,
            SignedBeaconBlock::Altair(_) => ForkName::Altair,
            SignedBeaconBlock::Bellatrix(_) | SignedBeaconBlock::BlindedBellatrix(_) => {
                ForkName::Bellatrix
            }
            SignedBeaconBlock::Capella(_) | SignedBeaconBlock::BlindedCapella(_) => {
                ForkName::Capella
            }
            SignedBeaconBlock::Deneb(_) | SignedBeaconBlock::BlindedDeneb(_) => ForkName::Deneb,
        }
    }

    pub fn is_blinded(&self) -> bool {
        matches!(
            self,
            SignedBeaconBlock::BlindedBellatrix(_)
                | SignedBeaconBlock::BlindedCapella(_)
                | SignedBeaconBlock::BlindedDeneb(_)
        )
    }

    pub fn slot(&self) -> u64 {
        match self {
            SignedBeaconBlock::Phase0(block) => block.message.slot,
            SignedBeaconBlock::Altair(block) => block.message.slot,
            SignedBeaconBlock::Bellatrix(block) => block.message.slot,
            SignedBeaconBlock::BlindedBellatrix(block) => block.message.slot,
            SignedBeaconBlock::Capella(block) => block.message.slot,
            SignedBeaconBlock::BlindedCapella(block) => block.message.slot,
            SignedBeaconBlock::Deneb(contents) => contents.signed_block.message.slot,
            SignedBeaconBlock::BlindedDeneb(contents) => {
                contents.signed_blinded_block.message.slot
            }
        }
    }

    pub fn proposer_index(&self) -> u64 {
        match self {
            SignedBeaconBlock::Phase0(block) => block.message.proposer_index,
            SignedBeaconBlock::Altair(block) => block.message.proposer_index,
            SignedBeaconBlock::Bellatrix(block) => block.message.proposer_index,
            SignedBeaconBlock::BlindedBellatrix(block) => block.message.proposer_index,
            SignedBeaconBlock::Capella(block) => block.message.proposer_index,
            SignedBeaconBlock::BlindedCapella(block) => block.message.proposer_index,
            SignedBeaconBlock::Deneb(contents) => contents.signed_block.message.proposer_index,
            SignedBeaconBlock::BlindedDeneb(contents) => {
                contents.signed_blinded_block.message.proposer_index
            }
        }
    }

    pub fn parent_root(&self) -> B256 {
        match self {
            SignedBeaconBlock::Phase0(block) => block.message.parent_root,
            SignedBeaconBlock::Altair(block) => block.message.parent_root,
            SignedBeaconBlock::Bellatrix(block) => block.message.parent_root,
            SignedBeaconBlock::BlindedBellatrix(block) => block.message.parent_root,
            SignedBeaconBlock::Capella(block) => block.message.parent_root,
            SignedBeaconBlock::BlindedCapella(block) => block.message.parent_root,
            SignedBeaconBlock::Deneb(contents) => contents.signed_block.message.parent_root,
            SignedBeaconBlock::BlindedDeneb(contents) => {
                contents.signed_blinded_block.message.parent_root
            }
        }
    }

    pub fn state_root(&self) -> B256 {
        match self {
            SignedBeaconBlock::Phase0(block) => block.message.state_root,
            SignedBeaconBlock::Altair(block) => block.message.state_root,
            SignedBeaconBlock::Bellatrix(block) => block.message.state_root,
            SignedBeaconBlock::BlindedBellatrix(block) => block.message.state_root,
            SignedBeaconBlock::Capella(block) => block.message.state_root,
            SignedBeaconBlock::BlindedCapella(block) => block.message.state_root,
            SignedBeaconBlock::Deneb(contents) => contents.signed_block.message.state_root,
            SignedBeaconBlock::BlindedDeneb(contents) => {
                contents.signed_blinded_block.message.state_root
            }
        }
    }

    pub fn as_ssz_bytes(&self) -> Vec<u8> {
        match self {
            SignedBeaconBlock::Phase0(block) => block.as_ssz_bytes(),
            SignedBeaconBlock::Altair(block) => block.as_ssz_bytes(),
            SignedBeaconBlock::Bellatrix(block) => block.as_ssz_bytes(),
            SignedBeaconBlock::BlindedBellatrix(block) => block.as_ssz_bytes(),
            SignedBeaconBlock::Capella(block) => block.as_ssz_bytes(),
            SignedBeaconBlock::BlindedCapella(block) => block.as_ssz_bytes(),
            SignedBeaconBlock::Deneb(contents) => contents.as_ssz_bytes(),
            SignedBeaconBlock::BlindedDeneb(contents) => contents.as_ssz_bytes(),
        }
    }
}
