use pharos_api_types::content_type::ContentType;
use pharos_consensus::{
    altair, bellatrix, block::SignedBeaconBlock, capella, deneb, fork::ForkName, phase0,
};
use ssz::Decode;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Body does not represent a valid block type")]
    UnknownBlockType,
}

type BlockDecoder = fn(&[u8]) -> Result<SignedBeaconBlock, String>;

/// One trial in the fork-resolution chain: a fork identity plus strict
/// decoders for both wire formats.
pub struct BlockCandidate {
    pub fork: ForkName,
    pub blinded: bool,
    json: BlockDecoder,
    ssz: BlockDecoder,
}

macro_rules! block_decoders {
    ($json_name:ident, $ssz_name:ident, $wire_type:ty, $variant:ident) => {
        fn $json_name(body: &[u8]) -> Result<SignedBeaconBlock, String> {
            serde_json::from_slice::<$wire_type>(body)
                .map(SignedBeaconBlock::$variant)
                .map_err(|err| err.to_string())
        }

        fn $ssz_name(body: &[u8]) -> Result<SignedBeaconBlock, String> {
            <$wire_type>::from_ssz_bytes(body)
                .map(SignedBeaconBlock::$variant)
                .map_err(|err| format!("{err:?}"))
        }
    };
}

block_decoders!(json_phase0, ssz_phase0, phase0::SignedBeaconBlock, Phase0);
block_decoders!(json_altair, ssz_altair, altair::SignedBeaconBlock, Altair);
block_decoders!(json_bellatrix, ssz_bellatrix, bellatrix::SignedBeaconBlock, Bellatrix);
block_decoders!(
    json_blinded_bellatrix,
    ssz_blinded_bellatrix,
    bellatrix::SignedBlindedBeaconBlock,
    BlindedBellatrix
);
block_decoders!(json_capella, ssz_capella, capella::SignedBeaconBlock, Capella);
block_decoders!(
    json_blinded_capella,
    ssz_blinded_capella,
    capella::SignedBlindedBeaconBlock,
    BlindedCapella
);
block_decoders!(json_deneb, ssz_deneb, deneb::SignedBeaconBlockContents, Deneb);
block_decoders!(
    json_blinded_deneb,
    ssz_blinded_deneb,
    deneb::SignedBlindedBeaconBlockContents,
    BlindedDeneb
);

/// Trial order for the publish endpoint: newest fork first, so that a body
/// matching an early fork's field subset is only accepted once every more
/// specific schema has rejected it.
pub const FULL_BLOCK_CANDIDATES: &[BlockCandidate] = &[
    BlockCandidate {
        fork: ForkName::Deneb,
        blinded: false,
        json: json_deneb,
        ssz: ssz_deneb,
    },
    BlockCandidate {
        fork: ForkName::Capella,
        blinded: false,
        json: json_capella,
        ssz: ssz_capella,
    },
    BlockCandidate {
        fork: ForkName::Bellatrix,
        blinded: false,
        json: json_bellatrix,
        ssz: ssz_bellatrix,
    },
    BlockCandidate {
        fork: ForkName::Altair,
        blinded: false,
        json: json_altair,
        ssz: ssz_altair,
    },
    BlockCandidate {
        fork: ForkName::Phase0,
        blinded: false,
        json: json_phase0,
        ssz: ssz_phase0,
    },
];

/// Trial order for the blinded publish endpoint. Blinded shapes exist from
/// Bellatrix on; pre-merge bodies fall through to the full Altair and Phase0
/// schemas.
pub const BLINDED_BLOCK_CANDIDATES: &[BlockCandidate] = &[
    BlockCandidate {
        fork: ForkName::Deneb,
        blinded: true,
        json: json_blinded_deneb,
        ssz: ssz_blinded_deneb,
    },
    BlockCandidate {
        fork: ForkName::Capella,
        blinded: true,
        json: json_blinded_capella,
        ssz: ssz_blinded_capella,
    },
    BlockCandidate {
        fork: ForkName::Bellatrix,
        blinded: true,
        json: json_blinded_bellatrix,
        ssz: ssz_blinded_bellatrix,
    },
    BlockCandidate {
        fork: ForkName::Altair,
        blinded: false,
        json: json_altair,
        ssz: ssz_altair,
    },
    BlockCandidate {
        fork: ForkName::Phase0,
        blinded: false,
        json: json_phase0,
        ssz: ssz_phase0,
    },
];

/// Resolves an untyped body against an ordered candidate list. JSON trials
/// are strict (unknown and missing fields both reject); the first success
/// short-circuits the chain.
pub fn resolve_block(
    body: &[u8],
    content_type: ContentType,
    candidates: &[BlockCandidate],
) -> Result<SignedBeaconBlock, ResolveError> {
    for candidate in candidates {
        let decode = match content_type {
            ContentType::Json => candidate.json,
            ContentType::Ssz => candidate.ssz,
        };
        match decode(body) {
            Ok(block) => {
                debug!(
                    fork = %candidate.fork,
                    blinded = candidate.blinded,
                    "resolved published block"
                );
                return Ok(block);
            }
            Err(reason) => {
                debug!(
                    fork = %candidate.fork,
                    blinded = candidate.blinded,
                    reason,
                    "block body did not match candidate"
                );
            }
        }
    }
    Err(ResolveError::UnknownBlockType)
}
