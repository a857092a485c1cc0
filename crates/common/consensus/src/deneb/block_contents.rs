use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{VariableList, typenum};

use super::{
    beacon_block::{BeaconBlock, SignedBeaconBlock},
    blinded_beacon_block::{BlindedBeaconBlock, SignedBlindedBeaconBlock},
    blob_sidecar::{BlindedBlobSidecar, BlobSidecar, SignedBlindedBlobSidecar, SignedBlobSidecar},
};

/// A produced Deneb block travels with the sidecars for every commitment in
/// its body; the pairs below keep block and sidecar list together through the
/// API layer.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, Default)]
#[serde(deny_unknown_fields)]
pub struct BeaconBlockContents {
    pub block: BeaconBlock,
    pub blob_sidecars: VariableList<BlobSidecar, typenum::U6>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, Default)]
#[serde(deny_unknown_fields)]
pub struct SignedBeaconBlockContents {
    pub signed_block: SignedBeaconBlock,
    pub signed_blob_sidecars: VariableList<SignedBlobSidecar, typenum::U6>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, Default)]
#[serde(deny_unknown_fields)]
pub struct BlindedBeaconBlockContents {
    pub blinded_block: BlindedBeaconBlock,
    pub blinded_blob_sidecars: VariableList<BlindedBlobSidecar, typenum::U6>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, Default)]
#[serde(deny_unknown_fields)]
pub struct SignedBlindedBeaconBlockContents {
    pub signed_blinded_block: SignedBlindedBeaconBlock,
    pub signed_blinded_blob_sidecars: VariableList<SignedBlindedBlobSidecar, typenum::U6>,
}
