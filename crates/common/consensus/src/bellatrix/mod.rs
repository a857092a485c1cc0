pub mod beacon_block;
pub mod beacon_block_body;
pub mod blinded_beacon_block;
pub mod blinded_beacon_block_body;
pub mod execution_payload;
pub mod execution_payload_header;

pub use beacon_block::{BeaconBlock, SignedBeaconBlock};
pub use beacon_block_body::BeaconBlockBody;
pub use blinded_beacon_block::{BlindedBeaconBlock, SignedBlindedBeaconBlock};
pub use blinded_beacon_block_body::BlindedBeaconBlockBody;
pub use execution_payload::ExecutionPayload;
pub use execution_payload_header::ExecutionPayloadHeader;
