use pharos_consensus::{block::BeaconBlock, fork::ForkName};
use serde::Serialize;

pub const ETH_CONSENSUS_VERSION_HEADER: &str = "Eth-Consensus-Version";
pub const EXECUTION_PAYLOAD_BLINDED_HEADER: &str = "Eth-Execution-Payload-Blinded";
pub const EXECUTION_PAYLOAD_VALUE_HEADER: &str = "Eth-Execution-Payload-Value";

/// Envelope for a produced block.
///
/// # Example
/// {
///     "version": "capella",
///     "execution_payload_blinded": true,
///     "execution_payload_value": "2000",
///     "data": json!(block)
/// }
#[derive(Debug, Serialize)]
pub struct ProduceBlockResponse {
    pub version: ForkName,
    pub execution_payload_blinded: bool,
    pub execution_payload_value: String,
    pub data: BeaconBlock,
}

impl ProduceBlockResponse {
    /// Version and blinding flag come from the block variant itself; the
    /// payload value is whatever the block builder reported, never
    /// recomputed here.
    pub fn new(block: BeaconBlock, payload_value: u64) -> Self {
        Self {
            version: block.fork_name(),
            execution_payload_blinded: block.is_blinded(),
            execution_payload_value: payload_value.to_string(),
            data: block,
        }
    }
}

#[cfg(test)]
mod tests {
    use pharos_consensus::{block::BeaconBlock, capella};

    use super::ProduceBlockResponse;

    #[test]
    fn envelope_carries_fork_blinding_and_value() -> anyhow::Result<()> {
        let block = BeaconBlock::BlindedCapella(capella::BlindedBeaconBlock::default());
        let response = ProduceBlockResponse::new(block, 2000);
        let encoded = serde_json::to_value(&response)?;

        assert_eq!(encoded["version"], "capella");
        assert_eq!(encoded["execution_payload_blinded"], true);
        assert_eq!(encoded["execution_payload_value"], "2000");
        assert_eq!(encoded["data"]["slot"], "0");
        Ok(())
    }
}
