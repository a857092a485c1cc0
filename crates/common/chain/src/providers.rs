use alloy_primitives::B256;
use async_trait::async_trait;
use pharos_consensus::block::SignedBeaconBlock;

use crate::request::{BlockRequest, ProducedBlock};

/// Handle to a stored beacon state. It identifies the state for the
/// state-transition collaborator, which owns the full representation; the
/// block API never looks past the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateHandle {
    pub state_root: B256,
    pub slot: u64,
}

/// Read access to stored blocks, keyed by block root.
#[async_trait]
pub trait BlockStore: Send + Sync {
    async fn block_by_root(&self, root: B256) -> anyhow::Result<Option<SignedBeaconBlock>>;
}

/// Read access to stored states, keyed by state root.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn state_by_root(&self, root: B256) -> anyhow::Result<Option<StateHandle>>;
}

/// The state-transition function: replay `block` on top of `parent_state`,
/// failing if the block is not a valid successor.
#[async_trait]
pub trait StateTransition: Send + Sync {
    async fn execute(
        &self,
        parent_state: StateHandle,
        block: &SignedBeaconBlock,
    ) -> anyhow::Result<()>;
}

/// Fork-choice view used by the equivocation check.
pub trait ForkChoiceReader: Send + Sync {
    /// Highest slot of any block fork choice has accepted, or `None` before
    /// the first block.
    fn highest_received_block_slot(&self) -> Option<u64>;
}

/// Hand-off into the proposal pipeline. The implementation broadcasts the
/// block and integrates it into its own state; it may broadcast even when
/// its internal validation fails, so callers must not blindly retry.
#[async_trait]
pub trait BlockProposer: Send + Sync {
    async fn propose_block(&self, block: SignedBeaconBlock) -> anyhow::Result<()>;
}

/// The block-building pipeline behind the produce endpoint.
#[async_trait]
pub trait BlockBuilder: Send + Sync {
    async fn produce_block(&self, request: BlockRequest) -> anyhow::Result<ProducedBlock>;
}
