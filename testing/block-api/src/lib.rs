use std::{collections::HashMap, sync::Arc};

use alloy_primitives::B256;
use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::Mutex;
use pharos_chain::{
    providers::{
        BlockBuilder, BlockProposer, BlockStore, ForkChoiceReader, StateHandle, StateStore,
        StateTransition,
    },
    request::{BlockRequest, ProducedBlock},
    sync::{SyncChecker, SyncStatus},
};
use pharos_consensus::{
    block::{BeaconBlock, SignedBeaconBlock},
    bls::BLSSignature,
    capella, phase0,
};
use pharos_rpc::context::ApiContext;

#[derive(Default)]
pub struct MockSyncChecker {
    pub status: SyncStatus,
}

#[async_trait]
impl SyncChecker for MockSyncChecker {
    async fn sync_status(&self) -> anyhow::Result<SyncStatus> {
        Ok(self.status)
    }
}

#[derive(Default)]
pub struct MockBlockStore {
    pub blocks: Mutex<HashMap<B256, SignedBeaconBlock>>,
}

#[async_trait]
impl BlockStore for MockBlockStore {
    async fn block_by_root(&self, root: B256) -> anyhow::Result<Option<SignedBeaconBlock>> {
        Ok(self.blocks.lock().get(&root).cloned())
    }
}

#[derive(Default)]
pub struct MockStateStore {
    pub states: Mutex<HashMap<B256, StateHandle>>,
}

#[async_trait]
impl StateStore for MockStateStore {
    async fn state_by_root(&self, root: B256) -> anyhow::Result<Option<StateHandle>> {
        Ok(self.states.lock().get(&root).copied())
    }
}

#[derive(Default)]
pub struct MockStateTransition {
    pub error: Mutex<Option<String>>,
}

#[async_trait]
impl StateTransition for MockStateTransition {
    async fn execute(
        &self,
        _parent_state: StateHandle,
        _block: &SignedBeaconBlock,
    ) -> anyhow::Result<()> {
        match self.error.lock().clone() {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct MockForkChoice {
    pub highest_slot: Mutex<Option<u64>>,
}

impl ForkChoiceReader for MockForkChoice {
    fn highest_received_block_slot(&self) -> Option<u64> {
        *self.highest_slot.lock()
    }
}

#[derive(Default)]
pub struct MockBlockProposer {
    pub proposed: Mutex<Vec<SignedBeaconBlock>>,
    pub error: Mutex<Option<String>>,
}

#[async_trait]
impl BlockProposer for MockBlockProposer {
    async fn propose_block(&self, block: SignedBeaconBlock) -> anyhow::Result<()> {
        if let Some(message) = self.error.lock().clone() {
            return Err(anyhow!("{message}"));
        }
        self.proposed.lock().push(block);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockBlockBuilder {
    pub response: Mutex<Option<ProducedBlock>>,
    pub requests: Mutex<Vec<BlockRequest>>,
}

#[async_trait]
impl BlockBuilder for MockBlockBuilder {
    async fn produce_block(&self, request: BlockRequest) -> anyhow::Result<ProducedBlock> {
        self.requests.lock().push(request);
        self.response
            .lock()
            .clone()
            .ok_or_else(|| anyhow!("no block available"))
    }
}

/// One fully mocked set of collaborators plus the [`ApiContext`] wired over
/// them, so tests can drive the endpoints and then inspect what each
/// collaborator saw.
pub struct TestHarness {
    pub sync_checker: Arc<MockSyncChecker>,
    pub block_store: Arc<MockBlockStore>,
    pub state_store: Arc<MockStateStore>,
    pub state_transition: Arc<MockStateTransition>,
    pub fork_choice: Arc<MockForkChoice>,
    pub block_proposer: Arc<MockBlockProposer>,
    pub block_builder: Arc<MockBlockBuilder>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            sync_checker: Arc::new(MockSyncChecker::default()),
            block_store: Arc::new(MockBlockStore::default()),
            state_store: Arc::new(MockStateStore::default()),
            state_transition: Arc::new(MockStateTransition::default()),
            fork_choice: Arc::new(MockForkChoice::default()),
            block_proposer: Arc::new(MockBlockProposer::default()),
            block_builder: Arc::new(MockBlockBuilder::default()),
        }
    }

    pub fn syncing() -> Self {
        TestHarness {
            sync_checker: Arc::new(MockSyncChecker {
                status: SyncStatus {
                    head_slot: 5,
                    sync_distance: 12,
                    is_syncing: true,
                    ..Default::default()
                },
            }),
            ..Self::new()
        }
    }

    pub fn context(&self) -> ApiContext {
        ApiContext {
            sync_checker: self.sync_checker.clone(),
            block_store: self.block_store.clone(),
            state_store: self.state_store.clone(),
            state_transition: self.state_transition.clone(),
            fork_choice: self.fork_choice.clone(),
            block_proposer: self.block_proposer.clone(),
            block_builder: self.block_builder.clone(),
        }
    }

    /// Seeds the stores so consensus validation of `block` succeeds: a parent
    /// block under the candidate's parent root and a state under the parent's
    /// state root.
    pub fn seed_parent_chain(&self, block: &SignedBeaconBlock) {
        let mut parent = phase0::SignedBeaconBlock::default();
        parent.message.slot = block.slot().saturating_sub(1);
        parent.message.state_root = B256::repeat_byte(0xfe);
        let parent = SignedBeaconBlock::Phase0(parent);

        self.state_store.states.lock().insert(
            parent.state_root(),
            StateHandle {
                state_root: parent.state_root(),
                slot: parent.slot(),
            },
        );
        self.block_store
            .blocks
            .lock()
            .insert(block.parent_root(), parent);
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn phase0_signed_block(slot: u64) -> phase0::SignedBeaconBlock {
    let mut block = phase0::SignedBeaconBlock::default();
    block.message.slot = slot;
    block.message.proposer_index = 23;
    block.message.parent_root = B256::repeat_byte(0x11);
    block.message.state_root = B256::repeat_byte(0x22);
    block.signature = BLSSignature::repeat_byte(0xdd);
    block
}

pub fn capella_signed_block(slot: u64) -> capella::SignedBeaconBlock {
    let mut block = capella::SignedBeaconBlock::default();
    block.message.slot = slot;
    block.message.parent_root = B256::repeat_byte(0x33);
    block
}

pub fn capella_signed_blinded_block(slot: u64) -> capella::SignedBlindedBeaconBlock {
    let mut block = capella::SignedBlindedBeaconBlock::default();
    block.message.slot = slot;
    block.message.parent_root = B256::repeat_byte(0x44);
    block.message.body.execution_payload_header.transactions_root = B256::repeat_byte(0x55);
    block
}

pub fn capella_blinded_block(slot: u64) -> BeaconBlock {
    let mut block = capella::BlindedBeaconBlock::default();
    block.slot = slot;
    BeaconBlock::BlindedCapella(block)
}
