use std::sync::Arc;

use pharos_chain::{
    providers::{
        BlockBuilder, BlockProposer, BlockStore, ForkChoiceReader, StateStore, StateTransition,
    },
    sync::SyncChecker,
};

/// Collaborators the block endpoints call out to. Everything here is
/// read-only from this layer's perspective except the proposer hand-off,
/// which owns its own write path.
#[derive(Clone)]
pub struct ApiContext {
    pub sync_checker: Arc<dyn SyncChecker>,
    pub block_store: Arc<dyn BlockStore>,
    pub state_store: Arc<dyn StateStore>,
    pub state_transition: Arc<dyn StateTransition>,
    pub fork_choice: Arc<dyn ForkChoiceReader>,
    pub block_proposer: Arc<dyn BlockProposer>,
    pub block_builder: Arc<dyn BlockBuilder>,
}
