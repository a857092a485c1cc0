use alloy_primitives::B256;
use pharos_api_types::block::BroadcastValidation;
use pharos_chain::providers::{BlockStore, ForkChoiceReader, StateStore, StateTransition};
use pharos_consensus::block::SignedBeaconBlock;
use thiserror::Error;

/// Consensus re-validation failures, one variant per stage so callers can
/// assert on the stage without parsing the rendered message.
#[derive(Debug, Error)]
pub enum ConsensusValidationError {
    #[error("could not get parent block: {0}")]
    ParentBlock(anyhow::Error),

    #[error("could not get parent block: no block with root {0}")]
    ParentBlockMissing(B256),

    #[error("could not get parent state: {0}")]
    ParentState(anyhow::Error),

    #[error("could not get parent state: no state with root {0}")]
    ParentStateMissing(B256),

    #[error("could not execute state transition: {0}")]
    StateTransition(anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BroadcastValidationError {
    #[error("consensus validation failed: {0}")]
    Consensus(#[from] ConsensusValidationError),

    #[error("equivocation validation failed: block for slot {0} already exists in fork choice")]
    Equivocation(u64),
}

/// Gate run strictly before the proposal hand-off. A failure here prevents
/// proposal; it never merely warns.
pub async fn validate_broadcast(
    validation: BroadcastValidation,
    block: &SignedBeaconBlock,
    block_store: &dyn BlockStore,
    state_store: &dyn StateStore,
    state_transition: &dyn StateTransition,
    fork_choice: &dyn ForkChoiceReader,
) -> Result<(), BroadcastValidationError> {
    match validation {
        BroadcastValidation::None => Ok(()),
        BroadcastValidation::Consensus => {
            validate_consensus(block, block_store, state_store, state_transition).await?;
            Ok(())
        }
        BroadcastValidation::ConsensusAndEquivocation => {
            validate_consensus(block, block_store, state_store, state_transition).await?;
            validate_equivocation(block, fork_choice)
        }
    }
}

/// Replays the candidate on top of its parent: fetch the parent block by the
/// candidate's parent root, the parent state by that block's state root, then
/// run the state-transition function.
async fn validate_consensus(
    block: &SignedBeaconBlock,
    block_store: &dyn BlockStore,
    state_store: &dyn StateStore,
    state_transition: &dyn StateTransition,
) -> Result<(), ConsensusValidationError> {
    let parent_root = block.parent_root();
    let parent_block = block_store
        .block_by_root(parent_root)
        .await
        .map_err(ConsensusValidationError::ParentBlock)?
        .ok_or(ConsensusValidationError::ParentBlockMissing(parent_root))?;

    let parent_state_root = parent_block.state_root();
    let parent_state = state_store
        .state_by_root(parent_state_root)
        .await
        .map_err(ConsensusValidationError::ParentState)?
        .ok_or(ConsensusValidationError::ParentStateMissing(parent_state_root))?;

    state_transition
        .execute(parent_state, block)
        .await
        .map_err(ConsensusValidationError::StateTransition)
}

/// A slot already occupied in fork choice means a conflicting proposal.
/// Lower slots are normal monotonic progress, and an empty fork choice has
/// nothing to conflict with.
fn validate_equivocation(
    block: &SignedBeaconBlock,
    fork_choice: &dyn ForkChoiceReader,
) -> Result<(), BroadcastValidationError> {
    if fork_choice.highest_received_block_slot() == Some(block.slot()) {
        return Err(BroadcastValidationError::Equivocation(block.slot()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use alloy_primitives::B256;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use pharos_api_types::block::BroadcastValidation;
    use pharos_chain::providers::{
        BlockStore, ForkChoiceReader, StateHandle, StateStore, StateTransition,
    };
    use pharos_consensus::{block::SignedBeaconBlock, phase0};

    use super::{BroadcastValidationError, ConsensusValidationError, validate_broadcast};

    #[derive(Default)]
    struct MockChain {
        parent_block: Option<SignedBeaconBlock>,
        parent_block_error: Option<String>,
        parent_state: Option<StateHandle>,
        transition_error: Option<String>,
        transition_calls: AtomicUsize,
        highest_slot: Option<u64>,
    }

    #[async_trait]
    impl BlockStore for MockChain {
        async fn block_by_root(&self, _root: B256) -> anyhow::Result<Option<SignedBeaconBlock>> {
            if let Some(message) = &self.parent_block_error {
                return Err(anyhow!("{message}"));
            }
            Ok(self.parent_block.clone())
        }
    }

    #[async_trait]
    impl StateStore for MockChain {
        async fn state_by_root(&self, _root: B256) -> anyhow::Result<Option<StateHandle>> {
            Ok(self.parent_state)
        }
    }

    #[async_trait]
    impl StateTransition for MockChain {
        async fn execute(
            &self,
            _parent_state: StateHandle,
            _block: &SignedBeaconBlock,
        ) -> anyhow::Result<()> {
            self.transition_calls.fetch_add(1, Ordering::SeqCst);
            match &self.transition_error {
                Some(message) => Err(anyhow!("{message}")),
                None => Ok(()),
            }
        }
    }

    impl ForkChoiceReader for MockChain {
        fn highest_received_block_slot(&self) -> Option<u64> {
            self.highest_slot
        }
    }

    fn candidate_block(slot: u64) -> SignedBeaconBlock {
        let mut block = phase0::SignedBeaconBlock::default();
        block.message.slot = slot;
        block.message.parent_root = B256::repeat_byte(0x01);
        SignedBeaconBlock::Phase0(block)
    }

    fn healthy_chain() -> MockChain {
        MockChain {
            parent_block: Some(candidate_block(4)),
            parent_state: Some(StateHandle {
                state_root: B256::repeat_byte(0x02),
                slot: 4,
            }),
            highest_slot: Some(4),
            ..Default::default()
        }
    }

    async fn run(
        validation: BroadcastValidation,
        block: &SignedBeaconBlock,
        chain: &MockChain,
    ) -> Result<(), BroadcastValidationError> {
        validate_broadcast(validation, block, chain, chain, chain, chain).await
    }

    #[tokio::test]
    async fn none_mode_touches_no_collaborator() {
        let chain = MockChain {
            parent_block_error: Some("store is down".to_string()),
            ..Default::default()
        };
        run(BroadcastValidation::None, &candidate_block(5), &chain)
            .await
            .expect("no validation requested");
        assert_eq!(chain.transition_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_parent_block_fails_at_the_first_stage() {
        let chain = MockChain::default();
        let error = run(BroadcastValidation::Consensus, &candidate_block(5), &chain)
            .await
            .expect_err("parent block is unknown");
        assert!(matches!(
            error,
            BroadcastValidationError::Consensus(ConsensusValidationError::ParentBlockMissing(_))
        ));
        assert!(error.to_string().contains("could not get parent block"));
        assert!(error.to_string().starts_with("consensus validation failed"));
    }

    #[tokio::test]
    async fn fetch_failure_wraps_the_store_error() {
        let chain = MockChain {
            parent_block_error: Some("store is down".to_string()),
            ..Default::default()
        };
        let error = run(BroadcastValidation::Consensus, &candidate_block(5), &chain)
            .await
            .expect_err("store failure propagates");
        assert!(matches!(
            error,
            BroadcastValidationError::Consensus(ConsensusValidationError::ParentBlock(_))
        ));
        assert!(error.to_string().contains("store is down"));
    }

    #[tokio::test]
    async fn transition_failure_names_its_stage() {
        let chain = MockChain {
            transition_error: Some("invalid state root".to_string()),
            ..healthy_chain()
        };
        let error = run(BroadcastValidation::Consensus, &candidate_block(5), &chain)
            .await
            .expect_err("transition fails");
        assert!(matches!(
            error,
            BroadcastValidationError::Consensus(ConsensusValidationError::StateTransition(_))
        ));
        assert!(error.to_string().contains("could not execute state transition"));
        assert_eq!(chain.transition_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn consensus_mode_passes_on_a_healthy_chain() {
        let chain = healthy_chain();
        run(BroadcastValidation::Consensus, &candidate_block(5), &chain)
            .await
            .expect("valid candidate");
        assert_eq!(chain.transition_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn equivocation_fails_only_on_slot_equality() {
        let chain = MockChain {
            highest_slot: Some(5),
            ..healthy_chain()
        };

        // Consensus alone would pass; the occupied slot is what fails.
        run(BroadcastValidation::Consensus, &candidate_block(5), &chain)
            .await
            .expect("consensus alone passes");
        let error = run(
            BroadcastValidation::ConsensusAndEquivocation,
            &candidate_block(5),
            &chain,
        )
        .await
        .expect_err("slot already occupied");
        assert!(matches!(error, BroadcastValidationError::Equivocation(5)));
        assert_eq!(
            error.to_string(),
            "equivocation validation failed: block for slot 5 already exists in fork choice"
        );

        // A candidate ahead of fork choice is normal progress.
        run(
            BroadcastValidation::ConsensusAndEquivocation,
            &candidate_block(6),
            &chain,
        )
        .await
        .expect("higher slot is not equivocation");

        // An empty fork choice has nothing to conflict with.
        let chain = MockChain {
            highest_slot: None,
            ..healthy_chain()
        };
        run(
            BroadcastValidation::ConsensusAndEquivocation,
            &candidate_block(5),
            &chain,
        )
        .await
        .expect("no recorded block");
    }
}
