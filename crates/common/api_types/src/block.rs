use serde::Deserialize;

/// Validation the caller asks for before a published block is handed to the
/// proposal pipeline. Absent query parameter means no validation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastValidation {
    #[default]
    None,
    Consensus,
    ConsensusAndEquivocation,
}
