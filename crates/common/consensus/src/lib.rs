pub mod altair;
pub mod attestation;
pub mod attester_slashing;
pub mod beacon_block_header;
pub mod bellatrix;
pub mod block;
pub mod bls;
pub mod bls_to_execution_change;
pub mod capella;
pub mod checkpoint;
pub mod deneb;
pub mod deposit;
pub mod eth1_data;
pub mod fork;
pub mod indexed_attestation;
pub mod phase0;
pub mod polynomial_commitments;
pub mod proposer_slashing;
pub mod sync_aggregate;
pub mod voluntary_exit;
pub mod withdrawal;
