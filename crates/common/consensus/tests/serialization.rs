use alloy_primitives::U256;
use pharos_consensus::{altair, bellatrix, capella, deneb, phase0};
use serde_json::{Value, json};
use ssz::{Decode, Encode};
use ssz_types::VariableList;

const UINT256_MAX: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";

fn hex_bytes(byte: u8, len: usize) -> String {
    format!("0x{}", format!("{byte:02x}").repeat(len))
}

fn phase0_signed_block_json() -> Value {
    json!({
        "message": {
            "slot": "1",
            "proposer_index": "23",
            "parent_root": hex_bytes(0x11, 32),
            "state_root": hex_bytes(0x22, 32),
            "body": {
                "randao_reveal": hex_bytes(0xaa, 96),
                "eth1_data": {
                    "deposit_root": hex_bytes(0x33, 32),
                    "deposit_count": "64",
                    "block_hash": hex_bytes(0x44, 32),
                },
                "graffiti": hex_bytes(0x00, 32),
                "proposer_slashings": [],
                "attester_slashings": [],
                "attestations": [{
                    "aggregation_bits": "0x03",
                    "data": {
                        "slot": "1",
                        "index": "2",
                        "beacon_block_root": hex_bytes(0x55, 32),
                        "source": { "epoch": "0", "root": hex_bytes(0x66, 32) },
                        "target": { "epoch": "1", "root": hex_bytes(0x77, 32) },
                    },
                    "signature": hex_bytes(0xbb, 96),
                }],
                "deposits": [],
                "voluntary_exits": [{
                    "message": { "epoch": "3", "validator_index": "9" },
                    "signature": hex_bytes(0xcc, 96),
                }],
            },
        },
        "signature": hex_bytes(0xdd, 96),
    })
}

#[test]
fn phase0_signed_block_json_round_trip() -> anyhow::Result<()> {
    let original = phase0_signed_block_json();
    let block: phase0::SignedBeaconBlock = serde_json::from_value(original.clone())?;

    assert_eq!(block.message.slot, 1);
    assert_eq!(block.message.proposer_index, 23);
    assert_eq!(block.message.body.eth1_data.deposit_count, 64);
    assert_eq!(block.message.body.attestations.len(), 1);
    assert_eq!(block.message.body.voluntary_exits[0].message.validator_index, 9);

    let reencoded = serde_json::to_value(&block)?;
    assert_eq!(reencoded, original, "re-encoded block does not match original JSON");
    Ok(())
}

#[test]
fn phase0_rejects_later_fork_fields() -> anyhow::Result<()> {
    let mut altair_shaped = phase0_signed_block_json();
    altair_shaped["message"]["body"]["sync_aggregate"] = json!({
        "sync_committee_bits": hex_bytes(0x00, 64),
        "sync_committee_signature": hex_bytes(0xee, 96),
    });

    let result = serde_json::from_value::<phase0::SignedBeaconBlock>(altair_shaped);
    assert!(result.is_err(), "unknown field must be rejected");
    Ok(())
}

#[test]
fn absent_list_field_is_a_hard_error() -> anyhow::Result<()> {
    let mut missing_attestations = phase0_signed_block_json();
    missing_attestations["message"]["body"]
        .as_object_mut()
        .expect("body is an object")
        .remove("attestations");

    let result = serde_json::from_value::<phase0::SignedBeaconBlock>(missing_attestations);
    assert!(result.is_err(), "an omitted list key must not decode as an empty list");
    Ok(())
}

#[test]
fn bellatrix_base_fee_boundary_round_trip() -> anyhow::Result<()> {
    let mut block = bellatrix::SignedBeaconBlock::default();
    block.message.slot = 100;
    block.message.body.execution_payload.base_fee_per_gas = U256::MAX;
    block.message.body.execution_payload.transactions =
        VariableList::new(vec![VariableList::new(vec![0x02u8, 0xf8, 0x66]).unwrap()]).unwrap();

    let encoded = serde_json::to_value(&block)?;
    assert_eq!(
        encoded["message"]["body"]["execution_payload"]["base_fee_per_gas"],
        UINT256_MAX
    );
    assert_eq!(
        encoded["message"]["body"]["execution_payload"]["transactions"][0],
        "0x02f866"
    );

    let decoded: bellatrix::SignedBeaconBlock = serde_json::from_value(encoded)?;
    assert_eq!(decoded, block);

    block.message.body.execution_payload.base_fee_per_gas = U256::ZERO;
    let encoded = serde_json::to_value(&block)?;
    assert_eq!(encoded["message"]["body"]["execution_payload"]["base_fee_per_gas"], "0");
    let decoded: bellatrix::SignedBeaconBlock = serde_json::from_value(encoded)?;
    assert_eq!(decoded, block);
    Ok(())
}

#[test]
fn base_fee_per_gas_ssz_is_little_endian() {
    let mut payload = bellatrix::ExecutionPayload::default();
    payload.base_fee_per_gas = U256::from(1);

    let bytes = payload.as_ssz_bytes();
    let decoded = bellatrix::ExecutionPayload::from_ssz_bytes(&bytes)
        .expect("payload decodes from its own encoding");
    assert_eq!(decoded.base_fee_per_gas, U256::from(1));

    // The 256-bit field occupies 32 bytes, least significant byte first.
    assert_eq!(decoded.base_fee_per_gas.as_le_bytes()[0], 1);
}

#[test]
fn capella_blinded_block_round_trip() -> anyhow::Result<()> {
    let mut block = capella::SignedBlindedBeaconBlock::default();
    block.message.slot = 7;
    block.message.body.execution_payload_header.withdrawals_root =
        alloy_primitives::B256::repeat_byte(0x99);

    let encoded = serde_json::to_value(&block)?;
    assert_eq!(encoded["message"]["slot"], "7");
    assert_eq!(
        encoded["message"]["body"]["execution_payload_header"]["withdrawals_root"],
        hex_bytes(0x99, 32)
    );
    // Blinded bodies never carry a transaction list.
    assert!(
        encoded["message"]["body"]["execution_payload_header"]
            .get("transactions")
            .is_none()
    );

    let decoded: capella::SignedBlindedBeaconBlock = serde_json::from_value(encoded)?;
    assert_eq!(decoded, block);
    Ok(())
}

#[test]
fn deneb_signed_contents_round_trip() -> anyhow::Result<()> {
    let mut contents = deneb::SignedBeaconBlockContents::default();
    contents.signed_block.message.slot = 11;
    contents.signed_block.message.body.execution_payload.blob_gas_used = 131072;

    let mut sidecar = deneb::SignedBlobSidecar::default();
    sidecar.message.index = 0;
    sidecar.message.slot = 11;
    contents.signed_blob_sidecars = VariableList::new(vec![sidecar]).unwrap();

    let encoded = serde_json::to_value(&contents)?;
    assert_eq!(encoded["signed_block"]["message"]["slot"], "11");
    assert_eq!(
        encoded["signed_block"]["message"]["body"]["execution_payload"]["blob_gas_used"],
        "131072"
    );
    assert_eq!(encoded["signed_blob_sidecars"][0]["message"]["slot"], "11");

    let decoded: deneb::SignedBeaconBlockContents = serde_json::from_value(encoded)?;
    assert_eq!(decoded, contents);
    Ok(())
}

#[test]
fn every_fork_and_blinding_state_round_trips() -> anyhow::Result<()> {
    macro_rules! assert_json_round_trip {
        ($wire_type:ty) => {{
            let value = <$wire_type>::default();
            let encoded = serde_json::to_value(&value)?;
            let decoded: $wire_type = serde_json::from_value(encoded)?;
            assert_eq!(decoded, value);
        }};
    }

    assert_json_round_trip!(phase0::SignedBeaconBlock);
    assert_json_round_trip!(altair::SignedBeaconBlock);
    assert_json_round_trip!(bellatrix::SignedBeaconBlock);
    assert_json_round_trip!(bellatrix::SignedBlindedBeaconBlock);
    assert_json_round_trip!(capella::SignedBeaconBlock);
    assert_json_round_trip!(capella::SignedBlindedBeaconBlock);
    assert_json_round_trip!(deneb::SignedBeaconBlockContents);
    assert_json_round_trip!(deneb::SignedBlindedBeaconBlockContents);
    Ok(())
}

#[test]
fn phase0_signed_block_ssz_round_trip() -> anyhow::Result<()> {
    let block: phase0::SignedBeaconBlock = serde_json::from_value(phase0_signed_block_json())?;

    let bytes = block.as_ssz_bytes();
    let decoded = phase0::SignedBeaconBlock::from_ssz_bytes(&bytes)
        .map_err(|err| anyhow::anyhow!("ssz decode failed: {err:?}"))?;
    assert_eq!(decoded, block);
    Ok(())
}

#[test]
fn deneb_signed_contents_ssz_round_trip() -> anyhow::Result<()> {
    let mut contents = deneb::SignedBeaconBlockContents::default();
    contents.signed_block.message.slot = 3;
    contents.signed_blob_sidecars = VariableList::new(vec![deneb::SignedBlobSidecar::default()]).unwrap();

    let bytes = contents.as_ssz_bytes();
    let decoded = deneb::SignedBeaconBlockContents::from_ssz_bytes(&bytes)
        .map_err(|err| anyhow::anyhow!("ssz decode failed: {err:?}"))?;
    assert_eq!(decoded, contents);
    Ok(())
}
