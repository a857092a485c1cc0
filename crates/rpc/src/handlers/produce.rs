use actix_web::{
    HttpRequest, HttpResponse, get,
    http::header::CONTENT_DISPOSITION,
    web::{Data, Path, Query},
};
use alloy_primitives::B256;
use pharos_api_types::{
    codec::{self, DecodeError},
    content_type::{SSZ_CONTENT_TYPE, ssz_requested},
    error::ApiError,
    query::ProduceBlockQuery,
    responses::{
        ETH_CONSENSUS_VERSION_HEADER, EXECUTION_PAYLOAD_BLINDED_HEADER,
        EXECUTION_PAYLOAD_VALUE_HEADER, ProduceBlockResponse,
    },
};
use pharos_chain::request::{BlockRequest, ProducedBlock};
use pharos_consensus::{
    block::BeaconBlock,
    bls::{self, BYTES_PER_SIGNATURE, BLSSignature},
};
use tracing::info;

use crate::{context::ApiContext, handlers::check_sync};

/// GET /eth/v3/validator/blocks/{slot}
///
/// Asks the block builder for a block at the given slot and marshals the
/// result into the fork-appropriate wire shape, or raw SSZ when the Accept
/// header asks for it. Whether the block is blinded is the builder's call,
/// not the caller's.
#[get("/validator/blocks/{slot}")]
pub async fn produce_block_v3(
    http_request: HttpRequest,
    slot: Path<String>,
    query: Query<ProduceBlockQuery>,
    context: Data<ApiContext>,
) -> Result<HttpResponse, ApiError> {
    check_sync(context.sync_checker.as_ref()).await?;

    let raw_slot = slot.into_inner();
    if raw_slot.is_empty() {
        return Err(ApiError::BadRequest("slot is required".to_string()));
    }
    let slot = codec::parse_uint(&raw_slot)
        .map_err(|err| ApiError::BadRequest(format!("slot is invalid: {err}")))?;

    let query = query.into_inner();
    let skip_randao_verification = query.skip_randao_verification.unwrap_or(false);
    let randao_reveal = if skip_randao_verification {
        bls::point_at_infinity()
    } else {
        parse_randao_reveal(query.randao_reveal.as_deref().unwrap_or_default())?
    };
    let graffiti = match query.graffiti.as_deref() {
        Some(raw) => codec::parse_hex_bytes::<32>(raw)
            .map_err(|err| ApiError::BadRequest(format!("unable to decode graffiti: {err}")))?,
        None => B256::ZERO,
    };

    let ProducedBlock {
        block,
        is_blinded,
        payload_value,
    } = context
        .block_builder
        .produce_block(BlockRequest {
            slot,
            randao_reveal,
            graffiti,
            skip_randao_verification,
        })
        .await
        .map_err(|err| ApiError::InternalError(err.to_string()))?;

    info!(
        slot,
        fork = %block.fork_name(),
        blinded = is_blinded,
        payload_value,
        "produced beacon block"
    );

    let mut response = HttpResponse::Ok();
    response
        .insert_header((ETH_CONSENSUS_VERSION_HEADER, block.fork_name().to_string()))
        .insert_header((EXECUTION_PAYLOAD_BLINDED_HEADER, is_blinded.to_string()))
        .insert_header((EXECUTION_PAYLOAD_VALUE_HEADER, payload_value.to_string()));

    if ssz_requested(http_request.headers()) {
        let file_name = ssz_file_name(&block);
        return Ok(response
            .content_type(SSZ_CONTENT_TYPE)
            .insert_header((
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ))
            .body(block.as_ssz_bytes()));
    }
    Ok(response.json(ProduceBlockResponse::new(block, payload_value)))
}

fn parse_randao_reveal(raw: &str) -> Result<BLSSignature, ApiError> {
    match codec::parse_hex_bytes::<BYTES_PER_SIGNATURE>(raw) {
        Ok(signature) => Ok(signature),
        Err(DecodeError::InvalidLength { expected, actual }) => Err(ApiError::BadRequest(format!(
            "a valid randao reveal is required as a query parameter: received length {actual} but wanted length {expected}"
        ))),
        Err(err) => Err(ApiError::BadRequest(format!(
            "unable to decode randao reveal: {err}"
        ))),
    }
}

fn ssz_file_name(block: &BeaconBlock) -> String {
    if block.is_blinded() {
        format!("{}_blinded_block.ssz", block.fork_name())
    } else {
        format!("{}_block.ssz", block.fork_name())
    }
}
