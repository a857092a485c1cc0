use actix_web::{
    HttpRequest, HttpResponse, post,
    web::{Bytes, BytesMut, Data, Payload, Query},
};
use futures::StreamExt;
use pharos_api_types::{
    block::BroadcastValidation, content_type::request_content_type, error::ApiError,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    context::ApiContext,
    handlers::check_sync,
    resolve::{BLINDED_BLOCK_CANDIDATES, BlockCandidate, FULL_BLOCK_CANDIDATES, resolve_block},
    validation::validate_broadcast,
};

#[derive(Debug, Deserialize)]
pub struct BroadcastValidationQuery {
    #[serde(default)]
    pub broadcast_validation: BroadcastValidation,
}

/// POST /eth/v2/beacon/blocks
///
/// Publishes a signed beacon block. The body is either JSON in one of the
/// per-fork shapes or SSZ of the signed-block type, selected by Content-Type;
/// the fork itself is resolved by trial decode.
#[post("/beacon/blocks")]
pub async fn publish_block(
    http_request: HttpRequest,
    payload: Payload,
    query: Query<BroadcastValidationQuery>,
    context: Data<ApiContext>,
) -> Result<HttpResponse, ApiError> {
    publish(
        &http_request,
        payload,
        query.broadcast_validation,
        &context,
        FULL_BLOCK_CANDIDATES,
    )
    .await
}

/// POST /eth/v2/beacon/blinded_blocks
///
/// Same as [`publish_block`], but the Bellatrix-and-later candidates carry an
/// execution payload header instead of the full payload. Pre-merge forks have
/// no blinded shape and fall through to the full ones.
#[post("/beacon/blinded_blocks")]
pub async fn publish_blinded_block(
    http_request: HttpRequest,
    payload: Payload,
    query: Query<BroadcastValidationQuery>,
    context: Data<ApiContext>,
) -> Result<HttpResponse, ApiError> {
    publish(
        &http_request,
        payload,
        query.broadcast_validation,
        &context,
        BLINDED_BLOCK_CANDIDATES,
    )
    .await
}

async fn publish(
    http_request: &HttpRequest,
    payload: Payload,
    validation: BroadcastValidation,
    context: &ApiContext,
    candidates: &[BlockCandidate],
) -> Result<HttpResponse, ApiError> {
    check_sync(context.sync_checker.as_ref()).await?;

    let body = read_body(payload).await?;
    let content_type = request_content_type(http_request.headers());
    let block = resolve_block(&body, content_type, candidates)
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    validate_broadcast(
        validation,
        &block,
        context.block_store.as_ref(),
        context.state_store.as_ref(),
        context.state_transition.as_ref(),
        context.fork_choice.as_ref(),
    )
    .await
    .map_err(|err| {
        warn!(slot = block.slot(), %err, "rejecting published block");
        ApiError::BadRequest(err.to_string())
    })?;

    context
        .block_proposer
        .propose_block(block.clone())
        .await
        .map_err(|err| ApiError::InternalError(err.to_string()))?;

    info!(
        slot = block.slot(),
        fork = %block.fork_name(),
        blinded = block.is_blinded(),
        "published beacon block"
    );
    Ok(HttpResponse::Ok().finish())
}

async fn read_body(payload: Payload) -> Result<Bytes, ApiError> {
    let mut body = BytesMut::new();
    let mut stream = payload.into_inner();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|err| {
            ApiError::InternalError(format!("Could not read request body: {err}"))
        })?;
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}
