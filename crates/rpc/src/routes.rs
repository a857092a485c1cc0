use actix_web::web::{ServiceConfig, scope};

use crate::handlers::{
    block::{publish_blinded_block, publish_block},
    produce::produce_block_v3,
};

/// Registers every block endpoint under its beacon API version prefix.
pub fn register_routes(config: &mut ServiceConfig) {
    config
        .service(
            scope("/eth/v2")
                .service(publish_block)
                .service(publish_blinded_block),
        )
        .service(scope("/eth/v3").service(produce_block_v3));
}
