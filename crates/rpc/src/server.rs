use std::net::SocketAddr;

use actix_web::{App, HttpServer, middleware, web::Data};
use tracing::info;

use crate::{context::ApiContext, routes::register_routes};

/// Builder for the block API server: collaborators in, bound actix server
/// out.
pub struct RpcServerBuilder {
    http_socket_address: SocketAddr,
    context: ApiContext,
}

impl RpcServerBuilder {
    pub fn new(http_socket_address: SocketAddr, context: ApiContext) -> Self {
        Self {
            http_socket_address,
            context,
        }
    }

    /// Start serving. Runs until the server is stopped.
    pub async fn start(self) -> std::io::Result<()> {
        let context = Data::new(self.context);

        info!("starting HTTP server on {:?}", self.http_socket_address);

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Logger::default())
                .app_data(context.clone())
                .configure(register_routes)
        })
        .bind(self.http_socket_address)?
        .run()
        .await
    }
}
