mod company;
mod error;
mod shared;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use company_stocks_infra::StocksContext;
use error::StocksError;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    company::configure_routes(cfg);
}

/// Registers the api under the `/api` prefix. Json bodies that fail to
/// deserialize are answered with a 400 and a plain-text message
pub fn configure_server_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        StocksError::BadClientData(err.to_string()).into()
    }))
    .service(web::scope("/api").configure(configure_server_api));
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: StocksContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(context: StocksContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .configure(configure_server_app)
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
