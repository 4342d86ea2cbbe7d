#![deny(missing_docs)]
//! Atum server executable.
//!
//! Hosts the HTTP endpoints for code generation, test generation,
//! documentation generation and quality scoring.

mod config;
mod llm;
mod openapi;
mod routes;

#[cfg(not(test))]
use actix_cors::Cors;
#[cfg(not(test))]
use actix_web::{App, HttpServer, http::header, web};
#[cfg(not(test))]
use dotenvy::dotenv;

#[cfg(not(test))]
use crate::config::{LlmConfig, ServerConfig};
#[cfg(not(test))]
use crate::llm::LlmService;
#[cfg(not(test))]
use crate::routes::{
    AppState, generate, generate_documentation, generate_unit_tests, health, openapi_json,
    quality_report,
};

#[cfg(not(test))]
fn config_error(message: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, message)
}

#[cfg(not(test))]
fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = ServerConfig::from_env().map_err(config_error)?;
    let llm_config = LlmConfig::from_env().map_err(config_error)?;

    // Blocking HTTP clients must be built before the actix runtime starts.
    let llm = LlmService::from_config(&llm_config)
        .map_err(|err| config_error(format!("failed to build LLM client: {err}")))?;
    log::info!(
        "using {} backend with model {}",
        llm.provider().as_str(),
        llm.model()
    );

    let state = web::Data::new(AppState { llm });
    let allowed_origins = server_config.allowed_origins.clone();
    let listen_addr = server_config.host.clone();
    let listen_port = server_config.port;
    log::info!("starting Atum server on {listen_addr}:{listen_port}");

    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            let mut cors = Cors::default()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec![header::CONTENT_TYPE])
                .max_age(3600);
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            App::new()
                .wrap(actix_web::middleware::Logger::default())
                .wrap(cors)
                .app_data(state.clone())
                .service(health)
                .service(generate)
                .service(generate_unit_tests)
                .service(generate_documentation)
                .service(quality_report)
                .service(openapi_json)
        })
        .bind((listen_addr, listen_port))?
        .run()
        .await
    })
}

#[cfg(test)]
fn main() {}
