use tokio::time::sleep;
use std::time::Duration;
use actix_web::{web, App, HttpServer};
use crate::utils::logging::*;
use crate::utils::config::Config;
use crate::analysis::vision_client::VisionClient;
use crate::web::api::{analysis, config, default, javascript, log, misc};

pub struct Studio;

impl Studio {
    pub async fn run() {
        dotenvy::dotenv().ok();
        Config::now().await;
        let vision_client = match VisionClient::from_env() {
            Ok(vision_client) => Some(vision_client),
            Err(err) => {
                logging_critical!("Studio", "Vision service credentials unavailable, analysis requests will fail", format!("Err: {err}"));
                None
            },
        };
        let vision_client = web::Data::new(vision_client);
        let http_server = loop {
            let config = Config::now().await;
            let app_data = vision_client.clone();
            let http_server = HttpServer::new(move || {
                App::new()
                    .app_data(app_data.clone())
                    .service(analysis::initialize())
                    .service(config::initialize())
                    .service(javascript::initialize())
                    .service(log::initialize())
                    .service(misc::initialize())
                    .default_service(web::route().to(default::default_route))
            }).bind(format!("0.0.0.0:{}", config.http_server_bind_port));
            match http_server {
                Ok(http_server) => break http_server,
                Err(err) => {
                    logging_critical!("Studio", "Failed to bind port", format!("Err: {err}"));
                    sleep(Duration::from_secs(config.bind_retry_duration)).await;
                    continue;
                },
            }
        };
        logging_information!("Studio", "Web service ready");
        logging_information!("Studio", "Online now");
        if let Err(err) = http_server.run().await {
            logging_emergency!("Studio", "An error occurred while running the web service", format!("Err: {err}"));
        }
    }

    pub async fn terminate() {
        logging_information!("Studio", "Termination in progress");
        logging_information!("Studio", "Termination complete");
    }
}
