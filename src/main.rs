mod config;
mod llm;
#[cfg(test)]
mod test_support;
mod web;

use actix_files as fs;
use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use tera::Tera;

use config::AppConfig;
use llm::ChatClient;
use web::routes;

// App state structure
struct AppState {
    tera: Tera,
    config: AppConfig,
    client: ChatClient,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!("Starting chat web front end");
    info!("Using inference server at: {}", config.api_url);

    let client = match ChatClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize template engine
    let mut tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);

    let bind_addr = config.bind_addr.clone();

    // Create app state
    let app_state = Data::new(AppState {
        tera,
        config,
        client,
    });

    // Start web server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", "./static"))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
