use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;
use tera::{Context, Tera};

use crate::config::AppConfig;
use crate::llm::{extract_reply, retry::retry, ChatClient, UpstreamError};
use crate::web::models::{ChatForm, ChatOutcome, ChatRequest};
use crate::AppState;

// Renders the page for both the empty form and a completed submission.
// Template failure is the one path that answers with a non-200.
fn render_page(tera: &Tera, outcome: &ChatOutcome) -> HttpResponse {
    let mut context = Context::new();
    if let Some(user_input) = &outcome.user_input {
        context.insert("user_input", user_input);
    }
    if let Some(reply) = &outcome.reply {
        context.insert("response", reply);
    }
    if let Some(error) = &outcome.error {
        context.insert("error", error);
    }

    match tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Index page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    render_page(&data.tera, &ChatOutcome::default())
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Form submission handler
pub async fn chat(data: web::Data<AppState>, form: web::Form<ChatForm>) -> impl Responder {
    let user_input = form.into_inner().user_input;
    info!("Chat request: {}", user_input);

    let payload = ChatRequest::from_user_input(&data.config.model, &user_input);

    let outcome = match submit(&data.client, &data.config, &payload).await {
        Ok(reply) => ChatOutcome {
            user_input: Some(user_input),
            reply: Some(reply),
            error: None,
        },
        Err(e) => {
            error!("Chat request failed: {:?}", e);
            ChatOutcome {
                user_input: Some(user_input),
                reply: None,
                error: Some(format!("⚠️ Error: {}", e)),
            }
        }
    };

    render_page(&data.tera, &outcome)
}

// The retry budget covers the upstream call only; extraction runs once on
// the body the successful attempt produced.
async fn submit(
    client: &ChatClient,
    config: &AppConfig,
    payload: &ChatRequest,
) -> Result<String, UpstreamError> {
    let body = retry(&config.retry, |_attempt| client.complete(payload)).await?;
    extract_reply(&body)
}
