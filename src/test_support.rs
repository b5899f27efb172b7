use actix_web::{web, App, HttpServer};
use serde_json::{json, Value};

/// Bind a stub inference server on an ephemeral port and return its base URL.
/// The server lives until the test's runtime shuts down.
pub fn spawn_upstream<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let srv = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind stub upstream");
    let addr = srv.addrs()[0];
    actix_web::rt::spawn(srv.run());
    format!("http://{}", addr)
}

pub fn hello_body() -> Value {
    json!({"choices": [{"message": {"content": "Hello!"}}]})
}
