use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
use serde_json::{Value, json};

async fn game_details(Path(slug): Path<String>) -> Result<Json<Value>, StatusCode> {
    match slug.as_str() {
        "missing" => Err(StatusCode::NOT_FOUND),
        "portal-2" => Ok(Json(json!({
            "id": 107,
            "slug": "portal-2",
            "name": "Portal 2",
            "rating": 4.5,
            "background_image": "https://img.example/portal-2.jpg"
        }))),
        // echo the decoded slug back so callers can see what arrived
        other => Ok(Json(json!({ "id": 1, "slug": other, "name": other }))),
    }
}

/// Serves a tiny catalog on an ephemeral port and returns its base URL.
pub async fn spawn_catalog() -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new().route("/games/{slug}", get(game_details));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}
