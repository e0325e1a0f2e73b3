use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use admatch_api::auth::{self, AppState, AppStateInner};
use admatch_api::middleware::require_auth;
use admatch_api::{adspaces, businesses, chats, matching, tags};
use admatch_responder::Responder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admatch=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let jwt_secret =
        std::env::var("ADMATCH_JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into());
    let db_path = std::env::var("ADMATCH_DB_PATH").unwrap_or_else(|_| "admatch.db".into());
    let host = std::env::var("ADMATCH_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("ADMATCH_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Init database
    let db = admatch_db::Database::open(&PathBuf::from(&db_path))?;

    // Shared state
    let app_state: AppState = Arc::new(AppStateInner {
        db,
        jwt_secret,
        responder: Responder::new(),
    });

    // Routes
    let public_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/tags", get(tags::list_tags))
        .route("/businesses", get(businesses::list_businesses))
        .route("/adspaces", get(adspaces::list_adspaces))
        .route("/adspaces/types", get(adspaces::list_adspace_types))
        .route("/adspaces/{adspace_id}", get(adspaces::get_adspace))
        .with_state(app_state.clone());

    let protected_routes = Router::new()
        .route("/auth/password", post(auth::change_password))
        .route("/businesses/mine", get(businesses::my_business))
        .route("/businesses", post(businesses::create_business))
        .route("/adspaces/mine", get(adspaces::my_adspaces))
        .route("/adspaces", post(adspaces::create_adspace))
        .route("/match/next", get(matching::next_card))
        .route("/match/swipe", post(matching::swipe))
        .route("/chats", get(chats::list_chats))
        .route("/chats/{chat_id}", get(chats::get_chat))
        .route("/chats/{chat_id}/messages", post(chats::send_message))
        .layer(middleware::from_fn(require_auth))
        .with_state(app_state);

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Admatch server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
