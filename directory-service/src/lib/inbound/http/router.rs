use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_user::get_user;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::query_page::query_page;
use super::handlers::register::register;
use super::handlers::verify_token::verify_token;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::service::DirectoryService;
use crate::outbound::repositories::InMemoryUserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub directory_service: Arc<DirectoryService<InMemoryUserDirectory>>,
}

pub fn create_router(directory_service: Arc<DirectoryService<InMemoryUserDirectory>>) -> Router {
    let state = AppState { directory_service };

    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/verify", post(verify_token))
        .route("/api/users", post(register))
        .route("/api/users", get(list_users))
        .route("/api/users/page", get(query_page));

    let protected_routes = Router::new()
        .route("/api/users/:user_id", get(get_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
