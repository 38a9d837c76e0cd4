use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::DirectoryServicePort;
use crate::inbound::http::router::AppState;

pub async fn verify_token(
    State(state): State<AppState>,
    Json(body): Json<VerifyTokenRequestBody>,
) -> Result<ApiSuccess<VerifyTokenResponseData>, ApiError> {
    state
        .directory_service
        .verify(&body.token)
        .await
        .map_err(ApiError::from)
        .map(|claims| {
            ApiSuccess::new(
                StatusCode::OK,
                VerifyTokenResponseData {
                    subject: claims.sub,
                    email: claims.email,
                    issued_at: claims.iat,
                    expires_at: claims.exp,
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyTokenRequestBody {
    token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyTokenResponseData {
    pub subject: String,
    pub email: String,
    pub issued_at: i64,
    pub expires_at: i64,
}
