use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserPreviewData;
use crate::domain::user::models::DirectoryListing;
use crate::domain::user::ports::DirectoryServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListUsersResponseData>, ApiError> {
    state
        .directory_service
        .list_all()
        .await
        .map_err(ApiError::from)
        .map(|ref listing| ApiSuccess::new(StatusCode::OK, listing.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUsersResponseData {
    pub users: Vec<UserPreviewData>,
    pub total: usize,
}

impl From<&DirectoryListing> for ListUsersResponseData {
    fn from(listing: &DirectoryListing) -> Self {
        Self {
            users: listing.users.iter().map(UserPreviewData::from).collect(),
            total: listing.total,
        }
    }
}
