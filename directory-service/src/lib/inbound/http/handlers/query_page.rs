use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserPreviewData;
use crate::domain::paging::models::PageResult;
use crate::domain::user::ports::DirectoryServicePort;
use crate::inbound::http::router::AppState;

/// Query parameters for paginated listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageQueryParams {
    page: Option<i64>,
    limit: Option<i64>,
}

pub async fn query_page(
    State(state): State<AppState>,
    Query(params): Query<PageQueryParams>,
) -> Result<ApiSuccess<PageResponseData>, ApiError> {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(10);

    state
        .directory_service
        .query_page(page, limit)
        .await
        .map_err(ApiError::from)
        .map(|ref result| ApiSuccess::new(StatusCode::OK, result.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResponseData {
    pub users: Vec<UserPreviewData>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

impl From<&PageResult> for PageResponseData {
    fn from(result: &PageResult) -> Self {
        Self {
            users: result.users.iter().map(UserPreviewData::from).collect(),
            total: result.total,
            page: result.page,
            limit: result.limit,
        }
    }
}
