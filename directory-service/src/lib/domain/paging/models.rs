use crate::domain::user::models::UserPreview;
use crate::paging::errors::PageRequestError;

/// Validated request for one page of the directory.
///
/// Construction is the single validation point: an existing PageRequest
/// always holds a 1-based page and an allowed limit, so nothing invalid
/// can enter the query channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Page sizes accepted by the directory.
    pub const ALLOWED_LIMITS: [i64; 3] = [5, 10, 25];

    /// Validate raw page and limit values into a request.
    ///
    /// Pages are 1-based: the first page is `page = 1`.
    ///
    /// # Arguments
    /// * `page` - Requested page number
    /// * `limit` - Requested page size
    ///
    /// # Returns
    /// Validated PageRequest value object
    ///
    /// # Errors
    /// * `PageOutOfRange` - Page below 1 or beyond the representable range
    /// * `UnsupportedLimit` - Limit not one of 5, 10, or 25
    pub fn new(page: i64, limit: i64) -> Result<Self, PageRequestError> {
        if page < 1 || page > i64::from(u32::MAX) {
            return Err(PageRequestError::PageOutOfRange(page));
        }
        if !Self::ALLOWED_LIMITS.contains(&limit) {
            return Err(PageRequestError::UnsupportedLimit(limit));
        }

        Ok(Self {
            page: page as u32,
            limit: limit as u32,
        })
    }

    /// Get the 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Get the page size.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Offset of this page into the insertion-ordered directory.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.limit as usize
    }
}

/// One computed page of the directory.
///
/// `page` and `limit` always echo the request that produced the result, so
/// a submitter can match a result to what it asked for.
#[derive(Debug, Clone)]
pub struct PageResult {
    pub users: Vec<UserPreview>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}
