use async_trait::async_trait;
use auth::IdentityClaims;

use crate::domain::paging::models::PageResult;
use crate::domain::user::models::DirectoryListing;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserPreview;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::UserRecord;
use crate::user::errors::DirectoryError;

/// Port for directory service operations.
#[async_trait]
pub trait DirectoryServicePort: Send + Sync + 'static {
    /// Register a new user with validated fields.
    ///
    /// The plain text password is hashed before anything is stored; the
    /// email must not already be registered.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, names, company, and password
    ///
    /// # Returns
    /// Identifier of the created record
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Internal` - Password hashing failed
    async fn register(&self, command: RegisterUserCommand) -> Result<UserId, DirectoryError>;

    /// Authenticate a user and issue a signed identity token.
    ///
    /// # Arguments
    /// * `email` - Email address as supplied by the caller
    /// * `password` - Plain text password to check
    ///
    /// # Returns
    /// Signed token carrying the user's id and email
    ///
    /// # Errors
    /// * `AuthenticationFailed` - Unknown email or wrong password, indistinguishably
    /// * `Internal` - Token issuance failed
    async fn login(&self, email: &str, password: &str) -> Result<String, DirectoryError>;

    /// Verify a previously issued token.
    ///
    /// # Arguments
    /// * `token` - Encoded token string
    ///
    /// # Returns
    /// The claims embedded in the token
    ///
    /// # Errors
    /// * `InvalidToken` - Signature mismatch, malformed token, or expired lifetime
    async fn verify(&self, token: &str) -> Result<IdentityClaims, DirectoryError>;

    /// Retrieve one user profile by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Profile projection without the password hash
    ///
    /// # Errors
    /// * `NotFound` - No record with this id
    async fn get_one(&self, id: &UserId) -> Result<UserProfile, DirectoryError>;

    /// Retrieve the complete directory listing.
    ///
    /// # Returns
    /// All previews sorted by email, with the total record count
    async fn list_all(&self) -> Result<DirectoryListing, DirectoryError>;

    /// Request one page of the directory through the query channel.
    ///
    /// Raw values are validated before the request is enqueued.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    /// * `limit` - Page size, one of 5, 10, or 25
    ///
    /// # Returns
    /// The computed page echoing the requested page and limit
    ///
    /// # Errors
    /// * `InvalidPageRequest` - Page below 1 or unsupported limit
    /// * `Internal` - The query channel is no longer running
    async fn query_page(&self, page: i64, limit: i64) -> Result<PageResult, DirectoryError>;
}

/// Storage operations for the user directory.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Append a new record if its email is unused.
    ///
    /// The uniqueness check and the append are one atomic step; two
    /// concurrent inserts of the same email cannot both succeed.
    ///
    /// # Arguments
    /// * `record` - Complete record to store
    ///
    /// # Returns
    /// The stored record
    ///
    /// # Errors
    /// * `DuplicateEmail` - A record with this email already exists
    async fn insert(&self, record: UserRecord) -> Result<UserRecord, DirectoryError>;

    /// Retrieve a record by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Optional record (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, DirectoryError>;

    /// Retrieve a record by exact email match.
    ///
    /// The comparison is case-sensitive.
    ///
    /// # Arguments
    /// * `email` - Email address string
    ///
    /// # Returns
    /// Optional record (None if not found)
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DirectoryError>;

    /// Retrieve previews of every record, sorted by email.
    ///
    /// # Returns
    /// Vector of all previews in ascending email order
    async fn list_all(&self) -> Result<Vec<UserPreview>, DirectoryError>;

    /// Retrieve a window of previews in insertion order.
    ///
    /// The window is clipped to the stored records; an offset past the end
    /// yields an empty vector.
    ///
    /// # Arguments
    /// * `offset` - Records to skip from the start
    /// * `count` - Maximum previews to return
    ///
    /// # Returns
    /// Previews in insertion order
    async fn slice(&self, offset: usize, count: usize) -> Result<Vec<UserPreview>, DirectoryError>;

    /// Count all stored records.
    ///
    /// # Returns
    /// Total number of records
    async fn count(&self) -> Result<usize, DirectoryError>;
}
