use std::sync::Arc;

use async_trait::async_trait;
use auth::IdentityClaims;
use auth::PasswordHasher;
use auth::TokenAuthority;

use crate::domain::paging::channel::PageQueryChannel;
use crate::domain::paging::models::PageRequest;
use crate::domain::paging::models::PageResult;
use crate::domain::user::models::DirectoryListing;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::UserRecord;
use crate::user::errors::DirectoryError;
use crate::user::ports::DirectoryServicePort;
use crate::user::ports::UserDirectory;

/// Domain service implementation for directory operations.
///
/// Concrete implementation of DirectoryServicePort composing the credential
/// hasher, the token authority, the user directory, and the paginated query
/// channel.
pub struct DirectoryService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    password_hasher: PasswordHasher,
    token_authority: TokenAuthority,
    page_queries: PageQueryChannel,
}

impl<D> DirectoryService<D>
where
    D: UserDirectory,
{
    /// Create a new directory service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - User storage implementation
    /// * `password_hasher` - Credential hashing implementation
    /// * `token_authority` - Token issuing and verification implementation
    /// * `page_queries` - Channel feeding the page query consumer
    ///
    /// # Returns
    /// Configured directory service instance
    pub fn new(
        directory: Arc<D>,
        password_hasher: PasswordHasher,
        token_authority: TokenAuthority,
        page_queries: PageQueryChannel,
    ) -> Self {
        Self {
            directory,
            password_hasher,
            token_authority,
            page_queries,
        }
    }
}

#[async_trait]
impl<D> DirectoryServicePort for DirectoryService<D>
where
    D: UserDirectory,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<UserId, DirectoryError> {
        // Hash before touching the directory; the store's check-then-append
        // is the only critical section.
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| DirectoryError::Internal(format!("Password hashing failed: {}", e)))?;

        let record = UserRecord {
            id: UserId::new(),
            email: command.email,
            first_name: command.first_name,
            last_name: command.last_name,
            company: command.company,
            password_hash,
        };

        let created = self.directory.insert(record).await?;

        tracing::info!(user_id = %created.id, "User registered");

        Ok(created.id)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, DirectoryError> {
        let record = self
            .directory
            .find_by_email(email)
            .await?
            .ok_or(DirectoryError::AuthenticationFailed)?;

        // A corrupt stored digest verifies as false, which reads the same
        // as a wrong password to the caller.
        if !self.password_hasher.verify(password, &record.password_hash) {
            return Err(DirectoryError::AuthenticationFailed);
        }

        self.token_authority
            .issue(&record.id.to_string(), record.email.as_str())
            .map_err(|e| DirectoryError::Internal(format!("Token issuance failed: {}", e)))
    }

    async fn verify(&self, token: &str) -> Result<IdentityClaims, DirectoryError> {
        self.token_authority.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            DirectoryError::InvalidToken
        })
    }

    async fn get_one(&self, id: &UserId) -> Result<UserProfile, DirectoryError> {
        self.directory
            .find_by_id(id)
            .await?
            .map(|record| UserProfile::from(&record))
            .ok_or(DirectoryError::NotFound(id.to_string()))
    }

    async fn list_all(&self) -> Result<DirectoryListing, DirectoryError> {
        let users = self.directory.list_all().await?;
        let total = users.len();

        Ok(DirectoryListing { users, total })
    }

    async fn query_page(&self, page: i64, limit: i64) -> Result<PageResult, DirectoryError> {
        let request = PageRequest::new(page, limit)?;

        self.page_queries.submit(request).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserPreview;
    use crate::outbound::repositories::InMemoryUserDirectory;

    // Define mocks in the test module using mockall
    mock! {
        pub TestUserDirectory {}

        #[async_trait]
        impl UserDirectory for TestUserDirectory {
            async fn insert(&self, record: UserRecord) -> Result<UserRecord, DirectoryError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, DirectoryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DirectoryError>;
            async fn list_all(&self) -> Result<Vec<UserPreview>, DirectoryError>;
            async fn slice(&self, offset: usize, count: usize) -> Result<Vec<UserPreview>, DirectoryError>;
            async fn count(&self) -> Result<usize, DirectoryError>;
        }
    }

    const TEST_SECRET: &[u8] = b"test-secret-key-for-token-signing";

    fn service_with(directory: MockTestUserDirectory) -> DirectoryService<MockTestUserDirectory> {
        let directory = Arc::new(directory);
        let page_queries = PageQueryChannel::new(Arc::clone(&directory));

        DirectoryService::new(
            directory,
            PasswordHasher::new(),
            TokenAuthority::new(TEST_SECRET),
            page_queries,
        )
    }

    fn register_command(email: &str, password: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            email: EmailAddress::new(email.to_string()).unwrap(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            company: "Example Corp".to_string(),
            password: password.to_string(),
        }
    }

    fn stored_record(email: &str, password: &str) -> UserRecord {
        UserRecord {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            company: "Example Corp".to_string(),
            password_hash: PasswordHasher::new().hash(password).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut directory = MockTestUserDirectory::new();

        // Set up mock expectations
        directory
            .expect_insert()
            .withf(|record| {
                record.email.as_str() == "test@example.com"
                    && record.first_name == "Test"
                    && record.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|record| Ok(record));

        let service = service_with(directory);

        let result = service
            .register(register_command("test@example.com", "password123"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut directory = MockTestUserDirectory::new();

        directory.expect_insert().times(1).returning(|record| {
            Err(DirectoryError::DuplicateEmail(
                record.email.as_str().to_string(),
            ))
        });

        let service = service_with(directory);

        let result = service
            .register(register_command("test@example.com", "password123"))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            DirectoryError::DuplicateEmail(_)
        ));
    }

    #[tokio::test]
    async fn test_login_success_issues_verifiable_token() {
        let mut directory = MockTestUserDirectory::new();

        let record = stored_record("test@example.com", "password123");
        let user_id = record.id;

        directory
            .expect_find_by_email()
            .withf(|email| email == "test@example.com")
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        let service = service_with(directory);

        let token = service.login("test@example.com", "password123").await.unwrap();
        let claims = service.verify(&token).await.unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut directory = MockTestUserDirectory::new();

        let record = stored_record("test@example.com", "password123");
        directory
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        let service = service_with(directory);

        let result = service.login("test@example.com", "not-the-password").await;

        assert!(matches!(
            result.unwrap_err(),
            DirectoryError::AuthenticationFailed
        ));
    }

    #[tokio::test]
    async fn test_login_unknown_email_reads_like_wrong_password() {
        let mut directory = MockTestUserDirectory::new();

        directory
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service_with(directory);

        let result = service.login("nobody@example.com", "password123").await;

        assert!(matches!(
            result.unwrap_err(),
            DirectoryError::AuthenticationFailed
        ));
    }

    #[tokio::test]
    async fn test_login_with_corrupt_stored_hash() {
        let mut directory = MockTestUserDirectory::new();

        let mut record = stored_record("test@example.com", "password123");
        record.password_hash = "not-an-argon2-digest".to_string();

        directory
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        let service = service_with(directory);

        let result = service.login("test@example.com", "password123").await;

        assert!(matches!(
            result.unwrap_err(),
            DirectoryError::AuthenticationFailed
        ));
    }

    #[tokio::test]
    async fn test_verify_rejects_garbage_token() {
        let service = service_with(MockTestUserDirectory::new());

        let result = service.verify("not-a-token").await;

        assert!(matches!(result.unwrap_err(), DirectoryError::InvalidToken));
    }

    #[tokio::test]
    async fn test_verify_rejects_token_signed_with_other_secret() {
        let service = service_with(MockTestUserDirectory::new());

        let foreign_token = TokenAuthority::new(b"some-other-secret-entirely")
            .issue(&UserId::new().to_string(), "test@example.com")
            .unwrap();

        let result = service.verify(&foreign_token).await;

        assert!(matches!(result.unwrap_err(), DirectoryError::InvalidToken));
    }

    #[tokio::test]
    async fn test_get_one_success() {
        let mut directory = MockTestUserDirectory::new();

        let record = stored_record("test@example.com", "password123");
        let user_id = record.id;

        directory
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        let service = service_with(directory);

        let profile = service.get_one(&user_id).await.unwrap();

        assert_eq!(profile.id, user_id);
        assert_eq!(profile.email.as_str(), "test@example.com");
        assert_eq!(profile.first_name, "Test");
        assert_eq!(profile.company, "Example Corp");
    }

    #[tokio::test]
    async fn test_get_one_not_found() {
        let mut directory = MockTestUserDirectory::new();

        directory
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = service_with(directory);

        let result = service.get_one(&UserId::new()).await;

        assert!(matches!(result.unwrap_err(), DirectoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_all_reports_total() {
        let mut directory = MockTestUserDirectory::new();

        let previews: Vec<UserPreview> = ["a@example.com", "b@example.com", "c@example.com"]
            .iter()
            .map(|email| UserPreview {
                id: UserId::new(),
                email: EmailAddress::new(email.to_string()).unwrap(),
            })
            .collect();

        let returned_previews = previews.clone();
        directory
            .expect_list_all()
            .times(1)
            .returning(move || Ok(returned_previews.clone()));

        let service = service_with(directory);

        let listing = service.list_all().await.unwrap();

        assert_eq!(listing.total, 3);
        assert_eq!(listing.users.len(), 3);
        assert_eq!(listing.users[0].email.as_str(), "a@example.com");
    }

    #[tokio::test]
    async fn test_query_page_echoes_request() {
        let mut directory = MockTestUserDirectory::new();

        directory
            .expect_slice()
            .withf(|offset, count| *offset == 5 && *count == 5)
            .times(1)
            .returning(|_, _| Ok(Vec::new()));
        directory.expect_count().times(1).returning(|| Ok(12));

        let service = service_with(directory);

        let result = service.query_page(2, 5).await.unwrap();

        assert_eq!(result.page, 2);
        assert_eq!(result.limit, 5);
        assert_eq!(result.total, 12);
        assert!(result.users.is_empty());
    }

    #[tokio::test]
    async fn test_query_page_invalid_limit_never_reaches_directory() {
        let mut directory = MockTestUserDirectory::new();

        directory.expect_slice().times(0);
        directory.expect_count().times(0);

        let service = service_with(directory);

        let result = service.query_page(1, 7).await;

        assert!(matches!(
            result.unwrap_err(),
            DirectoryError::InvalidPageRequest(_)
        ));
    }

    #[tokio::test]
    async fn test_query_page_rejects_zero_page() {
        let service = service_with(MockTestUserDirectory::new());

        let result = service.query_page(0, 10).await;

        assert!(matches!(
            result.unwrap_err(),
            DirectoryError::InvalidPageRequest(_)
        ));
    }

    #[tokio::test]
    async fn test_concurrent_registration_single_winner() {
        let directory = Arc::new(InMemoryUserDirectory::new());
        let page_queries = PageQueryChannel::new(Arc::clone(&directory));
        let service = DirectoryService::new(
            Arc::clone(&directory),
            PasswordHasher::new(),
            TokenAuthority::new(TEST_SECRET),
            page_queries,
        );

        let (first, second) = tokio::join!(
            service.register(register_command("shared@example.com", "password-one")),
            service.register(register_command("shared@example.com", "password-two")),
        );

        let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);

        let loser = if first.is_err() { first } else { second };
        assert!(matches!(
            loser.unwrap_err(),
            DirectoryError::DuplicateEmail(_)
        ));

        assert_eq!(directory.count().await.unwrap(), 1);
    }
}
