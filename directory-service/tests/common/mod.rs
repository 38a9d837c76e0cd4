use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenAuthority;
use chrono::Duration;
use directory_service::domain::paging::channel::PageQueryChannel;
use directory_service::domain::user::service::DirectoryService;
use directory_service::inbound::http::router::create_router;
use directory_service::outbound::repositories::InMemoryUserDirectory;

pub const TEST_TOKEN_SECRET: &[u8] = b"test-secret-key-for-token-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_token_ttl(Duration::seconds(3600)).await
    }

    /// Spawn with an explicit token lifetime; negative values mint
    /// already-expired tokens.
    pub async fn spawn_with_token_ttl(token_ttl: Duration) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let directory = Arc::new(InMemoryUserDirectory::new());
        let page_queries = PageQueryChannel::new(Arc::clone(&directory));
        let directory_service = Arc::new(DirectoryService::new(
            directory,
            PasswordHasher::new(),
            TokenAuthority::with_ttl(TEST_TOKEN_SECRET, token_ttl),
            page_queries,
        ));

        let router = create_router(directory_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register a user and return the created id
    pub async fn register_user(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/users")
            .json(&serde_json::json!({
                "email": email,
                "first_name": "Test",
                "last_name": "User",
                "company": "Example Corp",
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"]
            .as_str()
            .expect("Missing id in response")
            .to_string()
    }

    /// Login and return the issued token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token in response")
            .to_string()
    }
}
