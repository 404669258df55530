//! Integration tests against a live DocuVault backend.
//!
//! These tests require a running backend HTTP server. Set the
//! TEST_BASE_URL environment variable to specify the server URL.
//!
//! Example:
//! ```sh
//! export TEST_BASE_URL="http://127.0.0.1:8000"
//! export TEST_EMAIL="admin@example.com"
//! export TEST_PASSWORD="password"
//! cargo test --test integration_tests -- --ignored
//! ```
//!
//! Note: These tests are marked with #[ignore] because they require
//! a running HTTP server. In CI, run them separately with a service
//! container.

use std::env;

use docuvault_client::api::{ApiClient, DocumentFilter};
use docuvault_client::session::{MemoryBackend, SessionStore};
use docuvault_client::views::login;
use docuvault_client::ClientConfig;

struct TestServer {
    client: ApiClient,
    session: SessionStore,
}

impl TestServer {
    fn new() -> Self {
        let base_url =
            env::var("TEST_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".into());
        let config = ClientConfig {
            base_url,
            ..ClientConfig::default()
        };
        Self {
            client: ApiClient::new(config).expect("failed to build client"),
            session: SessionStore::new(Box::<MemoryBackend>::default()),
        }
    }

    async fn login(&mut self) {
        let email = env::var("TEST_EMAIL").unwrap_or_else(|_| "admin@example.com".into());
        let password = env::var("TEST_PASSWORD").unwrap_or_else(|_| "password".into());
        login::submit(&self.client, &mut self.session, &email, &password)
            .await
            .expect("login failed");
    }

    fn token(&self) -> &str {
        self.session.token().expect("no session token")
    }
}

#[tokio::test]
#[ignore]
async fn test_login_and_list_documents() {
    let mut server = TestServer::new();
    server.login().await;

    let documents = server
        .client
        .list_documents(server.token(), &DocumentFilter::default())
        .await
        .expect("list failed");
    // A fresh install may legitimately be empty; the call itself must
    // succeed and decode.
    let _ = documents.len();
}

#[tokio::test]
#[ignore]
async fn test_reference_data_loads() {
    let mut server = TestServer::new();
    server.login().await;

    let categories = server
        .client
        .list_categories(Some(server.token()))
        .await
        .expect("categories failed");
    let departments = server
        .client
        .list_departments(Some(server.token()))
        .await
        .expect("departments failed");
    // Seeded installs carry at least the five stock departments.
    let _ = (categories, departments);
}

#[tokio::test]
#[ignore]
async fn test_filtered_list_round_trips() {
    let mut server = TestServer::new();
    server.login().await;

    let filter = DocumentFilter {
        search: "integration-test".into(),
        ..DocumentFilter::default()
    };
    server
        .client
        .list_documents(server.token(), &filter)
        .await
        .expect("filtered list failed");
}

#[tokio::test]
#[ignore]
async fn test_logout_clears_session() {
    let mut server = TestServer::new();
    server.login().await;
    assert!(server.session.is_authenticated());

    login::logout(&server.client, &mut server.session).await;
    assert!(!server.session.is_authenticated());
}
