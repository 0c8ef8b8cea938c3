//! Shared helpers for integration tests.

#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

use axum_test::TestServer;
use workshop_server::mocks::MockRepository;
use workshop_server::{AppState, Config, build_router};
use workshop_server::config::{AuthConfig, CorsConfig, ServerConfig, StoreConfig};

/// Signing secret used by every test server.
pub const TEST_SECRET: &str = "test-secret-key";

/// Configuration pointing nowhere; tests never touch a real store.
pub fn test_config() -> Config {
    Config {
        store: StoreConfig {
            url: "redis://localhost:6379".to_string(),
            namespace: "test".to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: None,
        },
        auth: AuthConfig {
            admin_password: None,
            session_secret: TEST_SECRET.to_string(),
        },
        cors: CorsConfig {
            frontend_url: "http://localhost:5173".to_string(),
        },
    }
}

/// Build a test server over the given mock repository.
///
/// Cookies persist across requests so login sessions behave like a
/// browser's.
pub fn test_server(repo: MockRepository, admin_password: Option<&str>) -> TestServer {
    let config = test_config();
    let state = AppState::new(repo, admin_password.map(ToString::to_string), TEST_SECRET);

    let mut server = TestServer::new(build_router(state, &config)).expect("router should build");
    server.save_cookies();
    server
}

/// Log in with the given password, asserting success.
pub async fn login(server: &TestServer, password: &str) {
    let response = server
        .post("/api/admin/login")
        .json(&serde_json::json!({"password": password}))
        .await;
    response.assert_status_ok();
    response.assert_json(&serde_json::json!({"success": true}));
}
