#[cfg(test)]
mod integration_tests {
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{INDEX_MARKER, setup_test_app, setup_test_dist};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check() {
        let dist = setup_test_dist();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.frontend, "available");
    }

    #[tokio::test]
    async fn test_health_reports_missing_frontend() {
        let empty = tempfile::TempDir::new().unwrap();
        let server = TestServer::new(setup_test_app(empty.path())).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.frontend, "missing");
    }

    #[tokio::test]
    async fn test_serves_index_at_root() {
        let dist = setup_test_dist();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains(INDEX_MARKER));
    }

    #[tokio::test]
    async fn test_serves_static_files() {
        let dist = setup_test_dist();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        let response = server.get("/app.js").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), "console.log('chainfund');");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dist = setup_test_dist();
        let server = TestServer::new(setup_test_app(dist.path())).unwrap();

        for path in [
            "/assets/asset-1",
            "/u/crypto_pioneer",
            "/groups/dao-1/proposals/proposal-1",
            "/nimda",
            "/no/such/page",
        ] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            assert!(
                response.text().contains(INDEX_MARKER),
                "{} did not fall back to index.html",
                path
            );
        }
    }
}
