//! Pipeline ordering and static-mount independence tests.

use opdeck::{Bootstrap, Shutdown};

mod common;

#[tokio::test]
async fn static_mount_serves_while_composition_is_pending() {
    let assets = tempfile::tempdir().unwrap();
    common::write_dashboard(assets.path());
    let config = common::test_config(assets.path());
    let shutdown = Shutdown::new();

    let bound = Bootstrap::new(config).bind().await.unwrap();
    let server = bound.start(&shutdown);
    let addr = server.handle().local_addr();

    // The composition branch never resolves; requests must not depend on it.
    tokio::select! {
        _ = server.compose(&common::PendingInitializer) => {
            unreachable!("pending initializer resolved")
        }
        () = async {
            let dash = reqwest::get(format!("http://{addr}/dashboard/index.html"))
                .await
                .unwrap();
            assert_eq!(dash.status(), 200);
            assert_eq!(dash.text().await.unwrap(), "<html>deck</html>");

            let asset = reqwest::get(format!("http://{addr}/dashboard/app.js"))
                .await
                .unwrap();
            assert_eq!(asset.status(), 200);

            let api = reqwest::get(format!("http://{addr}/api/ping")).await.unwrap();
            assert_eq!(api.status(), 404);
        } => {}
    }

    assert!(!server.is_composed());
    shutdown.trigger();
    server.wait().await.unwrap();
}

#[tokio::test]
async fn synchronous_units_keep_their_order_after_install() {
    let assets = tempfile::tempdir().unwrap();
    common::write_dashboard(assets.path());
    let config = common::test_config(assets.path());
    let shutdown = Shutdown::new();

    let bound = Bootstrap::new(config).bind().await.unwrap();
    let server = bound.start(&shutdown);
    server.compose(&common::ApiInitializer::new()).await.unwrap();

    let addr = server.handle().local_addr();

    // The dashboard mount was installed before the external handler and
    // still answers first for its prefix.
    let dash = reqwest::get(format!("http://{addr}/dashboard/index.html"))
        .await
        .unwrap();
    assert_eq!(dash.status(), 200);
    assert_eq!(dash.text().await.unwrap(), "<html>deck</html>");

    // The installed handler answers behind it.
    let api = reqwest::get(format!("http://{addr}/api/ping")).await.unwrap();
    assert_eq!(api.status(), 200);

    // Routes neither unit knows remain not found.
    let other = reqwest::get(format!("http://{addr}/nothing/here")).await.unwrap();
    assert_eq!(other.status(), 404);

    shutdown.trigger();
    server.wait().await.unwrap();
}

#[tokio::test]
async fn unknown_dashboard_paths_fall_back_to_index() {
    let assets = tempfile::tempdir().unwrap();
    common::write_dashboard(assets.path());
    let config = common::test_config(assets.path());
    let shutdown = Shutdown::new();

    let bound = Bootstrap::new(config).bind().await.unwrap();
    let server = bound.start(&shutdown);
    let addr = server.handle().local_addr();

    let response = reqwest::get(format!("http://{addr}/dashboard/views/table/42"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "<html>deck</html>");

    shutdown.trigger();
    server.wait().await.unwrap();
}

#[tokio::test]
async fn cross_origin_policy_applies_to_the_whole_pipeline() {
    let assets = tempfile::tempdir().unwrap();
    common::write_dashboard(assets.path());
    let config = common::test_config(assets.path());
    let shutdown = Shutdown::new();

    let bound = Bootstrap::new(config).bind().await.unwrap();
    let server = bound.start(&shutdown);
    let addr = server.handle().local_addr();

    let client = reqwest::Client::new();

    // Applies to the static mount...
    let dash = client
        .get(format!("http://{addr}/dashboard/index.html"))
        .header("origin", "http://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(
        dash.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    // ...and to slot-routed requests, composed or not.
    let api = client
        .get(format!("http://{addr}/api/ping"))
        .header("origin", "http://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(api.status(), 404);
    assert_eq!(
        api.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    shutdown.trigger();
    server.wait().await.unwrap();
}

#[tokio::test]
async fn requests_carry_a_request_id() {
    let assets = tempfile::tempdir().unwrap();
    common::write_dashboard(assets.path());
    let config = common::test_config(assets.path());
    let shutdown = Shutdown::new();

    let bound = Bootstrap::new(config).bind().await.unwrap();
    let server = bound.start(&shutdown);
    let addr = server.handle().local_addr();

    let response = reqwest::get(format!("http://{addr}/dashboard/index.html"))
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    shutdown.trigger();
    server.wait().await.unwrap();
}
