use std::time::Duration;

use anyhow::Result;
#[cfg(feature = "blocking")]
use ergo_api_sdk::BlockingClient;
#[cfg(feature = "async")]
use ergo_api_sdk::{
    Client, Error, ErrorKind, InitWalletRequest, Miner, Paging, RestoreWalletRequest,
    SortDirection, TransportErrorKind, UnlockWalletRequest,
};
use ergo_api_sdk::RetryConfig;
#[cfg(feature = "async")]
use http::StatusCode;
use serde_json::json;
#[cfg(feature = "blocking")]
use tokio::task;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, header_exists, method, path, query_param},
};

const BLOCK_ID: &str = "a6e4a6b3e1f2a0a9d0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9c0d1e2f3";

fn blocks_page() -> serde_json::Value {
    json!({
        "items": [{
            "id": BLOCK_ID,
            "height": 414474,
            "timestamp": 1_609_459_200_000u64,
            "transactionsCount": 3,
            "miner": { "address": "88dhgzEuTXaRvR2VKsnjYqDSUHa4mTFRMUEB6j", "name": "BTC.com" },
            "size": 1285,
            "difficulty": 2_161_823_682_560u64,
            "minerReward": 67_500_000_000u64
        }],
        "total": 414475
    })
}

fn wallet_status(unlocked: bool) -> serde_json::Value {
    json!({
        "isInitialized": true,
        "isUnlocked": unlocked,
        "changeAddress": if unlocked { "9fRusAarL1KkrWQVsxSRVYnvWxaAT2A96cKtNn9tvPh5XUyCisr" } else { "" },
        "walletHeight": 414474,
        "error": ""
    })
}

async fn mock_get(
    server: &MockServer,
    endpoint: &str,
    response: ResponseTemplate,
    expected: u64,
) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .expect(expected)
        .up_to_n_times(expected)
        .mount(server)
        .await;
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_blocks_list_sends_paging_and_decodes_miner() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/blocks"))
        .and(query_param("offset", "20"))
        .and(query_param("limit", "10"))
        .and(query_param("sortBy", "height"))
        .and(query_param("sortDirection", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(blocks_page()))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = Client::new(format!("{}/api/v0", server.uri()))?;
    let paging = Paging::new(20, 10).sort("height", SortDirection::Desc);
    let page = client.blocks().list(&paging).await?;

    assert_eq!(page.total, 414475);
    assert_eq!(page.items.len(), 1);
    assert_eq!(
        page.items[0].miner,
        Miner::new("88dhgzEuTXaRvR2VKsnjYqDSUHa4mTFRMUEB6j", "BTC.com")
    );
    assert!(page.has_more(paging.offset));

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_blocks_get_and_at_height() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        &format!("/blocks/{BLOCK_ID}"),
        ResponseTemplate::new(200).set_body_json(json!({
            "block": { "header": { "id": BLOCK_ID, "height": 414474 } },
            "references": { "previousId": "00", "nextId": null }
        })),
        1,
    )
    .await;
    mock_get(
        &server,
        "/blocks/at/414474",
        ResponseTemplate::new(200).set_body_json(json!([BLOCK_ID])),
        1,
    )
    .await;

    let client = Client::new(server.uri())?;

    let block = client.blocks().get(BLOCK_ID).await?;
    assert_eq!(block["block"]["header"]["height"], 414474);

    let ids = client.blocks().at_height(414474).await?;
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].as_str(), BLOCK_ID);

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_stats_endpoints() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/stats",
        ResponseTemplate::new(200).set_body_json(json!({ "blockSummary": { "total": 720 } })),
        1,
    )
    .await;
    mock_get(
        &server,
        "/stats/forks",
        ResponseTemplate::new(200).set_body_json(json!([])),
        1,
    )
    .await;

    let client = Client::new(server.uri())?;
    assert_eq!(client.stats().info().await?["blockSummary"]["total"], 720);
    assert!(client.stats().forks().await?.is_array());

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_wallet_unlock_posts_pass_with_api_key() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallet/unlock"))
        .and(header("api_key", "hello"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "pass": "hunter2" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wallet/status"))
        .and(header("api_key", "hello"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_status(true)))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?.api_key("hello").build()?;

    client
        .wallet()
        .unlock(&UnlockWalletRequest::new("hunter2"))
        .await?;
    let status = client.wallet().status().await?;
    assert!(status.is_unlocked);
    assert!(status.change_address.is_some());

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_wallet_lifecycle() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallet/init"))
        .and(body_json(json!({ "pass": "pw", "mnemonicPass": "extra" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "mnemonic": "slow silly start" })),
        )
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mock_get(&server, "/wallet/lock", ResponseTemplate::new(200), 1).await;
    mock_get(
        &server,
        "/wallet/addresses",
        ResponseTemplate::new(200).set_body_json(json!(["9fRusAarL1Kk", "9hN3Sbn5w8Xv"])),
        1,
    )
    .await;

    let client = Client::builder(server.uri())?.api_key("hello").build()?;

    let created = client
        .wallet()
        .init(&InitWalletRequest::new("pw").with_mnemonic_pass("extra"))
        .await?;
    assert_eq!(created.mnemonic.expose(), "slow silly start");
    assert_eq!(format!("{created:?}"), "InitWalletResult { mnemonic: <redacted> }");

    let addresses = client.wallet().addresses().await?;
    assert_eq!(addresses.len(), 2);

    client.wallet().lock().await?;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_locked_wallet_is_bad_request_with_detail() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/wallet/balances",
        ResponseTemplate::new(400).set_body_json(json!({
            "error": 400,
            "reason": "bad.request",
            "detail": "Wallet is locked"
        })),
        1,
    )
    .await;

    let client = Client::builder(server.uri())?.api_key("hello").build()?;
    let err = client
        .wallet()
        .balances()
        .await
        .expect_err("expected HTTP error");

    assert_eq!(err.kind(), ErrorKind::BadRequest);
    match err {
        Error::BadRequest(http) => {
            assert_eq!(http.status, StatusCode::BAD_REQUEST);
            assert_eq!(http.message.as_deref(), Some("Wallet is locked"));
            assert_eq!(http.reason.as_deref(), Some("bad.request"));
            assert_eq!(http.path(), "/wallet/balances");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_invalid_api_key_is_auth_error() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/wallet/status",
        ResponseTemplate::new(403).set_body_json(json!({
            "error": 403,
            "reason": "Forbidden",
            "detail": "Invalid api key"
        })),
        1,
    )
    .await;

    let client = Client::builder(server.uri())?.api_key("wrong").build()?;
    let err = client.wallet().status().await.expect_err("expected 403");
    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_node_info_decode_error_keeps_snippet() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/info",
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
        1,
    )
    .await;

    let client = Client::new(server.uri())?;
    let err = client.info().info().await.expect_err("expected decode error");

    match err {
        Error::Decode {
            status,
            path,
            body_snippet,
            ..
        } => {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(&*path, "/info");
            assert!(body_snippet.unwrap_or_default().contains("maintenance"));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_wallet_init_decode_error_hides_mnemonic() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallet/init"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "mnemonic": ["slow", "silly", "start"] })),
        )
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?.api_key("hello").build()?;
    let err = client
        .wallet()
        .init(&InitWalletRequest::new("pw"))
        .await
        .expect_err("expected decode error");

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(matches!(&err, Error::Decode { body_snippet: None, .. }));
    assert!(!format!("{err:?}").contains("silly"));
    assert!(!err.to_string().contains("silly"));

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_wallet_restore_posts_mnemonic() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallet/restore"))
        .and(header("api_key", "hello"))
        .and(body_json(json!({
            "pass": "pw",
            "mnemonic": "slow silly start",
            "mnemonicPass": "extra"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wallet/restore"))
        .and(body_json(json!({ "pass": "pw", "mnemonic": "slow silly" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": 400,
            "reason": "bad.request",
            "detail": "Invalid mnemonic"
        })))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?.api_key("hello").build()?;

    client
        .wallet()
        .restore(&RestoreWalletRequest::new("pw", "slow silly start").with_mnemonic_pass("extra"))
        .await?;

    let err = client
        .wallet()
        .restore(&RestoreWalletRequest::new("pw", "slow silly"))
        .await
        .expect_err("expected bad request");
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    let http = err.http().expect("http details");
    assert_eq!(http.message.as_deref(), Some("Invalid mnemonic"));
    assert_eq!(http.reason.as_deref(), Some("bad.request"));
    assert_eq!(http.body_snippet, None);

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_retry_replays_on_server_errors() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(&server, "/stats", ResponseTemplate::new(503), 1).await;
    mock_get(
        &server,
        "/stats",
        ResponseTemplate::new(200).set_body_json(json!({ "ok": true })),
        1,
    )
    .await;

    let client = Client::builder(server.uri())?
        .with_retry(3, Duration::from_millis(5))
        .build()?;

    let stats = client.stats().info().await?;
    assert_eq!(stats["ok"], true);

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_retry_honours_retry_after_on_rate_limit() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/blocks",
        ResponseTemplate::new(429).append_header("Retry-After", "0"),
        1,
    )
    .await;
    mock_get(
        &server,
        "/blocks",
        ResponseTemplate::new(200).set_body_json(blocks_page()),
        1,
    )
    .await;

    let client = Client::builder(server.uri())?
        .retry_config(RetryConfig {
            max_retries: 1,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            jitter: false,
            retry_non_idempotent: false,
            respect_retry_after: true,
        })
        .build()?;

    let page = client.blocks().list(&Paging::default()).await?;
    assert_eq!(page.items.len(), 1);

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_unlock_is_not_retried_by_default() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallet/unlock"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?
        .api_key("hello")
        .with_retry(3, Duration::from_millis(1))
        .build()?;

    let err = client
        .wallet()
        .unlock(&UnlockWalletRequest::new("pw"))
        .await
        .expect_err("expected 503");
    assert!(err.is_retryable());
    assert_eq!(err.kind(), ErrorKind::Api);

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_error_snippet_redacts_api_key() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/wallet/status",
        ResponseTemplate::new(500).set_body_string("bad key supersecret"),
        1,
    )
    .await;

    let client = Client::builder(server.uri())?
        .api_key("supersecret")
        .build()?;
    let err = client.wallet().status().await.expect_err("expected 500");

    match err {
        Error::Api(http) => {
            let snippet = http.body_snippet.as_deref().unwrap_or_default();
            assert!(!snippet.contains("supersecret"));
            assert!(snippet.contains("<redacted>"));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn async_request_hook_adds_header_on_every_attempt() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/info"))
        .and(header_exists("x-trace"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .and(header("x-trace", "ergo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "ergo-node",
            "appVersion": "5.0.12",
            "fullHeight": null,
            "headersHeight": 12,
            "bestFullHeaderId": null,
            "stateType": "digest",
            "isMining": false,
            "peersCount": 1,
            "unconfirmedCount": 0
        })))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?
        .with_retry(1, Duration::from_millis(1))
        .request_hook(|ctx| {
            ctx.headers
                .insert("x-trace", http::HeaderValue::from_static("ergo"));
            Ok(())
        })
        .build()?;

    let info = client.info().info().await?;
    assert_eq!(info.full_height, None);
    assert_eq!(info.headers_height, Some(12));

    server.verify().await;
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test]
async fn async_connection_refused_is_transport_error() -> Result<()> {
    // Port 9 (discard) on localhost is not expected to accept HTTP.
    let client = Client::builder("http://127.0.0.1:9")?
        .connect_timeout(Duration::from_millis(500))
        .build()?;

    let err = client.info().info().await.expect_err("expected failure");
    match err {
        Error::Transport { kind, .. } => {
            assert!(matches!(
                kind,
                TransportErrorKind::Connect | TransportErrorKind::Timeout | TransportErrorKind::Other
            ));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
    Ok(())
}

#[cfg(feature = "async")]
#[tokio::test]
async fn async_connection_refused_reports_retries() -> Result<()> {
    let client = Client::builder("http://127.0.0.1:9")?
        .connect_timeout(Duration::from_millis(500))
        .with_retry(2, Duration::from_millis(1))
        .build()?;

    let err = client.info().info().await.expect_err("expected failure");
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_retryable());
    assert_eq!(err.retries(), 2);
    Ok(())
}

#[cfg(feature = "async")]
#[test]
fn builder_rejects_base_url_with_query() {
    let err = Client::builder("http://127.0.0.1:9053/?a=b")
        .err()
        .expect("expected invalid config");
    assert_eq!(err.kind(), ErrorKind::InvalidConfig);
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_wallet_unlock_with_retry() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallet/unlock"))
        .and(header("api_key", "hello"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wallet/unlock"))
        .and(header("api_key", "hello"))
        .and(body_json(json!({ "pass": "hunter2" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?
            .api_key("hello")
            .retry_config(RetryConfig {
                max_retries: 3,
                base_delay: Duration::from_millis(5),
                max_delay: Duration::from_millis(5),
                jitter: false,
                retry_non_idempotent: true,
                respect_retry_after: true,
            })
            .build()?;

        client
            .wallet()
            .unlock(&ergo_api_sdk::UnlockWalletRequest::new("hunter2"))?;
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_blocks_list_with_base_path() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/blocks"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(blocks_page()))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/api/v0", server.uri());
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::new(base_url)?;
        let page = client.blocks().list(&ergo_api_sdk::Paging::default())?;
        assert_eq!(page.items[0].miner.name, "BTC.com");
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_wallet_status_and_not_found() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/wallet/status",
        ResponseTemplate::new(200).set_body_json(wallet_status(false)),
        1,
    )
    .await;
    mock_get(
        &server,
        "/blocks/at/1",
        ResponseTemplate::new(404).set_body_json(json!({ "message": "not found" })),
        1,
    )
    .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.api_key("hello").build()?;

        let status = client.wallet().status()?;
        assert!(!status.is_unlocked);
        assert_eq!(status.change_address, None);

        let err = client.blocks().at_height(1).expect_err("expected 404");
        assert_eq!(err.kind(), ergo_api_sdk::ErrorKind::NotFound);
        assert_eq!(
            err.http().and_then(|h| h.message.as_deref()),
            Some("not found")
        );
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_stats_and_info() -> Result<()> {
    let server = MockServer::start().await;

    mock_get(
        &server,
        "/stats",
        ResponseTemplate::new(200).set_body_json(json!({ "blockSummary": { "total": 720 } })),
        1,
    )
    .await;
    mock_get(
        &server,
        "/stats/forks",
        ResponseTemplate::new(200).set_body_json(json!([{ "height": 10 }])),
        1,
    )
    .await;
    mock_get(
        &server,
        "/info",
        ResponseTemplate::new(200).set_body_json(json!({
            "name": "ergo-node",
            "appVersion": "5.0.12",
            "fullHeight": 414474,
            "headersHeight": 414474,
            "bestFullHeaderId": BLOCK_ID,
            "stateType": "utxo",
            "isMining": false,
            "peersCount": 30,
            "unconfirmedCount": 4
        })),
        1,
    )
    .await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::new(base_url)?;

        assert_eq!(client.stats().info()?["blockSummary"]["total"], 720);
        assert_eq!(client.stats().forks()?[0]["height"], 10);

        let info = client.info().info()?;
        assert_eq!(info.full_height, Some(414474));
        assert_eq!(
            info.best_full_header_id.as_ref().map(|id| id.as_str()),
            Some(BLOCK_ID)
        );
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}

#[cfg(feature = "blocking")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_wallet_lifecycle() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallet/restore"))
        .and(header("api_key", "hello"))
        .and(body_json(json!({
            "pass": "pw",
            "mnemonic": "slow silly start",
            "mnemonicPass": "extra"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wallet/init"))
        .and(header("api_key", "hello"))
        .and(body_json(json!({ "pass": "pw" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "mnemonic": "slow silly start" })),
        )
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mock_get(
        &server,
        "/wallet/addresses",
        ResponseTemplate::new(200).set_body_json(json!(["9fRusAarL1Kk"])),
        1,
    )
    .await;
    mock_get(
        &server,
        "/wallet/balances",
        ResponseTemplate::new(200).set_body_json(json!({ "height": 414474, "balance": 1000 })),
        1,
    )
    .await;
    mock_get(&server, "/wallet/lock", ResponseTemplate::new(200), 1).await;

    let base_url = server.uri();
    task::spawn_blocking(move || -> Result<()> {
        let client = BlockingClient::builder(base_url)?.api_key("hello").build()?;
        let wallet = client.wallet();

        wallet.restore(
            &ergo_api_sdk::RestoreWalletRequest::new("pw", "slow silly start")
                .with_mnemonic_pass("extra"),
        )?;
        let created = wallet.init(&ergo_api_sdk::InitWalletRequest::new("pw"))?;
        assert_eq!(created.mnemonic.expose(), "slow silly start");

        let addresses = wallet.addresses()?;
        assert_eq!(addresses[0].as_str(), "9fRusAarL1Kk");
        assert_eq!(wallet.balances()?["balance"], 1000);
        wallet.lock()?;
        Ok(())
    })
    .await??;

    server.verify().await;
    Ok(())
}
