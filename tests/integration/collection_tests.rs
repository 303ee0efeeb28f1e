use serde_json::{json, Value};
use species_rarity::collector::{collect_all, CollectionOutcome, HttpPageFetcher, PageFetcher};
use species_rarity::config::CollectorConfig;
use species_rarity::TransportError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/observations/species_counts";

/// Creates a collector configuration pointing at the mock server
pub fn create_test_config(base_url: &str, per_page: u32) -> CollectorConfig {
    CollectorConfig {
        base_url: base_url.to_string(),
        per_page,
        request_delay_ms: 10, // Very short for testing
        timeout_secs: 5,
        user_agent: "RarityTest/1.0".to_string(),
    }
}

/// Builds a species counts body with `count` numbered species
pub fn species_page(total: u64, first: u64, count: u64) -> Value {
    let results: Vec<Value> = (first..first + count)
        .map(|i| {
            json!({
                "count": i,
                "taxon": {
                    "name": format!("Species {}", i),
                    "preferred_common_name": format!("Common {}", i)
                }
            })
        })
        .collect();

    json!({
        "total_results": total,
        "page": 1,
        "per_page": count,
        "results": results
    })
}

#[tokio::test]
async fn test_fetch_page_sends_fixed_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("place_id", "6712"))
        .and(query_param("verifiable", "any"))
        .and(query_param("captive", "false"))
        .and(query_param("per_page", "500"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(species_page(2, 1, 2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 500);
    let fetcher = HttpPageFetcher::new(&config).expect("Failed to build fetcher");

    let page = fetcher.fetch_page(6712, 1).await.expect("Fetch failed");
    assert_eq!(page.total_results, 2);
    assert_eq!(page.results.len(), 2);
}

#[tokio::test]
async fn test_fetch_page_reports_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 500);
    let fetcher = HttpPageFetcher::new(&config).unwrap();

    let err = fetcher.fetch_page(1, 1).await.unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 429, .. }));
}

#[tokio::test]
async fn test_fetch_page_reports_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 500);
    let fetcher = HttpPageFetcher::new(&config).unwrap();

    let err = fetcher.fetch_page(1, 1).await.unwrap_err();
    assert!(matches!(err, TransportError::Decode { .. }));
}

#[tokio::test]
async fn test_fetch_page_reports_network_error() {
    // Nothing listens on the discard port
    let config = create_test_config("http://127.0.0.1:9", 500);
    let fetcher = HttpPageFetcher::new(&config).unwrap();

    let err = fetcher.fetch_page(1, 1).await.unwrap_err();
    assert!(matches!(err, TransportError::Network { .. }));
}

#[tokio::test]
async fn test_collect_all_pages_sum_to_total() {
    let mock_server = MockServer::start().await;

    // 7 species over pages of 3: 3 + 3 + 1
    for (page, first, count) in [("1", 1, 3), ("2", 4, 3), ("3", 7, 1)] {
        Mock::given(method("GET"))
            .and(path(ENDPOINT))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(200).set_body_json(species_page(7, first, count)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let config = create_test_config(&mock_server.uri(), 3);
    let fetcher = HttpPageFetcher::new(&config).unwrap();

    let outcome = collect_all(&fetcher, 42, &config).await.expect("Collection failed");
    let CollectionOutcome::Complete(set) = outcome else {
        panic!("expected complete outcome");
    };

    assert_eq!(set.records.len(), 7);
    assert_eq!(set.total_results, 7);
    assert_eq!(set.pages_fetched, 3);
    assert_eq!(set.records[0].display_name, "Common 1");
    assert_eq!(set.records[6].scientific_name.as_deref(), Some("Species 7"));
}

#[tokio::test]
async fn test_collect_all_aborts_on_failed_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(species_page(6, 1, 3)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 3);
    let fetcher = HttpPageFetcher::new(&config).unwrap();

    let err = collect_all(&fetcher, 42, &config).await.unwrap_err();
    assert_eq!(err.page, 2);
    assert!(matches!(err.cause, TransportError::Status { status: 502, .. }));
}

#[tokio::test]
async fn test_collect_all_stops_at_page_ceiling() {
    let mock_server = MockServer::start().await;

    // Every page claims the same total but only ever returns one species,
    // so the running count lags behind; ceil(4 / 2) + 1 = 3 pages at most.
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(species_page(4, 1, 1)))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 2);
    let fetcher = HttpPageFetcher::new(&config).unwrap();

    let outcome = collect_all(&fetcher, 42, &config).await.unwrap();
    let CollectionOutcome::Complete(set) = outcome else {
        panic!("expected complete outcome");
    };

    assert_eq!(set.pages_fetched, 3);
    assert_eq!(set.records.len(), 3);
    assert!(!set.is_complete());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}
