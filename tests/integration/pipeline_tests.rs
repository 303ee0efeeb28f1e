use crate::collection_tests::{create_test_config, species_page};
use serde_json::json;
use species_rarity::config::Config;
use species_rarity::output::{csv_file_name, histogram_file_name};
use species_rarity::pipeline::{run_for_place, RunOutcome};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/observations/species_counts";

/// Full configuration pointing at the mock server and a scratch directory
fn create_pipeline_config(base_url: &str, per_page: u32, output: &TempDir) -> Config {
    let mut config = Config::default();
    config.api = create_test_config(base_url, per_page);
    config.output.directory = output.path().to_path_buf();
    config
}

#[tokio::test]
async fn test_full_report_single_region() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().expect("Failed to create temp dir");

    let page_one = json!({
        "total_results": 4,
        "page": 1,
        "per_page": 2,
        "results": [
            {"count": 120, "taxon": {"name": "Quercus agrifolia", "preferred_common_name": "Coast Live Oak"}},
            {"count": 1, "taxon": {"name": "Lynx rufus", "preferred_common_name": "Bobcat"}}
        ]
    });
    let page_two = json!({
        "total_results": 4,
        "page": 2,
        "per_page": 2,
        "results": [
            {"count": 1, "taxon": {"name": "Xantusia vigilis", "preferred_common_name": ""}},
            {"count": 15, "taxon": {"name": "Calypte anna", "preferred_common_name": "Anna's Hummingbird"}}
        ]
    });

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_one))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_two))
        .mount(&mock_server)
        .await;

    let config = create_pipeline_config(&mock_server.uri(), 2, &output);
    let report = run_for_place(&config, 6712).await.expect("Report failed");

    let csv_path = output.path().join(csv_file_name(6712));
    let svg_path = output.path().join(histogram_file_name(6712));
    assert!(csv_path.exists());
    assert!(svg_path.exists());

    // Rarest first; the two singletons keep their arrival order
    let content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Species,Scientific_Name,Observation_Count",
            "Bobcat,Lynx rufus,1",
            "Xantusia vigilis,Xantusia vigilis,1",
            "Anna's Hummingbird,Calypte anna,15",
            "Coast Live Oak,Quercus agrifolia,120",
        ]
    );

    match &report.outcome {
        RunOutcome::Completed {
            summary, rarest, ..
        } => {
            assert_eq!(summary.species, 4);
            assert_eq!(summary.singletons, 2);
            assert_eq!(rarest.len(), 4);
            assert_eq!(rarest[0].display_name, "Bobcat");
        }
        RunOutcome::NoData => panic!("expected completed report"),
    }
}

#[tokio::test]
async fn test_empty_region_produces_no_files() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"total_results": 0, "page": 1, "per_page": 500, "results": []})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_pipeline_config(&mock_server.uri(), 500, &output);
    let report = run_for_place(&config, 99).await.expect("Report failed");

    assert!(report.is_no_data());
    assert!(!output.path().join(csv_file_name(99)).exists());
    assert!(!output.path().join(histogram_file_name(99)).exists());
}

#[tokio::test]
async fn test_transport_failure_aborts_without_output() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(species_page(4, 1, 2)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = create_pipeline_config(&mock_server.uri(), 2, &output);
    let err = run_for_place(&config, 5).await.unwrap_err();

    assert_eq!(err.stage(), "collection");
    assert!(err.to_string().contains("page 2"));
    assert!(!output.path().join(csv_file_name(5)).exists());
    assert!(!output.path().join(histogram_file_name(5)).exists());
}

#[tokio::test]
async fn test_single_count_region_still_renders() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    let body = json!({
        "total_results": 3,
        "results": [
            {"count": 5, "taxon": {"name": "A a"}},
            {"count": 5, "taxon": {"name": "B b"}},
            {"count": 5, "taxon": {"name": "C c"}}
        ]
    });
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let config = create_pipeline_config(&mock_server.uri(), 500, &output);
    let report = run_for_place(&config, 3).await.expect("Report failed");

    assert!(!report.is_no_data());
    assert!(output.path().join(histogram_file_name(3)).exists());
}
