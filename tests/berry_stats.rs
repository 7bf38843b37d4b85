//! End-to-end tests driving the real server against a mocked PokeAPI.

use httpmock::prelude::*;
use serde_json::{json, Value};

use berry_stats::berries::{BerryStatsResponse, GrowthTimeFrequency};

mod common;

/// Mock a single-page berry listing plus one detail record per berry.
async fn mock_catalog(server: &MockServer, berries: &[(&str, i64)]) {
    let results: Vec<Value> = berries
        .iter()
        .map(|(name, _)| json!({"name": name, "url": server.url(format!("/berry/{name}/"))}))
        .collect();
    let count = berries.len();
    server
        .mock_async(move |when, then| {
            when.method(GET).path("/berry");
            then.status(200).json_body(json!({
                "count": count,
                "next": null,
                "previous": null,
                "results": results,
            }));
        })
        .await;

    for (name, growth_time) in berries {
        let name = name.to_string();
        let growth_time = *growth_time;
        server
            .mock_async(move |when, then| {
                when.method(GET).path(format!("/berry/{name}"));
                then.status(200)
                    .json_body(json!({"name": name, "growth_time": growth_time}));
            })
            .await;
    }
}

#[tokio::test]
async fn test_all_berry_stats_happy_path() {
    let upstream = MockServer::start_async().await;
    mock_catalog(&upstream, &[("cheri", 3), ("chesto", 3), ("pecha", 3)]).await;

    let base = common::start_service(common::test_config(&upstream.base_url())).await;
    let response = reqwest::get(format!("{base}/v1/allBerryStats"))
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    let stats: BerryStatsResponse = response.json().await.expect("stats body");

    assert_eq!(stats.berries_names.len(), 3);
    assert_eq!(stats.berries_names, vec!["cheri", "chesto", "pecha"]);
    assert_eq!(stats.min_growth_time, 3.0);
    assert_eq!(stats.max_growth_time, 3.0);
    assert_eq!(stats.mean_growth_time, 3.0);
    assert_eq!(stats.median_growth_time, 3.0);
    assert_eq!(stats.variance_growth_time, 0.0);
    assert_eq!(
        stats.frequency_growth_time,
        vec![GrowthTimeFrequency {
            growth_time: 3,
            frequency: 3
        }]
    );
}

#[tokio::test]
async fn test_stats_span_paginated_listing() {
    let upstream = MockServer::start_async().await;

    let next_link = upstream.url("/berry-page-2?offset=2&limit=2");
    upstream
        .mock_async(move |when, then| {
            when.method(GET).path("/berry");
            then.status(200).json_body(json!({
                "next": next_link,
                "results": [
                    {"name": "cheri", "url": "https://pokeapi.co/api/v2/berry/1/"},
                    {"name": "chesto", "url": "https://pokeapi.co/api/v2/berry/2/"},
                ],
            }));
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/berry-page-2")
                .query_param("offset", "2")
                .query_param("limit", "2");
            then.status(200).json_body(json!({
                "next": null,
                "results": [
                    {"name": "pecha", "url": "https://pokeapi.co/api/v2/berry/3/"},
                    {"name": "rawst", "url": "https://pokeapi.co/api/v2/berry/4/"},
                ],
            }));
        })
        .await;
    for (name, growth_time) in [("cheri", 3i64), ("chesto", 3), ("pecha", 4), ("rawst", 6)] {
        upstream
            .mock_async(move |when, then| {
                when.method(GET).path(format!("/berry/{name}"));
                then.status(200)
                    .json_body(json!({"name": name, "growth_time": growth_time}));
            })
            .await;
    }

    let base = common::start_service(common::test_config(&upstream.base_url())).await;
    let response = reqwest::get(format!("{base}/v1/allBerryStats"))
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    let stats: BerryStatsResponse = response.json().await.expect("stats body");

    assert_eq!(stats.berries_names, vec!["cheri", "chesto", "pecha", "rawst"]);
    assert_eq!(stats.min_growth_time, 3.0);
    assert_eq!(stats.max_growth_time, 6.0);
    assert_eq!(stats.mean_growth_time, 4.0);
    assert_eq!(stats.median_growth_time, 3.5);
    let total: u64 = stats
        .frequency_growth_time
        .iter()
        .map(|entry| entry.frequency)
        .sum();
    assert_eq!(total, 4);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_500() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/berry");
            then.status(503);
        })
        .await;
    let detail = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/berry/cheri");
            then.status(200)
                .json_body(json!({"name": "cheri", "growth_time": 3}));
        })
        .await;

    let base = common::start_service(common::test_config(&upstream.base_url())).await;
    let response = reqwest::get(format!("{base}/v1/allBerryStats"))
        .await
        .expect("request");

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("error body");
    let message = body["error"].as_str().expect("error message");
    assert!(message.starts_with("Error getting berry stats: Error calling PokeAPI:"));

    // The listing failed, so no detail fetch may have happened.
    assert_eq!(detail.hits_async().await, 0);
}

#[tokio::test]
async fn test_empty_catalog_maps_to_500() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/berry");
            then.status(200)
                .json_body(json!({"next": null, "results": []}));
        })
        .await;

    let base = common::start_service(common::test_config(&upstream.base_url())).await;
    let response = reqwest::get(format!("{base}/v1/allBerryStats"))
        .await
        .expect("request");

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("error body");
    assert_eq!(
        body["error"],
        "Error getting berry stats: Data list is empty"
    );
}

#[tokio::test]
async fn test_root_and_health_banners() {
    let upstream = MockServer::start_async().await;
    let base = common::start_service(common::test_config(&upstream.base_url())).await;

    let root: Value = reqwest::get(&base)
        .await
        .expect("request")
        .json()
        .await
        .expect("root body");
    assert_eq!(root["status"], "ok");
    assert_eq!(root["message"], "Poke Berry Stats API is running");
    assert_eq!(root["version"], env!("CARGO_PKG_VERSION"));

    let health: Value = reqwest::get(format!("{base}/health"))
        .await
        .expect("request")
        .json()
        .await
        .expect("health body");
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "Poke Berry Stats API");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let upstream = MockServer::start_async().await;
    let base = common::start_service(common::test_config(&upstream.base_url())).await;

    let response = reqwest::get(format!("{base}/health")).await.expect("request");

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .expect("ascii header");
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_cross_origin_requests_are_allowed() {
    let upstream = MockServer::start_async().await;
    let base = common::start_service(common::test_config(&upstream.base_url())).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{base}/health"))
        .header("Origin", "http://stats-dashboard.example")
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("CORS header"),
        "*"
    );
}
