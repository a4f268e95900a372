//! `/movie/{id}` aggregation over the four upstream resources.

mod common;

use axum::http::StatusCode;
use common::{get_json, setup_app, FakeUpstream, CDN};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

fn details() -> Value {
    json!({
        "id": 27205,
        "title": "Inception",
        "release_date": "2010-07-16",
        "poster_path": "/xyz.jpg",
        "vote_average": 8.4,
        "runtime": 148,
        "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
        "original_language": "en",
        "overview": "Cobb steals secrets."
    })
}

fn credits() -> Value {
    json!({
        "cast": [
            {"name": "Leonardo DiCaprio", "profile_path": "/leo.jpg"},
            {"name": "Unknown Extra", "profile_path": null}
        ],
        "crew": [
            {"name": "Christopher Nolan", "job": "Director", "profile_path": "/nolan.jpg"}
        ]
    })
}

fn images() -> Value {
    json!({"backdrops": [{"file_path": "/b1.jpg"}, {"file_path": "/b2.jpg"}]})
}

fn releases(results: Value) -> Value {
    json!({"id": 27205, "results": results})
}

fn fixtures(release_results: Value) -> Arc<FakeUpstream> {
    let upstream = FakeUpstream::new();
    upstream.respond("/movie/27205", details());
    upstream.respond("/movie/27205/credits", credits());
    upstream.respond("/movie/27205/images", images());
    upstream.respond("/movie/27205/release_dates", releases(release_results));
    upstream
}

#[tokio::test]
async fn test_detail_merges_all_sources() {
    let upstream = fixtures(json!([
        {"iso_3166_1": "US", "release_dates": [{"certification": "PG-13"}]},
        {"iso_3166_1": "IN", "release_dates": [{"certification": "U"}]}
    ]));

    let (status, body) = get_json(setup_app(upstream.clone()), "/movie/27205").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 27205,
            "title": "Inception",
            "year": "2010",
            "poster": format!("{CDN}/w500/xyz.jpg"),
            "rating": 8.4,
            "runtime": 148,
            "genres": ["Action", "Science Fiction"],
            "language": "en",
            "description": "Cobb steals secrets.",
            "ageRating": "U",
            "images": [format!("{CDN}/w500/b1.jpg"), format!("{CDN}/w500/b2.jpg")],
            "cast": [
                {"name": "Leonardo DiCaprio", "image": format!("{CDN}/w200/leo.jpg")},
                {"name": "Unknown Extra", "image": null}
            ],
            "crew": [
                {"name": "Christopher Nolan", "job": "Director", "image": format!("{CDN}/w200/nolan.jpg")}
            ]
        })
    );

    let mut paths: Vec<String> = upstream.calls().into_iter().map(|c| c.path).collect();
    paths.sort();
    assert_eq!(
        paths,
        vec![
            "/movie/27205",
            "/movie/27205/credits",
            "/movie/27205/images",
            "/movie/27205/release_dates",
        ]
    );
    assert_eq!(upstream.call_to("/movie/27205").unwrap().param("language"), Some("en-US"));
}

#[tokio::test]
async fn test_detail_age_rating_falls_back_to_us() {
    let upstream = fixtures(json!([
        {"iso_3166_1": "US", "release_dates": [{"certification": "PG-13"}]}
    ]));

    let (status, body) = get_json(setup_app(upstream), "/movie/27205").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ageRating"], "PG-13");
}

#[tokio::test]
async fn test_detail_age_rating_defaults_to_na() {
    let upstream = fixtures(json!([
        {"iso_3166_1": "GB", "release_dates": [{"certification": "12A"}]}
    ]));

    let (status, body) = get_json(setup_app(upstream), "/movie/27205").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ageRating"], "N/A");
}

#[tokio::test]
async fn test_detail_fails_whole_when_credits_fail() {
    let upstream = fixtures(json!([]));
    upstream.fail("/movie/27205/credits", 500);

    let (status, body) = get_json(setup_app(upstream), "/movie/27205").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to load movie details."}));
}

#[tokio::test]
async fn test_detail_unknown_movie_is_500() {
    // No fixtures: the fake answers 404 like TMDb does for unknown ids.
    let upstream = FakeUpstream::new();

    let (status, body) = get_json(setup_app(upstream), "/movie/999999999").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("title").is_none());
}

#[tokio::test]
async fn test_detail_rejects_non_numeric_id() {
    let upstream = FakeUpstream::new();

    let (status, body) = get_json(setup_app(upstream.clone()), "/movie/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid movie ID"}));
    assert!(upstream.calls().is_empty());
}

#[tokio::test]
async fn test_detail_calls_are_in_flight_together() {
    let upstream = fixtures(json!([]));
    // Each reply waits until all four requests have been issued.
    upstream.gate(4);

    let (status, body) = timeout(
        Duration::from_secs(5),
        get_json(setup_app(upstream.clone()), "/movie/27205"),
    )
    .await
    .expect("detail calls were not issued concurrently");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 27205);
    assert_eq!(upstream.calls().len(), 4);
}

#[tokio::test]
async fn test_detail_failure_does_not_wait_for_slow_sibling() {
    let upstream = fixtures(json!([]));
    upstream.delay("/movie/27205", Duration::from_secs(60));
    upstream.fail("/movie/27205/credits", 500);

    let (status, body) = timeout(
        Duration::from_secs(5),
        get_json(setup_app(upstream), "/movie/27205"),
    )
    .await
    .expect("failure waited on the slow details call");

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to load movie details."}));
}
