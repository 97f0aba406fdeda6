//! `GET /v1/openingtimes` tests.

use serde_json::json;
use wartezeiten_client::{OpeningTimes, OpeningTimesRequest};
use wartezeiten_tests::MockApi;

#[tokio::test]
async fn test_get_opening_times_sends_park_header() {
    let mock = MockApi::json(&json!([])).await.expect("Failed to start mock");
    let client = mock.client().expect("Failed to create client");

    client
        .get_opening_times(&OpeningTimesRequest::new("efteling"))
        .await
        .expect("Failed to get opening times");

    let request = mock.last_request().expect("No request recorded");
    assert_eq!(request.path, "/v1/openingtimes");
    assert_eq!(request.header("park"), Some("efteling"));
    assert_eq!(request.header("language"), None);
}

#[tokio::test]
async fn test_get_opening_times_returns_records() {
    let body = json!([
        {
            "opened_today": true,
            "open_from": "2024-08-12T09:00:00+02:00",
            "closed_from": "2024-08-12T18:00:00+02:00"
        }
    ]);
    let mock = MockApi::json(&body).await.expect("Failed to start mock");
    let client = mock.client().expect("Failed to create client");

    let times = client
        .get_opening_times(&OpeningTimesRequest::new("efteling"))
        .await
        .expect("Failed to get opening times");

    let expected: Vec<OpeningTimes> = serde_json::from_value(body).expect("Invalid fixture");
    assert_eq!(times, expected);
    // Date-times are passed through untouched.
    assert_eq!(times[0].open_from, "2024-08-12T09:00:00+02:00");
}

#[tokio::test]
async fn test_get_opening_times_park_not_validated() {
    let mock = MockApi::json(&json!([])).await.expect("Failed to start mock");
    let client = mock.client().expect("Failed to create client");

    client
        .get_opening_times(&OpeningTimesRequest::new("Some Park 42"))
        .await
        .expect("Free-form park identifier should be sent as is");

    let request = mock.last_request().expect("No request recorded");
    assert_eq!(request.header("park"), Some("Some Park 42"));
}
