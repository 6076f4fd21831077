mod common;

use common::test_app;
use neighborshare_backend::providers::FixedOutcomePolicy;
use poem::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint() {
    let (_store, cli) = test_app(FixedOutcomePolicy::never_fail());

    let resp = cli.get("/api/health").send().await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    assert_eq!(json.value().object().get("status").string(), "healthy");
}

#[tokio::test]
async fn test_list_map_items_joins_availability() {
    let (_store, cli) = test_app(FixedOutcomePolicy::never_fail());

    let resp = cli.get("/api/map-items").send().await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    let pins = json.value().array();
    assert_eq!(pins.len(), 6);

    let crock_pot = pins.get(2).object();
    assert_eq!(crock_pot.get("itemId").string(), "itm003");
    assert_eq!(crock_pot.get("available").bool(), false);
    assert_eq!(crock_pot.get("address").string(), "Block C, Sector 47");
}

#[tokio::test]
async fn test_list_map_items_filters_by_category() {
    let (_store, cli) = test_app(FixedOutcomePolicy::never_fail());

    let resp = cli
        .get("/api/map-items")
        .query("category", &"Outdoors")
        .send()
        .await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    let pins = json.value().array();
    assert_eq!(pins.len(), 1);
    assert_eq!(pins.get(0).object().get("name").string(), "Camping Tent");
}

#[tokio::test]
async fn test_list_requests_returns_sample_data() {
    let (_store, cli) = test_app(FixedOutcomePolicy::never_fail());

    let resp = cli.get("/api/requests").send().await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    let requests = json.value().array();
    assert_eq!(requests.len(), 3);

    let first = requests.get(0).object();
    assert_eq!(first.get("id").string(), "req001");
    assert_eq!(first.get("status").string(), "pending");
    assert_eq!(first.get("userName").string(), "John Smith");

    assert_eq!(requests.get(1).object().get("status").string(), "approved");
    assert_eq!(requests.get(2).object().get("status").string(), "returned");
}

#[tokio::test]
async fn test_trust_score_keyed_lookup() {
    let (_store, cli) = test_app(FixedOutcomePolicy::never_fail());

    let resp = cli.get("/api/trust-score/usr123").send().await;
    resp.assert_status_is_ok();

    let json = resp.json().await;
    let score = json.value().object();
    assert_eq!(score.get("name").string(), "Alice Johnson");
    assert_eq!(score.get("trustScore").f64(), 9.5);
    assert_eq!(score.get("lendingCount").i64(), 7);
    assert_eq!(score.get("positiveFeedback").i64(), 97);
}

#[tokio::test]
async fn test_trust_score_unknown_user_is_404() {
    let (_store, cli) = test_app(FixedOutcomePolicy::never_fail());

    let resp = cli.get("/api/trust-score/usr999").send().await;
    resp.assert_status(StatusCode::NOT_FOUND);
}
