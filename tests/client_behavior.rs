//! Behavior-driven tests for the request engine.
//!
//! These tests drive the public `Client` through a scripted transport and
//! check what a caller observes: request shape, status classification and
//! validation that happens before any I/O.

mod support;

use binedge_core::{
    ApiErrorKind, Arguments, Operation, AUTH_HEADER, DEFAULT_USER_AGENT, USER_AGENT_HEADER,
};
use serde_json::json;

use support::{client, ScriptedHttpClient, TEST_BASE_URL};

// =============================================================================
// End-to-end lookups
// =============================================================================

#[test]
fn when_host_lookup_uses_defanged_ip_the_body_is_returned_verbatim() {
    // Given: the service answers with an empty event list
    let http = ScriptedHttpClient::json(vec![json!({"events": []})]);
    let client = client(&http);

    // When: the caller looks up a defanged address
    let body = client.host("8[.]8.8[.]8").expect("lookup should succeed");

    // Then: the path uses the plain address and the body is untouched
    assert_eq!(body, json!({"events": []}));
    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, format!("{TEST_BASE_URL}query/ip/8.8.8.8"));
}

#[test]
fn when_any_operation_runs_auth_and_user_agent_headers_are_sent() {
    // Given: one scripted success per call below
    let http = ScriptedHttpClient::json(vec![json!({}); 6]);
    let client = client(&http);

    // When: a mix of lookups, searches and catalogs is issued
    client.host_score("1.2.3.4").expect("score");
    client.domain_dns("example.com", 1).expect("dns");
    client.dataleaks_organization("example.com").expect("org");
    client.image_tags().expect("tags");
    client.stats("port:80", "countries", 1).expect("stats");
    client.sensor_search_stats("tags:ssh_scanner", "ports", 7).expect("sensor stats");

    // Then: every request carries exactly one non-empty value for each header
    let requests = http.requests();
    assert_eq!(requests.len(), 6);
    for request in requests {
        assert_eq!(request.header(AUTH_HEADER), Some("behavior-test-key"), "{}", request.url);
        assert_eq!(request.header(USER_AGENT_HEADER), Some(DEFAULT_USER_AGENT), "{}", request.url);
        assert_eq!(request.headers.len(), 2);
    }
}

#[test]
fn when_sensor_stats_are_requested_query_type_and_days_are_sent() {
    let http = ScriptedHttpClient::json(vec![json!([{"key": 22, "doc_count": 10}])]);
    let client = client(&http);

    let body = client
        .sensor_search_stats("tags:ssh_scanner", "ports", 1)
        .expect("stats should succeed");

    assert_eq!(body, json!([{"key": 22, "doc_count": 10}]));
    assert_eq!(
        http.requests()[0].url,
        format!("{TEST_BASE_URL}query/sensors/search/stats?query=tags%3Assh_scanner&type=ports&days=1")
    );
}

// =============================================================================
// Status classification
// =============================================================================

#[test]
fn when_service_returns_404_caller_gets_not_found() {
    let http = ScriptedHttpClient::status(404);
    let client = client(&http);

    let error = client
        .dataleaks_email("someone@example.com")
        .expect_err("404 should fail");

    assert_eq!(error.kind(), ApiErrorKind::NotFound);
    assert_eq!(error.status(), Some(404));
    assert_eq!(error.message(), "search term not found");
}

#[test]
fn when_service_returns_500_caller_gets_unexpected_status_with_code() {
    let http = ScriptedHttpClient::status(500);
    let client = client(&http);

    let error = client.host_historical("1.1.1.1").expect_err("500 should fail");

    assert_eq!(error.kind(), ApiErrorKind::UnexpectedStatus);
    assert_eq!(error.status(), Some(500));
    assert_eq!(http.call_count(), 1, "no retry is attempted");
}

#[test]
fn when_the_same_page_is_requested_twice_results_are_identical() {
    // Given: unchanged server data
    let page = json!({"page": 2, "pagesize": 5, "total": 12, "events": [{"a": 1}]});
    let http = ScriptedHttpClient::json(vec![page.clone(), page]);
    let client = client(&http);

    // When: page 2 is fetched by two independent calls
    let first = client.sensor_search("port:23", 2).expect("first call");
    let second = client.sensor_search("port:23", 2).expect("second call");

    // Then: both calls see the same page
    assert_eq!(first, second);
    let requests = http.requests();
    assert_eq!(requests[0].url, requests[1].url);
}

// =============================================================================
// Validation before I/O
// =============================================================================

#[test]
fn when_stat_type_is_outside_its_set_no_request_is_made() {
    let http = ScriptedHttpClient::json(vec![json!({})]);
    let client = client(&http);

    let aggregate = client
        .stats("product:nginx", "payloads", 1)
        .expect_err("payloads is not an aggregate stat");
    let sensor = client
        .sensor_search_stats("tags:ssh_scanner", "products", 60)
        .expect_err("products is not a sensor stat");

    assert_eq!(aggregate.kind(), ApiErrorKind::InvalidArgument);
    assert_eq!(sensor.kind(), ApiErrorKind::InvalidArgument);
    assert_eq!(http.call_count(), 0);
}

#[test]
fn when_target_is_malformed_no_request_is_made() {
    let http = ScriptedHttpClient::json(vec![json!({})]);
    let client = client(&http);

    let cases = [
        client.host("999.1.1.1"),
        client.torrent_ip("not-an-ip"),
        client.domain_subdomains("localhost", 1),
        client.dataleaks_email("missing-at.example.com"),
        client.host_search("   ", 1),
        client.execute(Operation::DomainIp, &Arguments::new()),
    ];

    for result in cases {
        let error = result.expect_err("malformed input must fail");
        assert_eq!(error.kind(), ApiErrorKind::InvalidArgument, "{error}");
    }
    assert_eq!(http.call_count(), 0);
}
