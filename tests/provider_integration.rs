// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! End-to-end reconciliation against a mock GoDaddy API.
//!
//! Run with: cargo test --test provider_integration

use godaddy_dns::config::ProviderConfig;
use godaddy_dns::godaddy::{GoDaddyProvider, Step};
use godaddy_dns::zonefile::parse_desired;
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ZONE: &str = "example.com";
const RECORDS_PATH: &str = "/v1/domains/example.com/records";

fn provider_for(server: &MockServer) -> GoDaddyProvider {
    let mut settings = HashMap::new();
    settings.insert("api_key".to_string(), "key".to_string());
    settings.insert("api_secret".to_string(), "secret".to_string());
    settings.insert("api_url".to_string(), server.uri());
    GoDaddyProvider::new(&ProviderConfig::from_settings(&settings).unwrap()).unwrap()
}

async fn mount_zone(server: &MockServer, records: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(RECORDS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(records))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_reconcile_zone_end_to_end() {
    let server = MockServer::start().await;
    mount_zone(
        &server,
        json!([
            {"data": "ns01.domaincontrol.com", "name": "@", "ttl": 3600, "type": "NS"},
            {"data": "192.0.2.1", "name": "www", "ttl": 600, "type": "A"},
            {"data": "foo.example.com", "name": "old", "ttl": 600, "type": "CNAME"},
            {"data": "192.0.2.50", "name": "keep", "ttl": 600, "type": "A"}
        ]),
    )
    .await;

    // www changes address, old goes away, api is new, keep is untouched
    Mock::given(method("GET"))
        .and(path(format!("{RECORDS_PATH}/A/www")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"data": "192.0.2.1", "name": "www", "ttl": 600, "type": "A"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{RECORDS_PATH}/A/www")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{RECORDS_PATH}/CNAME/old")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"data": "foo.example.com", "name": "old", "ttl": 600, "type": "CNAME"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{RECORDS_PATH}/CNAME/old")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(RECORDS_PATH))
        .and(body_json(json!([
            {"data": "192.0.2.2", "name": "www", "ttl": 600, "type": "A"}
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(RECORDS_PATH))
        .and(body_json(json!([
            {"data": "api", "name": "api", "ttl": 600, "type": "CNAME"}
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let existing = provider.get_zone_records(ZONE).await.unwrap();
    assert_eq!(existing.len(), 3, "apex NS must not be reported");

    let desired = parse_desired(
        ZONE,
        r#"
- {name: "@", type: NS, value: ns1.example.net., ttl: 3600}
- {name: www, type: A, value: 192.0.2.2, ttl: 600}
- {name: api, type: CNAME, value: api, ttl: 300}
- {name: keep, type: A, value: 192.0.2.50, ttl: 600}
"#,
    )
    .unwrap();

    let corrections = provider
        .get_zone_records_corrections(&desired, &existing)
        .unwrap();
    let plans: Vec<Vec<Step>> = corrections.iter().map(|c| c.steps().to_vec()).collect();
    assert_eq!(plans.len(), 3);
    assert!(matches!(plans[0].as_slice(), [Step::Delete(r)] if r.name == "old"));
    assert!(matches!(
        plans[1].as_slice(),
        [Step::Delete(old), Step::Create(new)] if old.name == "www" && new.name == "www"
    ));
    assert!(matches!(plans[2].as_slice(), [Step::Create(r)] if r.name == "api"));

    for correction in corrections {
        correction.execute().await.unwrap();
    }
}

#[tokio::test]
async fn test_failed_delete_stops_change_but_not_batch() {
    let server = MockServer::start().await;
    mount_zone(
        &server,
        json!([
            {"data": "192.0.2.1", "name": "www", "ttl": 600, "type": "A"}
        ]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(format!("{RECORDS_PATH}/A/www")))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(RECORDS_PATH))
        .and(body_json(json!([
            {"data": "192.0.2.2", "name": "www", "ttl": 600, "type": "A"}
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(RECORDS_PATH))
        .and(body_json(json!([
            {"data": "192.0.2.9", "name": "mail", "ttl": 600, "type": "A"}
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let existing = provider.get_zone_records(ZONE).await.unwrap();
    let desired = parse_desired(
        ZONE,
        r#"
- {name: www, type: A, value: 192.0.2.2}
- {name: mail, type: A, value: 192.0.2.9}
"#,
    )
    .unwrap();

    let corrections = provider
        .get_zone_records_corrections(&desired, &existing)
        .unwrap();
    assert_eq!(corrections.len(), 2);

    let mut results = Vec::new();
    for correction in corrections {
        results.push(correction.execute().await);
    }

    let err = results[0].as_ref().unwrap_err();
    assert!(err.is_transient());
    assert!(err.to_string().contains("503"));
    assert!(results[1].is_ok());
}

#[tokio::test]
async fn test_nameservers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{RECORDS_PATH}/NS")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"data": "ns45.domaincontrol.com", "name": "@", "ttl": 3600, "type": "NS"},
            {"data": "ns46.domaincontrol.com", "name": "@", "ttl": 3600, "type": "NS"}
        ])))
        .mount(&server)
        .await;

    let nameservers = provider_for(&server).get_nameservers(ZONE).await.unwrap();
    let names: Vec<_> = nameservers.into_iter().map(|n| n.name).collect();
    assert_eq!(names, vec!["ns45.domaincontrol.com", "ns46.domaincontrol.com"]);
}

#[test]
fn test_missing_credentials_fail_construction() {
    let settings = HashMap::from([("api_key".to_string(), "key".to_string())]);
    let err = ProviderConfig::from_settings(&settings).unwrap_err();
    assert_eq!(err.to_string(), "missing GODADDY api_secret");
}
