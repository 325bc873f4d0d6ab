use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use mobile_gate::{GateConfig, GateServer, RoutingDecision, UaClassifier};
use serde::Deserialize;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// User-agent fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct UaFixture {
    user_agent: String,
    /// "continue" or "redirect".
    expected: String,
    #[serde(default)]
    signal: Option<String>,
}

fn load_fixtures(path: &str) -> Vec<UaFixture> {
    let content = std::fs::read_to_string(path).unwrap();
    serde_yaml::from_str(&content).unwrap()
}

fn default_router() -> axum::Router {
    let config = GateConfig::default();
    let classifier = UaClassifier::from_embedded().unwrap();
    GateServer::new(&config, Arc::new(classifier)).router()
}

#[test]
fn ua_fixtures_classify_and_decide() {
    let classifier = UaClassifier::from_embedded().unwrap();
    let fixtures = load_fixtures("tests/fixtures/user_agents.yml");

    for f in &fixtures {
        let classification = classifier.classify(&f.user_agent);
        let decision = classifier.decision(&classification);

        match f.expected.as_str() {
            "continue" => assert_eq!(
                decision,
                RoutingDecision::Continue,
                "UA: {}",
                f.user_agent
            ),
            "redirect" => assert_eq!(
                decision,
                RoutingDecision::RedirectTo("/"),
                "UA: {}",
                f.user_agent
            ),
            other => panic!("unknown expectation {:?} for UA: {}", other, f.user_agent),
        }

        if let Some(expected_signal) = &f.signal {
            assert_eq!(
                classification.signal,
                Some(expected_signal.as_str()),
                "signal mismatch for UA: {}",
                f.user_agent
            );
        }
    }
}

#[tokio::test]
async fn ua_fixtures_drive_the_gate_route() {
    let fixtures = load_fixtures("tests/fixtures/user_agents.yml");

    for f in &fixtures {
        let request = Request::builder()
            .uri("/mobile")
            .header(header::USER_AGENT, f.user_agent.as_str())
            .body(Body::empty())
            .unwrap();
        let response = default_router().oneshot(request).await.unwrap();

        match f.expected.as_str() {
            "continue" => assert_eq!(
                response.status(),
                StatusCode::OK,
                "UA: {}",
                f.user_agent
            ),
            _ => {
                assert_eq!(
                    response.status(),
                    StatusCode::TEMPORARY_REDIRECT,
                    "UA: {}",
                    f.user_agent
                );
                assert_eq!(
                    response.headers()[header::LOCATION],
                    "/",
                    "UA: {}",
                    f.user_agent
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Operator-supplied signal database
// ---------------------------------------------------------------------------

#[test]
fn operator_signal_file_replaces_the_default_set() {
    let classifier = UaClassifier::from_file("tests/fixtures/custom_signals.yml").unwrap();
    assert_eq!(classifier.signal_count(), 3);

    let c = classifier.classify("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80.345; U; en)");
    assert!(c.is_mobile);
    assert_eq!(c.signal, Some("Opera Mobile"));

    let c = classifier.classify("Mozilla/5.0 (SymbianOS/9.4; Series60/5.0 NokiaN97-1/12.0.024)");
    assert_eq!(c.signal, Some("Symbian"));

    let c = classifier.classify("Kindle/3.0 (screen 600x800; rotate)");
    assert_eq!(c.signal, Some("Kindle"));

    // The default tokens are gone along with the default set.
    assert!(!classifier.classify("Mozilla/5.0 (Linux; Android 14)").is_mobile);
}
