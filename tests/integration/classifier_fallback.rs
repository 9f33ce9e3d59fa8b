use std::cell::Cell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use rolemap::classify::{
    Classification, ClassifierService, RateLimited, RetryPolicy, RoleClassifier,
};
use rolemap::models::RoleCategory;

struct FailingProvider;

impl RoleClassifier for FailingProvider {
    fn classify(&self, _text: &str) -> Result<Classification> {
        Err(anyhow!("provider unreachable"))
    }
}

/// Rate-limits the first `throttled_calls` requests, then succeeds.
struct ThrottledProvider {
    calls: Rc<Cell<u32>>,
    throttled_calls: u32,
}

impl RoleClassifier for ThrottledProvider {
    fn classify(&self, _text: &str) -> Result<Classification> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if call <= self.throttled_calls {
            return Err(anyhow::Error::new(RateLimited));
        }
        Ok(Classification {
            canonical_role: "Machine Learning Engineer".to_string(),
            category: RoleCategory::Engineering,
            confidence: 0.92,
            reasoning: Some("remote".to_string()),
            fallback: false,
        })
    }
}

#[test]
fn empty_input_is_rejected_before_any_provider_runs() {
    let service = ClassifierService::heuristic_only();
    assert!(service.classify("   \n  ").is_err());
}

#[test]
fn heuristic_only_service_classifies_deterministically() {
    let service = ClassifierService::heuristic_only();
    let result = service
        .classify("John Doe\nMachine Learning Engineer")
        .unwrap();
    assert!(result.fallback);
    assert_eq!(result.canonical_role, "Machine Learning Engineer");
}

#[test]
fn permanent_primary_failure_degrades_to_the_heuristic() {
    let service = ClassifierService::with_primary(Box::new(FailingProvider));
    let result = service
        .classify("Jane Roe\nSenior Data Scientist")
        .unwrap();
    assert!(result.fallback);
    assert_eq!(result.canonical_role, "Data Scientist");
}

#[test]
fn rate_limited_primary_is_retried_until_it_succeeds() {
    let calls = Rc::new(Cell::new(0));
    let provider = ThrottledProvider {
        calls: Rc::clone(&calls),
        throttled_calls: 2,
    };
    let service = ClassifierService::with_primary(Box::new(provider))
        .retry_policy(RetryPolicy::no_backoff(3));

    let result = service.classify("Jane Roe\nML Lead").unwrap();
    assert!(!result.fallback);
    assert_eq!(calls.get(), 3);
}

#[test]
fn exhausted_retries_fall_back_to_the_heuristic() {
    let calls = Rc::new(Cell::new(0));
    let provider = ThrottledProvider {
        calls: Rc::clone(&calls),
        throttled_calls: u32::MAX,
    };
    let service = ClassifierService::with_primary(Box::new(provider))
        .retry_policy(RetryPolicy::no_backoff(2));

    let result = service
        .classify("John Doe\nMachine Learning Engineer")
        .unwrap();
    assert!(result.fallback);
    // Initial attempt plus two retries.
    assert_eq!(calls.get(), 3);
}
