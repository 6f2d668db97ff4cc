//! Integration Tests
//!
//! End-to-end runs from an inbound message to the recorded exchange.

use crate::brain::{Category, FixedPicker, GREETING_LINES};
use crate::config::ResponderConfig;
use crate::decoration::strip_decoration;
use crate::error::AppError;
use crate::history::{FixedClock, HistoryLog, InMemoryHistoryStore, JsonFileHistoryStore};
use crate::responder::Responder;
use crate::settings::Settings;
use crate::signature::Signature;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const NOW: &str = "2024-03-15 14:30:00";

fn issue_config() -> ResponderConfig {
    serde_json::from_str(
        r#"{
            "categories": { "support_issue": ["issue"] },
            "responses": { "support_issue": ["We're on it."] }
        }"#,
    )
    .unwrap()
}

fn responder_with(config: ResponderConfig, store: InMemoryHistoryStore, slot: usize) -> Responder {
    Responder::new(config, HistoryLog::load(Box::new(store)))
        .with_picker(Box::new(FixedPicker(slot)))
        .with_clock(Box::new(FixedClock(NOW.to_string())))
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_greeting_plus_support_issue() {
    let store = InMemoryHistoryStore::new();
    let responder = responder_with(issue_config(), store.clone(), 2);

    let outcome = responder.respond("Hi, I have an issue with my order").unwrap();

    assert_eq!(outcome.categories, vec![Category::SupportIssue]);
    assert_eq!(
        outcome.body,
        format!("{} We're on it. We're actively looking into it.", GREETING_LINES[2])
    );
    assert_eq!(outcome.exchange.category, "support_issue");
    assert_eq!(outcome.exchange.input_message, "Hi, I have an issue with my order");
    assert_eq!(outcome.exchange.timestamp, NOW);
    assert_eq!(store.snapshot(), vec![outcome.exchange]);
}

#[test]
fn test_body_starts_with_some_greeting_when_random() {
    let responder = Responder::new(
        issue_config(),
        HistoryLog::empty(Box::new(InMemoryHistoryStore::new())),
    );

    let outcome = responder.respond("Hi, I have an issue with my order").unwrap();

    let greeting = GREETING_LINES
        .iter()
        .find(|g| outcome.body.starts_with(*g))
        .expect("body should open with a greeting line");
    assert_eq!(
        &outcome.body[greeting.len()..],
        " We're on it. We're actively looking into it."
    );
}

#[test]
fn test_thanks_without_appreciation_keywords_is_general() {
    let responder = responder_with(issue_config(), InMemoryHistoryStore::new(), 0);

    let outcome = responder.respond("thanks so much").unwrap();

    assert_eq!(outcome.categories, vec![Category::General]);
    assert_eq!(
        outcome.body,
        "Thank you for reaching out. We'll get back to you soon."
    );
    assert_eq!(outcome.exchange.category, "general");
}

#[test]
fn test_missing_config_resolves_everything_to_general() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_in(&temp_dir);

    let responder = Responder::from_settings(&settings);

    for message in ["I have an issue", "please help", "how much?", "thank you"] {
        let outcome = responder.respond(message).unwrap();
        assert_eq!(outcome.categories, vec![Category::General], "for '{}'", message);
    }
}

#[test]
fn test_corrupt_config_resolves_to_general() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_in(&temp_dir);
    fs::write(&settings.config_file, "{{{ not json").unwrap();

    let responder = Responder::from_settings(&settings);

    assert!(responder.config().is_empty());
    assert_eq!(
        responder.respond("issue").unwrap().categories,
        vec![Category::General]
    );
}

#[test]
fn test_response_carries_signature_and_plain_form_is_stored() {
    let store = InMemoryHistoryStore::new();
    let responder = responder_with(issue_config(), store.clone(), 0)
        .with_signature(Signature::new("Ada Lovelace", "ada"));

    let outcome = responder.respond("there is an issue").unwrap();
    let plain = &outcome.response.plain;

    assert!(plain.starts_with(&format!("{}\n\nBest regards,\nAda Lovelace / ada\n", outcome.body)));
    assert!(plain.contains(&format!("_Category: support_issue | Timestamp: {}_", NOW)));
    assert_eq!(strip_decoration(&outcome.response.decorated), *plain);
    assert_eq!(strip_decoration(plain), *plain);
    assert_eq!(store.snapshot()[0].automated_response, *plain);
}

#[test]
fn test_generate_and_log_response_returns_plain_reply() {
    let responder = responder_with(issue_config(), InMemoryHistoryStore::new(), 0);

    let reply = responder.generate_and_log_response("issue again").unwrap();

    assert!(!reply.contains('\x1b'));
    assert!(reply.starts_with("We're on it. We're actively looking into it.\n\nBest regards,"));
    assert_eq!(responder.history().unwrap().len(), 1);
}

#[test]
fn test_failed_persist_yields_no_reply_and_no_history() {
    let responder = responder_with(issue_config(), InMemoryHistoryStore::failing(), 0);

    let result = responder.generate_and_log_response("an issue");

    assert!(matches!(result, Err(AppError::Processing(_))));
    assert!(responder.history().unwrap().is_empty());
}

#[test]
fn test_history_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_in(&temp_dir);
    fs::write(
        &settings.config_file,
        serde_json::to_string(&issue_config()).unwrap(),
    )
    .unwrap();

    let first = Responder::from_settings(&settings);
    first.generate_and_log_response("issue one").unwrap();
    first.generate_and_log_response("issue two").unwrap();
    let before = first.history().unwrap();
    drop(first);

    let second = Responder::from_settings(&settings);
    assert_eq!(second.history().unwrap(), before);

    second.generate_and_log_response("issue three").unwrap();
    let after = JsonFileHistoryStore::new(&settings.history_file);
    let records = crate::history::HistoryStore::load(&after).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].input_message, "issue three");
}

#[test]
fn test_concurrent_requests_lose_no_updates() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("message_history.json");
    let responder = Arc::new(Responder::new(
        issue_config(),
        HistoryLog::load(Box::new(JsonFileHistoryStore::new(&path))),
    ));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let responder = Arc::clone(&responder);
            thread::spawn(move || {
                for j in 0..5 {
                    responder
                        .generate_and_log_response(&format!("issue {}-{}", i, j))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let on_disk = crate::history::HistoryStore::load(&JsonFileHistoryStore::new(&path)).unwrap();
    assert_eq!(on_disk.len(), 40);
    assert_eq!(responder.history().unwrap(), on_disk);
}

fn settings_in(temp_dir: &TempDir) -> Settings {
    let paths = crate::fs_manager::PortablePathManager::new(temp_dir.path().join("data"));
    paths.init().unwrap();
    Settings {
        config_file: paths.config_file(),
        history_file: paths.history_file(),
        paths,
        signature: Signature::default(),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}
