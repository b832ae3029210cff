//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

/// Entries matching the documented persisted format.
pub fn sample_entries() -> Vec<&'static str> {
    vec![
        "Hello -> שלום",
        "Cat -> חתול",
        "Good morning -> בוקר טוב",
    ]
}

/// Payload for the add/remove word endpoints.
pub fn word_payload(english: &str, hebrew: &str) -> Value {
    json!({ "english": english, "hebrew": hebrew })
}

/// Payload for the answer endpoint.
pub fn answer_payload(option: &str) -> Value {
    json!({ "option": option })
}

/// Pull the current question's options out of a session view.
pub fn options_of(view: &Value) -> Vec<String> {
    view["current_question"]["options"]
        .as_array()
        .expect("view should carry options")
        .iter()
        .map(|o| o.as_str().unwrap().to_string())
        .collect()
}

/// Some option of the current question that is not the given answer.
pub fn wrong_option(view: &Value, correct: &str) -> String {
    options_of(view)
        .into_iter()
        .find(|o| o != correct)
        .expect("question should have at least one distractor")
}
