//! WebAssembly module for the early warning platform
//!
//! Provides client-side checks for:
//! - Task create/edit forms
//! - District registration
//! - Hazard score banding

use serde::de::DeserializeOwned;
use validator::Validate;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Whether the create form may be submitted.
///
/// The description may be empty; the title may not be blank.
#[wasm_bindgen]
pub fn validate_task_form(title: &str, description: &str) -> bool {
    let input = CreateTaskInput {
        title: title.to_string(),
        description: description.to_string(),
    };
    input.validate().is_ok()
}

/// Validate an edit-form payload given as a JS object
#[wasm_bindgen]
pub fn validate_task_update(value: &JsValue) -> Result<(), JsValue> {
    let json = stringify(value)?;
    check_json::<UpdateTaskInput>(&json).map_err(reject)
}

/// Validate a district registration payload given as a JS object
#[wasm_bindgen]
pub fn validate_district(value: &JsValue) -> Result<(), JsValue> {
    let json = stringify(value)?;
    check_json::<CreateDistrictInput>(&json).map_err(reject)
}

/// Risk level label ("low", "medium", "high") for a 0-100 hazard score
#[wasm_bindgen]
pub fn risk_level_for_score(score: f64) -> String {
    RiskLevel::from_hazard_score(score).as_str().to_string()
}

fn stringify(value: &JsValue) -> Result<String, JsValue> {
    let json = js_sys::JSON::stringify(value)?;
    Ok(String::from(json))
}

fn reject(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Parse and validate a JSON payload, describing the first problem found
pub fn check_json<T: DeserializeOwned + Validate>(json: &str) -> Result<(), String> {
    let input: T = serde_json::from_str(json).map_err(|e| format!("invalid payload: {}", e))?;
    input.validate().map_err(|errors| match first_error(&errors) {
        Some((field, message)) => format!("{} {}", field, message),
        None => errors.to_string(),
    })
}
