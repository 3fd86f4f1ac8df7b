//! String-based API surface for presentation hosts.

pub mod json_api;

pub use json_api::{apply_intent, apply_intent_json, IntentRequest, IntentResponse};
