use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while attaching the editor to the page.
#[derive(Debug, Error)]
pub enum HostError {
	#[error("no global `window` available")]
	NoWindow,
	#[error("window size unavailable: {0}")]
	WindowSize(String),
	#[error("2d canvas context unavailable")]
	NoContext,
	#[error("failed to attach `{event}` listener: {reason}")]
	Listener { event: &'static str, reason: String },
}

/// Readable form of a thrown JS value for error messages.
pub fn describe(value: &JsValue) -> String {
	value
		.as_string()
		.unwrap_or_else(|| format!("{:?}", value))
}
