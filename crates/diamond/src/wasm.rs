//! WebAssembly bindings for diamond generation
//!
//! Browser-friendly wrappers around [`DiamondGenerator`]. Rows are always
//! joined with `\n` here; browsers have no platform separator worth honoring.

use wasm_bindgen::prelude::*;

use crate::core::{LineEnding, Padding, RenderConfig};
use crate::generator::DiamondGenerator;

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Render a diamond
///
/// # Arguments
/// * `input` - A letter or non-negative integer; `undefined`/`null` is a missing input
///
/// # Returns
/// * The diamond text
/// * Throws a JavaScript error carrying the validation message
#[wasm_bindgen]
pub fn generate_diamond(input: Option<String>) -> Result<String, JsValue> {
    let config = RenderConfig::default().with_line_ending(LineEnding::Lf);
    DiamondGenerator::with_config(config)
        .generate(input.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render a diamond and return JSON with rows and any error
///
/// # Arguments
/// * `input` - A letter or non-negative integer
/// * `padding` - "symmetric" or "leading"
///
/// # Returns
/// * JSON string with fields: rows, width, error, kind
#[wasm_bindgen]
pub fn generate_diamond_json(input: Option<String>, padding: &str) -> String {
    let padding: Padding = match padding.parse() {
        Ok(padding) => padding,
        Err(e) => {
            return serde_json::json!({
                "rows": [],
                "width": 0,
                "error": e,
                "kind": null
            })
            .to_string();
        }
    };

    let generator = DiamondGenerator::with_config(RenderConfig::default().with_padding(padding));
    match generator.validate(input.as_deref()) {
        Ok(token) => {
            let diamond = generator.build(&token);
            serde_json::json!({
                "rows": diamond.rows(),
                "width": diamond.width(),
                "error": null,
                "kind": null
            })
            .to_string()
        }
        Err(e) => serde_json::json!({
            "rows": [],
            "width": 0,
            "error": e.to_string(),
            "kind": e.kind().to_string()
        })
        .to_string(),
    }
}
