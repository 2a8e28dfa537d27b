use models::BackTopOptions;
use wasm_bindgen::JsValue;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("The options are not valid JSON: {0}")]
    InvalidJson(String),
    #[error("The options could not be deserialized: {0}")]
    Deserialize(String),
}

/// Reads button options from a plain JS object.
pub fn options_from_js(value: JsValue) -> Result<BackTopOptions, OptionsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| OptionsError::Deserialize(e.to_string()))
}

/// Reads button options from a JSON `data-*` attribute on `<body>`.
///
/// Returns `Ok(None)` when there is no body or no such attribute.
pub fn page_options(attribute: &str) -> Result<Option<BackTopOptions>, OptionsError> {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return Ok(None);
    };
    let Some(raw) = body.get_attribute(attribute) else {
        return Ok(None);
    };
    let value =
        js_sys::JSON::parse(&raw).map_err(|e| OptionsError::InvalidJson(format!("{e:?}")))?;
    options_from_js(value).map(Some)
}
