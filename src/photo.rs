//! Photo Encoding
//!
//! Reads an uploaded image into a `data:` URL so it can be stored
//! alongside the rest of the record as plain text.

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, ProgressEvent};

use crate::error::FormError;

fn js_error(e: JsValue) -> FormError {
    FormError::PhotoRead(format!("{:?}", e))
}

/// Encode `file` as a data URL (`data:<mime>;base64,...`)
pub async fn read_as_data_url(file: &File) -> Result<String, FormError> {
    let reader = FileReader::new().map_err(js_error)?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let loaded = reader.clone();
        let on_load = Closure::once_into_js(move |_: ProgressEvent| {
            let result = loaded.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let on_error = Closure::once_into_js(move |_: ProgressEvent| {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("file read failed"));
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;

    log::debug!("encoded photo '{}' ({} bytes)", file.name(), file.size());
    value
        .as_string()
        .ok_or_else(|| FormError::PhotoRead("reader returned no text".to_string()))
}
