use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    fn write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

/// Best effort: a refused or missing clipboard is only logged.
pub fn copy(text: String) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = match write_text(&text) {
            Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => log::debug!("Copied code {} to clipboard", text),
            Err(e) => log::warn!("Clipboard write failed: {:?}", e),
        }
    });
}
