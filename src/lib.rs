// showcase_core: deterministic engine for the product showcase page.
// All decisions live here; the host JS snapshots the document, forwards
// timestamped events, applies the returned patches, and arms one timer.

mod carousel;
mod cart;
mod cycler;
mod error;
mod page;
mod search;
mod toast;
mod types;

use wasm_bindgen::prelude::*;

pub use carousel::Carousel;
pub use cart::{CartCounter, STORAGE_KEY};
pub use cycler::ScreenCycler;
pub use error::EngineError;
pub use page::{PageState, ShowcasePage};
pub use search::SearchFilter;
pub use toast::ToastStack;
pub use types::*;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed page engine for JavaScript interop.
///
/// # Example config JSON
/// ```json
/// {
///   "persisted_cart": "3",
///   "cards": [{ "id": "card1", "title": "Aurora Laptop Pro", "add_control": "add1" }],
///   "slides": [{ "id": "slide0", "left": { "image": "imgL0", "current": "a.png", "screen": "a.png" } }],
///   "cart_badge": "cartCount",
///   "products_section": "products"
/// }
/// ```
#[wasm_bindgen]
pub struct WasmShowcasePage {
    inner: ShowcasePage,
}

#[wasm_bindgen]
impl WasmShowcasePage {
    /// Create the engine from the page snapshot and the load instant.
    ///
    /// # Arguments
    /// * `config_json` - JSON string with the `PageConfig` structure
    /// * `now_ms` - page-relative load instant in milliseconds
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, now_ms: u64) -> Result<WasmShowcasePage, JsValue> {
        let config: PageConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        let inner = ShowcasePage::new(config, Timestamp::from_millis(now_ms))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(WasmShowcasePage { inner })
    }

    /// Initial render batch to apply right after construction.
    pub fn mount(&self) -> Result<String, JsValue> {
        to_json(&self.inner.mount())
    }

    /// Process a batch of UI events and return the resulting render batch.
    /// This is the main entry point, batched to minimize JS↔WASM crossings.
    pub fn handle_events(&mut self, batch_json: &str) -> Result<String, JsValue> {
        let batch: EventBatch = serde_json::from_str(batch_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid events: {}", e)))?;

        to_json(&self.inner.handle_batch(&batch))
    }

    /// Earliest pending deadline in page milliseconds, if any timer is armed.
    /// The host arms a single `setTimeout` for it and sends a `Tick`.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.inner.next_deadline().map(|t| t.as_millis())
    }

    /// Debug snapshot of the page state.
    pub fn state_json(&self) -> Result<String, JsValue> {
        to_json(&self.inner.state())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "persisted_cart": "2",
        "cards": [
            { "id": "card1", "title": "Aurora Laptop Pro", "add_control": "add1" }
        ],
        "slides": [
            { "id": "slide0", "left": { "image": "imgL0", "current": "a.png", "screen": "a.png" } },
            { "id": "slide1", "left": { "image": "imgL1", "current": "b.png", "screen": "b.png" } }
        ],
        "cart_badge": "cartCount",
        "products_section": "products"
    }"#;

    #[test]
    fn page_creation_works() {
        let page = WasmShowcasePage::new(CONFIG, 0);
        assert!(page.is_ok());
    }

    #[test]
    fn mount_and_events_round_trip_as_json() {
        let mut page = WasmShowcasePage::new(CONFIG, 0).unwrap();

        let mounted = page.mount().unwrap();
        assert!(mounted.contains("CreateDot"));
        assert!(mounted.contains("\"next_deadline\":4500"));

        let rendered = page
            .handle_events(
                r#"{"events":[{"timestamp":100,"event":{"type":"AddToCart","control":"add1"}}]}"#,
            )
            .unwrap();
        assert!(rendered.contains("\"text\":\"3\""));
        assert!(rendered.contains("PersistCart"));

        assert_eq!(page.next_deadline_ms(), Some(1200));
        assert!(page.state_json().unwrap().contains("\"cart_count\":3"));
    }
}
