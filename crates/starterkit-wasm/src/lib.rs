//! Browser binding of the theme store.
//!
//! The slot lives in `window.localStorage["theme"]`, the system signal is
//! `prefers-color-scheme`, and the presentation switch is the `dark` class
//! on `<html>`.

use starterkit_core::backend::{PreferenceBackend, Presentation, SLOT_KEY};
use starterkit_core::catalog::ApiDocs;
use starterkit_core::toggle::ThemeToggle;
use starterkit_core::{StarterKitError, Theme, ThemeStore};
use wasm_bindgen::prelude::*;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const DARK_CLASS: &str = "dark";

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn window() -> Result<web_sys::Window, StarterKitError> {
    web_sys::window().ok_or(StarterKitError::Unsupported("window"))
}

fn local_storage() -> Result<web_sys::Storage, StarterKitError> {
    match window()?.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StarterKitError::Unsupported("localStorage")),
        Err(e) => Err(StarterKitError::Storage(describe(&e))),
    }
}

struct BrowserBackend;

impl PreferenceBackend for BrowserBackend {
    fn read_slot(&self) -> Result<Option<String>, StarterKitError> {
        local_storage()?
            .get_item(SLOT_KEY)
            .map_err(|e| StarterKitError::Storage(describe(&e)))
    }

    fn write_slot(&mut self, value: &str) -> Result<(), StarterKitError> {
        local_storage()?
            .set_item(SLOT_KEY, value)
            .map_err(|e| StarterKitError::Storage(describe(&e)))
    }

    fn prefers_dark(&self) -> Result<bool, StarterKitError> {
        match window()?.match_media(DARK_QUERY) {
            Ok(Some(list)) => Ok(list.matches()),
            Ok(None) => Err(StarterKitError::Unsupported("matchMedia")),
            Err(e) => Err(StarterKitError::Appearance(describe(&e))),
        }
    }
}

/// Toggles the `dark` class on the document element.
struct RootClass;

impl Presentation for RootClass {
    fn apply_dark(&mut self, dark: bool) -> Result<(), StarterKitError> {
        let root = window()?
            .document()
            .and_then(|doc| doc.document_element())
            .ok_or(StarterKitError::Unsupported("document element"))?;
        let classes = root.class_list();
        let result = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        result.map_err(|e| StarterKitError::Presentation(describe(&e)))
    }
}

/// Theme state for one page. Create it once at the root and hand it to the
/// components that need it.
#[wasm_bindgen]
pub struct ThemeProvider {
    store: ThemeStore<BrowserBackend, RootClass>,
}

#[wasm_bindgen]
impl ThemeProvider {
    #[wasm_bindgen(constructor)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> ThemeProvider {
        ThemeProvider {
            store: ThemeStore::new(BrowserBackend, RootClass),
        }
    }

    /// Resolve and apply the theme. Call before first render.
    pub fn initialize(&mut self) -> String {
        self.store.initialize().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.store.theme().as_str().to_string()
    }

    #[wasm_bindgen(js_name = isDark)]
    pub fn is_dark(&self) -> bool {
        self.store.is_dark()
    }

    /// Throws on anything other than `"light"` or `"dark"`.
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, next: &str) -> Result<(), JsError> {
        let theme: Theme = next.parse()?;
        self.store.set_theme(theme);
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) -> String {
        ThemeToggle::activate(&mut self.store).as_str().to_string()
    }

    /// Accessible label for the nav-bar toggle button.
    #[wasm_bindgen(js_name = toggleLabel)]
    pub fn toggle_label(&self) -> String {
        ThemeToggle::of(&self.store).label.to_string()
    }
}

/// Pretty-printed example payload for an endpoint of the API reference.
#[wasm_bindgen(js_name = endpointExample)]
pub fn endpoint_example(id: &str, request: bool) -> Result<String, JsError> {
    let docs = ApiDocs::builtin();
    let endpoint = docs.endpoint(id)?;
    if request {
        endpoint
            .request_text()
            .ok_or_else(|| JsError::new(&format!("{id} has no request example")))
    } else {
        Ok(endpoint.response_text())
    }
}
