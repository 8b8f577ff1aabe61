//! `localStorage`-backed session store.

use reflections::session::SessionStore;
use reflections::{ClientError, ClientResult};
use wasm_bindgen::JsValue;

/// Session keys live directly in `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> ClientResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| ClientError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
    }
}

fn js_error(err: JsValue) -> ClientError {
    ClientError::Storage(format!("{:?}", err))
}

impl SessionStore for LocalStore {
    fn get_item(&self, key: &str) -> ClientResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> ClientResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> ClientResult<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
