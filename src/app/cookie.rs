use std::fmt::Debug;

use js_sys::wasm_bindgen::JsCast;
use leptos::prelude::document;
use web_sys::HtmlDocument;

use super::controller::CookieLookup;

/// Reads cookies from `document.cookie`.
pub struct DocumentCookies;

impl CookieLookup for DocumentCookies {
    fn get(&self, key: &str) -> Option<String> {
        let store = document()
            .dyn_into::<HtmlDocument>()
            .ok()
            .map(|html_document| html_document.cookie());
        cookie_from_store(store, key)
    }
}

/// `None` means the document has no cookie store at all.
fn cookie_from_store<E: Debug>(store: Option<Result<String, E>>, key: &str) -> Option<String> {
    match store {
        Some(Ok(cookies)) => models::cookie_value(&cookies, key),
        Some(Err(e)) => {
            log::warn!("Failed to read cookies: {e:?}");
            None
        }
        None => {
            log::warn!("Document has no cookie store");
            None
        }
    }
}
