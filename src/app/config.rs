use std::fmt::Display;

use js_sys::{wasm_bindgen::JsValue, Reflect};
use leptos::prelude::window;
use models::PageConfig;
use shared_constants::PAGE_CONFIG_GLOBAL;

/// Reads the page configuration from `window.pageControlConfig`.
///
/// Falls back to [`PageConfig::default`] when the global is missing or does not
/// deserialize.
pub fn load_page_config() -> PageConfig {
    let window: JsValue = window().into();
    let value = match Reflect::get(&window, &JsValue::from_str(PAGE_CONFIG_GLOBAL)) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to read `{PAGE_CONFIG_GLOBAL}`: {e:?}");
            return PageConfig::default();
        }
    };
    let parsed = (!value.is_undefined() && !value.is_null())
        .then(|| serde_wasm_bindgen::from_value::<PageConfig>(value));
    page_config_or_default(parsed)
}

/// `None` means the page did not set the global.
fn page_config_or_default<E: Display>(parsed: Option<Result<PageConfig, E>>) -> PageConfig {
    match parsed {
        Some(Ok(config)) => {
            log::debug!("Got page config {config:?}");
            config
        }
        Some(Err(e)) => {
            log::warn!("Ignoring malformed `{PAGE_CONFIG_GLOBAL}`: {e}");
            PageConfig::default()
        }
        None => PageConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::LinkBinding;

    #[test]
    fn test_missing_global_uses_default() {
        assert_eq!(
            page_config_or_default::<&str>(None),
            PageConfig::default()
        );
    }

    #[test]
    fn test_malformed_global_uses_default() {
        assert_eq!(
            page_config_or_default(Some(Err("invalid type: string, expected struct"))),
            PageConfig::default()
        );
    }

    #[test]
    fn test_page_config_from_global() {
        let config = PageConfig {
            csrf_cookie_name: "XSRF-TOKEN".to_string(),
            links: vec![LinkBinding::new("card", None)],
        };
        assert_eq!(
            page_config_or_default::<&str>(Some(Ok(config.clone()))),
            config
        );
    }
}
