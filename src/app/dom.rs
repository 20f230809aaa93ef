use js_sys::{
    wasm_bindgen::{prelude::Closure, JsCast},
    Function,
};
use leptos::prelude::{document, window};
use models::{DomError, Endpoint};
use web_sys::{BeforeUnloadEvent, Element, Event};

use super::controller::{BeforeUnloadHook, EndpointDom};

/// [`EndpointDom`] backed by the live browser document.
///
/// Listeners stay attached for the lifetime of the page, so their closures
/// are handed over to JS instead of being dropped.
pub struct BrowserDom;

impl EndpointDom for BrowserDom {
    type Element = Element;

    fn elements_with_class(&self, class_name: &str) -> Vec<Element> {
        // getElementsByClassName is live; copy it out before binding anything
        let collection = document().get_elements_by_class_name(class_name);
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .collect()
    }

    fn has_class(&self, element: &Element, class_name: &str) -> bool {
        element.class_list().contains(class_name)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn on_click_navigate(&self, element: &Element, endpoint: Endpoint) -> Result<(), DomError> {
        let click_listener = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_| {
            log::debug!("Navigating to {endpoint}");
            if let Err(e) = window().location().set_href(endpoint.as_str()) {
                log::error!("Failed to navigate to {endpoint}: {e:?}");
            }
        }));

        element
            .add_event_listener_with_callback(
                "click",
                click_listener.as_ref().unchecked_ref::<Function>(),
            )
            .map_err(|e| DomError::Listener {
                event: "click",
                reason: format!("{e:?}"),
            })?;
        click_listener.forget();
        Ok(())
    }

    fn on_before_unload(&self, hook: BeforeUnloadHook) -> Result<(), DomError> {
        let unload_listener =
            Closure::<dyn FnMut(BeforeUnloadEvent)>::wrap(Box::new(move |_| hook()));

        window()
            .add_event_listener_with_callback(
                "beforeunload",
                unload_listener.as_ref().unchecked_ref::<Function>(),
            )
            .map_err(|e| DomError::Listener {
                event: "beforeunload",
                reason: format!("{e:?}"),
            })?;
        unload_listener.forget();
        Ok(())
    }
}
