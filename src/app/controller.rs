use std::rc::Rc;

use models::{DomError, Endpoint, PageConfig};
use shared_constants::DATA_ENDPOINT_ATTRIBUTE;

use super::requests::RequestHelper;
use crate::log_fn;

/// Read access to the page's cookie store.
pub trait CookieLookup {
    fn get(&self, key: &str) -> Option<String>;
}

/// Classifies the current browsing environment.
///
/// Implementations must not fail: anything unrecognised is non-desktop.
pub trait PlatformDetector {
    fn is_desktop(&self) -> bool;
}

/// Hook invoked when the page is about to unload.
pub type BeforeUnloadHook = Rc<dyn Fn()>;

/// The slice of the DOM the controller touches.
pub trait EndpointDom {
    type Element;

    /// Point in time snapshot of the elements currently carrying `class_name`.
    fn elements_with_class(&self, class_name: &str) -> Vec<Self::Element>;
    fn has_class(&self, element: &Self::Element, class_name: &str) -> bool;
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn on_click_navigate(&self, element: &Self::Element, endpoint: Endpoint)
        -> Result<(), DomError>;
    fn on_before_unload(&self, hook: BeforeUnloadHook) -> Result<(), DomError>;
}

/// Wires up a page once it has loaded.
///
/// The CSRF token and the desktop flag are read once on construction and never
/// change afterwards. [`PageController::activate`] is meant to run once per page
/// load; calling it again registers every listener a second time.
pub struct PageController<C, P, D> {
    csrf_token: Option<String>,
    is_desktop: bool,
    cookies: C,
    platform: P,
    requests: RequestHelper,
    dom: D,
    config: PageConfig,
    before_unload: BeforeUnloadHook,
}

impl<C, P, D> PageController<C, P, D>
where
    C: CookieLookup,
    P: PlatformDetector,
    D: EndpointDom,
{
    pub fn new(cookies: C, platform: P, dom: D, config: PageConfig) -> Self {
        let csrf_token = cookies.get(&config.csrf_cookie_name);
        let is_desktop = platform.is_desktop();
        log::debug!(
            "Got csrf token present: {}, is_desktop: {is_desktop}",
            csrf_token.is_some()
        );
        Self {
            requests: RequestHelper::new(csrf_token.clone()),
            csrf_token,
            is_desktop,
            cookies,
            platform,
            dom,
            config,
            before_unload: Rc::new(|| {}),
        }
    }

    /// Replaces the hook run from the `beforeunload` listener.
    pub fn with_before_unload(mut self, hook: impl Fn() + 'static) -> Self {
        self.before_unload = Rc::new(hook);
        self
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    pub fn is_desktop(&self) -> bool {
        self.is_desktop
    }

    pub fn cookies(&self) -> &C {
        &self.cookies
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn requests(&self) -> &RequestHelper {
        &self.requests
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Binds a navigating click handler to every element currently carrying
    /// `class_name`, skipping those that also carry `excluded_class_name`.
    ///
    /// Elements whose `data-endpoint` is missing or invalid are skipped.
    pub fn activate_data_endpoints(&self, class_name: &str, excluded_class_name: Option<&str>) {
        if class_name.is_empty() {
            log::warn!("Refusing to bind data endpoints for an empty class name");
            return;
        }
        let excluded_class_name = excluded_class_name.filter(|excluded| !excluded.is_empty());

        let elements = self.dom.elements_with_class(class_name);
        log::debug!("Found {} element(s) with class `{class_name}`", elements.len());

        for element in elements {
            if excluded_class_name.is_some_and(|excluded| self.dom.has_class(&element, excluded)) {
                continue;
            }

            let raw = self
                .dom
                .attribute(&element, DATA_ENDPOINT_ATTRIBUTE)
                .unwrap_or_default();
            let endpoint = match Endpoint::parse(&raw) {
                Ok(endpoint) => endpoint,
                Err(err) => {
                    log::warn!("Skipping `{class_name}` element with `{raw}`: {err}");
                    continue;
                }
            };

            if let Err(err) = self.dom.on_click_navigate(&element, endpoint) {
                log::error!("{err}");
            }
        }
    }

    pub fn activate_links(&self) {
        log_fn!("activate_links", {
            for link in &self.config.links {
                log_fn!(["activate_data_endpoints(`{}`)", link.class_name], {
                    self.activate_data_endpoints(
                        &link.class_name,
                        link.excluded_class_name.as_deref(),
                    );
                })
            }
        })
    }

    pub fn activate_listeners(&self) {
        log_fn!("activate_listeners", {
            if let Err(err) = self.dom.on_before_unload(Rc::clone(&self.before_unload)) {
                log::error!("{err}");
            }
        })
    }

    /// Runs [`Self::activate_links`] then [`Self::activate_listeners`].
    pub fn activate(&self) {
        log_fn!("activate", {
            self.activate_links();
            self.activate_listeners();
        })
    }
}
