mod config;
mod controller;
mod cookie;
mod dom;
mod is_desktop;
mod macros;
mod requests;

pub use config::load_page_config;
pub use controller::{
    BeforeUnloadHook, CookieLookup, EndpointDom, PageController, PlatformDetector,
};
pub use cookie::DocumentCookies;
pub use dom::BrowserDom;
pub use is_desktop::NavigatorPlatform;
pub use requests::RequestHelper;
