pub const CSRF_COOKIE_NAME: &str = "csrftoken";
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";
pub const DATA_ENDPOINT_ATTRIBUTE: &str = "data-endpoint";

pub const MAIN_NAVBAR_ITEM_CLASS: &str = "main-navbar-item";
pub const NAVBAR_MENU_PARENT_CLASS: &str = "navbar-menu-parent";
pub const FOOTER_LINK_CLASS: &str = "footer-link";

/// Name of the optional `window` property holding a page configuration object.
pub const PAGE_CONFIG_GLOBAL: &str = "pageControlConfig";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;
