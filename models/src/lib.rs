use serde::Deserialize;
use shared_constants::{
    CSRF_COOKIE_NAME, FOOTER_LINK_CLASS, MAIN_NAVBAR_ITEM_CLASS, NAVBAR_MENU_PARENT_CLASS,
};
use std::fmt::Display;
use url::Url;

/// Base used only to check that relative endpoints resolve.
const RELATIVE_BASE: &str = "http://localhost/";

/// Schemes that run script instead of navigating.
const SCRIPT_SCHEMES: [&str; 3] = ["javascript", "data", "vbscript"];

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum EndpointError {
    #[error("The endpoint is empty")]
    Empty,
    #[error("The endpoint scheme `{0}` runs script and is not allowed")]
    UnsupportedScheme(String),
    #[error("The endpoint is not a valid URL: {0}")]
    Invalid(String),
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DomError {
    #[error("Failed to add `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
}

/// A validated navigation target read from a `data-endpoint` attribute.
///
/// The attribute text is kept as written, so navigating uses exactly what
/// the page author wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn parse(raw: &str) -> Result<Self, EndpointError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EndpointError::Empty);
        }

        match Url::parse(trimmed) {
            Ok(url) if SCRIPT_SCHEMES.contains(&url.scheme()) => {
                return Err(EndpointError::UnsupportedScheme(url.scheme().to_string()));
            }
            Ok(_) => {}
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base =
                    Url::parse(RELATIVE_BASE).map_err(|e| EndpointError::Invalid(e.to_string()))?;
                base.join(trimmed)
                    .map_err(|e| EndpointError::Invalid(e.to_string()))?;
            }
            Err(err) => return Err(EndpointError::Invalid(err.to_string())),
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Desktop,
    Mobile,
    Tablet,
    Unknown,
}

const TABLET_TOKENS: [&str; 5] = ["iPad", "Tablet", "Kindle", "Silk", "PlayBook"];
const PHONE_TOKENS: [&str; 8] = [
    "Mobi",
    "iPhone",
    "iPod",
    "Windows Phone",
    "IEMobile",
    "Opera Mini",
    "BlackBerry",
    "webOS",
];
const DESKTOP_TOKENS: [&str; 5] = ["Windows NT", "Macintosh", "X11", "Linux", "CrOS"];

impl Platform {
    /// Classifies a browsing environment from its user agent string and the
    /// number of touch points the navigator reports.
    ///
    /// Tablets are checked before phones since most tablet agents also carry
    /// a `Mobile` token. iPadOS presents itself as `Macintosh`, so a Mac agent
    /// with more than one touch point is a tablet.
    pub fn detect(user_agent: &str, max_touch_points: i32) -> Self {
        let has = |token: &str| user_agent.contains(token);

        if TABLET_TOKENS.iter().copied().any(has) || (has("Android") && !has("Mobile")) {
            return Platform::Tablet;
        }
        if PHONE_TOKENS.iter().copied().any(has) {
            return Platform::Mobile;
        }
        if has("Macintosh") && max_touch_points > 1 {
            return Platform::Tablet;
        }
        if DESKTOP_TOKENS.iter().copied().any(has) {
            return Platform::Desktop;
        }
        Platform::Unknown
    }

    pub fn is_desktop(self) -> bool {
        self == Platform::Desktop
    }
}

/// Looks up `key` in a `document.cookie` style string (`a=1; b=2`).
///
/// Returns `None` for a missing key or an empty value.
pub fn cookie_value(cookie_header: &str, key: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == key)
        .map(|(_, value)| {
            let value = value.trim();
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value)
                .to_string()
        })
        .filter(|value| !value.is_empty())
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkBinding {
    pub class_name: String,
    #[serde(default)]
    pub excluded_class_name: Option<String>,
}

impl LinkBinding {
    pub fn new(class_name: impl Into<String>, excluded_class_name: Option<&str>) -> Self {
        Self {
            class_name: class_name.into(),
            excluded_class_name: excluded_class_name.map(str::to_string),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub csrf_cookie_name: String,
    pub links: Vec<LinkBinding>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            csrf_cookie_name: CSRF_COOKIE_NAME.to_string(),
            links: vec![
                LinkBinding::new(MAIN_NAVBAR_ITEM_CLASS, Some(NAVBAR_MENU_PARENT_CLASS)),
                LinkBinding::new(FOOTER_LINK_CLASS, None),
            ],
        }
    }
}
