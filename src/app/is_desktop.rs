use leptos::prelude::window;
use models::Platform;

use super::controller::PlatformDetector;

/// Detects the platform from `navigator.userAgent` and `navigator.maxTouchPoints`.
pub struct NavigatorPlatform;

impl PlatformDetector for NavigatorPlatform {
    fn is_desktop(&self) -> bool {
        let navigator = window().navigator();
        let user_agent = navigator.user_agent().unwrap_or_else(|e| {
            log::warn!("Failed to read user agent: {e:?}");
            String::new()
        });
        let platform = Platform::detect(&user_agent, navigator.max_touch_points());
        log::debug!("Got platform {platform:?} for `{user_agent}`");
        platform.is_desktop()
    }
}
