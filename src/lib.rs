//! Page initialization for server rendered sites: reads the CSRF cookie,
//! classifies the platform and turns `data-endpoint` elements into links.

mod app;

pub use app::*;
