//! Full-page navigation.
//!
//! Dashboards are served outside this app, so leaving the sign-in page is a
//! document load rather than a router transition.

/// Replace the current document with `path`. No-op outside the browser.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            log::warn!("no window; cannot redirect to {path}");
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::warn!("redirect to {path} failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
