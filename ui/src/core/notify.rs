//! User-facing notifications.
//!
//! Recoverable failures (fetch errors, export with no data) surface as a
//! blocking alert on the web and as a log line on native builds, on top of
//! whatever the caller writes to the diagnostic log.

/// Show `message` to the user, blocking on the web platform.
pub fn blocking_alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        dioxus::logger::tracing::warn!("{message}");
    }
}
