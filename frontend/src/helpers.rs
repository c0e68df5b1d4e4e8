//! Browser-side utilities shared by the portal components.
//!
//! - **User Feedback**: short-lived toast notifications for save, delete and
//!   load outcomes, and the blocking confirm dialog used before deletes.
//! - **Dirty Tracking**: MD5 fingerprints of form definitions, mirrored into the
//!   global `app_dirty` flag that the page's `beforeunload` handler reads.

use common::model::form::FormDefinition;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Displays a temporary notification at the bottom of the page.
///
/// The element is appended to `<body>`, styled inline, and removed after three
/// seconds. Nothing happens when there is no window or document.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Asks the user to confirm with the browser's native dialog. A missing window
/// or a dismissed dialog count as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Fingerprint of a definition as it would be saved.
pub fn form_md5(form: &FormDefinition) -> String {
    compute_md5(&serde_json::to_string(form).unwrap_or_default())
}

/// Sets the global `app_dirty` flag read by the page's `beforeunload` handler.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}
