use crate::vendor;
use site_core::KonamiTracker;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Listen for the Konami code anywhere on the page and celebrate when it lands.
pub fn wire_konami() {
    let Some(window) = web::window() else {
        return;
    };
    let mut tracker = KonamiTracker::default();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if tracker.push(&ev.key()) {
            log::info!("[keys] konami code entered");
            vendor::launch_confetti();
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
