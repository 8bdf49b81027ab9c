#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod counters;
mod dom;
mod events;
mod frame;
mod overlay;
mod vendor;

fn set_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(constants::YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    let Some(document) = dom::window_document() else {
        return Err(JsValue::from_str("no document"));
    };
    if site_core::is_document_loading(&document.ready_state()) {
        let on_ready = Closure::wrap(Box::new(spawn_init) as Box<dyn FnMut()>);
        _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        );
        on_ready.forget();
    } else {
        spawn_init();
    }
    Ok(())
}

fn spawn_init() {
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    events::click::wire_navigation(&document);
    events::click::wire_smooth_scroll(&document);
    events::click::wire_scroll_top_button(&document);
    events::click::wire_faq(&document);
    events::scroll::wire_scroll_effects(&document);
    events::keyboard::wire_konami();

    vendor::init_aos();
    vendor::init_vanilla_tilt(&document);
    set_year(&document);

    overlay::wire_geo_overlays(&document);

    // The frame loop only runs once an orb or counter is registered
    let frame_loop = frame::FrameLoop::new();
    counters::wire_orbs(&document, &frame_loop);
    // Counters are decorative; a missing IntersectionObserver must not stop the page
    if let Err(e) = counters::wire_counters(&document, &frame_loop) {
        log::warn!("[counters] disabled: {:?}", e);
    }

    Ok(())
}
