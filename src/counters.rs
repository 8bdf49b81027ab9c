use crate::constants::{COUNTER_ITEMS, COUNTER_TARGET_ATTR, HERO_ORBS};
use crate::dom;
use crate::frame::FrameLoop;
use site_core::constants::COUNTER_VISIBLE_THRESHOLD;
use site_core::{indexed_layers, CounterAnimation};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Start each `[data-counter]` once it is mostly on screen. Counters animate a
/// single time; the observer forgets them as soon as they start.
pub fn wire_counters(document: &web::Document, frame_loop: &FrameLoop) -> anyhow::Result<()> {
    let counters = dom::query_all(document, COUNTER_ITEMS);
    if counters.is_empty() {
        return Ok(());
    }

    let frame_loop = frame_loop.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let el = entry.target();
                let target = el.get_attribute(COUNTER_TARGET_ATTR);
                let anim = CounterAnimation::from_attr(target.as_deref());
                observer.unobserve(&el);
                frame_loop.start_counter(el, anim);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(COUNTER_VISIBLE_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for counter in &counters {
        observer.observe(counter);
    }
    callback.forget();
    log::info!("[counters] observing {}", counters.len());
    Ok(())
}

/// Register hero orbs with the frame loop.
pub fn wire_orbs(document: &web::Document, frame_loop: &FrameLoop) {
    let orbs = dom::query_all(document, HERO_ORBS);
    for (i, el) in indexed_layers(orbs.iter().map(dom::as_html)) {
        frame_loop.add_orb(el, i);
    }
}
