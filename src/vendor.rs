//! Bridges to optional third-party scripts (AOS, VanillaTilt, canvas-confetti).
//!
//! Each one is looked up on the global object at call time; when the page did
//! not load it, the call is a no-op.

use crate::constants::*;
use site_core::constants::*;
use site_core::{confetti_origins, ConfettiBurst};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn global(name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn method(target: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
}

fn js_object(entries: &[(&str, JsValue)]) -> js_sys::Object {
    let obj = js_sys::Object::new();
    for (key, value) in entries {
        _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj
}

/// Scroll-reveal animations.
pub fn init_aos() {
    let Some(aos) = global(AOS_GLOBAL) else {
        return;
    };
    let Some(init) = method(&aos, "init") else {
        return;
    };
    let opts = js_object(&[
        ("duration", AOS_DURATION_MS.into()),
        ("offset", AOS_OFFSET_PX.into()),
        ("easing", AOS_EASING.into()),
        ("once", false.into()),
    ]);
    if let Err(e) = init.call1(&aos, &opts) {
        log::warn!("[vendor] AOS.init failed: {:?}", e);
    }
}

/// 3D hover tilt on cards.
pub fn init_vanilla_tilt(document: &web::Document) {
    let Some(tilt) = global(TILT_GLOBAL) else {
        return;
    };
    let (Some(init), Ok(cards)) = (method(&tilt, "init"), document.query_selector_all(TILT_CARDS))
    else {
        return;
    };
    let opts = js_object(&[
        ("max", TILT_MAX_DEG.into()),
        ("speed", TILT_SPEED_MS.into()),
        ("glare", true.into()),
        ("max-glare", TILT_MAX_GLARE.into()),
        ("perspective", TILT_PERSPECTIVE_PX.into()),
    ]);
    if let Err(e) = init.call2(&tilt, &cards, &opts) {
        log::warn!("[vendor] VanillaTilt.init failed: {:?}", e);
    }
}

fn fire_confetti(confetti: &js_sys::Function, particles: f64, origin: (f64, f64)) {
    let origin = js_object(&[("x", origin.0.into()), ("y", origin.1.into())]);
    let opts = js_object(&[
        ("startVelocity", CONFETTI_START_VELOCITY.into()),
        ("spread", CONFETTI_SPREAD.into()),
        ("ticks", CONFETTI_TICKS.into()),
        ("zIndex", CONFETTI_Z_INDEX.into()),
        ("particleCount", particles.into()),
        ("origin", origin.into()),
    ]);
    _ = confetti.call1(&JsValue::NULL, &opts);
}

/// Two fading bursts of confetti from the lower corners for a couple of seconds.
pub fn launch_confetti() {
    let Some(confetti) = global(CONFETTI_GLOBAL).and_then(|v| v.dyn_into::<js_sys::Function>().ok())
    else {
        log::debug!("[vendor] confetti not loaded");
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let burst = ConfettiBurst::start(js_sys::Date::now());
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_tick = handle.clone();
    let mut rng = rand::thread_rng();

    let tick = Closure::wrap(Box::new(move || {
        match burst.particle_count(js_sys::Date::now()) {
            Some(particles) => {
                for origin in confetti_origins(&mut rng) {
                    fire_confetti(&confetti, particles, origin);
                }
            }
            None => {
                if let (Some(w), Some(id)) = (web::window(), handle_tick.take()) {
                    w.clear_interval_with_handle(id);
                }
            }
        }
    }) as Box<dyn FnMut()>);

    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        CONFETTI_INTERVAL_MS,
    ) {
        Ok(id) => handle.set(Some(id)),
        Err(e) => log::warn!("[vendor] setInterval failed: {:?}", e),
    }
    tick.forget();
}
