use crate::dom;
use instant::Instant;
use site_core::{translate3d, CounterAnimation, FrameSchedule, OrbDrift};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct RunningCounter {
    el: web::Element,
    anim: CounterAnimation,
    started: Instant,
}

struct Orb {
    el: web::HtmlElement,
    drift: OrbDrift,
}

/// Everything animated from `requestAnimationFrame`.
pub struct FrameContext {
    counters: Vec<RunningCounter>,
    orbs: Vec<Orb>,
    origin: Instant,
}

impl Default for FrameContext {
    fn default() -> Self {
        Self {
            counters: Vec::new(),
            orbs: Vec::new(),
            origin: Instant::now(),
        }
    }
}

impl FrameContext {
    fn has_work(&self) -> bool {
        !self.counters.is_empty() || !self.orbs.is_empty()
    }

    /// Advance one frame; returns whether anything is still animating.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();

        self.counters.retain(|c| {
            let elapsed = (now - c.started).as_secs_f64();
            c.el.set_text_content(Some(&c.anim.display_at(elapsed)));
            !c.anim.is_finished(elapsed)
        });

        let t = (now - self.origin).as_secs_f64();
        for orb in &self.orbs {
            let offset = orb.drift.offset_at(t);
            dom::set_style(&orb.el, "transform", &translate3d(offset.x, offset.y));
        }
        self.has_work()
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// RAF loop that sleeps while there is nothing to animate and wakes when a
/// counter or orb is registered.
#[derive(Clone)]
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    schedule: Rc<RefCell<FrameSchedule>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn new() -> Self {
        let ctx = Rc::new(RefCell::new(FrameContext::default()));
        let schedule = Rc::new(RefCell::new(FrameSchedule::default()));
        let tick: Tick = Rc::new(RefCell::new(None));

        let (ctx_tick, schedule_tick, tick_clone) = (ctx.clone(), schedule.clone(), tick.clone());
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let has_work = ctx_tick.borrow_mut().frame();
            if schedule_tick.borrow_mut().after_frame(has_work) {
                request_frame(&tick_clone);
            }
        }) as Box<dyn FnMut()>));

        Self {
            ctx,
            schedule,
            tick,
        }
    }

    fn wake(&self) {
        if self.schedule.borrow_mut().wake() {
            request_frame(&self.tick);
        }
    }

    pub fn start_counter(&self, el: web::Element, anim: CounterAnimation) {
        el.set_text_content(Some(&anim.display_at(0.0)));
        self.ctx.borrow_mut().counters.push(RunningCounter {
            el,
            anim,
            started: Instant::now(),
        });
        self.wake();
    }

    pub fn add_orb(&self, el: web::HtmlElement, index: usize) {
        self.ctx.borrow_mut().orbs.push(Orb {
            el,
            drift: OrbDrift::for_index(index),
        });
        self.wake();
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

fn request_frame(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
