use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `querySelector` that swallows selector errors.
#[inline]
pub fn query(scope: &web::Element, selector: &str) -> Option<web::Element> {
    scope.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_doc(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// `querySelectorAll` collected into elements; an invalid selector yields nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn as_html(el: &web::Element) -> Option<web::HtmlElement> {
    el.dyn_ref::<web::HtmlElement>().cloned()
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

/// Toggle `class` and return whether it is now present.
#[inline]
pub fn toggle_class(el: &web::Element, class: &str) -> bool {
    el.class_list().toggle(class).unwrap_or(false)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Window-level listener; `passive` marks it as never calling `preventDefault`.
pub fn add_window_listener(event: &str, passive: bool, mut handler: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn inner_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
