use crate::constants::{PARALLAX_ITEMS, SCROLL_TOP_BUTTON, VISIBLE_CLASS};
use crate::dom;
use site_core::{indexed_layers, parallax_offset, scroll_top_visible, translate3d};
use web_sys as web;

fn apply_parallax(layers: &[(usize, web::HtmlElement)], scroll_y: f64) {
    for (i, el) in layers {
        dom::set_style(el, "transform", &translate3d(0.0, parallax_offset(*i, scroll_y)));
    }
}

/// Scroll-top visibility and parallax layers, evaluated now and on every scroll.
pub fn wire_scroll_effects(document: &web::Document) {
    let button = dom::query_doc(document, SCROLL_TOP_BUTTON);
    let matches = dom::query_all(document, PARALLAX_ITEMS);
    let parallax = indexed_layers(matches.iter().map(dom::as_html));
    if button.is_none() && parallax.is_empty() {
        return;
    }

    let update = move || {
        let y = dom::scroll_y();
        if let Some(b) = &button {
            dom::set_class(b, VISIBLE_CLASS, scroll_top_visible(y));
        }
        apply_parallax(&parallax, y);
    };
    update();
    dom::add_window_listener("scroll", true, update);
}
