use crate::constants::*;
use crate::dom;
use site_core::{aria_bool, scroll_target, should_close_on_link, NavMenu};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn sync_nav(menu: &NavMenu, toggle: &web::Element, links: &web::Element) {
    dom::set_class(links, OPEN_CLASS, menu.is_open());
    _ = toggle.set_attribute("aria-expanded", aria_bool(menu.is_open()));
}

/// Hamburger toggle plus auto-close when a link is tapped on mobile widths.
pub fn wire_navigation(document: &web::Document) {
    let (Some(toggle), Some(links)) = (
        dom::query_doc(document, NAV_TOGGLE),
        dom::query_doc(document, NAV_LINKS),
    ) else {
        log::debug!("[nav] no navigation markup");
        return;
    };
    let menu = Rc::new(RefCell::new(NavMenu::new(
        links.class_list().contains(OPEN_CLASS),
    )));

    {
        let menu = menu.clone();
        let (toggle_c, links_c) = (toggle.clone(), links.clone());
        dom::add_click_listener(&toggle, move |_| {
            let mut m = menu.borrow_mut();
            m.toggle();
            sync_nav(&m, &toggle_c, &links_c);
        });
    }

    for link in dom::query_all(document, NAV_LINK) {
        let menu = menu.clone();
        let (toggle_c, links_c) = (toggle.clone(), links.clone());
        dom::add_click_listener(&link, move |_| {
            if should_close_on_link(dom::inner_width()) {
                let mut m = menu.borrow_mut();
                m.close();
                sync_nav(&m, &toggle_c, &links_c);
            }
        });
    }
}

/// In-page anchors scroll smoothly instead of jumping.
pub fn wire_smooth_scroll(document: &web::Document) {
    for link in dom::query_all(document, SCROLL_LINKS) {
        let doc = document.clone();
        let link_c = link.clone();
        dom::add_click_listener(&link, move |ev| {
            let href = link_c.get_attribute("href");
            let data = link_c.get_attribute("data-scroll");
            let Some(selector) = scroll_target(href.as_deref(), data.as_deref()) else {
                return;
            };
            let Some(target) = dom::query_doc(&doc, selector) else {
                return;
            };
            ev.prevent_default();
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}

/// "Back to top" button; visibility is handled in `scroll::wire_scroll_effects`.
pub fn wire_scroll_top_button(document: &web::Document) {
    let Some(button) = dom::query_doc(document, SCROLL_TOP_BUTTON) else {
        return;
    };
    dom::add_click_listener(&button, |_| {
        if let Some(w) = web::window() {
            let opts = web::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&opts);
        }
    });
}

/// Each FAQ question expands or collapses its own item.
pub fn wire_faq(document: &web::Document) {
    for item in dom::query_all(document, FAQ_ITEM) {
        let (Some(button), Some(_answer)) = (
            dom::query(&item, FAQ_QUESTION),
            dom::query(&item, FAQ_ANSWER),
        ) else {
            continue;
        };
        let (item_c, button_c) = (item.clone(), button.clone());
        dom::add_click_listener(&button, move |_| {
            let open = dom::toggle_class(&item_c, OPEN_CLASS);
            _ = button_c.set_attribute("aria-expanded", aria_bool(open));
        });
    }
}
