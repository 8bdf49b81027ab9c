use crate::constants::{CIRCLE_OVERLAY, LAT_ATTR, LON_ATTR, MAP_CONTAINER, SCALE_ATTR};
use crate::dom;
use site_core::{
    resolve_overlay, ContainerSize, GeoOverlay, OverlayConfig, OverlayGeometry, RenderTarget,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Writes overlay geometry into an element's inline style.
pub struct ElementTarget {
    el: web::HtmlElement,
}

impl RenderTarget for ElementTarget {
    fn apply(&mut self, g: &OverlayGeometry) {
        dom::set_style(&self.el, "width", &format!("{}px", g.width));
        dom::set_style(&self.el, "height", &format!("{}px", g.height));
        dom::set_style(&self.el, "left", &format!("{}px", g.left));
        dom::set_style(&self.el, "top", &format!("{}px", g.top));
    }
}

#[inline]
fn container_size(container: &web::HtmlElement) -> ContainerSize {
    ContainerSize::new(
        container.offset_width() as f64,
        container.offset_height() as f64,
    )
}

fn config_for(container: &web::Element) -> OverlayConfig {
    let lat = container.get_attribute(LAT_ATTR);
    let lon = container.get_attribute(LON_ATTR);
    let scale = container.get_attribute(SCALE_ATTR);
    OverlayConfig::from_attrs(lat.as_deref(), lon.as_deref(), scale.as_deref()).unwrap_or_else(
        |e| {
            log::warn!("[map] {}; using default overlay config", e);
            OverlayConfig::default()
        },
    )
}

/// First overlay element that is not nested in any map container.
fn stray_circle(document: &web::Document) -> Option<web::Element> {
    dom::query_all(document, CIRCLE_OVERLAY)
        .into_iter()
        .find(|el| matches!(el.closest(MAP_CONTAINER), Ok(None)))
}

/// Position every map overlay now and again on each window resize.
pub fn wire_geo_overlays(document: &web::Document) {
    for (i, container_el) in dom::query_all(document, MAP_CONTAINER).iter().enumerate() {
        let stray = if i == 0 { stray_circle(document) } else { None };
        let circle = resolve_overlay(i, dom::query(container_el, CIRCLE_OVERLAY), stray)
            .and_then(|el| dom::as_html(&el));
        let (Some(container), Some(circle)) = (dom::as_html(container_el), circle) else {
            log::debug!("[map] container {} has no overlay; skipping", i);
            continue;
        };

        let overlay = Rc::new(RefCell::new(GeoOverlay::new(
            config_for(container_el),
            ElementTarget { el: circle },
        )));
        overlay.borrow_mut().update(container_size(&container));

        let overlay_resize = overlay.clone();
        dom::add_window_listener("resize", false, move || {
            overlay_resize
                .borrow_mut()
                .update(container_size(&container));
        });
        log::info!("[map] overlay {} wired", i);
    }
}
