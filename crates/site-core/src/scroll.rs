use crate::constants::{PARALLAX_DEPTH_STEP, PARALLAX_DIVISOR, SCROLL_TOP_THRESHOLD_PX};

/// Resolve the selector an in-page link should scroll to.
///
/// `href` wins over `data-scroll`; an empty value or a bare `#` means the
/// link has no target and the browser default is left alone.
pub fn scroll_target<'a>(href: Option<&'a str>, data_scroll: Option<&'a str>) -> Option<&'a str> {
    let raw = href.filter(|h| !h.is_empty()).or(data_scroll)?;
    if raw.is_empty() || raw == "#" {
        return None;
    }
    Some(raw)
}

#[inline]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD_PX
}

/// Vertical parallax shift for the `index`-th `[data-parallax]` element.
#[inline]
pub fn parallax_offset(index: usize, scroll_y: f64) -> f64 {
    let depth = (index as f64 + 1.0) * PARALLAX_DEPTH_STEP;
    scroll_y * depth / PARALLAX_DIVISOR
}

#[inline]
pub fn translate3d(x: f64, y: f64) -> String {
    format!("translate3d({}px, {}px, 0)", x, y)
}

/// Keep the elements that could be converted, each paired with its position
/// in the original match list. Parallax depth follows that position, so an
/// unusable match must not shift the layers after it.
pub fn indexed_layers<T>(matches: impl IntoIterator<Item = Option<T>>) -> Vec<(usize, T)> {
    matches
        .into_iter()
        .enumerate()
        .filter_map(|(i, m)| m.map(|el| (i, el)))
        .collect()
}
