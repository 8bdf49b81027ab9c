/// DOM hooks the page markup exposes to the script.
///
/// Selectors, class names and attribute names live here so markup changes
/// only touch one file.
// Navigation
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_LINKS: &str = ".nav-links";
pub const NAV_LINK: &str = ".nav-link";

// Scrolling
pub const SCROLL_LINKS: &str = "a[href^=\"#\"], [data-scroll]";
pub const SCROLL_TOP_BUTTON: &str = ".scroll-top";
pub const PARALLAX_ITEMS: &str = "[data-parallax]";

// Counters
pub const COUNTER_ITEMS: &str = "[data-counter]";
pub const COUNTER_TARGET_ATTR: &str = "data-counter-target";

// FAQ accordion
pub const FAQ_ITEM: &str = ".faq-item";
pub const FAQ_QUESTION: &str = ".faq-question";
pub const FAQ_ANSWER: &str = ".faq-answer";

// Decoration
pub const HERO_ORBS: &str = ".hero__orb";
pub const TILT_CARDS: &str = ".tilt-card";
pub const YEAR_ID: &str = "year";

// Map overlay
pub const MAP_CONTAINER: &str = ".map-container";
pub const CIRCLE_OVERLAY: &str = ".circle-overlay";
pub const LAT_ATTR: &str = "data-lat";
pub const LON_ATTR: &str = "data-lon";
pub const SCALE_ATTR: &str = "data-scale";

// State classes
pub const OPEN_CLASS: &str = "is-open";
pub const VISIBLE_CLASS: &str = "is-visible";

// Third-party globals, used only when the page loads them
pub const AOS_GLOBAL: &str = "AOS";
pub const TILT_GLOBAL: &str = "VanillaTilt";
pub const CONFETTI_GLOBAL: &str = "confetti";

// AOS settings
pub const AOS_DURATION_MS: f64 = 800.0;
pub const AOS_OFFSET_PX: f64 = 120.0;
pub const AOS_EASING: &str = "ease-out-quart";

// VanillaTilt settings
pub const TILT_MAX_DEG: f64 = 14.0;
pub const TILT_SPEED_MS: f64 = 400.0;
pub const TILT_MAX_GLARE: f64 = 0.25;
pub const TILT_PERSPECTIVE_PX: f64 = 900.0;
