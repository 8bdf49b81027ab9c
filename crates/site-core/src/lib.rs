pub mod anim;
pub mod constants;
pub mod error;
pub mod geo;
pub mod konami;
pub mod nav;
pub mod scroll;

pub use anim::*;
pub use error::ConfigError;
pub use geo::*;
pub use konami::*;
pub use nav::*;
pub use scroll::*;
