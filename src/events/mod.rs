pub mod click;
pub mod keyboard;
pub mod scroll;
