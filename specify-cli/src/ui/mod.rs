//! Interactive terminal widgets

pub mod keys;
pub mod select;

pub use keys::{KeyEvent, KeyInput, TermInput};
pub use select::{SelectMenu, SelectOption};
