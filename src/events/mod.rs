pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_keyboard_navigation;
pub use pointer::{wire_input_handlers, InputWiring};
