pub mod buttons;
pub mod keyboard;
pub mod pointer;

pub use buttons::{enable_mode_buttons, wire_buttons};
pub use keyboard::wire_guess_input;
