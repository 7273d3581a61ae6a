//! Host input types and their translation from winit

mod types;
pub mod winit_adapter;

pub use types::{KeyCode, MouseButton, MouseClick};
pub use winit_adapter::{key_from_winit, mouse_button_from_winit};
