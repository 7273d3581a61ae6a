//! token-field - single-line text fields on top of host label controls
//!
//! This crate provides the state machine behind a text input layered on a
//! host toolkit's clickable label: caret placement by keyboard or mouse,
//! single-focus arbitration across many fields, and key/click dispatch.
//! Drawing, text measurement and raw event delivery stay with the host,
//! behind the traits in [`host`].
//!
//! # Example
//!
//! ```
//! use token_field::host::{Color, ControlId, DisplayControl, FontId, Rect};
//! use token_field::input::{KeyCode, MouseClick};
//! use token_field::metrics::MonospaceMetrics;
//! use token_field::{FieldConfig, TextFields};
//!
//! struct Button(String);
//!
//! impl DisplayControl for Button {
//!     fn control_id(&self) -> ControlId { ControlId::from_raw(1) }
//!     fn bounds(&self) -> Rect { Rect::new(0.0, 0.0, 200.0, 20.0) }
//!     fn font(&self) -> FontId { FontId(0) }
//!     fn text_color(&self) -> Color { Color::BLACK }
//!     fn label(&self) -> String { self.0.clone() }
//!     fn set_label(&mut self, label: &str) { self.0 = label.to_string(); }
//! }
//!
//! let mut fields = TextFields::new(FieldConfig::default(), MonospaceMetrics::default());
//! let id = fields.create(&Button(String::new()), Some("helo"), 0.0, 0.0).unwrap();
//!
//! assert!(fields.handle_mouse_click(id, MouseClick::left(25.0, 5.0)));
//! assert!(fields.handle_key_press(id, KeyCode::Char('l')));
//! assert_eq!(fields.field(id).unwrap().text(), "hello");
//!
//! assert!(fields.handle_key_press(id, KeyCode::Return));
//! assert!(fields.activated(id));
//! assert!(!fields.activated(id));
//! ```

pub mod config;
pub mod config_paths;
pub mod directory;
pub mod dispatch;
pub mod editable;
pub mod error;
pub mod field;
pub mod focus;
pub mod host;
pub mod input;
pub mod metrics;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use config::FieldConfig;
pub use dispatch::TextFields;
pub use error::FieldError;
pub use field::{Field, FieldId, FieldStyle};
