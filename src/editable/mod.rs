//! Single-line text editing primitives.
//!
//! - [`caret`]: pure caret engine (pixel ↔ index, insert/delete/move at caret)
//! - [`EditConstraints`]: max length and character filter of a field
//! - [`MoveTarget`] / [`TextEditMsg`]: editing intents decoded from key presses
//!
//! # Example
//!
//! ```
//! use token_field::editable::{caret, EditConstraints, MoveTarget};
//!
//! let mut text = String::from("abc");
//! let index = caret::delete_backward(&mut text, 1);
//! assert_eq!((text.as_str(), index), ("bc", 0));
//!
//! let limited = EditConstraints::with_max_length(2);
//! assert!(!caret::insert_at(&mut text, 0, 'x', &limited));
//! assert_eq!(caret::move_caret(&text, index, MoveTarget::LineEnd), 2);
//! ```

pub mod caret;
mod constraints;
mod messages;

pub use constraints::{CharFilter, EditConstraints};
pub use messages::{MoveTarget, TextEditMsg};
