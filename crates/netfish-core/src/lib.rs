//! Input guards, diagnostics and pure JSON helpers.
//!
//! # Architecture
//!
//! Every exported operation is validation-gated: guards run in a fixed order
//! (presence, then type, then domain checks), the first failing guard emits a
//! diagnostic through [`render_error`] and the operation returns
//! `Err(ValidationError)` without doing any work.
//!
//! - [`guard`] - Predicates and `require_*` guards over dynamic JSON input
//! - [`object`] - Map/slice/filter/duplicate checks over key-ordered mappings
//! - [`text`] - Sentence capitalization and space collapsing
//!
//! # Example
//!
//! ```
//! use netfish_core::{object, text};
//! use serde_json::json;
//!
//! let sliced = object::slice(&json!({"a": 1, "b": 2, "c": 3, "d": 4}), &json!(1), &json!(2)).unwrap();
//! assert_eq!(sliced, json!({"b": 2, "c": 3}));
//!
//! assert_eq!(text::capitalize("hello. world"), "Hello. World");
//! ```

pub use diagnostic::{DIAGNOSTIC_PREFIX, DIAGNOSTIC_TARGET, render_error, render_status_error};
pub use error::{Result, ValidationError};

mod diagnostic;
mod error;
pub mod guard;
pub mod object;
pub mod text;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;
