//! Diagnostic system for the vibescript front-end.
//!
//! Every problem found while lexing or parsing becomes a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability (`E0xxx` lex, `E1xxx` syntax,
//!   `E2xxx` resource limits)
//! - a message saying what went wrong
//! - a primary label saying where, plus secondary labels for related places
//!   such as the opening keyword of an unclosed block
//! - for syntax errors, the token kinds that would have been accepted

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCategory, ErrorCode};
