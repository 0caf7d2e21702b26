//! Declarations: methods (with their parameter lists and type annotations)
//! and classes.

mod class;
mod method;
mod params;
mod types;

use vibe_diagnostic::ErrorCode;
use vibe_ir::{NodeId, NodeKind, TokenTag};

use crate::error::{ErrorContext, ParseError};
use crate::recovery::TokenSet;
use crate::Parser;

/// Tokens that can start a method declaration.
const METHOD_START: TokenSet = TokenSet::new().with(TokenTag::Def).with(TokenTag::Private);

impl Parser<'_> {
    /// `export [private] def ...`; exactly one method follows.
    pub(crate) fn parse_export(&mut self) -> Result<NodeId, ParseError> {
        let start = self.cursor.advance().span;
        if !METHOD_START.contains(self.cursor.current_tag()) {
            let mut error = self
                .unexpected(ErrorCode::E1001, METHOD_START)
                .with_context(ErrorContext::Method);
            error.message = format!(
                "`export` must be followed by a method, found {}",
                self.cursor.current_tag()
            );
            return Err(error);
        }
        let method = self.parse_method()?;
        Ok(self.alloc(NodeKind::ExportMethod { method }, self.span_from(start)))
    }
}
