//! `vibec explain`: describe an error code.

use vibe_diagnostic::{ErrorCategory, ErrorCode};

use crate::CliError;

pub fn explain_error(code: &str) -> Result<bool, CliError> {
    let parsed: ErrorCode = code
        .parse()
        .map_err(|()| CliError::UnknownCode(code.to_string()))?;
    println!("{}", explanation(parsed));
    Ok(true)
}

fn explanation(code: ErrorCode) -> String {
    let phase = match code.category() {
        ErrorCategory::Lex => "lexer",
        ErrorCategory::Syntax => "parser",
        ErrorCategory::ResourceLimit => "resource limit",
    };
    format!("{code}: {} ({phase})", code.description())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_explanation() {
        assert_eq!(
            explanation(ErrorCode::E1003),
            "E1003: block is never closed with `end` (parser)"
        );
        assert!(matches!(explain_error("E42"), Err(CliError::UnknownCode(_))));
    }
}
