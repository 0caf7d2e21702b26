use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: lexer errors
/// - E1xxx: syntax errors
/// - E2xxx: resource limits
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unrecognized character
    E0002,
    /// Integer literal out of range
    E0003,
    /// Invalid escape sequence
    E0004,

    // Syntax Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Block never closed with `end`
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type
    E1005,
    /// Malformed parameter list
    E1006,
    /// Malformed argument list
    E1007,
    /// Class without members
    E1008,
    /// `case` without `when`
    E1009,
    /// Invalid class member
    E1010,

    // Resource Limits (E2xxx)
    /// Nesting too deep
    E2001,
}

/// The three error families of the front-end.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    Lex,
    Syntax,
    ResourceLimit,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E2001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E2001 => "E2001",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003 | ErrorCode::E0004 => {
                ErrorCategory::Lex
            }
            ErrorCode::E2001 => ErrorCategory::ResourceLimit,
            _ => ErrorCategory::Syntax,
        }
    }

    /// One-line summary used by `vibec help`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unrecognized character",
            ErrorCode::E0003 => "integer literal out of range",
            ErrorCode::E0004 => "invalid escape sequence",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "block is never closed with `end`",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected type",
            ErrorCode::E1006 => "malformed parameter list",
            ErrorCode::E1007 => "malformed argument list",
            ErrorCode::E1008 => "class body has no members",
            ErrorCode::E1009 => "`case` without `when`",
            ErrorCode::E1010 => "invalid class member",
            ErrorCode::E2001 => "nesting too deep",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code like `"E1003"`, case-insensitively.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_categories() {
        assert_eq!(ErrorCode::E0004.category(), ErrorCategory::Lex);
        assert_eq!(ErrorCode::E1003.category(), ErrorCategory::Syntax);
        assert_eq!(ErrorCode::E2001.category(), ErrorCategory::ResourceLimit);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::E1008.to_string(), "E1008");
    }

    #[test]
    fn test_parse_round_trips_every_code() {
        for &code in ErrorCode::ALL {
            assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
        }
        assert_eq!("e1003".parse::<ErrorCode>(), Ok(ErrorCode::E1003));
        assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
    }
}
