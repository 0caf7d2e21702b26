//! `vibec lex` and `vibec parse`: dump the token stream or the tree.

use std::fmt::Write;

use vibe_diagnostic::Diagnostic;
use vibe_ir::TokenList;
use vibe_lexer::lex;
use vibe_parse::{parse_with_options, ParseError};

use super::{read_file, report};
use crate::{CliError, CliOptions};

/// Print one token per line: kind, span, source text.
pub fn lex_file(options: &CliOptions) -> Result<bool, CliError> {
    let path = options.path()?;
    let source = read_file(path)?;
    let output = lex(&source);
    print!("{}", render_tokens(&source, &output.tokens));

    let diagnostics: Vec<Diagnostic> = output
        .errors
        .iter()
        .map(|error| ParseError::from_lex_error(error).to_diagnostic())
        .collect();
    report(path, &source, options.color, &diagnostics);
    Ok(!output.has_errors())
}

/// Print the tree as an S-expression.
pub fn parse_file(options: &CliOptions) -> Result<bool, CliError> {
    let path = options.path()?;
    let source = read_file(path)?;
    let output = parse_with_options(&source, options.parse);
    println!("{}", output.tree.to_sexp());
    report(path, &source, options.color, &output.diagnostics());
    Ok(!output.has_errors())
}

fn render_tokens(source: &str, tokens: &TokenList) -> String {
    let mut out = String::new();
    for token in tokens.iter() {
        let text = source.get(token.span.to_range()).unwrap_or("");
        let kind = format!("{:?}", token.tag());
        let _ = writeln!(out, "{kind:<16} {:<10} {text:?}", token.span.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tokens() {
        let source = "x = :ok";
        let out = render_tokens(source, &lex(source).tokens);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Ident"));
        assert!(lines[0].ends_with("\"x\""));
        assert!(lines[2].starts_with("Symbol"));
        assert!(lines[3].starts_with("Eof"));
    }
}
