//! Flags shared by every command.

use std::path::PathBuf;

use vibe_diagnostic::emitter::ColorMode;
use vibe_parse::{ParseOptions, RecoveryMode};

/// Errors the driver reports itself, before any source is parsed.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("unknown option `{0}`")]
    UnknownFlag(String),
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },
    #[error("missing file path")]
    MissingPath,
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown error code `{0}`")]
    UnknownCode(String),
}

/// Parsed command-line flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub parse: ParseOptions,
    pub color: ColorMode,
    /// Positional arguments, in order.
    pub paths: Vec<String>,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            parse: ParseOptions::default(),
            color: ColorMode::Auto,
            paths: Vec::new(),
        }
    }
}

impl CliOptions {
    /// Parse the arguments following the command name.
    ///
    /// Recognizes `--max-depth=N`, `--fail-fast` and
    /// `--color=auto|always|never`; anything else starting with `-` is an
    /// error.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, CliError> {
        let mut options = CliOptions::default();
        for arg in args {
            let arg = arg.as_ref();
            if let Some(value) = arg.strip_prefix("--max-depth=") {
                options.parse.max_depth = value.parse().map_err(|_| CliError::InvalidValue {
                    flag: "--max-depth",
                    value: value.to_string(),
                })?;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                options.color = ColorMode::from_flag(value).ok_or_else(|| CliError::InvalidValue {
                    flag: "--color",
                    value: value.to_string(),
                })?;
            } else if arg == "--fail-fast" {
                options.parse.recovery = RecoveryMode::FailFast;
            } else if arg.starts_with('-') && arg != "-" {
                return Err(CliError::UnknownFlag(arg.to_string()));
            } else {
                options.paths.push(arg.to_string());
            }
        }
        Ok(options)
    }

    /// The single file path a command operates on.
    pub fn path(&self) -> Result<&str, CliError> {
        self.paths.first().map(String::as_str).ok_or(CliError::MissingPath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = CliOptions::parse(&["main.vibe"]).unwrap_or_default();
        assert_eq!(options.parse, ParseOptions::default());
        assert_eq!(options.color, ColorMode::Auto);
        assert_eq!(options.path().ok(), Some("main.vibe"));
    }

    #[test]
    fn test_flags() {
        let options = CliOptions::parse(&["--max-depth=32", "a.vibe", "--fail-fast", "--color=never"])
            .unwrap_or_default();
        assert_eq!(options.parse.max_depth, 32);
        assert_eq!(options.parse.recovery, RecoveryMode::FailFast);
        assert_eq!(options.color, ColorMode::Never);
        assert_eq!(options.paths, vec!["a.vibe".to_string()]);
    }

    #[test]
    fn test_bad_flags() {
        assert!(matches!(
            CliOptions::parse(&["--max-depth=lots"]),
            Err(CliError::InvalidValue { flag: "--max-depth", .. })
        ));
        assert!(matches!(
            CliOptions::parse(&["--colour=always"]),
            Err(CliError::UnknownFlag(flag)) if flag == "--colour=always"
        ));
        assert!(matches!(
            CliOptions::parse::<&str>(&[]).and_then(|o| o.path().map(str::to_owned)),
            Err(CliError::MissingPath)
        ));
    }
}
