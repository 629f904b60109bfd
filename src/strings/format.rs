//! Lenient `%s` template formatting.
//!
//! Each `%s` in the template takes the next argument, left to right. Nothing
//! here fails on a count mismatch:
//!
//! - placeholders left over once the arguments run out stay in the output
//!   as a literal `%s`
//! - arguments left over once the placeholders run out are appended as
//!   ` [a, b, c]`
//! - an absent template or argument renders as `null`
//!
//! ```
//! use nullsafe_strings::lenient_format;
//!
//! assert_eq!(lenient_format!("%s + %s = %s", 1, 2, 3), "1 + 2 = 3");
//! assert_eq!(lenient_format!("%s, %s", "A", "B", "C", "D"), "A, B [C, D]");
//! assert_eq!(lenient_format!("%s, %s, %s", "A"), "A, %s, %s");
//! ```

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::StringUtils;
use crate::error::{StringsError, StringsResult};

/// Rendered in place of an argument whose `Display` implementation fails
pub const FAILED_ARGUMENT: &str = "<argument failed to format: fmt::Error>";

/// Template markers and literals used by [`LenientFormatter`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub placeholder: String,
    pub null_literal: String,
    pub extras_open: String,
    pub extras_separator: String,
    pub extras_close: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        let markers = Markers::DEFAULT;
        Self {
            placeholder: markers.placeholder.to_string(),
            null_literal: markers.null_literal.to_string(),
            extras_open: markers.extras_open.to_string(),
            extras_separator: markers.extras_separator.to_string(),
            extras_close: markers.extras_close.to_string(),
        }
    }
}

impl FormatConfig {
    /// Validate configuration values
    pub fn validate(&self) -> StringsResult<()> {
        if self.placeholder.is_empty() {
            return Err(StringsError::config("format placeholder cannot be empty"));
        }
        Ok(())
    }

    fn markers(&self) -> Markers<'_> {
        Markers {
            placeholder: &self.placeholder,
            null_literal: &self.null_literal,
            extras_open: &self.extras_open,
            extras_separator: &self.extras_separator,
            extras_close: &self.extras_close,
        }
    }
}

#[derive(Clone, Copy)]
struct Markers<'a> {
    placeholder: &'a str,
    null_literal: &'a str,
    extras_open: &'a str,
    extras_separator: &'a str,
    extras_close: &'a str,
}

impl Markers<'static> {
    const DEFAULT: Self = Self {
        placeholder: "%s",
        null_literal: "null",
        extras_open: " [",
        extras_separator: ", ",
        extras_close: "]",
    };
}

/// Lenient formatter with configurable markers
#[derive(Debug, Clone, Default)]
pub struct LenientFormatter {
    config: FormatConfig,
}

impl LenientFormatter {
    /// Create new formatter
    pub fn new(config: FormatConfig) -> StringsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Substitute `args` into `template`
    pub fn format(&self, template: Option<&str>, args: &[Option<&dyn fmt::Display>]) -> String {
        format_with(self.config.markers(), template, args)
    }
}

impl StringUtils {
    /// Substitute `args` into `template` with the default `%s` markers.
    ///
    /// Never fails: unmatched placeholders stay literal and surplus arguments
    /// are appended in brackets. The [`lenient_format!`](crate::lenient_format)
    /// macro is shorter when every argument is present.
    pub fn lenient_format(template: Option<&str>, args: &[Option<&dyn fmt::Display>]) -> String {
        format_with(Markers::DEFAULT, template, args)
    }
}

fn format_with(markers: Markers<'_>, template: Option<&str>, args: &[Option<&dyn fmt::Display>]) -> String {
    let template = template.unwrap_or(markers.null_literal);
    let mut out = String::with_capacity(template.len() + 16 * args.len());

    let mut args = args.iter().enumerate();
    let mut rest = template;
    while args.len() > 0 {
        let Some(start) = rest.find(markers.placeholder) else {
            break;
        };
        out.push_str(&rest[..start]);
        if let Some((index, arg)) = args.next() {
            render_arg(&mut out, index, *arg, markers.null_literal);
        }
        rest = &rest[start + markers.placeholder.len()..];
    }
    out.push_str(rest);

    if args.len() > 0 {
        out.push_str(markers.extras_open);
        for (position, (index, arg)) in args.enumerate() {
            if position > 0 {
                out.push_str(markers.extras_separator);
            }
            render_arg(&mut out, index, *arg, markers.null_literal);
        }
        out.push_str(markers.extras_close);
    }

    out
}

fn render_arg(out: &mut String, index: usize, arg: Option<&dyn fmt::Display>, null_literal: &str) {
    let Some(arg) = arg else {
        out.push_str(null_literal);
        return;
    };

    let mark = out.len();
    if write!(out, "{}", arg).is_err() {
        warn!("Argument {} failed to format, substituting placeholder text", index);
        out.truncate(mark);
        out.push_str(FAILED_ARGUMENT);
    }
}

/// Format with `%s` placeholders, every argument present.
///
/// Expands to [`StringUtils::lenient_format`]. Call that directly to pass an
/// absent template or absent arguments.
#[macro_export]
macro_rules! lenient_format {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::StringUtils::lenient_format(
            ::core::option::Option::Some($template),
            &[$(::core::option::Option::Some(&$arg as &dyn ::core::fmt::Display)),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use fmt::Display;

    struct Broken;

    impl Display for Broken {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("half-written")?;
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_lenient_format() {
        assert_eq!(lenient_format!("Hello, %s!", "World"), "Hello, World!");
        assert_eq!(lenient_format!("%s + %s = %s", 1, 2, 3), "1 + 2 = 3");
        assert_eq!(lenient_format!("no placeholders"), "no placeholders");
        assert_eq!(lenient_format!(""), "");
    }

    #[test]
    fn test_more_args_than_placeholders() {
        assert_eq!(lenient_format!("%s, %s", "A", "B", "C", "D"), "A, B [C, D]");
        assert_eq!(lenient_format!("", 1), " [1]");
        assert_eq!(lenient_format!("x", 1, 2.5, 'c'), "x [1, 2.5, c]");
    }

    #[test]
    fn test_fewer_args_than_placeholders() {
        assert_eq!(lenient_format!("%s, %s, %s", "A"), "A, %s, %s");
        assert_eq!(lenient_format!("%s and %s"), "%s and %s");
    }

    #[test]
    fn test_absent_values() {
        assert_eq!(StringUtils::lenient_format(Some("%s"), &[None]), "null");
        assert_eq!(StringUtils::lenient_format(None, &[]), "null");
        assert_eq!(StringUtils::lenient_format(None, &[Some(&7 as &dyn Display), None]), "null [7, null]");
        assert_eq!(
            StringUtils::lenient_format(Some("%s-%s"), &[None, Some(&"b" as &dyn Display)]),
            "null-b"
        );
    }

    #[test]
    fn test_lone_percent_is_literal() {
        assert_eq!(lenient_format!("100%", "x"), "100% [x]");
        assert_eq!(lenient_format!("%d %s", "x"), "%d x");
        assert_eq!(lenient_format!("%%s", "x"), "%x");
        assert_eq!(lenient_format!("%S %s", "x"), "%S x");
    }

    #[test]
    fn test_argument_text_is_not_rescanned() {
        assert_eq!(lenient_format!("%s|%s", "%s", "b"), "%s|b");
    }

    #[test]
    fn test_failed_argument() {
        assert_eq!(
            lenient_format!("[%s] %s", Broken, "ok"),
            format!("[{}] ok", FAILED_ARGUMENT)
        );
        assert_eq!(lenient_format!("", Broken), format!(" [{}]", FAILED_ARGUMENT));
    }

    #[test]
    fn test_custom_markers() {
        let formatter = LenientFormatter::new(FormatConfig {
            placeholder: "{}".to_string(),
            null_literal: "nil".to_string(),
            extras_open: " <".to_string(),
            extras_separator: "; ".to_string(),
            extras_close: ">".to_string(),
        })
        .unwrap();

        assert_eq!(
            formatter.format(Some("{} and {} %s"), &[Some(&1 as &dyn Display), None, Some(&3 as &dyn Display)]),
            "1 and nil %s <3>"
        );
        assert_eq!(formatter.format(None, &[]), "nil");
    }

    #[test]
    fn test_default_formatter_matches_free_function() {
        let formatter = LenientFormatter::default();
        let args: [Option<&dyn Display>; 3] = [Some(&"A"), None, Some(&3)];
        assert_eq!(
            formatter.format(Some("%s %s"), &args),
            StringUtils::lenient_format(Some("%s %s"), &args)
        );
        assert_eq!(formatter.config(), &FormatConfig::default());
    }

    #[test]
    fn test_empty_placeholder_rejected() {
        let config = FormatConfig {
            placeholder: String::new(),
            ..FormatConfig::default()
        };
        assert!(matches!(
            LenientFormatter::new(config),
            Err(StringsError::Configuration { .. })
        ));
    }
}
