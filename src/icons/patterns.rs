use std::sync::OnceLock;

use regex::Regex;

use crate::error::StepResult;

/// Matches the id of every `<symbol>` element in a generated sprite.
pub fn symbol_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"<symbol\s+id="([^"]*)""#).expect("invalid symbol regex"))
}

/// Matches the `d` value of each `"path", { d: "..." }` literal in a compiled icon module.
///
/// Whitespace, including newlines, is allowed between every token. Attributes following
/// `d`, such as the `opacity` of two-tone layers, are ignored.
pub fn svg_path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""path"\s*,\s*\{\s*d\s*:\s*"([^"]*)""#).expect("invalid svg path regex")
    })
}

/// Build the pattern matching `import <anything> from "<icon_library>/<Icon>"` on one line.
pub fn icon_import_pattern(icon_library: &str) -> StepResult<Regex> {
    let library = regex::escape(icon_library.trim_end_matches('/'));
    Ok(Regex::new(&format!(r#"import.*?from\s+"{library}/([^"]+)""#))?)
}
