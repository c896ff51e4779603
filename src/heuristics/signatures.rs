//! Import lines and parameter/return annotations

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lang::LangFamily;

/// Used when a parameter has no annotation
pub const NO_PARAM_DESCRIPTION: &str = "No description provided";

static JS_RETURNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@returns?\s+\{[^}]*\}\s+([^\n]+)").expect("valid @returns regex")
});

static PY_RETURN_ARROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"->([^:]+):").expect("valid return arrow regex"));

/// Lines that start with an import keyword, verbatim and in file order
///
/// JavaScript: `import ...` and `const ... require(...)`.
/// Python: `import ...` and `from ...`.
pub fn imports(source: &str, family: LangFamily) -> Vec<String> {
    source
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            match family {
                LangFamily::JavaScript => {
                    trimmed.starts_with("import")
                        || (trimmed.starts_with("const") && line.contains("require"))
                }
                LangFamily::Python => trimmed.starts_with("import") || trimmed.starts_with("from"),
            }
        })
        .map(str::to_string)
        .collect()
}

/// Description of one parameter
///
/// JavaScript looks for `@param {Type} name text` (the type is optional),
/// Python for `name: text`. Falls back to [`NO_PARAM_DESCRIPTION`].
pub fn param_description(text: &str, param: &str, family: LangFamily) -> String {
    let name = regex::escape(param);
    let pattern = match family {
        LangFamily::JavaScript => format!(r"@param\s+(?:\{{[^}}]*\}}\s+)?{}\s+([^\n]+)", name),
        LangFamily::Python => format!(r"\b{}\s*:\s*([^\n]+)", name),
    };

    Regex::new(&pattern)
        .ok()
        .and_then(|re| {
            re.captures(text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim_end().to_string())
        })
        .unwrap_or_else(|| NO_PARAM_DESCRIPTION.to_string())
}

/// Description of the return value, empty when none is annotated
///
/// JavaScript reads `@return {Type} text` / `@returns {Type} text`,
/// Python the `-> Type:` arrow of the signature.
pub fn return_description(text: &str, family: LangFamily) -> String {
    let re = match family {
        LangFamily::JavaScript => &*JS_RETURNS,
        LangFamily::Python => &*PY_RETURN_ARROW,
    };
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
