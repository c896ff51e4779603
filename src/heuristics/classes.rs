//! Class member scanning and purpose inference

use once_cell::sync::Lazy;
use regex::Regex;

use crate::heuristics::explain::explain_functionality;
use crate::lang::LangFamily;

/// Used when a method's body cannot be located in the class text
pub const NO_METHOD_EXPLANATION: &str = "No detailed explanation available.";

/// Every property gets this sentence
pub const PROPERTY_PURPOSE: &str = "Stores data relevant to the class's functionality.";

/// Class purpose checklist; the first group with a hit wins
const CLASS_PURPOSE_SIGNALS: &[(&[&str], &str)] = &[
    (&["render", "component"], "be a UI component or view"),
    (&["model", "schema"], "represent a data model or structure"),
    (&["service", "api"], "provide a service or API interface"),
];

/// Purpose reported when no checklist entry matches
pub const DEFAULT_CLASS_PURPOSE: &str = "encapsulate related functionality and data";

static JS_METHOD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\w+\s*\([^)]*\)\s*\{").expect("valid method regex"));

/// Method definition lines, trimmed
///
/// JavaScript: lines starting with `function` or shaped like
/// `name(args) {`. Python: lines starting with `def `.
pub fn class_methods(text: &str, family: LangFamily) -> Vec<String> {
    text.lines()
        .filter(|line| {
            let trimmed = line.trim();
            match family {
                LangFamily::JavaScript => {
                    trimmed.starts_with("function") || JS_METHOD_LINE.is_match(line)
                }
                LangFamily::Python => trimmed.starts_with("def "),
            }
        })
        .map(|line| line.trim().to_string())
        .collect()
}

/// Instance attributes: the left-hand side of `this.` / `self.` lines
pub fn class_properties(text: &str, family: LangFamily) -> Vec<String> {
    let prefix = match family {
        LangFamily::JavaScript => "this.",
        LangFamily::Python => "self.",
    };
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with(prefix))
        .map(|line| line.split('=').next().unwrap_or(line).trim().to_string())
        .collect()
}

/// Text between a method line and the next method line (or the class end)
pub fn method_body<'a>(class_text: &'a str, method: &str, methods: &[String]) -> Option<&'a str> {
    let start = class_text.find(method)? + method.len();
    let rest = &class_text[start..];
    let end = methods
        .iter()
        .filter(|other| !other.is_empty())
        .filter_map(|other| rest.find(other.as_str()))
        .min()
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Explain one method from the keywords in its body
pub fn explain_method(method: &str, class_text: &str, methods: &[String]) -> String {
    match method_body(class_text, method, methods) {
        Some(body) => explain_functionality(body),
        None => NO_METHOD_EXPLANATION.to_string(),
    }
}

/// Purpose of a property; deliberately the same sentence for all of them
pub fn explain_property(_property: &str) -> &'static str {
    PROPERTY_PURPOSE
}

/// Method and property counts followed by the inferred purpose
pub fn explain_class_purpose(text: &str, family: LangFamily) -> String {
    let methods = class_methods(text, family);
    let properties = class_properties(text, family);

    let mut purpose = String::from("This class ");
    if !methods.is_empty() {
        purpose.push_str(&format!(
            "provides {} method(s) to perform various operations. ",
            methods.len()
        ));
    }
    if !properties.is_empty() {
        purpose.push_str(&format!(
            "It manages {} property/properties to maintain its state. ",
            properties.len()
        ));
    }

    purpose.push_str(&format!("It appears to {}.", infer_class_purpose(text)));
    purpose
}

/// First matching purpose clause for a class's text
pub fn infer_class_purpose(text: &str) -> &'static str {
    CLASS_PURPOSE_SIGNALS
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| text.contains(needle)))
        .map(|(_, purpose)| *purpose)
        .unwrap_or(DEFAULT_CLASS_PURPOSE)
}
