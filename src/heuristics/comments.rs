//! Comment-based descriptions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lang::LangFamily;
use crate::utils::floor_char_boundary;

static JSDOC_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*\*(.*?)\*/").expect("valid JSDoc regex"));

static JSDOC_LINE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*\*\s?").expect("valid JSDoc prefix regex"));

static DOCSTRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)"""(.*?)""""#).expect("valid docstring regex"));

/// Strip a leading `//` or `#` marker from an already trimmed line
pub fn line_comment_text(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix("//")
        .or_else(|| trimmed.strip_prefix('#'))
        .map(str::trim)
}

/// Every single-line comment in the file, marker stripped, joined by newlines
///
/// Both `//` and `#` lines count regardless of language.
pub fn file_description(source: &str) -> String {
    source
        .lines()
        .filter_map(|line| line_comment_text(line.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Interior of the first JSDoc block or docstring in `text`, trimmed
///
/// Returns the empty string when there is none.
pub fn block_description(text: &str, family: LangFamily) -> String {
    match family {
        LangFamily::JavaScript => JSDOC_BLOCK
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| JSDOC_LINE_PREFIX.replace_all(m.as_str(), "").trim().to_string())
            .unwrap_or_default(),
        LangFamily::Python => DOCSTRING
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    }
}

/// The run of comment lines directly above byte offset `start`
///
/// Scanning stops at the first blank or non-comment line. Python decorator
/// lines are part of the run since they sit between a definition and its
/// comments.
pub fn leading_comments(source: &str, start: usize, family: LangFamily) -> &str {
    let start = floor_char_boundary(source, start);
    let before = &source[..start];

    // The declaration's own line may begin with `export ` or indentation
    let head_end = match before.rfind('\n') {
        Some(index) => index + 1,
        None => return "",
    };

    let mut block_start = head_end;
    let mut offset = 0;
    let lines: Vec<(usize, &str)> = before[..head_end]
        .split_inclusive('\n')
        .map(|line| {
            let entry = (offset, line);
            offset += line.len();
            entry
        })
        .collect();

    for (line_start, line) in lines.into_iter().rev() {
        if !is_leading_comment_line(line.trim(), family) {
            break;
        }
        block_start = line_start;
    }

    &source[block_start..head_end]
}

fn is_leading_comment_line(trimmed: &str, family: LangFamily) -> bool {
    match family {
        LangFamily::JavaScript => {
            trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
        }
        LangFamily::Python => trimmed.starts_with('#') || trimmed.starts_with('@'),
    }
}

/// Single-line comments of a leading block in the family's own syntax
fn line_comment_description(block: &str, family: LangFamily) -> String {
    let marker = family.line_comment_marker();
    block
        .lines()
        .filter_map(|line| line.trim().strip_prefix(marker))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Description of a function or class
///
/// The first JSDoc block or docstring found in the leading comments or the
/// declaration itself wins; otherwise the leading single-line comments are
/// used. Empty when neither exists.
pub fn declaration_description(leading: &str, slice: &str, family: LangFamily) -> String {
    let block = block_description(leading, family);
    if !block.is_empty() {
        return block;
    }
    let block = block_description(slice, family);
    if !block.is_empty() {
        return block;
    }
    line_comment_description(leading, family)
}
