//! JavaScript/TypeScript/JSX/TSX parser
//!
//! Parses the file with tree-sitter and records the top-level declarations:
//! - `function_declaration` and `generator_function_declaration`
//! - `class_declaration` and `abstract_class_declaration`
//! - either of the above wrapped in an `export_statement`
//!
//! Nested functions, methods and inner classes are not visited. A tree that
//! contains any syntax error is rejected as a whole.

use std::fs;
use std::path::Path;

use tree_sitter::Node;

use crate::error::{DocgenError, Result};
use crate::lang::Lang;
use crate::parsers::{ensure_file, SourceParser};
use crate::schema::{ClassRecord, FunctionRecord, ParseResult};

/// Name given to parameters that are not a plain identifier
/// (destructured, defaulted, rest, `this`)
pub const PLACEHOLDER_PARAM: &str = "<unnamed>";

/// Name given to anonymous `export default` declarations
pub const DEFAULT_EXPORT_NAME: &str = "default";

/// In-process parser for the JavaScript family
#[derive(Debug, Clone, Copy)]
pub struct JavaScriptParser {
    lang: Lang,
}

impl JavaScriptParser {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// Parse source text that has already been read
    pub fn parse_source(&self, source: &str) -> Result<ParseResult> {
        let language =
            self.lang
                .tree_sitter_language()
                .ok_or_else(|| DocgenError::ParseFailure {
                    message: format!("No grammar available for {}", self.lang.name()),
                })?;

        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| DocgenError::ParseFailure {
                message: format!("Failed to set language: {:?}", e),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| DocgenError::ParseFailure {
                message: "Failed to parse file".to_string(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(DocgenError::ParseFailure {
                message: describe_syntax_error(&root),
            });
        }

        let mut result = ParseResult::empty();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            collect_declaration(&child, source, &mut result);
        }

        Ok(result)
    }
}

impl SourceParser for JavaScriptParser {
    fn language_name(&self) -> &'static str {
        "JavaScript"
    }

    fn try_parse(&self, path: &Path) -> Result<ParseResult> {
        ensure_file(path)?;
        let source = fs::read_to_string(path)?;
        self.parse_source(&source)
    }
}

fn collect_declaration(node: &Node, source: &str, result: &mut ParseResult) {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" => {
            result.functions.push(FunctionRecord {
                name: declaration_name(node, source),
                parameters: parameter_names(node, source),
                start: node.start_byte(),
                end: node.end_byte(),
            });
        }
        "class_declaration" | "abstract_class_declaration" => {
            result.classes.push(ClassRecord {
                name: declaration_name(node, source),
                start: node.start_byte(),
                end: node.end_byte(),
            });
        }
        "export_statement" => {
            if let Some(decl) = node.child_by_field_name("declaration") {
                collect_declaration(&decl, source, result);
            } else if let Some(value) = node.child_by_field_name("value") {
                // `export default function () {}` / `export default class {}`
                match value.kind() {
                    "function_expression" | "function" | "generator_function" => {
                        result.functions.push(FunctionRecord {
                            name: declaration_name(&value, source),
                            parameters: parameter_names(&value, source),
                            start: value.start_byte(),
                            end: value.end_byte(),
                        });
                    }
                    "class" => {
                        result.classes.push(ClassRecord {
                            name: declaration_name(&value, source),
                            start: value.start_byte(),
                            end: value.end_byte(),
                        });
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

fn declaration_name(node: &Node, source: &str) -> String {
    node.child_by_field_name("name")
        .map(|name| get_node_text(&name, source))
        .unwrap_or_else(|| DEFAULT_EXPORT_NAME.to_string())
}

/// Positional parameter names; anything but a bare identifier degrades to
/// [`PLACEHOLDER_PARAM`]
fn parameter_names(node: &Node, source: &str) -> Vec<String> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut names = Vec::new();
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        let name = match param.kind() {
            "comment" | "decorator" => continue,
            "identifier" => get_node_text(&param, source),
            "required_parameter" | "optional_parameter" => {
                let defaulted = param.child_by_field_name("value").is_some();
                match param.child_by_field_name("pattern") {
                    Some(pattern) if pattern.kind() == "identifier" && !defaulted => {
                        get_node_text(&pattern, source)
                    }
                    _ => PLACEHOLDER_PARAM.to_string(),
                }
            }
            _ => PLACEHOLDER_PARAM.to_string(),
        };
        names.push(name);
    }
    names
}

fn get_node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .unwrap_or("")
        .to_string()
}

fn describe_syntax_error(root: &Node) -> String {
    match first_error_node(*root) {
        Some(node) => {
            let pos = node.start_position();
            let what = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                "unexpected token".to_string()
            };
            format!("Syntax error ({}) at {}:{}", what, pos.row + 1, pos.column + 1)
        }
        None => "Syntax error".to_string(),
    }
}

fn first_error_node(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }
    None
}
