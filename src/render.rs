//! Markdown documentation renderer
//!
//! Selects a parser by extension, then walks the parsed records and asks the
//! heuristics for prose. Section order is fixed:
//! title, Overview, Dependencies, Functions, Classes.

use std::fs;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::heuristics::{
    class_methods, class_properties, declaration_description, explain_class_purpose,
    explain_functionality, explain_method, explain_property, file_description, imports,
    leading_comments, param_description, return_description,
};
use crate::lang::{Lang, LangFamily};
use crate::parsers::parser_for;
use crate::schema::{ClassRecord, FunctionRecord, ParseResult};
use crate::utils::slice_span;

/// The only format that is rendered; any other value is accepted and ignored
pub const DEFAULT_FORMAT: &str = "markdown";

/// Sentence used when a function has no parameters
pub const NO_PARAMETERS: &str = "This function does not take any parameters.";

/// Documentation generator holding its injected configuration
#[derive(Debug, Clone, Default)]
pub struct DocGenerator {
    config: GeneratorConfig,
}

impl DocGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate Markdown for one file
    ///
    /// Returns the empty string for an unsupported extension or an
    /// unreadable file. Parse failures still produce a document, just
    /// without Functions and Classes sections.
    pub fn generate_documentation(&self, path: &Path, format: &str) -> String {
        tracing::info!("Generating documentation for: {}", path.display());
        if format != DEFAULT_FORMAT {
            tracing::debug!("Format '{}' is not implemented, rendering Markdown", format);
        }

        let lang = match Lang::from_path(path) {
            Ok(lang) => lang,
            Err(e) => {
                tracing::warn!("{}", e);
                return String::new();
            }
        };

        let parsed = parser_for(lang, &self.config.parser).parse(path);

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return String::new();
            }
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let parsed = parsed.clamped(source.len());
        render_markdown(&file_name, &source, lang.family(), &parsed)
    }
}

/// Render the document for already parsed source text
pub fn render_markdown(
    file_name: &str,
    source: &str,
    family: LangFamily,
    parsed: &ParseResult,
) -> String {
    let mut output = format!("# Documentation for {}\n\n", file_name);

    let overview = file_description(source);
    if !overview.is_empty() {
        output.push_str(&format!("## Overview\n\n{}\n\n", overview));
    }

    let dependencies = imports(source, family);
    if !dependencies.is_empty() {
        output.push_str("## Dependencies\n\n");
        output.push_str("This file relies on the following external modules:\n\n");
        for dependency in &dependencies {
            output.push_str(&format!("- {}\n", dependency));
        }
        output.push('\n');
    }

    if !parsed.functions.is_empty() {
        output.push_str("## Functions\n\n");
        for func in &parsed.functions {
            render_function(&mut output, source, family, func);
        }
    }

    if !parsed.classes.is_empty() {
        output.push_str("## Classes\n\n");
        for class in &parsed.classes {
            render_class(&mut output, source, family, class);
        }
    }

    output
}

// ============================================================================
// Sections
// ============================================================================

fn render_function(output: &mut String, source: &str, family: LangFamily, func: &FunctionRecord) {
    let slice = slice_span(source, func.start, func.end);
    let leading = leading_comments(source, func.start, family);
    // Annotations written above the declaration count as its documentation
    let doc_context = format!("{}{}", leading, slice);

    output.push_str(&format!("### {}\n\n", func.name));

    let description = declaration_description(leading, slice, family);
    if !description.is_empty() {
        output.push_str(&format!("{}\n\n", description));
    }

    output.push_str("**Parameters:**\n");
    if func.parameters.is_empty() {
        output.push_str(&format!("{}\n", NO_PARAMETERS));
    } else {
        for param in &func.parameters {
            output.push_str(&format!(
                "- `{}`: {}\n",
                param,
                param_description(&doc_context, param, family)
            ));
        }
    }
    output.push('\n');

    let returns = return_description(&doc_context, family);
    if !returns.is_empty() {
        output.push_str(&format!("**Returns:**\n{}\n\n", returns));
    }

    output.push_str(&format!(
        "**Functionality:**\n{}\n\n",
        explain_functionality(slice)
    ));
}

fn render_class(output: &mut String, source: &str, family: LangFamily, class: &ClassRecord) {
    let slice = slice_span(source, class.start, class.end);
    let leading = leading_comments(source, class.start, family);

    output.push_str(&format!("### {}\n\n", class.name));

    let description = declaration_description(leading, slice, family);
    if !description.is_empty() {
        output.push_str(&format!("{}\n\n", description));
    }

    let methods = class_methods(slice, family);
    if !methods.is_empty() {
        output.push_str("**Methods:**\n");
        for method in &methods {
            output.push_str(&format!(
                "- `{}`: {}\n",
                method,
                explain_method(method, slice, &methods)
            ));
        }
        output.push('\n');
    }

    let properties = class_properties(slice, family);
    if !properties.is_empty() {
        output.push_str("**Properties:**\n");
        for property in &properties {
            output.push_str(&format!(
                "- `{}`: {}\n",
                property,
                explain_property(property)
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "**Purpose:**\n{}\n\n",
        explain_class_purpose(slice, family)
    ));
}
