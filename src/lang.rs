//! Language detection and tree-sitter grammar loading

use std::path::Path;
use tree_sitter::Language;

use crate::error::{DocgenError, Result};

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Python,
}

impl Lang {
    /// Detect language from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| DocgenError::UnsupportedLanguage {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect language from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Ok(Self::JavaScript),
            "jsx" => Ok(Self::Jsx),
            "ts" => Ok(Self::TypeScript),
            "tsx" => Ok(Self::Tsx),
            "py" => Ok(Self::Python),
            _ => Err(DocgenError::UnsupportedLanguage {
                extension: format!(".{}", ext),
            }),
        }
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Jsx => "jsx",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::Python => "python",
        }
    }

    /// Get the tree-sitter Language for in-process parsing
    ///
    /// Plain JavaScript goes through the TSX grammar so that files carrying
    /// type annotations or JSX templates still parse. Python has no
    /// in-process grammar; it is parsed by the companion process.
    pub fn tree_sitter_language(&self) -> Option<Language> {
        match self {
            Self::JavaScript | Self::Jsx | Self::Tsx => {
                Some(tree_sitter_typescript::LANGUAGE_TSX.into())
            }
            Self::TypeScript => Some(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
            Self::Python => None,
        }
    }

    /// Get the language family for shared heuristics
    pub fn family(&self) -> LangFamily {
        match self {
            Self::JavaScript | Self::Jsx | Self::TypeScript | Self::Tsx => LangFamily::JavaScript,
            Self::Python => LangFamily::Python,
        }
    }
}

/// Language families sharing comment, import and annotation syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LangFamily {
    /// JavaScript, TypeScript, JSX, TSX
    JavaScript,
    /// Python
    Python,
}

impl LangFamily {
    /// Marker that starts a single-line comment
    pub fn line_comment_marker(&self) -> &'static str {
        match self {
            Self::JavaScript => "//",
            Self::Python => "#",
        }
    }
}
