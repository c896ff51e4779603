//! Heuristic text extractors
//!
//! Stateless scanners over raw source text. None of them understand the
//! program: they look for comment markers, annotation tags and keyword
//! substrings, resolve ties by first match in a fixed order, and fall back
//! to a canned sentence when nothing matches.
//!
//! - `comments`: file, function and class descriptions
//! - `signatures`: imports, parameter and return descriptions
//! - `explain`: functionality explanation and purpose inference
//! - `classes`: methods, properties and class purpose

pub mod classes;
pub mod comments;
pub mod explain;
pub mod signatures;

pub use classes::{
    class_methods, class_properties, explain_class_purpose, explain_method, explain_property,
};
pub use comments::{declaration_description, file_description, leading_comments};
pub use explain::{explain_functionality, infer_main_purpose};
pub use signatures::{imports, param_description, return_description};
