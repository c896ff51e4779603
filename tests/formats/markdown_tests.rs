//! Rendered Markdown for realistic source files

use srcdoc::commands::{run_generate_docs, CommandContext, GenerateOutcome};
use srcdoc::{GenerateArgs, GeneratorConfig, PythonParser, SourceParser};

use crate::common::{bullets_under, default_generator, python_available, Fixture};

const SERVICE_JS: &str = r#"// User service module
import axios from 'axios';
const fs = require('fs');

/**
 * Fetch a user by id.
 * @param {number} id The user id
 * @returns {Promise<object>} The user record
 */
async function getUser(id) {
  try {
    const res = await axios.get(`http://api.local/users/${id}`);
    return res.data;
  } catch (err) {
    return null;
  }
}

function noop() {}

class UserService {
  constructor(apiClient) {
    this.api = apiClient;
    this.cache = new Map();
  }

  clear() {
    this.cache.clear();
  }
}
"#;

fn section_index(doc: &str, heading: &str) -> usize {
    doc.find(heading)
        .unwrap_or_else(|| panic!("missing section {heading}"))
}

#[test]
fn test_javascript_section_order() {
    let fixture = Fixture::new();
    let file = fixture.write("service.js", SERVICE_JS);

    let doc = default_generator().generate_documentation(&file, "markdown");

    assert!(doc.starts_with("# Documentation for service.js\n\n"));
    let overview = section_index(&doc, "## Overview");
    let dependencies = section_index(&doc, "## Dependencies");
    let functions = section_index(&doc, "## Functions");
    let classes = section_index(&doc, "## Classes");
    assert!(overview < dependencies && dependencies < functions && functions < classes);
}

#[test]
fn test_javascript_function_blocks() {
    let fixture = Fixture::new();
    let file = fixture.write("service.js", SERVICE_JS);

    let doc = default_generator().generate_documentation(&file, "markdown");

    assert!(doc.contains(
        "- import axios from 'axios';\n- const fs = require('fs');\n\n"
    ));
    assert!(doc.contains("### getUser\n\nFetch a user by id.\n"));
    assert!(doc.contains("**Parameters:**\n- `id`: The user id\n\n"));
    assert!(doc.contains("**Returns:**\nThe user record\n\n"));
    assert!(doc.contains(
        "**Functionality:**\nThis function handles errors or exceptions. returns a value. \
         performs asynchronous operations. It appears to interact with an external API or service.\n\n"
    ));
    assert!(doc.contains(
        "### noop\n\n**Parameters:**\nThis function does not take any parameters.\n\n"
    ));
}

#[test]
fn test_javascript_class_blocks() {
    let fixture = Fixture::new();
    let file = fixture.write("service.js", SERVICE_JS);

    let doc = default_generator().generate_documentation(&file, "markdown");
    let classes = &doc[section_index(&doc, "## Classes")..];

    assert!(classes.contains("### UserService\n\n**Methods:**\n"));
    assert_eq!(bullets_under(classes, "**Methods:**"), 2);
    // `this.cache.clear();` also starts with `this.` and is listed as-is
    assert_eq!(bullets_under(classes, "**Properties:**"), 3);
    assert!(classes.contains("- `this.api`: Stores data relevant to the class's functionality.\n"));
    assert!(classes.contains("- `this.cache.clear();`: "));
    assert!(classes.contains("It appears to provide a service or API interface.\n\n"));
}

#[test]
fn test_generation_is_idempotent() {
    let fixture = Fixture::new();
    let file = fixture.write("service.js", SERVICE_JS);
    let generator = default_generator();

    let first = generator.generate_documentation(&file, "markdown");
    let second = generator.generate_documentation(&file, "markdown");
    assert_eq!(first, second);
}

#[test]
fn test_format_option_does_not_change_output() {
    let fixture = Fixture::new();
    let file = fixture.write("service.js", SERVICE_JS);
    let generator = default_generator();

    assert_eq!(
        generator.generate_documentation(&file, "markdown"),
        generator.generate_documentation(&file, "html")
    );
}

#[test]
fn test_command_writes_markdown_next_to_source() {
    let fixture = Fixture::new();
    let file = fixture.write("service.js", SERVICE_JS);
    let ctx = CommandContext::new(GeneratorConfig::default());
    let args = GenerateArgs {
        file: file.clone(),
        format: "markdown".to_string(),
        stdout: false,
    };

    let outcome = run_generate_docs(&args, &ctx).unwrap();
    let output = fixture.path().join("service.js.md");
    assert_eq!(outcome, GenerateOutcome::Written(output.clone()));

    let written = std::fs::read_to_string(output).unwrap();
    assert_eq!(written, default_generator().generate_documentation(&file, "markdown"));
}

const GEOMETRY_PY: &str = r#"# Geometry helpers
import math
from typing import List


def distance(a, b) -> float:
    """Euclidean distance between two points."""
    return math.hypot(a.x - b.x, a.y - b.y)


class Point:
    """A point in the plane."""

    def __init__(self, x, y):
        self.x = x
        self.y = y
"#;

#[test]
fn test_python_document() {
    if !python_available() {
        eprintln!("skipping: python3 not on PATH");
        return;
    }

    let fixture = Fixture::new();
    let file = fixture.write("geometry.py", GEOMETRY_PY);

    let doc = default_generator().generate_documentation(&file, "markdown");

    assert!(doc.starts_with("# Documentation for geometry.py\n\n## Overview\n\nGeometry helpers\n\n"));
    assert!(doc.contains("- import math\n- from typing import List\n\n"));
    assert!(doc.contains("### distance\n\nEuclidean distance between two points.\n\n"));
    assert_eq!(bullets_under(&doc, "**Parameters:**"), 2);
    assert!(doc.contains("**Returns:**\nfloat\n\n"));
    assert!(doc.contains(
        "**Functionality:**\nThis function returns a value. It appears to process data or perform a specific task.\n\n"
    ));

    let classes = &doc[section_index(&doc, "## Classes")..];
    assert!(classes.contains("### Point\n\nA point in the plane.\n\n"));
    assert!(classes.contains("- `def __init__(self, x, y):`: "));
    assert_eq!(bullets_under(classes, "**Properties:**"), 2);
    assert!(classes.contains(
        "**Purpose:**\nThis class provides 1 method(s) to perform various operations. \
         It manages 2 property/properties to maintain its state. \
         It appears to encapsulate related functionality and data.\n\n"
    ));
}

#[test]
fn test_python_nested_definitions_are_not_listed() {
    if !python_available() {
        eprintln!("skipping: python3 not on PATH");
        return;
    }

    let fixture = Fixture::new();
    let file = fixture.write(
        "nested.py",
        "def outer():\n    def inner():\n        pass\n    return inner\n",
    );

    let doc = default_generator().generate_documentation(&file, "markdown");
    assert!(doc.contains("### outer"));
    assert!(!doc.contains("### inner"));
}

const ASYNC_PY: &str = r#"# Géométrie: ünïcode helpers ✨
import asyncio


# Memoized lookup
@cache
def lookup(key, *args, k=1):
    """Finds ünïcode entries."""
    if key is not None:
        return key
    return None


async def fetch_all(urls):
    """Fetch every URL."""
    return await asyncio.gather(*urls)
"#;

#[test]
fn test_python_spans_are_byte_offsets() {
    if !python_available() {
        eprintln!("skipping: python3 not on PATH");
        return;
    }

    let fixture = Fixture::new();
    let file = fixture.write("lookup.py", ASYNC_PY);

    let parsed = PythonParser::new(&GeneratorConfig::default().parser)
        .try_parse(&file)
        .unwrap();
    let names: Vec<&str> = parsed.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["lookup", "fetch_all"]);

    let lookup = &ASYNC_PY[parsed.functions[0].start..parsed.functions[0].end];
    assert!(lookup.starts_with("def lookup("));
    assert!(lookup.ends_with("return None"));
    assert_eq!(parsed.functions[0].parameters, ["key"]);

    let fetch_all = &ASYNC_PY[parsed.functions[1].start..parsed.functions[1].end];
    assert!(fetch_all.starts_with("async def fetch_all("));
    assert!(fetch_all.ends_with("asyncio.gather(*urls)"));
}

#[test]
fn test_python_unicode_decorated_and_async_document() {
    if !python_available() {
        eprintln!("skipping: python3 not on PATH");
        return;
    }

    let fixture = Fixture::new();
    let file = fixture.write("lookup.py", ASYNC_PY);

    let doc = default_generator().generate_documentation(&file, "markdown");

    assert!(doc.contains("## Overview\n\nGéométrie: ünïcode helpers ✨\n"));
    assert!(doc.contains("### lookup\n\nFinds ünïcode entries.\n\n"));
    assert_eq!(bullets_under(&doc, "**Parameters:**"), 1);
    assert!(doc.contains(
        "**Functionality:**\nThis function contains conditional logic. returns a value. \
         It appears to process data or perform a specific task.\n\n"
    ));
    assert!(doc.contains("### fetch_all\n\nFetch every URL.\n\n"));
    assert!(doc.contains(
        "**Functionality:**\nThis function returns a value. performs asynchronous operations. \
         It appears to interact with an external API or service.\n\n"
    ));
}
