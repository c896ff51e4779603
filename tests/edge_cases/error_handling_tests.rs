//! Soft-failure behavior of parsers and the renderer

use std::path::Path;

use srcdoc::{DocGenerator, GeneratorConfig, Lang, ParseResult, PythonParser, SourceParser};

use crate::common::{default_generator, generator_with_fake_companion, Fixture};

#[test]
fn test_unsupported_extension_yields_empty_string() {
    let fixture = Fixture::new();
    let file = fixture.write("tool.rb", "def run\n  1\nend\n");

    assert_eq!(default_generator().generate_documentation(&file, "markdown"), "");
}

#[test]
fn test_missing_extension_yields_empty_string() {
    let fixture = Fixture::new();
    let file = fixture.write("Makefile", "all:\n\techo hi\n");

    assert_eq!(default_generator().generate_documentation(&file, "markdown"), "");
}

#[test]
fn test_empty_file_has_only_title() {
    let fixture = Fixture::new();
    let file = fixture.write("empty.js", "");

    assert_eq!(
        default_generator().generate_documentation(&file, "markdown"),
        "# Documentation for empty.js\n\n"
    );
}

#[test]
fn test_syntax_error_keeps_overview_and_dependencies() {
    let fixture = Fixture::new();
    let file = fixture.write(
        "broken.js",
        "// half written module\nimport x from 'x';\nfunction broken( {\n  return 1;\n",
    );

    let doc = default_generator().generate_documentation(&file, "markdown");
    assert!(doc.starts_with("# Documentation for broken.js\n\n## Overview\n\nhalf written module\n\n"));
    assert!(doc.contains("## Dependencies\n"));
    assert!(!doc.contains("## Functions"));
    assert!(!doc.contains("## Classes"));
}

#[test]
fn test_missing_companion_program_yields_empty_result() {
    let fixture = Fixture::new();
    let file = fixture.write("calc.py", "def add(a, b):\n    return a + b\n");

    let config = GeneratorConfig::default().with_python_program("srcdoc-missing-python");
    let parser = PythonParser::new(&config.parser);
    assert_eq!(parser.parse(&file), ParseResult::empty());

    let doc = DocGenerator::new(config).generate_documentation(&file, "markdown");
    assert_eq!(doc, "# Documentation for calc.py\n\n");
}

#[test]
fn test_missing_companion_script_yields_empty_result() {
    let fixture = Fixture::new();
    let file = fixture.write("calc.py", "import os\n\ndef add(a, b):\n    return a + b\n");

    let config = GeneratorConfig::default().with_python_script(fixture.path().join("nope.py"));
    let doc = DocGenerator::new(config).generate_documentation(&file, "markdown");

    assert!(doc.contains("## Dependencies\n\nThis file relies on the following external modules:\n\n- import os\n"));
    assert!(!doc.contains("## Functions"));
}

#[cfg(unix)]
#[test]
fn test_companion_non_zero_exit() {
    let fixture = Fixture::new();
    let file = fixture.write("job.py", "def run():\n    pass\n");
    let script = fixture.fake_companion("echo 'boom' >&2\nexit 3\n");

    let config = GeneratorConfig::default()
        .with_python_program("sh")
        .with_python_script(&script);
    let err = PythonParser::new(&config.parser).try_parse(&file).unwrap_err();
    assert!(err.to_string().contains("boom"));

    let doc = generator_with_fake_companion(&script).generate_documentation(&file, "markdown");
    assert_eq!(doc, "# Documentation for job.py\n\n");
}

#[cfg(unix)]
#[test]
fn test_companion_malformed_output() {
    let fixture = Fixture::new();
    let file = fixture.write("job.py", "def run():\n    pass\n");
    let script = fixture.fake_companion("echo 'this is not json'\n");

    let doc = generator_with_fake_companion(&script).generate_documentation(&file, "markdown");
    assert_eq!(doc, "# Documentation for job.py\n\n");
}

#[cfg(unix)]
#[test]
fn test_companion_error_payload() {
    let fixture = Fixture::new();
    let file = fixture.write("job.py", "def run():\n    pass\n");
    let script = fixture.fake_companion("echo '{\"error\": \"No file path provided\"}'\n");

    let doc = generator_with_fake_companion(&script).generate_documentation(&file, "markdown");
    assert!(!doc.contains("## Functions"));
}

#[cfg(unix)]
#[test]
fn test_companion_spans_are_clamped() {
    let fixture = Fixture::new();
    let source = "def run(job):\n    return job\n";
    let file = fixture.write("job.py", source);
    let script = fixture.fake_companion(
        "echo '{\"functions\": [{\"name\": \"run\", \"params\": [\"job\"], \"start\": 0, \"end\": 100000}], \"classes\": [{\"name\": \"Ghost\", \"start\": 5000, \"end\": 10}]}'\n",
    );

    let config = GeneratorConfig::default()
        .with_python_program("sh")
        .with_python_script(&script);
    let result = PythonParser::new(&config.parser).parse(&file);
    assert_eq!(result.functions[0].end, source.len());
    assert!(result.classes[0].start <= result.classes[0].end);

    let doc = generator_with_fake_companion(&script).generate_documentation(&file, "markdown");
    assert!(doc.contains("### run\n\n**Parameters:**\n- `job`: No description provided\n"));
    assert!(doc.contains("### Ghost\n\n**Purpose:**\n"));
}

#[test]
fn test_unicode_source() {
    let fixture = Fixture::new();
    let file = fixture.write(
        "greet.js",
        "// Grüße an alle 👋\nfunction grüß(name) {\n  return `Hallo ${name} ✨`;\n}\n",
    );

    let doc = default_generator().generate_documentation(&file, "markdown");
    assert!(doc.contains("## Overview\n\nGrüße an alle 👋\n\n"));
    assert!(doc.contains("### grüß\n\n"));
    assert!(doc.contains("returns a value."));
}

#[test]
fn test_unreadable_path_parses_to_empty() {
    let parser = srcdoc::parser_for(Lang::JavaScript, &GeneratorConfig::default().parser);
    assert!(parser.parse(Path::new("/no/such/dir/file.js")).is_empty());
}
