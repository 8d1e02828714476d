use std::error::Error;

use incdag::errors::CoreError;
use incdag::load_graph;
use incdag::parse::{IncludeParser, ParsedLine};
use incdag::source::MemorySource;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn non_directive_lines_declare_nothing() -> TestResult {
    let parser = IncludeParser::new();

    for line in [
        "",
        "int x = 0;",
        "// #include \"a.h\"",
        "  #include \"indented.h\"",
        "#define FOO 1",
    ] {
        assert_eq!(parser.scan_line(line), ParsedLine::NoDirective, "{line:?}");
    }
    Ok(())
}

#[test]
fn quoted_reference_is_extracted() -> TestResult {
    let parser = IncludeParser::new();

    assert_eq!(
        parser.scan_line("#include \"a.h\""),
        ParsedLine::Reference("a.h".to_string())
    );
    // Trailing text after the closing quote is ignored.
    assert_eq!(
        parser.scan_line("#include \"b.h\" // math helpers"),
        ParsedLine::Reference("b.h".to_string())
    );
    assert_eq!(
        parser.scan_line("#include\"tight.h\""),
        ParsedLine::Reference("tight.h".to_string())
    );
    Ok(())
}

#[test]
fn marker_without_parsable_name_is_malformed() -> TestResult {
    let parser = IncludeParser::new();

    for line in [
        "#include",
        "#include \"unterminated.h",
        "#include \"\"",
        "#include <vector>",
    ] {
        assert_eq!(parser.scan_line(line), ParsedLine::Malformed, "{line:?}");
    }
    Ok(())
}

#[test]
fn malformed_directive_aborts_the_build_with_file_and_line() -> TestResult {
    let mut src = MemorySource::new();
    src.add_file("ok.h", "");
    src.add_file("broken.h", "#include \"ok.h\"\n#include \"oops\n");

    let err = load_graph(&src).unwrap_err();
    let core = err
        .downcast_ref::<CoreError>()
        .expect("expected a CoreError");

    match core {
        CoreError::MalformedDirective { file, line_no, .. } => {
            assert_eq!(file, "broken.h");
            assert_eq!(*line_no, 2);
        }
        other => panic!("expected MalformedDirective, got {other:?}"),
    }
    Ok(())
}

#[test]
fn unknown_reference_aborts_naming_both_sides() -> TestResult {
    let mut src = MemorySource::new();
    src.add_file("main.h", "#include \"missing.h\"\n");

    let err = load_graph(&src).unwrap_err();
    let core = err
        .downcast_ref::<CoreError>()
        .expect("expected a CoreError");

    assert_eq!(
        *core,
        CoreError::DependencyOnUnknownFile {
            file: "main.h".to_string(),
            reference: "missing.h".to_string(),
        }
    );
    Ok(())
}

#[test]
fn graph_is_total_over_the_catalog() -> TestResult {
    let mut src = MemorySource::new();
    src.add_file("leaf.h", "nothing included here\n");
    src.add_file("user.h", "#include \"leaf.h\"\n");

    let (catalog, graph) = load_graph(&src)?;

    assert_eq!(graph.len(), catalog.len());
    assert!(graph.dependencies_of(catalog.id_of("leaf.h")?).is_empty());
    assert_eq!(graph.dependencies_of(catalog.id_of("user.h")?).len(), 1);

    Ok(())
}
