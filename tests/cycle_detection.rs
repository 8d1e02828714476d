use std::error::Error;

use incdag::catalog::FileId;
use incdag::dag::{topological_order, validate_order};
use incdag::errors::CoreError;
use incdag::load_graph;
use incdag::source::MemorySource;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn two_file_cycle_fails_ordering() -> TestResult {
    let mut src = MemorySource::new();
    src.add_file("a.h", "#include \"b.h\"\n");
    src.add_file("b.h", "#include \"a.h\"\n");

    let (catalog, graph) = load_graph(&src)?;
    let err = topological_order(&graph, &catalog).unwrap_err();

    match err {
        CoreError::CyclicDependency { file } => {
            assert!(file == "a.h" || file == "b.h", "unexpected file: {file}");
        }
        other => panic!("expected CyclicDependency, got {other:?}"),
    }
    Ok(())
}

#[test]
fn self_include_is_a_one_node_cycle() -> TestResult {
    let mut src = MemorySource::new();
    src.add_file("solo.h", "#include \"solo.h\"\n");

    let (catalog, graph) = load_graph(&src)?;
    let err = topological_order(&graph, &catalog).unwrap_err();

    assert_eq!(
        err,
        CoreError::CyclicDependency {
            file: "solo.h".to_string()
        }
    );
    Ok(())
}

#[test]
fn cycle_does_not_break_validation_of_candidates() -> TestResult {
    let mut src = MemorySource::new();
    src.add_file("a.h", "#include \"b.h\"\n");
    src.add_file("b.h", "#include \"a.h\"\n");

    let (catalog, graph) = load_graph(&src)?;

    // No linear extension exists, so any candidate must report the entry
    // whose dependency has not passed yet.
    let candidate = [FileId::new(0), FileId::new(1)];
    let report = validate_order(&graph, &candidate)?;

    assert!(!report.is_ok());
    assert_eq!(report.violations.len(), 1);
    assert_eq!(catalog.name_of(report.violations[0].file)?, "a.h");

    Ok(())
}

#[test]
fn acyclic_part_does_not_mask_the_cycle() -> TestResult {
    let mut src = MemorySource::new();
    src.add_file("a.h", "");
    src.add_file("x.h", "#include \"y.h\"\n#include \"a.h\"\n");
    src.add_file("y.h", "#include \"x.h\"\n");

    let (catalog, graph) = load_graph(&src)?;
    let err = topological_order(&graph, &catalog).unwrap_err();

    assert!(matches!(err, CoreError::CyclicDependency { .. }));
    Ok(())
}
