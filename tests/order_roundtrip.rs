use std::error::Error;
use std::fs;

use incdag::catalog::FileId;
use incdag::dag::{topological_order, validate_order};
use incdag::load_graph;
use incdag::source::DirSource;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn header_triangle_orders_dependencies_first() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("a.h"), "int a;\n")?;
    fs::write(dir.path().join("b.h"), "#include \"a.h\"\nint b;\n")?;
    fs::write(
        dir.path().join("c.h"),
        "#include \"a.h\"\n#include \"b.h\"\nint c;\n",
    )?;

    let source = DirSource::new(dir.path(), "h");
    let (catalog, graph) = load_graph(&source)?;

    // Sorted discovery order fixes the id assignment.
    assert_eq!(catalog.id_of("a.h")?, FileId::new(0));
    assert_eq!(catalog.id_of("b.h")?, FileId::new(1));
    assert_eq!(catalog.id_of("c.h")?, FileId::new(2));

    let order = topological_order(&graph, &catalog)?;
    assert_eq!(order.len(), 3);

    let pos = |id: FileId| order.iter().position(|&x| x == id).unwrap();
    let (a, b, c) = (FileId::new(0), FileId::new(1), FileId::new(2));
    assert!(pos(a) < pos(b), "a.h must precede b.h");
    assert!(pos(a) < pos(c), "a.h must precede c.h");
    assert!(pos(b) < pos(c), "b.h must precede c.h");

    Ok(())
}

#[test]
fn computed_order_always_validates_clean() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("base.h"), "")?;
    fs::write(dir.path().join("mid.h"), "#include \"base.h\"\n")?;
    fs::write(
        dir.path().join("top.h"),
        "#include \"mid.h\"\n#include \"base.h\"\n",
    )?;
    fs::write(dir.path().join("lone.h"), "// standalone\n")?;

    let source = DirSource::new(dir.path(), "h");
    let (catalog, graph) = load_graph(&source)?;

    let order = topological_order(&graph, &catalog)?;
    let report = validate_order(&graph, &order)?;

    assert!(report.is_ok());
    assert!(report.violations.is_empty());

    Ok(())
}

#[test]
fn order_covers_every_file_exactly_once() -> TestResult {
    let dir = tempfile::tempdir()?;
    for name in ["p.h", "q.h", "r.h", "s.h"] {
        fs::write(dir.path().join(name), "")?;
    }
    fs::write(dir.path().join("q.h"), "#include \"s.h\"\n")?;

    let source = DirSource::new(dir.path(), "h");
    let (catalog, graph) = load_graph(&source)?;

    let mut order = topological_order(&graph, &catalog)?;
    assert_eq!(order.len(), catalog.len());

    order.sort();
    order.dedup();
    assert_eq!(order.len(), catalog.len(), "order must be a permutation");

    Ok(())
}
