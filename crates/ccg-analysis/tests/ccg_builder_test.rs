//! CCG builder tests: extraction, queries, idempotence, and batches with
//! failing files.

use std::fs;
use std::path::{Path, PathBuf};

use ccg_analysis::graph::{CcgBuilder, CcgExport, ClassHierarchy};
use ccg_core::errors::{CcgErrorCode, ParseError};
use tempfile::TempDir;

// ---- Helpers ----

fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, content).expect("write file");
    path
}

fn builder() -> CcgBuilder {
    ccg_core::tracing::init_tracing();
    CcgBuilder::new().expect("python grammar loads")
}

fn zoo(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/python/zoo")
        .join(rel)
}

// ---- Queries ----

#[test]
fn test_callers_and_call_edges() {
    let dir = TempDir::new().expect("create temp dir");
    let file = write(dir.path(), "m.py", "def a():\n    b()\n\ndef b():\n    pass\n");

    let mut ccg = builder();
    let outcome = ccg.analyze_file(&file).expect("analyze");

    assert_eq!(outcome.functions, 2);
    assert_eq!(outcome.calls, 1);
    assert_eq!(ccg.get_function_callers("b"), vec!["a"]);
    assert_eq!(ccg.get_function_callees("a"), ["b"]);
    assert!(ccg.get_function_callers("a").is_empty());

    let export = ccg.export();
    assert_eq!(export.calls.len(), 1);
    assert_eq!(export.calls["a"], vec!["b"]);
}

#[test]
fn test_caller_listed_once_per_call_site() {
    let dir = TempDir::new().expect("create temp dir");
    let file = write(
        dir.path(),
        "m.py",
        "def a():\n    log()\n    log()\n\ndef b():\n    log()\n",
    );

    let mut ccg = builder();
    ccg.analyze_file(&file).expect("analyze");

    assert_eq!(ccg.get_function_callers("log"), vec!["a", "a", "b"]);
}

#[test]
fn test_class_hierarchy() {
    let dir = TempDir::new().expect("create temp dir");
    let file = write(
        dir.path(),
        "m.py",
        "class Dog(Animal):\n    def bark(self):\n        ...\n",
    );

    let mut ccg = builder();
    ccg.analyze_file(&file).expect("analyze");

    assert_eq!(
        ccg.get_class_hierarchy("Dog"),
        Some(ClassHierarchy {
            name: "Dog".to_string(),
            bases: vec!["Animal".to_string()],
            methods: vec!["bark".to_string()],
        })
    );
    // Bases are not resolved transitively.
    assert_eq!(ccg.get_class_hierarchy("Animal"), None);
}

#[test]
fn test_lookup_misses_are_empty() {
    let ccg = builder();

    assert!(ccg.get_function_callers("nothing").is_empty());
    assert!(ccg.get_function_callees("nothing").is_empty());
    assert!(ccg.get_class_hierarchy("Nothing").is_none());
    assert!(ccg.get_function("nothing").is_none());
    assert!(ccg.get_class("Nothing").is_none());
}

#[test]
fn test_export_before_any_analysis_is_empty() {
    let ccg = builder();
    let export = ccg.export();

    assert!(export.is_empty());
    assert_eq!(export, CcgExport::default());
    let json: serde_json::Value =
        serde_json::from_str(&export.to_json().expect("serialize")).expect("valid json");
    assert_eq!(json["functions"], serde_json::json!({}));
    assert_eq!(json["calls"], serde_json::json!({}));
}

#[test]
fn test_module_level_calls_have_no_caller() {
    let dir = TempDir::new().expect("create temp dir");
    let file = write(dir.path(), "m.py", "setup()\n\ndef f():\n    pass\n\nf()\n");

    let mut ccg = builder();
    ccg.analyze_file(&file).expect("analyze");

    assert!(ccg.get_function_callers("setup").is_empty());
    assert!(ccg.get_function_callers("f").is_empty());
    assert!(ccg.export().calls.is_empty());
}

#[test]
fn test_function_record_fields() {
    let dir = TempDir::new().expect("create temp dir");
    let file = write(
        dir.path(),
        "m.py",
        "\n\nasync def fetch(url, retries=3, *, timeout=None):\n    \"\"\"Fetch a URL.\"\"\"\n    return await get(url)\n",
    );

    let mut ccg = builder();
    ccg.analyze_file(&file).expect("analyze");
    let record = ccg.get_function("fetch").expect("recorded");

    assert_eq!(record.file, file.display().to_string());
    assert_eq!(record.line, 3);
    assert_eq!(record.params, vec!["url", "retries"]);
    assert_eq!(record.docstring.as_deref(), Some("Fetch a URL."));
    assert!(record.is_async);
}

#[test]
fn test_decorator_call_attributed_to_decorated_function() {
    let dir = TempDir::new().expect("create temp dir");
    let file = write(
        dir.path(),
        "d.py",
        "def outer():\n    @register(1)\n    def f():\n        pass\n    return f\n",
    );

    let mut ccg = builder();
    ccg.analyze_file(&file).expect("analyze");

    assert_eq!(ccg.get_function_callers("register"), vec!["outer", "f"]);
    assert_eq!(ccg.get_function_callees("f"), ["register"]);
}

// ---- Idempotence ----

#[test]
fn test_reanalysis_overwrites_records_but_duplicates_calls() {
    let dir = TempDir::new().expect("create temp dir");
    let file = write(
        dir.path(),
        "m.py",
        "import os\n\nclass C(Base):\n    def m(self):\n        helper()\n",
    );

    let mut ccg = builder();
    ccg.analyze_file(&file).expect("first pass");
    let once = ccg.export();
    ccg.analyze_file(&file).expect("second pass");
    let twice = ccg.export();

    assert_eq!(twice.functions, once.functions);
    assert_eq!(twice.classes, once.classes);
    assert_eq!(twice.imports, once.imports);

    assert_eq!(once.calls["m"], vec!["helper"]);
    assert_eq!(twice.calls["m"], vec!["helper", "helper"]);
    assert_eq!(ccg.get_function_callers("helper"), vec!["m", "m"]);
}

#[test]
fn test_same_name_in_two_files_last_wins() {
    let dir = TempDir::new().expect("create temp dir");
    let first = write(dir.path(), "a.py", "def run():\n    pass\n");
    let second = write(dir.path(), "b.py", "\ndef run(x):\n    pass\n");

    let mut ccg = builder();
    ccg.analyze_file(&first).expect("analyze");
    ccg.analyze_file(&second).expect("analyze");

    let record = ccg.get_function("run").expect("recorded");
    assert_eq!(record.file, second.display().to_string());
    assert_eq!(record.params, vec!["x"]);
    assert_eq!(ccg.export().functions.len(), 1);
}

// ---- Failures ----

#[test]
fn test_failures_leave_graph_untouched() {
    let dir = TempDir::new().expect("create temp dir");
    let broken = write(dir.path(), "broken.py", "def ok():\n    pass\n\ndef broken(:\n");
    let latin1 = dir.path().join("latin1.py");
    fs::write(&latin1, b"def caf\xe9():\n    pass\n").expect("write file");

    let mut ccg = builder();

    let err = ccg.analyze_file(&broken).unwrap_err();
    assert_eq!(err.error_code(), "SYNTAX_ERROR");
    assert_eq!(err.path(), Some(broken.as_path()));

    let err = ccg.analyze_file(&latin1).unwrap_err();
    assert!(matches!(err, ParseError::Encoding { .. }));

    let err = ccg.analyze_file(dir.path().join("missing.py")).unwrap_err();
    assert_eq!(err.error_code(), "IO_ERROR");

    assert!(ccg.export().is_empty());
    assert!(ccg.get_function("ok").is_none());
}

#[test]
fn test_batch_continues_past_bad_files() {
    let dir = TempDir::new().expect("create temp dir");
    let paths = vec![
        write(dir.path(), "a.py", "def a():\n    b()\n"),
        write(dir.path(), "bad.py", "class (:\n"),
        dir.path().join("gone.py"),
        write(dir.path(), "b.py", "from a import a\n\ndef b():\n    pass\n"),
    ];

    let mut ccg = builder();
    let result = ccg.analyze_batch(&paths);

    assert_eq!(result.data.files_analyzed, 2);
    assert_eq!(result.data.files_failed, 2);
    assert_eq!(result.error_count(), 2);
    assert!(!result.is_clean());

    let export = ccg.export();
    assert!(export.functions.contains_key("a"));
    assert!(export.functions.contains_key("b"));
    assert_eq!(export.imports[&paths[3].display().to_string()], vec!["a"]);
}

#[test]
fn test_python2_statements_rejected() {
    let dir = TempDir::new().expect("create temp dir");
    let legacy = write(dir.path(), "legacy.py", "def f():\n    pass\n\nprint \"hi\"\n");
    let exec = write(dir.path(), "exec.py", "exec \"x = 1\"\n");

    let mut ccg = builder();

    let err = ccg.analyze_file(&legacy).unwrap_err();
    assert_eq!(err.error_code(), "SYNTAX_ERROR");
    assert!(matches!(err, ParseError::Syntax { line: 4, .. }));
    assert_eq!(ccg.analyze_file(&exec).unwrap_err().error_code(), "SYNTAX_ERROR");

    assert!(ccg.export().is_empty());
    assert!(ccg.get_function("f").is_none());
}

#[test]
fn test_deeply_nested_expression_in_batch() {
    let dir = TempDir::new().expect("create temp dir");
    let deep = format!("X = 1{}\n", " + 1".repeat(100_000));
    let paths = vec![
        write(dir.path(), "gen.py", &deep),
        write(dir.path(), "good.py", "def good():\n    helper()\n"),
    ];

    let mut ccg = builder();
    let result = ccg.analyze_batch(&paths);

    assert!(result.is_clean());
    assert_eq!(result.data.files_analyzed, 2);
    assert_eq!(ccg.get_function_callees("good"), ["helper"]);
}

// ---- Fixture repository ----

#[test]
fn test_fixture_files() {
    let mut ccg = builder();
    let paths = vec![zoo("animals/base.py"), zoo("animals/dog.py"), zoo("main.py")];
    let result = ccg.analyze_batch(&paths);
    assert!(result.is_clean());

    let dog = ccg.get_class("Dog").expect("Dog recorded");
    assert_eq!(dog.bases, vec!["Animal"]);
    assert_eq!(dog.methods, vec!["speak", "bark"]);
    assert_eq!(dog.docstring.as_deref(), Some("A dog.\n\nDogs bark."));

    let animal = ccg.get_class_hierarchy("Animal").expect("Animal recorded");
    assert_eq!(animal.bases, vec!["abc.ABC"]);
    assert_eq!(animal.methods, vec!["__init__", "speak"]);

    assert_eq!(ccg.get_function_callers("shout"), vec!["bark"]);
    assert_eq!(ccg.get_function_callers("make_dog"), vec!["build_zoo"]);
    assert_eq!(ccg.get_function_callees("main"), ["build_zoo", "report", "len"]);
    assert_eq!(ccg.get_function_callees("make_dog"), ["Dog"]);

    let export = ccg.export();
    assert_eq!(
        export.imports[&zoo("main.py").display().to_string()],
        vec!["sys", "animals.dog", "animals"]
    );
    assert_eq!(
        export.imports[&zoo("animals/dog.py").display().to_string()],
        vec!["base"]
    );
}
