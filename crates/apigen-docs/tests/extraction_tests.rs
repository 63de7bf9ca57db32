use std::fs;

use apigen_docs::source::DeclKind;
use apigen_docs::{DocsError, JavaSourceIndex, TypeModel, TypeRef};

#[test]
fn indexes_java_files_below_a_directory() {
    let temp = tempfile::tempdir().unwrap();
    let package = temp.path().join("src/main/java/com/example");
    fs::create_dir_all(&package).unwrap();
    fs::write(
        package.join("Account.java"),
        "package com.example;\n\npublic record Account(@NotNull String owner, long balance) {}\n",
    )
    .unwrap();
    fs::write(
        package.join("Ledger.java"),
        "package com.example;\n\npublic interface Ledger {\n    Account open(String owner);\n}\n",
    )
    .unwrap();
    fs::write(package.join("notes.txt"), "class Ignored {}").unwrap();

    let index = JavaSourceIndex::from_paths([temp.path()]).expect("directory indexed");

    let names: Vec<_> = index.types().map(|decl| decl.name.as_str()).collect();
    assert_eq!(names, ["Account", "Ledger"]);
    assert_eq!(index.get("Account").map(|decl| decl.kind), Some(DeclKind::Record));

    let fields = index
        .list_fields(&TypeRef::named("Account"))
        .expect("record components are fields");
    assert_eq!(fields.len(), 2);
    assert!(fields[0].required);

    let open = index
        .resolve_method("Ledger", "open")
        .expect("method indexed");
    assert_eq!(open.package, "com.example");
    assert_eq!(open.return_type, TypeRef::named("Account"));
}

#[test]
fn unreadable_files_are_skipped() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("Broken.java"), [0xff, 0xfe, 0x00, 0x81]).unwrap();
    fs::write(temp.path().join("Fine.java"), "class Fine { int value; }").unwrap();

    let index = JavaSourceIndex::from_paths([temp.path()]).expect("directory indexed");
    assert_eq!(index.len(), 1);
    assert!(index.get("Fine").is_some());
}

#[test]
fn missing_root_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let result = JavaSourceIndex::from_paths([temp.path().join("absent")]);
    assert!(matches!(result, Err(DocsError::Io { .. })));
}

#[test]
fn nested_types_and_varargs() {
    let mut index = JavaSourceIndex::new();
    index
        .add_source(
            "Outer.java",
            r#"
            public class Outer {
                public static class Inner {
                    private String label;
                }

                public void tag(String... labels) {}

                public static void helper() {}
            }
            "#,
        )
        .expect("indexing should succeed");

    assert!(index.get("Inner").is_some());
    let methods = index.list_methods("Outer").expect("Outer indexed");
    assert_eq!(methods.len(), 1, "static methods are skipped");
    assert_eq!(methods[0].parameters[0].ty.to_string(), "String[]");
}
