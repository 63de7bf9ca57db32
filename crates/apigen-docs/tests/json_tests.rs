#![cfg(feature = "json")]

use apigen_docs::generators::json::render_json;
use apigen_docs::{BuildOptions, DocModelBuilder, JavaSourceIndex, MethodDoc};

#[test]
fn renders_json_output() {
    let mut index = JavaSourceIndex::new();
    index
        .add_source(
            "Greeter.java",
            r#"
            package demo;

            public interface Greeter {
                /** Say hello. */
                String greet(String name);
            }
            "#,
        )
        .expect("indexing should succeed");
    let docs = DocModelBuilder::new(&index, BuildOptions::default())
        .build_all("Greeter")
        .expect("type should be documented");

    let json = render_json(&docs).expect("should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    let method = &value["methods"][0];
    assert_eq!(method["name"], "greet");
    assert_eq!(method["package"], "demo");
    assert_eq!(method["description"], "Say hello.");
    assert_eq!(method["params"], "(String name)");
    assert_eq!(method["request"][0]["kind"], "literal");
    assert_eq!(method["response"][0]["name"], "result");
}

#[test]
fn output_is_deterministic() {
    let docs: Vec<MethodDoc> = Vec::new();
    let first = render_json(&docs).expect("should serialize");
    let second = render_json(&docs).expect("should serialize");
    assert_eq!(first, second);
    assert!(!first.contains("generated_at"));
}
