use serde_json::{Map, Value};

use crate::model::{FieldInfo, ParamKind};

/// Fold a field list into an example payload, keys in declaration order.
pub fn build_example(fields: &[FieldInfo]) -> Value {
    let map = fields
        .iter()
        .map(|field| (field.name.clone(), fold_field(field)))
        .collect::<Map<_, _>>();
    Value::Object(map)
}

fn fold_field(field: &FieldInfo) -> Value {
    match field.kind {
        ParamKind::Literal => field.example.clone().unwrap_or(Value::Null),
        ParamKind::Object => build_example(&field.children),
        ParamKind::Array => {
            let element = match &field.example {
                Some(example) => example.clone(),
                None => build_example(&field.children),
            };
            Value::Array(vec![element])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeRef;

    fn literal(name: &str, ty: &str, example: Value) -> FieldInfo {
        let mut field = FieldInfo::new(name, TypeRef::named(ty), ParamKind::Literal);
        field.example = Some(example);
        field
    }

    #[test]
    fn nested_objects_keep_declaration_order() {
        let mut address = FieldInfo::new("address", TypeRef::named("Address"), ParamKind::Object);
        address.children = vec![
            literal("zip", "String", Value::from("")),
            literal("city", "String", Value::from("")),
        ];
        let example = build_example(&[literal("id", "long", Value::from(0)), address]);

        assert_eq!(
            example.to_string(),
            r#"{"id":0,"address":{"zip":"","city":""}}"#
        );
    }

    #[test]
    fn arrays_fold_to_single_element() {
        let mut tags = FieldInfo::new(
            "tags",
            TypeRef::generic("List", vec![TypeRef::named("String")]),
            ParamKind::Array,
        );
        tags.example = Some(Value::from(""));
        let opaque = FieldInfo::new("items", TypeRef::array(TypeRef::Unknown), ParamKind::Array);

        let example = build_example(&[tags, opaque]);
        assert_eq!(example.to_string(), r#"{"tags":[""],"items":[{}]}"#);
    }
}
