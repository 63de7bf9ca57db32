//! Terminal ("normal") types that are never expanded into child fields.

use phf::phf_set;
use serde_json::{Map, Value};

/// Type names rendered as literals.
static NORMAL_TYPES: phf::Set<&'static str> = phf_set! {
    "byte", "short", "int", "long", "float", "double", "char", "boolean",
    "Byte", "Short", "Integer", "Long", "Float", "Double", "Character", "Boolean",
    "Number", "BigDecimal", "BigInteger", "AtomicInteger", "AtomicLong",
    "String", "CharSequence", "UUID",
    "Date", "Timestamp", "LocalDate", "LocalTime", "LocalDateTime",
    "Instant", "ZonedDateTime", "OffsetDateTime",
    "Object", "Map", "HashMap", "LinkedHashMap", "TreeMap", "SortedMap", "ConcurrentHashMap",
};

/// Collection types whose first type argument is the element type.
static CONTAINER_TYPES: phf::Set<&'static str> = phf_set! {
    "Iterable", "Collection", "List", "ArrayList", "LinkedList", "Vector", "Stack",
    "CopyOnWriteArrayList", "Set", "HashSet", "LinkedHashSet", "TreeSet", "SortedSet",
    "Queue", "Deque", "ArrayDeque",
};

pub fn is_normal_type(name: &str) -> bool {
    NORMAL_TYPES.contains(name)
}

pub fn is_container_type(name: &str) -> bool {
    CONTAINER_TYPES.contains(name)
}

/// Representative example value for a normal type.
///
/// Date stubs are fixed so repeated runs render identical documents.
pub fn example_value(name: &str) -> Value {
    match name {
        "byte" | "short" | "int" | "long" | "float" | "double" | "Byte" | "Short" | "Integer"
        | "Long" | "Float" | "Double" | "Number" | "BigDecimal" | "BigInteger"
        | "AtomicInteger" | "AtomicLong" => Value::from(0),
        "boolean" | "Boolean" => Value::Bool(false),
        "String" | "CharSequence" | "char" | "Character" | "UUID" => Value::String(String::new()),
        "Date" | "Timestamp" => Value::from("1970-01-01 00:00:00"),
        "LocalDate" => Value::from("1970-01-01"),
        "LocalTime" => Value::from("00:00:00"),
        "LocalDateTime" | "Instant" | "ZonedDateTime" | "OffsetDateTime" => {
            Value::from("1970-01-01T00:00:00")
        }
        "Object" | "Map" | "HashMap" | "LinkedHashMap" | "TreeMap" | "SortedMap"
        | "ConcurrentHashMap" => Value::Object(Map::new()),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_and_boxes_are_normal() {
        for name in ["int", "long", "Integer", "String", "boolean", "BigDecimal", "LocalDate"] {
            assert!(is_normal_type(name), "{name} should be normal");
        }
        assert!(!is_normal_type("User"));
        assert!(!is_normal_type("List"));
    }

    #[test]
    fn example_stubs_match_type_families() {
        assert_eq!(example_value("long"), Value::from(0));
        assert_eq!(example_value("Double"), Value::from(0));
        assert_eq!(example_value("String"), Value::String(String::new()));
        assert_eq!(example_value("boolean"), Value::Bool(false));
        assert_eq!(example_value("LocalDate"), Value::from("1970-01-01"));
        assert_eq!(example_value("Map"), Value::Object(Map::new()));
    }

    #[test]
    fn containers_are_not_normal() {
        assert!(is_container_type("List"));
        assert!(is_container_type("Set"));
        assert!(!is_container_type("Map"));
        assert!(!is_container_type("Optional"));
    }
}
