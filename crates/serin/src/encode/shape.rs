use crate::value::Value;

/// Encoding strategy for one array, fixed by a single pass over its
/// elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// No elements; encoded as `[0]{}:`
    Empty,
    /// Every element is a primitive; inlined on the header line
    AllPrimitive,
    /// Every element is an object; encoded as a table with the field list
    /// taken from the first element
    AllObject,
    /// Anything else; one list-item block per element
    Mixed,
}

pub fn classify(items: &[Value]) -> Shape {
    if items.is_empty() {
        return Shape::Empty;
    }
    let mut all_primitive = true;
    let mut all_object = true;
    for item in items {
        match item {
            Value::Object(_) => all_primitive = false,
            Value::Array(_) => {
                all_primitive = false;
                all_object = false;
            }
            _ => all_object = false,
        }
    }
    if all_primitive {
        return Shape::AllPrimitive;
    }
    if all_object {
        // a table needs at least one column; a field-less first element
        // would declare a header no row can satisfy
        let first_has_fields = items[0].as_object().is_some_and(|map| !map.is_empty());
        if first_has_fields {
            return Shape::AllObject;
        }
    }
    Shape::Mixed
}
