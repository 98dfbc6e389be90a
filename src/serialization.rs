use smol_str::SmolStr;

use crate::model::Model;
use crate::value::{EncodedMap, Value};

// ─── Encode ─────────────────────────────────────────────────────────────────

/// Encode a model into the generic field-name → value map.
///
/// Walks the field table in declaration order:
/// - a nested model becomes a recursive `Object` sub-map, never flattened;
/// - a model sequence becomes an `Array` of sub-maps;
/// - an optional field with no value is omitted from the map entirely
///   (no `Null` placeholder);
/// - scalars are stored as-is.
///
/// Infallible: field classification is a compile-time fact, so there is no
/// "unrecognized field type" left to fail on.
pub fn encode_model(model: &dyn Model) -> EncodedMap {
    let mut map = EncodedMap::new();
    for field in model.model_type().fields {
        let Some(value) = (field.get)(model) else {
            continue;
        };
        let encoded = match value {
            Value::Record(m) => Value::Object(encode_model(m.as_ref())),
            Value::Records(items) => Value::Array(
                items
                    .iter()
                    .map(|m| Value::Object(encode_model(m.as_ref())))
                    .collect(),
            ),
            scalar => scalar,
        };
        map.insert(SmolStr::new_static(field.name), encoded);
    }
    map
}
