use crate::model::Model;
use crate::value::Value;

/// Read a field by name, scanning the descriptor table in declaration order.
///
/// Lenient lookup, mirroring dictionary subscript semantics: an unknown key
/// is `None`, not an error, and so is an optional field holding no value.
pub fn value_for_key(model: &dyn Model, key: &str) -> Option<Value> {
    let field = model.model_type().field(key)?;
    (field.get)(model)
}
