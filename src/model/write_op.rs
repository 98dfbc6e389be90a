use crate::error::ModelError;
use crate::model::Model;
use crate::value::Value;

/// Write a field by name. This is the strict path; `TypeMismatch` surfaces.
///
/// Key and value handling follow the subscript contract:
/// - unknown key: silent no-op, `Ok(())`;
/// - `None` or `Value::Null` on an optional field: clears it;
/// - `None` or `Value::Null` on a non-optional field: no-op — a required
///   field cannot be nulled through this path;
/// - a present value: assignability-checked write via the field's `put`
///   closure; the field keeps its prior value on failure.
pub fn set_value_for_key(
    model: &mut dyn Model,
    key: &str,
    value: Option<Value>,
) -> Result<(), ModelError> {
    let Some(field) = model.model_type().field(key) else {
        return Ok(());
    };
    match value {
        None | Some(Value::Null) => {
            (field.clear)(model);
            Ok(())
        }
        Some(value) => (field.put)(model, value),
    }
}
