use crate::error::ModelError;
use crate::model::Model;
use crate::types::ModelType;
use crate::value::{EncodedMap, Value};

// ─── Decode ─────────────────────────────────────────────────────────────────

/// Decode an encoded map into a fresh `T`, starting from `T::default()`.
///
/// Each declared field is looked up by name; a missing key (and a `Null`
/// value, which only the JSON edge produces) leaves the zero-valued default
/// in place. A present value is written through the strict typed path, so a
/// shape mismatch fails with `TypeMismatch`. A map key that matches no
/// declared field fails with `UnknownField` — without that, polymorphic
/// decode could never reject a structurally incompatible candidate.
pub fn decode<T: Model + Default>(map: &EncodedMap) -> Result<T, ModelError> {
    let mut model = T::default();
    let ty = model.model_type();
    decode_into(&mut model, ty, map)?;
    Ok(model)
}

/// Decode against a runtime type handle, for callers that only hold a
/// [`ModelType`] (e.g. out of a candidate registry).
pub fn decode_dyn(map: &EncodedMap, ty: &'static ModelType) -> Result<Box<dyn Model>, ModelError> {
    let mut model = (ty.instantiate)();
    decode_into(model.as_mut(), ty, map)?;
    Ok(model)
}

/// Polymorphic decode: try each candidate in caller order and return the
/// first that decodes the whole map. Ordering is caller-significant — the
/// first structurally compatible type wins, not a "best" match.
pub fn decode_any(
    map: &EncodedMap,
    candidates: &[&'static ModelType],
) -> Result<Box<dyn Model>, ModelError> {
    for ty in candidates {
        if let Ok(model) = decode_dyn(map, ty) {
            return Ok(model);
        }
    }
    Err(ModelError::NoMatchingType)
}

fn decode_into(
    model: &mut dyn Model,
    ty: &'static ModelType,
    map: &EncodedMap,
) -> Result<(), ModelError> {
    for key in map.keys() {
        if ty.field(key).is_none() {
            return Err(ModelError::UnknownField(key.clone()));
        }
    }
    for field in ty.fields {
        match map.get(field.name) {
            None => {}
            Some(Value::Null) => (field.clear)(model),
            Some(value) => (field.put)(model, value.clone())?,
        }
    }
    Ok(())
}
