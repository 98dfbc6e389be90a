use smol_str::SmolStr;

use crate::error::ModelError;
use crate::model::Model;
use crate::types::FieldKind;
use crate::value::{Number, Value};

// ─── Property ───────────────────────────────────────────────────────────────

/// Capability of a type to be stored in a model field.
///
/// Implemented for the scalar set, for `Option` of a scalar or record, for
/// `Vec` of a model type, for `Box<dyn Model>`, and (via the `model!` macro)
/// for every model type itself. A field whose type implements none of these
/// fails to compile — there is no runtime "unsupported type" path.
pub trait Property: Sized + 'static {
    /// Classification of this type, fixed at compile time.
    const KIND: FieldKind;

    /// Current content as a uniform value. `None` means "optional, unset".
    fn to_value(&self) -> Option<Value>;

    /// Type-checked construction from a uniform value. This is the
    /// assignability gate: the variant (and, for records, the concrete type)
    /// must match, or the write is refused with `TypeMismatch`.
    fn from_value(value: Value) -> Result<Self, ModelError>;

    /// The "no value" state, for types that have one.
    fn absent() -> Option<Self> {
        None
    }
}

fn mismatch(expected: &'static str, got: &Value) -> ModelError {
    ModelError::TypeMismatch {
        expected,
        actual: got.kind_name(),
    }
}

// ─── Scalars ────────────────────────────────────────────────────────────────

impl Property for bool {
    const KIND: FieldKind = FieldKind::Scalar;

    fn to_value(&self) -> Option<Value> {
        Some(Value::Bool(*self))
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch("bool", &other)),
        }
    }
}

impl Property for i64 {
    const KIND: FieldKind = FieldKind::Scalar;

    fn to_value(&self) -> Option<Value> {
        Some(Value::Number(Number::I64(*self)))
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            // Lossless cross-width conversion only; anything else is refused.
            Value::Number(n) => n.as_i64().ok_or(ModelError::TypeMismatch {
                expected: "i64",
                actual: "out-of-range number",
            }),
            other => Err(mismatch("i64", &other)),
        }
    }
}

impl Property for u64 {
    const KIND: FieldKind = FieldKind::Scalar;

    fn to_value(&self) -> Option<Value> {
        Some(Value::Number(Number::U64(*self)))
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Number(n) => n.as_u64().ok_or(ModelError::TypeMismatch {
                expected: "u64",
                actual: "out-of-range number",
            }),
            other => Err(mismatch("u64", &other)),
        }
    }
}

impl Property for f64 {
    const KIND: FieldKind = FieldKind::Scalar;

    fn to_value(&self) -> Option<Value> {
        Some(Value::Number(Number::F64(*self)))
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(mismatch("f64", &other)),
        }
    }
}

impl Property for SmolStr {
    const KIND: FieldKind = FieldKind::Scalar;

    fn to_value(&self) -> Option<Value> {
        Some(Value::Str(self.clone()))
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(mismatch("str", &other)),
        }
    }
}

impl Property for String {
    const KIND: FieldKind = FieldKind::Scalar;

    fn to_value(&self) -> Option<Value> {
        Some(Value::Str(SmolStr::from(self.as_str())))
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Str(s) => Ok(s.to_string()),
            other => Err(mismatch("str", &other)),
        }
    }
}

// ─── Option<P> ──────────────────────────────────────────────────────────────

impl<P: Property> Property for Option<P> {
    // Optional sequences and nested Options have no field kind; rejecting
    // them here keeps the classification a compile-time fact.
    const KIND: FieldKind = match P::KIND {
        FieldKind::Scalar => FieldKind::OptionalScalar,
        FieldKind::Record => FieldKind::OptionalRecord,
        _ => panic!("only scalar and record fields may be optional"),
    };

    fn to_value(&self) -> Option<Value> {
        self.as_ref().and_then(P::to_value)
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        P::from_value(value).map(Some)
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

// ─── Vec<M> (record sequences) ──────────────────────────────────────────────

impl<M> Property for Vec<M>
where
    M: Model + Property + Clone,
{
    const KIND: FieldKind = FieldKind::RecordSequence;

    fn to_value(&self) -> Option<Value> {
        Some(Value::Records(
            self.iter().map(|m| m.clone_model()).collect(),
        ))
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Records(items) => items
                .into_iter()
                .map(|m| M::from_value(Value::Record(m)))
                .collect(),
            // Encoded form: every element must be a sub-map of M.
            Value::Array(items) => items.into_iter().map(M::from_value).collect(),
            other => Err(mismatch("record sequence", &other)),
        }
    }
}

// ─── Box<M> (self-referential record fields) ────────────────────────────────

/// Boxed concrete models behave exactly like the model itself; the box is
/// what makes self-referential shapes (`Option<Box<Person>>` inside `Person`)
/// representable at all.
impl<M> Property for Box<M>
where
    M: Model + Property + Clone,
{
    const KIND: FieldKind = FieldKind::Record;

    fn to_value(&self) -> Option<Value> {
        (**self).to_value()
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        M::from_value(value).map(Box::new)
    }
}

// ─── Box<dyn Model> (dyn-record fields) ─────────────────────────────────────

/// A field declared as `Box<dyn Model>` accepts *any* model instance — the
/// Rust rendition of a base-typed slot taking a subtype. Such a field encodes
/// like any nested record, but cannot be decoded back from a bare sub-map
/// (the concrete type is gone); use `decode_any` with a candidate list for
/// that.
impl Property for Box<dyn Model> {
    const KIND: FieldKind = FieldKind::Record;

    fn to_value(&self) -> Option<Value> {
        Some(Value::Record(self.clone()))
    }

    fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Record(m) => Ok(m),
            other => Err(mismatch("record", &other)),
        }
    }
}
