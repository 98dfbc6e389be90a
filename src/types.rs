use crate::error::ModelError;
use crate::model::Model;
use crate::value::Value;

// ─── Field Kinds ────────────────────────────────────────────────────────────

/// Classification of a declared field type. Closed set; every dispatch on a
/// kind matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain scalar (`bool`, `i64`, `u64`, `f64`, string).
    Scalar,
    /// `Option` of a scalar.
    OptionalScalar,
    /// A nested model held by value.
    Record,
    /// `Option` of a nested model.
    OptionalRecord,
    /// A homogeneous `Vec` of models.
    RecordSequence,
}

// ─── FieldDescriptor ────────────────────────────────────────────────────────

/// Static metadata for one declared field of a model type.
///
/// Built once per type by the `model!` macro, in declaration order. The three
/// fn pointers are the whole accessor story: no reflection, no offset
/// arithmetic, just a typed closure per field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Field name, unique within its model type.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Declared type, as written in the struct. Introspection only; the
    /// assignability check itself lives in `Property::from_value`.
    pub type_name: &'static str,
    /// Read the field. `None` means the field is an optional with no value
    /// (or the receiver is not an instance of the declaring type).
    pub get: fn(&dyn Model) -> Option<Value>,
    /// Type-checked write. Leaves the field untouched on `TypeMismatch`.
    pub put: fn(&mut dyn Model, Value) -> Result<(), ModelError>,
    /// Write the "no value" state. No-op on non-optional fields.
    pub clear: fn(&mut dyn Model),
}

// ─── ModelType ──────────────────────────────────────────────────────────────

/// Runtime handle for a model type: its name, its ordered field table, and a
/// way to build a zero-valued boxed instance. This is what polymorphic decode
/// takes a candidate list of.
#[derive(Debug)]
pub struct ModelType {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
    pub instantiate: fn() -> Box<dyn Model>,
}

impl ModelType {
    /// Declaration-order lookup; first name match wins.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}
