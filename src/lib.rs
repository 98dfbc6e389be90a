//! Dynamic, key-based access to the fields of statically typed structs.
//!
//! Declare a struct through [`model!`] and it gains dictionary-style
//! get/set by field name, encoding into a generic key/value map, and typed
//! decoding back — including polymorphic decoding against a candidate list.
//! Field tables are derived once, at compile time; there is no reflection
//! and no offset arithmetic at run time.

pub mod deserialization;
pub mod error;
pub mod model;
pub mod property;
pub mod serialization;
pub mod types;
pub mod value;

pub use deserialization::{decode, decode_any, decode_dyn};
pub use error::ModelError;
pub use model::{Model, ModelKv, set_value_for_key, value_for_key};
pub use property::Property;
pub use serialization::encode_model;
pub use types::{FieldDescriptor, FieldKind, ModelType};
pub use value::{EncodedMap, FastMap, Number, Value};

// Re-exported for macro expansions and key handling at call sites.
pub use smol_str::SmolStr;
