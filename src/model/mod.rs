mod read_op;
mod write_op;

pub use read_op::value_for_key;
pub use write_op::set_value_for_key;

use std::any::Any;
use std::fmt;

use crate::error::ModelError;
use crate::types::ModelType;
use crate::value::{EncodedMap, Value};


// ─── Model ──────────────────────────────────────────────────────────────────

/// A record type with dynamic, key-based field access.
///
/// Never implemented by hand — declare the struct through the [`model!`]
/// macro, which derives the static field table. The struct must also derive
/// `Clone`, `Default` and `PartialEq`: `Default` is the zero-valued instance
/// decode starts from, and `PartialEq` is the type's own equality contract,
/// which nested-record comparison defers to.
pub trait Model: Any {
    /// The static field table of this type.
    fn model_type(&self) -> &'static ModelType;

    fn clone_model(&self) -> Box<dyn Model>;

    /// Equality under the concrete type's own `PartialEq`. False whenever
    /// `other` is a different model type.
    fn model_eq(&self, other: &dyn Model) -> bool;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl Clone for Box<dyn Model> {
    fn clone(&self) -> Self {
        self.clone_model()
    }
}

impl PartialEq for Box<dyn Model> {
    fn eq(&self, other: &Self) -> bool {
        self.model_eq(other.as_ref())
    }
}

impl fmt::Debug for dyn Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = self.model_type();
        let mut s = f.debug_struct(ty.name);
        for field in ty.fields {
            match (field.get)(self) {
                Some(value) => {
                    s.field(field.name, &value);
                }
                None => {
                    s.field(field.name, &format_args!("-"));
                }
            }
        }
        s.finish()
    }
}

impl dyn Model {
    /// Lenient key access for boxed models, mirroring [`ModelKv`].
    pub fn get(&self, key: &str) -> Option<Value> {
        value_for_key(self, key)
    }

    pub fn set(&mut self, key: &str, value: Option<Value>) {
        let _ = set_value_for_key(self, key, value);
    }

    pub fn set_value(&mut self, key: &str, value: Option<Value>) -> Result<(), ModelError> {
        set_value_for_key(self, key, value)
    }

    pub fn encode(&self) -> EncodedMap {
        crate::serialization::encode_model(self)
    }

    pub fn is<T: Model>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Model>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}

// ─── ModelKv ────────────────────────────────────────────────────────────────

/// Dictionary-style access for every model type.
///
/// `get`/`set` follow the subscript contract: unknown keys and type
/// mismatches degrade to "no value" / no-op and never fail. `set_value` is
/// the strict path that surfaces [`ModelError`]. Both dualities are
/// intentional — ergonomic access stays quiet, named operations fail loudly.
pub trait ModelKv: Model + Sized {
    /// Read a field by name. `None` for unknown keys and unset optionals.
    fn get(&self, key: &str) -> Option<Value> {
        value_for_key(self, key)
    }

    /// Write a field by name, swallowing all errors.
    fn set(&mut self, key: &str, value: impl Into<Option<Value>>) {
        let _ = set_value_for_key(self, key, value.into());
    }

    /// Write a field by name. Unknown keys are a no-op; a value of the wrong
    /// type is refused with `TypeMismatch`, leaving the field untouched.
    fn set_value(&mut self, key: &str, value: impl Into<Option<Value>>) -> Result<(), ModelError> {
        set_value_for_key(self, key, value.into())
    }

    /// Encode into the generic field-name → value map. Unset optionals are
    /// omitted entirely; nested models become sub-maps.
    fn encode(&self) -> EncodedMap {
        crate::serialization::encode_model(self)
    }

    /// Rebuild an instance from an encoded map, starting from
    /// `Self::default()`.
    fn decode(map: &EncodedMap) -> Result<Self, ModelError>
    where
        Self: Default,
    {
        crate::deserialization::decode(map)
    }
}

impl<T: Model> ModelKv for T {}

// ─── model! ─────────────────────────────────────────────────────────────────

/// Declare a model struct and derive its static field table.
///
/// ```ignore
/// model! {
///     #[derive(Debug, Clone, Default, PartialEq)]
///     pub struct Person {
///         pub first_name: SmolStr,
///         pub middle_name: Option<SmolStr>,
///         pub age: i64,
///         pub friends: Vec<Person>,
///         pub best_friend: Option<Box<Person>>,
///     }
/// }
/// ```
///
/// Every field type must implement [`Property`](crate::Property). The macro
/// emits the struct unchanged plus `Model`, `Property` and
/// `From<T> for Value` impls and a `T::MODEL_TYPE` table constant.
#[macro_export]
macro_rules! model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $fname:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $fname : $fty, )*
        }

        impl $name {
            /// Static field table, in declaration order.
            pub const MODEL_TYPE: &'static $crate::ModelType = &$crate::ModelType {
                name: stringify!($name),
                fields: &[
                    $(
                        $crate::FieldDescriptor {
                            name: stringify!($fname),
                            kind: <$fty as $crate::Property>::KIND,
                            type_name: stringify!($fty),
                            get: |m| {
                                m.as_any()
                                    .downcast_ref::<$name>()
                                    .and_then(|m| $crate::Property::to_value(&m.$fname))
                            },
                            put: |m, v| {
                                let Some(m) = m.as_any_mut().downcast_mut::<$name>() else {
                                    return Err($crate::ModelError::TypeMismatch {
                                        expected: stringify!($name),
                                        actual: "foreign model",
                                    });
                                };
                                m.$fname = <$fty as $crate::Property>::from_value(v)?;
                                Ok(())
                            },
                            clear: |m| {
                                if let Some(m) = m.as_any_mut().downcast_mut::<$name>() {
                                    if let Some(absent) = <$fty as $crate::Property>::absent() {
                                        m.$fname = absent;
                                    }
                                }
                            },
                        },
                    )*
                ],
                instantiate: || Box::new(<$name as Default>::default()),
            };
        }

        impl $crate::Model for $name {
            fn model_type(&self) -> &'static $crate::ModelType {
                Self::MODEL_TYPE
            }

            fn clone_model(&self) -> Box<dyn $crate::Model> {
                Box::new(self.clone())
            }

            fn model_eq(&self, other: &dyn $crate::Model) -> bool {
                other
                    .as_any()
                    .downcast_ref::<$name>()
                    .is_some_and(|other| self == other)
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::core::any::Any> {
                self
            }
        }

        impl $crate::Property for $name {
            const KIND: $crate::FieldKind = $crate::FieldKind::Record;

            fn to_value(&self) -> Option<$crate::Value> {
                Some($crate::Value::Record(Box::new(self.clone())))
            }

            fn from_value(value: $crate::Value) -> Result<Self, $crate::ModelError> {
                match value {
                    $crate::Value::Record(boxed) => {
                        let actual = $crate::Model::model_type(boxed.as_ref()).name;
                        boxed
                            .into_any()
                            .downcast::<$name>()
                            .map(|b| *b)
                            .map_err(|_| $crate::ModelError::TypeMismatch {
                                expected: stringify!($name),
                                actual,
                            })
                    }
                    $crate::Value::Object(map) => $crate::deserialization::decode(&map),
                    other => Err($crate::ModelError::TypeMismatch {
                        expected: stringify!($name),
                        actual: other.kind_name(),
                    }),
                }
            }
        }

        impl ::core::convert::From<$name> for $crate::Value {
            fn from(m: $name) -> Self {
                $crate::Value::Record(Box::new(m))
            }
        }
    };
}
