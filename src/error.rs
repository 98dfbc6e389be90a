// ─── Error ──────────────────────────────────────────────────────────────────
use smol_str::SmolStr;
use thiserror::Error;

/// Failures of the strict accessor and codec paths.
///
/// All of these are programmer or input-shape errors, never transient; there
/// is no retry story. The lenient subscript-style wrappers (`ModelKv::get`,
/// `ModelKv::set`) swallow every variant and degrade to "no value" / no-op.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("map key `{0}` matches no declared field")]
    UnknownField(SmolStr),
    #[error("no candidate type matched the map")]
    NoMatchingType,
}
