//! `StructRegistry` — signature byte to constructor mapping for decode-time
//! structure reification.

use std::collections::HashMap;
use std::sync::Arc;

use crate::value::Value;

/// A constructor that turns a decoded `(signature, fields)` pair into a host
/// `Value`. Registered callbacks never fail: a signature a caller registers
/// for is expected to accept whatever field list the wire sends; callers
/// that need to validate field shape should do so inside the constructor and
/// fall back to a generic `Value::Structure` on mismatch.
pub type Constructor = Arc<dyn Fn(u8, Vec<Value>) -> Value + Send + Sync>;

/// Maps PackStream structure signature bytes to constructors.
///
/// Registration is caller-driven and scoped to one registry instance.
/// Decoding consults the registry only for `Value::Structure`; encoding
/// never needs it, since a `Structure` value already carries its own
/// signature and fields. A registry with no entry for a given signature
/// falls back to a generic `Value::Structure { signature, fields }`, so
/// the registry is always optional at the call site (see
/// [`crate::decode`] / [`crate::decode_with_registry`]).
#[derive(Clone, Default)]
pub struct StructRegistry {
    constructors: HashMap<u8, Constructor>,
}

impl StructRegistry {
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registers a constructor for `signature`. Replaces any previous
    /// registration for the same byte.
    pub fn register(
        &mut self,
        signature: u8,
        ctor: impl Fn(u8, Vec<Value>) -> Value + Send + Sync + 'static,
    ) {
        self.constructors.insert(signature, Arc::new(ctor));
    }

    /// Builds the `Value` for a decoded structure, consulting the registered
    /// constructor if one exists for `signature`, else falling back to a
    /// generic `Value::Structure`.
    pub fn construct(&self, signature: u8, fields: Vec<Value>) -> Value {
        match self.constructors.get(&signature) {
            Some(ctor) => ctor(signature, fields),
            None => Value::Structure { signature, fields },
        }
    }
}

impl std::fmt::Debug for StructRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructRegistry")
            .field("signatures", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}
