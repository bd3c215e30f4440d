//! Record abstraction for cacheable entity types.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A domain record that can be cached and filtered by named field.
///
/// Records cross the remote-cache boundary as serialized collections, so the
/// trait requires serde both ways. Field access goes through
/// `serde_json::Value`, which gives the loose, structural equality the
/// lookup accessors filter with.
///
/// Both provided methods can be overridden: `entity_name` when the type name
/// should not be derived from the Rust type, `field` when per-call
/// serialization is too slow and direct field dispatch is preferred.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Simple (unqualified) name of the entity type.
    fn entity_name() -> &'static str {
        simple_type_name::<Self>()
    }

    /// Read a named field as a JSON value, or `None` if the record has no
    /// such field.
    fn field(&self, name: &str) -> Option<Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map.get(name).cloned(),
            _ => None,
        }
    }
}

/// Last path segment of a type's name, with any generic suffix stripped.
fn simple_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
