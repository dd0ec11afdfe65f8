//! Write payloads.
//!
//! Every field is optional so the same type serves as a create body and as a
//! partial update. Absent fields never overwrite stored values.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};

use crate::validation::Validate;

pub trait Payload: Validate + Clone + Default + DeserializeOwned + Send + Sync + 'static {
    type Model;
    type ActiveModel;

    /// Payload carrying every field of a stored row.
    fn from_model(model: &Self::Model) -> Self;

    /// Overlay the fields present in `patch`.
    fn merge(self, patch: &Self) -> Self;

    /// Set the fields present in `self` on `active`, leaving the rest untouched.
    fn apply(&self, active: &mut Self::ActiveModel);
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`).
/// Use together with `#[serde(default)]`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Pick the patch value when present.
pub(crate) fn pick<T: Clone>(base: Option<T>, patch: &Option<T>) -> Option<T> {
    match patch {
        Some(v) => Some(v.clone()),
        None => base,
    }
}
