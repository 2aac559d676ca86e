// Write-once optional value

use serde::{Deserialize, Serialize};

/// An optional value that keeps the first value written to it.
///
/// Serializes as the inner value (`null` when unset); pair with
/// `skip_serializing_if = "SetOnce::is_unset"` to omit absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetOnce<T>(Option<T>);

impl<T> Default for SetOnce<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> SetOnce<T> {
    pub fn new() -> Self {
        Self(None)
    }

    /// Store `value` unless a value is already present.
    ///
    /// Returns whether the value was stored.
    pub fn set(&mut self, value: T) -> bool {
        if self.0.is_some() {
            return false;
        }
        self.0 = Some(value);
        true
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> From<T> for SetOnce<T> {
    fn from(value: T) -> Self {
        Self(Some(value))
    }
}
