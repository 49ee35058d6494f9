use serde::{Deserialize, Serialize, Deserializer};

/// A field of a partial update. Missing fields stay `NotSet`, an explicit
/// `null` becomes `Set(None)` for optional values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PatchValue<V> {
    NotSet,
    Set(V)
}

impl<V> PatchValue<V> {
    pub fn is_set(&self) -> bool {
        matches!(self, PatchValue::Set(_))
    }

    pub fn apply_to(self, target: &mut V) {
        if let PatchValue::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> Default for PatchValue<T> {
    fn default() -> Self {
        PatchValue::NotSet
    }
}

impl<'de, T> Deserialize<'de> for PatchValue<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(PatchValue::Set)
    }
}
