//! Serde support for [`Secret`].

pub use serde::{de, Deserialize, Serialize, Serializer};

use crate::{Secret, Strategy};

/// Marker trait for secret types which may be [`Serialize`]-d by [`serde`].
///
/// Types must opt in explicitly so that secrets are not exfiltrated through
/// serialization by accident. All types implementing `DeserializeOwned`
/// receive a [`Deserialize`] impl regardless.
pub trait SerializableSecret: Serialize {}

impl SerializableSecret for String {}

impl<'de, T, I> Deserialize<'de> for Secret<T, I>
where
    T: Clone + de::DeserializeOwned + Sized,
    I: Strategy<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<T, I> Serialize for Secret<T, I>
where
    T: SerializableSecret + Sized,
    I: Strategy<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner_secret.serialize(serializer)
    }
}
