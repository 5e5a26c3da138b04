//! Authoring-side configuration: entries of alias names sharing one value.

use std::sync::Arc;

/// An ordered sequence of entries, in canonical value order.
pub type EnumConfig<V> = Vec<Entry<V>>;

/// One or more alias names mapped to a single value.
///
/// Entries built through [`Entry::new`] and [`Entry::alias`] are consistent by
/// construction. [`Entry::from_pairs`] accepts arbitrary pairs; mismatched values are
/// rejected when the enum is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
	pub(crate) pairs: Vec<(Arc<str>, V)>,
}

impl<V> Entry<V> {
	/// Creates an entry with a single name.
	pub fn new(name: impl Into<Arc<str>>, value: V) -> Self {
		Self {
			pairs: vec![(name.into(), value)],
		}
	}

	/// Creates an entry from raw `(name, value)` pairs, in order.
	pub fn from_pairs<N, I>(pairs: I) -> Self
	where
		N: Into<Arc<str>>,
		I: IntoIterator<Item = (N, V)>,
	{
		Self {
			pairs: pairs.into_iter().map(|(n, v)| (n.into(), v)).collect(),
		}
	}

	/// Returns the names of this entry in declaration order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.pairs.iter().map(|(name, _)| name.as_ref())
	}

	/// Returns the value of the first pair, if any.
	pub fn value(&self) -> Option<&V> {
		self.pairs.first().map(|(_, value)| value)
	}

	/// Returns the raw pairs.
	pub fn pairs(&self) -> &[(Arc<str>, V)] {
		&self.pairs
	}

	/// Returns the number of names in this entry.
	pub fn len(&self) -> usize {
		self.pairs.len()
	}

	/// Returns true if the entry has no names.
	pub fn is_empty(&self) -> bool {
		self.pairs.is_empty()
	}
}

impl<V: Clone> Entry<V> {
	/// Adds an alias sharing this entry's value.
	///
	/// Has no effect on an empty entry, which the builder rejects anyway.
	pub fn alias(mut self, name: impl Into<Arc<str>>) -> Self {
		if let Some(value) = self.value().cloned() {
			self.pairs.push((name.into(), value));
		}
		self
	}
}

#[cfg(feature = "serde")]
mod serde_impl {
	use std::fmt;
	use std::marker::PhantomData;
	use std::sync::Arc;

	use serde::de::{MapAccess, Visitor};
	use serde::ser::SerializeMap;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::Entry;

	/// Upper bound on capacity reserved from an untrusted size hint.
	const MAX_PREALLOCATED_NAMES: usize = 64;

	impl<V: Serialize> Serialize for Entry<V> {
		fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
			let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
			for (name, value) in &self.pairs {
				map.serialize_entry(name.as_ref(), value)?;
			}
			map.end()
		}
	}

	struct EntryVisitor<V>(PhantomData<V>);

	impl<'de, V: Deserialize<'de>> Visitor<'de> for EntryVisitor<V> {
		type Value = Entry<V>;

		fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("a map of alias names to a shared value")
		}

		// Repeated names are kept so the builder can report them.
		fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
			let capacity = access.size_hint().unwrap_or(1).min(MAX_PREALLOCATED_NAMES);
			let mut pairs = Vec::with_capacity(capacity);
			while let Some((name, value)) = access.next_entry::<String, V>()? {
				pairs.push((Arc::<str>::from(name), value));
			}
			Ok(Entry { pairs })
		}
	}

	impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entry<V> {
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
			deserializer.deserialize_map(EntryVisitor(PhantomData))
		}
	}

}
