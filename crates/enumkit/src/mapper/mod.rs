//! One-to-one mappings between the values of two enums.
//!
//! # Role
//!
//! [`EnumOneToOneMapper`] fixes two equal-length value lists A and B. Each call to
//! [`EnumOneToOneMapper::create`] validates a candidate bijection from A to B and returns it
//! together with its inverse.
//!
//! # Invariants
//!
//! - Every A value is mapped exactly once and every B value is targeted exactly once.
//!   - Enforced in: [`EnumOneToOneMapper::create`].
//!   - Tested by: `mapper::tests::test_rejects_duplicate_value`, `mapper::tests::test_rejects_missing_key`
//! - `inverse_mapping()[mapping()[a]] == a` for every `a`, with `a` keeping its original
//!   identity (integers and symbols are never stringified).
//!   - Enforced in: [`EnumOneToOneMapper::create`] (both maps keyed by the values themselves).
//!   - Tested by: `crate::invariants::prop_inverse_undoes_mapping`

use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::Entry as IndexEntry;
use rustc_hash::{FxBuildHasher, FxHashSet as HashSet};

use crate::error::{MapperSide, MappingError, render};
use crate::key::EnumValue;
use crate::set::EnumSet;

/// An order-preserving map keyed by enum values.
pub type ValueMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Factory for validated one-to-one mappings from A values to B values.
#[derive(Debug, Clone)]
pub struct EnumOneToOneMapper<A, B> {
	values_a: Box<[A]>,
	members_a: HashSet<A>,
	members_b: HashSet<B>,
}

impl<A: EnumValue, B: EnumValue> EnumOneToOneMapper<A, B> {
	/// Creates a mapper over two value lists of identical length.
	pub fn new<IA, IB>(values_a: IA, values_b: IB) -> Result<Self, MappingError>
	where
		IA: IntoIterator<Item = A>,
		IB: IntoIterator<Item = B>,
	{
		let values_a: Box<[A]> = values_a.into_iter().collect();
		let values_b: Vec<B> = values_b.into_iter().collect();
		if values_a.len() != values_b.len() {
			let error = MappingError::LengthMismatch {
				left: values_a.len(),
				right: values_b.len(),
			};
			tracing::debug!(%error, "one-to-one mapper rejected");
			return Err(error);
		}
		let members_a = distinct_members(&values_a, MapperSide::Keys)?;
		let members_b = distinct_members(&values_b, MapperSide::Values)?;
		Ok(Self {
			values_a,
			members_a,
			members_b,
		})
	}

	/// Creates a mapper over the lists of two enum handles.
	pub fn from_sets(set_a: &EnumSet<A>, set_b: &EnumSet<B>) -> Result<Self, MappingError> {
		Self::new(set_a.list().iter().cloned(), set_b.list().iter().cloned())
	}

	/// Returns the number of values on each side.
	pub fn len(&self) -> usize {
		self.values_a.len()
	}

	/// Returns true if both lists are empty.
	pub fn is_empty(&self) -> bool {
		self.values_a.is_empty()
	}

	/// Validates `pairs` as a bijection from A onto B and returns it with its inverse.
	pub fn create<I, K, W>(&self, pairs: I) -> Result<OneToOneMapping<A, B>, MappingError>
	where
		I: IntoIterator<Item = (K, W)>,
		K: Into<A>,
		W: Into<B>,
	{
		let result = self.validate(pairs);
		match &result {
			Ok(mapping) => tracing::trace!(pairs = mapping.len(), "one-to-one mapping created"),
			Err(error) => tracing::debug!(%error, "one-to-one mapping rejected"),
		}
		result
	}

	fn validate<I, K, W>(&self, pairs: I) -> Result<OneToOneMapping<A, B>, MappingError>
	where
		I: IntoIterator<Item = (K, W)>,
		K: Into<A>,
		W: Into<B>,
	{
		let mut mapping = ValueMap::with_capacity_and_hasher(self.len(), FxBuildHasher);
		let mut inverse = ValueMap::with_capacity_and_hasher(self.len(), FxBuildHasher);

		for (key, value) in pairs {
			let (key, value): (A, B) = (key.into(), value.into());
			if !self.members_a.contains(&key) {
				return Err(MappingError::ForeignKey { key: render(&key) });
			}
			if !self.members_b.contains(&value) {
				return Err(MappingError::ForeignValue {
					key: render(&key),
					value: render(&value),
				});
			}
			let IndexEntry::Vacant(mapped) = mapping.entry(key.clone()) else {
				return Err(MappingError::DuplicateKey { key: render(&key) });
			};
			match inverse.entry(value.clone()) {
				IndexEntry::Occupied(o) => {
					return Err(MappingError::DuplicateValue {
						value: render(&value),
						first_key: render(o.get()),
						key: render(&key),
					});
				}
				IndexEntry::Vacant(v) => {
					v.insert(key);
				}
			}
			mapped.insert(value);
		}

		if mapping.len() != self.len() {
			let missing = self.values_a.iter().find(|a| !mapping.contains_key(*a));
			return Err(MappingError::MissingKey {
				key: missing.map(render).unwrap_or_default(),
			});
		}

		Ok(OneToOneMapping { mapping, inverse })
	}
}

fn distinct_members<T: EnumValue>(
	values: &[T],
	side: MapperSide,
) -> Result<HashSet<T>, MappingError> {
	let mut members = HashSet::with_capacity_and_hasher(values.len(), FxBuildHasher);
	for value in values {
		if !members.insert(value.clone()) {
			let error = MappingError::DuplicateListValue {
				side,
				value: render(value),
			};
			tracing::debug!(%error, "one-to-one mapper rejected");
			return Err(error);
		}
	}
	Ok(members)
}

/// A validated bijection and its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneToOneMapping<A: Hash + Eq, B: Hash + Eq> {
	mapping: ValueMap<A, B>,
	inverse: ValueMap<B, A>,
}

impl<A: EnumValue, B: EnumValue> OneToOneMapping<A, B> {
	/// Returns the mapping as given, in the caller's order.
	pub fn mapping(&self) -> &ValueMap<A, B> {
		&self.mapping
	}

	/// Returns the inverse mapping, in the same order as [`mapping`](Self::mapping).
	pub fn inverse_mapping(&self) -> &ValueMap<B, A> {
		&self.inverse
	}

	/// Returns the B value mapped from `key`.
	pub fn get(&self, key: &A) -> Option<&B> {
		self.mapping.get(key)
	}

	/// Returns the A value mapped onto `value`.
	pub fn get_inverse(&self, value: &B) -> Option<&A> {
		self.inverse.get(value)
	}

	/// Returns the number of mapped pairs.
	pub fn len(&self) -> usize {
		self.mapping.len()
	}

	/// Returns true if nothing is mapped.
	pub fn is_empty(&self) -> bool {
		self.mapping.is_empty()
	}

	/// Splits into the mapping and its inverse.
	pub fn into_parts(self) -> (ValueMap<A, B>, ValueMap<B, A>) {
		(self.mapping, self.inverse)
	}
}

#[cfg(feature = "serde")]
impl<A, B> serde::Serialize for OneToOneMapping<A, B>
where
	A: EnumValue + serde::Serialize,
	B: EnumValue + serde::Serialize,
{
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		use serde::ser::SerializeStruct;

		let mut state = serializer.serialize_struct("OneToOneMapping", 2)?;
		state.serialize_field("mapping", &self.mapping)?;
		state.serialize_field("inverse_mapping", &self.inverse)?;
		state.end()
	}
}
