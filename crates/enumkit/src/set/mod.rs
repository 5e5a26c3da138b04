//! Enum handles and their derivations.
//!
//! # Role
//!
//! An [`EnumSet`] is the result of building an enum or deriving from another handle. It owns
//! its ordered value list and index, and shares the root's name table read-only.
//!
//! # Invariants
//!
//! - `index_by_value()[v]` is the position of `v` in `list()`; both have the same length.
//!   - Enforced in: [`EnumSet::from_parts`].
//!   - Tested by: `crate::invariants::prop_index_matches_list_position`
//! - `enum_map()` only contains names whose value is in `list()`.
//!   - Enforced in: [`EnumSet::enum_map`].
//!   - Tested by: `set::tests::test_subset_enum_map_is_restricted`
//! - Derivations never mutate the parent handle.
//!   - Enforced in: every derivation builds through [`EnumSet::derive`].
//!   - Tested by: `set::tests::test_derivation_leaves_parent_untouched`

mod derive;

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::key::EnumValue;
use crate::table::NameTable;

/// Name-to-value mapping of a handle, in declaration order.
pub type EnumMap<V> = IndexMap<Arc<str>, V, FxBuildHasher>;

/// Value-to-position mapping of a handle.
pub type IndexByValue<V> = FxHashMap<V, usize>;

/// An immutable, ordered enum value set.
#[derive(Clone)]
pub struct EnumSet<V> {
	table: Arc<NameTable<V>>,
	list: Arc<[V]>,
	index_by_value: IndexByValue<V>,
	enum_map: OnceLock<EnumMap<V>>,
}

impl<V: EnumValue> EnumSet<V> {
	pub(crate) fn from_parts(table: Arc<NameTable<V>>, list: Vec<V>) -> Self {
		let mut index_by_value =
			IndexByValue::with_capacity_and_hasher(list.len(), Default::default());
		for (idx, value) in list.iter().enumerate() {
			index_by_value.insert(value.clone(), idx);
		}
		Self {
			table,
			list: list.into(),
			index_by_value,
			enum_map: OnceLock::new(),
		}
	}

	/// Builds a sibling handle over `list`, sharing this handle's name table.
	fn derive(&self, list: Vec<V>) -> Self {
		Self::from_parts(Arc::clone(&self.table), list)
	}

	/// Returns the label given to the root builder.
	pub fn label(&self) -> &'static str {
		self.table.label
	}

	/// Returns the values of this set in order.
	#[inline]
	pub fn list(&self) -> &[V] {
		&self.list
	}

	/// Returns an iterator over the values of this set in order.
	#[inline]
	pub fn iter(&self) -> std::slice::Iter<'_, V> {
		self.list.iter()
	}

	/// Returns the number of values.
	#[inline]
	pub fn len(&self) -> usize {
		self.list.len()
	}

	/// Returns true if the set has no values.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}

	/// Returns the position of every value, matching [`list`](Self::list).
	#[inline]
	pub fn index_by_value(&self) -> &IndexByValue<V> {
		&self.index_by_value
	}

	/// Returns the position of `value`, or `None` if it is not a member.
	#[inline]
	pub fn index_of<Q>(&self, value: &Q) -> Option<usize>
	where
		V: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.index_by_value.get(value).copied()
	}

	/// Returns true iff `candidate` is a member of this set.
	///
	/// Any candidate is accepted; values of ancestor or sibling handles that are not part of
	/// this set yield `false`.
	#[inline]
	pub fn type_guard<Q>(&self, candidate: &Q) -> bool
	where
		V: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.index_by_value.contains_key(candidate)
	}

	/// Alias of [`type_guard`](Self::type_guard).
	#[inline]
	pub fn contains<Q>(&self, candidate: &Q) -> bool
	where
		V: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.type_guard(candidate)
	}

	/// Returns the name-to-value mapping restricted to this set's values.
	///
	/// Computed on first access and cached.
	pub fn enum_map(&self) -> &EnumMap<V> {
		self.enum_map.get_or_init(|| {
			let mut map = EnumMap::default();
			for (names, value) in self.table.entries.iter() {
				if !self.index_by_value.contains_key(value) {
					continue;
				}
				for name in names.iter() {
					map.insert(Arc::clone(name), value.clone());
				}
			}
			map
		})
	}

	/// Returns the value declared under `name`, if it is a member of this set.
	pub fn get(&self, name: &str) -> Option<&V> {
		self.table
			.value_of(name)
			.filter(|value| self.index_by_value.contains_key(*value))
	}

	/// Returns every alias name of `value`, if it is a member of this set.
	pub fn names_of(&self, value: &V) -> Option<&[Arc<str>]> {
		if !self.type_guard(value) {
			return None;
		}
		self.table.names_of(value)
	}

	/// Returns true if both handles derive from the same built enum.
	pub fn shares_table_with(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.table, &other.table)
	}
}

impl<V: fmt::Debug> fmt::Debug for EnumSet<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EnumSet")
			.field("label", &self.table.label)
			.field("list", &self.list)
			.finish_non_exhaustive()
	}
}

impl<V: PartialEq> PartialEq for EnumSet<V> {
	/// Handles are equal when they come from the same built enum and list the same values in
	/// the same order.
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.table, &other.table) && self.list == other.list
	}
}

impl<V: Eq> Eq for EnumSet<V> {}

impl<'a, V: EnumValue> IntoIterator for &'a EnumSet<V> {
	type Item = &'a V;
	type IntoIter = std::slice::Iter<'a, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(feature = "serde")]
impl<V: EnumValue + serde::Serialize> serde::Serialize for EnumSet<V> {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		use serde::ser::SerializeStruct;

		let mut state = serializer.serialize_struct("EnumSet", 3)?;
		state.serialize_field("label", self.label())?;
		state.serialize_field("enum", self.enum_map())?;
		state.serialize_field("list", self.list())?;
		state.end()
	}
}

#[cfg(test)]
mod tests;
