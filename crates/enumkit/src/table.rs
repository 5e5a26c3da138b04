use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::key::EnumValue;

/// Name-by-value lookup shared by a root enum and every handle derived from it.
///
/// Written once by [`crate::EnumBuilder::build`], read-only afterwards.
#[derive(Debug)]
pub(crate) struct NameTable<V> {
	pub(crate) label: &'static str,
	/// Alias names and value of every entry, in declaration order.
	pub(crate) entries: Box<[(Box<[Arc<str>]>, V)]>,
	/// Value to entry slot.
	pub(crate) slot_by_value: FxHashMap<V, usize>,
	/// Name to entry slot.
	pub(crate) slot_by_name: FxHashMap<Arc<str>, usize>,
}

impl<V: EnumValue> NameTable<V> {
	/// Returns every alias name of `value`.
	pub(crate) fn names_of(&self, value: &V) -> Option<&[Arc<str>]> {
		let slot = *self.slot_by_value.get(value)?;
		Some(&self.entries[slot].0)
	}

	/// Returns the value declared under `name`.
	pub(crate) fn value_of(&self, name: &str) -> Option<&V> {
		let slot = *self.slot_by_name.get(name)?;
		Some(&self.entries[slot].1)
	}
}
