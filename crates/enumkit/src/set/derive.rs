//! Ordering, subset and complement-subset derivations.
//!
//! All three validate their arguments element by element: a value outside the current set
//! is rejected first, then a repeated value. Orderings additionally require every member.

use rustc_hash::FxHashSet as HashSet;

use super::EnumSet;
use crate::error::{DeriveError, Derivation, render};
use crate::key::EnumValue;
use crate::subtract::subtract;

impl<V: EnumValue> EnumSet<V> {
	/// Creates a handle holding the same values in the given order.
	///
	/// `values` must be a permutation of [`list`](Self::list): no foreign values, no
	/// duplicates, no omissions.
	pub fn create_ordering<I>(&self, values: I) -> Result<EnumSet<V>, DeriveError>
	where
		I: IntoIterator,
		I::Item: Into<V>,
	{
		let op = Derivation::Ordering;
		let values = self.checked_members(op, values)?;
		if values.len() != self.len() {
			let missing = subtract(self.list(), values.iter().cloned());
			let error = DeriveError::Incomplete {
				op,
				expected: self.len(),
				found: values.len(),
				missing: missing.first().map(render).unwrap_or_default(),
			};
			return Err(self.rejected(error));
		}
		Ok(self.derived(op, values))
	}

	/// Creates a handle holding the given members, in the given order.
	///
	/// Any number of distinct members is accepted, from none to all of them.
	pub fn create_subset<I>(&self, values: I) -> Result<EnumSet<V>, DeriveError>
	where
		I: IntoIterator,
		I::Item: Into<V>,
	{
		let op = Derivation::Subset;
		let values = self.checked_members(op, values)?;
		Ok(self.derived(op, values))
	}

	/// Creates a handle holding every member except the given ones.
	///
	/// The retained values keep their order in this set, not the argument order.
	pub fn create_complement_subset<I>(&self, values: I) -> Result<EnumSet<V>, DeriveError>
	where
		I: IntoIterator,
		I::Item: Into<V>,
	{
		let op = Derivation::ComplementSubset;
		let excluded = self.checked_members(op, values)?;
		Ok(self.derived(op, subtract(self.list(), excluded)))
	}

	/// Collects `values`, rejecting foreign and repeated members.
	fn checked_members<I>(&self, op: Derivation, values: I) -> Result<Vec<V>, DeriveError>
	where
		I: IntoIterator,
		I::Item: Into<V>,
	{
		let values = values.into_iter();
		let mut seen: HashSet<V> =
			HashSet::with_capacity_and_hasher(values.size_hint().0, Default::default());
		let mut out = Vec::with_capacity(values.size_hint().0);
		for value in values {
			let value: V = value.into();
			if !self.type_guard(&value) {
				let error = DeriveError::ForeignValue {
					op,
					value: render(&value),
				};
				return Err(self.rejected(error));
			}
			if !seen.insert(value.clone()) {
				let error = DeriveError::DuplicateValue {
					op,
					value: render(&value),
				};
				return Err(self.rejected(error));
			}
			out.push(value);
		}
		Ok(out)
	}

	fn derived(&self, op: Derivation, list: Vec<V>) -> EnumSet<V> {
		tracing::trace!(label = self.label(), %op, from = self.len(), to = list.len(), "enum derived");
		self.derive(list)
	}

	fn rejected(&self, error: DeriveError) -> DeriveError {
		tracing::debug!(label = self.label(), %error, "derivation rejected");
		error
	}
}
