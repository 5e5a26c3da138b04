use std::hash::Hash;

use rustc_hash::FxHashSet as HashSet;

/// Returns the elements of `items` that are not in `exclusion`, keeping their order.
///
/// ```
/// use enumkit::subtract;
///
/// let rest = subtract(&['a', 'b', 'c', 'd', 'e'], ['b', 'd']);
/// assert_eq!(rest, ['a', 'c', 'e']);
/// ```
pub fn subtract<T, I>(items: &[T], exclusion: I) -> Vec<T>
where
	T: Clone + Eq + Hash,
	I: IntoIterator<Item = T>,
{
	let exclusion: HashSet<T> = exclusion.into_iter().collect();
	if exclusion.is_empty() {
		return items.to_vec();
	}
	items
		.iter()
		.filter(|item| !exclusion.contains(*item))
		.cloned()
		.collect()
}
