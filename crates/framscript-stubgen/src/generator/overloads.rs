use std::collections::HashSet;

use itertools::Itertools;

use crate::schema::Element;

/// Ids that occur more than once in one type's element list.
///
/// Every element whose id is in the returned set is emitted with `@overload`. Counting is
/// per type; equal ids in different types never interact.
pub(crate) fn duplicate_ids(elements: &[Element]) -> HashSet<&str> {
  elements
    .iter()
    .map(|element| element.id.as_str())
    .counts()
    .into_iter()
    .filter_map(|(id, count)| (count > 1).then_some(id))
    .collect()
}
