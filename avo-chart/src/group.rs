use std::collections::BTreeMap;

use avo_data::observation::{NumericColumn, Observation};

/// Split a subset into groups keyed by `key`, in ascending key order.
/// Rows keep their subset order inside each group.
pub(crate) fn partition_by<'a, K, F>(subset: &[&'a Observation], key: F) -> BTreeMap<K, Vec<&'a Observation>>
where
    K: Ord,
    F: Fn(&Observation) -> K,
{
    let mut groups: BTreeMap<K, Vec<&'a Observation>> = BTreeMap::new();
    for &obs in subset {
        groups.entry(key(obs)).or_default().push(obs);
    }
    groups
}

/// Column values for each row of a group.
pub(crate) fn column_values(rows: &[&Observation], column: NumericColumn) -> Vec<f64> {
    rows.iter().map(|obs| column.value(obs)).collect()
}
