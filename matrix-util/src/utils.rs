use fnv::FnvHashMap as HashMap;
use std::hash::Hash;

/// partition membership vector into groups of indexes
/// # Arguments
/// * `membership` - a vector of membership (E.g., cluster assignment)
/// # Returns
/// A hashmap: cluster/group name -> indexes of the elements, each in
/// ascending order
pub fn partition_by_membership<T>(membership: &[T]) -> HashMap<T, Vec<usize>>
where
    T: Eq + Hash + Clone,
{
    let mut groups: HashMap<T, Vec<usize>> = HashMap::default();
    for (i, k) in membership.iter().enumerate() {
        groups.entry(k.clone()).or_default().push(i);
    }
    groups
}

/// Take groups of indexes in the order of `keys`; a key with no
/// members yields an empty group
pub fn ordered_partition<T>(membership: &[T], keys: &[T]) -> Vec<Vec<usize>>
where
    T: Eq + Hash + Clone,
{
    let mut groups = partition_by_membership(membership);
    keys.iter()
        .map(|k| groups.remove(k).unwrap_or_default())
        .collect()
}
