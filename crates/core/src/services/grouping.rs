use std::collections::HashMap;

use crate::models::record::TransactionRecord;
use crate::models::selection::Dimension;

/// Records sharing one value per grouping dimension.
#[derive(Debug, Clone)]
pub struct Group<'a> {
    /// One value per grouping dimension, in the order the dimensions were given
    pub key: Vec<String>,

    /// Member records, in input order
    pub rows: Vec<&'a TransactionRecord>,
}

impl Group<'_> {
    /// Whether this group's key equals `values` position by position.
    #[must_use]
    pub fn has_key(&self, values: &[&str]) -> bool {
        self.key.len() == values.len() && self.key.iter().zip(values).all(|(k, v)| k == v)
    }
}

/// Partition records by the given dimensions.
///
/// Groups come out in first-occurrence order of their key (no re-sort), and
/// rows keep their input order inside each group. With no dimensions, every
/// record lands in one group with an empty key (none if there are no records).
pub fn group_by<'a, I>(records: I, dimensions: &[Dimension]) -> Vec<Group<'a>>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut groups: Vec<Group<'a>> = Vec::new();
    let mut index: HashMap<Vec<String>, usize> = HashMap::new();

    for record in records {
        let key: Vec<String> = dimensions
            .iter()
            .map(|&dim| record.dimension_value(dim).into_owned())
            .collect();

        match index.get(&key) {
            Some(&pos) => groups[pos].rows.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    rows: vec![record],
                });
            }
        }
    }

    groups
}

/// Unique values of one dimension, in first-occurrence order.
pub fn unique_values<'a, I>(records: I, dimension: Dimension) -> Vec<String>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    group_by(records, &[dimension])
        .into_iter()
        .filter_map(|g| g.key.into_iter().next())
        .collect()
}
