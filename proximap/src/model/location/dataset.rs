use super::LocationRecord;
use serde::{Deserialize, Serialize};

/// an ordered collection of location records, insertion order matching source
/// row order. the dataset is rebuilt wholesale on every load; there is no
/// incremental update or deletion. duplicate names and coordinates are kept
/// distinct.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<LocationRecord>,
}

impl Dataset {
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Dataset { records }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }
}

impl IntoIterator for Dataset {
    type Item = LocationRecord;
    type IntoIter = std::vec::IntoIter<LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LocationRecord;
    type IntoIter = std::slice::Iter<'a, LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
