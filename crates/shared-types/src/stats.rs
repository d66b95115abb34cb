use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::records::{RawRecord, SchoolCity};

/// Number of schools sharing one city label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityBucket {
    pub name: String,
    pub value: u64,
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub schools: u64,
    pub users: u64,
    pub agencies: u64,
}

/// Everything the admin dashboard renders once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub summary: StatsSummary,
    /// Buckets in order of each city's first appearance in `schools`.
    pub cities: Vec<CityBucket>,
}

impl DashboardStats {
    /// Aggregate the three fetched collections.
    ///
    /// Only `schools` contents are inspected; `users` and `agencies`
    /// contribute their cardinality alone.
    pub fn from_collections(
        schools: &[RawRecord],
        users: &[RawRecord],
        agencies: &[RawRecord],
    ) -> Self {
        Self {
            summary: StatsSummary {
                schools: schools.len() as u64,
                users: users.len() as u64,
                agencies: agencies.len() as u64,
            },
            cities: bucket_by_city(schools),
        }
    }

    /// Whether there is anything to chart.
    pub fn has_city_data(&self) -> bool {
        !self.cities.is_empty()
    }
}

/// Group school records by city, preserving first-occurrence order.
///
/// Chart colors are assigned by position, so the order must not depend
/// on hashing or sorting.
pub fn bucket_by_city(schools: &[RawRecord]) -> Vec<CityBucket> {
    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for record in schools {
        let city = SchoolCity::from_record(record);
        *counts.entry(city.label().to_string()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(name, value)| CityBucket { name, value })
        .collect()
}
