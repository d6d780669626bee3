use std::collections::HashSet;
use std::fmt;

use crate::record::PlaceRecord;

/// Aggregate counts over a finished run.
#[derive(Debug, PartialEq)]
pub struct RunStats {
    pub total: usize,
    pub distinct_places: usize,
    /// Search queries in first-seen order with their row counts.
    pub per_query: Vec<(String, usize)>,
}

impl RunStats {
    pub fn from_records(records: &[PlaceRecord]) -> Self {
        let mut per_query: Vec<(String, usize)> = Vec::new();
        let mut places = HashSet::new();

        for record in records {
            match per_query.iter_mut().find(|(q, _)| *q == record.search_query) {
                Some((_, count)) => *count += 1,
                None => per_query.push((record.search_query.clone(), 1)),
            }
            places.insert((record.object_name.as_str(), record.object_address.as_str()));
        }

        RunStats {
            total: records.len(),
            distinct_places: places.len(),
            per_query,
        }
    }

    pub fn queries(&self) -> Vec<&str> {
        self.per_query.iter().map(|(q, _)| q.as_str()).collect()
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total records: {}", self.total)?;
        writeln!(f, "Distinct places: {}", self.distinct_places)?;
        writeln!(f, "Search queries: {}", self.queries().join(", "))?;
        writeln!(f, "Records per query:")?;
        let mut by_count: Vec<_> = self.per_query.iter().collect();
        by_count.sort_by(|a, b| b.1.cmp(&a.1));
        for (query, count) in by_count {
            writeln!(f, "  {:<24} {}", query, count)?;
        }
        Ok(())
    }
}
