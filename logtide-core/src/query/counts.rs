use crate::model::Severity;
use serde::Serialize;
use serde::ser::SerializeMap;
use std::ops::Index;

/// Number of entries per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    counts: [usize; Severity::ALL.len()],
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Severity) {
        self.counts[severity.index()] += 1;
    }

    pub fn get(&self, severity: Severity) -> usize {
        self.counts[severity.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(severity, count)` pairs in declaration order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, usize)> + '_ {
        Severity::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

impl Index<Severity> for SeverityCounts {
    type Output = usize;

    fn index(&self, severity: Severity) -> &usize {
        &self.counts[severity.index()]
    }
}

impl FromIterator<Severity> for SeverityCounts {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        let mut counts = Self::default();
        for severity in iter {
            counts.record(severity);
        }
        counts
    }
}

// Serialized as `{"error": n, "warning": n, ...}`.
impl Serialize for SeverityCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Severity::ALL.len()))?;
        for (severity, count) in self.iter() {
            map.serialize_entry(severity.as_str(), &count)?;
        }
        map.end()
    }
}
