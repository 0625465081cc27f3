use chrono::{DateTime, Utc};

use super::record::{Record, RecordKind};

/// Selects a subset of records for `list` and `balance`. All criteria are
/// optional and combine with AND; an empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    kind: Option<RecordKind>,
    category: Option<String>,
    since: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: RecordKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Exact category match.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Lower timestamp bound, inclusive.
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    /// Upper timestamp bound, exclusive.
    pub fn before(mut self, before: DateTime<Utc>) -> Self {
        self.before = Some(before);
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        if let Some(kind) = self.kind {
            if record.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &record.category != category {
                return false;
            }
        }
        if let Some(since) = self.since {
            if record.timestamp < since {
                return false;
            }
        }
        if let Some(before) = self.before {
            if record.timestamp >= before {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::record::RecordDraft;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn record_at(category: &str, kind: RecordKind, day: u32) -> Record {
        let timestamp = Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap();
        RecordDraft::new(kind, dec!(10), category)
            .with_timestamp(timestamp)
            .into_record()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let record = record_at("misc", RecordKind::Income, 1);
        assert!(RecordFilter::new().matches(&record));
    }

    #[test]
    fn kind_and_category_criteria_combine() {
        let record = record_at("groceries", RecordKind::Expense, 5);
        assert!(RecordFilter::new()
            .kind(RecordKind::Expense)
            .category("groceries")
            .matches(&record));
        assert!(!RecordFilter::new().kind(RecordKind::Income).matches(&record));
        assert!(!RecordFilter::new().category("rent").matches(&record));
    }

    #[test]
    fn time_range_is_inclusive_start_exclusive_end() {
        let record = record_at("misc", RecordKind::Income, 10);
        let exact = record.timestamp;
        assert!(RecordFilter::new().since(exact).matches(&record));
        assert!(!RecordFilter::new().before(exact).matches(&record));
        let window = RecordFilter::new()
            .since(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
            .before(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap());
        assert!(window.matches(&record));
    }
}
