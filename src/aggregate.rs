//! Grouping of flat forecast records into one attribute bundle per time slot.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::ForecastItem;

/// One forecast slot, stored as `{fcstDate}_{fcstTime}`.
///
/// Ordering is plain string ordering, which is chronological for the
/// zero-padded `YYYYMMDD` / `HHMM` values the API sends.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForecastKey(String);

impl ForecastKey {
    pub fn new(date: &str, time: &str) -> Self {
        ForecastKey(format!("{}_{}", date, time))
    }

    pub fn date(&self) -> &str {
        self.0.split_once('_').map_or(self.0.as_str(), |(date, _)| date)
    }

    pub fn time(&self) -> &str {
        self.0.split_once('_').map_or("", |(_, time)| time)
    }

    /// `YYYY-MM-DD HH:MM`
    pub fn label(&self) -> String {
        let date = self.date();
        let time = self.time();
        format!(
            "{}-{}-{} {}:{}",
            segment(date, 0, 4),
            segment(date, 4, 6),
            segment(date, 6, 8),
            segment(time, 0, 2),
            segment(time, 2, 4)
        )
    }
}

impl fmt::Display for ForecastKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Substring by byte range, clamped to the string and empty when the range
/// does not fall on character boundaries
fn segment(s: &str, start: usize, end: usize) -> &str {
    let end = end.min(s.len());
    s.get(start.min(end)..end).unwrap_or("")
}

/// Category code to raw value for one slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBundle(BTreeMap<String, String>);

impl AttributeBundle {
    pub fn get(&self, category: &str) -> Option<&str> {
        self.0.get(category).map(String::as_str)
    }

    /// Sets `category`, replacing any earlier value
    pub fn insert(&mut self, category: impl Into<String>, value: impl Into<String>) {
        self.0.insert(category.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// All slots of one API reply, enumerated in chronological order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForecastTable(BTreeMap<ForecastKey, AttributeBundle>);

impl ForecastTable {
    /// Builds the table in record order. A category repeated within the same
    /// slot keeps the last value seen.
    pub fn aggregate<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a ForecastItem>,
    {
        let mut slots: BTreeMap<ForecastKey, AttributeBundle> = BTreeMap::new();
        for item in items {
            slots
                .entry(ForecastKey::new(&item.fcst_date, &item.fcst_time))
                .or_default()
                .insert(item.category.as_str(), item.fcst_value.as_str());
        }
        ForecastTable(slots)
    }

    pub fn get(&self, key: &ForecastKey) -> Option<&AttributeBundle> {
        self.0.get(key)
    }

    /// Earliest slot
    pub fn first(&self) -> Option<(&ForecastKey, &AttributeBundle)> {
        self.0.iter().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ForecastKey, &AttributeBundle)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(date: &str, time: &str, category: &str, value: &str) -> ForecastItem {
        ForecastItem {
            fcst_date: date.to_string(),
            fcst_time: time.to_string(),
            category: category.to_string(),
            fcst_value: value.to_string(),
        }
    }

    #[test]
    fn test_last_write_wins_for_duplicate_category() {
        let items = vec![
            item("20240510", "0600", "TMP", "20"),
            item("20240510", "0600", "SKY", "1"),
            item("20240510", "0600", "TMP", "21"),
        ];

        let table = ForecastTable::aggregate(&items);

        assert_eq!(table.len(), 1);
        let bundle = table.get(&ForecastKey::new("20240510", "0600")).unwrap();
        assert_eq!(bundle.get("TMP"), Some("21"));
        assert_eq!(bundle.get("SKY"), Some("1"));
        assert_eq!(bundle.len(), 2);
    }

    #[test]
    fn test_one_bundle_per_distinct_slot() {
        let items = vec![
            item("20240510", "0700", "TMP", "15"),
            item("20240510", "0600", "TMP", "14"),
            item("20240511", "0000", "TMP", "9"),
            item("20240510", "0600", "REH", "80"),
        ];

        let table = ForecastTable::aggregate(&items);

        assert_eq!(table.len(), 3);
        assert!(table.get(&ForecastKey::new("20240510", "0800")).is_none());
        let keys: Vec<String> = table.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(
            keys,
            vec!["20240510_0600", "20240510_0700", "20240511_0000"]
        );
        assert_eq!(table.first().unwrap().1.get("REH"), Some("80"));
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let table = ForecastTable::aggregate(&Vec::<ForecastItem>::new());
        assert!(table.is_empty());
        assert!(table.first().is_none());
    }

    #[test]
    fn test_key_parts_and_label() {
        let key = ForecastKey::new("20240510", "0600");
        assert_eq!(key.date(), "20240510");
        assert_eq!(key.time(), "0600");
        assert_eq!(key.label(), "2024-05-10 06:00");
    }

    #[test]
    fn test_label_of_short_values_does_not_panic() {
        assert_eq!(ForecastKey::new("2024", "6").label(), "2024-- 6:");
        assert_eq!(ForecastKey::new("", "").label(), "-- :");
    }
}
