use std::ops::RangeInclusive;

use crate::{
    TableError,
    linear::{bracket, lerp},
};

/// A monotonic key→value table with clamped linear interpolation.
///
/// Entries are sorted by key at construction and validated once: at least
/// two entries, finite data, unique keys. The table is immutable afterwards.
///
/// Lookups never fail. Queries outside the key range clamp to the nearest
/// boundary value rather than extrapolating, and queries that hit a stored
/// key return the stored value exactly.
///
/// # Examples
///
/// ```
/// use tankgauge_tables::OrderedTable;
///
/// let table = OrderedTable::new([(0.0, 66.0), (1.0, 74.0)]).unwrap();
///
/// assert_eq!(table.lookup(0.5), 70.0);
/// assert_eq!(table.lookup(-3.0), 66.0);
/// assert_eq!(table.inverse_lookup(74.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedTable {
    keys: Vec<f64>,
    values: Vec<f64>,
}

impl OrderedTable {
    /// Creates a table from `(key, value)` pairs, sorting them by key.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if fewer than two entries are supplied,
    /// any entry is NaN or infinite, or two entries share a key.
    pub fn new<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut entries: Vec<_> = entries.into_iter().collect();

        if entries.len() < 2 {
            return Err(TableError::TooFewEntries(entries.len()));
        }
        if let Some(&(key, value)) = entries
            .iter()
            .find(|(k, v)| !k.is_finite() || !v.is_finite())
        {
            return Err(TableError::NonFiniteEntry { key, value });
        }

        entries.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(TableError::DuplicateKey(pair[0].0));
        }

        let (keys, values) = entries.into_iter().unzip();
        Ok(Self { keys, values })
    }

    /// Interpolates the value for `key`.
    ///
    /// Exact at stored keys; clamped to the boundary values outside the
    /// key range. NaN in, NaN out.
    #[must_use]
    pub fn lookup(&self, key: f64) -> f64 {
        let segment = bracket(&self.keys, key);
        lerp(
            self.values[segment.lower],
            self.values[segment.upper],
            segment.ratio,
        )
    }

    /// Interpolates the key whose value would be `value`.
    ///
    /// Table values must be monotonic for the inverse to be well defined;
    /// this is assumed, not checked. Both ascending and descending value
    /// columns are supported. Queries outside the value range clamp to the
    /// corresponding boundary key. NaN in, NaN out.
    #[must_use]
    pub fn inverse_lookup(&self, value: f64) -> f64 {
        if value.is_nan() {
            return f64::NAN;
        }

        let last = self.values.len() - 1;
        let ascending = self.values[0] <= self.values[last];
        let (bottom, top) = if ascending { (0, last) } else { (last, 0) };

        if value <= self.values[bottom] {
            return self.keys[bottom];
        }
        if value >= self.values[top] {
            return self.keys[top];
        }

        let upper = self
            .values
            .partition_point(|&v| if ascending { v < value } else { v > value });
        if self.values[upper] == value {
            return self.keys[upper];
        }

        let lower = upper - 1;
        let ratio = (value - self.values[lower]) / (self.values[upper] - self.values[lower]);
        lerp(self.keys[lower], self.keys[upper], ratio)
    }

    /// The smallest key in the table.
    #[must_use]
    pub fn min_key(&self) -> f64 {
        self.keys[0]
    }

    /// The largest key in the table.
    #[must_use]
    pub fn max_key(&self) -> f64 {
        self.keys[self.keys.len() - 1]
    }

    /// The value stored at the smallest key.
    #[must_use]
    pub fn first_value(&self) -> f64 {
        self.values[0]
    }

    /// The value stored at the largest key.
    #[must_use]
    pub fn last_value(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// The closed key range covered by the table.
    #[must_use]
    pub fn key_domain(&self) -> RangeInclusive<f64> {
        self.min_key()..=self.max_key()
    }

    /// Iterates the stored `(key, value)` pairs in key order.
    pub fn entries(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.keys.iter().copied().zip(self.values.iter().copied())
    }

    /// The number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false: a table holds at least two entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
