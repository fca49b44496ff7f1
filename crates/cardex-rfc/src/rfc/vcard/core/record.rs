//! Per-record mutable state.

use super::column::Column;

/// The in-progress contact record.
///
/// Holds one value per schema column (defaulting to the empty string) plus
/// the per-category acceptance counters that cap how many values of each
/// category are retained. Reset at every record boundary.
#[derive(Debug)]
pub struct RecordState {
    values: [String; Column::COUNT],
    accepted: [u32; Column::COUNT],
    addresses: u32,
}

impl RecordState {
    /// Creates a fresh record with every column empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: std::array::from_fn(|_| String::new()),
            accepted: [0; Column::COUNT],
            addresses: 0,
        }
    }

    /// Clears all values and counters for the next record.
    pub fn reset(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
        self.accepted = [0; Column::COUNT];
        self.addresses = 0;
    }

    /// Returns the current value of a column.
    #[must_use]
    pub fn get(&self, column: Column) -> &str {
        &self.values[column.index()]
    }

    /// Sets the value of a column, overwriting any previous value.
    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        self.values[column.index()] = value.into();
    }

    /// Gates acceptance of another value for `column` against `max`.
    ///
    /// Returns `true` and bumps the counter when the column has capacity
    /// left; returns `false` once the cap is reached.
    pub fn try_accept(&mut self, column: Column, max: u32) -> bool {
        let count = &mut self.accepted[column.index()];
        if *count < max {
            *count += 1;
            true
        } else {
            false
        }
    }

    /// Gates acceptance of another address against `max`.
    ///
    /// Addresses span several columns, so they are counted as a unit
    /// rather than per column.
    pub fn try_accept_address(&mut self, max: u32) -> bool {
        if self.addresses < max {
            self.addresses += 1;
            true
        } else {
            false
        }
    }

    /// Column values in schema order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl Default for RecordState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_all_empty() {
        let record = RecordState::new();
        for column in Column::ALL {
            assert_eq!(record.get(column), "");
        }
    }

    #[test]
    fn set_and_get() {
        let mut record = RecordState::new();
        record.set(Column::Name, "John Smith");
        assert_eq!(record.get(Column::Name), "John Smith");
        assert_eq!(record.get(Column::Organisation), "");
    }

    #[test]
    fn accept_gates_per_column() {
        let mut record = RecordState::new();
        assert!(record.try_accept(Column::HomePhone, 1));
        assert!(!record.try_accept(Column::HomePhone, 1));
        // A different column has its own counter.
        assert!(record.try_accept(Column::WorkPhone, 1));
    }

    #[test]
    fn address_counter_is_flat() {
        let mut record = RecordState::new();
        assert!(record.try_accept_address(1));
        assert!(!record.try_accept_address(1));
    }

    #[test]
    fn reset_clears_values_and_counters() {
        let mut record = RecordState::new();
        record.set(Column::City, "Anytown");
        assert!(record.try_accept(Column::Fax, 1));
        assert!(record.try_accept_address(1));

        record.reset();

        assert_eq!(record.get(Column::City), "");
        assert!(record.try_accept(Column::Fax, 1));
        assert!(record.try_accept_address(1));
    }

    #[test]
    fn values_iterate_in_schema_order() {
        let mut record = RecordState::new();
        record.set(Column::Name, "a");
        record.set(Column::Website, "b");
        let values: Vec<&str> = record.values().collect();
        assert_eq!(values.len(), Column::COUNT);
        assert_eq!(values[0], "a");
        assert_eq!(values[Column::COUNT - 1], "b");
    }
}
