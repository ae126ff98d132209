//! Tiled gallery layout.

/// Number of columns in the tiled gallery.
pub const GALLERY_COLUMNS: usize = 3;

/// Deals items round-robin into [`GALLERY_COLUMNS`] columns: item `i` goes
/// to column `i % 3`, keeping relative order inside each column.
pub fn round_robin_columns<T>(items: impl IntoIterator<Item = T>) -> [Vec<T>; GALLERY_COLUMNS] {
    let mut columns: [Vec<T>; GALLERY_COLUMNS] = Default::default();
    for (index, item) in items.into_iter().enumerate() {
        if let Some(column) = columns.get_mut(index % GALLERY_COLUMNS) {
            column.push(item);
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_items_spread_over_three_columns() {
        let columns = round_robin_columns(0..7);
        assert_eq!(columns[0], vec![0, 3, 6]);
        assert_eq!(columns[1], vec![1, 4]);
        assert_eq!(columns[2], vec![2, 5]);
    }

    #[test]
    fn no_items_give_three_empty_columns() {
        let columns = round_robin_columns(Vec::<String>::new());
        assert!(columns.iter().all(Vec::is_empty));
    }

    #[test]
    fn partition_is_lossless_and_positional() {
        for len in 0..20usize {
            let columns = round_robin_columns(0..len);
            let total: usize = columns.iter().map(Vec::len).sum();
            assert_eq!(total, len);
            for (c, column) in columns.iter().enumerate() {
                assert!(column.iter().all(|i| i % GALLERY_COLUMNS == c));
            }
        }
    }
}
