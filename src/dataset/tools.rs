//! Post-processing of stored datasets: duplicate removal and move-count filtering.

use rustc_hash::FxHashSet;

use super::csv_io::DatasetRow;

/// Drop repeated rows, keeping the first occurrence of each.
///
/// Returns the surviving rows in their original order and how many were removed.
pub fn remove_duplicates(rows: Vec<DatasetRow>) -> (Vec<DatasetRow>, usize) {
    let before = rows.len();
    let mut seen = FxHashSet::default();
    let unique: Vec<DatasetRow> = rows
        .into_iter()
        .filter(|row| seen.insert(row.clone()))
        .collect();
    let removed = before - unique.len();
    (unique, removed)
}

/// Keep rows with between `min_moves` and `max_moves` stones (inclusive),
/// sorted by stone count. Rows with equal counts keep their relative order.
pub fn filter_sort_by_moves(
    rows: Vec<DatasetRow>,
    min_moves: usize,
    max_moves: usize,
) -> Vec<DatasetRow> {
    let mut kept: Vec<DatasetRow> = rows
        .into_iter()
        .filter(|row| (min_moves..=max_moves).contains(&row.moves_made()))
        .collect();
    kept.sort_by_key(DatasetRow::moves_made);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[i8]) -> DatasetRow {
        DatasetRow(values.to_vec())
    }

    #[test]
    fn test_remove_duplicates_keeps_first() {
        let rows = vec![
            row(&[1, 0, 0, 0, 1]),
            row(&[0, -1, 0, 0, -1]),
            row(&[1, 0, 0, 0, 1]),
            row(&[1, 0, 0, 0, -1]),
        ];
        let (unique, removed) = remove_duplicates(rows);
        assert_eq!(removed, 1);
        assert_eq!(
            unique,
            vec![row(&[1, 0, 0, 0, 1]), row(&[0, -1, 0, 0, -1]), row(&[1, 0, 0, 0, -1])]
        );
    }

    #[test]
    fn test_filter_sort_by_moves() {
        let rows = vec![
            row(&[1, -1, 1, 0, 1]),  // 3 stones
            row(&[1, 0, 0, 0, 1]),   // 1
            row(&[1, -1, 1, -1, -1]), // 4
            row(&[0, -1, 0, 0, -1]), // 1
            row(&[0, 0, 0, 0, 1]),   // 0
        ];
        let kept = filter_sort_by_moves(rows, 1, 3);
        assert_eq!(
            kept,
            vec![row(&[1, 0, 0, 0, 1]), row(&[0, -1, 0, 0, -1]), row(&[1, -1, 1, 0, 1])]
        );
    }
}
