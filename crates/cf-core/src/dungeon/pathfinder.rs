//! Neighbor offset tables over the flat cell grid
//!
//! Offsets depend on the level width, so each table is built per level.
//! Adding an offset to a cell index steps to the neighboring cell; callers
//! keep the source cell far enough from the grid edge that the step cannot
//! wrap.

/// Offsets of the 4 orthogonal neighbors
pub fn neighbours4(width: usize) -> [isize; 4] {
    let w = width as isize;
    [-w, -1, 1, w]
}

/// Offsets of the 8 surrounding cells
pub fn neighbours8(width: usize) -> [isize; 8] {
    let w = width as isize;
    [-w - 1, -w, -w + 1, -1, 1, w - 1, w, w + 1]
}

/// Offsets of the 8 surrounding cells plus the cell itself
pub fn neighbours9(width: usize) -> [isize; 9] {
    let w = width as isize;
    [-w - 1, -w, -w + 1, -1, 0, 1, w - 1, w, w + 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours8_ring() {
        // On a width-10 grid, cell 55 is surrounded by these cells
        let ring: Vec<usize> = neighbours8(10)
            .iter()
            .map(|off| (55isize + off) as usize)
            .collect();
        assert_eq!(ring, vec![44, 45, 46, 54, 56, 64, 65, 66]);
    }

    #[test]
    fn test_tables_are_distinct_offsets() {
        for table in [neighbours8(7).to_vec(), neighbours9(7).to_vec()] {
            let mut sorted = table.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), table.len());
        }
        assert!(neighbours4(7).contains(&-7));
        assert!(neighbours9(7).contains(&0));
        assert!(!neighbours8(7).contains(&0));
    }
}
