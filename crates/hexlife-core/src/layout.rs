//! Plain-text board layouts.
//!
//! One row per line, `X` for a live cell, anything else for a dead one. The
//! number of lines fixes the board size. Rows whose length differs from that
//! size are reported as [`LayoutWarning`]s and normalised: short rows are
//! padded with dead cells, long rows are truncated.

use crate::error::{Error, Result};
use crate::types::CellState;
use std::fmt;
use std::path::Path;
use tracing::warn;

/// A row whose length disagrees with the row count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutWarning {
    /// 1-based row number
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} does not have the expected number ({}) of cells (found {})",
            self.row, self.expected, self.found
        )
    }
}

/// A parsed square board in row-major order.
///
/// Only built by parsing, so `cells` always holds `size * size` states and
/// `size` is at least 1.
#[derive(Debug, Clone)]
pub struct Layout {
    size: usize,
    cells: Vec<CellState>,
    warnings: Vec<LayoutWarning>,
}

impl Layout {
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<CellState>> = text
            .lines()
            .map(|line| line.chars().map(CellState::from_symbol).collect())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(Error::InvalidConfiguration(
                "layout contains no rows".to_string(),
            ));
        }

        let mut cells = Vec::with_capacity(size * size);
        let mut warnings = Vec::new();

        for (idx, mut row) in rows.into_iter().enumerate() {
            if row.len() != size {
                let warning = LayoutWarning {
                    row: idx + 1,
                    expected: size,
                    found: row.len(),
                };
                warn!(row = warning.row, expected = size, found = warning.found, "{}", warning);
                warnings.push(warning);
            }
            row.resize(size, CellState::Dead);
            cells.extend(row);
        }

        Ok(Self {
            size,
            cells,
            warnings,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfiguration(format!(
                "cannot read layout file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&text)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    /// Split into size, row-major cells and warnings
    pub fn into_parts(self) -> (usize, Vec<CellState>, Vec<LayoutWarning>) {
        (self.size, self.cells, self.warnings)
    }

    pub fn is_well_formed(&self) -> bool {
        self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellState::{Alive, Dead};

    #[test]
    fn test_parse_square_layout() {
        let layout = Layout::parse("X..\n.X.\n..X\n").unwrap();
        assert_eq!(layout.size, 3);
        assert!(layout.is_well_formed());
        assert_eq!(
            layout.cells,
            vec![Alive, Dead, Dead, Dead, Alive, Dead, Dead, Dead, Alive]
        );
    }

    #[test]
    fn test_parse_strips_crlf() {
        let layout = Layout::parse("X.\r\n.X\r\n").unwrap();
        assert_eq!(layout.size, 2);
        assert!(layout.is_well_formed());
        assert_eq!(layout.cells, vec![Alive, Dead, Dead, Alive]);
    }

    #[test]
    fn test_other_symbols_are_dead() {
        let layout = Layout::parse("Xo\n#X").unwrap();
        assert_eq!(layout.cells, vec![Alive, Dead, Dead, Alive]);
    }

    #[test]
    fn test_inconsistent_rows_are_normalised() {
        let layout = Layout::parse("X\nXXXX\n.X.").unwrap();
        assert_eq!(layout.size, 3);
        assert_eq!(
            layout.warnings,
            vec![
                LayoutWarning { row: 1, expected: 3, found: 1 },
                LayoutWarning { row: 2, expected: 3, found: 4 },
            ]
        );
        assert_eq!(
            layout.cells,
            vec![Alive, Dead, Dead, Alive, Alive, Alive, Dead, Alive, Dead]
        );
    }

    #[test]
    fn test_parts_always_square() {
        for text in ["X", "X\n\n\n", "XXXXXX\n.", ".X.\nX\n.X.X.X\n"] {
            let layout = Layout::parse(text).unwrap();
            let size = layout.size();
            assert!(size >= 1);
            assert_eq!(layout.cells().len(), size * size);
            let (parts_size, cells, warnings) = layout.into_parts();
            assert_eq!(parts_size, size);
            assert_eq!(cells.len(), size * size);
            assert!(warnings.iter().all(|w| w.expected == size));
        }
    }

    #[test]
    fn test_empty_layout_rejected() {
        assert!(matches!(
            Layout::parse(""),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_unreadable_file() {
        let result = Layout::from_file(Path::new("/nonexistent/board.txt"));
        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_warning_message() {
        let warning = LayoutWarning { row: 2, expected: 5, found: 4 };
        assert_eq!(
            warning.to_string(),
            "row 2 does not have the expected number (5) of cells (found 4)"
        );
    }
}
