//! File I/O for seed patterns and simulation snapshots
//!
//! Two text formats are understood:
//! - plaintext cell grids: one row per line, `1`, `O` or `#` for live cells and
//!   `0` or `.` for dead ones, lines starting with `!` are comments;
//! - coordinate lists: one `row,col` pair per line, `#` starts a comment.

use super::{Grid, Position, Snapshot};
use crate::error::SeedError;
use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

/// Load a seed pattern from a file, detecting its format
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    let grid = parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))?;
    debug!(
        "loaded {} live cells from {}",
        grid.population(),
        path.as_ref().display()
    );
    Ok(grid)
}

/// Parse either format; any content line holding a comma selects the coordinate list
pub fn parse_pattern(content: &str) -> Result<Grid, SeedError> {
    let is_coordinate_list = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with('!'))
        .any(|line| line.contains(','));

    if is_coordinate_list {
        parse_coordinate_list(content)
    } else {
        parse_grid_from_string(content)
    }
}

/// Parse a plaintext cell grid; row 0 is the first non-comment line.
/// Short rows are padded with dead cells.
pub fn parse_grid_from_string(content: &str) -> Result<Grid, SeedError> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.starts_with('!'))
        .collect();

    // Blank lines inside a pattern are empty rows, but leading and trailing ones are noise
    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(SeedError::Empty),
    };

    let mut cells = Vec::new();
    for (row_idx, line) in lines[first..=last].iter().enumerate() {
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '1' | 'O' | '#' => cells.push(Position::new(row_idx as i64, col_idx as i64)),
                '0' | '.' | ' ' => {}
                _ => return Err(SeedError::InvalidCell { ch, row: row_idx, col: col_idx }),
            }
        }
    }

    Ok(Grid::seed(cells))
}

/// Parse `row,col` lines; a repeated coordinate is rejected
pub fn parse_coordinate_list(content: &str) -> Result<Grid, SeedError> {
    let mut positions = Vec::new();

    for (line_idx, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let invalid = || SeedError::InvalidCoordinate {
            line: line_idx + 1,
            text: line.to_string(),
        };

        let (row, col) = line.split_once(',').ok_or_else(invalid)?;
        let row: i64 = row.trim().parse().map_err(|_| invalid())?;
        let col: i64 = col.trim().parse().map_err(|_| invalid())?;
        positions.push(Position::new(row, col));
    }

    if positions.is_empty() {
        return Err(SeedError::Empty);
    }

    Grid::try_seed(positions)
}

/// Convert a grid to plaintext covering its bounding box.
/// The origin is lost; use the coordinate list to keep absolute positions.
pub fn grid_to_string(grid: &Grid) -> String {
    let Some(bounds) = grid.bounding_box() else {
        return String::new();
    };

    let mut result = String::new();
    for row in bounds.min_row..=bounds.max_row {
        for col in bounds.min_col..=bounds.max_col {
            result.push(if grid.is_alive(Position::new(row, col)) { 'O' } else { '.' });
        }
        result.push('\n');
    }
    result
}

/// Convert a grid to a coordinate list in row-major order
pub fn grid_to_coordinate_list(grid: &Grid) -> String {
    grid.sorted_positions()
        .into_iter()
        .map(|p| format!("{},{}\n", p.row, p.col))
        .collect()
}

/// Save a grid as a coordinate list
pub fn save_pattern_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    write_creating_dirs(path.as_ref(), &grid_to_coordinate_list(grid))
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))
}

/// Save a snapshot as pretty JSON
pub fn save_snapshot_json<P: AsRef<Path>>(snapshot: &Snapshot, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
    write_creating_dirs(path.as_ref(), &json)
        .with_context(|| format!("Failed to write snapshot to file: {}", path.as_ref().display()))
}

fn write_creating_dirs(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Create example pattern files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("glider.txt", "! Glider\n.O.\n..O\nOOO\n"),
        ("blinker.txt", "! Blinker\nOOO\n"),
        ("block.txt", "! Block\nOO\nOO\n"),
        ("beacon.txt", "# Beacon\n0,0\n0,1\n1,0\n1,1\n2,2\n2,3\n3,2\n3,3\n"),
    ];

    for (name, content) in examples {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Universe;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid_from_string() {
        let grid = parse_grid_from_string("010\n101\n010\n").unwrap();

        assert_eq!(grid.population(), 4);
        assert!(grid.is_alive(Position::new(0, 1)));
        assert!(grid.is_alive(Position::new(1, 0)));
        assert!(grid.is_alive(Position::new(1, 2)));
        assert!(grid.is_alive(Position::new(2, 1)));
    }

    #[test]
    fn test_parse_plaintext_with_comments_and_ragged_rows() {
        let grid = parse_grid_from_string("!Name: glider\n\n.O\n..O\nOOO\n\n").unwrap();
        assert_eq!(grid, Grid::from_coords(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]));
    }

    #[test]
    fn test_parse_coordinate_list() {
        let grid = parse_coordinate_list("# blinker\n 0, -1\n0,0 # middle\n\n0,1\n").unwrap();
        assert_eq!(grid, Grid::from_coords(&[(0, -1), (0, 0), (0, 1)]));
    }

    #[test]
    fn test_malformed_coordinates() {
        let err = parse_coordinate_list("0,0\n1,x\n").unwrap_err();
        assert_eq!(err, SeedError::InvalidCoordinate { line: 2, text: "1,x".to_string() });

        let err = parse_coordinate_list("0,0\n1.5,2\n").unwrap_err();
        assert!(matches!(err, SeedError::InvalidCoordinate { line: 2, .. }));

        let err = parse_coordinate_list("42\n").unwrap_err();
        assert!(matches!(err, SeedError::InvalidCoordinate { line: 1, .. }));

        let err = parse_coordinate_list("3,4\n3, 4\n").unwrap_err();
        assert_eq!(err, SeedError::DuplicatePosition(Position::new(3, 4)));

        assert_eq!(parse_coordinate_list("# nothing\n").unwrap_err(), SeedError::Empty);
    }

    #[test]
    fn test_invalid_plaintext() {
        let err = parse_grid_from_string("010\n1X1\n010\n").unwrap_err();
        assert_eq!(err, SeedError::InvalidCell { ch: 'X', row: 1, col: 1 });

        assert_eq!(parse_grid_from_string("").unwrap_err(), SeedError::Empty);
        assert_eq!(parse_grid_from_string("!comment only\n").unwrap_err(), SeedError::Empty);
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(parse_pattern("OO\nOO\n").unwrap().population(), 4);
        assert_eq!(parse_pattern("! a,b\nOO\n").unwrap().population(), 2);
        assert_eq!(parse_pattern("# block\n0,0\n0,1\n").unwrap().population(), 2);
    }

    #[test]
    fn test_grid_to_string() {
        let grid = Grid::from_coords(&[(-3, 5), (-2, 6), (-1, 4), (-1, 5), (-1, 6)]);
        assert_eq!(grid_to_string(&grid), ".O.\n..O\nOOO\n");
        assert_eq!(grid_to_string(&Grid::empty()), "");
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/pattern.txt");

        let original = Grid::from_coords(&[(-7, 2), (0, 0), (12, -40)]);
        save_pattern_to_file(&original, &file_path).unwrap();

        let loaded = load_pattern_from_file(&file_path).unwrap();
        assert_eq!(original, loaded);

        assert!(load_pattern_from_file(temp_dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_snapshot_json() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("snapshot.json");

        let universe = Universe::new(Grid::from_coords(&[(0, 0), (0, 1)]));
        save_snapshot_json(&universe.snapshot(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["generation"], 0);
        assert_eq!(value["population"], 2);
        assert_eq!(value["cells"][1]["col"], 1);
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt"] {
            assert!(temp_dir.path().join(name).exists());
        }

        let glider = load_pattern_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.population(), 5);

        let beacon = load_pattern_from_file(temp_dir.path().join("beacon.txt")).unwrap();
        assert_eq!(beacon.population(), 8);
    }
}
