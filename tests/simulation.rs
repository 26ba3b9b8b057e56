use game_of_life::game_of_life::presets;
use game_of_life::utils::Viewport;
use game_of_life::{GameOfLifeRules, Grid, Position, Universe};

fn glider() -> Grid {
    Grid::from_coords(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
}

#[test]
fn neighbour_count_matches_moore_neighbourhood() {
    let grid = Grid::from_coords(&[(0, 0), (0, 1), (1, 0), (5, 5), (-1, -1), (2, 2)]);

    for row in -3..=7 {
        for col in -3..=7 {
            let expected = (-1..=1)
                .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
                .filter(|&offset| offset != (0, 0))
                .filter(|&(dr, dc)| grid.is_alive(Position::new(row + dr, col + dc)))
                .count() as u8;
            assert_eq!(grid.live_neighbor_count(Position::new(row, col)), expected);
        }
    }
}

#[test]
fn stepping_is_deterministic() {
    let r_pentomino = presets::presets()[4].grid().unwrap();
    let a = GameOfLifeRules::evolve_generations(r_pentomino.clone(), 50);
    let b = GameOfLifeRules::evolve_generations(r_pentomino, 50);
    assert_eq!(a, b);
    assert!(!a.is_empty());
}

#[test]
fn step_leaves_input_untouched() {
    let grid = glider();
    let copy = grid.clone();
    let _ = GameOfLifeRules::evolve(&grid);
    assert_eq!(grid, copy);
}

#[test]
fn empty_grid_stays_empty() {
    let mut universe = Universe::new(Grid::empty());
    universe.advance(3);
    assert!(universe.is_extinct());
    assert_eq!(universe.generation(), 3);
}

#[test]
fn block_is_still_life() {
    let block = Grid::from_coords(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(GameOfLifeRules::evolve(&block), block);
}

#[test]
fn blinker_oscillates() {
    let horizontal = Grid::from_coords(&[(0, 0), (0, 1), (0, 2)]);
    let vertical = Grid::from_coords(&[(-1, 1), (0, 1), (1, 1)]);

    let once = GameOfLifeRules::evolve(&horizontal);
    assert_eq!(once, vertical);
    assert_eq!(GameOfLifeRules::evolve(&once), horizontal);
}

#[test]
fn glider_translates_diagonally() {
    let start = glider();
    let mut universe = Universe::new(start.clone());
    universe.advance(4);

    assert_eq!(universe.grid(), &start.translated(1, 1));
    assert_eq!(universe.generation(), 4);
}

#[test]
fn glider_crosses_into_negative_coordinates() {
    // Flipped glider heading up and to the left, past the origin
    let start = Grid::from_coords(&[(0, 0), (0, 1), (0, 2), (1, 0), (2, 1)]);
    let after = GameOfLifeRules::evolve_generations(start.clone(), 40);

    assert_eq!(after, start.translated(-10, -10));
    assert_eq!(after.population(), 5);
}

#[test]
fn birth_needs_exactly_three_neighbours() {
    let target = Position::new(0, 0);

    let two = Grid::from_coords(&[(-1, -1), (-1, 1)]);
    assert!(!GameOfLifeRules::evolve(&two).is_alive(target));

    let three = Grid::from_coords(&[(-1, -1), (-1, 1), (1, 0)]);
    assert_eq!(three.live_neighbor_count(target), 3);
    assert!(GameOfLifeRules::evolve(&three).is_alive(target));

    let four = Grid::from_coords(&[(-1, -1), (-1, 1), (1, -1), (1, 1)]);
    assert_eq!(four.live_neighbor_count(target), 4);
    assert!(!GameOfLifeRules::evolve(&four).is_alive(target));
}

#[test]
fn cells_outside_viewport_keep_evolving() {
    let viewport = Viewport::default();
    // Glider starting at the bottom-right corner of the view, moving out of it
    let start = glider().translated(viewport.height as i64 - 3, viewport.width as i64 - 3);

    let mut universe = Universe::new(start.clone());
    universe.advance(8);

    assert_eq!(universe.population(), 5);
    assert_eq!(universe.grid(), &start.translated(2, 2));
    assert!(universe.grid().live_positions().any(|p| !viewport.contains(p)));
}
