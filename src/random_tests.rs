use crate::Grid;
use crate::difficulty::Difficulty;
use crate::generator::Generator;
use crate::solver::{BacktrackingSolver, Solvability};

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

const ITERATIONS_PER_RUN: u64 = 20;

fn seeded_generator(seed: u64) -> Generator<ChaCha8Rng> {
    Generator::new(ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn generated_grids_are_solved() {
    for seed in 0..ITERATIONS_PER_RUN {
        let grid = seeded_generator(seed).generate();

        assert!(grid.is_solved(),
            "Grid generated with seed {} is not solved.", seed);
    }
}

#[test]
fn generated_grids_round_trip_through_code() {
    for seed in 0..ITERATIONS_PER_RUN {
        let grid = seeded_generator(seed).generate();

        assert_eq!(grid, Grid::parse(&grid.to_code()).unwrap());
    }
}

#[test]
fn masked_puzzles_are_consistent_with_their_solution() {
    for seed in 0..ITERATIONS_PER_RUN {
        let mut grid = seeded_generator(seed).generate();
        grid.set_difficulty_with(Difficulty::Medium,
            ChaCha8Rng::seed_from_u64(seed)).unwrap();

        // The player sees a subset of the true solution.
        for (cell, &displayed) in
                grid.cells().iter().zip(grid.to_displayed_values().iter()) {
            if displayed != 0 {
                assert_eq!(cell.value(), displayed);
            }
        }
    }
}

#[test]
fn masked_puzzles_are_solvable_from_the_visible_cells() {
    for seed in 0..ITERATIONS_PER_RUN {
        let mut grid = seeded_generator(seed).generate();
        grid.set_difficulty_with(Difficulty::Easy,
            ChaCha8Rng::seed_from_u64(seed)).unwrap();

        let puzzle = Grid::from_values(&grid.to_displayed_values()).unwrap();
        let solution = BacktrackingSolver.solve(&puzzle).unwrap();

        assert!(solution.is_solved());

        // Every clue of the puzzle is preserved in the found solution. The
        // solution need not be the generated grid, since the visible cells
        // may admit more than one completion.
        for (index, &value) in puzzle.to_values().iter().enumerate() {
            if value != 0 {
                assert_eq!(value, solution.to_values()[index]);
            }
        }
    }
}

#[test]
fn full_grids_with_one_cleared_cell_are_uniquely_solvable() {
    for seed in 0..ITERATIONS_PER_RUN {
        let grid = seeded_generator(seed).generate();
        let cleared_index = (seed * 4 % 81) as usize;
        let expected_value = grid.get(cleared_index).unwrap().value();

        let mut puzzle = grid.clone();
        puzzle.clear(cleared_index).unwrap();

        match BacktrackingSolver.assess(&puzzle) {
            Solvability::Unique(solution) => {
                assert_eq!(grid, solution);
                assert_eq!(expected_value,
                    solution.get(cleared_index).unwrap().value());
            },
            other => panic!(
                "Grid with one cleared cell not uniquely solvable: {:?}",
                other)
        }
    }
}
