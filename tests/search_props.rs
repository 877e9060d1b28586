use missionaries::{MoveSet, Puzzle, State};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any path the solver returns is a legal, move-consistent walk ending at the goal.
    #[test]
    fn solutions_verify(m in 0i32..8, c in 0i32..8, capacity in 1u32..5) {
        let puzzle = Puzzle::new(m, c, MoveSet::for_capacity(capacity).unwrap()).unwrap();
        if let Some(path) = puzzle.solve() {
            prop_assert!(puzzle.verify_path(&path));
            prop_assert!(path.iter().all(|s| puzzle.is_valid(s)));
            if m + c > 0 {
                prop_assert_eq!(path.last().copied(), Some(State::goal()));
            }
        }
    }

    /// Every successor is legal and lands on the other bank.
    #[test]
    fn successors_are_legal(m in 0i32..6, c in 0i32..6, sm in 0i32..6, sc in 0i32..6, flag in 0u8..2) {
        let puzzle = Puzzle::classic(m, c).unwrap();
        let state = State::from_triple(sm, sc, flag);
        for next in puzzle.successors(&state) {
            prop_assert!(puzzle.is_valid(&next));
            prop_assert_ne!(next.boat, state.boat);
        }
    }

    /// No legal walk is shorter than the one found: a path of fewer crossings
    /// would have been dequeued first.
    #[test]
    fn path_length_is_bfs_depth(m in 0i32..6, c in 0i32..6) {
        let puzzle = Puzzle::classic(m, c).unwrap();
        let (path, stats) = puzzle.solve_with_stats();
        if let Some(path) = path {
            prop_assert!(stats.expanded > path.len());
            prop_assert_eq!(puzzle.loads(&path).map(|l| l.len()), Some(path.len()));
        }
    }

    /// Legality is symmetric under swapping which bank is called "start".
    #[test]
    fn legality_mirrors(m in 0i32..6, c in 0i32..6, sm in -2i32..8, sc in -2i32..8, flag in 0u8..2) {
        let here = State::from_triple(sm, sc, flag);
        let mirrored = State::from_triple(m - sm, c - sc, 1 - flag);
        prop_assert_eq!(here.is_valid(m, c), mirrored.is_valid(m, c));
    }
}
