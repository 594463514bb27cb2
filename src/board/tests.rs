use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_resource_label() {
    assert_eq!(Resource::Temple.label(), "Temple");
    assert_eq!(Resource::Market.label(), "Market");
    assert_eq!(Resource::Farm.label(), "Farm");
    assert_eq!(Resource::Settlement.label(), "Settlement");
    assert_eq!(Resource::Treasure.label(), "Treasure");
}

#[test]
fn test_resource_all_is_complete() {
    assert_eq!(Resource::ALL.len(), 5);
    // No duplicates in the draw pool
    for (i, a) in Resource::ALL.iter().enumerate() {
        for b in &Resource::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_resource_random_stays_in_pool() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let res = Resource::random(&mut rng);
        assert!(Resource::ALL.contains(&res));
    }
}

#[test]
fn test_tile_has_treasure() {
    let with = Tile::new(vec![Resource::Farm, Resource::Treasure]);
    assert!(with.has_treasure());

    let without = Tile::new(vec![Resource::Temple, Resource::Market, Resource::Farm]);
    assert!(!without.has_treasure());
}

#[test]
fn test_tile_display() {
    let tile = Tile::new(vec![Resource::Temple, Resource::Farm]);
    assert_eq!(tile.to_string(), "Temple, Farm");

    let single = Tile::new(vec![Resource::Treasure]);
    assert_eq!(single.to_string(), "Treasure");
}

#[test]
fn test_generate_dimensions() {
    let board = Board::generate(3, 5).unwrap();
    assert_eq!(board.rows(), 3);
    assert_eq!(board.cols(), 5);
    assert_eq!(board.tile_count(), 15);
}

#[test]
fn test_generate_tile_contents() {
    let board = Board::generate(6, 6).unwrap();
    for tile in board.iter() {
        let resources = tile.resources();
        assert!((1..=3).contains(&resources.len()));
        for res in resources {
            assert!(Resource::ALL.contains(res));
        }
    }
}

#[test]
fn test_generate_single_tile_board() {
    let board = Board::generate(1, 1).unwrap();
    assert_eq!(board.tile_count(), 1);
    assert!(!board.get(0, 0).resources().is_empty());
}

#[test]
fn test_generate_rejects_zero_dimensions() {
    assert_eq!(
        Board::generate(0, 4),
        Err(BoardError::InvalidDimensions { rows: 0, cols: 4 })
    );
    assert_eq!(
        Board::generate(4, 0),
        Err(BoardError::InvalidDimensions { rows: 4, cols: 0 })
    );
    assert_eq!(
        Board::generate(0, 0),
        Err(BoardError::InvalidDimensions { rows: 0, cols: 0 })
    );
}

#[test]
fn test_generate_seeded_determinism() {
    let mut rng1 = StdRng::seed_from_u64(42);
    let mut rng2 = StdRng::seed_from_u64(42);

    let board1 = Board::generate_with(5, 5, &mut rng1).unwrap();
    let board2 = Board::generate_with(5, 5, &mut rng2).unwrap();

    assert_eq!(board1, board2);
}

#[test]
fn test_generate_different_seeds_differ() {
    // 25 cells of 1-3 draws from 5 kinds; a collision would be
    // astronomically unlikely
    let mut rng1 = StdRng::seed_from_u64(1);
    let mut rng2 = StdRng::seed_from_u64(2);

    let board1 = Board::generate_with(5, 5, &mut rng1).unwrap();
    let board2 = Board::generate_with(5, 5, &mut rng2).unwrap();

    assert_ne!(board1, board2);
}

#[test]
fn test_board_get_row_major() {
    let mut rng = StdRng::seed_from_u64(9);
    let board = Board::generate_with(2, 3, &mut rng).unwrap();

    // get(row, col) walks the same order as iter()
    let mut it = board.iter();
    for row in 0..2 {
        for col in 0..3 {
            assert_eq!(Some(board.get(row, col)), it.next());
        }
    }
    assert_eq!(it.next(), None);
}

#[test]
fn test_default_board_end_to_end() {
    let board = Board::generate(BOARD_ROWS, BOARD_COLS).unwrap();
    assert_eq!(board.rows(), 4);
    assert_eq!(board.cols(), 4);
    assert_eq!(board.iter().count(), 16);
}

#[test]
fn test_treasure_count_matches_tiles() {
    let mut rng = StdRng::seed_from_u64(123);
    let board = Board::generate_with(8, 8, &mut rng).unwrap();

    let expected = board.iter().filter(|t| t.has_treasure()).count();
    assert_eq!(board.treasure_count(), expected);
}
