//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! row/column grid, where row 0 is rank 8 and column 0 is file a. Used by
//! tests and diagnostics.

use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Ok(Square::new(row, col))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if !square.on_board() {
        return Err(format!("Square out of bounds: {square:?}"));
    }

    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'8' - square.row as u8);
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_round_trip() {
        assert_eq!(algebraic_to_square("a8").unwrap(), Square::new(0, 0));
        assert_eq!(algebraic_to_square("h1").unwrap(), Square::new(7, 7));
        assert_eq!(square_to_algebraic(Square::new(0, 0)).unwrap(), "a8");
        assert_eq!(square_to_algebraic(Square::new(7, 7)).unwrap(), "h1");
    }

    #[test]
    fn invalid_coordinates_are_rejected() {
        assert!(algebraic_to_square("i4").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e44").is_err());
        assert!(square_to_algebraic(Square::new(-1, 0)).is_err());
    }
}
