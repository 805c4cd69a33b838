//! Capture rules: which moves are legal and which discs they flip.
//!
//! All functions are pure and take boards by value.

use crate::bitboard::Bitboard;
use crate::{Board, Cell, Direction, GameError, Location, LocationList, Player, DIRECTIONS, NUM_SPACES};
use arrayvec::ArrayVec;

/// Discs captured along one direction, nearest to the origin first.
/// Sized for the longest walk from any origin: seven squares to the far edge.
pub type Captures = ArrayVec<[Location; 7]>;

/// The opponent discs `player` would flip along `direction` by playing at `origin`.
///
/// The walk starts next to `origin` and continues over the opponent's discs. They
/// are captured only if the walk ends on one of the player's own discs; running
/// off the board or into an empty square captures nothing.
pub fn captured_in_direction(
    board: Board,
    origin: Location,
    player: Player,
    direction: Direction,
) -> Captures {
    let own = Cell::from(player);
    let opponent = Cell::from(!player);
    let mut line = Captures::new();
    let mut cursor = origin.step(direction);

    while let Some(loc) = cursor {
        let cell = board.cell(loc);
        if cell == own {
            return line;
        }
        if cell != opponent {
            break;
        }
        line.push(loc);
        cursor = loc.step(direction);
    }

    Captures::new()
}

/// Every disc flipped by `player` playing at `origin`, over all eight directions.
pub fn captures(board: Board, player: Player, origin: Location) -> Bitboard {
    DIRECTIONS
        .iter()
        .flat_map(|&direction| captured_in_direction(board, origin, player, direction))
        .fold(Bitboard::default(), |mask, loc| mask | loc.to_bitboard())
}

/// Whether `origin` is empty and playing there captures at least one disc.
pub fn is_legal_move(board: Board, player: Player, origin: Location) -> bool {
    board.cell(origin) == Cell::Empty
        && DIRECTIONS
            .iter()
            .any(|&direction| !captured_in_direction(board, origin, player, direction).is_empty())
}

/// All legal moves for `player`, found by scanning the squares in row-major order.
pub fn legal_moves(board: Board, player: Player) -> LocationList {
    (0..NUM_SPACES as u8)
        .map(Location::from_index)
        .filter(|&loc| is_legal_move(board, player, loc))
        .fold(Bitboard::default(), |mask, loc| mask | loc.to_bitboard())
        .into()
}

/// Play a disc for `player` at `origin`, flipping every captured disc.
/// Fails with [`GameError::InvalidMove`] if the move is not legal.
pub fn apply_move(board: Board, player: Player, origin: Location) -> Result<Board, GameError> {
    if !is_legal_move(board, player, origin) {
        return Err(GameError::InvalidMove {
            player,
            location: origin,
        });
    }
    Ok(apply_move_unchecked(board, player, origin))
}

/// Play a disc without checking that the move is legal.
/// Results in an inconsistent position if `origin` is occupied or captures nothing.
#[inline]
pub fn apply_move_unchecked(board: Board, player: Player, origin: Location) -> Board {
    let flipped = captures(board, player, origin);
    board.with_discs(flipped | origin.to_bitboard(), player)
}

/// Whether the game is over: neither player has a legal move.
///
/// A full board always satisfies this, but so do positions where empty squares
/// remain and no capture is possible for either side.
pub fn is_terminal(board: Board) -> bool {
    legal_moves(board, Player::Black).is_empty() && legal_moves(board, Player::White).is_empty()
}
