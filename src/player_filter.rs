use crate::model::{Player, Position};

/// Players whose `element_type` equals `code`, in source order.
/// Codes outside 1-4 simply match nothing.
pub fn select_by_position(players: &[Player], code: u8) -> Vec<&Player> {
    players.iter().filter(|p| p.element_type == code).collect()
}

pub fn select_position(players: &[Player], position: Position) -> Vec<&Player> {
    select_by_position(players, position.code())
}
