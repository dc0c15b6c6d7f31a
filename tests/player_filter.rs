mod common;

use fpl_form::model::Position;
use fpl_form::player_filter::{select_by_position, select_position};

#[test]
fn selects_only_matching_players_in_source_order() {
    let dataset = common::load_dataset();
    let mids = select_by_position(&dataset.players, 3);
    let ids: Vec<u32> = mids.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![10, 20, 11, 30, 40]);
}

#[test]
fn every_position_partitions_the_player_list() {
    let dataset = common::load_dataset();
    let mut seen = Vec::new();
    for position in Position::ALL {
        let selected = select_position(&dataset.players, position);
        assert!(selected.iter().all(|p| p.element_type == position.code()));
        let expected = dataset
            .players
            .iter()
            .filter(|p| p.element_type == position.code())
            .count();
        assert_eq!(selected.len(), expected);
        seen.extend(selected.iter().map(|p| p.id));
    }
    seen.sort_unstable();
    let mut all: Vec<u32> = dataset.players.iter().map(|p| p.id).collect();
    all.sort_unstable();
    assert_eq!(seen, all);
}

#[test]
fn unknown_code_yields_empty_selection() {
    let dataset = common::load_dataset();
    assert!(select_by_position(&dataset.players, 0).is_empty());
    assert!(select_by_position(&dataset.players, 5).is_empty());
    assert!(select_position(&dataset.players, Position::Defender).is_empty());
}
