use super::*;
use crate::domain::config::{MAX_COLUMNS, MAX_ROWS};
use crate::domain::{GridPos, ItemMeta};

fn unit_slots(n: u32) -> Vec<Slot> {
    (0..n).map(|i| Slot::with_item(i, 1, 1)).collect()
}

fn at(result: &PackResult, slot: SlotIndex) -> (u32, u32) {
    let p = result.placement(slot).expect("slot should be placed");
    (p.col, p.row)
}

fn assert_no_overlap(placements: &[Placement]) {
    for (i, a) in placements.iter().enumerate() {
        for b in &placements[i + 1..] {
            assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
        }
    }
}

#[test]
fn unit_items_fill_rows_in_scan_order() {
    let result = pack(&unit_slots(23), 5).unwrap();

    for (i, p) in result.placements.iter().enumerate() {
        let i = i as u32;
        assert_eq!((p.col, p.row), (i % 5, i / 5));
        assert_eq!((p.w, p.h), (1, 1));
    }
    assert_eq!(result.rows, 5);
}

#[test]
fn mixed_footprints_take_first_free_rectangle() {
    // 1x1, 1x1, 2x2, 1x1 on a 10-wide grid
    let slots = vec![
        Slot::with_item(1, 1, 1),
        Slot::with_item(2, 1, 1),
        Slot::with_item(3, 2, 2),
        Slot::with_item(4, 1, 1),
    ];
    let result = pack(&slots, 10).unwrap();

    assert_eq!(at(&result, 1), (0, 0));
    assert_eq!(at(&result, 2), (1, 0));
    assert_eq!(at(&result, 3), (2, 0));
    assert_eq!(at(&result, 4), (4, 0));
    assert_eq!(result.rows, 4);
}

#[test]
fn small_item_backfills_gap_left_by_wide_item() {
    let slots = vec![
        Slot::with_item(0, 2, 1),
        Slot::with_item(1, 2, 1),
        Slot::with_item(2, 1, 1),
    ];
    let result = pack(&slots, 3).unwrap();

    assert_eq!(at(&result, 0), (0, 0));
    assert_eq!(at(&result, 1), (0, 1));
    assert_eq!(at(&result, 2), (2, 0));
}

#[test]
fn wide_item_skips_rows_blocked_by_tall_item() {
    let slots = vec![
        Slot::with_item(0, 1, 1),
        Slot::with_item(1, 1, 3),
        Slot::with_item(2, 2, 1),
    ];
    let result = pack(&slots, 2).unwrap();

    assert_eq!(at(&result, 1), (1, 0));
    assert_eq!(at(&result, 2), (0, 3));
    assert_eq!(result.content_rows(), 4);
    assert_eq!(result.rows, 4);
}

#[test]
fn rows_are_floored_at_minimum() {
    let result = pack(&[], 10).unwrap();
    assert_eq!(result.rows, 4);
    assert!(result.placements.is_empty());

    let result = pack(&unit_slots(3), 10).unwrap();
    assert_eq!(result.content_rows(), 1);
    assert_eq!(result.rows, 4);
}

#[test]
fn min_rows_comes_from_config() {
    let packer = GridPacker::new(GridConfig::with_cols(4).with_min_rows(6)).unwrap();
    let result = packer.pack(&unit_slots(5)).unwrap();
    assert_eq!(result.rows, 6);

    let packer = GridPacker::new(GridConfig::with_cols(4).with_min_rows(0)).unwrap();
    let result = packer.pack(&unit_slots(5)).unwrap();
    assert_eq!(result.rows, 2);
}

#[test]
fn fixed_cells_are_claimed_before_search() {
    // Pinned 1x2 at (5, 2); searches must step around (5,2) and (5,3)
    let mut slots = vec![Slot::with_item(100, 1, 2).at(5, 2)];
    slots.extend(unit_slots(20));
    let result = pack(&slots, 6).unwrap();

    assert_eq!(at(&result, 100), (5, 2));
    assert_eq!(at(&result, 12), (0, 2));
    assert_eq!(at(&result, 16), (4, 2));
    assert_eq!(at(&result, 17), (0, 3));

    for p in result.placements.iter().filter(|p| p.slot != 100) {
        assert!(!p.contains(5, 2));
        assert!(!p.contains(5, 3));
    }
    assert_no_overlap(&result.placements);
}

#[test]
fn fixed_slot_keeps_its_position_with_few_items() {
    let slots = vec![
        Slot::with_item(0, 1, 2).at(5, 2),
        Slot::with_item(1, 1, 1),
        Slot::with_item(2, 1, 1),
        Slot::with_item(3, 1, 1),
    ];
    let result = pack(&slots, 10).unwrap();

    let fixed = result.placement(0).unwrap();
    assert_eq!((fixed.col, fixed.row, fixed.w, fixed.h), (5, 2, 1, 2));
    assert_eq!(at(&result, 1), (0, 0));
    assert_eq!(at(&result, 3), (2, 0));
    assert_eq!(result.stats.fixed_slots(), 1);
    assert_eq!(result.stats.occupied_cells(), 5);
}

#[test]
fn fixed_slot_on_searched_cell_is_a_conflict() {
    // Pinned onto a cell the search already handed out
    let slots = vec![
        Slot::with_item(0, 1, 1),
        Slot::with_item(1, 1, 1).at(0, 0),
        Slot::with_item(2, 1, 1),
    ];
    let result = pack(&slots, 4).unwrap();

    assert_eq!(
        result.conflicts,
        vec![FixedConflict::Overlap { slot: 1, other: 0, col: 0, row: 0 }]
    );
    // Last write wins: both keep their spots
    assert_eq!(at(&result, 0), (0, 0));
    assert_eq!(at(&result, 1), (0, 0));
    assert_eq!(at(&result, 2), (1, 0));
}

#[test]
fn reject_policy_refuses_fixed_slot_on_searched_cell() {
    let config = GridConfig::with_cols(4).with_overlap_policy(OverlapPolicy::Reject);
    let packer = GridPacker::new(config).unwrap();
    let slots = vec![Slot::with_item(0, 1, 1), Slot::with_item(1, 1, 1).at(0, 0)];

    match packer.pack(&slots) {
        Err(PackError::FixedConflicts(conflicts)) => {
            assert_eq!(
                conflicts,
                vec![FixedConflict::Overlap { slot: 1, other: 0, col: 0, row: 0 }]
            );
        }
        other => panic!("expected conflict error, got {:?}", other),
    }
}

#[test]
fn overlap_names_the_latest_owner_of_the_cell() {
    let slots = vec![
        Slot::with_item(0, 2, 1),
        Slot::with_item(1, 1, 1).at(1, 0),
        Slot::with_item(2, 1, 1).at(1, 0),
    ];
    let conflicts = find_fixed_conflicts(&slots, 4).unwrap();
    assert_eq!(
        conflicts,
        vec![
            FixedConflict::Overlap { slot: 1, other: 0, col: 1, row: 0 },
            FixedConflict::Overlap { slot: 2, other: 1, col: 1, row: 0 },
        ]
    );
}

#[test]
fn no_overlaps_for_mixed_inventory() {
    let sizes = [(1, 1), (2, 2), (1, 3), (3, 1), (1, 1), (2, 1), (4, 2), (1, 2), (1, 1), (2, 3)];
    let slots: Vec<Slot> = sizes
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| Slot::with_item(i as u32, w, h))
        .collect();
    let result = pack(&slots, 5).unwrap();

    assert_eq!(result.placements.len(), slots.len());
    assert_no_overlap(&result.placements);
    for p in &result.placements {
        assert!(p.right() <= 5);
    }
    let area: u32 = sizes.iter().map(|(w, h)| w * h).sum();
    assert_eq!(result.stats.occupied_cells(), area);
}

#[test]
fn packing_is_deterministic() {
    let slots = vec![
        Slot::with_item(7, 2, 2),
        Slot::with_item(3, 1, 1),
        Slot::with_item(9, 3, 1).at(1, 4),
        Slot::with_item(1, 1, 2),
        Slot::empty(5),
    ];
    let a = pack(&slots, 6).unwrap();
    let b = pack(&slots, 6).unwrap();
    assert_eq!(a.placements, b.placements);
    assert_eq!(a.rows, b.rows);
}

#[test]
fn empty_slot_packs_as_unit_cell() {
    let slots = vec![Slot::empty(0), Slot::with_item(1, 1, 1)];
    let result = pack(&slots, 3).unwrap();
    assert_eq!(result.placement(0).unwrap().footprint(), Footprint::UNIT);
    assert_eq!(at(&result, 1), (1, 0));
}

#[test]
fn too_wide_item_fails_fast() {
    let slots = vec![Slot::with_item(0, 1, 1), Slot::with_item(4, 11, 1)];
    let err = pack(&slots, 10).unwrap_err();
    assert!(matches!(err, PackError::FootprintTooWide { slot: 4, w: 11, cols: 10 }));
}

#[test]
fn full_width_item_fits() {
    let result = pack(&[Slot::with_item(0, 10, 1)], 10).unwrap();
    assert_eq!(at(&result, 0), (0, 0));
}

#[test]
fn zero_sized_footprint_is_rejected() {
    let slots = vec![Slot { slot: 2, item: Some(ItemMeta::sized(0, 1)), fixed: None }];
    assert!(matches!(pack(&slots, 4), Err(PackError::EmptyFootprint { slot: 2 })));
}

#[test]
fn duplicate_slot_index_is_rejected() {
    let slots = vec![Slot::with_item(3, 1, 1), Slot::with_item(3, 1, 1)];
    assert!(matches!(pack(&slots, 4), Err(PackError::DuplicateSlot { slot: 3 })));
}

#[test]
fn zero_columns_is_rejected() {
    assert!(matches!(pack(&[], 0), Err(PackError::NoColumns)));
}

#[test]
fn huge_fixed_row_is_rejected() {
    let err = pack(&[Slot::with_item(0, 1, 2).at(0, u32::MAX)], 4).unwrap_err();
    assert!(matches!(err, PackError::PositionOutOfRange { slot: 0, col: 0, row: u32::MAX }));

    // Anchor fits but the bottom edge would not
    let err = pack(&[Slot::with_item(1, 1, 2).at(0, MAX_ROWS - 1)], 4).unwrap_err();
    assert!(matches!(err, PackError::PositionOutOfRange { slot: 1, .. }));

    let result = pack(&[Slot::with_item(2, 1, 2).at(0, MAX_ROWS - 2)], 4).unwrap();
    assert_eq!(result.rows, MAX_ROWS);
}

#[test]
fn fixed_column_off_the_grid_is_rejected() {
    let err = pack(&[Slot::with_item(3, 1, 1).at(4, 0)], 4).unwrap_err();
    assert!(matches!(err, PackError::PositionOutOfRange { slot: 3, col: 4, row: 0 }));
}

#[test]
fn footprint_taller_than_row_limit_is_rejected() {
    let err = pack(&[Slot::with_item(5, 1, MAX_ROWS + 1)], 4).unwrap_err();
    assert!(matches!(err, PackError::FootprintTooTall { slot: 5, .. }));
}

#[test]
fn grid_wider_than_column_limit_is_rejected() {
    let err = pack(&[], MAX_COLUMNS + 1).unwrap_err();
    assert!(matches!(err, PackError::TooManyColumns { cols, max: MAX_COLUMNS } if cols == MAX_COLUMNS + 1));
    assert!(find_fixed_conflicts(&[], 0).is_err());
}

#[test]
fn stacked_tall_items_stop_at_row_limit() {
    let slots = vec![Slot::with_item(0, 1, MAX_ROWS), Slot::with_item(1, 1, 1)];
    let err = pack(&slots, 1).unwrap_err();
    match err {
        PackError::TooManyRows { rows, max } => {
            assert_eq!(rows, u64::from(MAX_ROWS) + 1);
            assert_eq!(max, MAX_ROWS);
        }
        other => panic!("expected row limit error, got {:?}", other),
    }
}

#[test]
fn overlapping_fixed_positions_are_reported() {
    let slots = vec![
        Slot::with_item(1, 2, 2).at(0, 0),
        Slot::with_item(2, 1, 1).at(1, 1),
    ];
    let conflicts = find_fixed_conflicts(&slots, 4).unwrap();
    assert_eq!(
        conflicts,
        vec![FixedConflict::Overlap { slot: 2, other: 1, col: 1, row: 1 }]
    );
}

#[test]
fn override_policy_keeps_both_placements() {
    let slots = vec![
        Slot::with_item(1, 2, 2).at(0, 0),
        Slot::with_item(2, 1, 1).at(1, 1),
        Slot::with_item(3, 1, 1),
    ];
    let result = pack(&slots, 4).unwrap();

    assert_eq!(at(&result, 1), (0, 0));
    assert_eq!(at(&result, 2), (1, 1));
    assert_eq!(at(&result, 3), (2, 0));
    assert_eq!(result.conflicts.len(), 1);
    assert_eq!(result.stats.conflicts(), 1);
}

#[test]
fn reject_policy_turns_conflicts_into_error() {
    let config = GridConfig::with_cols(4).with_overlap_policy(OverlapPolicy::Reject);
    let packer = GridPacker::new(config).unwrap();
    let slots = vec![
        Slot::with_item(1, 2, 2).at(0, 0),
        Slot::with_item(2, 1, 1).at(1, 1),
    ];

    match packer.pack(&slots) {
        Err(PackError::FixedConflicts(conflicts)) => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].slot(), 2);
        }
        other => panic!("expected conflict error, got {:?}", other),
    }
}

#[test]
fn reject_policy_accepts_clean_fixed_positions() {
    let config = GridConfig::with_cols(4).with_overlap_policy(OverlapPolicy::Reject);
    let packer = GridPacker::new(config).unwrap();
    let slots = vec![
        Slot::with_item(1, 2, 2).at(0, 0),
        Slot::with_item(2, 1, 1).at(2, 1),
    ];
    let result = packer.pack(&slots).unwrap();
    assert!(result.conflicts.is_empty());
}

#[test]
fn fixed_position_past_right_edge_is_reported_and_kept() {
    let slots = vec![Slot::with_item(8, 2, 1).at(3, 0), Slot::with_item(9, 1, 1)];
    let result = pack(&slots, 4).unwrap();

    assert_eq!(
        result.conflicts,
        vec![FixedConflict::OutOfBounds { slot: 8, col: 3, w: 2, cols: 4 }]
    );
    let p = result.placement(8).unwrap();
    assert_eq!((p.col, p.row, p.w), (3, 0, 2));
    assert_eq!(at(&result, 9), (0, 0));
}

#[test]
fn conflict_list_names_every_conflict() {
    let err = PackError::FixedConflicts(vec![
        FixedConflict::Overlap { slot: 2, other: 1, col: 1, row: 1 },
        FixedConflict::OutOfBounds { slot: 3, col: 9, w: 2, cols: 10 },
    ]);
    let msg = err.to_string();
    assert!(msg.starts_with("2 fixed-position conflict(s)"));
    assert!(msg.contains("slot 2 overlaps slot 1 at (1, 1)"));
    assert!(msg.contains("slot 3 at column 9"));
}

#[test]
fn search_candidate_count_is_recorded() {
    let result = pack(&unit_slots(3), 10).unwrap();
    // 1 candidate for the first slot (row 0 untouched), then 2 and 3
    assert_eq!(result.stats.candidates(), 6);
    assert_eq!(result.stats.slots(), 3);
    assert_eq!(result.stats.rows(), 4);
}

#[test]
fn grid_pos_round_trips_through_slot_builder() {
    let slot = Slot::with_item(1, 1, 1).at(3, 7);
    assert_eq!(slot.fixed, Some(GridPos::new(3, 7)));
}
