use std::cell::{Cell, RefCell};

use anyhow::anyhow;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn items(disabled: &[bool]) -> Vec<Item<usize>> {
    disabled
        .iter()
        .enumerate()
        .map(|(idx, off)| Item::new(idx, format!("Item {idx}")).with_disabled(*off))
        .collect()
}

/// Every enabled/disabled combination of lists with 1..=`max_len` items.
fn all_layouts(max_len: usize) -> Vec<Vec<bool>> {
    let mut layouts = Vec::new();
    for len in 1..=max_len {
        for mask in 0..(1u32 << len) {
            layouts.push((0..len).map(|bit| mask & (1 << bit) != 0).collect());
        }
    }
    layouts
}

fn mounted(select: &EnhancedSelect<'_, usize>) -> SelectState {
    let mut state = SelectState::new();
    state.reconcile(select.model());
    state
}

#[test]
fn test_mount_highlights_first_enabled_item() {
    for layout in all_layouts(5) {
        let items = items(&layout);
        let select = EnhancedSelect::new(&items);
        let state = mounted(&select);

        assert_eq!(
            state.highlighted(),
            layout.iter().position(|off| !off),
            "layout {layout:?}"
        );
    }
}

#[test]
fn test_no_enabled_items_makes_everything_a_no_op() {
    let items = items(&[true, true, true]);
    let selected = RefCell::new(Vec::new());
    let mut select = EnhancedSelect::new(&items).on_select(|item| {
        selected.borrow_mut().push(item.value);
        Ok(())
    });
    let mut state = SelectState::new();

    assert_eq!(select.handle_key(&mut state, key(KeyCode::Down)).unwrap(), SelectOutcome::Unchanged);
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Up)).unwrap(), SelectOutcome::Unchanged);
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Enter)).unwrap(), SelectOutcome::Unchanged);
    assert_eq!(state.highlighted(), None);
    assert!(selected.borrow().is_empty());
}

#[test]
fn test_empty_list_is_valid() {
    let items: Vec<Item<usize>> = Vec::new();
    let mut select = EnhancedSelect::new(&items);
    let mut state = SelectState::new();

    assert_eq!(select.move_next(&mut state).unwrap(), SelectOutcome::Unchanged);
    assert_eq!(select.activate(&state).unwrap(), SelectOutcome::Unchanged);
    assert!(select.lines(&state).is_empty());
}

#[test]
fn test_move_next_wraps_after_enabled_count_steps() {
    for layout in all_layouts(6) {
        let items = items(&layout);
        let enabled = layout.iter().filter(|off| !**off).count();
        if enabled == 0 {
            continue;
        }

        let mut select = EnhancedSelect::new(&items);
        let mut state = mounted(&select);
        let start = state.highlighted();

        for _ in 0..enabled {
            select.move_next(&mut state).unwrap();
        }
        assert_eq!(state.highlighted(), start, "layout {layout:?}");
    }
}

#[test]
fn test_move_next_then_previous_is_identity() {
    for layout in all_layouts(6) {
        let items = items(&layout);
        for (start, off) in layout.iter().enumerate() {
            if *off {
                continue;
            }

            let mut select = EnhancedSelect::new(&items);
            let mut state = SelectState::with_highlighted(start);
            select.move_next(&mut state).unwrap();
            select.move_previous(&mut state).unwrap();

            assert_eq!(state.highlighted(), Some(start), "layout {layout:?}");
        }
    }
}

#[test]
fn test_navigation_never_lands_on_disabled_item() {
    for layout in all_layouts(6) {
        let items = items(&layout);
        if layout.iter().all(|off| *off) {
            continue;
        }

        let mut select = EnhancedSelect::new(&items);
        let mut state = mounted(&select);
        for step in 0..layout.len().saturating_mul(2) {
            if step % 3 == 0 {
                select.move_previous(&mut state).unwrap();
            } else {
                select.move_next(&mut state).unwrap();
            }

            let idx = state.highlighted().unwrap();
            assert!(!layout[idx], "landed on disabled {idx} in {layout:?}");
        }
    }
}

#[test]
fn test_single_enabled_item_navigation_is_no_op() {
    let items = items(&[true, false, true]);
    let highlighted = RefCell::new(Vec::new());
    let mut select = EnhancedSelect::new(&items).on_highlight(|item| {
        highlighted.borrow_mut().push(item.value);
        Ok(())
    });
    let mut state = SelectState::new();

    assert_eq!(select.handle_key(&mut state, key(KeyCode::Down)).unwrap(), SelectOutcome::Unchanged);
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Up)).unwrap(), SelectOutcome::Unchanged);
    assert_eq!(state.highlighted(), Some(1));
    assert!(highlighted.borrow().is_empty());
}

#[test]
fn test_vertical_keys() {
    let items = items(&[false, false, false]);
    let mut select = EnhancedSelect::new(&items);
    let mut state = SelectState::new();

    assert_eq!(select.handle_key(&mut state, key(KeyCode::Down)).unwrap(), SelectOutcome::Highlighted(1));
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Up)).unwrap(), SelectOutcome::Highlighted(0));
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Right)).unwrap(), SelectOutcome::Ignored);
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Left)).unwrap(), SelectOutcome::Ignored);
}

#[test]
fn test_horizontal_keys() {
    let items = items(&[false, false, false]);
    let mut select = EnhancedSelect::new(&items).with_orientation(Orientation::Horizontal);
    let mut state = SelectState::new();

    assert_eq!(select.handle_key(&mut state, key(KeyCode::Right)).unwrap(), SelectOutcome::Highlighted(1));
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Left)).unwrap(), SelectOutcome::Highlighted(0));
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Left)).unwrap(), SelectOutcome::Highlighted(2));
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Down)).unwrap(), SelectOutcome::Ignored);
}

#[test]
fn test_orientation_change_keeps_highlight() {
    let items = items(&[false, false, false]);
    let mut state = SelectState::new();

    EnhancedSelect::new(&items)
        .handle_key(&mut state, key(KeyCode::Down))
        .unwrap();
    assert_eq!(state.highlighted(), Some(1));

    // Next frame is rebuilt horizontally; the highlight carries over
    let mut select = EnhancedSelect::new(&items).with_orientation(Orientation::Horizontal);
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Right)).unwrap(), SelectOutcome::Highlighted(2));
}

#[test]
fn test_key_release_is_ignored() {
    let items = items(&[false, false]);
    let mut select = EnhancedSelect::new(&items);
    let mut state = SelectState::new();
    let mut release = key(KeyCode::Down);
    release.kind = KeyEventKind::Release;

    assert_eq!(select.handle_key(&mut state, release).unwrap(), SelectOutcome::Ignored);
}

#[test]
fn test_enter_fires_on_select_without_moving() {
    let items = items(&[false, false]);
    let selected = RefCell::new(Vec::new());
    let mut select = EnhancedSelect::new(&items).on_select(|item| {
        selected.borrow_mut().push(item.value);
        Ok(())
    });
    let mut state = SelectState::new();

    select.handle_key(&mut state, key(KeyCode::Down)).unwrap();
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Enter)).unwrap(), SelectOutcome::Selected(1));
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Enter)).unwrap(), SelectOutcome::Selected(1));

    assert_eq!(*selected.borrow(), vec![1, 1]);
    assert_eq!(state.highlighted(), Some(1));
}

#[test]
fn test_activate_on_forced_disabled_highlight_does_not_select() {
    let items = items(&[false, true]);
    let selected = RefCell::new(Vec::new());
    let mut select = EnhancedSelect::new(&items).on_select(|item| {
        selected.borrow_mut().push(item.value);
        Ok(())
    });
    let state = SelectState::with_highlighted(1);

    assert_eq!(select.activate(&state).unwrap(), SelectOutcome::Unchanged);
    assert!(selected.borrow().is_empty());
}

#[test]
fn test_on_highlight_receives_new_item() {
    let items = items(&[false, true, false]);
    let highlighted = RefCell::new(Vec::new());
    let mut select = EnhancedSelect::new(&items).on_highlight(|item| {
        highlighted.borrow_mut().push(item.value);
        Ok(())
    });
    let mut state = SelectState::new();

    select.move_next(&mut state).unwrap();
    select.move_next(&mut state).unwrap();
    select.move_previous(&mut state).unwrap();

    assert_eq!(*highlighted.borrow(), vec![2, 0, 2]);
}

#[test]
fn test_hotkey_highlights_case_insensitively() {
    let items = vec![
        Item::new(0, "Alpha").with_hotkey('a'),
        Item::new(1, "Bravo").with_hotkey('b'),
    ];
    let mut select = EnhancedSelect::new(&items);
    let mut state = SelectState::new();

    assert_eq!(select.handle_key(&mut state, key(KeyCode::Char('B'))).unwrap(), SelectOutcome::Highlighted(1));
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Char('a'))).unwrap(), SelectOutcome::Highlighted(0));
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Char('a'))).unwrap(), SelectOutcome::Unchanged);
}

#[test]
fn test_hotkey_for_disabled_item_leaves_highlight() {
    let items = vec![
        Item::new(0, "Alpha").with_hotkey('a'),
        Item::disabled(1, "Bravo").with_hotkey('b'),
    ];
    let mut select = EnhancedSelect::new(&items);
    let mut state = SelectState::new();

    assert_eq!(select.handle_key(&mut state, key(KeyCode::Char('b'))).unwrap(), SelectOutcome::Unchanged);
    assert_eq!(state.highlighted(), Some(0));
}

#[test]
fn test_unknown_hotkey_is_ignored() {
    let items = vec![Item::new(0, "Alpha").with_hotkey('a')];
    let mut select = EnhancedSelect::new(&items);
    let mut state = SelectState::new();

    assert_eq!(select.handle_key(&mut state, key(KeyCode::Char('z'))).unwrap(), SelectOutcome::Ignored);
}

#[test]
fn test_control_chars_are_not_hotkeys() {
    let items = vec![Item::new(0, "Alpha"), Item::new(1, "Copy").with_hotkey('c')];
    let mut select = EnhancedSelect::new(&items);
    let mut state = SelectState::new();

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(select.handle_key(&mut state, ctrl_c).unwrap(), SelectOutcome::Ignored);
    assert_eq!(state.highlighted(), Some(0));
}

#[test]
fn test_hotkey_only_highlights_by_default() {
    let items = vec![Item::new(0, "Alpha"), Item::new(1, "Bravo").with_hotkey('b')];
    let selected = RefCell::new(Vec::new());
    let mut select = EnhancedSelect::new(&items).on_select(|item| {
        selected.borrow_mut().push(item.value);
        Ok(())
    });
    let mut state = SelectState::new();

    select.handle_key(&mut state, key(KeyCode::Char('b'))).unwrap();
    assert!(selected.borrow().is_empty());
}

#[test]
fn test_instant_select_on_hotkey() {
    let items = vec![Item::new(0, "Alpha"), Item::new(1, "Bravo").with_hotkey('b')];
    let selected = RefCell::new(Vec::new());
    let highlighted = RefCell::new(Vec::new());
    let mut select = EnhancedSelect::new(&items)
        .with_instant_select_on_hotkey(true)
        .on_highlight(|item| {
            highlighted.borrow_mut().push(item.value);
            Ok(())
        })
        .on_select(|item| {
            selected.borrow_mut().push(item.value);
            Ok(())
        });
    let mut state = SelectState::new();

    assert_eq!(select.handle_key(&mut state, key(KeyCode::Char('b'))).unwrap(), SelectOutcome::Selected(1));
    assert_eq!(*highlighted.borrow(), vec![1]);
    assert_eq!(*selected.borrow(), vec![1]);
}

#[test]
fn test_callback_error_propagates() {
    let items = items(&[false, false]);
    let mut select = EnhancedSelect::new(&items).on_select(|_| Err(anyhow!("boom")));
    let mut state = SelectState::new();

    let err = select.handle_key(&mut state, key(KeyCode::Enter)).unwrap_err();
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn test_highlight_callback_error_propagates_after_move() {
    let items = items(&[false, false]);
    let mut select = EnhancedSelect::new(&items).on_highlight(|_| Err(anyhow!("no highlight")));
    let mut state = SelectState::new();

    let err = select.handle_key(&mut state, key(KeyCode::Down)).unwrap_err();
    assert_eq!(err.to_string(), "no highlight");
    assert_eq!(state.highlighted(), Some(1));
}

#[test]
fn test_instant_select_hotkey_on_disabled_item_selects_nothing() {
    let items = vec![Item::new(0, "Alpha"), Item::disabled(1, "Bravo").with_hotkey('b')];
    let fired = Cell::new(0);
    let mut select = EnhancedSelect::new(&items)
        .with_instant_select_on_hotkey(true)
        .on_select(|_| {
            fired.set(fired.get() + 1);
            Ok(())
        });
    let mut state = SelectState::new();

    assert_eq!(
        select.handle_key(&mut state, key(KeyCode::Char('B'))).unwrap(),
        SelectOutcome::Unchanged
    );
    assert_eq!(
        select.press_hotkey(&mut state, 'b').unwrap(),
        SelectOutcome::Unchanged
    );
    assert_eq!(state.highlighted(), Some(0));
    assert_eq!(fired.get(), 0);
}

#[test]
fn test_items_changing_between_frames_are_reconciled() {
    let before = items(&[false, false, false]);
    let mut state = SelectState::new();
    let mut select = EnhancedSelect::new(&before);
    select.move_next(&mut state).unwrap();
    select.move_next(&mut state).unwrap();
    assert_eq!(state.highlighted(), Some(2));

    // The highlighted item became disabled: nearest following enabled item, wrapping
    let after = items(&[false, false, true]);
    let mut select = EnhancedSelect::new(&after);
    assert_eq!(select.handle_key(&mut state, key(KeyCode::Char('x'))).unwrap(), SelectOutcome::Ignored);
    assert_eq!(state.highlighted(), Some(0));

    // The list shrank below the highlight
    let mut state = SelectState::with_highlighted(7);
    let shorter = items(&[false, false]);
    let select = EnhancedSelect::new(&shorter);
    let mut buf = Buffer::empty(Rect::new(0, 0, 20, 2));
    StatefulWidget::render(&select, buf.area, &mut buf, &mut state);
    assert_eq!(state.highlighted(), Some(1));
}

#[test]
fn test_lines_does_not_modify_state() {
    let items = items(&[false, false]);
    let select = EnhancedSelect::new(&items);
    let state = SelectState::new();

    let lines = select.lines(&state);
    assert_eq!(lines.len(), 2);
    assert_eq!(state.highlighted(), None);
}

#[test]
fn test_outcome_is_handled() {
    assert!(!SelectOutcome::Ignored.is_handled());
    assert!(SelectOutcome::Unchanged.is_handled());
    assert!(SelectOutcome::Highlighted(0).is_handled());
    assert!(SelectOutcome::Selected(0).is_handled());
}

#[test]
fn test_orientation_display() {
    assert_eq!(Orientation::Vertical.to_string(), "vertical");
    assert_eq!(Orientation::Horizontal.to_string(), "horizontal");
    assert_eq!(Orientation::default(), Orientation::Vertical);
}
