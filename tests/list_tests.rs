use std::collections::HashSet;

use table_shuffle::list::{Change, ListScreen, TapOutcome, number_dataset};

fn row_of(screen: &ListScreen, item: &str) -> usize {
    screen
        .snapshot()
        .position_of(item)
        .unwrap_or_else(|| panic!("{} not in list", item))
}

fn sorted(items: &[String]) -> Vec<String> {
    let mut items = items.to_vec();
    items.sort_by_key(|s| s.parse::<u32>().unwrap_or(u32::MAX));
    items
}

#[cfg(test)]
mod initialization_tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let screen = ListScreen::new();

        assert_eq!(screen.row_count(), 31);
        assert_eq!(screen.items(), number_dataset(30).as_slice());
        assert!(screen.selected().is_empty());
        assert_eq!(screen.snapshot().items(), screen.items());
        assert_eq!(screen.snapshot().section(), 0);
    }

    #[test]
    fn test_custom_dataset() {
        let screen = ListScreen::with_dataset(number_dataset(4), Some(1));
        assert_eq!(screen.row_count(), 5);
        assert_eq!(screen.item_at(4), Some("4"));
        assert_eq!(screen.item_at(5), None);
    }
}

#[cfg(test)]
mod tap_tests {
    use super::*;

    #[test]
    fn test_tap_unselected_moves_to_front() {
        for row in [0, 1, 15, 30] {
            let mut screen = ListScreen::with_seed(9);
            let item = screen.item_at(row).unwrap().to_string();

            let outcome = screen.tap(row);

            assert!(matches!(outcome, TapOutcome::Selected { .. }));
            assert!(screen.is_selected(&item));
            assert_eq!(screen.items()[0], item);
            assert_eq!(screen.snapshot().items()[0], item);
        }
    }

    #[test]
    fn test_tap_selected_keeps_order() {
        let mut screen = ListScreen::with_seed(9);
        screen.tap(7);
        screen.tap(12);
        let before = screen.items().to_vec();

        let row = row_of(&screen, "7");
        let outcome = screen.tap(row);

        assert_eq!(
            outcome,
            TapOutcome::Deselected {
                item: "7".to_string()
            }
        );
        assert!(!screen.is_selected("7"));
        assert_eq!(screen.items(), before.as_slice());
        assert!(outcome.changes().is_empty());
    }

    #[test]
    fn test_selection_order_is_tap_order() {
        let mut screen = ListScreen::with_seed(9);
        for item in ["3", "20", "11"] {
            let row = row_of(&screen, item);
            screen.tap(row);
        }
        assert_eq!(screen.selected(), &["3", "20", "11"]);
        // 最后选中的在最前
        assert_eq!(&screen.items()[..3], &["11", "20", "3"]);
    }

    #[test]
    fn test_double_tap_restores_membership() {
        let mut screen = ListScreen::with_seed(9);

        let row = row_of(&screen, "8");
        screen.tap(row);
        assert!(screen.is_selected("8"));
        let row = row_of(&screen, "8");
        screen.tap(row);
        assert!(!screen.is_selected("8"));
        // 取消选择不会移回原位置
        assert_eq!(screen.items()[0], "8");

        let row = row_of(&screen, "8");
        screen.tap(row);
        assert!(screen.is_selected("8"));
    }

    #[test]
    fn test_stale_row_is_noop() {
        let mut screen = ListScreen::with_seed(9);
        let before = screen.items().to_vec();

        assert_eq!(screen.tap(31), TapOutcome::Ignored);
        assert_eq!(screen.tap(usize::MAX), TapOutcome::Ignored);

        assert_eq!(screen.items(), before.as_slice());
        assert!(screen.selected().is_empty());
    }

    #[test]
    fn test_selected_is_subset_of_items() {
        let mut screen = ListScreen::with_seed(9);
        for row in [4, 9, 4, 30, 2, 0] {
            screen.tap(row);
        }
        let items: HashSet<&String> = screen.items().iter().collect();
        assert!(screen.selected().iter().all(|s| items.contains(s)));
        assert_eq!(screen.row_count(), 31);
    }
}

#[cfg(test)]
mod shuffle_tests {
    use super::*;

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut screen = ListScreen::with_seed(42);
        for _ in 0..10 {
            screen.shuffle();
            assert_eq!(screen.row_count(), 31);
            assert_eq!(sorted(screen.items()), number_dataset(30));
            assert_eq!(screen.snapshot().items(), screen.items());
        }
    }

    #[test]
    fn test_shuffle_reorders() {
        let mut screen = ListScreen::with_seed(42);
        screen.shuffle();
        assert_ne!(screen.items(), number_dataset(30).as_slice());
    }

    #[test]
    fn test_same_seed_same_permutation() {
        let mut a = ListScreen::with_seed(1234);
        let mut b = ListScreen::with_seed(1234);
        a.shuffle();
        b.shuffle();
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn test_shuffle_keeps_selection() {
        let mut screen = ListScreen::with_seed(42);
        screen.tap(row_of(&screen, "5"));
        screen.tap(row_of(&screen, "17"));

        screen.shuffle();

        assert_eq!(screen.selected(), &["5", "17"]);
        assert!(screen.is_selected("5"));
        assert!(!screen.is_selected("6"));
    }

    #[test]
    fn test_shuffle_changes_are_moves_only() {
        let mut screen = ListScreen::with_seed(42);
        let changes = screen.shuffle();
        assert!(!changes.is_empty());
        assert!(changes.iter().all(Change::is_move));
        assert!(changes.len() < 31);
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_end_to_end_scenario() {
        // 初始加载
        let mut screen = ListScreen::with_seed(2023);
        assert_eq!(screen.row_count(), 31);
        assert_eq!(screen.items(), number_dataset(30).as_slice());
        assert!(screen.items().iter().all(|i| !screen.is_selected(i)));

        // 点击 "5"
        let row = row_of(&screen, "5");
        let outcome = screen.tap(row);
        assert_eq!(
            outcome.changes(),
            &[Change::Move {
                item: "5".to_string(),
                from: 5,
                to: 0
            }]
        );
        assert_eq!(screen.selected(), &["5"]);
        let mut expected: Vec<String> = vec!["5".to_string()];
        expected.extend((0..=30).filter(|n| *n != 5).map(|n| n.to_string()));
        assert_eq!(screen.items(), expected.as_slice());
        assert!(screen.is_selected("5"));

        // 再次点击 "5"
        let outcome = screen.tap(0);
        assert!(matches!(outcome, TapOutcome::Deselected { .. }));
        assert!(screen.selected().is_empty());
        assert!(!screen.is_selected("5"));
        assert_eq!(screen.items(), expected.as_slice());

        // 选中后再打乱：勾选状态跟随成员关系
        screen.tap(row_of(&screen, "12"));
        screen.shuffle();
        assert_eq!(sorted(screen.items()), number_dataset(30));
        for item in screen.items() {
            assert_eq!(screen.is_selected(item), item == "12");
        }
    }
}
