//! Property-based tests for segcode-core using proptest
//!
//! These tests verify invariants that should hold for all inputs.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use segcode_core::{
    input::extract_paste_digits, Code, CompletionPolicy, InputConfig, Key, Outcome,
    SegmentedCodeInput, Slot,
};

type Handle = Box<dyn Fn()>;

// ============================================
// Strategies
// ============================================

#[derive(Debug, Clone)]
enum Action {
    Edit(usize, String),
    Backspace(usize),
    Paste(String),
}

fn arb_action(n: usize) -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..n + 1, "[0-9a-z]{0,2}").prop_map(|(i, v)| Action::Edit(i, v)),
        (0..n + 1).prop_map(Action::Backspace),
        "[0-9a-z -]{0,12}".prop_map(Action::Paste),
    ]
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<Action>)> {
    (1usize..=8).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_action(n), 0..40)))
}

fn mounted(
    config: InputConfig,
) -> (SegmentedCodeInput<Handle>, Rc<RefCell<Vec<String>>>) {
    let completions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&completions);
    let n = config.slot_count;
    let mut input = SegmentedCodeInput::new(config)
        .unwrap()
        .on_complete(move |code| sink.borrow_mut().push(code.to_string()));
    input.mount((0..n).map(|_| Box::new(|| {}) as Handle));
    (input, completions)
}

fn apply(input: &mut SegmentedCodeInput<Handle>, action: &Action) -> Outcome {
    match action {
        Action::Edit(i, v) => input.edit(*i, v),
        Action::Backspace(i) => input.key(*i, Key::Backspace),
        Action::Paste(text) => input.paste(text),
    }
}

// ============================================
// Code Properties
// ============================================

proptest! {
    #[test]
    fn prop_initial_code_is_empty(n in 1usize..=32) {
        let (input, _) = mounted(InputConfig::new(n));
        prop_assert_eq!(input.code().len(), n);
        prop_assert_eq!(input.code().filled_count(), 0);
    }

    #[test]
    fn prop_overlay_preserves_length(n in 0usize..16, digits in "[0-9]{0,20}") {
        let digits: Vec<char> = digits.chars().collect();
        let code = Code::empty(n).overlay(&digits);
        prop_assert_eq!(code.len(), n);
        prop_assert_eq!(code.filled_count(), digits.len().min(n));
    }

    #[test]
    fn prop_paste_digits_bounded(text in ".{0,40}", n in 1usize..16) {
        let digits = extract_paste_digits(&text, n);
        prop_assert!(digits.len() <= n);
        prop_assert!(digits.iter().all(|c| c.is_ascii_digit()));
    }
}

// ============================================
// Widget Properties
// ============================================

proptest! {
    #[test]
    fn prop_slots_only_hold_digits((n, actions) in arb_scenario()) {
        let (mut input, _) = mounted(InputConfig::new(n));
        for action in &actions {
            apply(&mut input, action);
            prop_assert_eq!(input.code().len(), n);
            prop_assert!(input
                .code()
                .iter()
                .all(|s| s.value().map_or(true, |c| c.is_ascii_digit())));
            prop_assert!(input.focused().map_or(true, |f| f < n));
        }
    }

    #[test]
    fn prop_level_completion_matches_full_snapshots((n, actions) in arb_scenario()) {
        let (mut input, completions) = mounted(InputConfig::new(n));
        let mut expected = Vec::new();
        for action in &actions {
            let before = input.code().clone();
            let outcome = apply(&mut input, action);
            let processed = !matches!(action, Action::Edit(i, _) if *i >= n)
                && !matches!(action, Action::Backspace(_))
                && !(matches!(action, Action::Edit(_, v) if !v.chars().all(|c| c.is_ascii_digit())));
            if processed {
                if let Some(code) = input.code().assemble() {
                    expected.push(code);
                }
            } else {
                prop_assert_eq!(input.code(), &before);
            }
            if let Some(code) = outcome.completed() {
                prop_assert_eq!(Some(code.to_string()), input.code().assemble());
            }
        }
        prop_assert_eq!(&*completions.borrow(), &expected);
    }

    #[test]
    fn prop_edge_completion_fires_on_transitions((n, actions) in arb_scenario()) {
        let (mut input, completions) =
            mounted(InputConfig::new(n).with_completion(CompletionPolicy::Edge));
        let mut transitions = 0;
        for action in &actions {
            let was_complete = input.code().is_complete();
            apply(&mut input, action);
            if !was_complete && input.code().is_complete() {
                transitions += 1;
            }
        }
        prop_assert_eq!(completions.borrow().len(), transitions);
    }

    #[test]
    fn prop_non_digit_edit_changes_nothing(n in 1usize..8, i in 0usize..8, c in "[^0-9]") {
        let (mut input, _) = mounted(InputConfig::new(n));
        input.paste("5");
        let code = input.code().clone();
        let focused = input.focused();
        prop_assert_eq!(input.edit(i, &c), Outcome::Ignored);
        prop_assert_eq!(input.code(), &code);
        prop_assert_eq!(input.focused(), focused);
    }

    #[test]
    fn prop_paste_overlays_prefix(n in 1usize..10, prefill in "[0-9]{10}", text in "[0-9a-z]{0,12}") {
        let (mut input, _) = mounted(InputConfig::new(n));
        for (i, c) in prefill.chars().take(n).enumerate().filter(|(i, _)| i % 2 == 1) {
            input.edit(i, &c.to_string());
        }
        let before = input.code().clone();
        input.paste(&text);

        let digits = extract_paste_digits(&text, n);
        for i in 0..n {
            let expected = match digits.get(i) {
                Some(&d) => Slot::digit(d),
                None => before.get(i),
            };
            prop_assert_eq!(input.code().get(i), expected);
        }
        if let Some(last) = input.code().last_filled() {
            prop_assert_eq!(input.focused(), Some(last));
        }
    }
}
