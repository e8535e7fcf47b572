#![no_main]

use std::cell::Cell;
use std::rc::Rc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use segcode_core::{CompletionPolicy, InputConfig, Key, SegmentedCodeInput};

#[derive(Debug, Arbitrary)]
enum Op {
    Edit(u8, String),
    Backspace(u8),
    Paste(String),
    Focus(u8),
}

#[derive(Debug, Arbitrary)]
struct Scenario {
    slots: u8,
    edge: bool,
    ops: Vec<Op>,
}

fuzz_target!(|scenario: Scenario| {
    let n = (scenario.slots as usize % 12) + 1;
    let policy = if scenario.edge {
        CompletionPolicy::Edge
    } else {
        CompletionPolicy::Level
    };

    let fired = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&fired);
    let mut widget = SegmentedCodeInput::new(InputConfig::new(n).with_completion(policy))
        .unwrap()
        .on_complete(move |code| {
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            counter.set(counter.get() + 1);
        });
    widget.mount((0..n).map(|_| || {}));

    for op in &scenario.ops {
        let was_complete = widget.code().is_complete();
        let before = fired.get();
        let outcome = match op {
            Op::Edit(i, v) => widget.edit(*i as usize, v),
            Op::Backspace(i) => widget.key(*i as usize, Key::Backspace),
            Op::Paste(text) => widget.paste(text),
            Op::Focus(i) => {
                widget.focus_slot(*i as usize);
                continue;
            }
        };

        assert_eq!(widget.code().len(), n);
        assert!(widget.focused().map_or(true, |f| f < n));
        // The callback fired exactly when the outcome says so
        assert_eq!(fired.get() - before, usize::from(outcome.completed().is_some()));
        if let Some(code) = outcome.completed() {
            assert_eq!(Some(code.to_string()), widget.code().assemble());
            if policy == CompletionPolicy::Edge {
                assert!(!was_complete);
            }
        }
    }
});
