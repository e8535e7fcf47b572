#![no_main]

use libfuzzer_sys::fuzz_target;
use segcode_core::{input::extract_paste_digits, InputConfig, SegmentedCodeInput, MAX_SLOTS};

fuzz_target!(|input: (u8, String)| {
    let (slots, text) = input;
    let n = (slots as usize % MAX_SLOTS) + 1;

    let mut widget = SegmentedCodeInput::new(InputConfig::new(n)).unwrap();
    widget.mount((0..n).map(|_| || {}));
    widget.paste(&text);

    let code = widget.code();
    let digits = extract_paste_digits(&text, n);

    // Length never changes, and the pasted digits land from slot 0
    assert_eq!(code.len(), n);
    assert_eq!(code.filled_count(), digits.len());
    for (i, d) in digits.iter().enumerate() {
        assert_eq!(code.get(i).and_then(|s| s.value()), Some(*d));
    }
    // Auto-focus put focus on slot 0 before the paste
    assert_eq!(widget.focused(), Some(code.last_filled().unwrap_or(0)));
});
