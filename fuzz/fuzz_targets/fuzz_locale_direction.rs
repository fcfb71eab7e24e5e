#![no_main]

//! Locale classification must never panic and must ignore encoding and
//! modifier suffixes.

use libfuzzer_sys::fuzz_target;
use navkit::LayoutDirection;

fuzz_target!(|data: &[u8]| {
    let Ok(tag) = std::str::from_utf8(data) else {
        return;
    };
    let direction = LayoutDirection::for_locale(tag);
    if !tag.contains(['.', '@']) {
        let suffixed = format!("{tag}.UTF-8");
        assert_eq!(LayoutDirection::for_locale(&suffixed), direction);
    }
});
