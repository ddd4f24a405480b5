// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use langstats::services::splicer::{build_section, splice};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let section = build_section("| Rust | 100.00% | 1 bytes |");
    if let Some(once) = splice(data, &section) {
        let twice = splice(&once, &section).expect("spliced output keeps valid markers");
        assert_eq!(once, twice);
    }
});
