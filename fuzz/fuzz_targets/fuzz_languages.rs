// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use langstats::domain::LanguageBytes;
use langstats::services::{ranker::rank, renderer::render_table};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(languages) = serde_json::from_slice::<LanguageBytes>(data) else {
        return;
    };
    let _ = render_table(&rank(&languages));
});
