// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::collections::BTreeMap;

/// Language name to byte count, as returned by `/repos/{owner}/{repo}/languages`
/// and as accumulated across repositories.
pub type LanguageBytes = BTreeMap<String, u64>;

/// A language with its share of the total byte count.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub language: String,
    /// Share of the total, in `0.0..=100.0`
    pub percent: f64,
    pub bytes: u64,
}
