// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use serde::Deserialize;

/// One entry of the `/users/{user}/repos` listing.
///
/// Only the fields the aggregation needs are decoded; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub fork: bool,
    pub languages_url: String,
}
