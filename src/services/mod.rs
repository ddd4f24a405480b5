// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

pub mod aggregator;
pub mod github;
pub mod ranker;
pub mod renderer;
pub mod splicer;
