// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use tracing::debug;

use super::types::{ContentItem, RankBy};
use crate::constants::{FRESHNESS_WEIGHT, POPULARITY_WEIGHT, RELEVANCE_WEIGHT};

/// Fixed-weight composite: `0.4 * popularity + 0.4 * relevance + 0.2 * freshness`
pub fn overall_score(popularity: f64, relevance: f64, freshness: f64) -> f64 {
    POPULARITY_WEIGHT * popularity + RELEVANCE_WEIGHT * relevance + FRESHNESS_WEIGHT * freshness
}

impl ContentItem {
    /// Recompute all scores from the current counters and `updated_at`
    /// without touching either. Calling it twice with the same `now` gives
    /// identical scores.
    pub fn recompute(mut self, now: DateTime<Utc>) -> Self {
        self.rescore(now);
        self
    }

    /// Value of the given ranking key for this item
    pub fn rank_key(&self, rank_by: RankBy) -> f64 {
        match rank_by {
            RankBy::Overall => self.scores.overall(),
            RankBy::Popularity => self.scores.popularity(),
            RankBy::Relevance => self.scores.relevance(),
            RankBy::Freshness => self.scores.freshness(),
            RankBy::Views => self.counters.view_count as f64,
        }
    }
}

/// Sort items best first by `rank_by`.
///
/// Ties fall back to more views, then to id order, so equal scores always
/// come out in the same order.
pub fn rank(items: &mut [ContentItem], rank_by: RankBy) {
    items.sort_by(|a, b| {
        b.rank_key(rank_by)
            .partial_cmp(&a.rank_key(rank_by))
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.counters.view_count.cmp(&a.counters.view_count))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Batch recompute, e.g. for a periodic freshness refresh.
///
/// Returns the number of items whose overall score changed.
pub fn recompute_all(items: &mut [ContentItem], now: DateTime<Utc>) -> usize {
    let mut changed = 0;
    for item in items.iter_mut() {
        let previous = item.scores.overall();
        item.rescore(now);
        if (item.scores.overall() - previous).abs() > f64::EPSILON {
            changed += 1;
        }
    }
    debug!(total = items.len(), changed, "Recomputed item scores");
    changed
}
