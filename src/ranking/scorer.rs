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

//! Sub-score calculation. Every function here is pure apart from a warning
//! logged when an item claims to have been updated in the future.

use chrono::{DateTime, Utc};
use tracing::warn;

use super::types::{InteractionCounters, Scores};
use crate::constants::{EMPTY_RATIO_SCORE, FRESHNESS_HALF_LIFE_DAYS, SECONDS_PER_DAY};

/// Signed, fractional number of days from `from` to `to`
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let duration = to.signed_duration_since(from);
    duration.num_milliseconds() as f64 / (SECONDS_PER_DAY * 1000.0)
}

/// Click-through rate: clicks per view, 0.0 without views.
///
/// Not clamped: clicks recorded without views can push it above 1.0.
pub fn popularity(counters: &InteractionCounters) -> f64 {
    if counters.view_count == 0 {
        return EMPTY_RATIO_SCORE;
    }
    counters.click_count as f64 / counters.view_count as f64
}

/// Helpfulness ratio: helpful votes per vote, 0.0 without votes
pub fn relevance(counters: &InteractionCounters) -> f64 {
    let total = counters.total_votes();
    if total == 0 {
        return EMPTY_RATIO_SCORE;
    }
    counters.helpful_count as f64 / total as f64
}

/// Hyperbolic decay with a 30-day half-life: `1 / (1 + days / 30)`.
///
/// A future `updated_at` yields a negative age and a freshness above 1.0.
/// That value is kept as is.
pub fn freshness(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days_since_update = days_between(updated_at, now);
    if days_since_update < 0.0 {
        warn!(
            updated_at = %updated_at,
            now = %now,
            days_ahead = -days_since_update,
            "Item updated_at is in the future, freshness exceeds 1.0"
        );
    }
    1.0 / (1.0 + days_since_update / FRESHNESS_HALF_LIFE_DAYS)
}

/// Compute all sub-scores and the composite in one pass
pub fn compute_scores(
    counters: &InteractionCounters,
    updated_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Scores {
    Scores::from_sub_scores(
        popularity(counters),
        relevance(counters),
        freshness(updated_at, now),
    )
}
