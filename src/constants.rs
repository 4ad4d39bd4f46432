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

//! Fixed ranking constants. Weights are not configurable and must sum to 1.0.

/// Weight of the click-through (popularity) sub-score in the overall score
pub const POPULARITY_WEIGHT: f64 = 0.4;

/// Weight of the helpfulness (relevance) sub-score in the overall score
pub const RELEVANCE_WEIGHT: f64 = 0.4;

/// Weight of the time-decay (freshness) sub-score in the overall score
pub const FRESHNESS_WEIGHT: f64 = 0.2;

/// Age in days at which freshness drops to 0.5
pub const FRESHNESS_HALF_LIFE_DAYS: f64 = 30.0;

/// Sub-score used when a ratio has a zero denominator
pub const EMPTY_RATIO_SCORE: f64 = 0.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Name of the environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "FAQRANK_DATA_DIR";
