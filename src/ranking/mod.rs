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

//! FAQ ranking engine.
//!
//! Items carry raw interaction counters ([`InteractionCounters`]). Each
//! recorded event recomputes three sub-scores and folds them into the
//! overall score used as the sort key:
//!
//! - popularity: clicks per view
//! - relevance: helpful votes per vote
//! - freshness: `1 / (1 + days_since_update / 30)`
//!
//! ```rust
//! use chrono::Utc;
//! use faqrank::ranking::ContentItem;
//!
//! let now = Utc::now();
//! let item = ContentItem::new("How do I reset my password?".into(), "Use the login page.".into(), now)
//!     .record_view(now)
//!     .record_helpful(now);
//! assert!(item.scores().overall() > 0.2);
//! ```

pub mod counters;
pub mod ranker;
pub mod scorer;
pub mod types;


pub use counters::InteractionEvent;
pub use ranker::{overall_score, rank, recompute_all};
pub use scorer::{compute_scores, days_between, freshness, popularity, relevance};
pub use types::{ContentItem, ContentUpdate, InteractionCounters, RankBy, Scores};
