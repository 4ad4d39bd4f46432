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
use serde::{Deserialize, Serialize};

use super::types::ContentItem;

/// A single interaction recorded against an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionEvent {
    View,
    Helpful,
    Unhelpful,
    Click,
    SearchHit,
}

impl std::fmt::Display for InteractionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionEvent::View => write!(f, "view"),
            InteractionEvent::Helpful => write!(f, "helpful"),
            InteractionEvent::Unhelpful => write!(f, "unhelpful"),
            InteractionEvent::Click => write!(f, "click"),
            InteractionEvent::SearchHit => write!(f, "search_hit"),
        }
    }
}

impl InteractionEvent {
    /// Whether the event changes a scored counter
    pub fn affects_scores(&self) -> bool {
        !matches!(self, InteractionEvent::SearchHit)
    }
}

fn bump(count: &mut u64) {
    *count = count.saturating_add(1);
}

impl ContentItem {
    /// Count a view and remember when it happened
    pub fn record_view(mut self, now: DateTime<Utc>) -> Self {
        bump(&mut self.counters.view_count);
        self.last_viewed_at = Some(now);
        self.touch(now)
    }

    pub fn record_helpful(mut self, now: DateTime<Utc>) -> Self {
        bump(&mut self.counters.helpful_count);
        self.touch(now)
    }

    pub fn record_unhelpful(mut self, now: DateTime<Utc>) -> Self {
        bump(&mut self.counters.unhelpful_count);
        self.touch(now)
    }

    pub fn record_click(mut self, now: DateTime<Utc>) -> Self {
        bump(&mut self.counters.click_count);
        self.touch(now)
    }

    /// Count a search hit. Search hits are kept for reporting only, so
    /// neither `updated_at` nor any score changes.
    pub fn record_search_hit(mut self) -> Self {
        bump(&mut self.counters.search_count);
        self
    }

    /// Dispatch an event to the matching `record_*` operation
    pub fn record(self, event: InteractionEvent, now: DateTime<Utc>) -> Self {
        match event {
            InteractionEvent::View => self.record_view(now),
            InteractionEvent::Helpful => self.record_helpful(now),
            InteractionEvent::Unhelpful => self.record_unhelpful(now),
            InteractionEvent::Click => self.record_click(now),
            InteractionEvent::SearchHit => self.record_search_hit(),
        }
    }
}
