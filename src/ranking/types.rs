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

use super::ranker::overall_score;
use super::scorer::compute_scores;

/// Raw interaction counters for a single FAQ item.
///
/// Counters only grow; every increment is a saturating `+1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionCounters {
    pub view_count: u64,
    pub helpful_count: u64,
    pub unhelpful_count: u64,
    /// Reporting-only, never feeds a score
    pub search_count: u64,
    pub click_count: u64,
}

impl InteractionCounters {
    /// Helpful plus unhelpful votes
    pub fn total_votes(&self) -> u64 {
        self.helpful_count.saturating_add(self.unhelpful_count)
    }

    /// Field-wise saturating sum, used for catalog totals
    pub fn saturating_sum(&self, other: &Self) -> Self {
        Self {
            view_count: self.view_count.saturating_add(other.view_count),
            helpful_count: self.helpful_count.saturating_add(other.helpful_count),
            unhelpful_count: self.unhelpful_count.saturating_add(other.unhelpful_count),
            search_count: self.search_count.saturating_add(other.search_count),
            click_count: self.click_count.saturating_add(other.click_count),
        }
    }
}

/// Derived scores of an item.
///
/// The overall score is never stored independently: it is derived from the
/// three sub-scores on construction and again on deserialization, so a stale
/// or hand-edited `overall` in a stored record is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SubScores")]
pub struct Scores {
    popularity: f64,
    relevance: f64,
    freshness: f64,
    overall: f64,
}

#[derive(Deserialize)]
struct SubScores {
    popularity: f64,
    relevance: f64,
    freshness: f64,
}

impl From<SubScores> for Scores {
    fn from(parts: SubScores) -> Self {
        Scores::from_sub_scores(parts.popularity, parts.relevance, parts.freshness)
    }
}

impl Scores {
    pub fn from_sub_scores(popularity: f64, relevance: f64, freshness: f64) -> Self {
        Self {
            popularity,
            relevance,
            freshness,
            overall: overall_score(popularity, relevance, freshness),
        }
    }

    /// Click-through rate
    pub fn popularity(&self) -> f64 {
        self.popularity
    }

    /// Helpfulness ratio
    pub fn relevance(&self) -> f64 {
        self.relevance
    }

    /// Time decay since the last update
    pub fn freshness(&self) -> f64 {
        self.freshness
    }

    /// Weighted composite, the ranking key
    pub fn overall(&self) -> f64 {
        self.overall
    }
}

/// A rankable FAQ entry with its interaction counters and derived scores.
///
/// Every mutating operation consumes the item and hands back the updated
/// value with all four scores recomputed against the supplied clock reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub(super) id: String,
    pub(super) question: String,
    pub(super) answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) category: Option<String>,
    #[serde(default)]
    pub(super) tags: Vec<String>,
    #[serde(default)]
    pub(super) counters: InteractionCounters,
    pub(super) created_at: DateTime<Utc>,
    pub(super) updated_at: DateTime<Utc>,
    #[serde(default)]
    pub(super) last_viewed_at: Option<DateTime<Utc>>,
    pub(super) scores: Scores,
}

/// Content changes applied through [`ContentItem::update_content`]
#[derive(Debug, Clone, Default)]
pub struct ContentUpdate {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ContentUpdate {
    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.answer.is_none()
            && self.category.is_none()
            && self.tags.is_none()
    }
}

impl ContentItem {
    /// Create a new item with a generated id
    pub fn new(question: String, answer: String, now: DateTime<Utc>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), question, answer, now)
    }

    /// Create a new item with a caller-chosen id. All counters start at zero.
    pub fn with_id(id: String, question: String, answer: String, now: DateTime<Utc>) -> Self {
        let counters = InteractionCounters::default();
        Self {
            id,
            question,
            answer,
            category: None,
            tags: Vec::new(),
            counters,
            created_at: now,
            updated_at: now,
            last_viewed_at: None,
            scores: compute_scores(&counters, now, now),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Rebuild an item from previously recorded counters and timestamps,
    /// e.g. when importing rows owned by another store.
    pub fn with_history(
        mut self,
        counters: InteractionCounters,
        updated_at: DateTime<Utc>,
        last_viewed_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        self.counters = counters;
        self.updated_at = updated_at;
        self.created_at = self.created_at.min(updated_at);
        self.last_viewed_at = last_viewed_at;
        self.rescore(now);
        self
    }

    /// Edit question, answer, category or tags. Counts as an update, so
    /// freshness restarts from `now`.
    pub fn update_content(mut self, update: ContentUpdate, now: DateTime<Utc>) -> Self {
        if update.is_empty() {
            return self;
        }
        if let Some(question) = update.question {
            self.question = question;
        }
        if let Some(answer) = update.answer {
            self.answer = answer;
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.touch(now)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn counters(&self) -> &InteractionCounters {
        &self.counters
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn last_viewed_at(&self) -> Option<DateTime<Utc>> {
        self.last_viewed_at
    }

    /// Text matched by catalog keyword search
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.question, self.answer, self.tags.join(" "))
    }

    /// Mark the item as updated at `now` and recompute every score
    pub(super) fn touch(mut self, now: DateTime<Utc>) -> Self {
        self.updated_at = now;
        self.rescore(now);
        self
    }

    pub(super) fn rescore(&mut self, now: DateTime<Utc>) {
        self.scores = compute_scores(&self.counters, self.updated_at, now);
    }
}

/// Key used to order a result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankBy {
    #[default]
    Overall,
    Popularity,
    Relevance,
    Freshness,
    Views,
}

impl std::fmt::Display for RankBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankBy::Overall => write!(f, "overall"),
            RankBy::Popularity => write!(f, "popularity"),
            RankBy::Relevance => write!(f, "relevance"),
            RankBy::Freshness => write!(f, "freshness"),
            RankBy::Views => write!(f, "views"),
        }
    }
}

impl std::str::FromStr for RankBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overall" | "score" => Ok(RankBy::Overall),
            "popularity" | "ctr" | "clicks" => Ok(RankBy::Popularity),
            "relevance" | "helpful" | "helpfulness" => Ok(RankBy::Relevance),
            "freshness" | "recent" => Ok(RankBy::Freshness),
            "views" => Ok(RankBy::Views),
            other => Err(format!(
                "unknown rank key '{}', expected overall, popularity, relevance, freshness or views",
                other
            )),
        }
    }
}
