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

//! JSON-file catalog of FAQ items.
//!
//! The catalog keeps every item in memory keyed by id and writes the whole
//! set back on save. It owns item lifetimes for the command-line tool; the
//! ranking engine itself never touches it.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::ranking::{
    rank, recompute_all, ContentItem, ContentUpdate, InteractionCounters, InteractionEvent, RankBy,
};

const CATALOG_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    version: u32,
    items: Vec<ContentItem>,
}

/// Filters applied by [`Catalog::list`]
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub category: Option<String>,
    pub rank_by: RankBy,
    pub min_overall_score: Option<f64>,
}

/// Highest-ranked item summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopItem {
    pub id: String,
    pub question: String,
    pub overall_score: f64,
}

/// Aggregate figures over the whole catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_items: usize,
    pub totals: InteractionCounters,
    pub mean_overall_score: Option<f64>,
    pub top_item: Option<TopItem>,
    pub categories: BTreeMap<String, usize>,
}

#[derive(Debug, Default)]
pub struct Catalog {
    items: BTreeMap<String, ContentItem>,
}

impl Catalog {
    /// Load a catalog from disk. A missing file is an empty catalog.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Catalog file not found, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;

        if file.version != CATALOG_FORMAT_VERSION {
            return Err(anyhow::anyhow!(
                "Unsupported catalog version {} in {}",
                file.version,
                path.display()
            ));
        }

        let mut items = BTreeMap::new();
        for item in file.items {
            let id = item.id().to_string();
            if items.contains_key(&id) {
                return Err(anyhow::anyhow!(
                    "Duplicate FAQ id {} in {}",
                    id,
                    path.display()
                ));
            }
            items.insert(id, item);
        }

        debug!(path = %path.display(), items = items.len(), "Catalog loaded");
        Ok(Self { items })
    }

    /// Write the catalog to a temporary sibling file and rename it over `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let file = CatalogFile {
            version: CATALOG_FORMAT_VERSION,
            items: self.items.values().cloned().collect(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!(path = %path.display(), items = self.items.len(), "Catalog saved");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.values()
    }

    /// Add a new item. Ids must be unique and questions non-empty.
    pub fn add(&mut self, item: ContentItem) -> Result<&ContentItem> {
        if item.question().trim().is_empty() {
            return Err(anyhow::anyhow!("FAQ question must not be empty"));
        }
        if self.items.contains_key(item.id()) {
            return Err(anyhow::anyhow!("FAQ already exists: {}", item.id()));
        }

        let id = item.id().to_string();
        info!(id = %id, "FAQ added");
        Ok(&*self.items.entry(id).or_insert(item))
    }

    pub fn get(&self, id: &str) -> Result<&ContentItem> {
        self.items
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("FAQ not found: {}", id))
    }

    /// Apply `f` to the stored item and put the result back
    fn replace_with<F>(&mut self, id: &str, f: F) -> Result<&ContentItem>
    where
        F: FnOnce(ContentItem) -> ContentItem,
    {
        let item = self
            .items
            .remove(id)
            .ok_or_else(|| anyhow::anyhow!("FAQ not found: {}", id))?;
        let updated = f(item);
        Ok(&*self.items.entry(id.to_string()).or_insert(updated))
    }

    pub fn update_content(
        &mut self,
        id: &str,
        update: ContentUpdate,
        now: DateTime<Utc>,
    ) -> Result<&ContentItem> {
        if let Some(question) = &update.question {
            if question.trim().is_empty() {
                return Err(anyhow::anyhow!("FAQ question must not be empty"));
            }
        }
        let item = self.replace_with(id, |item| item.update_content(update, now))?;
        info!(id = %id, "FAQ content updated");
        Ok(item)
    }

    /// Record an interaction event against an item
    pub fn apply(
        &mut self,
        id: &str,
        event: InteractionEvent,
        now: DateTime<Utc>,
    ) -> Result<&ContentItem> {
        let item = self.replace_with(id, |item| item.record(event, now))?;
        if event.affects_scores() {
            debug!(
                id = %id,
                event = %event,
                overall_score = item.scores().overall(),
                "Interaction recorded, scores recomputed"
            );
        } else {
            debug!(id = %id, event = %event, "Interaction recorded");
        }
        Ok(item)
    }

    /// Keyword search over question, answer and tags.
    ///
    /// Every matching item gets a search hit recorded. Matches come back
    /// rescored at `now` and ranked by overall score, at most `limit` of them.
    pub fn search(
        &mut self,
        query: &str,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<ContentItem>> {
        let keywords = tokenize(query);
        if keywords.is_empty() {
            return Err(anyhow::anyhow!("Search query has no searchable words"));
        }

        let matched: Vec<String> = self
            .items
            .values()
            .filter(|item| {
                let words = tokenize(&item.searchable_text());
                keywords.iter().any(|keyword| words.contains(keyword))
            })
            .map(|item| item.id().to_string())
            .collect();

        let mut results = Vec::with_capacity(matched.len());
        for id in &matched {
            let item = self.replace_with(id, ContentItem::record_search_hit)?;
            results.push(item.clone().recompute(now));
        }

        rank(&mut results, RankBy::Overall);
        results.truncate(limit);

        debug!(query = %query, matched = matched.len(), returned = results.len(), "Search finished");
        Ok(results)
    }

    /// Ranked listing with optional category and score filters.
    ///
    /// Scores are recomputed at `now` before filtering so freshness reflects
    /// the item's current age. Stored items are left untouched.
    pub fn list(&self, filter: &ListFilter, limit: usize, now: DateTime<Utc>) -> Vec<ContentItem> {
        let mut results: Vec<ContentItem> = self
            .items
            .values()
            .filter(|item| match &filter.category {
                Some(category) => item
                    .category()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category)),
                None => true,
            })
            .map(|item| item.clone().recompute(now))
            .filter(|item| match filter.min_overall_score {
                Some(min) => item.scores().overall() >= min,
                None => true,
            })
            .collect();

        rank(&mut results, filter.rank_by);
        results.truncate(limit);
        results
    }

    /// Item rescored at `now`, as shown to a reader
    pub fn get_current(&self, id: &str, now: DateTime<Utc>) -> Result<ContentItem> {
        Ok(self.get(id)?.clone().recompute(now))
    }

    /// Recompute one item, or every item when `id` is `None`.
    ///
    /// Returns the number of items whose overall score changed.
    pub fn recompute(&mut self, id: Option<&str>, now: DateTime<Utc>) -> Result<usize> {
        match id {
            Some(id) => {
                let before = self.get(id)?.scores().overall();
                let after = self
                    .replace_with(id, |item| item.recompute(now))?
                    .scores()
                    .overall();
                Ok(usize::from((after - before).abs() > f64::EPSILON))
            }
            None => {
                let mut items: Vec<ContentItem> =
                    std::mem::take(&mut self.items).into_values().collect();
                let changed = recompute_all(&mut items, now);
                self.items = items
                    .into_iter()
                    .map(|item| (item.id().to_string(), item))
                    .collect();
                info!(total = self.items.len(), changed, "Catalog scores recomputed");
                Ok(changed)
            }
        }
    }

    /// Aggregates with scores evaluated at `now`
    pub fn stats(&self, now: DateTime<Utc>) -> CatalogStats {
        let mut ranked: Vec<ContentItem> = self
            .items
            .values()
            .map(|item| item.clone().recompute(now))
            .collect();

        let totals = ranked
            .iter()
            .fold(InteractionCounters::default(), |acc, item| {
                acc.saturating_sum(item.counters())
            });

        let mean_overall_score = if ranked.is_empty() {
            None
        } else {
            let sum: f64 = ranked.iter().map(|i| i.scores().overall()).sum();
            Some(sum / ranked.len() as f64)
        };

        rank(&mut ranked, RankBy::Overall);
        let top_item = ranked.first().map(|item| TopItem {
            id: item.id().to_string(),
            question: item.question().to_string(),
            overall_score: item.scores().overall(),
        });

        let mut categories = BTreeMap::new();
        for item in self.items.values() {
            let category = item.category().unwrap_or("uncategorized").to_string();
            *categories.entry(category).or_insert(0) += 1;
        }

        CatalogStats {
            total_items: self.items.len(),
            totals,
            mean_overall_score,
            top_item,
            categories,
        }
    }
}

/// Lowercase words made of alphanumerics and underscores
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}
