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

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::cli::Commands;
use faqrank::catalog::{Catalog, ListFilter};
use faqrank::config::Config;
use faqrank::formatting::{format_item, format_items, format_stats, OutputFormat};
use faqrank::ranking::{ContentItem, ContentUpdate, InteractionEvent, RankBy};

fn parse_list(value: Option<String>) -> Option<Vec<String>> {
    value.map(|s| {
        s.split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    })
}

/// Execute a CLI command against the configured catalog
pub fn execute(config: &Config, command: Commands) -> Result<()> {
    let catalog_path = config.catalog_path()?;
    let mut catalog = Catalog::load(&catalog_path)?;
    let now = Utc::now();

    match command {
        Commands::Add {
            question,
            answer,
            category,
            tags,
            format,
        } => {
            let format: OutputFormat = format.parse()?;
            let mut item = ContentItem::new(question, answer, now);
            if let Some(category) = category {
                item = item.with_category(category);
            }
            if let Some(tags) = parse_list(tags) {
                item = item.with_tags(tags);
            }

            let output = format_item(catalog.add(item)?, format, now)?;
            catalog.save(&catalog_path)?;
            println!("{}", output);
        }

        Commands::Update {
            id,
            question,
            answer,
            category,
            tags,
            format,
        } => {
            let format: OutputFormat = format.parse()?;
            let update = ContentUpdate {
                question,
                answer,
                category,
                tags: parse_list(tags),
            };
            if update.is_empty() {
                return Err(anyhow::anyhow!("Nothing to update"));
            }

            let output = format_item(catalog.update_content(&id, update, now)?, format, now)?;
            catalog.save(&catalog_path)?;
            println!("{}", output);
        }

        Commands::View { id, format } => {
            record(&mut catalog, &catalog_path, &id, InteractionEvent::View, &format, now)?
        }
        Commands::Helpful { id, format } => {
            record(&mut catalog, &catalog_path, &id, InteractionEvent::Helpful, &format, now)?
        }
        Commands::Unhelpful { id, format } => record(
            &mut catalog,
            &catalog_path,
            &id,
            InteractionEvent::Unhelpful,
            &format,
            now,
        )?,
        Commands::Click { id, format } => {
            record(&mut catalog, &catalog_path, &id, InteractionEvent::Click, &format, now)?
        }

        Commands::Search {
            query,
            limit,
            format,
        } => {
            let format: OutputFormat = format.parse()?;
            let limit = limit.unwrap_or(config.listing.default_limit);
            let results = catalog.search(&query.join(" "), limit, now)?;
            catalog.save(&catalog_path)?;
            println!("{}", format_items(&results, format, now)?);
        }

        Commands::Get { id, format } => {
            let format: OutputFormat = format.parse()?;
            println!("{}", format_item(&catalog.get_current(&id, now)?, format, now)?);
        }

        Commands::List {
            limit,
            category,
            rank_by,
            format,
        } => {
            let format: OutputFormat = format.parse()?;
            let rank_by: RankBy = rank_by.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let filter = ListFilter {
                category,
                rank_by,
                min_overall_score: Some(config.listing.min_overall_score),
            };
            let limit = limit.unwrap_or(config.listing.default_limit);
            println!("{}", format_items(&catalog.list(&filter, limit, now), format, now)?);
        }

        Commands::Recompute { id } => {
            let changed = catalog.recompute(id.as_deref(), now)?;
            catalog.save(&catalog_path)?;
            println!("Recomputed scores, {} changed", changed);
        }

        Commands::Stats { format } => {
            let format: OutputFormat = format.parse()?;
            println!("{}", format_stats(&catalog.stats(now), format)?);
        }
    }

    Ok(())
}

fn record(
    catalog: &mut Catalog,
    catalog_path: &std::path::Path,
    id: &str,
    event: InteractionEvent,
    format: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let output = format_item(catalog.apply(id, event, now)?, format, now)?;
    catalog.save(catalog_path)?;

    info!(id = %id, event = %event, "Interaction saved");
    println!("{}", output);
    Ok(())
}
