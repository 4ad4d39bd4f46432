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
use colored::Colorize;

use crate::catalog::CatalogStats;
use crate::ranking::ContentItem;

/// Output format shared by every command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Compact,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "compact" => Ok(OutputFormat::Compact),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow::anyhow!(
                "Unknown format '{}', expected text, compact or json",
                other
            )),
        }
    }
}

pub fn format_item(item: &ContentItem, format: OutputFormat, now: DateTime<Utc>) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(item)?),
        OutputFormat::Compact => Ok(compact_line(item)),
        OutputFormat::Text => Ok(text_block(item, now)),
    }
}

pub fn format_items(
    items: &[ContentItem],
    format: OutputFormat,
    now: DateTime<Utc>,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(items)?);
    }
    if items.is_empty() {
        return Ok("No FAQs found".to_string());
    }

    let mut output = String::new();
    for item in items {
        match format {
            OutputFormat::Compact => {
                output.push_str(&compact_line(item));
                output.push('\n');
            }
            _ => {
                output.push_str(&"━".repeat(60));
                output.push('\n');
                output.push_str(&text_block(item, now));
                output.push('\n');
            }
        }
    }

    Ok(output)
}

fn compact_line(item: &ContentItem) -> String {
    format!(
        "{} {:>6.3}  {}",
        short_id(item.id()),
        item.scores().overall(),
        truncate_chars(item.question(), 70)
    )
}

fn text_block(item: &ContentItem, now: DateTime<Utc>) -> String {
    let mut output = String::new();
    let scores = item.scores();
    let counters = item.counters();

    output.push_str(&item.question().blue().bold().to_string());
    output.push('\n');
    output.push_str(&item.id().bright_black().to_string());
    output.push('\n');

    if let Some(category) = item.category() {
        output.push_str(&category.cyan().to_string());
        if !item.tags().is_empty() {
            output.push_str(&format!(" [{}]", item.tags().join(", ")).cyan().to_string());
        }
        output.push('\n');
    } else if !item.tags().is_empty() {
        output.push_str(&format!("[{}]", item.tags().join(", ")).cyan().to_string());
        output.push('\n');
    }

    let answer = if item.answer().chars().count() > 200 {
        format!("{}...", truncate_chars(item.answer(), 200))
    } else {
        item.answer().to_string()
    };
    output.push_str(&answer);
    output.push('\n');

    output.push_str(&format!(
        "views {}  clicks {}  helpful {}  unhelpful {}  searches {}\n",
        counters.view_count,
        counters.click_count,
        counters.helpful_count,
        counters.unhelpful_count,
        counters.search_count
    ));
    output.push_str(&format!(
        "popularity {:.3}  relevance {:.3}  freshness {:.3}\n",
        scores.popularity(),
        scores.relevance(),
        scores.freshness()
    ));
    output.push_str(
        &format!("overall {:.3}", scores.overall())
            .green()
            .to_string(),
    );
    output.push_str(&format!(
        "  updated {}\n",
        format_relative_time(item.updated_at(), now)
    ));

    output
}

pub fn format_stats(stats: &CatalogStats, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(stats)?);
    }

    let mut output = String::new();

    output.push_str(&"FAQ Catalog Statistics".bold().to_string());
    output.push('\n');
    output.push_str(&format!("Total FAQs: {}\n", stats.total_items));
    output.push_str(&format!("Views: {}\n", stats.totals.view_count));
    output.push_str(&format!("Clicks: {}\n", stats.totals.click_count));
    output.push_str(&format!(
        "Votes: {} helpful / {} unhelpful\n",
        stats.totals.helpful_count, stats.totals.unhelpful_count
    ));
    output.push_str(&format!("Search hits: {}\n", stats.totals.search_count));

    if let Some(mean) = stats.mean_overall_score {
        output.push_str(&format!("Mean overall score: {:.3}\n", mean));
    }

    if let Some(top) = &stats.top_item {
        output.push_str(&format!(
            "Top FAQ: {} ({:.3})\n",
            truncate_chars(&top.question, 60),
            top.overall_score
        ));
    }

    if !stats.categories.is_empty() {
        output.push_str(&"Categories".bold().to_string());
        output.push('\n');
        for (category, count) in &stats.categories {
            output.push_str(&format!("  {:<24} {}\n", category, count));
        }
    }

    Ok(output)
}

fn format_relative_time(dt: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(dt);

    if duration.num_days() > 0 {
        format!("{} days ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{} hours ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{} minutes ago", duration.num_minutes())
    } else if duration.num_seconds() < 0 {
        "in the future".to_string()
    } else {
        "just now".to_string()
    }
}

fn short_id(id: &str) -> String {
    truncate_chars(id, 8)
}

fn truncate_chars(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}
