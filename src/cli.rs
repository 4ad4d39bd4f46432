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

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "faqrank")]
#[command(version, author = "Muvon Un Limited <opensource@muvon.io>")]
#[command(about = "Rank FAQ entries by click-through, helpfulness and freshness", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new FAQ to the catalog
    Add {
        /// Question text
        #[arg(short, long)]
        question: String,

        /// Answer text
        #[arg(short, long)]
        answer: String,

        /// Category used for filtering and statistics
        #[arg(short, long)]
        category: Option<String>,

        /// Tags (comma-separated)
        #[arg(long)]
        tags: Option<String>,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Edit an existing FAQ (restarts its freshness)
    Update {
        /// FAQ ID to update
        id: String,

        /// New question (optional)
        #[arg(short, long)]
        question: Option<String>,

        /// New answer (optional)
        #[arg(short, long)]
        answer: Option<String>,

        /// New category (optional)
        #[arg(short, long)]
        category: Option<String>,

        /// Replace tags (comma-separated)
        #[arg(long)]
        tags: Option<String>,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Record a view of a FAQ
    View {
        id: String,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "compact")]
        format: String,
    },

    /// Record a helpful vote
    Helpful {
        id: String,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "compact")]
        format: String,
    },

    /// Record an unhelpful vote
    Unhelpful {
        id: String,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "compact")]
        format: String,
    },

    /// Record a click-through from a listing
    Click {
        id: String,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "compact")]
        format: String,
    },

    /// Keyword search; every match is counted as a search hit
    Search {
        /// Words to search for in questions, answers and tags
        #[arg(required = true)]
        query: Vec<String>,

        /// Maximum number of FAQs to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show a FAQ by ID
    Get {
        id: String,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List FAQs in ranked order
    List {
        /// Maximum number of FAQs to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only FAQs in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Ranking key: overall, popularity, relevance, freshness, or views
        #[arg(short, long, default_value = "overall")]
        rank_by: String,

        /// Output format: text, json, or compact
        #[arg(short, long, default_value = "compact")]
        format: String,
    },

    /// Recompute scores for one FAQ, or all of them
    Recompute {
        /// FAQ ID (all FAQs when omitted)
        id: Option<String>,
    },

    /// Show catalog statistics
    Stats {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}
