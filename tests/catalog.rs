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

use chrono::{DateTime, Duration, TimeZone, Utc};
use faqrank::catalog::{Catalog, ListFilter};
use faqrank::ranking::{ContentItem, ContentUpdate, InteractionEvent, RankBy};
use tempfile::TempDir;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 10, 9, 30, 0).unwrap()
}

fn faq(id: &str, question: &str, category: &str, now: DateTime<Utc>) -> ContentItem {
    ContentItem::with_id(
        id.to_string(),
        question.to_string(),
        format!("Answer for {}", id),
        now,
    )
    .with_category(category)
}

fn seeded_catalog(now: DateTime<Utc>) -> Catalog {
    let mut catalog = Catalog::default();
    catalog
        .add(faq("pw", "How do I reset my password?", "account", now))
        .unwrap();
    catalog
        .add(faq("bill", "Where can I download invoices?", "billing", now))
        .unwrap();
    catalog
        .add(
            faq("export", "How do I export my account data?", "account", now)
                .with_tags(vec!["gdpr".to_string()]),
        )
        .unwrap();
    catalog
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load(&dir.path().join("catalog.json")).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_save_and_load_preserves_items() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("catalog.json");
    let now = fixed_now();

    let mut catalog = seeded_catalog(now);
    catalog.apply("pw", InteractionEvent::View, now).unwrap();
    catalog.apply("pw", InteractionEvent::Helpful, now).unwrap();
    catalog.save(&path).unwrap();

    let loaded = Catalog::load(&path).unwrap();
    assert_eq!(loaded.len(), 3);

    let pw = loaded.get("pw").unwrap();
    assert_eq!(pw, catalog.get("pw").unwrap());
    assert_eq!(pw.counters().view_count, 1);
    assert_eq!(pw.counters().helpful_count, 1);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_tampered_overall_score_is_rederived() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    let now = fixed_now();

    seeded_catalog(now).save(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let mut raw: serde_json::Value = serde_json::from_str(&content).unwrap();
    raw["items"][0]["scores"]["overall"] = serde_json::json!(99.0);
    std::fs::write(&path, serde_json::to_string(&raw).unwrap()).unwrap();

    let loaded = Catalog::load(&path).unwrap();
    for item in loaded.items() {
        assert!((item.scores().overall() - 0.2).abs() < 1e-9);
    }
}

#[test]
fn test_unknown_version_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, r#"{"version": 7, "items": []}"#).unwrap();

    let err = Catalog::load(&path).unwrap_err();
    assert!(err.to_string().contains("version"));
}

#[test]
fn test_add_rejects_duplicates_and_empty_questions() {
    let now = fixed_now();
    let mut catalog = seeded_catalog(now);

    assert!(catalog.add(faq("pw", "Another", "account", now)).is_err());
    assert!(catalog.add(faq("blank", "   ", "account", now)).is_err());
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_apply_unknown_id_errors() {
    let mut catalog = seeded_catalog(fixed_now());
    let err = catalog
        .apply("nope", InteractionEvent::View, fixed_now())
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_search_records_hits_and_ranks() {
    let now = fixed_now();
    let mut catalog = seeded_catalog(now);
    catalog.apply("export", InteractionEvent::Helpful, now).unwrap();

    let results = catalog.search("how do", 10, now).unwrap();

    let ids: Vec<&str> = results.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["export", "pw"]);
    assert_eq!(catalog.get("pw").unwrap().counters().search_count, 1);
    assert_eq!(catalog.get("export").unwrap().counters().search_count, 1);
    assert_eq!(catalog.get("bill").unwrap().counters().search_count, 0);
}

#[test]
fn test_search_matches_tags_and_respects_limit() {
    let now = fixed_now();
    let mut catalog = seeded_catalog(now);

    let results = catalog.search("GDPR", 10, now).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), "export");

    let limited = catalog.search("how invoices", 1, now).unwrap();
    assert_eq!(limited.len(), 1);

    assert!(catalog.search("  ?! ", 10, now).is_err());
}

#[test]
fn test_list_filters_by_category_and_score() {
    let now = fixed_now();
    let mut catalog = seeded_catalog(now);
    catalog.apply("pw", InteractionEvent::Helpful, now).unwrap();

    let account = catalog.list(
        &ListFilter {
            category: Some("ACCOUNT".to_string()),
            ..Default::default()
        },
        10,
        now,
    );
    let ids: Vec<&str> = account.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["pw", "export"]);

    let strong = catalog.list(
        &ListFilter {
            min_overall_score: Some(0.5),
            ..Default::default()
        },
        10,
        now,
    );
    assert_eq!(strong.len(), 1);
    assert_eq!(strong[0].id(), "pw");
}

#[test]
fn test_list_rank_by_views() {
    let now = fixed_now();
    let mut catalog = seeded_catalog(now);
    for _ in 0..3 {
        catalog.apply("bill", InteractionEvent::View, now).unwrap();
    }

    let listed = catalog.list(
        &ListFilter {
            rank_by: RankBy::Views,
            ..Default::default()
        },
        1,
        now,
    );
    assert_eq!(listed[0].id(), "bill");
}

#[test]
fn test_recompute_all_applies_decay() {
    let created = fixed_now() - Duration::days(30);
    let mut catalog = seeded_catalog(created);

    let changed = catalog.recompute(None, fixed_now()).unwrap();

    assert_eq!(changed, 3);
    for item in catalog.items() {
        assert_eq!(item.scores().freshness(), 0.5);
        assert!((item.scores().overall() - 0.1).abs() < 1e-9);
    }

    // A second pass at the same instant changes nothing
    assert_eq!(catalog.recompute(None, fixed_now()).unwrap(), 0);
    assert_eq!(catalog.recompute(Some("pw"), fixed_now()).unwrap(), 0);
    assert!(catalog.recompute(Some("nope"), fixed_now()).is_err());
}

#[test]
fn test_update_content_through_catalog() {
    let created = fixed_now() - Duration::days(60);
    let mut catalog = seeded_catalog(created);

    let updated = catalog
        .update_content(
            "bill",
            ContentUpdate {
                question: Some("Where do I find my invoices?".to_string()),
                ..Default::default()
            },
            fixed_now(),
        )
        .unwrap();
    assert_eq!(updated.question(), "Where do I find my invoices?");
    assert_eq!(updated.scores().freshness(), 1.0);

    let err = catalog
        .update_content(
            "bill",
            ContentUpdate {
                question: Some(" ".to_string()),
                ..Default::default()
            },
            fixed_now(),
        )
        .unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_stats_aggregate_counters() {
    let now = fixed_now();
    let mut catalog = seeded_catalog(now);
    catalog.apply("pw", InteractionEvent::View, now).unwrap();
    catalog.apply("pw", InteractionEvent::Click, now).unwrap();
    catalog.apply("pw", InteractionEvent::Helpful, now).unwrap();
    catalog.apply("bill", InteractionEvent::Unhelpful, now).unwrap();

    let stats = catalog.stats(now);

    assert_eq!(stats.total_items, 3);
    assert_eq!(stats.totals.view_count, 1);
    assert_eq!(stats.totals.click_count, 1);
    assert_eq!(stats.totals.helpful_count, 1);
    assert_eq!(stats.totals.unhelpful_count, 1);
    assert_eq!(stats.categories.get("account"), Some(&2));
    assert_eq!(stats.categories.get("billing"), Some(&1));
    assert_eq!(stats.top_item.as_ref().map(|t| t.id.as_str()), Some("pw"));

    // pw: 0.4 + 0.4 + 0.2, the others 0.2 each
    let mean = stats.mean_overall_score.unwrap();
    assert!((mean - (1.0 + 0.2 + 0.2) / 3.0).abs() < 1e-9);
}

#[test]
fn test_stats_on_empty_catalog() {
    let stats = Catalog::default().stats(fixed_now());
    assert_eq!(stats.total_items, 0);
    assert!(stats.mean_overall_score.is_none());
    assert!(stats.top_item.is_none());
}

#[test]
fn test_list_by_freshness_uses_current_age() {
    let now = fixed_now();
    let mut catalog = Catalog::default();
    catalog
        .add(faq("a-old", "Old question", "misc", now - Duration::days(90)))
        .unwrap();
    catalog
        .add(faq("b-new", "New question", "misc", now - Duration::days(1)))
        .unwrap();

    let listed = catalog.list(
        &ListFilter {
            rank_by: RankBy::Freshness,
            ..Default::default()
        },
        10,
        now,
    );

    let ids: Vec<&str> = listed.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["b-new", "a-old"]);
    assert!((listed[1].scores().freshness() - 0.25).abs() < 1e-9);
    assert!((listed[0].scores().freshness() - 1.0 / (1.0 + 1.0 / 30.0)).abs() < 1e-9);

    // Listing never rewrites the stored items
    assert_eq!(catalog.get("a-old").unwrap().scores().freshness(), 1.0);
}

#[test]
fn test_min_score_filter_and_stats_use_current_age() {
    let now = fixed_now();
    let mut catalog = Catalog::default();
    catalog
        .add(faq("stale", "Stale question", "misc", now - Duration::days(30)))
        .unwrap();

    // Stored overall is 0.2, at `now` it has decayed to 0.1
    let hidden = catalog.list(
        &ListFilter {
            min_overall_score: Some(0.15),
            ..Default::default()
        },
        10,
        now,
    );
    assert!(hidden.is_empty());

    let stats = catalog.stats(now);
    assert!((stats.mean_overall_score.unwrap() - 0.1).abs() < 1e-9);
    assert!((stats.top_item.unwrap().overall_score - 0.1).abs() < 1e-9);

    let current = catalog.get_current("stale", now).unwrap();
    assert_eq!(current.scores().freshness(), 0.5);
    assert!(catalog.get_current("missing", now).is_err());
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    let now = fixed_now();
    let item = faq("dup", "Duplicated?", "misc", now);
    let content = serde_json::json!({ "version": 1, "items": [item, item] });
    std::fs::write(&path, content.to_string()).unwrap();

    let err = Catalog::load(&path).unwrap_err();
    assert!(err.to_string().contains("Duplicate FAQ id dup"));
}
