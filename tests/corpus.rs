//! Corpus Integration Tests
//!
//! Tests for corpus persistence, validation and the summary views.

use reslib::library::DEFAULT_FEATURED_LIMIT;
use reslib::{
    query, Category, Corpus, CorpusError, Resource, ResourceKind, ResourceQuery, SortKey,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_save_then_load_preserves_records() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("corpus.json");

    let corpus = Corpus::generate(42, 120);
    corpus.save(&path).await.unwrap();

    let loaded = Corpus::load(&path).await.unwrap();
    assert_eq!(loaded.as_slice(), corpus.as_slice());
}

#[tokio::test]
async fn test_load_rejects_duplicate_ids() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("corpus.json");

    let duplicated = vec![
        Resource::new("resource-1", "One", Category::Fitness, ResourceKind::Tool),
        Resource::new("resource-1", "Again", Category::Fitness, ResourceKind::Tool),
    ];
    std::fs::write(&path, serde_json::to_string(&duplicated).unwrap()).unwrap();

    match Corpus::load(&path).await {
        Err(CorpusError::DuplicateId(id)) => assert_eq!(id.as_str(), "resource-1"),
        other => panic!("Expected DuplicateId, got {:?}", other),
    }
}

#[tokio::test]
async fn test_load_rejects_unknown_category() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("corpus.json");

    std::fs::write(
        &path,
        r#"[{"id":"r1","title":"T","description":"D","author":"A","category":"cardiology",
            "type":"article","difficulty":"beginner","tags":[],"downloads":1,"citations":1,
            "publishedDate":"2024-01-01","featured":false}]"#,
    )
    .unwrap();

    assert!(matches!(
        Corpus::load(&path).await,
        Err(CorpusError::Serialization(_))
    ));
}

#[tokio::test]
async fn test_malformed_date_loads_and_sorts_last() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("corpus.json");

    std::fs::write(
        &path,
        r#"[
  {"id":"bad","title":"Bad date","description":"","author":"","category":"nutrition",
   "type":"guide","difficulty":"beginner","readTime":"15 min read","tags":["diet"],
   "downloads":900,"citations":20,"publishedDate":"sometime in 2023","featured":true},
  {"id":"good","title":"Good date","description":"","author":"","category":"nutrition",
   "type":"guide","difficulty":"beginner","tags":[],
   "downloads":10,"citations":20,"publishedDate":"2023-05-04","featured":false}
]"#,
    )
    .unwrap();

    let corpus = Corpus::load(&path).await.unwrap();
    let results = query(&corpus, &ResourceQuery::new().sorted_by(SortKey::Recency));

    let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["good", "bad"]);
    assert_eq!(results[1].read_time.as_deref(), Some("15 min read"));
}

#[tokio::test]
async fn test_open_or_generate_falls_back_to_generator() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent.json");

    let first = Corpus::open_or_generate(&missing, 5, 80).await.unwrap();
    let second = Corpus::open_or_generate(&missing, 5, 80).await.unwrap();

    assert_eq!(first.len(), 80);
    assert_eq!(first.as_slice(), second.as_slice());
    assert!(!missing.exists());
}

#[tokio::test]
async fn test_load_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let result = Corpus::load(&temp.path().join("nope.json")).await;
    assert!(matches!(result, Err(CorpusError::Io(_))));
}

#[test]
fn test_stats_match_corpus() {
    let corpus = Corpus::generate(8, 300);
    let stats = corpus.stats();

    assert_eq!(stats.total_resources, 300);
    assert_eq!(
        stats.total_downloads,
        corpus.iter().map(|r| r.downloads).sum::<u64>()
    );
    assert_eq!(stats.by_category.values().sum::<usize>(), 300);
    assert_eq!(stats.by_kind.values().sum::<usize>(), 300);
}

#[test]
fn test_featured_listing_defaults() {
    let corpus = Corpus::generate(8, 300);
    let featured = corpus.featured(DEFAULT_FEATURED_LIMIT);

    assert!(featured.len() <= DEFAULT_FEATURED_LIMIT);
    assert!(featured.iter().all(|r| r.featured));
}
