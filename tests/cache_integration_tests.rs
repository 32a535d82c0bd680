//! Integration Tests for the LRU Store
//!
//! Drives the public API through the reference access scenarios and the
//! line-command driver.

use lru_store::command::{handle_line, Command};
use lru_store::{CacheError, Config, LruCache, SharedCache};
use serde_json::Value;

// == Helper Functions ==

fn string_cache(capacity: usize) -> LruCache<String, String> {
    LruCache::new(capacity).unwrap()
}

fn get(cache: &mut LruCache<String, String>, key: &str) -> Option<String> {
    cache.get(key).cloned()
}

fn put(cache: &mut LruCache<String, String>, key: &str, value: &str) {
    cache.put(key.to_string(), value.to_string());
}

async fn run_line(cache: &SharedCache<String, String>, line: &str) -> Value {
    let out = handle_line(cache, line).await.unwrap().unwrap();
    serde_json::from_str(&out).unwrap()
}

// == Access Scenarios ==

#[test]
fn test_scenario_capacity_two() {
    let mut cache = string_cache(2);

    put(&mut cache, "a", "apple");
    put(&mut cache, "b", "banana");
    assert_eq!(get(&mut cache, "a").as_deref(), Some("apple"));

    put(&mut cache, "c", "cherry"); // evicts b
    assert_eq!(get(&mut cache, "b"), None);

    put(&mut cache, "d", "date"); // evicts a
    assert_eq!(get(&mut cache, "a"), None);
    assert_eq!(get(&mut cache, "c").as_deref(), Some("cherry"));
    assert_eq!(get(&mut cache, "d").as_deref(), Some("date"));

    let stats = cache.stats();
    assert_eq!(stats.evictions, 2);
    assert_eq!(stats.total_entries, 2);
}

#[test]
fn test_scenario_capacity_one() {
    let mut cache: LruCache<&str, i32> = LruCache::new(1).unwrap();

    cache.put("x", 1);
    cache.put("y", 2); // evicts x

    assert_eq!(cache.get(&"x"), None);
    assert_eq!(cache.get(&"y"), Some(&2));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_scenario_get_protects_from_eviction() {
    let mut cache: LruCache<&str, i32> = LruCache::new(3).unwrap();

    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);
    cache.get(&"a"); // a moves to head
    cache.put("d", 4); // evicts b, not a

    assert!(!cache.contains(&"b"));
    assert_eq!(cache.get(&"a"), Some(&1));
    assert_eq!(cache.get(&"c"), Some(&3));
    assert_eq!(cache.get(&"d"), Some(&4));
    let order: Vec<&str> = cache.keys().copied().collect();
    assert_eq!(order, vec!["d", "c", "a"]);
}

#[test]
fn test_zero_capacity_is_rejected() {
    let result: lru_store::Result<LruCache<String, String>> = LruCache::new(0);
    let err = result.unwrap_err();
    assert_eq!(err, CacheError::InvalidCapacity(0));
    assert!(err.to_string().contains("capacity"));
}

#[test]
fn test_evicted_entry_is_not_recoverable() {
    let mut cache = string_cache(2);
    put(&mut cache, "a", "1");
    put(&mut cache, "b", "2");
    put(&mut cache, "c", "3");

    assert_eq!(get(&mut cache, "a"), None);
    assert_eq!(cache.peek("a"), None);
    assert!(!cache.contains("a"));
}

// == Driver ==

#[tokio::test]
async fn test_driver_scenario_capacity_two() {
    let cache: SharedCache<String, String> =
        SharedCache::from_config(&Config::with_capacity(2)).unwrap();

    run_line(&cache, "put a apple").await;
    run_line(&cache, "put b banana").await;
    assert_eq!(run_line(&cache, "get a").await["value"], "apple");
    run_line(&cache, "put c cherry").await;
    assert!(run_line(&cache, "get b").await["value"].is_null());
    run_line(&cache, "put d date").await;
    assert!(run_line(&cache, "get a").await["value"].is_null());
    assert_eq!(run_line(&cache, "get c").await["value"], "cherry");
    assert_eq!(run_line(&cache, "get d").await["value"], "date");

    let keys = run_line(&cache, "keys").await;
    assert_eq!(keys["keys"], serde_json::json!(["d", "c"]));

    let stats = run_line(&cache, "stats").await;
    assert_eq!(stats["stats"]["evictions"], 2);
    assert_eq!(stats["stats"]["hits"], 3);
    assert_eq!(stats["stats"]["misses"], 2);
}

#[tokio::test]
async fn test_driver_update_reports_previous_value() {
    let cache: SharedCache<String, String> =
        SharedCache::from_config(&Config::with_capacity(2)).unwrap();

    run_line(&cache, "put k first").await;
    let json = run_line(&cache, "put k second value").await;

    assert_eq!(json["previous"], "first");
    assert_eq!(run_line(&cache, "peek k").await["value"], "second value");
    assert_eq!(run_line(&cache, "len").await["len"], 1);
}

#[tokio::test]
async fn test_driver_rejects_bad_lines_and_continues() {
    let cache: SharedCache<String, String> =
        SharedCache::from_config(&Config::with_capacity(2)).unwrap();

    let json = run_line(&cache, "get").await;
    assert!(json.get("error").is_some());

    assert!(handle_line(&cache, "").await.unwrap().is_none());
    assert_eq!(
        Command::parse("put a b").unwrap(),
        Some(Command::Put {
            key: "a".to_string(),
            value: "b".to_string()
        })
    );

    run_line(&cache, "put a apple").await;
    assert_eq!(run_line(&cache, "get a").await["value"], "apple");
}
