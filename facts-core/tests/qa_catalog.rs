//! QA tests for the fact catalog: seeding, draws, contributions, durability.
//!
//! These tests exercise the catalog against real files in temp directories.
//! Run with: `cargo test -p facts-core --test qa_catalog -- --nocapture`

use facts_core::catalog::{CATALOG_FILE, RANDOM_POOL_TOPIC};
use facts_core::testing::{empty_source, sample_source};
use facts_core::{ContentSource, FactCatalog, PersistError};
use tempfile::TempDir;

// =============================================================================
// TEST 1: First boot seeds from the content source
// =============================================================================

#[test]
fn test_first_boot_seeds_catalog() {
    println!("\n=== TEST: First Boot Seeding ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(CATALOG_FILE);

    let catalog = FactCatalog::open(&path, sample_source());

    assert!(path.exists(), "Seeded catalog should be written to disk");

    let topics = catalog.topics();
    println!("Seeded topics: {:?}", topics);
    assert_eq!(
        topics,
        vec!["космос".to_string(), "океан".to_string()],
        "Topics should follow source order, random pool excluded"
    );

    // One curated fact per topic, and the drawn fact belongs to the pool.
    let cosmos = catalog
        .topic_facts("космос")
        .expect("Seeded topic should exist");
    assert_eq!(cosmos.len(), 1, "Seeding draws exactly one fact per topic");

    let source = sample_source();
    let seeded = cosmos.first().map(String::as_str);
    let in_pool = (0..200).any(|_| source.fact_for_topic("космос") == seeded);
    assert!(in_pool, "Seeded fact should come from the fixture pool");

    let random_pool = catalog
        .topic_facts(RANDOM_POOL_TOPIC)
        .expect("Random pool should be seeded");
    println!("Random pool size: {}", random_pool.len());
    assert_eq!(
        random_pool.len(),
        3,
        "Random pool should hold the whole general pool when it is small"
    );

    println!("\nSUCCESS: First boot seeding works correctly!");
}

// =============================================================================
// TEST 2: Every listed topic yields a fact, whatever the case
// =============================================================================

#[test]
fn test_every_topic_yields_a_fact() {
    println!("\n=== TEST: Every Topic Yields a Fact ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let catalog = FactCatalog::open(temp_dir.path().join(CATALOG_FILE), ContentSource::builtin());

    let topics = catalog.topics();
    println!("Built-in topics: {:?}", topics);
    assert_eq!(topics.len(), 9, "Built-in source should carry nine topics");

    for topic in &topics {
        let fact = catalog
            .fact_for_topic(topic)
            .expect("Draw should not fail")
            .unwrap_or_else(|| panic!("Topic '{}' should yield a fact", topic));
        assert!(!fact.is_empty(), "Fact text should not be empty");
    }

    // Topic lookup ignores case and surrounding whitespace.
    let fact = catalog
        .fact_for_topic("  ЖИВОТНЫЕ ")
        .expect("Draw should not fail");
    assert!(fact.is_some(), "Upper-case topic should still resolve");

    println!("\nSUCCESS: All topics yield facts, case-insensitively!");
}

// =============================================================================
// TEST 3: Unknown topic answers nothing and writes nothing
// =============================================================================

#[test]
fn test_unknown_topic_leaves_file_untouched() {
    println!("\n=== TEST: Unknown Topic ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(CATALOG_FILE);
    let catalog = FactCatalog::open(&path, sample_source());

    let before = std::fs::read(&path).expect("Failed to read catalog file");

    let result = catalog
        .fact_for_topic("динозавры")
        .expect("Lookup should not fail");
    assert_eq!(result, None, "Unknown topic should answer None");

    let after = std::fs::read(&path).expect("Failed to read catalog file");
    assert_eq!(
        before, after,
        "A miss must not rewrite the catalog file"
    );

    println!("\nSUCCESS: Unknown topics answer None without touching disk!");
}

// =============================================================================
// TEST 4: Adding the same fact twice stores it once
// =============================================================================

#[test]
fn test_add_fact_is_idempotent() {
    println!("\n=== TEST: Idempotent Contributions ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(CATALOG_FILE);
    let catalog = FactCatalog::open(&path, empty_source());

    let text = "Тест-факт-1234567890";
    catalog
        .add_fact("наука", text)
        .expect("First add should succeed");
    catalog
        .add_fact("наука", text)
        .expect("Duplicate add should succeed silently");

    let facts = catalog.topic_facts("наука").expect("Topic should exist");
    println!("Stored facts: {:?}", facts);
    assert_eq!(facts, vec![text.to_string()], "Duplicate must not be stored");

    // The file agrees with memory.
    let content = std::fs::read_to_string(&path).expect("Failed to read catalog file");
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Catalog file should be valid JSON");
    assert_eq!(
        parsed["наука"].as_array().map(|a| a.len()),
        Some(1),
        "File should hold the fact exactly once"
    );

    println!("\nSUCCESS: Duplicate contributions are silent no-ops!");
}

// =============================================================================
// TEST 5: Adding creates the topic and normalizes the key
// =============================================================================

#[test]
fn test_add_fact_creates_and_normalizes_topic() {
    println!("\n=== TEST: Implicit Topic Creation ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let catalog = FactCatalog::open(temp_dir.path().join(CATALOG_FILE), empty_source());

    catalog
        .add_fact("Наука", "Тест-факт-1234567890")
        .expect("Add should succeed");

    let topics = catalog.topics();
    println!("Topics after add: {:?}", topics);
    assert_eq!(
        topics,
        vec!["наука".to_string()],
        "Topic key should be stored lower-case"
    );
    assert!(
        catalog.topic_facts("НАУКА").is_some(),
        "Lookup should resolve any casing to the stored key"
    );

    println!("\nSUCCESS: Contributions create lower-cased topics!");
}

// =============================================================================
// TEST 6: By-topic draws come from the source, not the catalog
// =============================================================================

#[test]
fn test_by_topic_draws_ignore_contributed_facts() {
    println!("\n=== TEST: Source Pool vs. Accumulated Pool ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let catalog = FactCatalog::open(temp_dir.path().join(CATALOG_FILE), empty_source());

    let text = "Пользовательский факт о науке длиной свыше десяти символов.";
    catalog.add_fact("наука", text).expect("Add should succeed");

    // The source knows nothing about "наука", so a by-topic draw misses even
    // though the catalog holds a fact under that key.
    let by_topic = catalog
        .fact_for_topic("наука")
        .expect("Lookup should not fail");
    assert_eq!(
        by_topic, None,
        "By-topic draws must consult the curated pool only"
    );

    // The unscoped draw sees the contributed fact.
    let random = catalog.random_fact();
    println!("Random draw: {:?}", random);
    assert_eq!(
        random.as_deref(),
        Some(text),
        "Unscoped draws cover contributed facts"
    );

    println!("\nSUCCESS: The two pools stay distinct!");
}

// =============================================================================
// TEST 7: Repeated by-topic draws accumulate the whole pool
// =============================================================================

#[test]
fn test_by_topic_draws_accumulate() {
    println!("\n=== TEST: Draw Accumulation ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let catalog = FactCatalog::open(temp_dir.path().join(CATALOG_FILE), sample_source());

    for _ in 0..50 {
        catalog
            .fact_for_topic("космос")
            .expect("Draw should not fail")
            .expect("Known topic should yield a fact");
    }

    let facts = catalog.topic_facts("космос").expect("Topic should exist");
    println!("Accumulated {} facts", facts.len());
    assert_eq!(
        facts.len(),
        3,
        "Fifty draws over a three-fact pool should record each fact once"
    );

    let source = sample_source();
    for fact in &facts {
        // Each accumulated fact is genuinely from the curated pool.
        let mut found = false;
        for _ in 0..200 {
            if source.fact_for_topic("космос") == Some(fact.as_str()) {
                found = true;
                break;
            }
        }
        assert!(found, "Accumulated fact should come from the source pool");
    }

    println!("\nSUCCESS: By-topic draws deduplicate into the catalog!");
}

// =============================================================================
// TEST 8: Catalog survives reopen with order intact
// =============================================================================

#[test]
fn test_reopen_preserves_contents_and_order() {
    println!("\n=== TEST: Reopen Round Trip ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(CATALOG_FILE);

    let first_topics;
    let first_cosmos;
    {
        let catalog = FactCatalog::open(&path, sample_source());
        catalog
            .add_fact("история", "Исторический факт для проверки перезапуска.")
            .expect("Add should succeed");
        first_topics = catalog.topics();
        first_cosmos = catalog.topic_facts("космос").expect("Topic should exist");
    }

    let reopened = FactCatalog::open(&path, sample_source());
    println!("Reopened topics: {:?}", reopened.topics());

    assert_eq!(
        reopened.topics(),
        first_topics,
        "Topic order should survive a reopen"
    );
    assert_eq!(
        reopened.topic_facts("космос").expect("Topic should exist"),
        first_cosmos,
        "Per-topic facts should survive a reopen"
    );
    assert_eq!(
        reopened
            .topic_facts("история")
            .expect("Contributed topic should survive"),
        vec!["Исторический факт для проверки перезапуска.".to_string()]
    );

    println!("\nSUCCESS: Reopen preserves contents and order!");
}

// =============================================================================
// TEST 9: Corrupt file degrades to empty and heals on next write
// =============================================================================

#[test]
fn test_corrupt_file_degrades_then_heals() {
    println!("\n=== TEST: Corrupt File Recovery ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(CATALOG_FILE);
    std::fs::write(&path, "{not valid json").expect("Failed to write corrupt file");

    let catalog = FactCatalog::open(&path, sample_source());

    assert!(
        catalog.topics().is_empty(),
        "Corrupt file should degrade to an empty catalog"
    );
    // Degrading is read-only; the broken file stays until a mutation.
    let content = std::fs::read_to_string(&path).expect("Failed to read catalog file");
    assert_eq!(content, "{not valid json", "Open must not rewrite the file");

    // Draws still work off the content source.
    let fallback = catalog.random_fact();
    println!("Fallback draw: {:?}", fallback);
    assert!(
        fallback.is_some(),
        "Empty catalog should fall back to the source's general pool"
    );

    // The first mutation replaces the corrupt file with a valid snapshot.
    catalog
        .add_fact("наука", "Факт, который чинит испорченный файл.")
        .expect("Add should succeed");
    let healed = std::fs::read_to_string(&path).expect("Failed to read catalog file");
    let parsed: serde_json::Value =
        serde_json::from_str(&healed).expect("File should be valid JSON after a write");
    assert!(parsed.get("наука").is_some(), "New fact should be on disk");

    println!("\nSUCCESS: Corruption degrades gracefully and heals on write!");
}

// =============================================================================
// TEST 10: An empty source seeds an empty catalog
// =============================================================================

#[test]
fn test_empty_source_seeds_empty_catalog() {
    println!("\n=== TEST: Empty Source ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(CATALOG_FILE);
    let catalog = FactCatalog::open(&path, empty_source());

    assert!(catalog.topics().is_empty(), "No topics to seed");
    assert_eq!(catalog.fact_count(), 0, "No facts to seed");
    assert_eq!(
        catalog.random_fact(),
        None,
        "Nothing to draw when both pools are empty"
    );

    let content = std::fs::read_to_string(&path).expect("Failed to read catalog file");
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Catalog file should be valid JSON");
    assert_eq!(
        parsed,
        serde_json::json!({}),
        "Seeded file should be an empty object"
    );

    println!("\nSUCCESS: Empty sources seed empty catalogs!");
}

// =============================================================================
// TEST 11: Contributed and curated facts coexist under one topic
// =============================================================================

#[test]
fn test_contributed_fact_coexists_with_curated_pool() {
    println!("\n=== TEST: Contributed Facts Coexist ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let catalog = FactCatalog::open(temp_dir.path().join(CATALOG_FILE), ContentSource::builtin());

    let text = "Тест-факт-1234567890";
    catalog.add_fact("наука", text).expect("Add should succeed");
    assert!(
        catalog.topics().contains(&"наука".to_string()),
        "Topic should be listed after the contribution"
    );

    // A later by-topic draw serves a curated fact, not necessarily the
    // contributed one; the contribution must still be in the catalog.
    let drawn = catalog
        .fact_for_topic("наука")
        .expect("Draw should not fail")
        .expect("Curated topic should yield a fact");
    println!("Drawn: {}", drawn);

    let facts = catalog.topic_facts("наука").expect("Topic should exist");
    assert!(
        facts.iter().any(|f| f == text),
        "Contributed fact must remain in the topic sequence"
    );
    assert!(
        facts.iter().any(|f| f == &drawn),
        "Drawn curated fact must be recorded in the topic sequence"
    );

    println!("\nSUCCESS: Contributions and curated draws share the topic!");
}

// =============================================================================
// TEST 12: The random pool is hidden from listings but drawn from
// =============================================================================

#[test]
fn test_random_pool_is_hidden_but_drawn() {
    println!("\n=== TEST: Random Pool Visibility ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let catalog = FactCatalog::open(temp_dir.path().join(CATALOG_FILE), empty_source());

    let text = "Факт без темы, попавший в общий пул случайных.";
    catalog
        .add_fact(RANDOM_POOL_TOPIC, text)
        .expect("Add should succeed");

    assert!(
        catalog.topics().is_empty(),
        "The reserved key must never appear in topic listings"
    );
    assert_eq!(
        catalog.random_fact().as_deref(),
        Some(text),
        "The reserved key's facts must be part of unscoped draws"
    );

    println!("\nSUCCESS: The random pool stays hidden yet reachable!");
}

// =============================================================================
// TEST 13: A failed rewrite surfaces, but the in-memory insert stands
// =============================================================================

#[test]
fn test_write_failure_surfaces_and_keeps_memory() {
    println!("\n=== TEST: Write Failure Divergence ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(CATALOG_FILE);
    let catalog = FactCatalog::open(&path, sample_source());

    // Yank the data directory out from under the store mid-session.
    std::fs::remove_dir_all(temp_dir.path()).expect("Failed to remove data directory");

    let text = "Факт, которому некуда записаться на диск.";
    let result = catalog.add_fact("наука", text);
    println!("Result with no directory: {:?}", result);
    assert!(
        matches!(result, Err(PersistError::Io(_))),
        "A failed rewrite must surface as an IO error"
    );

    // The insert is not rolled back; memory and disk diverge.
    let facts = catalog.topic_facts("наука").expect("Topic should exist");
    assert!(
        facts.iter().any(|f| f == text),
        "The in-memory insert must stand after the failed write"
    );
    assert!(!path.exists(), "Nothing could have been written");

    // The next successful write captures the diverged state wholesale.
    std::fs::create_dir_all(temp_dir.path()).expect("Failed to recreate data directory");
    catalog
        .add_fact("наука", "Второй факт, записанный после восстановления.")
        .expect("Add should succeed once the directory is back");

    let content = std::fs::read_to_string(&path).expect("Failed to read catalog file");
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Catalog file should be valid JSON");
    let science = parsed["наука"].as_array().expect("Topic should be on disk");
    assert_eq!(
        science.len(),
        2,
        "Both facts, including the one from the failed write, should be on disk"
    );

    println!("\nSUCCESS: Write failures surface and heal on the next write!");
}

// =============================================================================
// TEST 14: A failed seed write still yields a working catalog
// =============================================================================

#[test]
fn test_seed_write_failure_still_opens() {
    println!("\n=== TEST: Unwritable First Boot ===\n");

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    // Parent directory does not exist, so the seed snapshot cannot be saved.
    let path = temp_dir.path().join("missing").join(CATALOG_FILE);

    let catalog = FactCatalog::open(&path, sample_source());

    assert!(!path.exists(), "No file can appear under a missing directory");
    assert_eq!(
        catalog.topics(),
        vec!["космос".to_string(), "океан".to_string()],
        "The seeded in-memory state must be fully usable"
    );
    assert!(
        catalog.random_fact().is_some(),
        "Draws should work off the unsaved seed"
    );

    println!("\nSUCCESS: An unwritable first boot degrades to memory-only!");
}
