//! Interactive console session over the fact stores.
//!
//! This module provides a simple line-oriented protocol:
//! - Lines starting with `/` are commands
//! - Any other line is treated as a topic lookup

use facts_core::{validate, FactCatalog, PreferenceStore};
use std::io::{self, BufRead, Write};

/// How many redraws to spend avoiding the previously shown random fact.
const RANDOM_RETRY_LIMIT: usize = 3;

/// Run the console session until end of input or `/quit`.
pub fn run(catalog: &FactCatalog, prefs: &PreferenceStore, user_id: i64) {
    println!("=== Russian Facts ===");
    println!("User: {user_id}");
    println!();
    print_commands();
    println!();
    println!("Enter a topic or a command (one per line):");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut last_fact: Option<String> = None;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Handle commands
        if line.starts_with('/') {
            let parts: Vec<&str> = line[1..].split_whitespace().collect();
            match parts.first().copied() {
                Some("quit") | Some("exit") => {
                    println!("Goodbye!");
                    break;
                }
                Some("random") => {
                    cmd_random(catalog, prefs, user_id, &mut last_fact);
                }
                Some("fact") => {
                    if parts.len() < 2 {
                        println!("[ERROR] Usage: /fact <topic>");
                    } else {
                        cmd_fact(catalog, prefs, user_id, &parts[1..].join(" "));
                    }
                }
                Some("topics") => {
                    cmd_topics(catalog);
                }
                Some("myfact") => {
                    match prefs.favorite_topic(user_id) {
                        Some(topic) => cmd_fact(catalog, prefs, user_id, &topic),
                        None => println!("[NOT FOUND] No favorite topic set. Use /fav <topic>."),
                    }
                }
                Some("fav") => {
                    if parts.len() < 2 {
                        println!("[ERROR] Usage: /fav <topic>");
                    } else {
                        let topic = parts[1..].join(" ");
                        match prefs.set_favorite_topic(user_id, Some(&topic)) {
                            Ok(()) => println!(
                                "[SAVED] Favorite topic set to '{}'.",
                                validate::normalize_topic(&topic)
                            ),
                            Err(e) => println!("[ERROR] Save failed: {e}"),
                        }
                    }
                }
                Some("unfav") => {
                    match prefs.set_favorite_topic(user_id, None) {
                        Ok(()) => println!("[SAVED] Favorite topic cleared."),
                        Err(e) => println!("[ERROR] Save failed: {e}"),
                    }
                }
                Some("add") => {
                    if parts.len() < 3 {
                        println!("[ERROR] Usage: /add <topic> <text>");
                    } else {
                        cmd_add(catalog, parts[1], &parts[2..].join(" "));
                    }
                }
                Some("stats") => {
                    cmd_stats(prefs, user_id);
                }
                Some("help") => {
                    print_commands();
                }
                _ => {
                    println!("[ERROR] Unknown command. Type /help for help.");
                }
            }
            stdout.flush().ok();
            continue;
        }

        // Anything else is a topic lookup
        cmd_fact(catalog, prefs, user_id, line);
        stdout.flush().ok();
    }
}

/// Draw a random fact, redrawing a few times to dodge the previous one.
fn cmd_random(
    catalog: &FactCatalog,
    prefs: &PreferenceStore,
    user_id: i64,
    last_fact: &mut Option<String>,
) {
    let mut draw = catalog.random_fact();
    if draw.is_some() {
        let mut attempts = 0;
        while attempts < RANDOM_RETRY_LIMIT && draw == *last_fact {
            draw = catalog.random_fact();
            attempts += 1;
        }
    }

    match draw {
        Some(fact) => {
            println!("[FACT] {fact}");
            *last_fact = Some(fact);
            record_delivery(prefs, user_id);
        }
        None => println!("[EMPTY] The catalog has no facts yet."),
    }
}

fn cmd_fact(catalog: &FactCatalog, prefs: &PreferenceStore, user_id: i64, topic: &str) {
    match catalog.fact_for_topic(topic) {
        Ok(Some(fact)) => {
            println!("[FACT] {fact}");
            record_delivery(prefs, user_id);
        }
        Ok(None) => println!("[NOT FOUND] No facts about '{topic}'. Try /topics."),
        Err(e) => println!("[ERROR] Store failure: {e}"),
    }
}

fn cmd_topics(catalog: &FactCatalog) {
    let topics = catalog.topics();
    if topics.is_empty() {
        println!("[EMPTY] No topics yet. Contribute one with /add.");
    } else {
        println!("[TOPICS] {} available:", topics.len());
        for topic in &topics {
            println!("  {topic}");
        }
    }
}

fn cmd_add(catalog: &FactCatalog, topic: &str, text: &str) {
    if let Err(e) = validate::fact_text(text) {
        println!("[ERROR] {e}");
        return;
    }
    match catalog.add_fact(topic, text) {
        Ok(()) => println!(
            "[SAVED] Fact added to '{}'.",
            validate::normalize_topic(topic)
        ),
        Err(e) => println!("[ERROR] Save failed: {e}"),
    }
}

fn cmd_stats(prefs: &PreferenceStore, user_id: i64) {
    let stats = prefs.stats(user_id);
    println!("[STATS]");
    println!("  Facts viewed: {}", stats.total_facts);
    println!(
        "  Favorite topic: {}",
        stats.favorite_topic.as_deref().unwrap_or("none")
    );
    match stats.last_active {
        Some(ts) => println!(
            "  Last active: {}",
            ts.with_timezone(&chrono::Local).format("%d.%m.%Y %H:%M")
        ),
        None => println!("  Last active: never"),
    }
}

/// Count a delivered fact against the user's stats; delivery already
/// happened, so a failed write only warns.
fn record_delivery(prefs: &PreferenceStore, user_id: i64) {
    if let Err(e) = prefs.record_activity(user_id) {
        println!("[ERROR] Could not update stats: {e}");
    }
}

fn print_commands() {
    println!("Commands:");
    println!("  /random              - Random fact from everything collected");
    println!("  /fact <topic>        - Fact about a topic");
    println!("  /topics              - List available topics");
    println!("  /myfact              - Fact about your favorite topic");
    println!("  /fav <topic>         - Set your favorite topic");
    println!("  /unfav               - Clear your favorite topic");
    println!("  /add <topic> <text>  - Contribute a fact (10-500 characters)");
    println!("  /stats               - Your usage statistics");
    println!("  /help                - Show this help");
    println!("  /quit                - Exit");
    println!("  (a bare line is treated as a topic lookup)");
}
