use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_ladder::exercises::{backtracking, greedy, strings};
use word_ladder::{find_ladder, LadderError, SolverConfig};

fn main() -> Result<(), LadderError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SolverConfig::default();
    let scenarios: [(&str, &str, &[&str]); 5] = [
        ("hit", "cog", &["hot", "dot", "dog", "lot", "log", "cog"]),
        ("hit", "cog", &["hot", "dot", "dog", "lot", "log"]),
        ("aaa", "aaa", &["aaa"]),
        ("abc", "abd", &["abd"]),
        ("abc", "xyz", &["abd", "abe", "xyz"]),
    ];

    println!("Word Ladders:");
    for (start, end, dictionary) in scenarios {
        match find_ladder(start, end, dictionary, &config)? {
            Some(ladder) => println!(
                "{} -> {}: {} transformations ({})",
                start,
                end,
                ladder.len() - 1,
                ladder.join(" -> ")
            ),
            None => println!("{} -> {}: unreachable", start, end),
        } // ladder length counts words, transformations count edges
    }

    println!("\nPhone Letter Combinations for \"23\":");
    println!("{}", backtracking::letter_combinations("23").join(", "));

    println!("\nSelected Activities:");
    let start = [1, 3, 0, 5, 3, 5, 6, 7, 8, 2, 12];
    let finish = [4, 5, 6, 7, 9, 9, 10, 11, 12, 14, 16];
    match greedy::select_activities(&start, &finish) {
        Ok(selected) => println!("{:?}", selected),
        Err(err) => println!("{}", err),
    }

    println!("\nReversed Vowels:");
    for word in ["umbrella", "sooner rather than later"] {
        match strings::reverse_vowels(word) {
            Ok(reversed) => println!("{} -> {}", word, reversed),
            Err(err) => println!("{}: {}", word, err),
        }
    }

    Ok(())
}
