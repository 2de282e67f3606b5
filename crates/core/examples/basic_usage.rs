//! Basic usage example of the correction-diff engine

use redpen_core::{generate_diff, DiffConfig, DiffEngine, DiffStatistics};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Correction Diff Examples ===\n");

    // Example 1: Simple diff with default configuration
    example_simple_diff();

    // Example 2: Inspecting the parts
    example_inspect_parts();

    // Example 3: Custom configuration
    example_custom_config();
}

fn example_simple_diff() {
    println!("Example 1: Simple Diff");
    println!("{}", LINE);

    let original = "I has a apple.";
    let fixed = "I have an apple.";

    let parts = generate_diff(original, fixed);
    let stats = DiffStatistics::from_parts(&parts);

    println!("Original: {}", original);
    println!("Fixed:    {}", fixed);
    println!("\n{}", stats.summary());
    println!("\n");
}

fn example_inspect_parts() {
    println!("Example 2: Inspecting the Parts");
    println!("{}", LINE);

    let parts = generate_diff(
        "The team are going to they're office.",
        "The team is going to their office.",
    );

    for (i, part) in parts.iter().enumerate() {
        println!("  {}. {}", i + 1, part);
    }
    println!("\n");
}

fn example_custom_config() {
    println!("Example 3: Custom Configuration");
    println!("{}", LINE);

    // A wider lookahead window re-synchronizes across longer insertions.
    let engine = DiffEngine::new(DiffConfig::new().with_max_lookahead(8));

    let parts = engine.diff(
        "The fox jumps.",
        "The small and very nimble fox jumps.",
    );

    for part in &parts {
        println!("  {}", part);
    }
    println!("\n");
}
