//! Basic usage example of the diktat library

use diktat_core::diff::{render_markers, render_text};
use diktat_core::normalizers::{Lowercase, RemovePunctuation, WhitespaceNormalizer};
use diktat_core::{
    compare, compare_live, normalize_user_text, ComparisonEngine, ComparisonOptions,
    DigraphNormalizer, SessionStats, TextPipeline,
};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Diktat Examples ===\n");

    // Example 1: Simple comparison with default options
    example_simple_compare();

    // Example 2: Digraph repair
    example_digraphs();

    // Example 3: Case-sensitive engine
    example_case_sensitive();

    // Example 4: Live feedback and session totals
    example_live_and_session();
}

fn example_simple_compare() {
    println!("Example 1: Simple Comparison");
    println!("{}", LINE);

    let reference = "Wir führen das Gespräch morgen weiter.";
    let typed = "wir führ das gespraech heute morgen weiter";

    let result = compare(reference, typed, ComparisonOptions::default());

    println!("Reference: {}", reference);
    println!("Typed:     {}", typed);
    println!("\n{}", render_text(&result.diff));
    println!("{}", render_markers(&result.diff));
    println!("\nAlignment:");
    for (i, op) in result.alignment.iter().enumerate() {
        println!("  {}. {}", i + 1, op.description());
    }
    println!(
        "\n{}/{} words correct",
        result.stats.correct_words, result.stats.total_words
    );
    println!("\n");
}

fn example_digraphs() {
    println!("Example 2: Digraph Repair");
    println!("{}", LINE);

    for raw in ["schoen", "TUER", "tuEr", "Strasse", "StraBe", "Bauer", "Steuer"] {
        println!("  {:<8} -> {}", raw, normalize_user_text(raw));
    }

    // The same repair as a pipeline layer
    let pipeline = TextPipeline::new()
        .add_normalizer(Box::new(DigraphNormalizer))
        .add_normalizer(Box::new(RemovePunctuation))
        .add_normalizer(Box::new(Lowercase))
        .add_normalizer(Box::new(WhitespaceNormalizer::new().with_trim(true)));

    let layers = pipeline.process("  Die Tuer ist GRUEN!  ");
    println!("\nLayers:");
    for (i, text) in layers.iter().enumerate() {
        println!("  {}: {:?}", i, text);
    }
    println!("\n");
}

fn example_case_sensitive() {
    println!("Example 3: Case-Sensitive Comparison");
    println!("{}", LINE);

    let engine = ComparisonEngine::with_options(ComparisonOptions::case_sensitive());
    let result = engine.compare("Das Haus ist alt.", "das haus ist alt");

    println!("{}", render_text(&result.diff));
    println!("{}", render_markers(&result.diff));
    println!(
        "\nCapitalization errors: {}",
        result.char_stats.wrong_capitalization
    );
    println!("\n");
}

fn example_live_and_session() {
    println!("Example 4: Live Feedback and Session Totals");
    println!("{}", LINE);

    let reference = "Guten Morgen, Frau Müller!";
    for typed in ["gut", "guten morg", "guten morgen frau muel"] {
        let tokens = compare_live(reference, typed, ComparisonOptions::default());
        println!("  {:<24} {}", typed, render_text(&tokens));
    }

    let sentences = [
        ("Ich heiße Anna.", "ich heisse anna"),
        ("Wo ist der Bahnhof?", "wo ist bahnhof"),
        ("Vielen Dank!", "vielen dank"),
    ];

    let mut session = SessionStats::new();
    for (reference, typed) in sentences {
        session.record(&compare(reference, typed, ComparisonOptions::default()).stats);
    }

    println!(
        "\nSession: {} sentences, {}/{} words correct ({}%)",
        session.sentence_count,
        session.total_correct_words,
        session.total_words,
        session.accuracy_percent()
    );
}
