use diktat_core::diff::render_text;
use diktat_core::{
    align, compare, normalize_user_text, AlignmentOp, ComparisonOptions, EditType, SessionStats,
    TokenStatus, WordStats,
};

fn statuses(tokens: &[diktat_core::DiffToken]) -> Vec<TokenStatus> {
    tokens.iter().map(|t| t.status).collect()
}

#[test]
fn exact_match_ignoring_case() {
    let result = compare("Ich gehe", "ich gehe", ComparisonOptions::default());

    assert_eq!(
        result.stats,
        WordStats {
            correct_words: 2,
            wrong_words: 0,
            total_words: 2,
        }
    );
    assert!(!result.diff.iter().any(|t| matches!(
        t.status,
        TokenStatus::Wrong | TokenStatus::Missing | TokenStatus::Extra
    )));
}

#[test]
fn truncated_word_shows_missing_suffix() {
    let result = compare("Führen", "Führ", ComparisonOptions::default());

    assert_eq!(result.alignment.count(EditType::Substitute), 1);
    assert_eq!(render_text(&result.diff), "Führ _ _");
    assert_eq!(
        statuses(&result.diff),
        vec![
            TokenStatus::Wrong,
            TokenStatus::Wrong,
            TokenStatus::Wrong,
            TokenStatus::Wrong,
            TokenStatus::CharSpace,
            TokenStatus::Missing,
            TokenStatus::CharSpace,
            TokenStatus::Missing,
        ]
    );
}

#[test]
fn extra_word_is_not_penalized() {
    let result = compare("guten Tag", "guten schönen Tag", ComparisonOptions::default());

    let inserts: Vec<_> = result
        .alignment
        .iter()
        .filter_map(|op| match op {
            AlignmentOp::Insert { user } => Some(user.display.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(inserts, vec!["schönen"]);
    assert_eq!(result.stats.correct_words, 2);
    assert_eq!(result.stats.wrong_words, 0);
    assert_eq!(result.stats.total_words, 2);
}

#[test]
fn case_only_difference_when_case_matters() {
    let result = compare("Haus", "haus", ComparisonOptions::case_sensitive());

    assert_eq!(result.alignment.count(EditType::Match), 1);
    assert_eq!(result.diff.len(), 4);
    assert!(result
        .diff
        .iter()
        .all(|t| t.status == TokenStatus::WrongCapitalization));
}

#[test]
fn digraph_examples() {
    assert_eq!(normalize_user_text("tuer"), "tür");
    assert_eq!(normalize_user_text("TUER"), "TÜR");
    assert!(!normalize_user_text("Bau").contains('ä'));
    assert_eq!(normalize_user_text("aBc"), "aBc");
    assert_eq!(normalize_user_text("aB"), "aß");
}

#[test]
fn digraph_after_vowel_consonant_pair_is_repaired() {
    assert_eq!(normalize_user_text("zurueck"), "zurück");
    assert_eq!(normalize_user_text("natuerlich"), "natürlich");

    let result = compare("Ich komme zurück", "ich komme zurueck", ComparisonOptions::default());
    assert_eq!(
        result.stats,
        WordStats {
            correct_words: 3,
            wrong_words: 0,
            total_words: 3,
        }
    );
}

#[test]
fn total_over_degenerate_inputs() {
    let options = ComparisonOptions::default();

    for (reference, user) in [("", ""), ("", "hallo"), ("hallo", ""), ("?!", "..."), ("  ", "\t")] {
        let result = compare(reference, user, options);
        assert_eq!(
            result.alignment.reference_len(),
            result.stats.total_words,
            "{reference:?} vs {user:?}"
        );
    }
}

#[test]
fn alignment_is_stable_across_runs() {
    let reference = ["der", "hund", "läuft", "schnell", "nach", "hause"];
    let user = ["der", "hund", "lauft", "nach", "haus", "schnell"];

    let first = align(&reference, &user);
    for _ in 0..5 {
        assert_eq!(align(&reference, &user), first);
    }
}

#[test]
fn comparisons_run_in_parallel() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                compare("Die Straße ist nass", "die straBe ist nass", ComparisonOptions::default())
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.stats.correct_words, 4);
    }
}

#[test]
fn session_accumulates_sentence_results() {
    let mut session = SessionStats::new();
    session.record(&compare("Ich gehe", "ich gehe", ComparisonOptions::default()).stats);
    session.record(&compare("nach Hause", "nach", ComparisonOptions::default()).stats);

    assert_eq!(session.sentence_count, 2);
    assert_eq!(session.total_correct_words, 3);
    assert_eq!(session.total_words, 4);
    assert_eq!(session.accuracy_percent(), 75);
}
