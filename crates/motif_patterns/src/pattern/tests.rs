use super::*;
use crate::errors::PatternErrorKind;
use motif_bindings::MapBindings;
use pretty_assertions::assert_eq;

type Env = MapBindings<&'static str>;

fn var(name: &'static str) -> Pattern<&'static str, String> {
    Pattern::variable(name)
}

fn text(s: &str) -> Pattern<&'static str, String> {
    Pattern::text(s)
}

fn env_of(pairs: &[(&'static str, Value)]) -> Env {
    pairs.iter().cloned().collect()
}

fn song_pattern() -> Pattern<&'static str, String> {
    Pattern::concat([
        text("root/"),
        var("a"),
        text("/"),
        var("b"),
        text("-"),
        var("c"),
        text(".mp3"),
    ])
}

// Literals

#[test]
fn literal_matches_only_itself() {
    let pattern = text("hello");
    let found = pattern.matches(Env::new(), &"hello".to_string());
    assert_eq!(found, vec![Env::new()]);
    assert!(pattern.matches(Env::new(), &"hellO".to_string()).is_empty());
}

#[test]
fn literal_match_keeps_seed() {
    let seed = env_of(&[("x", Value::Int(1))]);
    let found = Pattern::<&str, i64>::literal(7).matches(seed.clone(), &7);
    assert_eq!(found, vec![seed]);
}

#[test]
fn literal_evaluates_to_itself() {
    assert_eq!(
        Pattern::<&str, bool>::literal(true).evaluate(&Env::new()),
        Ok(true)
    );
}

// Variables

#[test]
fn unbound_variable_binds_value() {
    let found = var("a").matches(Env::new(), &"xyz".to_string());
    assert_eq!(found, vec![env_of(&[("a", Value::string("xyz"))])]);
}

#[test]
fn bound_variable_checks_consistency() {
    let seed = env_of(&[("a", Value::string("xyz"))]);
    assert_eq!(
        var("a").matches(seed.clone(), &"xyz".to_string()),
        vec![seed.clone()]
    );
    assert!(var("a").matches(seed, &"abc".to_string()).is_empty());
}

#[test]
fn bound_variable_of_other_kind_does_not_match() {
    let seed = env_of(&[("n", Value::string("5"))]);
    let number: Pattern<&str, i64> = Pattern::variable("n");
    assert!(number.matches(seed, &5).is_empty());
}

#[test]
fn typed_variable_round_trips() {
    let number: Pattern<&str, i64> = Pattern::variable("n");
    let found = number.matches(Env::new(), &42);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].get(&"n"), Some(&Value::Int(42)));
    assert_eq!(number.evaluate(&found[0]), Ok(42));
}

#[test]
fn unresolved_variable_fails_evaluation() {
    let err = var("missing").evaluate(&Env::new()).err().map(|e| e.kind);
    assert_eq!(
        err,
        Some(PatternErrorKind::Unresolved {
            name: "missing".to_string()
        })
    );
}

#[test]
fn wrongly_typed_binding_fails_evaluation() {
    let env = env_of(&[("a", Value::Int(3))]);
    let err = var("a").evaluate(&env).err().map(|e| e.kind);
    assert_eq!(
        err,
        Some(PatternErrorKind::TypeMismatch {
            expected: ValueKind::Str,
            got: ValueKind::Int
        })
    );
}

#[test]
fn evaluate_does_not_mutate_env() {
    let env = env_of(&[("a", Value::string("1"))]);
    let before = env.clone();
    let _ = song_pattern().evaluate(&env);
    assert_eq!(env, before);
}

// Builder

#[test]
fn concat_merges_adjacent_literals() {
    let pattern = Pattern::concat([text("a"), text(""), text("b"), var("x"), text("c"), text("d")]);
    let parts = pattern.as_concat().map(Concat::parts);
    assert_eq!(parts, Some(&[text("ab"), var("x"), text("cd")][..]));
}

#[test]
fn concat_of_literals_collapses() {
    assert_eq!(Pattern::concat([text("ro"), text("ot")]), text("root"));
    assert_eq!(Pattern::<&str, String>::concat([]), text(""));
}

#[test]
fn concat_of_single_part_is_that_part() {
    assert_eq!(Pattern::concat([var("a")]), var("a"));
    assert_eq!(Pattern::concat([text(""), var("a"), text("")]), var("a"));
}

#[test]
fn nested_concat_is_kept_as_one_part() {
    let inner = Pattern::concat([var("a"), text(","), var("b")]);
    let outer = Pattern::concat([text("<"), inner.clone(), text(">")]);
    let parts = outer.as_concat().map(Concat::parts);
    assert_eq!(parts, Some(&[text("<"), inner, text(">")][..]));
}

#[test]
fn accessors() {
    assert!(text("x").is_literal());
    assert_eq!(text("x").as_literal(), Some(&"x".to_string()));
    assert_eq!(var("a").as_variable(), Some(&"a"));
    assert!(var("a").as_concat().is_none());
    assert!(song_pattern().as_concat().is_some());
    assert_eq!(song_pattern().kind(), ValueKind::Str);
    assert_eq!(Pattern::<&str, i64>::literal(1).kind(), ValueKind::Int);
}

// Evaluation and matching of concatenations

#[test]
fn concat_evaluates_parts_in_order() {
    let env = env_of(&[
        ("a", Value::string("greetings")),
        ("b", Value::string("hello")),
        ("c", Value::string("world")),
    ]);
    assert_eq!(
        song_pattern().evaluate(&env),
        Ok("root/greetings/hello-world.mp3".to_string())
    );
}

#[test]
fn concat_evaluation_reports_first_unbound() {
    let env = env_of(&[("a", Value::string("x"))]);
    let err = song_pattern().evaluate(&env).err().map(|e| e.kind);
    assert_eq!(
        err,
        Some(PatternErrorKind::Unresolved {
            name: "b".to_string()
        })
    );
}

#[test]
fn concat_under_non_text_type_is_rejected() {
    let Some(concat) = song_pattern().as_concat().cloned() else {
        panic!("song pattern is a concatenation");
    };
    let number: Pattern<&str, i64> = Pattern::Concat(concat);
    assert!(number.matches(Env::new(), &5).is_empty());

    // Parts are evaluated first, so an unbound part wins.
    let err = number.evaluate(&Env::new()).err().map(|e| e.kind);
    assert!(matches!(err, Some(PatternErrorKind::Unresolved { .. })));

    let env = env_of(&[
        ("a", Value::string("x")),
        ("b", Value::string("y")),
        ("c", Value::string("z")),
    ]);
    let err = number.evaluate(&env).err().map(|e| e.kind);
    assert_eq!(
        err,
        Some(PatternErrorKind::TypeMismatch {
            expected: ValueKind::Int,
            got: ValueKind::Str
        })
    );
}

#[test]
fn matches_are_consistent_with_evaluate() {
    let input = "root/a/b/c/d-e-f.mp3".to_string();
    let found = song_pattern().matches(Env::new(), &input);
    assert_eq!(found.len(), 6);
    for env in &found {
        assert_eq!(song_pattern().evaluate(env), Ok(input.clone()));
    }
}

// Budget

#[test]
fn matches_within_counts_branches() {
    let mut budget = MatchBudget::unlimited();
    let found = var("a").matches_within(Env::new(), &"x".to_string(), &mut budget);
    assert_eq!(found.map(|envs| envs.len()), Ok(1));
    assert_eq!(budget.spent(), 1);
}

#[test]
fn matches_within_reports_exhaustion() {
    let pattern = Pattern::concat([var("a"), var("b"), var("c"), var("d")]);
    let mut budget = MatchBudget::with_limit(10);
    let err = pattern
        .matches_within(Env::new(), &"abcdefgh".to_string(), &mut budget)
        .err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(PatternErrorKind::BudgetExceeded { limit: 10 })
    );
}

#[test]
fn unlimited_matches_enumerate_all_splits() {
    let pattern = Pattern::concat([var("a"), var("b"), var("c")]);
    // Compositions of 4 into 3 ordered parts: C(6, 2).
    assert_eq!(pattern.matches(Env::new(), &"abcd".to_string()).len(), 15);
}

// Substitution

#[test]
fn substitute_literal_merges_neighbours() {
    let replaced = song_pattern().substitute(&"a", &text("music"));
    let Ok(replaced) = replaced else {
        panic!("substitution should succeed");
    };
    let parts = replaced.as_concat().map(|c| c.parts().len());
    assert_eq!(parts, Some(5));
    assert_eq!(replaced.to_string(), "root/music/{b}-{c}.mp3");
    assert!(!replaced.domain().contains(&"a"));
}

#[test]
fn substitute_with_concat_nests_it() {
    let replacement = Pattern::concat([var("x"), text("_"), var("y")]);
    let replaced = song_pattern()
        .substitute(&"b", &replacement)
        .map(|p| p.to_string());
    assert_eq!(replaced, Ok("root/{a}/{x}_{y}-{c}.mp3".to_string()));
}

#[test]
fn substitute_renames_variable() {
    let replaced = song_pattern().substitute(&"c", &var("z"));
    assert_eq!(
        replaced.map(|p| p.to_string()),
        Ok("root/{a}/{b}-{z}.mp3".to_string())
    );
}

#[test]
fn substitute_unrelated_target_is_identity() {
    assert_eq!(
        song_pattern().substitute(&"q", &text("x")),
        Ok(song_pattern())
    );
}

#[test]
fn substitute_rejects_wrong_kind() {
    let original = song_pattern();
    let err = original
        .substitute(&"a", &Pattern::<&str, i64>::literal(5))
        .err()
        .map(|e| e.kind);
    assert_eq!(
        err,
        Some(PatternErrorKind::TypeMismatch {
            expected: ValueKind::Str,
            got: ValueKind::Int
        })
    );
    assert_eq!(original, song_pattern());
}

#[test]
fn substitute_typed_variable() {
    let number: Pattern<&str, i64> = Pattern::variable("n");
    assert_eq!(
        number.substitute(&"n", &Pattern::<&str, i64>::literal(9)),
        Ok(Pattern::literal(9))
    );
    let err = number.substitute(&"n", &text("9")).err().map(|e| e.kind);
    assert_eq!(
        err,
        Some(PatternErrorKind::TypeMismatch {
            expected: ValueKind::Int,
            got: ValueKind::Str
        })
    );
}

// Display

#[test]
fn display_renders_template() {
    assert_eq!(song_pattern().to_string(), "root/{a}/{b}-{c}.mp3");
}

#[test]
fn display_escapes_braces() {
    let pattern = Pattern::concat([text("{x}"), var("y")]);
    assert_eq!(pattern.to_string(), "{{x}}{y}");
}

// Deep nesting

const DEEP: usize = 20_000;

/// `(((...{z}...)))`, `depth` levels of concatenation around `z`.
fn deeply_nested(depth: usize) -> Pattern<&'static str, String> {
    let mut pattern = var("z");
    for _ in 0..depth {
        pattern = Pattern::concat([text("("), pattern, text(")")]);
    }
    pattern
}

fn parenthesized(depth: usize, inner: &str) -> String {
    format!("{}{inner}{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn deep_nesting_drops() {
    drop(deeply_nested(DEEP));
}

#[test]
fn deep_nesting_substitutes() {
    let replaced = deeply_nested(DEEP).substitute(&"z", &text("k"));
    let Ok(replaced) = replaced else {
        panic!("substitution should succeed");
    };
    // Every level collapses into one literal once `z` is gone.
    assert!(replaced == text(&parenthesized(DEEP, "k")));
}

#[test]
fn deep_nesting_domain() {
    let domain = deeply_nested(DEEP).domain();
    assert_eq!(domain.len(), 1);
    assert_eq!(domain.get(&"z"), Some(ValueKind::Str));
}

#[test]
fn deep_nesting_clones_compares_and_renders() {
    let pattern = deeply_nested(DEEP);
    let copy = pattern.clone();
    assert!(copy == pattern);
    assert_eq!(pattern.to_string(), parenthesized(DEEP, "{z}"));
    assert!(format!("{pattern:?}").starts_with("Concat(Concat { parts: ["));
}

#[test]
fn deep_nesting_matches_and_evaluates() {
    let pattern = deeply_nested(DEEP);
    let input = parenthesized(DEEP, "core");
    let found = pattern.matches(Env::new(), &input);
    assert_eq!(found, vec![env_of(&[("z", Value::string("core"))])]);
    assert_eq!(pattern.evaluate(&found[0]), Ok(input));
}
