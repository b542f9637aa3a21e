use pretty_assertions::assert_eq;
use roster_types::{Filter, FilterState, Predicate, Record, Scope, User};

fn names(users: &[User]) -> Vec<&str> {
    users.iter().map(|u| u.name.as_str()).collect()
}

fn sample() -> Vec<User> {
    vec![
        User::new(1, "Ivan", "Ivanov").online(true),
        User::new(2, "Anna", "Petrova"),
        User::new(3, "Petr", "Sidorov").online(true),
    ]
}

// ── Predicate ────────────────────────────────────────────────────

#[test]
fn empty_text_is_no_predicate() {
    assert_eq!(Predicate::text(""), None);
}

#[test]
fn text_predicate_is_case_insensitive() {
    let p = Predicate::text("AN").unwrap();
    assert!(p.matches(&User::new(1, "ivan", "x")));
    assert!(p.matches(&User::new(2, "Anna", "x")));
    assert!(!p.matches(&User::new(3, "Petr", "x")));
}

#[test]
fn text_predicate_spans_name_and_surname() {
    // "n" + "P" joins the two fields
    let p = Predicate::text("anp").unwrap();
    assert!(p.matches(&User::new(1, "Ivan", "Petrov")));
    assert!(!p.matches(&User::new(1, "Ivan", "Sidorov")));
}

#[test]
fn active_predicate_reads_status() {
    let users = sample();
    assert!(Predicate::Active.matches(&users[0]));
    assert!(!Predicate::Active.matches(&users[1]));
}

#[test]
fn uppercase_needle_built_directly_still_matches() {
    let filter = Filter::all().and(Predicate::TextContains("AN".into()));
    let users = filter.apply(&[User::new(1, "Anna", "Petrova")]);
    assert_eq!(names(&users), vec!["Anna"]);
}

#[test]
fn deserialized_text_predicate_is_case_insensitive() {
    let p: Predicate = serde_json::from_str(r#"{"text_contains":"AN"}"#).unwrap();
    assert_eq!(p, Predicate::TextContains("AN".to_string()));
    assert!(p.matches(&User::new(1, "Anna", "Petrova")));
}

// ── Filter ───────────────────────────────────────────────────────

#[test]
fn text_filter_scenario() {
    let users = vec![
        User::new(1, "Ivan", ""),
        User::new(2, "Anna", ""),
        User::new(3, "Petr", ""),
    ];
    let filtered = Filter::all().and_text("an").apply(&users);
    assert_eq!(names(&filtered), vec!["Ivan", "Anna"]);
}

#[test]
fn empty_filter_matches_everything() {
    let users = sample();
    let filter = Filter::all().and_text("");
    assert!(filter.is_empty());
    assert_eq!(filter.apply(&users), users);
}

#[test]
fn predicates_compose_conjunctively() {
    let users = sample();
    let filter = Filter::all().and(Predicate::Active).and_text("an");
    assert_eq!(names(&filter.apply(&users)), vec!["Ivan"]);
}

#[test]
fn duplicate_predicates_collapse() {
    let filter = Filter::all().and(Predicate::Active).and(Predicate::Active);
    assert_eq!(filter.predicates().len(), 1);
}

// ── FilterState ──────────────────────────────────────────────────

#[test]
fn default_state_is_unfiltered() {
    assert!(FilterState::default().to_filter().is_empty());
}

#[test]
fn active_scope_with_text() {
    let state = FilterState::new(Scope::Active, "Sid");
    let filtered = state.to_filter().apply(&sample());
    assert_eq!(names(&filtered), vec!["Petr"]);
}

#[test]
fn switching_scope_clears_search() {
    let mut state = FilterState::new(Scope::All, "iv");
    state.set_scope(Scope::Active);
    assert_eq!(state.search_text, "");
    assert_eq!(state.to_filter(), Filter::all().and(Predicate::Active));
}

#[test]
fn clearing_search_restores_scope_filter() {
    let mut state = FilterState::new(Scope::All, "zzz");
    assert!(state.to_filter().apply(&sample()).is_empty());
    state.clear_search();
    assert_eq!(state.to_filter().apply(&sample()).len(), 3);
}

#[test]
fn filter_is_generic_over_records() {
    let groups = vec![
        roster_types::Group::new(1, "Chess").member(true),
        roster_types::Group::new(2, "Chemistry"),
    ];
    let filter = Filter::all().and(Predicate::Active).and_text("che");
    let hit = filter.apply(&groups);
    assert_eq!(hit.len(), 1);
    assert_eq!(hit[0].id().get(), 1);
}

// ── Properties ───────────────────────────────────────────────────

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn user_strategy() -> impl Strategy<Value = User> {
        (any::<i64>(), "[A-Za-z]{0,8}", "[A-Za-z]{0,8}", any::<bool>())
            .prop_map(|(id, name, surname, online)| User::new(id, name, surname).online(online))
    }

    proptest! {
        #[test]
        fn filtered_result_is_ordered_subset(
            users in prop::collection::vec(user_strategy(), 0..30),
            needle in "[a-z]{0,3}",
            active in any::<bool>(),
        ) {
            let scope = if active { Scope::Active } else { Scope::All };
            let filtered = FilterState::new(scope, needle).to_filter().apply(&users);
            let mut cursor = users.iter();
            for kept in &filtered {
                prop_assert!(cursor.any(|u| u == kept));
            }
        }

        #[test]
        fn text_match_ignores_case(
            users in prop::collection::vec(user_strategy(), 0..30),
            needle in "[a-z]{1,3}",
        ) {
            let lower = Filter::all().and_text(&needle).apply(&users);
            let upper = Filter::all().and_text(&needle.to_uppercase()).apply(&users);
            prop_assert_eq!(lower, upper);
        }
    }
}
