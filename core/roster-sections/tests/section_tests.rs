use pretty_assertions::assert_eq;
use roster_sections::{
    flatten, group_into_sections, section_records, section_titles, RowPath, Section,
    SectionLayout,
};
use roster_types::{Record, User};

fn user(id: i64, surname: &str) -> User {
    User::new(id, "x", surname)
}

fn section_surnames(sections: &[Section<User>]) -> Vec<(String, Vec<String>)> {
    sections
        .iter()
        .map(|s| {
            (
                s.title.clone(),
                s.items.iter().map(|u| u.surname.clone()).collect(),
            )
        })
        .collect()
}

// ── Grouping ─────────────────────────────────────────────────────

#[test]
fn groups_by_first_letter_of_surname() {
    let users = vec![user(1, "Ivanov"), user(2, "Petrov"), user(3, "Ivanchenko")];
    let sections = section_records(&users);
    assert_eq!(
        section_surnames(&sections),
        vec![
            ("I".to_string(), vec!["Ivanov".to_string(), "Ivanchenko".to_string()]),
            ("P".to_string(), vec!["Petrov".to_string()]),
        ]
    );
}

#[test]
fn empty_input_yields_no_sections() {
    let sections = section_records::<User>(&[]);
    assert!(sections.is_empty());
    assert!(section_titles(&sections).is_empty());
}

#[test]
fn titles_use_ordinal_order() {
    let users = vec![user(1, "b"), user(2, "B"), user(3, "a"), user(4, "A")];
    let titles = section_titles(&section_records(&users));
    assert_eq!(titles, vec!["A", "B", "a", "b"]);
}

#[test]
fn custom_key_function() {
    let words = vec!["kiwi", "apple", "kale", "avocado"];
    let sections = group_into_sections(&words, |w: &&str| w.len().to_string());
    assert_eq!(
        sections,
        vec![
            Section::new("4", vec!["kiwi", "kale"]),
            Section::new("5", vec!["apple"]),
            Section::new("7", vec!["avocado"]),
        ]
    );
}

#[test]
fn flatten_concatenates_in_section_order() {
    let users = vec![user(1, "Petrov"), user(2, "Ivanov"), user(3, "Popov")];
    let flat: Vec<i64> = flatten(&section_records(&users))
        .iter()
        .map(|u| u.id.get())
        .collect();
    assert_eq!(flat, vec![2, 1, 3]);
}

#[test]
fn untitled_section_for_empty_surname() {
    let users = vec![user(1, ""), user(2, "Ivanov")];
    let titles = section_titles(&section_records(&users));
    assert_eq!(titles, vec!["#", "I"]);
}

// ── Layout ───────────────────────────────────────────────────────

#[test]
fn layout_locates_flat_indices() {
    let users = vec![user(1, "Ivanov"), user(2, "Petrov"), user(3, "Ivanchenko")];
    let layout = SectionLayout::new(&users, User::section_key);
    assert_eq!(layout.locate(0), Some(RowPath::new(0, 0)));
    assert_eq!(layout.locate(1), Some(RowPath::new(1, 0)));
    assert_eq!(layout.locate(2), Some(RowPath::new(0, 1)));
    assert_eq!(layout.locate(3), None);
    assert_eq!(layout.section_len(0), 2);
    assert_eq!(layout.section_of("P"), Some(1));
    assert_eq!(layout.section_of("Z"), None);
    assert_eq!(layout.key_at(2), Some("I"));
}

#[test]
fn layout_agrees_with_sections() {
    let users = vec![user(1, "Sidorov"), user(2, "Ivanov"), user(3, "Smirnov"), user(4, "Ivanova")];
    let sections = section_records(&users);
    let layout = SectionLayout::new(&users, User::section_key);
    assert_eq!(layout.titles(), section_titles(&sections).as_slice());
    for (i, u) in users.iter().enumerate() {
        let path = layout.locate(i).unwrap();
        assert_eq!(&sections[path.section].items[path.item], u);
    }
}

// ── Properties ───────────────────────────────────────────────────

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn users_strategy() -> impl Strategy<Value = Vec<User>> {
        prop::collection::vec("[A-Fa-c]{0,4}", 0..40).prop_map(|surnames| {
            surnames
                .into_iter()
                .enumerate()
                .map(|(i, s)| user(i as i64, &s))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn sectioning_is_idempotent(users in users_strategy()) {
            let once = section_records(&users);
            let twice = section_records(&flatten(&once));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn titles_strictly_ascending(users in users_strategy()) {
            let titles = section_titles(&section_records(&users));
            prop_assert!(titles.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn every_user_in_exactly_one_matching_section(users in users_strategy()) {
            let sections = section_records(&users);
            for u in &users {
                let hits: Vec<&Section<User>> = sections
                    .iter()
                    .filter(|s| s.items.contains(u))
                    .collect();
                prop_assert_eq!(hits.len(), 1);
                prop_assert_eq!(&hits[0].title, &u.section_key());
            }
            prop_assert_eq!(flatten(&sections).len(), users.len());
        }

        #[test]
        fn grouping_is_stable(users in users_strategy()) {
            for section in section_records(&users) {
                let positions: Vec<usize> = section
                    .items
                    .iter()
                    .map(|u| users.iter().position(|x| x == u).unwrap())
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }

        #[test]
        fn flattened_order_independent_of_input_order(
            users in users_strategy().prop_flat_map(|u| Just(u).prop_shuffle()),
        ) {
            let flat = flatten(&section_records(&users));
            let keys: Vec<String> = flat.iter().map(User::section_key).collect();
            prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
