use pretty_assertions::assert_eq;
use roster_types::{
    section_key_of, Group, GroupId, Record, User, UserId, DEFAULT_USER_PHOTO_URL,
    NONEXISTENT_GROUP_PHOTO_URL, UNTITLED_SECTION,
};
use std::str::FromStr;

// ── Ids ──────────────────────────────────────────────────────────

#[test]
fn user_id_display_roundtrip() {
    let id = UserId::new(1_234_567);
    let parsed: UserId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn group_id_parse_trims_whitespace() {
    assert_eq!(GroupId::parse(" 42 ").unwrap(), GroupId::new(42));
}

#[test]
fn id_from_str_invalid() {
    assert!(UserId::from_str("abc").is_err());
    assert!(GroupId::from_str("").is_err());
}

#[test]
fn id_serde_is_transparent() {
    let json = serde_json::to_string(&UserId::new(7)).unwrap();
    assert_eq!(json, "7");
}

// ── User ─────────────────────────────────────────────────────────

#[test]
fn user_deserializes_remote_shape() {
    let json = r#"{
        "id": 101,
        "first_name": "Ivan",
        "last_name": "Petrov",
        "online": 1,
        "photo_100": "https://example.com/ivan.jpg"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, UserId::new(101));
    assert_eq!(user.name, "Ivan");
    assert_eq!(user.surname, "Petrov");
    assert!(user.is_online);
    assert_eq!(user.avatar_url, "https://example.com/ivan.jpg");
}

#[test]
fn user_missing_optional_fields_use_defaults() {
    let json = r#"{"id": 5, "first_name": "Anna", "last_name": "Ivanova"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert!(!user.is_online);
    assert_eq!(user.avatar_url, DEFAULT_USER_PHOTO_URL);
}

#[test]
fn user_serializes_flag_as_integer() {
    let user = User::new(1, "Anna", "Ivanova").online(true);
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["online"], 1);
    assert_eq!(value["last_name"], "Ivanova");
}

#[test]
fn user_record_fields() {
    let user = User::new(3, "Petr", "Sidorov").online(true);
    assert_eq!(user.id(), UserId::new(3));
    assert!(user.is_active());
    assert_eq!(user.search_text(), "PetrSidorov");
    assert_eq!(user.section_key(), "S");
    assert_eq!(user.full_name(), "Petr Sidorov");
}

#[test]
fn user_with_empty_surname_goes_to_untitled_section() {
    let user = User::new(4, "Cher", "");
    assert_eq!(user.section_key(), UNTITLED_SECTION);
    assert_eq!(user.full_name(), "Cher");
}

// ── Group ────────────────────────────────────────────────────────

#[test]
fn group_deserializes_remote_shape() {
    let json = r#"{
        "id": 9,
        "name": "Rust Users",
        "is_member": 1,
        "members_count": 1500,
        "photo_100": "https://example.com/g.png"
    }"#;
    let group: Group = serde_json::from_str(json).unwrap();
    assert_eq!(group.id, GroupId::new(9));
    assert!(group.is_member);
    assert_eq!(group.members(), 1500);
}

#[test]
fn group_without_count_or_photo() {
    let json = r#"{"id": 9, "name": "Closed", "is_member": 0}"#;
    let group: Group = serde_json::from_str(json).unwrap();
    assert_eq!(group.members_count, None);
    assert_eq!(group.members(), 0);
    assert_eq!(group.avatar_url, NONEXISTENT_GROUP_PHOTO_URL);
}

#[test]
fn group_record_fields() {
    let group = Group::new(2, "chess club").member(true).with_members(12);
    assert!(group.is_active());
    assert_eq!(group.search_text(), "chess club");
    assert_eq!(group.section_key(), "c");
}

// ── Section keys ─────────────────────────────────────────────────

#[test]
fn section_key_takes_first_char_not_first_byte() {
    assert_eq!(section_key_of("Ёжиков"), "Ё");
    assert_eq!(section_key_of("Ivanov"), "I");
    assert_eq!(section_key_of(""), "#");
}
