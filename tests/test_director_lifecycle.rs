//! Integration tests for the contacts director.
//!
//! These tests drive create, search, edit and remove through a scripted
//! console against an in-memory store, checking both the collection and what
//! was persisted.

mod mocks;

use contact_book::{Console, ContactId, ContactVariant, ContactsDirector, ScriptedConsole};
use mocks::MockContactStore;

fn director_with(store: &MockContactStore) -> ContactsDirector {
    ContactsDirector::new(Box::new(store.clone()))
}

fn add(director: &mut ContactsDirector, variant: ContactVariant, inputs: &[&str]) -> ContactId {
    let mut console = ScriptedConsole::new(inputs.iter().copied());
    director.create_contact(variant, &mut console).unwrap()
}

/// Three contacts: a person, an organization with a "0176" number, a person.
fn populated(store: &MockContactStore) -> ContactsDirector {
    let mut director = director_with(store);
    add(
        &mut director,
        ContactVariant::Person,
        &["John", "Smith", "1970-01-01", "M", "(555) 123-4567"],
    );
    add(
        &mut director,
        ContactVariant::Organization,
        &["Pizza Shop", "Wall St. 1", "+1-202-555-0176"],
    );
    add(
        &mut director,
        ContactVariant::Person,
        &["Alice", "Wong", "1985-06-15", "F", "+44 20 7946 0958"],
    );
    director
}

#[test]
fn test_invalid_person_inputs_are_reported_and_replaced() {
    let store = MockContactStore::new();
    let mut director = director_with(&store);
    let mut console = ScriptedConsole::new(["Ann", "Lee", "", "X", "not-a-phone"]);

    director
        .create_contact(ContactVariant::Person, &mut console)
        .unwrap();

    assert_eq!(
        console.messages(),
        [
            "Bad birth date!",
            "Bad gender!",
            "Wrong number format!",
            "The record added."
        ]
    );
    let contact = &director.contacts()[0];
    assert_eq!(contact.birth_date(), Some("[no data]"));
    assert_eq!(contact.gender(), Some("[no data]"));
    assert_eq!(contact.number(), "[no number]");
    assert_eq!(contact.full_name(), "Ann Lee");
}

#[test]
fn test_organization_inputs_are_kept_verbatim() {
    let store = MockContactStore::new();
    let mut director = director_with(&store);
    let mut console = ScriptedConsole::new(["Acme", "221B Baker St", "+1-202-555-0176"]);

    director
        .create_contact(ContactVariant::Organization, &mut console)
        .unwrap();

    let contact = &director.contacts()[0];
    assert_eq!(contact.name(), "Acme");
    assert_eq!(contact.address(), Some("221B Baker St"));
    assert_eq!(contact.number(), "+1-202-555-0176");
    assert_eq!(console.messages(), ["The record added."]);
}

#[test]
fn test_new_contact_timestamps_start_equal() {
    let store = MockContactStore::new();
    let director = populated(&store);

    for contact in director.contacts() {
        assert_eq!(contact.time_created(), contact.time_updated());
    }
}

#[test]
fn test_every_mutation_is_persisted() {
    let store = MockContactStore::new();
    let mut director = populated(&store);
    assert_eq!(store.get_call_count("save"), 3);

    let id = director.contacts()[1].id().clone();
    let mut console = ScriptedConsole::new(["address", "Main St. 2"]);
    director.edit_contact(&id, &mut console).unwrap();
    assert_eq!(store.get_call_count("save"), 4);

    director.remove_contact(&id, &mut console);
    assert_eq!(store.get_call_count("save"), 5);

    let saved = store.saved().unwrap();
    assert_eq!(saved.as_slice(), director.contacts());
    assert_eq!(saved.len(), 2);
}

#[test]
fn test_removing_non_member_is_noop() {
    let store = MockContactStore::new();
    let mut director = populated(&store);
    store.reset_call_counts();

    let mut elsewhere = director_with(&MockContactStore::new());
    let stranger = add(
        &mut elsewhere,
        ContactVariant::Person,
        &["John", "Smith", "1970-01-01", "M", "(555) 123-4567"],
    );

    let mut console = ScriptedConsole::default();
    assert!(!director.remove_contact(&stranger, &mut console));

    assert_eq!(director.size(), 3);
    assert!(console.messages().is_empty());
    assert_eq!(store.get_call_count("save"), 0);
}

#[test]
fn test_identical_values_are_distinct_contacts() {
    let store = MockContactStore::new();
    let mut director = director_with(&store);
    let inputs = ["Ann", "Lee", "1990-01-01", "F", "+1 234"];
    let first = add(&mut director, ContactVariant::Person, &inputs);
    let second = add(&mut director, ContactVariant::Person, &inputs);
    assert_ne!(first, second);

    let mut console = ScriptedConsole::default();
    director.remove_contact(&second, &mut console);

    assert_eq!(director.size(), 1);
    assert_eq!(director.contacts()[0].id(), &first);
}

#[test]
fn test_search_result_resolves_to_listed_contact() {
    let store = MockContactStore::new();
    let mut director = populated(&store);

    let found: Vec<ContactId> = director
        .search_query("0176")
        .unwrap()
        .into_iter()
        .map(|c| c.id().clone())
        .collect();
    assert_eq!(found.len(), 1);

    let from_search = director.contact(1, true).unwrap();
    let from_list = director.contact(2, false).unwrap();
    assert_eq!(from_search.id(), from_list.id());
    assert_eq!(from_search.id(), &found[0]);
    assert_eq!(from_search.name(), "Pizza Shop");
}

#[test]
fn test_search_is_case_insensitive_and_literal() {
    let store = MockContactStore::new();
    let mut director = populated(&store);

    assert_eq!(director.search_query("SMITH").unwrap().len(), 1);
    assert_eq!(director.search_query("(555)").unwrap().len(), 1);
    assert_eq!(director.search_query("wall st.").unwrap().len(), 1);
    assert_eq!(director.search_query(".*").unwrap().len(), 0);
    assert_eq!(director.search_query("").unwrap().len(), 3);
}

#[test]
fn test_search_results_keep_collection_order() {
    let store = MockContactStore::new();
    let mut director = populated(&store);

    let names: Vec<String> = director
        .search_query("-")
        .unwrap()
        .into_iter()
        .map(|c| c.full_name())
        .collect();
    assert_eq!(names, ["John Smith", "Pizza Shop", "Alice Wong"]);
}

#[test]
fn test_edit_changes_only_that_field() {
    let store = MockContactStore::new();
    let mut director = populated(&store);
    let before = director.contacts()[0].clone();

    let mut console = ScriptedConsole::new(["gender", "F"]);
    assert!(director.edit_contact(before.id(), &mut console).unwrap());

    let after = &director.contacts()[0];
    assert_eq!(after.gender(), Some("F"));
    assert_eq!(after.id(), before.id());
    assert_eq!(after.name(), before.name());
    assert_eq!(after.surname(), before.surname());
    assert_eq!(after.birth_date(), before.birth_date());
    assert_eq!(after.number(), before.number());
    assert_eq!(after.time_created(), before.time_created());
    assert!(after.time_created() <= after.time_updated());
}

#[test]
fn test_edit_with_invalid_value_stores_sentinel() {
    let store = MockContactStore::new();
    let mut director = populated(&store);
    let id = director.contacts()[2].id().clone();

    let mut console = ScriptedConsole::new(["phone", "number", "12--34"]);
    director.edit_contact(&id, &mut console).unwrap();

    assert_eq!(director.contacts()[2].number(), "[no number]");
    assert_eq!(
        console.messages(),
        ["Wrong number format!", "The record updated!"]
    );
    assert_eq!(console.prompts().len(), 3);
}

#[test]
fn test_creation_time_survives_repeated_edits() {
    let store = MockContactStore::new();
    let mut director = populated(&store);
    let id = director.contacts()[0].id().clone();
    let created = director.contacts()[0].time_created();
    let mut last_updated = director.contacts()[0].time_updated();

    for (field, value) in [
        ("name", "Jon"),
        ("surname", "Smyth"),
        ("number", "bad--number"),
        ("birthDate", "1971-02-03"),
        ("gender", "F"),
        ("name", "John"),
    ] {
        let mut console = ScriptedConsole::new([field, value]);
        assert!(director.edit_contact(&id, &mut console).unwrap());

        let contact = &director.contacts()[0];
        assert_eq!(contact.id(), &id);
        assert_eq!(contact.time_created(), created);
        assert!(contact.time_updated() >= last_updated);
        assert!(contact.time_created() <= contact.time_updated());
        last_updated = contact.time_updated();
    }

    let contact = &director.contacts()[0];
    assert_eq!(contact.full_name(), "John Smyth");
    assert_eq!(contact.number(), "[no number]");
    assert_eq!(contact.birth_date(), Some("1971-02-03"));
    assert_eq!(contact.gender(), Some("F"));
    assert_eq!(store.saved().unwrap()[0].time_created(), created);
}

#[test]
fn test_edit_keeps_position_in_list() {
    let store = MockContactStore::new();
    let mut director = populated(&store);
    let id = director.contacts()[1].id().clone();

    let mut console = ScriptedConsole::new(["name", "Pasta Shop"]);
    director.edit_contact(&id, &mut console).unwrap();

    let names: Vec<&str> = director.contacts().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["John", "Pasta Shop", "Alice"]);
}

#[test]
fn test_removed_contact_drops_out_of_search_view() {
    let store = MockContactStore::new();
    let mut director = populated(&store);
    director.search_query("0176").unwrap();

    let id = director.contact(1, true).unwrap().id().clone();
    let mut console = ScriptedConsole::default();
    director.remove_contact(&id, &mut console);

    assert!(director.contact(1, true).is_none());
    assert!(!director.print_searched_contact(1, &mut console));
}

#[test]
fn test_save_failure_is_reported_and_session_continues() {
    let store = MockContactStore::new();
    store.set_fail_saves(true);
    let mut director = director_with(&store);
    let mut console = ScriptedConsole::new(["Acme", "221B Baker St", "+1-202-555-0176"]);

    director
        .create_contact(ContactVariant::Organization, &mut console)
        .unwrap();

    assert_eq!(director.size(), 1);
    assert_eq!(
        console.messages(),
        ["Problem in saving contacts to a file!", "The record added."]
    );
    assert!(store.saved().is_none());
}

#[test]
fn test_load_restores_saved_collection() {
    let store = MockContactStore::new();
    let original = populated(&store);

    let mut restored = director_with(&store);
    let mut console = ScriptedConsole::default();
    restored.load(&mut console);

    assert_eq!(restored.contacts(), original.contacts());
    assert!(console.messages().is_empty());
    assert_eq!(store.get_call_count("load"), 1);
}

#[test]
fn test_load_failure_starts_empty() {
    let store = MockContactStore::new();
    populated(&store);
    store.set_fail_loads(true);

    let mut director = director_with(&store);
    let mut console = ScriptedConsole::default();
    director.load(&mut console);

    assert_eq!(director.size(), 0);
    assert_eq!(console.messages().len(), 1);
}

#[test]
fn test_load_with_nothing_saved() {
    let store = MockContactStore::new();
    let mut director = director_with(&store);
    let mut console = ScriptedConsole::default();

    director.load(&mut console);

    assert_eq!(director.size(), 0);
    assert_eq!(console.messages(), ["memory file doesn't exist"]);
}

#[test]
fn test_console_trait_object_drives_director() {
    let store = MockContactStore::new();
    let mut director = populated(&store);
    let mut scripted = ScriptedConsole::default();
    let console: &mut dyn Console = &mut scripted;

    director.report_size(console);
    assert!(director.list_all(console));

    assert_eq!(
        scripted.messages(),
        [
            "The Phone Book has 3 records.",
            "1. John Smith",
            "2. Pizza Shop",
            "3. Alice Wong"
        ]
    );
}
