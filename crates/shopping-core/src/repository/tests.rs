//! List Store Tests
//!
//! Tests for ShoppingList through the ListStore trait.

use crate::domain::{IndexOutOfRange, ItemDraft, QuantityKind, ValidationFailure};
use crate::repository::{ListStore, ShoppingList};

fn setup_list(names: &[&str]) -> ShoppingList {
    let mut list = ShoppingList::new();
    for name in names {
        list.add(&ItemDraft::count(*name, "1")).expect("Failed to add");
    }
    list
}

fn names(list: &ShoppingList) -> Vec<&str> {
    list.items().iter().map(|item| item.name()).collect()
}

#[test]
fn test_new_list_is_empty() {
    let list = ShoppingList::new();
    assert!(list.is_empty());
    assert!(list.items().is_empty());
    assert_eq!(list.checked_count(), 0);
}

#[test]
fn test_add_count_item() {
    let mut list = ShoppingList::new();
    list.add(&ItemDraft::count("Milk", "2")).expect("Failed to add");

    assert_eq!(list.len(), 1);
    let item = &list.items()[0];
    assert_eq!(item.name(), "Milk");
    assert_eq!(item.quantity_kind(), QuantityKind::Count);
    assert_eq!(item.count_value(), Some(2));
    assert!(!item.checked());
}

#[test]
fn test_add_measured_item() {
    let mut list = ShoppingList::new();
    list.add(&ItemDraft::measured("Rice", "5", "kg")).expect("Failed to add");

    let item = list.get(0).expect("Item missing");
    assert_eq!(item.name(), "Rice");
    assert_eq!(item.quantity_kind(), QuantityKind::Measured);
    assert_eq!(item.measured_value(), Some("5"));
    assert_eq!(item.measured_unit(), Some("kg"));
    assert!(!item.checked());
}

#[test]
fn test_add_accepts_unlisted_unit() {
    let mut list = ShoppingList::new();
    list.add(&ItemDraft::measured("Flour", "2", "cups")).expect("Failed to add");
    assert_eq!(list.items()[0].measured_unit(), Some("cups"));
}

#[test]
fn test_blank_name_leaves_list_unchanged() {
    let mut list = setup_list(&["Bread"]);
    let before = list.clone();

    let result = list.add(&ItemDraft::count("  ", "3"));
    assert_eq!(result, Err(ValidationFailure::EmptyName));
    assert_eq!(list, before);
}

#[test]
fn test_invalid_count_leaves_list_unchanged() {
    let mut list = setup_list(&["Bread"]);
    let before = list.clone();

    assert_eq!(list.add(&ItemDraft::count("Eggs", "abc")), Err(ValidationFailure::InvalidCount));
    assert_eq!(list.add(&ItemDraft::count("Eggs", "")), Err(ValidationFailure::InvalidCount));
    assert_eq!(list, before);
}

#[test]
fn test_invalid_measurement_leaves_list_unchanged() {
    let mut list = ShoppingList::new();
    assert_eq!(
        list.add(&ItemDraft::measured("Rice", "", "kg")),
        Err(ValidationFailure::InvalidMeasurement)
    );
    assert_eq!(
        list.add(&ItemDraft::measured("Rice", "5", " ")),
        Err(ValidationFailure::MissingUnit)
    );
    assert!(list.is_empty());
}

#[test]
fn test_insertion_order_preserved() {
    let list = setup_list(&["A", "B", "C"]);
    assert_eq!(names(&list), vec!["A", "B", "C"]);
}

#[test]
fn test_duplicate_names_allowed() {
    let list = setup_list(&["Milk", "Milk"]);
    assert_eq!(names(&list), vec!["Milk", "Milk"]);
}

#[test]
fn test_toggle_first_of_two() {
    let mut list = ShoppingList::new();
    list.add(&ItemDraft::count("Milk", "2")).unwrap();
    list.add(&ItemDraft::measured("Rice", "5", "kg")).unwrap();

    assert_eq!(list.toggle(0), Ok(true));
    assert!(list.items()[0].checked());
    assert!(!list.items()[1].checked());
    assert_eq!(list.checked_count(), 1);
}

#[test]
fn test_toggle_twice_restores() {
    let mut list = setup_list(&["Milk", "Eggs"]);
    let before = list.clone();

    list.toggle(1).unwrap();
    list.toggle(1).unwrap();
    assert_eq!(list, before);
}

#[test]
fn test_toggle_out_of_range() {
    let mut list = setup_list(&["Milk", "Eggs"]);
    let before = list.clone();

    assert_eq!(list.toggle(2), Err(IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(list.toggle(usize::MAX), Err(IndexOutOfRange { index: usize::MAX, len: 2 }));
    assert_eq!(list, before);
}

#[test]
fn test_toggle_on_empty_list() {
    let mut list = ShoppingList::new();
    assert_eq!(list.toggle(0), Err(IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn test_list_serializes_as_array() {
    let list = setup_list(&["Milk"]);
    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "name": "Milk", "quantity": { "kind": "count", "value": 1 }, "checked": false }
        ])
    );
}
