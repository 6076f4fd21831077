use crate::services::filter::{
    filter_catalog, filter_map_items, AvailabilityFilter, ALL_CATEGORIES,
};
use crate::stores::seed;

#[test]
fn test_identity_filter_returns_items_unchanged() {
    let items = seed::items();
    let filtered = filter_catalog(&items, "", ALL_CATEGORIES, AvailabilityFilter::All);
    assert_eq!(filtered, items);
}

#[test]
fn test_filtering_is_idempotent() {
    let items = seed::items();
    let once = filter_catalog(&items, "t", "Tools", AvailabilityFilter::Available);
    let twice = filter_catalog(&once, "t", "Tools", AvailabilityFilter::Available);
    assert_eq!(once, twice);
}

#[test]
fn test_search_is_case_insensitive() {
    let items = seed::items();
    let filtered = filter_catalog(&items, "DRILL", ALL_CATEGORIES, AvailabilityFilter::All);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Cordless Drill");
}

#[test]
fn test_search_matches_description() {
    let items = seed::items();
    let filtered = filter_catalog(&items, "waterproof", ALL_CATEGORIES, AvailabilityFilter::All);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "itm002");
}

#[test]
fn test_category_filter_selects_tools() {
    let items = seed::items();
    let filtered = filter_catalog(&items, "", "Tools", AvailabilityFilter::All);
    let ids: Vec<&str> = filtered.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["itm001", "itm005"]);
}

#[test]
fn test_availability_filter_splits_catalog() {
    let items = seed::items();

    let available = filter_catalog(&items, "", ALL_CATEGORIES, AvailabilityFilter::Available);
    assert_eq!(available.len(), 5);
    assert!(available.iter().all(|item| item.available));

    let borrowed = filter_catalog(&items, "", ALL_CATEGORIES, AvailabilityFilter::Borrowed);
    assert_eq!(borrowed.len(), 1);
    assert_eq!(borrowed[0].id, "itm003");
}

#[test]
fn test_filters_compose_by_conjunction() {
    let items = seed::items();
    // "Tools" + search for "ladder" excludes the drill
    let filtered = filter_catalog(&items, "ladder", "Tools", AvailabilityFilter::Available);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "itm005");
}

#[test]
fn test_availability_parse_defaults_to_all() {
    assert_eq!(AvailabilityFilter::parse("Available"), AvailabilityFilter::Available);
    assert_eq!(AvailabilityFilter::parse("Borrowed"), AvailabilityFilter::Borrowed);
    assert_eq!(AvailabilityFilter::parse("All"), AvailabilityFilter::All);
    assert_eq!(AvailabilityFilter::parse("bogus"), AvailabilityFilter::All);
}

#[test]
fn test_map_join_derives_availability() {
    let items = seed::items();
    let locations = seed::map_items();

    let pins = filter_map_items(&locations, &items, ALL_CATEGORIES, AvailabilityFilter::All);
    assert_eq!(pins.len(), 6);

    let crock_pot = pins.iter().find(|pin| pin.item_id == "itm003").unwrap();
    assert_eq!(crock_pot.available, Some(false));
    let drill = pins.iter().find(|pin| pin.item_id == "itm001").unwrap();
    assert_eq!(drill.available, Some(true));
}

#[test]
fn test_map_filters_match_catalog_predicates() {
    let items = seed::items();
    let locations = seed::map_items();

    let tools = filter_map_items(&locations, &items, "Tools", AvailabilityFilter::All);
    let ids: Vec<&str> = tools.iter().map(|pin| pin.item_id.as_str()).collect();
    assert_eq!(ids, ["itm001", "itm005"]);

    let borrowed = filter_map_items(&locations, &items, ALL_CATEGORIES, AvailabilityFilter::Borrowed);
    assert_eq!(borrowed.len(), 1);
    assert_eq!(borrowed[0].item_id, "itm003");
}

#[test]
fn test_map_pin_without_item_excluded_by_availability() {
    // A location whose item is gone joins to available: None, which the
    // Available and Borrowed filters both drop while All keeps it
    let locations = seed::map_items();
    let items: Vec<_> = seed::items()
        .into_iter()
        .filter(|item| item.id != "itm004")
        .collect();

    let all = filter_map_items(&locations, &items, ALL_CATEGORIES, AvailabilityFilter::All);
    assert_eq!(all.len(), 6);
    let orphan = all.iter().find(|pin| pin.item_id == "itm004").unwrap();
    assert_eq!(orphan.available, None);

    let available = filter_map_items(&locations, &items, ALL_CATEGORIES, AvailabilityFilter::Available);
    assert!(available.iter().all(|pin| pin.item_id != "itm004"));

    let borrowed = filter_map_items(&locations, &items, ALL_CATEGORIES, AvailabilityFilter::Borrowed);
    assert!(borrowed.iter().all(|pin| pin.item_id != "itm004"));
}
