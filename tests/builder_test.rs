//! Tests for IndexBuilder

use rsxref::util::testing::init_test_setup;
use rsxref::IndexBuilder;

#[test]
fn given_occurrences_when_building_then_tree_lists_words_ascending() {
    init_test_setup();
    let mut builder = IndexBuilder::new();
    builder.add_occurrence("the", 1);
    builder.add_occurrence("quick", 1);
    builder.add_occurrence("fox", 2);

    let tree = builder.build();
    assert_eq!(tree.words(), vec!["fox", "quick", "the"]);
}

#[test]
fn given_repeated_word_when_building_then_occurrences_exceed_distinct() {
    init_test_setup();
    let mut builder = IndexBuilder::new();
    builder.add_occurrence("the", 1);
    builder.add_occurrence("the", 4);
    builder.add_occurrence("fox", 2);

    assert_eq!(builder.occurrences(), 3);
    assert_eq!(builder.distinct_words(), 2);

    let tree = builder.build();
    assert_eq!(tree.get("the").expect("the is indexed").lines(), &[1, 4]);
}

#[test]
fn given_pairs_when_extending_then_all_sightings_recorded() {
    init_test_setup();
    let mut builder = IndexBuilder::new();
    builder.extend(vec![
        ("b".to_string(), 1),
        ("a".to_string(), 2),
        ("b".to_string(), 3),
    ]);

    assert_eq!(builder.occurrences(), 3);
    let tree = builder.build();
    assert_eq!(tree.words(), vec!["a", "b"]);
    assert_eq!(tree.get("b").expect("b is indexed").lines(), &[1, 3]);
}

#[test]
fn given_empty_builder_when_building_then_tree_empty() {
    init_test_setup();
    let builder = IndexBuilder::new();
    assert_eq!(builder.occurrences(), 0);

    let tree = builder.build();
    assert!(tree.is_empty());
}
