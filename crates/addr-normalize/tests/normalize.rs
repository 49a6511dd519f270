//! End-to-end behavior of the address rewrite pipeline.

use addr_normalize::normalize_address;

#[test]
fn terminal_suffix_is_abbreviated_earlier_suffixes_spelled_out() {
    assert_eq!(normalize_address("123 Canyon Lake Circle"), "123 Canyon Lake Cir");
    assert_eq!(normalize_address("7921 Canyon Lk Cir"), "7921 Canyon Lake Cir");
    assert_eq!(normalize_address("7921 Canyon Lake Cir"), "7921 Canyon Lake Cir");
    assert_eq!(normalize_address("456 Oak Street"), "456 Oak St");
    assert_eq!(normalize_address("123 Lake Shore Drive"), "123 Lake Shore Dr");
    assert_eq!(normalize_address("456 Hill Top Lane"), "456 Hill Top Ln");
    assert_eq!(normalize_address("789 Mountain View Circle"), "789 Mountain View Cir");
    assert_eq!(normalize_address("321 River Canyon Road"), "321 River Canyon Rd");
}

#[test]
fn spelled_and_abbreviated_directionals_agree() {
    assert_eq!(normalize_address("123 Main St NE"), "123 Main St NE");
    assert_eq!(normalize_address("123 Main St Northeast"), "123 Main St NE");
    assert_eq!(normalize_address("456 Oak Ave SW"), "456 Oak Ave SW");
    assert_eq!(normalize_address("456 Oak Ave Southwest"), "456 Oak Ave SW");
}

#[test]
fn directionals_are_upper_cased_whatever_the_input_casing() {
    assert_eq!(normalize_address("456 oak ave sw"), "456 Oak Ave SW");
    assert_eq!(normalize_address("po box 123"), "PO Box 123");
}

#[test]
fn single_letter_directionals_also_hold_the_last_suffix_position() {
    // "N" title-cases to itself, so it is a reverse-map key and pushes the
    // true street suffix into full form; "North" abbreviates to the same.
    assert_eq!(normalize_address("789 Pine Dr N"), "789 Pine Drive N");
    assert_eq!(normalize_address("789 Pine Dr North"), "789 Pine Drive N");
}

#[test]
fn hash_without_designator_neighbor_becomes_unit() {
    assert_eq!(normalize_address("456 Oak Ave #5"), "456 Oak Ave Unit 5");
    assert_eq!(normalize_address("321 Elm St #2B"), "321 Elm St Unit 2B");
}

#[test]
fn hash_next_to_designator_is_dropped() {
    assert_eq!(normalize_address("789 Pine Dr, Unit #3"), "789 Pine Dr Unit 3");
}

#[test]
fn designators_pass_through_unchanged() {
    assert_eq!(normalize_address("654 Maple Ave, Suite 100"), "654 Maple Ave Suite 100");
    assert_eq!(normalize_address("987 Cedar Ln Building C"), "987 Cedar Ln Building C");
    assert_eq!(normalize_address("147 Birch Rd Floor 2"), "147 Birch Rd Floor 2");
    assert_eq!(normalize_address("123 Main St Unit 5"), "123 Main St Unit 5");
}

#[test]
fn designators_that_are_also_suffix_entries_occupy_the_last_position() {
    // "Apt"/"Apartment" sit in both tables, so the street suffix before them
    // is no longer terminal and spells out.
    assert_eq!(normalize_address("123 Main St, Apt 4"), "123 Main Street Apt 4");
    assert_eq!(normalize_address("321 Elm St Apt B"), "321 Elm Street Apt B");
    assert_eq!(
        normalize_address("456 Oak Ave Apartment 3A"),
        "456 Oak Avenue Apartment 3A"
    );
    assert_eq!(
        normalize_address("789 Pine Lake Drive Apt 4A"),
        "789 Pine Lake Drive Apt 4A"
    );
}

#[test]
fn combined_suffix_directional_designator_addresses() {
    assert_eq!(
        normalize_address("123 Canyon Lake Cir NE Unit 5"),
        "123 Canyon Lake Cir NE Unit 5"
    );
    assert_eq!(
        normalize_address("456 Oak Street #3B Southwest"),
        "456 Oak St Unit 3B SW"
    );
    assert_eq!(
        normalize_address("321 Maple Hill Circle Suite 100 NE"),
        "321 Maple Hill Cir Suite 100 NE"
    );
}

#[test]
fn fractions_survive_punctuation_stripping() {
    assert_eq!(normalize_address("50 Lake Dr #1/2"), "50 Lake Dr Unit 1/2");
    assert_eq!(normalize_address("25/1/2 Main St"), "25 1/2 Main St");
}

#[test]
fn ordinals_render_lower_case() {
    assert_eq!(normalize_address("123 2nd Street"), "123 2nd St");
    assert_eq!(normalize_address("123 2ND Street"), "123 2nd St");
}

#[test]
fn duplicate_designators_collapse() {
    assert_eq!(normalize_address("123 Main St Unit Unit 5"), "123 Main St Unit 5");
    assert_eq!(normalize_address("123 Main St Unit unit 5"), "123 Main St Unit 5");
}

#[test]
fn hyphens_become_spaces() {
    assert_eq!(normalize_address("123-125 Main Street"), "123 125 Main St");
}

#[test]
fn corrupted_newline_fragments_are_repaired() {
    assert_eq!(normalize_address("123 Main St/n Apt 4"), "123 Main Street Apt 4");
    assert_eq!(normalize_address("/n 456 Oak Street"), "456 Oak St");
}

#[test]
fn concatenated_unit_numbers_are_split() {
    assert_eq!(normalize_address("100 Center25"), "100 Ctr 25");
}

#[test]
fn blank_input_passes_through_unchanged() {
    assert_eq!(normalize_address(""), "");
    assert_eq!(normalize_address("   "), "   ");
}

#[test]
fn input_that_cleans_to_nothing_returns_the_original() {
    assert_eq!(normalize_address("@@!!"), "@@!!");
    assert_eq!(normalize_address("..."), "...");
    assert_eq!(normalize_address("Unlisted"), "Unlisted");
    assert_eq!(normalize_address("See Mailing Address"), "See Mailing Address");
}

#[test]
fn hash_only_input_introduces_the_unit_keyword() {
    // Hash resolution runs before punctuation stripping, so a hash-bearing
    // token never collapses to nothing.
    assert_eq!(normalize_address("##@@"), "Unit");
}

#[test]
fn throwaway_phrases_are_removed_from_real_addresses() {
    assert_eq!(normalize_address("123 Main St See Mailing Address"), "123 Main St");
}

#[test]
fn already_normalized_addresses_are_fixed_points() {
    for address in [
        "123 Canyon Lake Cir",
        "456 Oak Ave Unit 5",
        "123 Main St NE",
        "789 Pine Drive N",
        "123 Main Street Apt 4",
        "50 Lake Dr Unit 1/2",
        "PO Box 123",
    ] {
        assert_eq!(normalize_address(address), address);
    }
}
