use hueflow_core::{array_move, presets, ColorRange, CUSTOM_PALETTE_NAME};
use proptest::prelude::*;

fn custom(colors: &[&str]) -> ColorRange {
    ColorRange::custom(colors.iter().map(|c| c.to_string()).collect())
}

#[test]
fn test_add_duplicates_last_color() {
    let palette = custom(&["#000000", "#FF0000"]);
    let colors = palette.with_color_added("#FFFFFF");
    assert_eq!(colors, vec!["#000000", "#FF0000", "#FF0000"]);
    // The source palette is untouched
    assert_eq!(palette.len(), 2);
}

#[test]
fn test_delete_keeps_last_color() {
    let single = custom(&["#ABCDEF"]);
    assert_eq!(single.with_color_deleted(0), vec!["#ABCDEF"]);

    let pair = custom(&["#000000", "#FFFFFF"]);
    assert_eq!(pair.with_color_deleted(0), vec!["#FFFFFF"]);
}

#[test]
fn test_update_uppercases_and_passes_through() {
    let palette = custom(&["#000000", "#FFFFFF"]);
    assert_eq!(
        palette.with_color_updated(1, "#a0b0c0"),
        vec!["#000000", "#A0B0C0"]
    );
    // Malformed text is stored as typed, uppercased
    assert_eq!(palette.with_color_updated(0, "#zz"), vec!["#ZZ", "#FFFFFF"]);
    assert_eq!(palette.with_color_updated(5, "#123456"), palette.colors);
}

#[test]
fn test_preset_to_custom_and_back() {
    let preset = presets::find("Ice And Fire").unwrap();
    let editing = ColorRange::custom(preset.colors.clone());
    assert_eq!(editing.name, CUSTOM_PALETTE_NAME);
    let confirmed = editing.finalized();
    assert_eq!(confirmed.colors, preset.colors);
    assert_eq!(confirmed.category, "custom");
}

proptest! {
    #[test]
    fn prop_array_move_is_permutation(
        items in proptest::collection::vec(0u32..1000, 1..20),
        from in 0usize..25,
        to in 0usize..25,
    ) {
        let moved = array_move(&items, from, to);
        prop_assert_eq!(moved.len(), items.len());

        let mut a = items.clone();
        let mut b = moved.clone();
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);

        if from < items.len() {
            let target = to.min(items.len() - 1);
            prop_assert_eq!(moved[target], items[from]);
        } else {
            prop_assert_eq!(moved, items);
        }
    }

    #[test]
    fn prop_delete_never_empties(count in 1usize..8, index in 0usize..10) {
        let palette = ColorRange::custom(vec!["#000000".to_string(); count]);
        let colors = palette.with_color_deleted(index);
        prop_assert!(!colors.is_empty());
        if count > 1 && index < count {
            prop_assert_eq!(colors.len(), count - 1);
        } else {
            prop_assert_eq!(colors.len(), count);
        }
    }
}
