//! Tests to verify the Java fixture extracts correctly

use icongen_core::extract::extract_icons;

const FIXTURE: &str = include_str!("fixtures/SiblingIcons.java");
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];

#[test]
fn test_fixture_yields_all_four_icons() {
    let icons = extract_icons(FIXTURE, "String");
    let names: Vec<_> = icons
        .iter()
        .map(|i| i.qualified_name())
        .collect();
    assert_eq!(
        names,
        vec![
            "foo.SiblingIcons.AIcon",
            "foo.OtherIcons.BIcon",
            "foo.OtherIcons.CIcon",
            "foo.OtherIcons.DIcon",
        ]
    );
}

#[test]
fn test_fixture_payloads_are_png() {
    for icon in extract_icons(FIXTURE, "String") {
        assert_eq!(
            &icon.content[..4],
            PNG_MAGIC,
            "{} is not a PNG payload",
            icon.field_name
        );
    }
}

#[test]
fn test_fixture_matches_builtin_catalogs() {
    use icongen_core::builtin::{OTHER_ICONS, SIBLING_ICONS};

    let icons = extract_icons(FIXTURE, "String");

    let a = icons.iter().find(|i| i.field_name == "AIcon").unwrap();
    assert_eq!(a.encoded, SIBLING_ICONS.get("AIcon").unwrap());

    for name in ["BIcon", "CIcon", "DIcon"] {
        let icon = icons.iter().find(|i| i.field_name == name).unwrap();
        assert_eq!(icon.encoded, OTHER_ICONS.get(name).unwrap());
        assert_eq!(icon.content, OTHER_ICONS.decode(name).unwrap());
    }
}

#[test]
fn test_fixture_with_other_field_type_yields_nothing() {
    assert!(extract_icons(FIXTURE, "Base64Png").is_empty());
}
