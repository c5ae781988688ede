use super::*;
use crate::{ArrivalItem, BannerSlide, CurtainType, EntryId};

#[test]
fn check_keys_accepts_distinct_entries() {
    let props = HomeProps {
        curtain_types: vec![
            CurtainType { id: EntryId::new("a"), name: "A".into(), ..CurtainType::default() },
            CurtainType { id: EntryId::new("b"), name: "B".into(), ..CurtainType::default() },
        ],
        ..HomeProps::default()
    };
    assert!(check_keys(&props).is_ok());
}

#[test]
fn check_keys_reports_duplicate_arrival_id() {
    let props = HomeProps {
        new_arrivals: vec![
            ArrivalItem { id: EntryId::new("x"), title: "One".into(), ..ArrivalItem::default() },
            ArrivalItem { id: EntryId::new("x"), title: "Two".into(), ..ArrivalItem::default() },
        ],
        ..HomeProps::default()
    };
    let err = check_keys(&props).unwrap_err();
    assert_eq!(err.to_string(), "duplicate id 'x' in newArrivals");
}

#[test]
fn lint_flags_blank_images_and_links() {
    let props = HomeProps {
        banner: vec![BannerSlide { id: EntryId::new("slide-1"), ..BannerSlide::default() }],
        curtain_types: vec![CurtainType {
            id: EntryId::new("sheers"),
            name: "Sheer Curtains".into(),
            image: String::new(),
            href: "https://elsewhere.test/sheers".into(),
        }],
        new_arrivals: vec![ArrivalItem {
            id: EntryId::new("sheer"),
            title: "Sheer".into(),
            image: "img.jpg".into(),
            ..ArrivalItem::default()
        }],
        ..HomeProps::default()
    };
    let kinds: Vec<_> = lint(&props).into_iter().map(|w| (w.list, w.kind)).collect();
    assert_eq!(
        kinds,
        [
            ("banner", WarningKind::BlankImage),
            ("curtainTypes", WarningKind::BlankImage),
            ("curtainTypes", WarningKind::ExternalHref),
            ("newArrivals", WarningKind::BlankHref),
        ]
    );
}

#[test]
fn warning_display_names_entry() {
    let warning = ContentWarning { list: "banner", key: "slide-2".into(), kind: WarningKind::BlankImage };
    assert_eq!(warning.to_string(), "banner entry 'slide-2' has no image url");
}
