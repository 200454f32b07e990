//! Formatting realistic assistant replies end to end.

use anang_chat::{Block, BulletValue, Inline, format_message};
use anang_core::enums::Certification;
use pretty_assertions::assert_eq;

#[test]
fn restaurant_listing_reply() {
    let reply = "**RESTAURANTS**\n**Sage Café**\n• Location: https://maps.example/x\n• Green Plate Certification: Gold";
    let blocks = format_message(reply);

    assert_eq!(
        blocks,
        vec![
            Block::SectionHeader {
                text: "RESTAURANTS".into()
            },
            Block::ItemHeader {
                text: "Sage Café".into()
            },
            Block::Bullet {
                label: "Location".into(),
                value: "https://maps.example/x".into()
            },
            Block::Bullet {
                label: "Green Plate Certification".into(),
                value: "Gold".into()
            },
        ]
    );
    assert_eq!(
        blocks[2].bullet_value(),
        Some(BulletValue::Link {
            href: "https://maps.example/x".into(),
            text: "Find Location".into()
        })
    );
    assert_eq!(
        blocks[3].bullet_value(),
        Some(BulletValue::Certification {
            level: Some(Certification::Gold),
            leaves: 3
        })
    );
}

#[test]
fn itinerary_with_prose_and_spacing() {
    let reply = "Here is a **3-day** plan.\n\n**DAY ONE & TWO**\n• Morning: Market Square\n\n\n• Evening: Fort Henry sunset";
    let blocks = format_message(reply);

    assert_eq!(blocks.len(), 6);
    assert_eq!(
        blocks[0],
        Block::Text {
            inlines: vec![
                Inline::Plain("Here is a ".into()),
                Inline::Strong("3-day".into()),
                Inline::Plain(" plan.".into()),
            ]
        }
    );
    assert_eq!(blocks[1], Block::Spacing);
    assert!(matches!(blocks[2], Block::SectionHeader { .. }));
    assert_eq!(blocks[4], Block::Spacing);
}

#[test]
fn blocks_serialize_with_kind_tags() {
    let json = serde_json::to_value(format_message("**Sage Café**\nopen **late")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "item_header", "text": "Sage Café" },
            { "kind": "text", "inlines": [{ "kind": "plain", "text": "open **late" }] }
        ])
    );
}
