//! Export tests over a generated fixture list.

use larder_core::export::{CSV_HEADER, export, export_as_csv, export_as_text, export_for_whatsapp};
use larder_core::{ExportFormat, ShoppingConfig, ShoppingList};

use crate::common::{fixture_book, fixture_plan};

fn fixture_list() -> ShoppingList {
    let mut list = ShoppingList::generate(&fixture_plan(), &fixture_book(), &ShoppingConfig::default());
    list.toggle("bread", "piece");
    list.set_note("eggs", "piece", Some("large".to_string()));
    list
}

#[test]
fn test_text_export_of_fixture() {
    let text = export_as_text(&fixture_list().items, "Shopping List");
    let expected = "\
Shopping List
=============

Produce
☐ 1 ½ clove garlic
    Used in: Pasta Night
☐ 2 tbsp garlic
    Used in: Garlic Bread

Dairy & Eggs
☐ 6 piece eggs
    Note: large
    Used in: R1, R2
☐ ¼ cup parmesan cheese
    Used in: Pasta Night

Bakery
✓ 2 piece bread
    Used in: Garlic Bread

Grains & Pasta
☐ ½ lb spaghetti pasta
    Used in: Pasta Night

Oils & Condiments
☐ 5 tbsp olive oil
    Used in: Pasta Night, Garlic Bread
";
    assert_eq!(text, expected);
}

#[test]
fn test_csv_export_of_fixture() {
    let csv_text = export_as_csv(&fixture_list().items);
    assert!(csv_text.starts_with(CSV_HEADER));

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 7);

    let eggs = rows.iter().find(|row| &row[1] == "eggs").unwrap();
    assert_eq!(&eggs[0], "Dairy & Eggs");
    assert_eq!(&eggs[2], "6");
    assert_eq!(&eggs[3], "piece");
    assert_eq!(&eggs[4], "false");
    assert_eq!(&eggs[5], "R1; R2");
    assert_eq!(&eggs[6], "large");

    let bread = rows.iter().find(|row| &row[1] == "bread").unwrap();
    assert_eq!(&bread[4], "true");
}

#[test]
fn test_whatsapp_export_of_fixture() {
    let message = export_for_whatsapp(&fixture_list().items, "Week 1");
    assert!(message.starts_with("🛒 *Week 1*\n"));
    assert!(message.contains("\n*Bakery*\n✅ 2 piece bread\n"));
    assert!(message.contains("☑️ 6 piece eggs _(large)_\n"));
    assert!(message.ends_with("\n_Total: 7 items_\n"));
}

#[test]
fn test_export_dispatch() {
    let items = fixture_list().items;
    assert_eq!(export(&items, "csv", "ignored"), export_as_csv(&items));
    assert_eq!(
        ExportFormat::WhatsApp.export(&items, "T"),
        export_for_whatsapp(&items, "T")
    );
    // Unsupported keys fall back to the plain-text rendering
    assert_eq!(export(&items, "docx", "T"), export_as_text(&items, "T"));
}
