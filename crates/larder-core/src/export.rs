//! Shopping list exporters.
//!
//! Three renderings of a categorized list, all returned as strings for the
//! caller to display, save or hand to a share sheet:
//!
//! | Format | Checked | Unchecked | Notes |
//! |--------|---------|-----------|-------|
//! | Text | `✓` | `☐` | Titled, category sections, notes and "used in" indented |
//! | CSV | `true` | `false` | One row per item with a fixed header |
//! | WhatsApp | `✅` | `☑️` | Bold headings, ends with an item count |
//!
//! Within each category, items are sorted by ingredient id. Categories
//! appear in aisle order (the declaration order of [`Category`]).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::category::Category;
use crate::fraction::format_quantity;
use crate::types::ShoppingListItem;

/// CSV header row.
pub const CSV_HEADER: &str = "Category,Ingredient,Quantity,Unit,Checked,Used In,Notes";

// ============================================================================
// ExportFormat
// ============================================================================

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain text listing.
    #[default]
    Text,
    /// Comma-separated values.
    Csv,
    /// Chat message with emoji checkboxes.
    WhatsApp,
}

impl ExportFormat {
    /// Resolves a format key. Unknown keys fall back to [`ExportFormat::Text`].
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Self::Text,
            "csv" => Self::Csv,
            "whatsapp" | "wa" => Self::WhatsApp,
            other => {
                tracing::warn!(format = %other, "Unknown export format, using plain text");
                Self::Text
            }
        }
    }

    /// Canonical key for this format.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::WhatsApp => "whatsapp",
        }
    }

    /// File extension used when saving an export.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Text | Self::WhatsApp => "txt",
            Self::Csv => "csv",
        }
    }

    /// Renders `items` in this format.
    pub fn export(&self, items: &[ShoppingListItem], title: &str) -> String {
        match self {
            Self::Text => export_as_text(items, title),
            Self::Csv => export_as_csv(items),
            Self::WhatsApp => export_for_whatsapp(items, title),
        }
    }
}

/// Renders `items` using a format key, falling back to plain text.
pub fn export(items: &[ShoppingListItem], format_key: &str, title: &str) -> String {
    ExportFormat::from_key(format_key).export(items, title)
}

// ============================================================================
// Grouping
// ============================================================================

/// Groups items by category, each group sorted by ingredient id.
pub fn group_by_category(items: &[ShoppingListItem]) -> BTreeMap<Category, Vec<&ShoppingListItem>> {
    let mut groups: BTreeMap<Category, Vec<&ShoppingListItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.category).or_default().push(item);
    }
    for group in groups.values_mut() {
        group.sort_by(|a, b| a.ingredient_id.cmp(&b.ingredient_id));
    }
    groups
}

fn item_summary(item: &ShoppingListItem) -> String {
    format!(
        "{} {} {}",
        format_quantity(item.quantity),
        item.unit,
        item.ingredient_id
    )
}

// ============================================================================
// Plain text
// ============================================================================

/// Plain-text rendering of a list.
struct TextExport<'a> {
    items: &'a [ShoppingListItem],
    title: &'a str,
}

impl fmt::Display for TextExport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;

        if self.items.is_empty() {
            return writeln!(f, "\nNothing to buy.");
        }

        for (category, group) in group_by_category(self.items) {
            writeln!(f, "\n{category}")?;
            for item in group {
                let glyph = if item.checked { "✓" } else { "☐" };
                writeln!(f, "{glyph} {}", item_summary(item))?;
                if let Some(note) = &item.note {
                    writeln!(f, "    Note: {note}")?;
                }
                if !item.used_in.is_empty() {
                    writeln!(f, "    Used in: {}", item.used_in.join(", "))?;
                }
            }
        }
        Ok(())
    }
}

/// Renders a titled, category-sectioned plain-text list.
pub fn export_as_text(items: &[ShoppingListItem], title: &str) -> String {
    TextExport { items, title }.to_string()
}

// ============================================================================
// CSV
// ============================================================================

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn bare(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        quoted(field)
    } else {
        field.to_string()
    }
}

/// CSV rendering of a list.
struct CsvExport<'a> {
    items: &'a [ShoppingListItem],
}

impl fmt::Display for CsvExport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{CSV_HEADER}")?;
        for (category, group) in group_by_category(self.items) {
            for item in group {
                writeln!(
                    f,
                    "{},{},{},{},{},{},{}",
                    quoted(category.as_str()),
                    quoted(&item.ingredient_id),
                    item.quantity,
                    bare(&item.unit),
                    item.checked,
                    quoted(&item.used_in.join("; ")),
                    quoted(item.note.as_deref().unwrap_or_default()),
                )?;
            }
        }
        Ok(())
    }
}

/// Renders one CSV row per item, grouped and sorted like the text export.
pub fn export_as_csv(items: &[ShoppingListItem]) -> String {
    CsvExport { items }.to_string()
}

// ============================================================================
// WhatsApp
// ============================================================================

/// Chat-message rendering of a list.
struct WhatsAppExport<'a> {
    items: &'a [ShoppingListItem],
    title: &'a str,
}

impl fmt::Display for WhatsAppExport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🛒 *{}*", self.title)?;

        for (category, group) in group_by_category(self.items) {
            writeln!(f, "\n*{category}*")?;
            for item in group {
                let glyph = if item.checked { "✅" } else { "☑️" };
                write!(f, "{glyph} {}", item_summary(item))?;
                if let Some(note) = &item.note {
                    write!(f, " _({note})_")?;
                }
                writeln!(f)?;
            }
        }

        let count = self.items.len();
        let noun = if count == 1 { "item" } else { "items" };
        writeln!(f, "\n_Total: {count} {noun}_")
    }
}

/// Renders a chat-friendly message ending with an item count.
pub fn export_for_whatsapp(items: &[ShoppingListItem], title: &str) -> String {
    WhatsAppExport { items, title }.to_string()
}
