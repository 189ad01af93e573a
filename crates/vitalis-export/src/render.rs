use serde::Serialize;
use serde_json::Value;

use vitalis_templates::classification::{Classification, ClassificationTables};
use vitalis_templates::normalize::NOT_AVAILABLE;
use vitalis_templates::template::{FieldKind, FieldSpec, Layout, Section};
use vitalis_templates::{resolve_field, ResolvedValue};

/// One section of the finished document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum SectionBody {
    Table { rows: Vec<FieldRow> },
    Grid { columns: u32, tiles: Vec<FieldRow> },
    List { blocks: Vec<ListBlock> },
}

/// A table row or grid tile: label, value + unit, optional badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRow {
    pub label: String,
    pub value: String,
    pub unit: Option<String>,
    pub badge: Option<Classification>,
}

/// Heading plus bullet items. Never constructed with no items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListBlock {
    pub label: String,
    pub items: Vec<String>,
}

/// Render one template section against a record.
///
/// Every field degrades on its own: a missing metric shows as `N/A` and an
/// empty list field is left out, but the rest of the section still renders.
pub fn render_section(
    section: &Section,
    record: &Value,
    tables: &ClassificationTables,
) -> RenderedSection {
    let body = match section.layout {
        Layout::Table => SectionBody::Table {
            rows: field_rows(section, record, tables),
        },
        Layout::Grid => SectionBody::Grid {
            columns: section.columns(),
            tiles: field_rows(section, record, tables),
        },
        Layout::List => SectionBody::List {
            blocks: section
                .fields
                .iter()
                .filter_map(|field| list_block(field, record, tables))
                .collect(),
        },
    };

    RenderedSection {
        title: section.title.clone(),
        body,
    }
}

fn field_rows(section: &Section, record: &Value, tables: &ClassificationTables) -> Vec<FieldRow> {
    section
        .fields
        .iter()
        .map(|field| field_row(field, record, tables))
        .collect()
}

fn field_row(field: &FieldSpec, record: &Value, tables: &ClassificationTables) -> FieldRow {
    match resolve_field(record, field, tables) {
        ResolvedValue::Scalar {
            display,
            unit,
            classification,
        } => FieldRow {
            label: field.label.clone(),
            value: display.to_string(),
            unit,
            badge: classification,
        },
        // List fields outside a list section collapse to one line.
        ResolvedValue::List { items } => FieldRow {
            label: field.label.clone(),
            value: if items.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                items.join(", ")
            },
            unit: field.unit.clone(),
            badge: None,
        },
    }
}

fn list_block(field: &FieldSpec, record: &Value, tables: &ClassificationTables) -> Option<ListBlock> {
    if field.kind != FieldKind::List {
        return None;
    }
    let resolved = resolve_field(record, field, tables);
    let items = resolved.items();
    if items.is_empty() {
        return None;
    }
    Some(ListBlock {
        label: field.label.clone(),
        items: items.to_vec(),
    })
}
