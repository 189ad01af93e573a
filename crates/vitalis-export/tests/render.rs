use serde_json::{json, Value};

use vitalis_core::models::record::AssessmentRecord;
use vitalis_export::assemble_document;
use vitalis_export::error::ExportError;
use vitalis_export::render::{render_section, FieldRow, ListBlock, SectionBody};
use vitalis_templates::builtin::classifications;
use vitalis_templates::error::TemplateError;
use vitalis_templates::template::{FieldSpec, Layout, Section};
use vitalis_templates::ReportConfig;

fn sample_records() -> Vec<AssessmentRecord> {
    serde_json::from_str(include_str!("../../../data/assessments.json")).unwrap()
}

fn generated_at() -> jiff::Timestamp {
    "2025-03-01T09:30:00Z".parse().unwrap()
}

#[test]
fn table_rows_carry_value_unit_and_badge() {
    let section = Section::new(
        "Vitals",
        Layout::Table,
        vec![
            FieldSpec::new("Heart Rate", "vitals.hr").unit("bpm").classified(classifications::HEART_RATE),
            FieldSpec::new("Missing", "vitals.nothing").unit("%"),
        ],
    );
    let record = json!({ "vitals": { "hr": "58" } });

    let rendered = render_section(&section, &record, &classifications::tables());
    assert_eq!(rendered.title, "Vitals");
    let SectionBody::Table { rows } = rendered.body else {
        panic!("expected a table");
    };
    assert_eq!(rows[0].value, "58");
    assert_eq!(rows[0].unit.as_deref(), Some("bpm"));
    assert_eq!(rows[0].badge.as_ref().unwrap().label, "Below Normal");
    assert_eq!(
        rows[1],
        FieldRow {
            label: "Missing".to_string(),
            value: "N/A".to_string(),
            unit: Some("%".to_string()),
            badge: None,
        }
    );
}

#[test]
fn grid_defaults_to_three_columns() {
    let fields = vec![FieldSpec::new("A", "a"), FieldSpec::new("B", "b")];
    let record = json!({ "a": 1, "b": "two" });
    let tables = classifications::tables();

    let default = render_section(&Section::new("G", Layout::Grid, fields.clone()), &record, &tables);
    assert!(matches!(default.body, SectionBody::Grid { columns: 3, ref tiles } if tiles.len() == 2));

    let zero = render_section(
        &Section::new("G", Layout::Grid, fields.clone()).with_columns(0),
        &record,
        &tables,
    );
    assert!(matches!(zero.body, SectionBody::Grid { columns: 3, .. }));

    let two = render_section(&Section::new("G", Layout::Grid, fields).with_columns(2), &record, &tables);
    assert!(matches!(two.body, SectionBody::Grid { columns: 2, .. }));
}

#[test]
fn empty_list_fields_produce_no_block() {
    let section = Section::new(
        "Posture",
        Layout::List,
        vec![
            FieldSpec::new("Front", "front").list(),
            FieldSpec::new("Side", "side").list(),
            FieldSpec::new("Back", "back").list(),
        ],
    );
    let record = json!({ "front": [], "side": ["Knees bent."], "back": null });

    let rendered = render_section(&section, &record, &classifications::tables());
    assert_eq!(
        rendered.body,
        SectionBody::List {
            blocks: vec![ListBlock {
                label: "Side".to_string(),
                items: vec!["Knees bent.".to_string()],
            }],
        }
    );
}

#[test]
fn scalar_fields_in_list_sections_are_dropped() {
    let section = Section::new("Tips", Layout::List, vec![FieldSpec::new("Score", "score")]);
    let rendered = render_section(&section, &json!({ "score": 5 }), &classifications::tables());
    assert_eq!(rendered.body, SectionBody::List { blocks: vec![] });
}

#[test]
fn list_fields_in_tables_join_their_items() {
    let section = Section::new(
        "Notes",
        Layout::Table,
        vec![
            FieldSpec::new("Tips", "tips").list(),
            FieldSpec::new("None", "absent").list(),
        ],
    );
    let record = json!({ "tips": ["Stretch", 2] });

    let SectionBody::Table { rows } =
        render_section(&section, &record, &classifications::tables()).body
    else {
        panic!("expected a table");
    };
    assert_eq!(rows[0].value, "Stretch, 2");
    assert_eq!(rows[1].value, "N/A");
}

#[test]
fn one_bad_field_does_not_block_the_section() {
    let section = Section::new(
        "Mixed",
        Layout::Table,
        vec![
            FieldSpec::new("Broken", "a[[").classified("unknownTable"),
            FieldSpec::new("Good", "b").decimals(1),
        ],
    );
    let SectionBody::Table { rows } =
        render_section(&section, &json!({ "b": 1.26 }), &classifications::tables()).body
    else {
        panic!("expected a table");
    };
    assert_eq!(rows[0].value, "N/A");
    assert_eq!(rows[1].value, "1.3");
}

#[test]
fn unregistered_assessment_fails_without_a_document() {
    let record = AssessmentRecord::from_value(json!({
        "session_id": "session_x",
        "assessment_id": "as_unknown",
    }))
    .unwrap();

    let result = assemble_document(&ReportConfig::builtin(), &record, generated_at());
    assert!(matches!(
        result,
        Err(ExportError::Template(TemplateError::ConfigurationMissing { ref assessment_id }))
            if assessment_id == "as_unknown"
    ));
}

#[test]
fn assembles_sections_in_template_order() {
    let config = ReportConfig::builtin();
    let record = &sample_records()[0];

    let document = assemble_document(&config, record, generated_at()).unwrap();
    assert_eq!(document.title, "Health & Fitness Assessment");
    assert!(document.summary.is_some());

    let titles: Vec<&str> = document.sections.iter().map(|s| s.title.as_str()).collect();
    let expected: Vec<&str> = config.template("as_hr_02").unwrap().sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, expected);

    let SectionBody::Table { rows } = &document.sections[0].body else {
        panic!("expected a table");
    };
    assert_eq!(rows[0].value, "80");
    assert_eq!(rows[0].badge.as_ref().unwrap().label, "Good");

    let SectionBody::Table { rows } = &document.sections[4].body else {
        panic!("expected a table");
    };
    assert_eq!(rows[2].value, "45.538174");
}

#[test]
fn cardiac_record_renders_grid_and_text_values() {
    let config = ReportConfig::builtin();
    let record = &sample_records()[1];

    let document = assemble_document(&config, record, generated_at()).unwrap();
    assert_eq!(document.title, "Cardiac Assessment");

    let SectionBody::Grid { columns, tiles } = &document.sections[0].body else {
        panic!("expected a grid");
    };
    assert_eq!(*columns, 2);
    assert_eq!(tiles[0].value, "17");
    assert_eq!(tiles[0].badge.as_ref().unwrap().label, "Average");
    assert_eq!(tiles[3].value, "resting");
    assert_eq!(tiles[3].badge, None);

    let SectionBody::Table { rows } = &document.sections[2].body else {
        panic!("expected a table");
    };
    assert_eq!(rows[1].value, "< 90");
    assert_eq!(rows[3].badge.as_ref().unwrap().label, "Average");
}

#[test]
fn footer_uses_utc_generation_time() {
    let config = ReportConfig::builtin();
    let document = assemble_document(&config, &sample_records()[0], generated_at()).unwrap();
    assert_eq!(document.footer(), "Generated on 2025-03-01 09:30:00 UTC");
}

#[test]
fn document_serializes_with_layout_tags() {
    let config = ReportConfig::builtin();
    let document = assemble_document(&config, &sample_records()[1], generated_at()).unwrap();
    let value: Value = serde_json::to_value(&document).unwrap();

    assert_eq!(value["sections"][0]["body"]["layout"], "grid");
    assert_eq!(value["sections"][1]["body"]["layout"], "table");
    assert_eq!(value["generated_at"], "2025-03-01T09:30:00Z");
}
