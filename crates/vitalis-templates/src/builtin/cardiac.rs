use crate::builtin::classifications::{
    BLOOD_PRESSURE_DIA, BLOOD_PRESSURE_SYS, BMI, HEALTH_SCORE, HEART_RATE, VO2_MAX,
};
use crate::template::{FieldSpec, Layout, ReportTemplate, Section};

pub const ASSESSMENT_ID: &str = "as_card_01";

/// Cardiovascular-focused scan.
pub fn template() -> ReportTemplate {
    ReportTemplate {
        title: "Cardiac Assessment".to_string(),
        summary: Some(
            "Targeted summary of cardiovascular vitals and body composition.".to_string(),
        ),
        sections: vec![
            Section::new(
                "Overall Snapshot",
                Layout::Grid,
                vec![
                    FieldSpec::new("Overall Health Score", "accuracy")
                        .unit("%")
                        .decimals(0)
                        .classified(HEALTH_SCORE),
                    FieldSpec::new("Wellness Score", "vitalsMap.wellness_score")
                        .classified(HEALTH_SCORE),
                    FieldSpec::new("Heart Risk Score", "vitalsMap.health_risk_score")
                        .classified(HEALTH_SCORE),
                    FieldSpec::new("Posture During Scan", "vitalsMap.posture"),
                ],
            )
            .with_columns(2),
            Section::new(
                "Key Body Vitals",
                Layout::Table,
                vec![
                    FieldSpec::new("Heart Rate", "vitalsMap.vitals.heart_rate")
                        .unit("bpm")
                        .classified(HEART_RATE),
                    FieldSpec::new("Oxygen Saturation", "vitalsMap.vitals.oxy_sat_prcnt").unit("%"),
                    FieldSpec::new("Respiratory Rate", "vitalsMap.vitals.resp_rate")
                        .unit("breaths/min"),
                    FieldSpec::new("Blood Pressure (SYS)", "vitalsMap.vitals.bp_sys")
                        .unit("mmHg")
                        .classified(BLOOD_PRESSURE_SYS),
                    FieldSpec::new("Blood Pressure (DIA)", "vitalsMap.vitals.bp_dia")
                        .unit("mmHg")
                        .classified(BLOOD_PRESSURE_DIA),
                ],
            ),
            Section::new(
                "Cardiovascular Endurance",
                Layout::Table,
                vec![
                    FieldSpec::new("Jog Test Time", "exercises[id=235].setList[0].time").unit("sec"),
                    FieldSpec::new("Target HR Range", "vitalsMap.metadata.heart_scores.THRR"),
                    FieldSpec::new(
                        "Cardiac Output",
                        "vitalsMap.metadata.cardiovascular.cardiac_out",
                    )
                    .unit("L/min"),
                    FieldSpec::new("VO2 Max", "vitalsMap.metadata.physiological_scores.vo2max")
                        .classified(VO2_MAX),
                ],
            ),
            Section::new(
                "Body Composition",
                Layout::Table,
                vec![
                    FieldSpec::new("BMI", "bodyCompositionData.BMI").classified(BMI),
                    FieldSpec::new("Body Fat %", "bodyCompositionData.BFC").unit("%"),
                    FieldSpec::new("Lean Mass", "bodyCompositionData.LM").unit("kg"),
                    FieldSpec::new("Fat Mass", "bodyCompositionData.FM").unit("kg"),
                ],
            ),
        ],
    }
}
