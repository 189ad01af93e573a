use crate::builtin::classifications::{
    BLOOD_PRESSURE_DIA, BLOOD_PRESSURE_SYS, BMI, HEALTH_SCORE, HEART_RATE,
};
use crate::template::{FieldSpec, Layout, ReportTemplate, Section};

pub const ASSESSMENT_ID: &str = "as_hr_02";

/// Full health & fitness scan: vitals, heart-rate variability, fitness
/// exercises, body composition and posture analysis.
pub fn template() -> ReportTemplate {
    ReportTemplate {
        title: "Health & Fitness Assessment".to_string(),
        summary: Some(
            "Comprehensive overview of body vitals, posture, and conditioning indicators."
                .to_string(),
        ),
        sections: vec![
            Section::new(
                "Overall Snapshot",
                Layout::Table,
                vec![
                    FieldSpec::new("Overall Health Score", "accuracy")
                        .unit("%")
                        .decimals(0)
                        .classified(HEALTH_SCORE),
                    FieldSpec::new("Wellness Score", "vitalsMap.wellness_score")
                        .classified(HEALTH_SCORE),
                    FieldSpec::new("Gender", "gender"),
                    FieldSpec::new("Height", "height").unit("cm"),
                    FieldSpec::new("Weight", "weight").unit("kg"),
                    FieldSpec::new("Health Risk Score", "vitalsMap.health_risk_score")
                        .classified(HEALTH_SCORE),
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
                    FieldSpec::new("Respiratory Rate", "vitalsMap.vitals.resp_rate")
                        .unit("breaths/min"),
                    FieldSpec::new("Oxygen Saturation", "vitalsMap.vitals.oxy_sat_prcnt").unit("%"),
                    FieldSpec::new("Blood Pressure (SYS)", "vitalsMap.vitals.bp_sys")
                        .unit("mmHg")
                        .classified(BLOOD_PRESSURE_SYS),
                    FieldSpec::new("Blood Pressure (DIA)", "vitalsMap.vitals.bp_dia")
                        .unit("mmHg")
                        .classified(BLOOD_PRESSURE_DIA),
                ],
            ),
            Section::new(
                "Heart Health",
                Layout::Table,
                vec![
                    FieldSpec::new("HR Max", "vitalsMap.metadata.heart_scores.HRMax").unit("bpm"),
                    FieldSpec::new("Heart Rate Reserve", "vitalsMap.metadata.heart_scores.HRR"),
                    FieldSpec::new("Target HR Range", "vitalsMap.metadata.heart_scores.THRR"),
                    FieldSpec::new(
                        "Heart Utilization",
                        "vitalsMap.metadata.heart_scores.heart_utilized",
                    )
                    .unit("%"),
                    FieldSpec::new("Stress Index", "vitalsMap.metadata.heart_scores.stress_index"),
                ],
            ),
            Section::new(
                "Stress & Recovery",
                Layout::Table,
                vec![
                    FieldSpec::new("pNN50 %", "vitalsMap.metadata.heart_scores.pNN50_per").unit("%"),
                    FieldSpec::new("RMSSD", "vitalsMap.metadata.heart_scores.rmssd"),
                    FieldSpec::new("SDNN", "vitalsMap.metadata.heart_scores.sdnn"),
                    FieldSpec::new("Zone", "vitalsMap.metadata.heart_scores.zone_details.zone"),
                ],
            ),
            Section::new(
                "Fitness Levels",
                Layout::Table,
                vec![
                    FieldSpec::new("Jog Test Time", "exercises[id=235].setList[0].time").unit("sec"),
                    FieldSpec::new("Squat Repetitions", "exercises[id=259].setList[0].totalReps")
                        .unit("reps"),
                    FieldSpec::new(
                        "Stand & Reach Distance",
                        "exercises[id=281].setList[0].additionalFields[fieldName=Distance].fieldValue",
                    )
                    .unit("cm"),
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
            Section::new(
                "Posture Analysis",
                Layout::List,
                vec![
                    FieldSpec::new("Frontal View Observations", "exercises[id=73].analysisList")
                        .list(),
                    FieldSpec::new("Side View Observations", "exercises[id=74].analysisList").list(),
                ],
            ),
            Section::new(
                "Coaching Tips",
                Layout::List,
                vec![
                    FieldSpec::new("Frontal View Tips", "exercises[id=73].tipsList").list(),
                    FieldSpec::new("Side View Tips", "exercises[id=74].tipsList").list(),
                ],
            ),
        ],
    }
}
