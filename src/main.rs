use chrono::{Local, NaiveDate, Utc};
use log::info;
use pre_triage::models::types::{BloodType, Gender, PainLevel, PainLocation, SymptomDuration};
use pre_triage::utils::{init_logging, log_triage_outcome};
use pre_triage::{
    InMemoryRegistry, NursingAssessment, PatientIntake, PatientRegistry, RawVitals,
    SymptomReport, TriageConfig, TriageScorer, WizardStep,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Setup logging
    init_logging();

    // Optional JSON configuration as first argument
    let config = match std::env::args().nth(1) {
        Some(path) => TriageConfig::from_json_file(Path::new(&path))?,
        None => TriageConfig::default(),
    };
    let scorer = TriageScorer::new(&config)?;
    info!(
        "Triage scorer ready with {} dictionary terms",
        scorer.dictionary().len()
    );

    let mut registry = InMemoryRegistry::new();
    let mut wizard = WizardStep::new();

    // Pre-triage at the intake desk
    wizard.begin()?;
    let birth_date = NaiveDate::from_ymd_opt(1980, 5, 15)
        .ok_or_else(|| anyhow::anyhow!("invalid demo birth date"))?;
    let patient = registry.register(
        PatientIntake::new("12345678", "Juan Pérez", birth_date)
            .with_phone("600123456")
            .with_address("Calle Principal 123")
            .with_gender(Gender::Male)
            .with_blood_type(BloodType::APositive)
            .with_tax_id("20-12345678-9")
            .with_nationality("Argentina"),
    )?;
    wizard.register(patient.clone())?;

    let report = SymptomReport {
        pain_level: PainLevel::Moderate,
        pain_locations: vec![PainLocation::Abdomen],
        duration: SymptomDuration::FewHours,
        fever: true,
        nausea: true,
        notes: Some("Refiere vómitos desde la mañana y malestar general".to_string()),
        ..SymptomReport::default()
    };
    let tier = wizard.submit_symptoms(&scorer, report, None)?;
    if let Some(result) = wizard.triage_result() {
        log_triage_outcome("intake", &patient.national_id, result);
    }
    info!("Assigned {tier}");

    let ticket = wizard.ticket(Local::now().naive_local())?;
    println!("{ticket}\n");
    wizard.finish()?;

    // Nursing follow-up with measured vitals
    let nursing = NursingAssessment::new(&scorer);
    let raw = RawVitals {
        blood_pressure: "130/85".to_string(),
        temperature: "38,4".to_string(),
        heart_rate: "104".to_string(),
        oxygen_saturation: "96".to_string(),
    };
    let record = nursing.assess(
        &mut registry,
        &patient.national_id,
        &raw,
        Some("Paciente con fatiga y tos leve"),
        Utc::now(),
    )?;
    log_triage_outcome("nursing", &patient.national_id, &record.result);

    for record in registry.triage_history(&patient.national_id)? {
        println!(
            "{} | {} | {}",
            record.recorded_at.format("%Y-%m-%d %H:%M"),
            record.tier(),
            record.symptoms.join(", ")
        );
    }

    Ok(())
}
