#[cfg(test)]
mod tests {
    use crate::utils::{at, date, sample_patient};
    use pre_triage::models::types::PainLocation;
    use pre_triage::{IntakeError, SymptomReport, Tier, TriageScorer, VitalSigns, WizardStep};

    fn at_symptoms() -> WizardStep {
        let mut wizard = WizardStep::new();
        wizard.begin().unwrap();
        wizard.register(sample_patient()).unwrap();
        wizard
    }

    fn transition_error(result: pre_triage::Result<()>) -> (&'static str, &'static str) {
        match result {
            Err(IntakeError::InvalidTransition { from, action }) => (from, action),
            other => panic!("expected an invalid transition, got {other:?}"),
        }
    }

    #[test]
    fn test_full_walkthrough() {
        let scorer = TriageScorer::default();
        let mut wizard = WizardStep::new();
        assert_eq!(wizard, WizardStep::Start);
        assert_eq!(wizard.progress(), 0);

        wizard.begin().unwrap();
        assert_eq!(wizard.name(), "registration");
        assert_eq!(wizard.patient(), None);

        wizard.register(sample_patient()).unwrap();
        assert_eq!(wizard.name(), "symptoms");
        assert_eq!(wizard.progress(), 2);
        assert_eq!(wizard.patient(), Some(&sample_patient()));
        assert!(wizard.triage_result().is_none());

        let report = SymptomReport {
            fever: true,
            dizziness: true,
            diarrhea: true,
            ..SymptomReport::default()
        };
        let tier = wizard.submit_symptoms(&scorer, report, None).unwrap();
        assert_eq!(tier, Tier::Priority);
        assert_eq!(wizard.name(), "ticket");
        assert_eq!(wizard.progress(), 3);
        assert_eq!(wizard.triage_result().map(|r| r.tier), Some(Tier::Priority));

        let ticket = wizard.ticket(at(date(2024, 3, 1), 10, 30)).unwrap();
        assert_eq!(ticket.tier, Tier::Priority);
        assert_eq!(ticket.top_symptoms, vec!["Fiebre", "Mareos", "Diarrea"]);

        wizard.finish().unwrap();
        assert_eq!(wizard, WizardStep::Start);
        assert_eq!(wizard.patient(), None);
    }

    #[test]
    fn test_vitals_are_scored_at_submission() {
        let scorer = TriageScorer::default();
        let mut wizard = at_symptoms();
        let vitals = VitalSigns::new().with_oxygen_saturation(85.0);

        let tier = wizard
            .submit_symptoms(&scorer, SymptomReport::new(), Some(&vitals))
            .unwrap();
        assert_eq!(tier, Tier::Immediate);
    }

    #[test]
    fn test_invalid_submission_stays_on_symptoms() {
        let scorer = TriageScorer::default();
        let mut wizard = at_symptoms();
        let report = SymptomReport {
            pain_locations: vec![PainLocation::Chest],
            ..SymptomReport::default()
        };
        let vitals = VitalSigns::new().with_temperature(60.0);

        let error = wizard
            .submit_symptoms(&scorer, report.clone(), Some(&vitals))
            .unwrap_err();
        assert!(matches!(error, IntakeError::Validation(_)));
        assert_eq!(wizard.name(), "symptoms");
        assert_eq!(wizard.patient(), Some(&sample_patient()));

        let tier = wizard.submit_symptoms(&scorer, report, None).unwrap();
        assert_eq!(tier, Tier::Immediate);
    }

    #[test]
    fn test_out_of_order_actions_are_rejected() {
        let scorer = TriageScorer::default();

        let mut wizard = WizardStep::new();
        assert_eq!(
            transition_error(wizard.register(sample_patient())),
            ("start", "register")
        );
        assert_eq!(transition_error(wizard.finish()), ("start", "finish"));
        assert!(matches!(
            wizard.submit_symptoms(&scorer, SymptomReport::new(), None),
            Err(IntakeError::InvalidTransition {
                from: "start",
                action: "submit symptoms"
            })
        ));
        assert_eq!(wizard, WizardStep::Start);

        let mut wizard = at_symptoms();
        assert_eq!(transition_error(wizard.begin()), ("symptoms", "begin"));
        let error = wizard.ticket(at(date(2024, 3, 1), 9, 0)).unwrap_err();
        assert_eq!(error.to_string(), "Cannot print a ticket from step symptoms");
        assert_eq!(wizard.name(), "symptoms");
    }

    #[test]
    fn test_reset_discards_the_intake() {
        let mut wizard = at_symptoms();
        wizard.reset();
        assert_eq!(wizard, WizardStep::Start);

        wizard.begin().unwrap();
        assert_eq!(wizard, WizardStep::Registration);
    }
}
