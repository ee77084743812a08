#[cfg(test)]
mod tests {
    use pre_triage::algorithm::triage::keywords::tokenize;
    use pre_triage::{
        Severity, SeverityCounts, Tier, TriageConfig, ValidationError, VitalSigns, score,
    };

    const NO_SYMPTOMS: &[&str] = &[];

    #[test]
    fn test_chest_pain_is_immediate() {
        let result = score(&["Dolor en el pecho"], None, None).unwrap();

        assert_eq!(result.tier, Tier::Immediate);
        assert!(result.counts.critical >= 1);
        assert!(result.keyword_hits.is_empty());
    }

    #[test]
    fn test_high_fever_alone_is_preferred() {
        let vitals = VitalSigns::new().with_temperature(39.5);
        let result = score(NO_SYMPTOMS, Some(&vitals), None).unwrap();

        assert!(result.counts.urgent >= 1);
        assert_eq!(result.counts.non_urgent, 0);
        assert_eq!(result.tier, Tier::Preferred);
    }

    #[test]
    fn test_notes_with_two_non_urgent_keywords() {
        let result = score(NO_SYMPTOMS, None, Some("el paciente tiene mareos y diarrea")).unwrap();

        let terms: Vec<&str> = result.keyword_hits.iter().map(|h| h.term.as_str()).collect();
        assert_eq!(terms, vec!["mareos", "diarrea"]);
        assert!(
            result
                .keyword_hits
                .iter()
                .all(|h| h.severity == Severity::NonUrgent)
        );
        assert_eq!(result.counts.non_urgent, 2);
        assert_eq!(result.tier, Tier::Preferred);
    }

    #[test]
    fn test_empty_input_is_normal() {
        let result = score(NO_SYMPTOMS, None, None).unwrap();

        assert_eq!(result.tier, Tier::Normal);
        assert_eq!(result.counts, SeverityCounts::default());
        assert_eq!(result.counts.total(), 0);
        assert!(result.keyword_hits.is_empty());
        assert!(result.vital_findings.is_empty());
        assert_eq!(result.keyword_summary(), "Sin coincidencias");
    }

    #[test]
    fn test_oxygen_saturation_boundary() {
        let at_90 = score(
            NO_SYMPTOMS,
            Some(&VitalSigns::new().with_oxygen_saturation(90.0)),
            None,
        )
        .unwrap();
        assert_eq!(at_90.counts.critical, 0);
        assert_eq!(at_90.counts.urgent, 1);
        assert_ne!(at_90.tier, Tier::Immediate);

        let at_89 = score(
            NO_SYMPTOMS,
            Some(&VitalSigns::new().with_oxygen_saturation(89.0)),
            None,
        )
        .unwrap();
        assert_eq!(at_89.counts.critical, 1);
        assert_eq!(at_89.tier, Tier::Immediate);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let vitals = VitalSigns::new()
            .with_temperature(38.2)
            .with_heart_rate(112.0)
            .with_oxygen_saturation(93.0);
        let symptoms = ["Fiebre", "Mareos"];
        let notes = Some("tos y cansancio desde ayer, vómitos");

        let first = score(&symptoms, Some(&vitals), notes).unwrap();
        let second = score(&symptoms, Some(&vitals), notes).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_adding_critical_symptom_moves_normal_to_immediate() {
        let config = TriageConfig::default();
        let baselines: Vec<(Vec<&str>, Option<VitalSigns>, Option<&str>)> = vec![
            (vec![], None, None),
            (vec!["Dolor de cabeza"], None, None),
            (vec![], None, Some("algo de tos")),
            (vec![], Some(VitalSigns::new().with_temperature(37.0)), None),
        ];

        for (symptoms, vitals, notes) in baselines {
            let before = score(&symptoms, vitals.as_ref(), notes).unwrap();
            assert_eq!(before.tier, Tier::Normal);

            for critical in &config.symptom_labels.critical {
                let mut with_critical: Vec<&str> = symptoms.clone();
                with_critical.push(critical.as_str());
                let after = score(&with_critical, vitals.as_ref(), notes).unwrap();
                assert_eq!(after.tier, Tier::Immediate, "adding {critical}");
            }
        }
    }

    #[test]
    fn test_no_critical_input_is_never_immediate() {
        let config = TriageConfig::default();
        let mut labels: Vec<&str> = config
            .symptom_labels
            .urgent
            .iter()
            .chain(&config.symptom_labels.non_urgent)
            .map(String::as_str)
            .collect();
        labels.push("Síntoma desconocido");

        let vitals_options = [
            None,
            Some(VitalSigns::new().with_temperature(41.0)),
            Some(
                VitalSigns::new()
                    .with_heart_rate(180.0)
                    .with_oxygen_saturation(90.0),
            ),
            Some(VitalSigns::new().with_heart_rate(45.0).with_temperature(38.0)),
        ];
        let notes = [None, Some("fiebre, vómitos, tos y malestar"), Some("dolor abdominal")];

        for vitals in &vitals_options {
            for note in notes {
                let result = score(&labels, vitals.as_ref(), note).unwrap();
                assert_eq!(result.counts.critical, 0);
                assert_ne!(result.tier, Tier::Immediate);
            }
        }
    }

    #[test]
    fn test_single_urgent_with_two_non_urgent_is_priority() {
        let result = score(&["Fiebre", "Mareos", "Diarrea"], None, None).unwrap();
        assert_eq!(
            result.counts,
            SeverityCounts {
                critical: 0,
                urgent: 1,
                non_urgent: 2
            }
        );
        assert_eq!(result.tier, Tier::Priority);

        let result = score(&["Fiebre", "Mareos"], None, None).unwrap();
        assert_eq!(result.tier, Tier::Preferred);
    }

    #[test]
    fn test_keyword_and_symptom_counts_combine() {
        let result = score(&["Vómitos"], None, Some("refiere fiebre alta")).unwrap();

        assert_eq!(result.counts.urgent, 2);
        assert_eq!(result.tier, Tier::Priority);
        assert_eq!(result.keyword_hits.len(), 1);
    }

    #[test]
    fn test_symptom_labels_match_exactly() {
        let result = score(&["Dolor en el pecho intenso", "fiebre"], None, None).unwrap();

        assert_eq!(result.counts.total(), 0);
        assert_eq!(result.tier, Tier::Normal);
    }

    #[test]
    fn test_synonyms_share_a_concept() {
        let notes = Some("Dolor en el TÓRAX, irradiado al pecho");
        let result = score(NO_SYMPTOMS, None, notes).unwrap();

        assert_eq!(result.counts.critical, 2);
        assert!(result.keyword_hits.iter().all(|h| h.concept == "dolor_toracico"));
        assert_eq!(result.tier, Tier::Immediate);
    }

    #[test]
    fn test_repeated_keywords_count_each_time() {
        let result = score(NO_SYMPTOMS, None, Some("tos, tos y más tos")).unwrap();

        assert_eq!(result.counts.non_urgent, 3);
        assert_eq!(result.tier, Tier::Preferred);
    }

    #[test]
    fn test_keyword_hits_carry_severity_marker() {
        let result = score(NO_SYMPTOMS, None, Some("mareos y hemorragia")).unwrap();

        let rendered: Vec<String> = result.keyword_hits.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["🟢 mareos", "🔴 hemorragia"]);
        assert_eq!(result.keyword_summary(), "🟢 mareos | 🔴 hemorragia");
        assert_eq!(result.hits_of(Severity::Critical).count(), 1);
    }

    #[test]
    fn test_vital_findings_are_reported() {
        let vitals = VitalSigns::new()
            .with_blood_pressure("90/60")
            .with_temperature(36.5)
            .with_heart_rate(130.0)
            .with_oxygen_saturation(97.0);
        let result = score(NO_SYMPTOMS, Some(&vitals), None).unwrap();

        assert_eq!(result.vital_findings.len(), 1);
        assert_eq!(result.vital_findings[0].severity, Severity::Urgent);
        assert_eq!(result.tier, Tier::Preferred);
    }

    #[test]
    fn test_out_of_range_vitals_are_rejected() {
        let vitals = VitalSigns::new().with_temperature(55.0);
        let error = score(&["Dolor en el pecho"], Some(&vitals), None).unwrap_err();

        assert!(matches!(
            error,
            ValidationError::OutOfRange {
                field: "temperature",
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_vitals_are_rejected() {
        let vitals = VitalSigns::new().with_heart_rate(f64::NAN);
        assert_eq!(
            score(NO_SYMPTOMS, Some(&vitals), None),
            Err(ValidationError::NonFinite {
                field: "heart_rate"
            })
        );
    }

    #[test]
    fn test_blank_symptom_is_rejected() {
        assert_eq!(
            score(&["Fiebre", "   "], None, None),
            Err(ValidationError::BlankSymptom)
        );
    }

    #[test]
    fn test_tokenize_lowercases_accented_words() {
        let tokens: Vec<String> = tokenize("NÁUSEAS; Vómito!").collect();
        assert_eq!(tokens, vec!["náuseas", "vómito"]);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(Tier::Immediate.number(), 1);
        assert_eq!(Tier::from_number(4), Some(Tier::Normal));
        assert_eq!(Tier::from_number(5), None);
        assert!(Tier::Immediate < Tier::Normal);
        assert_eq!(Tier::Priority.to_string(), "NIVEL 2 - ATENCIÓN PRIORITARIA");
        assert_eq!(Tier::Preferred.description(), "preferred attention");
    }
}
