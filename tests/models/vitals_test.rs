#[cfg(test)]
mod tests {
    use pre_triage::config::PlausibleRanges;
    use pre_triage::{RawVitals, ValidationError, VitalSigns};

    fn raw(pressure: &str, temperature: &str, heart_rate: &str, saturation: &str) -> RawVitals {
        RawVitals {
            blood_pressure: pressure.to_string(),
            temperature: temperature.to_string(),
            heart_rate: heart_rate.to_string(),
            oxygen_saturation: saturation.to_string(),
        }
    }

    #[test]
    fn test_parse_full_form() {
        let vitals = raw(" 130/85 ", "38,4", " 104 ", "96")
            .parse(&PlausibleRanges::default())
            .unwrap();

        assert_eq!(
            vitals,
            VitalSigns::new()
                .with_blood_pressure("130/85")
                .with_temperature(38.4)
                .with_heart_rate(104.0)
                .with_oxygen_saturation(96.0)
        );
    }

    #[test]
    fn test_empty_fields_are_not_measured() {
        let vitals = raw("", "  ", "", "")
            .parse(&PlausibleRanges::default())
            .unwrap();
        assert!(vitals.is_empty());

        let vitals = raw("", "", "72", "")
            .parse(&PlausibleRanges::default())
            .unwrap();
        assert!(!vitals.is_empty());
        assert_eq!(vitals.temperature, None);
        assert_eq!(vitals.heart_rate, Some(72.0));
    }

    #[test]
    fn test_non_numeric_field_is_named() {
        let error = raw("", "", "noventa", "")
            .parse(&PlausibleRanges::default())
            .unwrap_err();
        assert_eq!(
            error,
            ValidationError::NonNumeric {
                field: "heart_rate",
                value: "noventa".to_string()
            }
        );
        assert_eq!(error.to_string(), "heart_rate is not numeric: \"noventa\"");
    }

    #[test]
    fn test_infinite_value_is_rejected() {
        let error = raw("", "inf", "", "")
            .parse(&PlausibleRanges::default())
            .unwrap_err();
        assert_eq!(
            error,
            ValidationError::NonFinite {
                field: "temperature"
            }
        );
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let ranges = PlausibleRanges::default();

        assert!(matches!(
            raw("", "", "", "101").parse(&ranges),
            Err(ValidationError::OutOfRange {
                field: "oxygen_saturation",
                ..
            })
        ));
        assert!(matches!(
            raw("", "", "-5", "").parse(&ranges),
            Err(ValidationError::OutOfRange {
                field: "heart_rate",
                ..
            })
        ));
        assert!(raw("", "45", "300", "0").parse(&ranges).is_ok());
    }

    #[test]
    fn test_validate_checks_typed_values() {
        let ranges = PlausibleRanges::default();
        assert!(VitalSigns::new().validate(&ranges).is_ok());
        assert!(
            VitalSigns::new()
                .with_temperature(36.6)
                .validate(&ranges)
                .is_ok()
        );
        assert!(
            VitalSigns::new()
                .with_temperature(29.9)
                .validate(&ranges)
                .is_err()
        );
    }
}
