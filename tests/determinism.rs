//! Determinism guarantees: the same input always yields an equal record.

use skyfeed::{parse_compact, parse_row, OperatorKind};

const SHR: &str = "(SHR-00724\n-ZZZZ0800\n-M0050/M0070 /ZONA 5530N03730E/\n-ZZZZ1030\n-DEP/5530N03730E DEST/553012N0373018E DOF/240615 OPR/OOO \"AER0TECH\" TYP/2BLA SID/7772187998)";

fn row() -> Vec<String> {
    vec![
        String::new(),
        SHR.to_string(),
        "-ADD 240615 -ATD 0805 -ADEPZ 5530N03730E".to_string(),
        "-ADA 240615 -ATA 1025 -ADARRZ 5535N03735E".to_string(),
    ]
}

#[test]
fn repeated_parses_are_equal() {
    let first = parse_row(&row());
    for _ in 0..10 {
        assert_eq!(first, parse_row(&row()));
    }
}

#[test]
fn serialized_form_is_stable() {
    let a = serde_json::to_string(&parse_row(&row())).unwrap();
    let b = serde_json::to_string(&parse_row(&row())).unwrap();
    assert_eq!(a, b);
}

#[test]
fn compact_coordinates_parse_identically_across_calls() {
    for raw in ["5530N03730E", "553012N0373018E", "3330S07015W"] {
        assert_eq!(parse_compact(raw), parse_compact(raw));
    }
}

#[test]
fn known_fields_parse_to_expected_values() {
    let record = parse_row(&row());
    assert_eq!(record.shr.sid, 7772187998);
    assert_eq!(record.shr.aircraft_quantity, 2);
    assert_eq!(record.shr.operator, "OOO AER0TECH");
    assert_eq!(record.shr.operator_type, OperatorKind::LegalEntity);
    assert_eq!(record.dep.coordinates.unwrap().lat, 55.5);
    assert_eq!(record.arr.coordinates.unwrap().lat, 55.583333);
    assert_eq!(record.shr.flight_duration, Some(140.0));
}
