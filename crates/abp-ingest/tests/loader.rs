//! Integration tests for dataset loading.

use std::fs;
use std::path::Path;

use abp_ingest::{LoadError, load_dataset, load_dataset_from_str};
use tempfile::tempdir;

const VALID: &str = r#"{
    "version": "RFE SFAR 2024 - test",
    "date_extraction": "2025-01-15",
    "specialites": [
        {
            "id": "chirurgie-orthopedique-programmee",
            "nom": "Chirurgie orthopédique programmée",
            "interventions": [
                {
                    "id": "pth",
                    "nom": "Prothèse totale de hanche",
                    "specialite": "Chirurgie orthopédique programmée",
                    "protocole": {
                        "molecule": "Céfazoline",
                        "posologie": "2g IVL",
                        "reinjection": "1g toutes les 4h",
                        "duree": "Durée de l'intervention"
                    },
                    "alternative_allergie": [
                        { "molecule": "Clindamycine", "posologie": "900mg IVL" }
                    ],
                    "force_recommandation": "GRADE 1",
                    "source_page": 73,
                    "source_tableau": "Tableau 1"
                },
                {
                    "id": "arthroscopie-sans-materiel",
                    "nom": "Arthroscopie sans matériel",
                    "specialite": "Chirurgie orthopédique programmée",
                    "protocole": null,
                    "alternative_allergie": null,
                    "pas_d_abp": true,
                    "force_recommandation": "GRADE 2",
                    "source_page": 74,
                    "source_tableau": "Tableau 1",
                    "notes": "Sans implant"
                }
            ]
        }
    ],
    "recommandations_generales": [
        { "id": "rg-1", "titre": "Timing", "contenu": "30 à 60 min avant incision", "source_page": 10 }
    ]
}"#;

fn origin() -> &'static Path {
    Path::new("rfe.json")
}

#[test]
fn test_load_valid_dataset_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rfe.json");
    fs::write(&path, VALID).unwrap();

    let dataset = load_dataset(&path).unwrap();
    assert!(dataset.version.starts_with("RFE SFAR 2024"));
    assert_eq!(dataset.specialties.len(), 1);
    assert_eq!(dataset.intervention_count(), 2);
    assert_eq!(dataset.general_recommendations.len(), 1);

    let pth = &dataset.specialties[0].interventions[0];
    assert!(!pth.no_prophylaxis);
    assert_eq!(pth.protocol.as_ref().unwrap().molecule, "Céfazoline");
    assert_eq!(pth.allergy_alternatives.len(), 1);
    assert!(pth.allergy_alternatives[0].reinjection.is_none());

    let arthro = &dataset.specialties[0].interventions[1];
    assert!(arthro.no_prophylaxis);
    assert!(arthro.protocol.is_none());
    assert!(arthro.allergy_alternatives.is_empty());
    assert_eq!(arthro.notes.as_deref(), Some("Sans implant"));
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let result = load_dataset(&path);
    assert!(matches!(result, Err(LoadError::NotFound { .. })));
}

#[test]
fn test_missing_specialties_is_schema_error() {
    let json = r#"{ "version": "RFE SFAR 2024", "date_extraction": "2025-01-15" }"#;

    let error = load_dataset_from_str(json, origin()).unwrap_err();
    assert!(matches!(error, LoadError::Schema { .. }));
    assert_eq!(error.field_path(), Some("specialites"));
    assert!(error.to_string().contains("specialites"));
}

#[test]
fn test_invalid_json_is_schema_error_at_root() {
    let error = load_dataset_from_str("{ not json", origin()).unwrap_err();
    assert_eq!(error.field_path(), Some("$"));
}

#[test]
fn test_nested_missing_field_reports_full_path() {
    let json = VALID.replacen(r#""source_page": 74,"#, "", 1);

    let error = load_dataset_from_str(&json, origin()).unwrap_err();
    assert_eq!(
        error.field_path(),
        Some("specialites[0].interventions[1].source_page")
    );
}

#[test]
fn test_wrong_type_in_protocol_reports_field_path() {
    let json = VALID.replacen(r#""posologie": "2g IVL""#, r#""posologie": 2"#, 1);

    let error = load_dataset_from_str(&json, origin()).unwrap_err();
    assert_eq!(
        error.field_path(),
        Some("specialites[0].interventions[0].protocole.posologie")
    );
}

#[test]
fn test_string_source_page_reports_field_path() {
    let json = VALID.replacen(r#""source_page": 73"#, r#""source_page": "73""#, 1);

    let error = load_dataset_from_str(&json, origin()).unwrap_err();
    assert!(matches!(error, LoadError::Schema { .. }));
    assert_eq!(
        error.field_path(),
        Some("specialites[0].interventions[0].source_page")
    );
}

#[test]
fn test_wrong_type_in_allergy_alternative_reports_index() {
    let json = VALID.replacen(r#""molecule": "Clindamycine""#, r#""molecule": null"#, 1);

    let error = load_dataset_from_str(&json, origin()).unwrap_err();
    assert_eq!(
        error.field_path(),
        Some("specialites[0].interventions[0].alternative_allergie[0].molecule")
    );
}

#[test]
fn test_missing_protocol_field_reports_full_path() {
    let json = VALID.replacen(r#""duree": "Durée de l'intervention""#, r#""autre": "x""#, 1);

    let error = load_dataset_from_str(&json, origin()).unwrap_err();
    assert_eq!(
        error.field_path(),
        Some("specialites[0].interventions[0].protocole.duree")
    );
}

#[test]
fn test_trailing_content_is_schema_error() {
    let json = format!("{VALID} []");

    let error = load_dataset_from_str(&json, origin()).unwrap_err();
    assert_eq!(error.field_path(), Some("$"));
}

#[test]
fn test_zero_and_negative_pages_decode() {
    let json = VALID
        .replacen(r#""source_page": 73"#, r#""source_page": 0"#, 1)
        .replacen(r#""source_page": 74"#, r#""source_page": -2"#, 1);

    let dataset = load_dataset_from_str(&json, origin()).unwrap();
    let pages: Vec<i64> = dataset
        .specialties[0]
        .interventions
        .iter()
        .map(|i| i.source_page)
        .collect();
    assert_eq!(pages, vec![0, -2]);
}

#[test]
fn test_recommendations_default_to_empty() {
    let json = r#"{ "version": "v", "date_extraction": "d", "specialites": [] }"#;

    let dataset = load_dataset_from_str(json, origin()).unwrap();
    assert!(dataset.general_recommendations.is_empty());
    assert!(dataset.specialties.is_empty());
}
