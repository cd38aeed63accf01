//! Entity types for the prophylaxis guideline dataset.
//!
//! The JSON document keeps the guideline's French field names; each type maps
//! them onto English Rust fields with `serde(rename)`.

use serde::{Deserialize, Deserializer, Serialize};

/// Root of the guideline document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Guideline identifier, e.g. "RFE SFAR 2024 ...".
    pub version: String,
    #[serde(rename = "date_extraction")]
    pub extraction_date: String,
    #[serde(rename = "specialites")]
    pub specialties: Vec<Specialty>,
    #[serde(rename = "recommandations_generales", default)]
    pub general_recommendations: Vec<GeneralRecommendation>,
}

impl Dataset {
    /// Iterate over every intervention in document order, with its specialty.
    pub fn interventions(&self) -> impl Iterator<Item = (&Specialty, &Intervention)> {
        self.specialties.iter().flat_map(|specialty| {
            specialty
                .interventions
                .iter()
                .map(move |intervention| (specialty, intervention))
        })
    }

    pub fn intervention_count(&self) -> usize {
        self.specialties.iter().map(|s| s.interventions.len()).sum()
    }
}

/// A surgical discipline grouping interventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    pub interventions: Vec<Intervention>,
}

/// A surgical procedure and its prophylaxis recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intervention {
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    /// Name of the enclosing specialty, duplicated in the source tables.
    #[serde(rename = "specialite")]
    pub specialty_name: String,
    #[serde(rename = "protocole", default)]
    pub protocol: Option<Protocol>,
    #[serde(
        rename = "alternative_allergie",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub allergy_alternatives: Vec<AllergyAlternative>,
    #[serde(rename = "pas_d_abp", default)]
    pub no_prophylaxis: bool,
    #[serde(rename = "force_recommandation")]
    pub recommendation_strength: String,
    /// Page of the guideline PDF. Signed so that bad values survive decoding.
    pub source_page: i64,
    #[serde(rename = "source_tableau")]
    pub source_table: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Intervention {
    /// True when the guideline recommends a prophylaxis regimen.
    pub fn has_prophylaxis(&self) -> bool {
        !self.no_prophylaxis
    }

    /// Molecules named by the protocol and every allergy alternative.
    pub fn molecules(&self) -> impl Iterator<Item = &str> {
        self.protocol
            .iter()
            .map(|p| p.molecule.as_str())
            .chain(self.allergy_alternatives.iter().map(|a| a.molecule.as_str()))
    }
}

/// Primary antibiotic regimen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protocol {
    pub molecule: String,
    #[serde(rename = "posologie")]
    pub dosage: String,
    #[serde(default)]
    pub reinjection: Option<String>,
    #[serde(rename = "duree")]
    pub duration: String,
}

/// Substitute regimen for beta-lactam allergic patients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergyAlternative {
    pub molecule: String,
    #[serde(rename = "posologie")]
    pub dosage: String,
    #[serde(default)]
    pub reinjection: Option<String>,
}

/// Narrative recommendation that applies across specialties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralRecommendation {
    pub id: String,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "contenu")]
    pub content: String,
    pub source_page: i64,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_alternatives_decode_as_empty() {
        let json = r#"{
            "id": "a",
            "nom": "A",
            "specialite": "S",
            "alternative_allergie": null,
            "pas_d_abp": true,
            "force_recommandation": "GRADE 2",
            "source_page": 74,
            "source_tableau": "T"
        }"#;
        let intervention: Intervention = serde_json::from_str(json).unwrap();
        assert!(intervention.allergy_alternatives.is_empty());
        assert!(intervention.protocol.is_none());
        assert!(!intervention.has_prophylaxis());
    }

    #[test]
    fn molecules_include_alternatives() {
        let intervention = Intervention {
            id: "pth".to_string(),
            name: "Prothèse totale de hanche".to_string(),
            specialty_name: "Ortho".to_string(),
            protocol: Some(Protocol {
                molecule: "Céfazoline".to_string(),
                dosage: "2g IVL".to_string(),
                reinjection: Some("1g toutes les 4h".to_string()),
                duration: "Durée de l'intervention".to_string(),
            }),
            allergy_alternatives: vec![AllergyAlternative {
                molecule: "Clindamycine".to_string(),
                dosage: "900mg IVL".to_string(),
                reinjection: None,
            }],
            no_prophylaxis: false,
            recommendation_strength: "GRADE 1".to_string(),
            source_page: 73,
            source_table: "Tableau 1".to_string(),
            notes: None,
        };
        let molecules: Vec<&str> = intervention.molecules().collect();
        assert_eq!(molecules, vec!["Céfazoline", "Clindamycine"]);
    }
}
