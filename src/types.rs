//! Type definitions for directory service API responses
//!
//! Field names match the service's snake_case wire names directly. Optional
//! wire fields are `Option<T>` with `#[serde(default)]` so that "absent",
//! "null" and "empty" stay distinguishable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// List / Search Types
// ============================================================================

/// One directory record as returned by the list and search endpoints.
/// Identity is `professional_id` (opaque, unique, stable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalSummary {
    pub professional_id: String,
    pub name: String,
    #[serde(default)]
    pub specializations: Option<Vec<String>>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Unfiltered snapshot of the whole directory (`GET /professionals`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub total: u64,
    pub professionals: Vec<ProfessionalSummary>,
}

/// Result of a by-type search. `total` is the service's count of all
/// matches and may exceed `results.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSearchResponse {
    pub professional_type: String,
    pub total: u64,
    pub results: Vec<ProfessionalSummary>,
}

/// Result of a free-text specialization search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecializationSearchResponse {
    pub specialization: String,
    pub total: u64,
    pub results: Vec<ProfessionalSummary>,
}

/// One entry of the server-enumerated type catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalType {
    pub value: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCatalogResponse {
    pub professional_types: Vec<ProfessionalType>,
}

// ============================================================================
// Detail Record Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScfhsLicense {
    pub license_number: String,
    pub license_type: String,
    pub issue_date: String,
    pub expiry_date: String,
    pub classification: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherLicense {
    pub issuer: String,
    pub license_number: String,
    pub expiry: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCourse {
    pub name: String,
    pub provider: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkPlace {
    pub workplace_name: String,
    pub position: String,
    pub start_date: String,
    /// Either a date or the literal "Current"
    pub end_date: String,
    pub responsibilities: String,
}

/// Full professional record (`GET /professionals/{id}`) — the fields the
/// service extracts from uploaded documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalRecord {
    pub professional_id: String,
    pub professional_type: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub specializations: Option<Vec<String>>,
    #[serde(default)]
    pub sub_specializations: Option<Vec<String>>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub summary_arabic: Option<String>,
    #[serde(default)]
    pub professional_journey_arabic: Option<String>,
    #[serde(default)]
    pub degrees_and_certificates: Option<Vec<String>>,
    #[serde(default)]
    pub scfhs_license: Option<ScfhsLicense>,
    #[serde(default)]
    pub other_licenses: Option<Vec<OtherLicense>>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub certifications: Option<Vec<String>>,
    #[serde(default)]
    pub training_courses: Option<Vec<TrainingCourse>>,
    #[serde(default)]
    pub awards_and_recognition: Option<Vec<String>>,
    #[serde(default)]
    pub research_and_publications: Option<Vec<String>>,
    #[serde(default)]
    pub work_places: Option<Vec<WorkPlace>>,
    #[serde(default)]
    pub current_workplace: Option<String>,
    #[serde(default)]
    pub consultation_fees: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub equipment_expertise: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub uploaded_files: Vec<String>,
    #[serde(default)]
    pub raw_analysis: Option<String>,
    #[serde(default)]
    pub analysis_error: Option<String>,
}

// ============================================================================
// Mutation Envelopes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProfessionalResponse {
    pub status: String,
    pub message: String,
    pub professional_id: String,
    pub data: ProfessionalRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetProfessionalResponse {
    pub status: String,
    pub message: String,
    pub professional_id: String,
    pub data: ProfessionalRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfessionalResponse {
    pub status: String,
    pub message: String,
    pub data: ProfessionalRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteProfessionalResponse {
    pub status: String,
    pub message: String,
    pub deleted_professional: String,
}

/// Partial-update payload for `PUT /professionals/{id}`. Absent fields are
/// left untouched by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_workplace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specializations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_fees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

// ============================================================================
// Statistics Types
// ============================================================================

/// Aggregate analytics (`GET /professionals/stats`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_professionals: u64,
    #[serde(default)]
    pub by_professional_type: HashMap<String, u64>,
    pub total_specializations: u64,
    #[serde(default)]
    pub top_specializations: HashMap<String, u64>,
    pub average_years_of_experience: f64,
    pub professionals_with_scfhs_license: u64,
    pub professionals_with_certifications: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_directory_listing() {
        let json = r#"{
            "total": 2,
            "professionals": [
                {
                    "professional_id": "p-1",
                    "name": "Dr. Huda",
                    "specializations": ["Cardiology"],
                    "years_of_experience": 12,
                    "phone": "+966500000000",
                    "email": null,
                    "created_at": "2024-03-01T09:00:00Z"
                },
                {
                    "professional_id": "p-2",
                    "name": "Sami"
                }
            ]
        }"#;

        let listing: DirectoryListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.total, 2);
        assert_eq!(listing.professionals.len(), 2);
        assert_eq!(
            listing.professionals[0].specializations.as_deref(),
            Some(&["Cardiology".to_string()][..])
        );
        // absent and null optional fields both land as None
        assert_eq!(listing.professionals[0].email, None);
        assert_eq!(listing.professionals[1].specializations, None);
        assert_eq!(listing.professionals[1].years_of_experience, None);
    }

    #[test]
    fn test_deserialize_stats() {
        let json = r#"{
            "total_professionals": 40,
            "by_professional_type": {"physician": 25, "nurse": 15},
            "total_specializations": 12,
            "top_specializations": {"Cardiology": 8, "Neurology": 5},
            "average_years_of_experience": 9.4,
            "professionals_with_scfhs_license": 31,
            "professionals_with_certifications": 22
        }"#;

        let stats: StatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_professionals, 40);
        assert_eq!(stats.by_professional_type.get("physician"), Some(&25));
        assert_eq!(stats.top_specializations.len(), 2);
    }

    #[test]
    fn test_update_payload_skips_absent_fields() {
        let update = ProfessionalUpdate {
            name: Some("Dr. Huda".to_string()),
            years_of_experience: Some(13),
            ..Default::default()
        };

        let json = serde_json::to_value(&update).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("name"));
        assert!(obj.contains_key("years_of_experience"));
        assert!(!obj.contains_key("email"));
    }
}
