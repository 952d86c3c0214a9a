//! Raw deserialization models for the upstream JSON document.
//!
//! Field names mirror the `congress-legislators` dataset. Only the fields
//! the transformer reads are declared; everything else in the document is
//! ignored. Absent fields default to empty so a sparse record never fails
//! deserialization.

use serde::Deserialize;

/// One member entry from the upstream document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    #[serde(default)]
    pub id: RawId,
    #[serde(default)]
    pub name: RawName,
    #[serde(default)]
    pub terms: Vec<RawTerm>,
}

/// Member identifiers. Only the bioguide id is used as the stable key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawId {
    #[serde(default)]
    pub bioguide: String,
}

/// Member name fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    /// Preferred display name; absent for some members.
    pub official_full: Option<String>,
}

/// One term of service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTerm {
    /// `"rep"` or `"sen"`.
    #[serde(rename = "type", default)]
    pub term_type: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub party: String,
    /// ISO date, e.g. `"2023-01-03"`.
    #[serde(default)]
    pub start: String,
    /// ISO date; lexicographic comparison matches temporal ordering.
    #[serde(default)]
    pub end: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_member_deserializes_with_defaults() {
        let member: RawMember = serde_json::from_str(r#"{"id": {"bioguide": "A000001"}}"#).unwrap();
        assert_eq!(member.id.bioguide, "A000001");
        assert!(member.terms.is_empty());
        assert!(member.name.official_full.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let member: RawMember = serde_json::from_str(
            r#"{
                "id": {"bioguide": "B000002", "thomas": "00123", "govtrack": 400001},
                "name": {"first": "Jo", "last": "Doe", "suffix": "Jr."},
                "bio": {"birthday": "1950-01-01", "gender": "F"},
                "terms": [{"type": "sen", "state": "CA", "party": "Democrat",
                           "start": "2019-01-03", "end": "2025-01-03", "class": 1}]
            }"#,
        )
        .unwrap();
        assert_eq!(member.terms.len(), 1);
        assert_eq!(member.terms[0].term_type, "sen");
        assert_eq!(member.terms[0].end, "2025-01-03");
    }
}
