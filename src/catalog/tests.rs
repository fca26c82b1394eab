//! Catalog Module Tests
//!
//! Validates field cleaning, discipline splitting/mapping, source-file
//! deserialization, and the store's precomputed facet lists.

#[cfg(test)]
mod tests {
    use crate::catalog::normalize::{
        canonical_discipline, clean_field, split_disciplines, DISCIPLINE_TAXONOMY,
    };
    use crate::catalog::store::LabStore;
    use crate::catalog::types::LabRecord;

    fn lab(id: u64, name: &str, city: &str, state: &str, discipline: &str) -> LabRecord {
        LabRecord {
            id,
            lab_name: name.to_string(),
            address: "Plot 1".to_string(),
            city: city.to_string(),
            state: state.to_string(),
            contact_person: "A. Person".to_string(),
            contact_number: "9800000000".to_string(),
            email_id: "lab@example.com".to_string(),
            discipline: discipline.to_string(),
            certificate_no: format!("TC-{id}"),
            date_of_issue: "01-01-2023".to_string(),
            date_of_expiry: "01-01-2025".to_string(),
            is_active: true,
        }
    }

    // ============================================================
    // CLEANING TESTS - clean_field
    // ============================================================

    #[test]
    fn test_clean_field_replaces_newlines() {
        assert_eq!(clean_field("Andhra\nPradesh"), "Andhra Pradesh");
        assert_eq!(clean_field("Andhra\r\nPradesh"), "Andhra Pradesh");
    }

    #[test]
    fn test_clean_field_trims_whitespace() {
        assert_eq!(clean_field("  Surat  "), "Surat");
    }

    #[test]
    fn test_clean_field_collapses_interior_runs() {
        // A newline next to a space must not leave a double space behind.
        assert_eq!(clean_field("Sector 5 \n Industrial Area"), "Sector 5 Industrial Area");
    }

    #[test]
    fn test_clean_field_empty() {
        assert_eq!(clean_field(""), "");
        assert_eq!(clean_field(" \n "), "");
    }

    // ============================================================
    // TAXONOMY TESTS - canonical_discipline
    // ============================================================

    #[test]
    fn test_canonical_discipline_case_insensitive() {
        assert_eq!(canonical_discipline("CHEMICAL testing"), "Chemical");
        assert_eq!(canonical_discipline("chemical"), "Chemical");
    }

    #[test]
    fn test_canonical_discipline_substring_match() {
        // Keyword containment, not equality.
        assert_eq!(canonical_discipline("Mechanical Testing"), "Mechanical");
        assert_eq!(canonical_discipline("Non-Destructive Testing (NDT)"), "Non-Destructive Testing");
    }

    #[test]
    fn test_canonical_discipline_first_match_wins() {
        // "Electrical" must not be captured by the later "electronic" entry.
        assert_eq!(canonical_discipline("Electrical"), "Electrical");
        assert_eq!(canonical_discipline("Electronics"), "Electronics");
    }

    #[test]
    fn test_canonical_discipline_unmatched_passthrough() {
        assert_eq!(canonical_discipline("Textile"), "Textile");
        // Passthrough still gets cleaned.
        assert_eq!(canonical_discipline("Textile \n Dyes"), "Textile Dyes");
    }

    #[test]
    fn test_taxonomy_covers_every_canonical_category() {
        let canonicals: Vec<&str> = DISCIPLINE_TAXONOMY.iter().map(|(_, c)| *c).collect();
        for expected in [
            "Chemical",
            "Mechanical",
            "Biological",
            "Electrical",
            "Electronics",
            "Non-Destructive Testing",
            "Forensic",
            "Photometry",
            "Radiology",
            "Software & IT",
        ] {
            assert!(canonicals.contains(&expected), "missing category {expected}");
        }
    }

    // ============================================================
    // SPLITTING TESTS - split_disciplines
    // ============================================================

    #[test]
    fn test_split_disciplines_on_comma() {
        let parts = split_disciplines("Chemical, Biological");
        assert_eq!(parts, vec!["Chemical", "Biological"]);
    }

    #[test]
    fn test_split_disciplines_on_ampersand_with_newline() {
        // Raw datasets carry entries like "Chemical &\nMechanical Testing".
        let parts = split_disciplines("Chemical &\nMechanical Testing");
        assert_eq!(parts, vec!["Chemical", "Mechanical"]);
    }

    #[test]
    fn test_split_disciplines_drops_empty_tokens() {
        let parts = split_disciplines("Chemical, , &Mechanical");
        assert_eq!(parts, vec!["Chemical", "Mechanical"]);
    }

    #[test]
    fn test_split_disciplines_keeps_duplicates() {
        let parts = split_disciplines("Chemical, Chemical Testing");
        assert_eq!(parts, vec!["Chemical", "Chemical"]);
    }

    #[test]
    fn test_split_disciplines_empty_input() {
        assert!(split_disciplines("").is_empty());
        assert!(split_disciplines(" & , ").is_empty());
    }

    // ============================================================
    // TYPES TESTS - LabRecord source keys
    // ============================================================

    #[test]
    fn test_lab_record_deserializes_source_keys() {
        let json = r#"{
            "id": 7,
            "Lab Name": "Apex Chemical Labs",
            "Address": "Plot 12,\nGIDC Estate",
            "City": "Surat",
            "State": "Gujarat",
            "Contact Person": "R. Shah",
            "Contact Number": "9812345678",
            "Email ID": "info@apexlabs.in",
            "Discipline": "Chemical &\nMechanical",
            "Certificate No": "TC-1234",
            "Date of Issue": "15-06-2022",
            "Date of Expiry": "14-06-2024",
            "isActive": true
        }"#;

        let record: LabRecord = serde_json::from_str(json).expect("deserialization failed");
        assert_eq!(record.id, 7);
        assert_eq!(record.lab_name, "Apex Chemical Labs");
        assert_eq!(record.contact_person, "R. Shah");
        assert_eq!(record.email_id, "info@apexlabs.in");
        assert!(record.is_active);
    }

    #[test]
    fn test_lab_record_is_active_defaults_false() {
        let json = r#"{
            "id": 1,
            "Lab Name": "L",
            "Address": "A",
            "City": "C",
            "State": "S",
            "Contact Person": "P",
            "Contact Number": "N",
            "Email ID": "E",
            "Discipline": "Chemical",
            "Certificate No": "T",
            "Date of Issue": "01-01-2020",
            "Date of Expiry": "01-01-2022"
        }"#;

        let record: LabRecord = serde_json::from_str(json).expect("deserialization failed");
        assert!(!record.is_active);
    }

    // ============================================================
    // STORE TESTS - precomputed facets and derivation
    // ============================================================

    #[test]
    fn test_store_states_distinct_sorted() {
        let store = LabStore::from_records(vec![
            lab(1, "A", "Surat", "Gujarat", "Chemical"),
            lab(2, "B", "Pune", "Maharashtra", "Chemical"),
            lab(3, "C", "Rajkot", "Gujarat", "Chemical"),
        ]);

        assert_eq!(store.states(), &["Gujarat", "Maharashtra"]);
    }

    #[test]
    fn test_store_cleans_state_before_faceting() {
        // "Gujarat" and "Gujarat\n" are the same state once cleaned.
        let store = LabStore::from_records(vec![
            lab(1, "A", "Surat", "Gujarat\n", "Chemical"),
            lab(2, "B", "Rajkot", "  Gujarat", "Chemical"),
        ]);

        assert_eq!(store.states(), &["Gujarat"]);
    }

    #[test]
    fn test_store_cities_cascade_by_state() {
        let store = LabStore::from_records(vec![
            lab(1, "A", "Surat", "Gujarat", "Chemical"),
            lab(2, "B", "Rajkot", "Gujarat", "Chemical"),
            lab(3, "C", "Pune", "Maharashtra", "Chemical"),
        ]);

        assert_eq!(store.cities_in(Some("Gujarat")), ["Rajkot", "Surat"]);
        assert_eq!(store.cities_in(None), ["Pune", "Rajkot", "Surat"]);
    }

    #[test]
    fn test_store_discipline_facet_uses_canonical_values() {
        let store = LabStore::from_records(vec![
            lab(1, "A", "Surat", "Gujarat", "Chemical &\nMechanical Testing"),
            lab(2, "B", "Pune", "Maharashtra", "Textile"),
        ]);

        assert_eq!(store.disciplines(), &["Chemical", "Mechanical", "Textile"]);
    }

    #[test]
    fn test_store_skips_empty_facet_values() {
        let store = LabStore::from_records(vec![
            lab(1, "A", "", "Gujarat", "Chemical"),
            lab(2, "B", "Surat", "Gujarat", "Chemical"),
        ]);

        assert_eq!(store.cities_in(None), ["Surat"]);
    }

    #[test]
    fn test_store_haystack_is_lowercased() {
        let store = LabStore::from_records(vec![lab(1, "Apex LABS", "Surat", "Gujarat", "Chemical")]);

        let indexed = &store.labs()[0];
        assert!(indexed.haystack.contains("apex labs"));
        assert!(indexed.haystack.contains("surat"));
        assert!(!indexed.haystack.contains("LABS"));
    }
}
