use serde::Deserialize;

/// A lab as stored in the source dataset file.
///
/// The file uses space-cased keys ("Lab Name", "Contact Person", ...), which
/// are mapped to conventional field names here and nowhere else. String
/// fields may contain embedded newlines or stray whitespace; that is a known
/// data-quality issue the catalog tolerates.
#[derive(Debug, Clone, Deserialize)]
pub struct LabRecord {
    pub id: u64,
    #[serde(rename = "Lab Name")]
    pub lab_name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Contact Person")]
    pub contact_person: String,
    #[serde(rename = "Contact Number")]
    pub contact_number: String,
    #[serde(rename = "Email ID")]
    pub email_id: String,
    #[serde(rename = "Discipline")]
    pub discipline: String,
    #[serde(rename = "Certificate No")]
    pub certificate_no: String,
    /// DD-MM-YYYY, day first.
    #[serde(rename = "Date of Issue")]
    pub date_of_issue: String,
    #[serde(rename = "Date of Expiry")]
    pub date_of_expiry: String,
    /// Internal housekeeping flag. Never serialized into any response.
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
}

/// A record together with the derived fields computed once at load time:
/// cleaned geography for exact-match filtering and faceting, the normalized
/// discipline list, and the lowercased haystack the free-text filter scans.
#[derive(Debug, Clone)]
pub struct IndexedLab {
    pub record: LabRecord,
    pub state_clean: String,
    pub city_clean: String,
    pub disciplines: Vec<String>,
    pub haystack: String,
}
