/// Ordered (keyword, canonical category) table for discipline mapping.
///
/// Matching is case-insensitive substring containment of the keyword in the
/// token, first match wins. Order matters: specific keywords sit above the
/// catch-all "it" entry, which would otherwise swallow unrelated tokens.
pub const DISCIPLINE_TAXONOMY: &[(&str, &str)] = &[
    ("chemical", "Chemical"),
    ("mechanical", "Mechanical"),
    ("biological", "Biological"),
    ("electrical", "Electrical"),
    ("electronic", "Electronics"),
    ("non-destructive", "Non-Destructive Testing"),
    ("ndt", "Non-Destructive Testing"),
    ("forensic", "Forensic"),
    ("photometr", "Photometry"),
    ("radiolog", "Radiology"),
    ("software", "Software & IT"),
    ("it", "Software & IT"),
];

/// Produces a display-clean copy of a raw field: embedded newlines become
/// spaces, leading/trailing whitespace is dropped, and interior whitespace
/// runs collapse to a single space.
pub fn clean_field(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Maps one discipline token onto its canonical category. Unmatched tokens
/// pass through as their cleaned text.
pub fn canonical_discipline(token: &str) -> String {
    let lowered = token.to_lowercase();
    for (keyword, canonical) in DISCIPLINE_TAXONOMY {
        if lowered.contains(keyword) {
            return (*canonical).to_string();
        }
    }
    clean_field(token)
}

/// Splits a raw discipline string into canonical categories.
///
/// Newlines become spaces, the string is split on commas and ampersands,
/// tokens are trimmed and empty ones dropped, and each survivor is mapped
/// through the taxonomy. Duplicates are kept; downstream use is containment
/// testing, not counting.
pub fn split_disciplines(raw: &str) -> Vec<String> {
    raw.replace(['\r', '\n'], " ")
        .split([',', '&'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(canonical_discipline)
        .collect()
}
