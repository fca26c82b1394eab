use std::cmp::Ordering;

use chrono::NaiveDate;

use super::facets::filter_options;
use super::types::{LabEntry, SearchRequest, SearchResponse, SortKey};
use crate::catalog::normalize::clean_field;
use crate::catalog::store::LabStore;
use crate::catalog::types::IndexedLab;

/// Runs the pipeline for one request: filter, sort, paginate, assemble.
pub fn run(store: &LabStore, request: &SearchRequest) -> SearchResponse {
    let mut matches: Vec<&IndexedLab> = store
        .labs()
        .iter()
        .filter(|lab| matches_filters(lab, request))
        .collect();

    sort_matches(&mut matches, request.sort, &request.query);

    let total_count = matches.len();
    let total_pages = total_count.div_ceil(request.limit);
    let start = (request.page - 1).saturating_mul(request.limit);

    let labs: Vec<LabEntry> = matches
        .iter()
        .skip(start)
        .take(request.limit)
        .map(|lab| clean_entry(lab))
        .collect();

    SearchResponse {
        labs,
        total_count,
        current_page: request.page,
        total_pages,
        filters: filter_options(store, request.state.as_deref()),
    }
}

// All active filters are AND-combined; a record must satisfy every one.
fn matches_filters(lab: &IndexedLab, request: &SearchRequest) -> bool {
    if !request.query.is_empty() && !matches_text(&lab.haystack, &request.query) {
        return false;
    }

    if let Some(state) = &request.state {
        if lab.state_clean != *state {
            return false;
        }
    }

    if let Some(city) = &request.city {
        if lab.city_clean != *city {
            return false;
        }
    }

    if !request.disciplines.is_empty() {
        // OR within the discipline filter: one requested category suffices.
        let hit = lab
            .disciplines
            .iter()
            .any(|have| request.disciplines.iter().any(|want| want == have));
        if !hit {
            return false;
        }
    }

    true
}

// Whole-phrase substring match, falling back to AND-of-words: every
// query token must appear somewhere in the haystack.
fn matches_text(haystack: &str, query: &str) -> bool {
    let needle = query.to_lowercase();
    if haystack.contains(&needle) {
        return true;
    }
    needle.split_whitespace().all(|word| haystack.contains(word))
}

fn sort_matches(matches: &mut [&IndexedLab], sort: SortKey, query: &str) {
    match sort {
        SortKey::Name => matches.sort_by(|a, b| name_order(a, b)),
        SortKey::Date => matches.sort_by(|a, b| issue_date_order(a, b)),
        SortKey::Relevance => {
            if query.is_empty() {
                // Nothing to be relevant to.
                matches.sort_by(|a, b| name_order(a, b));
                return;
            }
            let needle = query.to_lowercase();
            matches.sort_by(|a, b| {
                let a_hit = a.record.lab_name.to_lowercase().contains(&needle);
                let b_hit = b.record.lab_name.to_lowercase().contains(&needle);
                b_hit.cmp(&a_hit).then_with(|| name_order(a, b))
            });
        }
    }
}

fn name_order(a: &IndexedLab, b: &IndexedLab) -> Ordering {
    a.record
        .lab_name
        .to_lowercase()
        .cmp(&b.record.lab_name.to_lowercase())
}

// Newest first. A pair with an unparsable date compares equal: a bad date
// string must not break the sort, it just leaves that pair's order to the
// stable sort.
fn issue_date_order(a: &IndexedLab, b: &IndexedLab) -> Ordering {
    match (
        parse_issue_date(&a.record.date_of_issue),
        parse_issue_date(&b.record.date_of_issue),
    ) {
        (Some(a_date), Some(b_date)) => b_date.cmp(&a_date),
        _ => Ordering::Equal,
    }
}

// Stored dates are day-first DD-MM-YYYY, not ISO order.
fn parse_issue_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d-%m-%Y").ok()
}

// The only point where the internal and external record shapes diverge:
// display fields are cleaned, is_active is dropped.
fn clean_entry(lab: &IndexedLab) -> LabEntry {
    let record = &lab.record;
    LabEntry {
        id: record.id,
        lab_name: clean_field(&record.lab_name),
        address: clean_field(&record.address),
        city: lab.city_clean.clone(),
        state: lab.state_clean.clone(),
        contact_person: clean_field(&record.contact_person),
        contact_number: record.contact_number.clone(),
        email_id: clean_field(&record.email_id),
        discipline: clean_field(&record.discipline),
        certificate_no: record.certificate_no.clone(),
        date_of_issue: record.date_of_issue.clone(),
        date_of_expiry: record.date_of_expiry.clone(),
    }
}
