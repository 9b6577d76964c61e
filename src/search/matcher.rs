//! Bilingual (Latin/Cyrillic) record matching

use super::query::QueryState;
use super::record::SearchableRecord;

/// Whether `record` passes the filter described by `query`.
///
/// The display name is checked against both the transliterated and the raw
/// Latin term. The market identifier is only checked against the raw Latin
/// term, since market codes stay in Latin script.
pub fn matches<R: SearchableRecord + ?Sized>(query: &QueryState, record: &R) -> bool {
    if query.is_empty() {
        return true;
    }

    let latin = query.latin_term();
    let cyrillic = query.transliterated_term();
    let name = record.display_name().to_lowercase();

    let name_matches = (!cyrillic.is_empty() && name.contains(cyrillic))
        || (!latin.is_empty() && name.contains(latin));
    if name_matches {
        return true;
    }

    !latin.is_empty() && record.market_identifier().to_lowercase().contains(latin)
}

/// Records matching `query`, in their original order
pub fn filter_records<'a, R: SearchableRecord>(query: &QueryState, records: &'a [R]) -> Vec<&'a R> {
    records.iter().filter(|r| matches(query, *r)).collect()
}

/// Find the record whose picker label equals `selection` exactly
pub fn find_by_option_label<'a, R: SearchableRecord>(records: &'a [R], selection: &str) -> Option<&'a R> {
    records.iter().find(|r| r.option_label() == selection)
}
