use log::debug;

use super::model::{CourseRecord, SortKey, YearFilter};

// ---------------------------------------------------------------------------
// FilteredView – what the report is rendered from
// ---------------------------------------------------------------------------

/// Records that passed the year filter, in final sort order, with their
/// marks extracted in the same order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView {
    pub records: Vec<CourseRecord>,
    pub marks: Vec<f64>,
}

impl FilteredView {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Return the records matching `filter`, preserving their original order.
pub fn filter_by_year(records: &[CourseRecord], filter: YearFilter) -> Vec<CourseRecord> {
    records
        .iter()
        .filter(|rec| filter.matches(rec))
        .cloned()
        .collect()
}

/// Sort in place by the chosen key.
///
/// * [`SortKey::ByTitle`] – lexicographic on the course name
/// * [`SortKey::ByCode`]  – numeric on the course code
pub fn sort_records(records: &mut [CourseRecord], key: SortKey) {
    match key {
        SortKey::ByTitle => records.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::ByCode => records.sort_by_key(|rec| rec.code),
    }
}

/// Filter, sort, and derive the parallel mark sequence.
pub fn build_view(records: &[CourseRecord], filter: YearFilter, key: SortKey) -> FilteredView {
    let mut selected = filter_by_year(records, filter);
    if !selected.is_empty() {
        sort_records(&mut selected, key);
    }

    let marks = selected.iter().map(|rec| rec.mark).collect();
    let view = FilteredView {
        records: selected,
        marks,
    };
    debug!("{} of {} records match {filter}", view.len(), records.len());
    view
}
