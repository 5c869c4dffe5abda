//! Position ordering for paginated scans.
//!
//! Ties on the sort key are broken by id so that pages never overlap.

use std::cmp::Ordering;

use hiring_models::{PageRequest, Position, PositionSortField, SortDirection};

/// Compare two positions on a single field, ascending.
fn compare_field(field: PositionSortField, a: &Position, b: &Position) -> Ordering {
    match field {
        PositionSortField::Id => a.id.cmp(&b.id),
        PositionSortField::Title => a.title.cmp(&b.title),
        PositionSortField::Description => a.description.cmp(&b.description),
        PositionSortField::Location => a.location.cmp(&b.location),
        PositionSortField::Status => a.status.as_str().cmp(b.status.as_str()),
        PositionSortField::Budget => a.budget.cmp(&b.budget),
        // None sorts first
        PositionSortField::ClosingDate => a.closing_date.cmp(&b.closing_date),
        PositionSortField::Recruiter => a.recruiter.name.cmp(&b.recruiter.name),
        PositionSortField::Department => a.department.name.cmp(&b.department.name),
    }
}

/// Full comparator for a page request, including the id tie-break.
pub fn compare(request: &PageRequest, a: &Position, b: &Position) -> Ordering {
    let ordering = compare_field(request.sort, a, b).then_with(|| a.id.cmp(&b.id));
    match request.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Sort `positions` in place and cut out the requested window.
pub fn sort_and_slice(mut positions: Vec<Position>, request: &PageRequest) -> Vec<Position> {
    positions.sort_by(|a, b| compare(request, a, b));
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    positions
        .into_iter()
        .skip(offset)
        .take(request.size as usize)
        .collect()
}
