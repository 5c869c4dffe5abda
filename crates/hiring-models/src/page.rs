//! Pagination and sort contract for list endpoints.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Pagination limits.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parse case-insensitively; anything unrecognised is ascending.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "desc" | "descending" => Self::Descending,
            _ => Self::Ascending,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Position fields a list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionSortField {
    Id,
    #[default]
    Title,
    Description,
    Location,
    Status,
    Budget,
    ClosingDate,
    /// Orders by recruiter name
    Recruiter,
    /// Orders by department name
    Department,
}

impl PositionSortField {
    /// Wire name of the field, as used in JSON bodies.
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Description => "description",
            Self::Location => "location",
            Self::Status => "status",
            Self::Budget => "budget",
            Self::ClosingDate => "closingDate",
            Self::Recruiter => "recruiter",
            Self::Department => "department",
        }
    }
}

impl FromStr for PositionSortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "location" => Ok(Self::Location),
            "status" => Ok(Self::Status),
            "budget" => Ok(Self::Budget),
            "closingDate" | "closing_date" => Ok(Self::ClosingDate),
            "recruiter" | "recruiter.name" => Ok(Self::Recruiter),
            "department" | "department.name" => Ok(Self::Department),
            other => Err(ValidationError::UnknownSortField(other.to_string())),
        }
    }
}

/// Requested page window and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u32,
    /// Page size, at least 1
    pub size: u32,
    pub sort: PositionSortField,
    pub direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: PositionSortField::default(),
            direction: SortDirection::default(),
        }
    }
}

impl PageRequest {
    /// Build a request, rejecting sizes outside `1..=MAX_PAGE_SIZE`.
    pub fn new(
        page: u32,
        size: u32,
        sort: PositionSortField,
        direction: SortDirection,
    ) -> Result<Self, ValidationError> {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(ValidationError::InvalidPageSize { max: MAX_PAGE_SIZE });
        }
        Ok(Self {
            page,
            size,
            sort,
            direction,
        })
    }

    /// Build a request from raw query parameters.
    pub fn from_params(
        page: Option<u32>,
        size: Option<u32>,
        sort_by: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let sort = sort_by.map(str::parse::<PositionSortField>).transpose()?.unwrap_or_default();
        let direction = direction
            .map(SortDirection::from_str_or_default)
            .unwrap_or_default();
        Self::new(page.unwrap_or(0), size.unwrap_or(DEFAULT_PAGE_SIZE), sort, direction)
    }

    /// Number of elements preceding this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One page of results plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Requested page size
    pub size: u32,
    /// Zero-based page index
    pub number: u32,
    pub number_of_elements: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Wrap a slice of results fetched for `request`.
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = request.size.max(1);
        let total_pages = total_elements.div_ceil(u64::from(size)) as u32;
        let number_of_elements = content.len() as u32;
        Self {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            size: request.size,
            number: request.page,
            number_of_elements,
            first: request.page == 0,
            last: request.page.saturating_add(1) >= total_pages,
        }
    }
}
