use db_adapters::{Order, Page, PageParams};
use serde::{Deserialize, Serialize};

use crate::UseCaseError;

pub const DEFAULT_LIMIT: u64 = 25;
pub const MAX_LIMIT: u64 = 100;

/// `?page=2&limit=10&sort=-name`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<String>,
}

impl ListQuery {
    pub fn page_params(&self) -> Result<PageParams, UseCaseError> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if page == 0 || limit == 0 {
            return Err(UseCaseError::BadRequest(
                "page and limit must be positive".to_string(),
            ));
        }
        if limit > MAX_LIMIT {
            return Err(UseCaseError::BadRequest(format!(
                "limit must be at most {}",
                MAX_LIMIT
            )));
        }
        // The offset is bound as a signed 64-bit integer.
        match page.checked_mul(limit) {
            Some(end) if end <= i64::MAX as u64 => Ok(PageParams { page, limit }),
            _ => Err(UseCaseError::BadRequest("page is out of range".to_string())),
        }
    }

    /// Splits `sort` into a field name and direction. A leading `-` means descending.
    pub fn sort_key(&self) -> Option<(&str, Order)> {
        let sort = self.sort.as_deref()?.trim();
        match sort.strip_prefix('-') {
            Some(field) => Some((field, Order::Desc)),
            None if sort.is_empty() => None,
            None => Some((sort, Order::Asc)),
        }
    }
}

pub(crate) fn unsortable(field: &str) -> UseCaseError {
    UseCaseError::BadRequest(format!("Cannot sort by {}", field))
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PageRef {
    pub page: u64,
    pub limit: u64,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageRef>,
}

#[derive(Debug)]
pub struct Listed<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub pagination: Pagination,
}

impl<T> Listed<T> {
    pub fn from_page(page: Page<T>, params: PageParams) -> Self {
        let end = params.page.saturating_mul(params.limit);
        let start = end - params.limit;
        Self {
            items: page.items,
            total: page.total,
            pagination: Pagination {
                next: (end < page.total).then_some(PageRef {
                    page: params.page + 1,
                    limit: params.limit,
                }),
                prev: (start > 0).then_some(PageRef {
                    page: params.page - 1,
                    limit: params.limit,
                }),
            },
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listed<U> {
        Listed {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            pagination: self.pagination,
        }
    }
}
