use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Numbered links shown by the pager at most, ellipses excluded.
pub const MAX_PAGE_LINKS: i64 = 5;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }

    /// Slices an already materialized list to the requested page.
    pub fn apply<T>(&self, items: Vec<T>) -> (Vec<T>, i64, i64, i64) {
        let (page, per_page, offset) = self.normalize();
        let total = items.len() as i64;
        let window = items
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(per_page as usize)
            .collect();
        (window, page, per_page, total)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GameQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Free-text search; takes precedence over `genre`.
    pub search: Option<String>,
    /// Genre id.
    pub genre: Option<i64>,
}

impl GameQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PageSlot {
    Page(i64),
    Ellipsis,
}

/// Page links around `current`: every page when there are few, otherwise the
/// first and last page, a run of neighbours, and ellipses over the gaps.
pub fn page_window(current: i64, total_pages: i64) -> Vec<PageSlot> {
    if total_pages <= 0 {
        return Vec::new();
    }
    if total_pages <= MAX_PAGE_LINKS {
        return (1..=total_pages).map(PageSlot::Page).collect();
    }
    let current = current.clamp(1, total_pages);

    let mut start = (current - 1).max(2);
    let mut end = current.saturating_add(1).min(total_pages - 1);
    if current <= 3 {
        end = 4;
    } else if current >= total_pages - 2 {
        start = total_pages - 3;
    }

    let mut slots = vec![PageSlot::Page(1)];
    if start > 2 {
        slots.push(PageSlot::Ellipsis);
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total_pages - 1 {
        slots.push(PageSlot::Ellipsis);
    }
    slots.push(PageSlot::Page(total_pages));
    slots
}
