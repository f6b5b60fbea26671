use serde::Serialize;
use utoipa::ToSchema;

use crate::routes::params::{PageSlot, page_window};

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<PageSlot>>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
            total_pages: None,
            pages: None,
        }
    }

    /// Page metadata plus the numbered links a pager should render.
    pub fn with_window(page: i64, per_page: i64, total: i64) -> Self {
        let total_pages = if per_page > 0 {
            total.max(0).saturating_add(per_page - 1) / per_page
        } else {
            0
        };
        Self {
            total_pages: Some(total_pages),
            pages: Some(page_window(page, total_pages)),
            ..Self::new(page, per_page, total)
        }
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
            total_pages: None,
            pages: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
