use serde::Serialize;
use service::pagination::{Page, Paging};

/// Success envelope: `{"data": ...}` plus `paging` for paged lists.
#[derive(Debug, Serialize)]
pub struct WebResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl<T> WebResponse<T> {
    pub fn data(data: T) -> Self { Self { data, paging: None } }
}

impl<T> WebResponse<Vec<T>> {
    pub fn paged(page: Page<T>) -> Self { Self { data: page.data, paging: Some(page.paging) } }
}
