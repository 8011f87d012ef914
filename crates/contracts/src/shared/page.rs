use serde::{Deserialize, Serialize};

/// What a list endpoint may answer: a bare array or a paged envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paged {
        #[serde(alias = "data")]
        items: Vec<T>,
        total: u64,
    },
    Plain(Vec<T>),
}

/// Normalised list result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self { items, total }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

impl<T> From<ListEnvelope<T>> for Page<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        match envelope {
            ListEnvelope::Paged { items, total } => Page { items, total },
            ListEnvelope::Plain(items) => Page::new(items),
        }
    }
}

/// Follow-up request for a paged listing (`page` is 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Page to ask for once `fetched` of `total` items are in, keeping the
    /// server's page size `limit`. `None` when nothing is missing.
    pub fn after(fetched: usize, total: u64, limit: usize) -> Option<Self> {
        if limit == 0 || fetched as u64 >= total {
            return None;
        }
        Some(Self {
            page: (fetched / limit) as u64 + 1,
            limit: limit as u64,
        })
    }

    /// `path` with `page` and `limit` added to its query string.
    pub fn append_to(&self, path: &str) -> String {
        let sep = if path.contains('?') { '&' } else { '?' };
        format!("{}{}page={}&limit={}", path, sep, self.page, self.limit)
    }
}

/// Slice of `items` for a zero-based page, plus the page count.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> (Vec<T>, usize) {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(items.len());
    (items.get(start..end).unwrap_or(&[]).to_vec(), total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_arrays() {
        let env: ListEnvelope<i32> = serde_json::from_str("[1,2,3]").unwrap();
        let page: Page<i32> = env.into();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn accepts_paged_envelopes() {
        let env: ListEnvelope<i32> = serde_json::from_str(r#"{"items":[4],"total":40}"#).unwrap();
        let page: Page<i32> = env.into();
        assert_eq!(page.items, vec![4]);
        assert_eq!(page.total, 40);

        let env: ListEnvelope<i32> = serde_json::from_str(r#"{"data":[5,6],"total":2}"#).unwrap();
        assert_eq!(Page::from(env).items, vec![5, 6]);
    }

    #[test]
    fn paginate_clamps_to_last_page() {
        let items: Vec<u32> = (0..45).collect();
        let (slice, pages) = paginate(&items, 0, 20);
        assert_eq!(slice.len(), 20);
        assert_eq!(pages, 3);

        let (slice, _) = paginate(&items, 9, 20);
        assert_eq!(slice, (40..45).collect::<Vec<_>>());

        let (slice, pages) = paginate::<u32>(&[], 0, 20);
        assert!(slice.is_empty());
        assert_eq!(pages, 1);
    }

    #[test]
    fn follow_up_pages_until_total_is_reached() {
        assert_eq!(
            PageRequest::after(20, 45, 20),
            Some(PageRequest { page: 2, limit: 20 })
        );
        assert_eq!(
            PageRequest::after(40, 45, 20),
            Some(PageRequest { page: 3, limit: 20 })
        );
        assert_eq!(PageRequest::after(45, 45, 20), None);
        assert_eq!(PageRequest::after(0, 10, 0), None);
    }

    #[test]
    fn page_params_extend_existing_queries() {
        let next = PageRequest { page: 2, limit: 20 };
        assert_eq!(next.append_to("/ventas"), "/ventas?page=2&limit=20");
        assert_eq!(
            next.append_to("/ventas?fechaDesde=2024-01-01"),
            "/ventas?fechaDesde=2024-01-01&page=2&limit=20"
        );
    }
}
