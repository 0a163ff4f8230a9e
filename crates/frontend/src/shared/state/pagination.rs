//! Client-side pagination state: `{page, limit}` plus the math that keeps
//! the current page inside the collection after a refetch.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// 0-indexed page.
    pub page: u32,
    pub limit: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self { page: 0, limit: 25 }
    }
}

impl PaginationState {
    pub fn total_pages(&self, count: i64) -> u32 {
        if count <= 0 || self.limit == 0 {
            return 1;
        }
        ((count as u64 + self.limit as u64 - 1) / self.limit as u64) as u32
    }

    /// Keep the page in range after the server reported a new count.
    pub fn clamped(self, count: i64) -> Self {
        let last = self.total_pages(count).saturating_sub(1);
        Self {
            page: self.page.min(last),
            ..self
        }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    /// Changing the page size restarts from the first page.
    pub fn with_limit(self, limit: u32) -> Self {
        Self {
            page: 0,
            limit: limit.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let state = PaginationState { page: 0, limit: 25 };
        assert_eq!(state.total_pages(0), 1);
        assert_eq!(state.total_pages(25), 1);
        assert_eq!(state.total_pages(26), 2);
        assert_eq!(state.total_pages(51), 3);
    }

    #[test]
    fn clamp_pulls_page_back_after_shrink() {
        let state = PaginationState { page: 4, limit: 25 };
        assert_eq!(state.clamped(30).page, 1);
        assert_eq!(state.clamped(0).page, 0);
        // Still in range: untouched.
        assert_eq!(state.clamped(200).page, 4);
    }

    #[test]
    fn limit_change_resets_page() {
        let state = PaginationState { page: 3, limit: 25 };
        let resized = state.with_limit(100);
        assert_eq!(resized.page, 0);
        assert_eq!(resized.limit, 100);
    }
}
