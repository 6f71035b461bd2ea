use crate::domain::article::PageWindow;

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

/// Caller-supplied paging, before the service applies its rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PageRequest {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }

    /// Absent or non-positive limits fall back to `DEFAULT_LIMIT`; anything
    /// above `MAX_LIMIT` is clamped rather than rejected. Negative offsets
    /// become zero.
    pub fn window(&self) -> PageWindow {
        let limit = match self.limit {
            Some(limit) if limit > 0 => limit.min(i64::from(MAX_LIMIT)) as u32,
            _ => DEFAULT_LIMIT,
        };
        let offset = self.offset.unwrap_or(0).max(0) as u64;
        PageWindow { limit, offset }
    }
}
