/// Number of entries returned per page by every paginated listing
pub const PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("page must be a positive integer, got {0}")]
    NotPositive(i64),
    #[error("page {0} is out of range")]
    OutOfRange(i64),
}

/// A validated 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: i64,
}

impl Page {
    pub fn new(number: i64) -> Result<Self, PageError> {
        if number <= 0 {
            return Err(PageError::NotPositive(number));
        }
        let offset = (number - 1)
            .checked_mul(PAGE_SIZE)
            .ok_or(PageError::OutOfRange(number))?;

        Ok(Self { offset })
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}
