//! Pagination primitives for the public job listing.

/// Validation errors raised by [`PageRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestValidationError {
    /// The page number is zero.
    #[error("page must be a positive integer")]
    ZeroPage,
    /// The page size is zero.
    #[error("size must be a positive integer")]
    ZeroSize,
}

/// A validated 1-based page request.
///
/// The HTTP boundary accepts 1-based page numbers; [`PageRequest::offset`]
/// converts to the 0-based record offset, so page 1 maps to offset 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Construct a request from 1-based page and positive size.
    pub fn new(page: u32, size: u32) -> Result<Self, PageRequestValidationError> {
        if page == 0 {
            return Err(PageRequestValidationError::ZeroPage);
        }
        if size == 0 {
            return Err(PageRequestValidationError::ZeroSize);
        }
        Ok(Self { page, size })
    }

    /// 0-based record offset of the slice `[page*size, page*size + size)`.
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.size)
    }

    /// Maximum number of records in the slice.
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}
