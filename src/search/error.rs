use thiserror::Error;

/// User-visible error conditions of a search action.
///
/// The `Display` text is exactly what the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("You are offline. Please check your internet connection.")]
    Offline,
    #[error("Oops! Please enter a search term.")]
    EmptyQuery,
    #[error("No results found. Try again later.")]
    NoResults,
    #[error("Couldn't fetch results. Try again later.")]
    FetchFailed,
}

impl SearchError {
    /// Errors detected before any request is sent; these leave the
    /// displayed results alone
    pub fn is_local(&self) -> bool {
        matches!(self, SearchError::Offline | SearchError::EmptyQuery)
    }
}
