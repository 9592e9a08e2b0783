use crate::client::model::error::ApiError;

/// Lifecycle of one fetched slice of data. Every fetch-triggering action
/// moves the cache to `Loading`; resolution moves it to `Fetched` or
/// `Error`, so a failed request also leaves the loading state.
#[derive(Clone, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::NotFetched | Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the loading states of the fetch lifecycle.
    ///
    /// Verifies both pre-resolution states render as loading and a
    /// resolved fetch does not.
    ///
    /// Expected: loading for NotFetched and Loading, not for Fetched
    #[test]
    fn pre_fetch_states_are_loading() {
        assert!(Cache::<u64>::NotFetched.is_loading());
        assert!(Cache::<u64>::Loading.is_loading());
        assert!(!Cache::Fetched(1u64).is_loading());
    }

    /// Tests that a failed fetch leaves the loading state.
    ///
    /// Verifies an Error cache no longer reports loading, so skeleton
    /// rows give way to the error alert instead of rendering forever.
    ///
    /// Expected: not loading, error readable, no data
    #[test]
    fn failed_fetch_exits_loading() {
        let cache: Cache<u64> = Cache::Error(ApiError {
            status: 500,
            message: "boom".to_string(),
        });

        assert!(!cache.is_loading());
        assert_eq!(cache.error().map(|error| error.status), Some(500));
        assert_eq!(cache.data(), None);
    }

    /// Tests payload access across variants.
    ///
    /// Verifies only Fetched exposes its data and only Error exposes an
    /// error.
    ///
    /// Expected: Some for the matching variant, None otherwise
    #[test]
    fn only_fetched_exposes_data() {
        assert_eq!(Cache::Fetched(7u64).data(), Some(&7));
        assert_eq!(Cache::<u64>::NotFetched.data(), None);
        assert_eq!(Cache::<u64>::Loading.error(), None);
        assert_eq!(Cache::Fetched(7u64).error(), None);
    }
}
