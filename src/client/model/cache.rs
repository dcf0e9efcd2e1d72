use crate::client::model::error::ApiError;

/// State of a list fetched once when a page mounts. `NotFetched` also covers
/// the request in flight, since the resource starts on mount.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(err) => Cache::Error(err),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    /// Mutable access for local edits after a successful fetch.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_maps_to_state() {
        let fetched = Cache::from_result(Ok(vec![1, 2]));
        let failed = Cache::<Vec<i32>>::from_result(Err(ApiError {
            status: 500,
            message: "boom".to_string(),
        }));

        assert_eq!(fetched.data(), Some(&vec![1, 2]));
        assert!(fetched.error().is_none());
        assert!(failed.data().is_none());
        assert_eq!(failed.error().map(|e| e.status), Some(500));
    }

    #[test]
    fn edits_only_apply_once_fetched() {
        let mut pending = Cache::<Vec<i32>>::NotFetched;
        let mut fetched = Cache::Fetched(vec![1, 2, 3]);

        assert!(pending.data_mut().is_none());
        if let Some(list) = fetched.data_mut() {
            list.retain(|id| *id != 2);
        }

        assert_eq!(fetched.data(), Some(&vec![1, 3]));
    }
}
