//! Remote data: a value that is not requested yet, in flight, loaded, or failed.

/// State of a value fetched in the background.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RemoteData<T, E = String> {
    /// No request has been issued.
    #[default]
    NotAsked,
    /// A request is in flight.
    Loading,
    Success(T),
    Failure(E),
}

impl<T, E> RemoteData<T, E> {
    /// Wrap a finished result.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once a success or failure has arrived.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }

    /// True when nothing has been requested yet.
    pub fn should_fetch(&self) -> bool {
        matches!(self, Self::NotAsked)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&E> {
        match self {
            Self::Failure(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> RemoteData<&T, &E> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Success(value) => RemoteData::Success(value),
            Self::Failure(err) => RemoteData::Failure(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteData<U, E> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Success(value) => RemoteData::Success(f(value)),
            Self::Failure(err) => RemoteData::Failure(err),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> RemoteData<T, F> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Success(value) => RemoteData::Success(value),
            Self::Failure(err) => RemoteData::Failure(f(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_not_asked_should_fetch() {
        assert!(RemoteData::<u8>::NotAsked.should_fetch());
        assert!(!RemoteData::<u8>::Loading.should_fetch());
        assert!(!RemoteData::<u8>::Success(1).should_fetch());
        assert!(!RemoteData::<u8>::Failure("x".into()).should_fetch());
    }

    #[test]
    fn settled_states_expose_payloads() {
        let ok: RemoteData<u8, &str> = RemoteData::from_result(Ok(3));
        assert!(ok.is_settled());
        assert_eq!(ok.success(), Some(&3));
        assert_eq!(ok.failure(), None);

        let failed: RemoteData<u8, &str> = RemoteData::from_result(Err("boom"));
        assert!(failed.is_settled());
        assert_eq!(failed.failure(), Some(&"boom"));
        assert!(!RemoteData::<u8, &str>::Loading.is_settled());
    }

    #[test]
    fn map_only_touches_success() {
        let doubled = RemoteData::<u8, &str>::Success(4).map(|v| v * 2);
        assert_eq!(doubled, RemoteData::Success(8));
        let loading = RemoteData::<u8, &str>::Loading.map(|v| v * 2);
        assert_eq!(loading, RemoteData::Loading);
        let failed = RemoteData::<u8, &str>::Failure("e").map_err(str::len);
        assert_eq!(failed, RemoteData::Failure(1));
    }
}
