use serde::Serialize;

use crate::error::RemoteError;

/// Outcome of a facade read: live remote data, or local demo data plus the
/// reason the remote could not be used.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum Fetched<T> {
    Live { data: T },
    Fallback {
        data: T,
        #[serde(serialize_with = "reason_as_string")]
        reason: RemoteError,
    },
}

fn reason_as_string<S: serde::Serializer>(reason: &RemoteError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(reason)
}

impl<T> Fetched<T> {
    pub fn data(&self) -> &T {
        match self {
            Fetched::Live { data } | Fetched::Fallback { data, .. } => data,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live { data } | Fetched::Fallback { data, .. } => data,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live { .. })
    }

    pub fn fallback_reason(&self) -> Option<&RemoteError> {
        match self {
            Fetched::Live { .. } => None,
            Fetched::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Live { data } => Fetched::Live { data: f(data) },
            Fetched::Fallback { data, reason } => Fetched::Fallback {
                data: f(data),
                reason,
            },
        }
    }
}
