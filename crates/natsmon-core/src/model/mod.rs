// ── Snapshot model ──
//
// Serde views of the monitoring endpoints, limited to the fields the
// formatting layer consumes. Unknown fields are ignored so newer servers
// keep decoding.

mod connz;
mod varz;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CoreError;

pub use connz::{ConnInfo, Connz};
pub use varz::Varz;

/// A monitoring endpoint on the observed server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Endpoint {
    /// General server statistics.
    Varz,
    /// Client connection list.
    Connz,
}

/// A point-in-time response from one endpoint.
pub trait Snapshot: DeserializeOwned {
    const ENDPOINT: Endpoint;

    /// Server-side time at which the snapshot was taken.
    fn sampled_at(&self) -> DateTime<Utc>;
}

/// Decode a saved snapshot document.
pub fn decode<T: Snapshot>(text: &str) -> Result<T, CoreError> {
    serde_json::from_str(text).map_err(|source| CoreError::Decode {
        endpoint: T::ENDPOINT,
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_display_is_path_name() {
        assert_eq!(Endpoint::Varz.to_string(), "varz");
        assert_eq!(Endpoint::Connz.to_string(), "connz");
    }

    #[test]
    fn decode_error_names_endpoint() {
        let err = decode::<Varz>("{not json").unwrap_err();
        assert_eq!(err.endpoint(), Endpoint::Varz);
        assert!(err.to_string().starts_with("Invalid /varz snapshot"));
    }

    #[test]
    fn decode_requires_timestamp() {
        let err = decode::<Connz>(r#"{"connections": []}"#).unwrap_err();
        assert_eq!(err.endpoint(), Endpoint::Connz);
    }
}
