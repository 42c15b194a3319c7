use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Endpoint, Snapshot};
use crate::rates::{Counters, HasCounters};

/// Client connection list (`/connz`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Connz {
    pub now: DateTime<Utc>,
    #[serde(default)]
    pub num_connections: u64,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub connections: Vec<ConnInfo>,
}

/// One client connection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnInfo {
    pub cid: u64,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub port: u16,
    pub name: Option<String>,
    pub lang: Option<String>,
    pub version: Option<String>,
    /// Round-trip time, e.g. `"7.075186ms"`.
    #[serde(default)]
    pub rtt: String,
    #[serde(default)]
    pub uptime: String,
    #[serde(default)]
    pub idle: String,
    #[serde(default)]
    pub pending_bytes: u64,
    #[serde(default)]
    pub subscriptions: u64,
    #[serde(default)]
    pub in_msgs: u64,
    #[serde(default)]
    pub out_msgs: u64,
    #[serde(default)]
    pub in_bytes: u64,
    #[serde(default)]
    pub out_bytes: u64,
}

impl Snapshot for Connz {
    const ENDPOINT: Endpoint = Endpoint::Connz;

    fn sampled_at(&self) -> DateTime<Utc> {
        self.now
    }
}

impl HasCounters for ConnInfo {
    fn counters(&self) -> Counters {
        Counters {
            in_msgs: self.in_msgs,
            out_msgs: self.out_msgs,
            in_bytes: self.in_bytes,
            out_bytes: self.out_bytes,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::decode;

    #[test]
    fn decodes_connection_list() {
        let connz: Connz = decode(
            r#"{
                "now": "2024-03-01T12:00:00Z",
                "num_connections": 2,
                "total": 2,
                "offset": 0,
                "limit": 1024,
                "connections": [
                    {"cid": 5, "ip": "10.0.0.4", "port": 50122, "rtt": "7.075186ms",
                     "uptime": "1h2m3s", "idle": "0s", "lang": "go", "in_msgs": 10},
                    {"cid": 6, "ip": "10.0.0.5", "port": 50123, "name": "worker",
                     "subscriptions_list": ["a.b"]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(connz.connections.len(), 2);
        assert_eq!(connz.connections[0].rtt, "7.075186ms");
        assert_eq!(connz.connections[0].counters().in_msgs, 10);
        assert_eq!(connz.connections[1].name.as_deref(), Some("worker"));
        assert!(connz.connections[1].rtt.is_empty());
    }
}
