use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Endpoint, Snapshot};
use crate::rates::{Counters, HasCounters};

/// General server statistics (`/varz`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Varz {
    #[serde(default)]
    pub server_id: String,
    #[serde(default)]
    pub server_name: String,
    #[serde(default)]
    pub version: String,
    pub now: DateTime<Utc>,
    pub start: Option<DateTime<Utc>>,
    /// Server-formatted, e.g. `"3d12h30m52s"`.
    #[serde(default)]
    pub uptime: String,
    /// Resident memory in bytes.
    #[serde(default)]
    pub mem: u64,
    #[serde(default)]
    pub cores: u32,
    /// CPU usage percentage.
    #[serde(default)]
    pub cpu: f64,
    #[serde(default)]
    pub connections: u64,
    #[serde(default)]
    pub total_connections: u64,
    #[serde(default)]
    pub subscriptions: u64,
    #[serde(default)]
    pub slow_consumers: u64,
    #[serde(default)]
    pub in_msgs: u64,
    #[serde(default)]
    pub out_msgs: u64,
    #[serde(default)]
    pub in_bytes: u64,
    #[serde(default)]
    pub out_bytes: u64,
}

impl Snapshot for Varz {
    const ENDPOINT: Endpoint = Endpoint::Varz;

    fn sampled_at(&self) -> DateTime<Utc> {
        self.now
    }
}

impl HasCounters for Varz {
    fn counters(&self) -> Counters {
        Counters {
            in_msgs: self.in_msgs,
            out_msgs: self.out_msgs,
            in_bytes: self.in_bytes,
            out_bytes: self.out_bytes,
        }
    }
}
