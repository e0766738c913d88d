use serde::{Deserialize, Serialize};

use crate::lobby::ConnId;

// === Server -> Client ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMsg {
    #[serde(rename = "roster_update")]
    RosterUpdate(RosterUpdateMsg),
    #[serde(rename = "force_start")]
    ForceStart,
}

/// Current lobby membership, in connection order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterUpdateMsg {
    pub participants: Vec<ConnId>,
}

// === Client -> Server ===

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMsg {
    #[serde(rename = "request_start")]
    RequestStart,
}
