use crate::protocol::RosterUpdateMsg;

/// Identifier for one connected client, valid for the lifetime of its socket.
pub type ConnId = u32;

/// Lobby roster owned by the relay loop task.
///
/// Membership is kept in connection order. Ids are never reused within a
/// process, so a late `leave` for an already-removed connection cannot
/// evict a newer member.
pub struct Lobby {
    roster: Vec<ConnId>,
    next_id: ConnId,
}

impl Lobby {
    pub fn new() -> Self {
        Self {
            roster: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a new connection, appended at the roster tail.
    pub fn join(&mut self) -> ConnId {
        let id = self.next_id;
        self.next_id += 1;
        self.roster.push(id);
        id
    }

    /// Remove a connection. Returns false if the id was already gone
    /// (a disconnect race), which is a no-op rather than an error.
    pub fn leave(&mut self, id: ConnId) -> bool {
        let before = self.roster.len();
        self.roster.retain(|&p| p != id);
        self.roster.len() != before
    }

    /// Snapshot the current membership for broadcasting.
    pub fn roster(&self) -> RosterUpdateMsg {
        RosterUpdateMsg {
            participants: self.roster.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new()
    }
}
