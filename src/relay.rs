use tokio::sync::{broadcast, mpsc, oneshot};

use crate::lobby::{ConnId, Lobby};
use crate::protocol::RosterUpdateMsg;

/// Commands from client connections to the relay loop
pub enum RelayCommand {
    Join {
        response: oneshot::Sender<ConnId>,
    },
    Leave {
        id: ConnId,
    },
    RequestStart,
}

/// Broadcasts from the relay loop to all clients
#[derive(Debug, Clone)]
pub enum RelayBroadcast {
    Roster(RosterUpdateMsg),
    ForceStart,
}

/// Run the relay loop. Owns the lobby roster; all membership mutations
/// happen here, on one task.
pub async fn run_relay(
    mut cmd_rx: mpsc::Receiver<RelayCommand>,
    broadcast_tx: broadcast::Sender<RelayBroadcast>,
) {
    let mut lobby = Lobby::new();

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            RelayCommand::Join { response } => {
                let id = lobby.join();
                if response.send(id).is_err() {
                    // Socket task went away before the handshake finished.
                    lobby.leave(id);
                    continue;
                }
                let _ = broadcast_tx.send(RelayBroadcast::Roster(lobby.roster()));
                tracing::info!("Client {} joined ({} in lobby)", id, lobby.len());
            }
            RelayCommand::Leave { id } => {
                if lobby.leave(id) {
                    let _ = broadcast_tx.send(RelayBroadcast::Roster(lobby.roster()));
                    tracing::info!("Client {} left ({} in lobby)", id, lobby.len());
                }
            }
            RelayCommand::RequestStart => {
                // Any client may trigger the start; every request fans out,
                // repeated requests included.
                let _ = broadcast_tx.send(RelayBroadcast::ForceStart);
                tracing::info!("Start requested, notifying {} clients", lobby.len());
            }
        }
    }

    tracing::info!("Relay loop ended");
}
