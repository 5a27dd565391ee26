//! Hands UI gestures to the backend command queue without blocking a frame.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    match cmd_tx.try_send(cmd) {
        Ok(()) => {}
        Err(TrySendError::Full(cmd)) => {
            tracing::warn!(command = cmd.name(), "backend command queue full");
            *status = "Still talking to the server; try that again in a moment.".to_string();
        }
        Err(TrySendError::Disconnected(cmd)) => {
            tracing::error!(command = cmd.name(), "backend worker is gone");
            *status = "The backend worker stopped; restart the app.".to_string();
        }
    }
}
