use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::errors::FeedError;

/// Client list request (JSON)
pub const CLIENTS_REQUEST: &str = "j/clients";

/// Monitor list request (JSON)
pub const MONITORS_REQUEST: &str = "j/monitors";

/// Longest wait for any single read of a reply
pub const READ_TIMEOUT: Duration = Duration::from_secs(2);

/// Longest wait for the request write
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Socket paths to try, in order, for a compositor instance signature
pub fn socket_candidates(signature: &str, runtime_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from("/tmp/hypr")
            .join(signature)
            .join(".socket.sock"),
    ];
    if let Some(runtime_dir) = runtime_dir {
        candidates.push(runtime_dir.join("hypr").join(signature).join(".socket.sock"));
    }
    candidates
}

fn connect(candidates: &[PathBuf]) -> Result<UnixStream, FeedError> {
    for path in candidates {
        match UnixStream::connect(path) {
            Ok(stream) => {
                debug!(event = "core.feed.socket_connected", path = %path.display());
                return Ok(stream);
            }
            Err(e) => {
                debug!(
                    event = "core.feed.socket_connect_failed",
                    path = %path.display(),
                    error = %e
                );
            }
        }
    }

    Err(FeedError::SocketUnavailable {
        tried: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Send one request to the running compositor and read the reply to EOF.
///
/// # Errors
///
/// Returns `FeedError` if the instance signature is unset, no socket accepts
/// the connection, or the write/read fails or times out.
pub fn request(command: &str) -> Result<String, FeedError> {
    let signature =
        std::env::var("HYPRLAND_INSTANCE_SIGNATURE").map_err(|_| FeedError::InstanceSignatureMissing)?;
    let runtime_dir = std::env::var_os("XDG_RUNTIME_DIR").map(PathBuf::from);
    let candidates = socket_candidates(&signature, runtime_dir.as_deref());

    request_at(&candidates, command)
}

/// Send one request over the first socket in `candidates` that accepts it.
pub fn request_at(candidates: &[PathBuf], command: &str) -> Result<String, FeedError> {
    request_with_timeout(candidates, command, READ_TIMEOUT)
}

fn request_with_timeout(
    candidates: &[PathBuf],
    command: &str,
    read_timeout: Duration,
) -> Result<String, FeedError> {
    info!(event = "core.feed.request_started", request = command);

    let mut stream = connect(candidates)?;

    let io_failed = |source: std::io::Error| FeedError::RequestFailed {
        request: command.to_string(),
        source,
    };
    stream
        .set_read_timeout(Some(read_timeout))
        .map_err(io_failed)?;
    stream
        .set_write_timeout(Some(WRITE_TIMEOUT))
        .map_err(io_failed)?;

    stream.write_all(command.as_bytes()).map_err(io_failed)?;

    // A peer that never closes the connection ends here as WouldBlock/TimedOut
    let mut reply = String::new();
    stream.read_to_string(&mut reply).map_err(io_failed)?;

    info!(
        event = "core.feed.request_completed",
        request = command,
        bytes = reply.len()
    );
    Ok(reply)
}

/// Like [`request`], but degrades any failure to an empty feed.
pub fn request_or_empty(command: &str) -> String {
    request(command).unwrap_or_else(|e| {
        warn!(
            event = "core.feed.request_degraded",
            request = command,
            error = %e
        );
        String::new()
    })
}
