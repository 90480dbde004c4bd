//! Background worker thread for explanation fetches and document loading.

use crate::backend::{CoreCmd, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::{error, info, warn};
use wordgloss_core::{Config, Document, GlossError};

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<CoreCmd>,
    pub evt_rx: Receiver<CoreEvent>,
}

impl BackendHandle {
    /// Build a handle around raw channels, bypassing the worker thread.
    ///
    /// Used by headless tests that assert on outbound commands and inject
    /// events directly.
    pub fn from_test_channels(cmd_tx: Sender<CoreCmd>, evt_rx: Receiver<CoreEvent>) -> Self {
        Self { cmd_tx, evt_rx }
    }
}

#[derive(Serialize)]
struct ExplainRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ExplainResponse {
    explanation: String,
}

/// Spawn the backend worker thread that performs blocking I/O.
///
/// HTTP and file reads stay off the UI thread; the worker replies with
/// [`CoreEvent`] values that are polled each frame. The worker exits when
/// the command sender is dropped.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend(config: Config) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    thread::Builder::new()
        .name("wordgloss-backend".to_string())
        .spawn(move || {
            let client = reqwest::blocking::Client::builder()
                .timeout(Duration::from_millis(config.explain_timeout_ms))
                .build();
            if let Err(err) = &client {
                error!(%err, "failed to build HTTP client; explanation fetches will fail");
            }
            for cmd in cmd_rx.iter() {
                match cmd {
                    CoreCmd::Explain { id, text } => {
                        let outcome = match &client {
                            Ok(client) => explain_request(client, &config.explain_url, &text),
                            Err(err) => Err(GlossError::Explain(err.to_string())),
                        };
                        let event = match outcome {
                            Ok(body) => {
                                info!(id = id.0, "explanation fetched");
                                CoreEvent::ExplanationReady { id, body }
                            }
                            Err(err) => {
                                warn!(id = id.0, %err, "explanation fetch failed");
                                CoreEvent::ExplanationFailed {
                                    id,
                                    message: err.card_message(),
                                }
                            }
                        };
                        let _ = evt_tx.send(event);
                    }
                    CoreCmd::LoadFile { path } => {
                        let event = match load_document(&path, config.max_document_bytes) {
                            Ok(document) => {
                                info!(path = %path.display(), "document loaded");
                                CoreEvent::DocumentLoaded { document }
                            }
                            Err(err) => {
                                warn!(path = %path.display(), %err, "document load failed");
                                CoreEvent::LoadFailed {
                                    message: err.to_string(),
                                }
                            }
                        };
                        let _ = evt_tx.send(event);
                    }
                }
            }
        })
        .expect("spawn backend worker thread");

    BackendHandle { cmd_tx, evt_rx }
}

/// POST the highlight text to the explanation endpoint.
///
/// # Returns
/// The sanitized explanation body on success.
///
/// # Errors
/// Transport failures, non-success status codes, and malformed response
/// bodies are all reported as [`GlossError::Explain`].
fn explain_request(
    client: &reqwest::blocking::Client,
    url: &str,
    text: &str,
) -> Result<String, GlossError> {
    let response = client
        .post(url)
        .json(&ExplainRequest { text })
        .send()
        .map_err(|err| GlossError::Explain(err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(GlossError::Explain(format!("server returned {}", status)));
    }
    let parsed: ExplainResponse = response
        .json()
        .map_err(|err| GlossError::Explain(err.to_string()))?;
    Ok(parsed.explanation)
}

/// Read a replacement document from disk, enforcing the size limit.
///
/// The title is derived from the file stem; the rich flag is inferred from
/// the content.
///
/// # Errors
/// I/O failures, oversized files, and non-UTF-8 content.
fn load_document(path: &Path, limit: usize) -> Result<Document, GlossError> {
    // Compare in u64 so a huge file cannot wrap past the limit on 32-bit.
    let size = fs::metadata(path)?.len();
    if size > limit as u64 {
        return Err(GlossError::DocumentTooLarge {
            size,
            limit: limit as u64,
        });
    }
    let text = fs::read_to_string(path).map_err(|err| {
        if err.kind() == ErrorKind::InvalidData {
            GlossError::InvalidEncoding
        } else {
            GlossError::Io(err)
        }
    })?;
    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string());
    Ok(Document::new(title, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explain_response_shape_parses() {
        let parsed: ExplainResponse =
            serde_json::from_str(r#"{"explanation":"A short gloss.","model":"ignored"}"#)
                .expect("parse");
        assert_eq!(parsed.explanation, "A short gloss.");
    }

    #[test]
    fn load_document_derives_title_and_mode() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("field-notes.md");
        fs::write(&path, "# Notes\nsome words").expect("write");

        let document = load_document(&path, 1024).expect("load");
        assert_eq!(document.title, "field-notes");
        assert!(document.rich);
        assert_eq!(document.text, "# Notes\nsome words");
    }

    #[test]
    fn load_document_rejects_oversized_files() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("big.txt");
        fs::write(&path, "0123456789").expect("write");

        match load_document(&path, 4) {
            Err(GlossError::DocumentTooLarge { size, limit }) => {
                assert_eq!(size, 10);
                assert_eq!(limit, 4);
            }
            other => panic!("unexpected outcome: {:?}", other.map(|d| d.title)),
        }
    }

    #[test]
    fn load_document_reports_missing_files_as_io() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("absent.txt");
        assert!(matches!(
            load_document(&path, 1024),
            Err(GlossError::Io(_))
        ));
    }
}
