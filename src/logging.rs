//! Transcript persistence layer
//!
//! Appends the chat container's markup to a dated HTML file so a session
//! can be reopened in a browser. Files live in
//! XDG_DATA_HOME/scholarship-chat/transcripts/YYYY-MM-DD.html unless the
//! settings point elsewhere. Writing happens on a background thread.

use chrono::Local;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread;

/// A markup fragment to be appended to the transcript
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub markup: String,
}

/// Writes transcript entries without blocking the UI thread
pub struct TranscriptLogger {
    /// Channel to send entries to the background thread
    tx: Sender<TranscriptEntry>,
    dir: PathBuf,
}

impl TranscriptLogger {
    /// Create a logger in the platform data directory
    pub fn new() -> Result<Self, String> {
        Self::with_dir(get_transcript_directory()?)
    }

    /// Create a logger writing into `dir` and spawn its writer thread
    pub fn with_dir(dir: PathBuf) -> Result<Self, String> {
        fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create transcript directory: {}", e))?;

        let (tx, rx) = unbounded::<TranscriptEntry>();

        let dir_clone = dir.clone();
        thread::spawn(move || {
            run_writer_thread(rx, dir_clone);
        });

        Ok(Self { tx, dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Queue a fragment for writing (non-blocking)
    pub fn log(&self, markup: impl Into<String>) {
        // If send fails, the writer thread has stopped - silently ignore
        let _ = self.tx.send(TranscriptEntry {
            markup: markup.into(),
        });
    }
}

/// Background thread that handles all file I/O
fn run_writer_thread(rx: Receiver<TranscriptEntry>, dir: PathBuf) {
    // Open writers keyed by file name, so a session spanning midnight rolls over
    let mut file_cache: HashMap<String, BufWriter<File>> = HashMap::new();

    while let Ok(entry) = rx.recv() {
        if let Err(e) = write_entry(&mut file_cache, &dir, &entry) {
            tracing::warn!(error = %e, "transcript write failed");
        }
    }

    for (_, mut writer) in file_cache.drain() {
        let _ = writer.flush();
    }
}

fn write_entry(
    file_cache: &mut HashMap<String, BufWriter<File>>,
    dir: &Path,
    entry: &TranscriptEntry,
) -> Result<(), String> {
    let file_name = transcript_file_name();

    if !file_cache.contains_key(&file_name) {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(&file_name))
            .map_err(|e| format!("Failed to open transcript file: {}", e))?;
        file_cache.insert(file_name.clone(), BufWriter::new(file));
    }
    let writer = file_cache
        .get_mut(&file_name)
        .ok_or_else(|| "Transcript writer missing after insert".to_string())?;

    writeln!(writer, "{}", entry.markup)
        .map_err(|e| format!("Failed to write transcript entry: {}", e))?;

    // Flush every entry so the file is readable while the session runs
    writer
        .flush()
        .map_err(|e| format!("Failed to flush transcript: {}", e))?;

    Ok(())
}

/// Today's transcript file name: YYYY-MM-DD.html
pub fn transcript_file_name() -> String {
    format!("{}.html", Local::now().format("%Y-%m-%d"))
}

/// Get the platform-specific transcript directory using XDG conventions
fn get_transcript_directory() -> Result<PathBuf, String> {
    let base = directories::BaseDirs::new().ok_or("Failed to determine home directory")?;

    // Use XDG_DATA_HOME on Linux, equivalent on other platforms
    let data_dir = base.data_dir();
    Ok(data_dir.join("scholarship-chat").join("transcripts"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_transcript_directory() {
        if let Ok(path) = get_transcript_directory() {
            assert!(path.to_string_lossy().contains("scholarship-chat"));
            assert!(path.ends_with("transcripts"));
        }
    }

    #[test]
    fn test_file_name_is_dated_html() {
        let name = transcript_file_name();
        assert!(name.ends_with(".html"));
        assert_eq!(name.len(), "YYYY-MM-DD.html".len());
    }

    #[test]
    fn test_entries_are_appended() {
        let dir = std::env::temp_dir().join(format!(
            "scholarship-chat-transcript-{}",
            std::process::id()
        ));
        let logger = TranscriptLogger::with_dir(dir.clone()).unwrap();
        logger.log("<div>first</div>");
        logger.log("<div>second</div>");

        // The writer is asynchronous; wait briefly for both lines
        let file = dir.join(transcript_file_name());
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut content = String::new();
        while Instant::now() < deadline {
            content = fs::read_to_string(&file).unwrap_or_default();
            if content.contains("second") {
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }
        assert_eq!(content, "<div>first</div>\n<div>second</div>\n");
        let _ = fs::remove_dir_all(&dir);
    }
}
