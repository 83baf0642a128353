//! Append-only JSON Lines order log

use parking_lot::Mutex;
use shared::order::SubmittedOrder;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::{IntakeResult, OrderIntake, ensure_not_empty};

/// Writes one order per line; the file is created if missing
#[derive(Debug)]
pub struct JsonLinesIntake {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonLinesIntake {
    pub fn open(path: impl Into<PathBuf>) -> IntakeResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)?;
        if ends_mid_line(&mut file)? {
            tracing::warn!(path = %path.display(), "Order log ends mid-line, starting a new line");
            file.write_all(b"\n")?;
        }
        tracing::info!(path = %path.display(), "Order log opened");
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderIntake for JsonLinesIntake {
    fn accept(&self, order: SubmittedOrder) -> IntakeResult<()> {
        ensure_not_empty(&order)?;
        let mut line = serde_json::to_string(&order)?;
        line.push('\n');

        let mut file = self.file.lock();
        let start = file.metadata()?.len();
        if let Err(e) = file.write_all(line.as_bytes()).and_then(|_| file.flush()) {
            // Drop the partial line so the next append starts clean
            if let Err(truncate) = file.set_len(start) {
                tracing::error!(path = %self.path.display(), error = %truncate, "Order log rollback failed");
            }
            return Err(e.into());
        }

        tracing::debug!(order_id = %order.order_id, path = %self.path.display(), "Order appended");
        Ok(())
    }
}

/// Non-empty file whose last byte is not a newline
fn ends_mid_line(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Read back every order in a JSON Lines log.
///
/// Lines that do not parse (a torn write) are skipped with a warning.
pub fn read_orders(path: impl AsRef<Path>) -> IntakeResult<Vec<SubmittedOrder>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut orders = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(order) => orders.push(order),
            Err(e) => {
                tracing::warn!(path = %path.display(), line = idx + 1, error = %e, "Skipping unreadable order line");
            }
        }
    }
    Ok(orders)
}
