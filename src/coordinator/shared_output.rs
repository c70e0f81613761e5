//! The single shared output file written, in chunk order, by worker ranks.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::error::Error;

pub struct SharedOutput {
    file: Mutex<File>,
}

impl SharedOutput {
    pub fn create(path: &Path) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| Error::io(path, e))?;
        Ok(SharedOutput { file: Mutex::new(file) })
    }

    /// Appends `bytes` at the current end of the file. Writers are
    /// serialized only by the coordinator/worker chunk-order protocol, not
    /// by this lock contending with itself — at most one worker ever holds
    /// the authorization to write at a time.
    pub fn append(&self, bytes: &[u8]) -> Result<(), Error> {
        let mut file = self.file.lock().expect("shared output mutex poisoned");
        file.seek(SeekFrom::End(0))?;
        file.write_all(bytes)?;
        Ok(())
    }

    /// Reads the last `max_len` bytes written so far (or fewer, if the file
    /// is shorter than that).
    pub fn tail(&self, max_len: usize) -> Result<Vec<u8>, Error> {
        let mut file = self.file.lock().expect("shared output mutex poisoned");
        let len = file.seek(SeekFrom::End(0))?;
        let start = len.saturating_sub(max_len as u64);
        file.seek(SeekFrom::Start(start))?;
        let mut buf = vec![0u8; (len - start) as usize];
        file.read_exact(&mut buf)?;
        Ok(buf)
    }
}
