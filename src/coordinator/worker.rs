//! Worker rank: processes at most one chunk at a time and writes it once
//! its turn (in chunk-number order) arrives.

use crossbeam_channel::{Receiver, Sender};

use crate::error::Error;

use super::message::Message;
use super::shared_output::SharedOutput;
use super::ChunkResult;

type Resolver<'a, T> = &'a (dyn Fn(usize, &mut T, &SharedOutput) -> Result<(), Error> + Sync);

pub fn worker_loop<T, F>(
    rank: usize,
    rx: Receiver<Message>,
    senders: &[Sender<Message>],
    chunk_processor: &F,
    resolve: Option<Resolver<T>>,
    output: &SharedOutput,
) -> Result<(), Error>
where
    T: ChunkResult,
    F: Fn(usize) -> Result<T, Error>,
{
    let mut current_chunk = 0usize;
    let mut pending: Option<(usize, T)> = None;

    loop {
        // Block for at least one message, then drain whatever else is
        // already queued before deciding whether it's this worker's turn.
        let first = match rx.recv() {
            Ok(msg) => msg,
            Err(_) => {
                return Err(Error::InvariantViolated(format!(
                    "worker {rank} inbox closed before Finalize"
                )))
            }
        };
        if !handle(first, &mut current_chunk, &mut pending, chunk_processor)? {
            return Ok(());
        }
        while let Ok(msg) = rx.try_recv() {
            if !handle(msg, &mut current_chunk, &mut pending, chunk_processor)? {
                return Ok(());
            }
        }

        if let Some((chunk_number, _)) = &pending {
            if *chunk_number == current_chunk {
                let (chunk_number, mut result) = pending.take().unwrap();
                if let Some(resolve) = resolve {
                    resolve(chunk_number, &mut result, output)?;
                }
                output.append(&result.into_bytes())?;
                broadcast_done(senders, rank)?;
                current_chunk += 1;
            }
        }
    }
}

/// Applies one message. Returns `Ok(false)` on `Finalize` to signal the
/// caller to exit the loop; `Ok(true)` otherwise.
fn handle<T, F>(
    msg: Message,
    current_chunk: &mut usize,
    pending: &mut Option<(usize, T)>,
    chunk_processor: &F,
) -> Result<bool, Error>
where
    F: Fn(usize) -> Result<T, Error>,
{
    match msg {
        Message::ChunkAssignment { chunk_number } => {
            let result = chunk_processor(chunk_number)?;
            *pending = Some((chunk_number, result));
            Ok(true)
        }
        Message::WorkerDone { .. } => {
            *current_chunk += 1;
            Ok(true)
        }
        Message::Finalize => Ok(false),
    }
}

fn broadcast_done(senders: &[Sender<Message>], rank: usize) -> Result<(), Error> {
    for (i, s) in senders.iter().enumerate() {
        if i == rank {
            continue;
        }
        s.send(Message::WorkerDone { worker_rank: rank })
            .map_err(|_| Error::InvariantViolated("rank inbox closed unexpectedly".into()))?;
    }
    Ok(())
}
