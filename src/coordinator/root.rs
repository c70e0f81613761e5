//! Root rank: assigns chunks to free workers and decides when the run ends.

use std::collections::VecDeque;

use crossbeam_channel::{Receiver, Sender};

use crate::error::Error;

use super::message::Message;

pub fn root_loop(
    total_chunks: usize,
    num_workers: usize,
    root_rx: &Receiver<Message>,
    senders: &[Sender<Message>],
) -> Result<(), Error> {
    let mut free_workers: VecDeque<usize> = (1..=num_workers).collect();
    let mut next_chunk = 0usize;

    loop {
        while let Some(worker) = free_workers.pop_front() {
            if next_chunk >= total_chunks {
                free_workers.push_front(worker);
                break;
            }
            send(&senders[worker], Message::ChunkAssignment { chunk_number: next_chunk })?;
            next_chunk += 1;
        }

        if free_workers.len() == num_workers && next_chunk == total_chunks {
            broadcast(senders, Message::Finalize)?;
            return Ok(());
        }

        match root_rx.recv() {
            Ok(Message::WorkerDone { worker_rank }) => free_workers.push_back(worker_rank),
            Ok(Message::ChunkAssignment { .. }) | Ok(Message::Finalize) => {
                // the root never receives these; ignore defensively
            }
            Err(_) => {
                return Err(Error::InvariantViolated(
                    "root inbox closed before all chunks were dispatched".into(),
                ))
            }
        }
    }
}

fn send(sender: &Sender<Message>, msg: Message) -> Result<(), Error> {
    sender
        .send(msg)
        .map_err(|_| Error::InvariantViolated("worker inbox closed unexpectedly".into()))
}

pub fn broadcast(senders: &[Sender<Message>], msg: Message) -> Result<(), Error> {
    for s in senders {
        send(s, msg.clone())?;
    }
    Ok(())
}
