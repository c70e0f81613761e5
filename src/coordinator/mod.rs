//! The coordinator/worker framework: one root and N worker ranks, modeled
//! as threads of a single process communicating over per-rank channels
//! (broadcast = send to every rank's inbox). This is deliberately generic
//! over what a "chunk" produces — the parallel compressor plugs in a chunk
//! processor with no resolution step, the parallel decompressor adds a
//! pre-write resolution step — so the ordering protocol itself has no
//! knowledge of compression vs. decompression.

pub mod message;
mod root;
mod shared_output;
mod worker;

pub use message::Message;
pub use shared_output::SharedOutput;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::error::Error;

/// Anything a chunk processor can produce and a worker can eventually
/// append to the shared output file.
pub trait ChunkResult {
    fn into_bytes(self) -> Vec<u8>;
}

impl ChunkResult for Vec<u8> {
    fn into_bytes(self) -> Vec<u8> {
        self
    }
}

/// Runs the coordinator/worker protocol to completion.
///
/// `chunk_processor(n)` must be safe to call concurrently from any worker
/// rank (it is never called twice for the same `n`). `resolve`, when
/// present, runs once per chunk immediately before that chunk's bytes are
/// appended to `output`, with every earlier chunk already written — this is
/// the hook the parallel decompressor uses to patch cross-chunk references.
pub fn run_parallel<T, F>(
    total_chunks: usize,
    num_workers: usize,
    output: &SharedOutput,
    chunk_processor: F,
    resolve: Option<&(dyn Fn(usize, &mut T, &SharedOutput) -> Result<(), Error> + Sync)>,
) -> Result<(), Error>
where
    T: ChunkResult + Send,
    F: Fn(usize) -> Result<T, Error> + Sync,
{
    if num_workers == 0 {
        return Err(Error::InvalidArgument("num_workers must be at least 1".into()));
    }

    let channels: Vec<(Sender<Message>, Receiver<Message>)> =
        (0..=num_workers).map(|_| unbounded()).collect();
    let senders: Vec<Sender<Message>> = channels.iter().map(|(s, _)| s.clone()).collect();
    let mut receivers: Vec<Option<Receiver<Message>>> =
        channels.into_iter().map(|(_, r)| Some(r)).collect();
    let root_rx = receivers[0].take().expect("root receiver taken twice");

    std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for rank in 1..=num_workers {
            let rx = receivers[rank].take().expect("worker receiver taken twice");
            let senders = &senders;
            let chunk_processor = &chunk_processor;
            handles.push(scope.spawn(move || {
                worker::worker_loop(rank, rx, senders, chunk_processor, resolve, output)
            }));
        }

        let mut result = root::root_loop(total_chunks, num_workers, &root_rx, &senders);
        for handle in handles {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    if result.is_ok() {
                        result = Err(e);
                    }
                }
                Err(_) => {
                    if result.is_ok() {
                        result = Err(Error::InvariantViolated("a worker thread panicked".into()));
                    }
                }
            }
        }
        result
    })
}
