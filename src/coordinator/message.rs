//! The three message kinds exchanged between the root and worker ranks.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Root -> a specific worker: "process this chunk".
    ChunkAssignment { chunk_number: usize },
    /// Worker -> everyone (broadcast): "I just wrote my chunk".
    WorkerDone { worker_rank: usize },
    /// Root -> everyone (broadcast): "no more chunks, exit".
    Finalize,
}
