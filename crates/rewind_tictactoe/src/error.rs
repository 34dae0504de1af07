//! Error types for move history navigation.

use derive_more::{Display, Error};

/// Error returned when navigating history with an invalid index.
///
/// The interactive UI only ever builds valid indices, so this surfaces from
/// scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested move is past the end of the history.
    #[display("Move #{} is out of range (history has {} entries)", requested, len)]
    MoveOutOfRange {
        /// The move index that was requested.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
