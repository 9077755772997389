use core::fmt;
use grid_util::point::Point;
use log::info;

/// Outcome reported for a single visited cell. Statuses are events, not
/// state: they are handed to the [SearchObserver] together with the
/// coordinates that produced them and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The coordinates lie outside the grid.
    Illegal,
    /// A goal cell was reached; the search stops globally.
    Complete,
    /// An open cell was entered and is part of the candidate path.
    Valid,
    /// The cell's exploration was exhausted without finding a path.
    Invalid,
    /// The whole search finished without reaching any goal. Reported once,
    /// at the sentinel coordinates `(-1, -1)`.
    Impossible,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SearchStatus::Illegal => "ILLEGAL",
            SearchStatus::Complete => "COMPLETE",
            SearchStatus::Valid => "VALID",
            SearchStatus::Invalid => "INVALID",
            SearchStatus::Impossible => "IMPOSSIBLE",
        };
        write!(f, "{}", name)
    }
}

/// Collaborator notified of every status the search produces, in the exact
/// order it produces them. Calls are synchronous: the search waits for
/// [notify](Self::notify) to return before recursing further. Observers may
/// render, animate or log, but have no way to reach back into the grid.
pub trait SearchObserver {
    fn notify(&mut self, status: SearchStatus, at: Point);
}

/// Any `FnMut(SearchStatus, Point)` closure is an observer.
impl<F: FnMut(SearchStatus, Point)> SearchObserver for F {
    fn notify(&mut self, status: SearchStatus, at: Point) {
        self(status, at)
    }
}

/// Observer that keeps every event in order, for programmatic inspection of
/// a finished search.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<(SearchStatus, Point)>,
}

impl RecordingObserver {
    pub fn new() -> RecordingObserver {
        RecordingObserver::default()
    }
    /// The statuses alone, in emission order.
    pub fn statuses(&self) -> Vec<SearchStatus> {
        self.events.iter().map(|&(s, _)| s).collect()
    }
}

impl SearchObserver for RecordingObserver {
    fn notify(&mut self, status: SearchStatus, at: Point) {
        self.events.push((status, at));
    }
}

/// Observer that logs each event through [log], one line per status.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceObserver;

impl SearchObserver for TraceObserver {
    fn notify(&mut self, status: SearchStatus, at: Point) {
        info!("{} at row {}, col {}", status, at.y, at.x);
    }
}
