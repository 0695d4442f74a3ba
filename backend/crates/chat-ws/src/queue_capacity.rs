/// Capacity of the broadcast intake queue.
///
/// `Bounded` makes publishers wait when the queue is full. `Unbounded`
/// never makes them wait, so memory grows without limit if the dispatch
/// loop falls behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueCapacity {
    Bounded(usize),
    Unbounded,
}

impl QueueCapacity {
    /// Map a configured size, where 0 means unbounded.
    pub fn from_config(capacity: usize) -> Self {
        match capacity {
            0 => Self::Unbounded,
            n => Self::Bounded(n),
        }
    }
}

impl Default for QueueCapacity {
    fn default() -> Self {
        Self::Bounded(1024)
    }
}
