/// Default batch threshold above which stale progress values are dropped.
pub const DEFAULT_COALESCE_LIMIT: usize = 10;

/// Dial angle at which progress reaches 1; larger angles fold back down.
const MAX_DIAL: u32 = 180;

#[derive(Clone, Debug)]
/// Coalescing queue between a fast progress producer and the render engine.
///
/// Animation ticks push one progress value at a time. When the drain finds
/// more than `limit` queued values it keeps only the most recent one, so the
/// engine never renders an unbounded backlog of stale frames; smaller batches
/// are rendered in arrival order.
pub struct ProgressQueue {
    pending: Vec<f64>,
    limit: usize,
}

impl Default for ProgressQueue {
    fn default() -> Self {
        Self::new(DEFAULT_COALESCE_LIMIT)
    }
}

impl ProgressQueue {
    /// Build a queue with an explicit coalescing threshold.
    pub fn new(limit: usize) -> Self {
        Self {
            pending: Vec::new(),
            limit,
        }
    }

    /// Queue one progress value.
    pub fn push(&mut self, progress: f64) {
        self.pending.push(progress);
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take the values to render: the whole batch in order, or only the most
    /// recent one when the batch exceeded the threshold.
    pub fn drain(&mut self) -> Vec<f64> {
        if self.pending.len() > self.limit {
            let last = self.pending.last().copied();
            self.pending.clear();
            return last.into_iter().collect();
        }
        std::mem::take(&mut self.pending)
    }
}

/// Fold a dial angle in degrees into a progress value in [0, 1].
///
/// The dial sweeps 0..360 and progress follows a triangle wave: up over the
/// first half turn, back down over the second, so a spinning dial plays the
/// animation forward and then in reverse.
pub fn progress_from_angle(angle: u32) -> f64 {
    let a = angle % (2 * MAX_DIAL);
    let folded = if a > MAX_DIAL { 2 * MAX_DIAL - a } else { a };
    f64::from(folded) / f64::from(MAX_DIAL)
}

#[cfg(test)]
#[path = "../../tests/unit/driver/queue.rs"]
mod tests;
