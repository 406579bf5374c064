use crate::engine::{SmoothScroll, TweenEngine};

/// Once-per-frame driver: advances the smooth-scroll engine, then hands the
/// eased offset to the tween engine so triggers follow the smoothed position
/// rather than raw input.
#[derive(Debug, Default)]
pub struct FramePump {
    running: bool,
    last_ms: Option<f64>,
}

impl FramePump {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Pump one frame. Returns the elapsed milliseconds since the previous
    /// frame, or `None` when stopped.
    pub fn pump<S, T>(&mut self, now_ms: f64, scroll: &mut S, tweens: &mut T) -> Option<f64>
    where
        S: SmoothScroll + ?Sized,
        T: TweenEngine + ?Sized,
    {
        if !self.running {
            return None;
        }
        let dt = self.last_ms.map(|prev| (now_ms - prev).max(0.0)).unwrap_or(0.0);
        self.last_ms = Some(now_ms);
        scroll.advance(now_ms);
        tweens.sync_scroll(scroll.offset());
        Some(dt)
    }
}

/// One-shot actions due at a frame time. Entries are never cancelled
/// individually; each fires once when its deadline passes.
#[derive(Debug)]
pub struct DeferredQueue<P> {
    pending: Vec<(f64, u64, P)>,
    next_seq: u64,
}

impl<P> Default for DeferredQueue<P> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<P> DeferredQueue<P> {
    pub fn schedule(&mut self, due_ms: f64, payload: P) {
        self.pending.push((due_ms, self.next_seq, payload));
        self.next_seq += 1;
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every payload due at `now_ms`, oldest deadline first
    /// and in scheduling order among equal deadlines.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<P> {
        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|(at, _, _)| *at <= now_ms);
        self.pending = rest;
        due.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        due.into_iter().map(|(_, _, p)| p).collect()
    }

    /// Drop everything still pending. Used at teardown only.
    pub fn clear(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }
}
