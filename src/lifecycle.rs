// Page lifecycle decisions, kept free of web-sys for host tests.

/// How the page is leaving, from `pagehide`'s `persisted` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageExit {
    /// Frozen into the back/forward cache; it may be shown again as-is.
    Cached,
    Unloaded,
}

impl PageExit {
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageExit::Cached
        } else {
            PageExit::Unloaded
        }
    }

    /// Only an unload releases the site; a cached page keeps its engines,
    /// triggers and listeners for restore.
    pub fn tears_down(self) -> bool {
        self == PageExit::Unloaded
    }
}
