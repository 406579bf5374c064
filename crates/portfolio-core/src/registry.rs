//! Live animation handles keyed by purpose, so teardown can cancel every
//! tween and trigger deterministically.

use crate::engine::{TweenEngine, TweenHandle};
use fnv::FnvHashMap;
use std::borrow::Cow;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationKey(Cow<'static, str>);

impl AnimationKey {
    pub const fn fixed(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn indexed(prefix: &str, index: impl fmt::Display) -> Self {
        Self(Cow::Owned(format!("{}-{}", prefix, index)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnimationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default)]
pub struct AnimationRegistry {
    live: FnvHashMap<AnimationKey, TweenHandle>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle` under `key`. A handle already stored under the key is
    /// cancelled first, so the newest request owns the animated properties.
    pub fn track<T: TweenEngine + ?Sized>(
        &mut self,
        engine: &mut T,
        key: AnimationKey,
        handle: Option<TweenHandle>,
    ) -> Option<TweenHandle> {
        let handle = match handle {
            Some(h) => h,
            None => {
                log::debug!("[registry] {} skipped: target not mounted", key);
                return None;
            }
        };
        if let Some(prev) = self.live.insert(key, handle) {
            if prev != handle {
                engine.cancel(prev);
            }
        }
        Some(handle)
    }

    pub fn get(&self, key: &AnimationKey) -> Option<TweenHandle> {
        self.live.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Cancel and forget every tracked handle, in key order.
    pub fn cancel_all<T: TweenEngine + ?Sized>(&mut self, engine: &mut T) -> usize {
        let mut entries: Vec<_> = self.live.drain().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, handle) in &entries {
            log::debug!("[registry] cancel {}", key);
            engine.cancel(*handle);
        }
        entries.len()
    }
}
