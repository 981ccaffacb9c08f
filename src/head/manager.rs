//! Metadata application: keeps a `Head` in sync with the current page.
//!
//! Two states per mount cycle:
//!
//! ```text
//!            apply(A)              apply(B), B != A
//!  Absent ──────────────▶ Present(A) ──────────────▶ Present(B)
//!    ▲                       │  ▲  apply(A): unchanged
//!    └──────── release ──────┘  └──┘
//! ```
//!
//! Every transition first removes all tags the manager inserted, so after
//! any sequence of `apply` calls the head holds exactly the latest page's
//! tags and at most one tag per key.

use crate::config::SiteConfig;
use crate::debug;
use crate::meta::PageMetadata;

use super::{Head, HeadTag, head_tags};

/// What an `apply` call did to the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// No page tags were present; they were inserted.
    Inserted,
    /// A different page's tags were removed and replaced.
    Replaced,
    /// The same tags were already applied; the head was not touched.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Absent,
    Present(Vec<HeadTag>),
}

/// Single writer of page-owned head tags.
#[derive(Debug, Clone)]
pub struct HeadManager<'a> {
    config: &'a SiteConfig,
    state: State,
}

impl<'a> HeadManager<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            state: State::Absent,
        }
    }

    /// Whether page tags are currently applied.
    pub fn is_present(&self) -> bool {
        matches!(self.state, State::Present(_))
    }

    /// Synchronize `head` with `meta` (page mount or navigation).
    pub fn apply(&mut self, head: &mut Head, meta: &PageMetadata) -> ApplyOutcome {
        let tags = head_tags(meta, self.config);

        let outcome = match &self.state {
            State::Present(current) if *current == tags => return ApplyOutcome::Unchanged,
            State::Present(_) => {
                let removed = head.remove_page();
                debug!("head"; "replaced {} tags for '{}'", removed, meta.title);
                ApplyOutcome::Replaced
            }
            State::Absent => ApplyOutcome::Inserted,
        };

        head.insert_page(tags.clone());
        self.state = State::Present(tags);
        outcome
    }

    /// Remove the current page's tags (page unmount). Returns the number of
    /// entries removed; a no-op when nothing is applied.
    pub fn release(&mut self, head: &mut Head) -> usize {
        match std::mem::replace(&mut self.state, State::Absent) {
            State::Present(_) => head.remove_page(),
            State::Absent => 0,
        }
    }
}
