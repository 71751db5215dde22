//! Transient status messages
//!
//! Three independent regions (mint, viewer, admin) so messages from unrelated
//! actions never land in each other's area. Each line dismisses itself after
//! [`NOTICE_LIFETIME_MS`].

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::utils::constants::NOTICE_LIFETIME_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Mint,
    Viewer,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success-message",
            NoticeKind::Error => "error-message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Message lines for all regions.
#[derive(Clone, Debug, Default)]
pub struct Notices {
    mint: Vec<Notice>,
    viewer: Vec<Notice>,
    admin: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Append a line to `region`, returning its id.
    pub fn push(&mut self, region: Region, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.lines_mut(region).push(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove one line; false if it was already gone.
    pub fn dismiss(&mut self, region: Region, id: u64) -> bool {
        let lines = self.lines_mut(region);
        let before = lines.len();
        lines.retain(|notice| notice.id != id);
        lines.len() != before
    }

    pub fn region(&self, region: Region) -> &[Notice] {
        match region {
            Region::Mint => &self.mint,
            Region::Viewer => &self.viewer,
            Region::Admin => &self.admin,
        }
    }

    fn lines_mut(&mut self, region: Region) -> &mut Vec<Notice> {
        match region {
            Region::Mint => &mut self.mint,
            Region::Viewer => &mut self.viewer,
            Region::Admin => &mut self.admin,
        }
    }
}

/// Reactive message board shared through context.
#[derive(Clone, Copy)]
pub struct NoticeBoard {
    notices: RwSignal<Notices>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Notices::default()),
        }
    }

    /// Show `message` in `region` for five seconds.
    pub fn notify(&self, message: impl Into<String>, kind: NoticeKind, region: Region) {
        let id = self.post(message, kind, region);
        let board = *self;
        leptos::task::spawn_local(async move {
            board
                .expire(region, id, TimeoutFuture::new(NOTICE_LIFETIME_MS))
                .await;
        });
    }

    /// Add a line without scheduling its removal.
    pub fn post(&self, message: impl Into<String>, kind: NoticeKind, region: Region) -> u64 {
        let message = message.into();
        match kind {
            NoticeKind::Success => log::info!("[NOTICE] {:?}: {}", region, message),
            NoticeKind::Error => log::warn!("[NOTICE] {:?}: {}", region, message),
        }

        let mut id = 0;
        self.notices.update(|notices| id = notices.push(region, kind, message));
        id
    }

    /// Remove line `id` once `delay` completes.
    pub async fn expire(self, region: Region, id: u64, delay: impl Future<Output = ()>) {
        delay.await;
        self.notices.update(|notices| {
            notices.dismiss(region, id);
        });
    }

    pub fn lines(&self, region: Region) -> Vec<Notice> {
        self.notices.with(|notices| notices.region(region).to_vec())
    }
}

pub fn provide_notice_board() -> NoticeBoard {
    let board = NoticeBoard::new();
    provide_context(board);
    board
}

pub fn use_notice_board() -> NoticeBoard {
    expect_context::<NoticeBoard>()
}
