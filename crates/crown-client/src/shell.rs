//! The app shell: the one-time intro and the five-tab navigator.
//!
//! The intro is a two-state machine (`Splash -> Ready`) driven by a monotonic
//! clock. Once it reports `Ready` it never goes back for the rest of the
//! process. Navigation is refused until then.

use std::time::Duration;

use crown_shared::constants::{
    HEADER_TITLE, INTRO_FIRST_FADE_MS, INTRO_SECOND_FADE_DELAY_MS, INTRO_SECOND_FADE_MS,
    INTRO_TOTAL_MS, TAB_INDICATOR_GRADIENT,
};
use crown_shared::Tab;
use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::lifetime::ScreenLifetime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntroPhase {
    Splash,
    Ready,
}

/// Opacity of the two overlapping intro fades, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntroProgress {
    pub first_fade: f32,
    pub second_fade: f32,
}

#[derive(Debug)]
pub struct Intro {
    started_at: Instant,
    ready: bool,
}

impl Intro {
    /// Start the intro clock now.
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            ready: false,
        }
    }

    /// An intro that is already over.
    pub fn skipped() -> Self {
        Self {
            started_at: Instant::now(),
            ready: true,
        }
    }

    pub fn ready_at(&self) -> Instant {
        self.started_at + Duration::from_millis(INTRO_TOTAL_MS)
    }

    pub fn phase(&mut self) -> IntroPhase {
        self.phase_at(Instant::now())
    }

    /// Phase at `now`, latching `Ready` once reached.
    pub fn phase_at(&mut self, now: Instant) -> IntroPhase {
        if !self.ready && now >= self.ready_at() {
            self.ready = true;
            info!("intro finished");
        }
        if self.ready {
            IntroPhase::Ready
        } else {
            IntroPhase::Splash
        }
    }

    pub fn progress_at(&self, now: Instant) -> IntroProgress {
        if self.ready {
            return IntroProgress {
                first_fade: 1.0,
                second_fade: 1.0,
            };
        }

        let elapsed = now.saturating_duration_since(self.started_at).as_millis() as u64;
        IntroProgress {
            first_fade: fade(elapsed, 0, INTRO_FIRST_FADE_MS),
            second_fade: fade(elapsed, INTRO_SECOND_FADE_DELAY_MS, INTRO_SECOND_FADE_MS),
        }
    }

    /// Sleep until the intro is over.
    pub async fn wait_ready(&mut self) {
        if !self.ready {
            tokio::time::sleep_until(self.ready_at()).await;
        }
        self.phase_at(Instant::now());
    }
}

fn fade(elapsed_ms: u64, delay_ms: u64, duration_ms: u64) -> f32 {
    let t = elapsed_ms.saturating_sub(delay_ms) as f32 / duration_ms as f32;
    t.clamp(0.0, 1.0)
}

/// One entry of the bottom tab bar as the host should draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabItem {
    pub tab: Tab,
    pub label: &'static str,
    pub icon: &'static str,
    pub tint: &'static str,
    /// Gradient stops of the underline; only set on the active tab.
    pub indicator: Option<[&'static str; 3]>,
}

#[derive(Debug)]
pub struct Shell {
    intro: Intro,
    active: Tab,
    history: Vec<Tab>,
    mounted: Option<ScreenLifetime>,
}

impl Shell {
    pub fn new(skip_intro: bool) -> Self {
        let intro = if skip_intro {
            Intro::skipped()
        } else {
            Intro::start()
        };
        Self {
            intro,
            active: Tab::Catalog,
            history: Vec::new(),
            mounted: None,
        }
    }

    pub fn header_title(&self) -> &'static str {
        HEADER_TITLE
    }

    pub fn intro(&self) -> &Intro {
        &self.intro
    }

    pub fn is_ready(&mut self) -> bool {
        self.intro.phase() == IntroPhase::Ready
    }

    pub async fn wait_ready(&mut self) {
        self.intro.wait_ready().await;
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn history(&self) -> &[Tab] {
        &self.history
    }

    /// Switch to `tab`, tearing down whatever screen is mounted.
    pub fn navigate(&mut self, tab: Tab) -> Result<()> {
        if !self.is_ready() {
            return Err(ClientError::IntroInProgress(tab));
        }

        // Each tab appears at most once in history, so it stays shorter
        // than the tab bar.
        if tab != self.active {
            self.history.retain(|t| *t != tab);
            self.history.push(self.active);
            self.active = tab;
        }
        self.unmount();

        debug!(%tab, depth = self.history.len(), "navigated");
        Ok(())
    }

    /// Return to the previous destination, if any.
    pub fn back(&mut self) -> Option<Tab> {
        let previous = self.history.pop()?;
        self.active = previous;
        self.unmount();

        debug!(tab = %previous, "navigated back");
        Some(previous)
    }

    /// The header's profile shortcut.
    pub fn open_profile(&mut self) -> Result<()> {
        self.navigate(Tab::Profile)
    }

    /// Record the lifetime of the screen now shown for the active tab.
    pub fn attach(&mut self, lifetime: ScreenLifetime) {
        if let Some(previous) = self.mounted.replace(lifetime) {
            previous.teardown();
        }
    }

    fn unmount(&mut self) {
        if let Some(lifetime) = self.mounted.take() {
            lifetime.teardown();
        }
    }

    pub fn tab_bar(&self) -> Vec<TabItem> {
        Tab::ALL
            .iter()
            .map(|&tab| {
                let focused = tab == self.active;
                TabItem {
                    tab,
                    label: tab.route(),
                    icon: tab.icon(),
                    tint: tab.tint(focused),
                    indicator: focused.then_some(TAB_INDICATOR_GRADIENT),
                }
            })
            .collect()
    }
}
