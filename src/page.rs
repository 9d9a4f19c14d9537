// Page dispatcher: composes the feature components, drains due deadlines
// before dispatching each event, and aggregates patches for the host.

use serde::Serialize;

use crate::carousel::Carousel;
use crate::cart::CartCounter;
use crate::cycler::ScreenCycler;
use crate::error::EngineError;
use crate::search::SearchFilter;
use crate::toast::ToastStack;
use crate::types::{
    DomPatch, EventBatch, EventKind, PageConfig, RenderBatch, Timestamp, UiEvent,
};

const TOAST_MESSAGE: &str = "Added to cart";

/// The whole interactive surface of the showcase page. Components share no
/// state; this dispatcher is their only composition point.
pub struct ShowcasePage {
    cart: CartCounter,
    filter: SearchFilter,
    carousel: Carousel,
    cycler: ScreenCycler,
    toasts: ToastStack,
    products_section: String,
}

/// Snapshot of the mutable page state, for the host's debugging surface.
#[derive(Debug, Clone, Serialize)]
pub struct PageState {
    pub cart_count: u32,
    pub slide_cursor: usize,
    pub autoplay_armed: bool,
    pub pending_query: Option<String>,
    pub active_toasts: usize,
}

impl ShowcasePage {
    pub fn new(config: PageConfig, now: Timestamp) -> Result<Self, EngineError> {
        if config.cart_badge.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "cart_badge element id is empty".to_string(),
            ));
        }
        if config.products_section.trim().is_empty() {
            return Err(EngineError::InvalidConfig(
                "products_section element id is empty".to_string(),
            ));
        }

        let settings = &config.settings;
        let slide_ids: Vec<String> = config.slides.iter().map(|s| s.id.clone()).collect();

        Ok(ShowcasePage {
            cart: CartCounter::new(
                config.cart_badge.clone(),
                config.persisted_cart.as_deref(),
                settings.pulse_ms,
            ),
            filter: SearchFilter::new(&config.cards, settings.debounce_ms),
            carousel: Carousel::new(slide_ids, settings.autoplay_interval_ms, now)?,
            cycler: ScreenCycler::new(&config.slides),
            toasts: ToastStack::new(settings.toast_hold_ms, settings.toast_fade_ms),
            products_section: config.products_section,
        })
    }

    /// Initial render: badge text, dots plus slide 0, focusable screen images.
    pub fn mount(&self) -> RenderBatch {
        let mut patches = self.cart.mount();
        patches.extend(self.carousel.mount());
        patches.extend(self.cycler.mount());

        RenderBatch {
            patches,
            next_deadline: self.next_deadline(),
        }
    }

    /// Process a batch of events in order. Main entry point; batching keeps
    /// JS↔WASM crossings low.
    pub fn handle_batch(&mut self, batch: &EventBatch) -> RenderBatch {
        let mut patches = Vec::new();
        for event in &batch.events {
            patches.extend(self.handle(event));
        }

        RenderBatch {
            patches,
            next_deadline: self.next_deadline(),
        }
    }

    /// Drain every deadline due at the event's instant, then dispatch it.
    /// Components touch disjoint targets, so cross-component drain order does
    /// not affect the final document state.
    pub fn handle(&mut self, event: &UiEvent) -> Vec<DomPatch> {
        let now = event.timestamp;
        let mut patches = self.drain_due(now);
        patches.extend(self.dispatch(&event.event, now));
        patches
    }

    /// Earliest pending deadline across autoplay, debounce, and toasts.
    pub fn next_deadline(&self) -> Option<Timestamp> {
        [
            self.carousel.next_deadline(),
            self.filter.next_deadline(),
            self.toasts.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn state(&self) -> PageState {
        PageState {
            cart_count: self.cart.count(),
            slide_cursor: self.carousel.cursor(),
            autoplay_armed: self.carousel.is_autoplay_armed(),
            pending_query: self.filter.pending_query().map(str::to_string),
            active_toasts: self.toasts.active_count(),
        }
    }

    fn drain_due(&mut self, now: Timestamp) -> Vec<DomPatch> {
        let mut patches = self.carousel.advance_until(now);
        patches.extend(self.filter.advance_until(now));
        patches.extend(self.toasts.advance_until(now));
        patches
    }

    fn dispatch(&mut self, kind: &EventKind, now: Timestamp) -> Vec<DomPatch> {
        match kind {
            EventKind::AddToCart { control } => {
                let mut patches = self.cart.increment(control);
                patches.extend(self.toasts.spawn(TOAST_MESSAGE, now));
                patches
            }
            EventKind::SearchInput { value } => {
                self.filter.input(value, now);
                Vec::new()
            }
            EventKind::CarouselPrev => self.carousel.prev(now),
            EventKind::CarouselNext => self.carousel.next(now),
            EventKind::DotPressed { index } => self.carousel.dot(*index, now),
            EventKind::CarouselKey { key } => self.carousel.key(key, now),
            EventKind::CarouselPointerEnter => {
                self.carousel.pointer_enter();
                Vec::new()
            }
            EventKind::CarouselPointerLeave => {
                self.carousel.pointer_leave(now);
                Vec::new()
            }
            EventKind::ScreenTap { slide, side } => self.cycler.cycle(*slide, *side),
            EventKind::ScreenKey { slide, side, key } => self.cycler.key(*slide, *side, key),
            EventKind::ShopCollection => vec![DomPatch::ScrollTo {
                target: self.products_section.clone(),
            }],
            // The drain above already did the work.
            EventKind::Tick => Vec::new(),
        }
    }
}
