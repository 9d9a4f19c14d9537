// Shared vocabulary: timestamps, the page snapshot, UI events in, DOM patches out.
// The host never makes decisions; it forwards events and applies patches.

use serde::{Deserialize, Serialize};

/// Instant in page-relative milliseconds. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_millis(ms: u64) -> Self {
        Timestamp(ms)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// This instant advanced by `ms` milliseconds (saturating).
    pub fn offset(&self, ms: u64) -> Timestamp {
        Timestamp(self.0.saturating_add(ms))
    }
}

/// Which laptop screen of a slide an image occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenSide {
    Left,
    Right,
}

/// Page snapshot taken by the host once at load and passed to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Raw persisted cart value, if the storage slot held one.
    #[serde(default)]
    pub persisted_cart: Option<String>,
    #[serde(default)]
    pub cards: Vec<CardConfig>,
    pub slides: Vec<SlideConfig>,
    /// Element id of the cart badge.
    pub cart_badge: String,
    /// Element id of the products section (scroll target).
    pub products_section: String,
    #[serde(default)]
    pub settings: PageSettings,
}

/// One product card in the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    pub id: String,
    /// Title attribute the filter matches against.
    pub title: String,
    /// Element id of the card's add-to-cart control.
    pub add_control: String,
}

/// One carousel slide and its optional screen images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideConfig {
    pub id: String,
    #[serde(default)]
    pub left: Option<ScreenConfig>,
    #[serde(default)]
    pub right: Option<ScreenConfig>,
}

/// A clickable screen image inside a slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Element id of the image.
    pub image: String,
    /// Source the image currently displays.
    pub current: String,
    /// Candidate source contributed to this side's cycle list.
    #[serde(default)]
    pub screen: Option<String>,
}

/// Timing knobs for the page's timers and transient animations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSettings {
    /// Autoplay advance interval (milliseconds).
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Quiet period before a search query is applied.
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,
    /// How long a toast holds fully visible.
    #[serde(default = "default_toast_hold")]
    pub toast_hold_ms: u64,
    /// Fade-out duration before a toast is removed.
    #[serde(default = "default_toast_fade")]
    pub toast_fade_ms: u64,
    /// Pulse animation length on the add-to-cart control.
    #[serde(default = "default_pulse")]
    pub pulse_ms: u64,
}

fn default_autoplay_interval() -> u64 {
    4500
}

fn default_debounce() -> u64 {
    180
}

fn default_toast_hold() -> u64 {
    1100
}

fn default_toast_fade() -> u64 {
    280
}

fn default_pulse() -> u64 {
    220
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            autoplay_interval_ms: default_autoplay_interval(),
            debounce_ms: default_debounce(),
            toast_hold_ms: default_toast_hold(),
            toast_fade_ms: default_toast_fade(),
            pulse_ms: default_pulse(),
        }
    }
}

/// Batch of UI events from the host (minimizes JS↔WASM crossings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBatch {
    pub events: Vec<UiEvent>,
}

/// Single timestamped UI event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiEvent {
    pub timestamp: Timestamp,
    pub event: EventKind,
}

/// What happened on the page. Keys arrive raw; the engine decides what they mean.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventKind {
    /// An add-to-cart control was clicked.
    AddToCart { control: String },
    /// The search field's value changed.
    SearchInput { value: String },
    /// Prev control clicked.
    CarouselPrev,
    /// Next control clicked.
    CarouselNext,
    /// Dot indicator clicked.
    DotPressed { index: usize },
    /// Key pressed while the carousel region has focus.
    CarouselKey { key: String },
    /// Pointer entered the carousel region.
    CarouselPointerEnter,
    /// Pointer left the carousel region.
    CarouselPointerLeave,
    /// A screen image was clicked.
    ScreenTap { slide: usize, side: ScreenSide },
    /// Key pressed while a screen image has focus.
    ScreenKey {
        slide: usize,
        side: ScreenSide,
        key: String,
    },
    /// Shop-collection control clicked.
    ShopCollection,
    /// A host timer fired; drains every due deadline.
    Tick,
}

/// One DOM effect for the host to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DomPatch {
    SetText {
        target: String,
        text: String,
    },
    /// Toggle the `hidden` property.
    SetHidden {
        target: String,
        hidden: bool,
    },
    SetAttribute {
        target: String,
        name: String,
        value: String,
    },
    /// Toggle display of a product card.
    SetDisplayed {
        target: String,
        displayed: bool,
    },
    /// Append a dot indicator to the dots container.
    CreateDot {
        index: usize,
        label: String,
        active: bool,
    },
    DotActive {
        index: usize,
        active: bool,
    },
    /// Run the scale-pulse animation on a control.
    Pulse {
        target: String,
        duration_ms: u64,
    },
    /// Insert a toast element and fade it in.
    ShowToast {
        id: u32,
        message: String,
    },
    /// Start the toast's fade-out transition.
    FadeToast {
        id: u32,
    },
    /// Remove the toast element from the tree.
    RemoveToast {
        id: u32,
    },
    /// Write the cart counter to the persistent slot. Fire-and-forget.
    PersistCart {
        key: String,
        value: String,
    },
    /// Smooth-scroll the viewport to an element.
    ScrollTo {
        target: String,
    },
}

/// Everything the host must apply after one engine call, plus the earliest
/// pending deadline so it can arm a single timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderBatch {
    pub patches: Vec<DomPatch>,
    pub next_deadline: Option<Timestamp>,
}
