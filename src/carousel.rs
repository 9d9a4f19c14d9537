// Hero carousel: slide cursor, dot indicators, autoplay with pause-on-hover.
// Rule: every navigation restarts the idle countdown from full duration.

use crate::error::EngineError;
use crate::types::{DomPatch, Timestamp};

/// Carousel over a fixed, non-empty slide set. The cursor always stays in
/// `[0, slide_count)`; wrapping is Euclidean so negative indices normalize.
pub struct Carousel {
    slides: Vec<String>,
    cursor: usize,
    interval_ms: u64,
    /// Next autoplay fire. None while the pointer rests over the carousel.
    deadline: Option<Timestamp>,
}

impl Carousel {
    /// Autoplay is armed immediately; the first unattended advance happens one
    /// interval after construction.
    pub fn new(
        slides: Vec<String>,
        interval_ms: u64,
        now: Timestamp,
    ) -> Result<Self, EngineError> {
        if slides.is_empty() {
            return Err(EngineError::CarouselEmpty);
        }
        if interval_ms == 0 {
            return Err(EngineError::InvalidInterval {
                name: "autoplay_interval_ms",
            });
        }

        Ok(Carousel {
            slides,
            cursor: 0,
            interval_ms,
            deadline: Some(now.offset(interval_ms)),
        })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_autoplay_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Dot creation plus the initial render of slide 0.
    pub fn mount(&self) -> Vec<DomPatch> {
        let mut patches: Vec<DomPatch> = (0..self.slides.len())
            .map(|i| DomPatch::CreateDot {
                index: i,
                label: format!("Go to slide {}", i + 1),
                active: i == self.cursor,
            })
            .collect();
        patches.extend(self.render());
        patches
    }

    /// Normalize the index, render, and restart the idle countdown.
    pub fn go_to(&mut self, index: isize, now: Timestamp) -> Vec<DomPatch> {
        let count = self.slides.len() as isize;
        self.cursor = index.rem_euclid(count) as usize;
        self.deadline = Some(now.offset(self.interval_ms));
        self.render()
    }

    pub fn next(&mut self, now: Timestamp) -> Vec<DomPatch> {
        self.go_to(self.cursor as isize + 1, now)
    }

    pub fn prev(&mut self, now: Timestamp) -> Vec<DomPatch> {
        self.go_to(self.cursor as isize - 1, now)
    }

    /// Out-of-range dots are a silent no-op.
    pub fn dot(&mut self, index: usize, now: Timestamp) -> Vec<DomPatch> {
        if index < self.slides.len() {
            self.go_to(index as isize, now)
        } else {
            Vec::new()
        }
    }

    /// Arrow keys navigate; everything else is ignored.
    pub fn key(&mut self, key: &str, now: Timestamp) -> Vec<DomPatch> {
        match key {
            "ArrowLeft" => self.prev(now),
            "ArrowRight" => self.next(now),
            _ => Vec::new(),
        }
    }

    pub fn pointer_enter(&mut self) {
        self.deadline = None;
    }

    pub fn pointer_leave(&mut self, now: Timestamp) {
        self.deadline = Some(now.offset(self.interval_ms));
    }

    /// Replay every autoplay boundary covered by `now`. Each fire advances one
    /// slide and re-arms from the boundary itself, so a late tick catches up
    /// exactly as a repeating interval would have.
    pub fn advance_until(&mut self, now: Timestamp) -> Vec<DomPatch> {
        let mut patches = Vec::new();

        while let Some(deadline) = self.deadline {
            if deadline > now {
                break;
            }
            patches.extend(self.go_to(self.cursor as isize + 1, deadline));
            if self.deadline == Some(deadline) {
                // Clock ceiling; the deadline cannot advance further.
                break;
            }
        }

        patches
    }

    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.deadline
    }

    /// Exactly one slide un-hidden and exactly one dot active, both at the
    /// cursor.
    fn render(&self) -> Vec<DomPatch> {
        let mut patches = Vec::with_capacity(self.slides.len() * 3);

        for (i, slide) in self.slides.iter().enumerate() {
            let hidden = i != self.cursor;
            patches.push(DomPatch::SetHidden {
                target: slide.clone(),
                hidden,
            });
            patches.push(DomPatch::SetAttribute {
                target: slide.clone(),
                name: "aria-hidden".to_string(),
                value: hidden.to_string(),
            });
        }
        for i in 0..self.slides.len() {
            patches.push(DomPatch::DotActive {
                index: i,
                active: i == self.cursor,
            });
        }

        patches
    }
}
