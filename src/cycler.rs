// Screen-image cycler: clicking a laptop image (or pressing Enter on it)
// rotates it through the candidate sources collected for its side.

use crate::types::{DomPatch, ScreenSide, SlideConfig};

#[derive(Debug)]
struct ScreenImage {
    /// Element id of the image.
    target: String,
    slide: usize,
    side: ScreenSide,
    /// Position in the side's candidate list. None until the displayed source
    /// has been matched to the list; advancing from None lands on the first
    /// candidate.
    cursor: Option<usize>,
}

/// Cycler over the screen images of every slide. Candidate lists are fixed at
/// construction; only the per-image cursors mutate.
pub struct ScreenCycler {
    left: Vec<String>,
    right: Vec<String>,
    images: Vec<ScreenImage>,
}

impl ScreenCycler {
    /// Collects candidates from every slide (not just the active one),
    /// deduplicated by first occurrence in slide order.
    pub fn new(slides: &[SlideConfig]) -> Self {
        let mut left: Vec<String> = Vec::new();
        let mut right: Vec<String> = Vec::new();

        for slide in slides {
            if let Some(src) = slide.left.as_ref().and_then(|s| s.screen.as_deref()) {
                if !left.iter().any(|known| known == src) {
                    left.push(src.to_string());
                }
            }
            if let Some(src) = slide.right.as_ref().and_then(|s| s.screen.as_deref()) {
                if !right.iter().any(|known| known == src) {
                    right.push(src.to_string());
                }
            }
        }

        let mut images = Vec::new();
        for (index, slide) in slides.iter().enumerate() {
            if let Some(screen) = &slide.left {
                images.push(ScreenImage {
                    target: screen.image.clone(),
                    slide: index,
                    side: ScreenSide::Left,
                    cursor: left.iter().position(|src| *src == screen.current),
                });
            }
            if let Some(screen) = &slide.right {
                images.push(ScreenImage {
                    target: screen.image.clone(),
                    slide: index,
                    side: ScreenSide::Right,
                    cursor: right.iter().position(|src| *src == screen.current),
                });
            }
        }

        ScreenCycler {
            left,
            right,
            images,
        }
    }

    /// Every registered image becomes keyboard-focusable.
    pub fn mount(&self) -> Vec<DomPatch> {
        self.images
            .iter()
            .map(|img| DomPatch::SetAttribute {
                target: img.target.clone(),
                name: "tabindex".to_string(),
                value: "0".to_string(),
            })
            .collect()
    }

    pub fn candidates(&self, side: ScreenSide) -> &[String] {
        match side {
            ScreenSide::Left => &self.left,
            ScreenSide::Right => &self.right,
        }
    }

    pub fn current_index(&self, slide: usize, side: ScreenSide) -> Option<usize> {
        self.images
            .iter()
            .find(|img| img.slide == slide && img.side == side)
            .and_then(|img| img.cursor)
    }

    /// Advance one candidate, wrapping. Missing images and empty candidate
    /// lists are silent no-ops.
    pub fn cycle(&mut self, slide: usize, side: ScreenSide) -> Vec<DomPatch> {
        let count = self.candidates(side).len();
        if count == 0 {
            return Vec::new();
        }

        let Some(image) = self
            .images
            .iter_mut()
            .find(|img| img.slide == slide && img.side == side)
        else {
            return Vec::new();
        };

        let next = match image.cursor {
            Some(k) => (k + 1) % count,
            None => 0,
        };
        image.cursor = Some(next);

        let value = match side {
            ScreenSide::Left => self.left[next].clone(),
            ScreenSide::Right => self.right[next].clone(),
        };

        vec![DomPatch::SetAttribute {
            target: image.target.clone(),
            name: "src".to_string(),
            value,
        }]
    }

    /// Enter cycles; everything else is ignored.
    pub fn key(&mut self, slide: usize, side: ScreenSide, key: &str) -> Vec<DomPatch> {
        if key == "Enter" {
            self.cycle(slide, side)
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScreenConfig;
    use proptest::prelude::*;

    fn screen(image: &str, current: &str, candidate: Option<&str>) -> ScreenConfig {
        ScreenConfig {
            image: image.to_string(),
            current: current.to_string(),
            screen: candidate.map(str::to_string),
        }
    }

    fn slide(id: &str, left: Option<ScreenConfig>, right: Option<ScreenConfig>) -> SlideConfig {
        SlideConfig {
            id: id.to_string(),
            left,
            right,
        }
    }

    fn demo_slides() -> Vec<SlideConfig> {
        vec![
            slide(
                "s0",
                Some(screen("img-l0", "a.png", Some("a.png"))),
                Some(screen("img-r0", "x.png", Some("x.png"))),
            ),
            slide(
                "s1",
                Some(screen("img-l1", "b.png", Some("b.png"))),
                None,
            ),
            // Duplicate candidate; must not appear twice.
            slide(
                "s2",
                Some(screen("img-l2", "a.png", Some("a.png"))),
                Some(screen("img-r2", "y.png", Some("y.png"))),
            ),
        ]
    }

    fn src_of(patches: &[DomPatch]) -> Option<(String, String)> {
        patches.iter().find_map(|p| match p {
            DomPatch::SetAttribute {
                target,
                name,
                value,
            } if name == "src" => Some((target.clone(), value.clone())),
            _ => None,
        })
    }

    #[test]
    fn candidates_dedup_in_first_occurrence_order() {
        let cycler = ScreenCycler::new(&demo_slides());

        assert_eq!(cycler.candidates(ScreenSide::Left), ["a.png", "b.png"]);
        assert_eq!(cycler.candidates(ScreenSide::Right), ["x.png", "y.png"]);
    }

    #[test]
    fn cycle_rotates_through_the_side_list() {
        let mut cycler = ScreenCycler::new(&demo_slides());

        let patches = cycler.cycle(0, ScreenSide::Left);
        assert_eq!(
            src_of(&patches),
            Some(("img-l0".to_string(), "b.png".to_string()))
        );

        let patches = cycler.cycle(0, ScreenSide::Left);
        assert_eq!(
            src_of(&patches),
            Some(("img-l0".to_string(), "a.png".to_string()))
        );
    }

    #[test]
    fn images_cycle_independently() {
        let mut cycler = ScreenCycler::new(&demo_slides());

        cycler.cycle(0, ScreenSide::Left);
        assert_eq!(cycler.current_index(0, ScreenSide::Left), Some(1));
        // Other images untouched.
        assert_eq!(cycler.current_index(1, ScreenSide::Left), Some(1));
        assert_eq!(cycler.current_index(0, ScreenSide::Right), Some(0));
    }

    #[test]
    fn unknown_source_starts_at_the_first_candidate() {
        let slides = vec![slide(
            "s0",
            Some(screen("img", "placeholder.png", Some("a.png"))),
            None,
        )];
        let mut cycler = ScreenCycler::new(&slides);

        assert_eq!(cycler.current_index(0, ScreenSide::Left), None);
        let patches = cycler.cycle(0, ScreenSide::Left);
        assert_eq!(
            src_of(&patches),
            Some(("img".to_string(), "a.png".to_string()))
        );
    }

    #[test]
    fn missing_images_and_empty_lists_no_op() {
        let mut cycler = ScreenCycler::new(&demo_slides());
        // Slide 1 has no right laptop.
        assert!(cycler.cycle(1, ScreenSide::Right).is_empty());
        // No slide 9.
        assert!(cycler.cycle(9, ScreenSide::Left).is_empty());

        // A side with no candidates at all.
        let slides = vec![slide("s0", Some(screen("img", "a.png", None)), None)];
        let mut cycler = ScreenCycler::new(&slides);
        assert!(cycler.cycle(0, ScreenSide::Left).is_empty());
    }

    #[test]
    fn enter_cycles_and_other_keys_do_not() {
        let mut cycler = ScreenCycler::new(&demo_slides());

        assert!(cycler.key(0, ScreenSide::Left, "Space").is_empty());
        assert!(cycler.key(0, ScreenSide::Left, "Tab").is_empty());
        assert_eq!(cycler.current_index(0, ScreenSide::Left), Some(0));

        let patches = cycler.key(0, ScreenSide::Left, "Enter");
        assert!(src_of(&patches).is_some());
        assert_eq!(cycler.current_index(0, ScreenSide::Left), Some(1));
    }

    #[test]
    fn mount_makes_every_image_focusable() {
        let cycler = ScreenCycler::new(&demo_slides());
        let patches = cycler.mount();

        let targets: Vec<_> = patches
            .iter()
            .filter_map(|p| match p {
                DomPatch::SetAttribute {
                    target,
                    name,
                    value,
                } if name == "tabindex" && value == "0" => Some(target.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(targets, vec!["img-l0", "img-r0", "img-l1", "img-l2", "img-r2"]);
    }

    proptest! {
        /// Property: cycling is a pure rotation. n cycles return an image to
        /// its original source iff n is a multiple of the candidate count.
        #[test]
        fn n_cycles_return_to_origin_iff_multiple_of_list_len(
            candidate_count in 1usize..6,
            cycles in 1usize..24,
        ) {
            let slides: Vec<SlideConfig> = (0..candidate_count)
                .map(|i| {
                    let src = format!("shot{i}.png");
                    slide(
                        &format!("s{i}"),
                        Some(screen(&format!("img{i}"), &src, Some(src.as_str()))),
                        None,
                    )
                })
                .collect();
            let mut cycler = ScreenCycler::new(&slides);

            let mut last_src = "shot0.png".to_string();
            for _ in 0..cycles {
                let patches = cycler.cycle(0, ScreenSide::Left);
                if let Some((_, src)) = src_of(&patches) {
                    last_src = src;
                }
            }

            let back_to_origin = last_src == "shot0.png";
            prop_assert_eq!(back_to_origin, cycles % candidate_count == 0);
        }
    }
}
