// SPDX-License-Identifier: MPL-2.0
//! Selection rules for the product media gallery.
//!
//! The gallery keeps four independent selections: the primary media index,
//! the highlighted variant swatch, the active review photo, and the preview
//! overlay. Every operation here is a pure function from the current
//! [`GallerySelection`] (plus the read-only entry lists) to the next one.
//! Callers own the storage and must persist the returned value.
//!
//! Direct index requests are never clamped: an index outside the data the
//! caller passed in comes back as [`SelectionError::IndexOutOfRange`].
//! Wrap-around only happens through [`advance_media`].

use crate::domain::gallery::{MediaEntry, VariantEntry, REVIEW_IMAGE_DISPLAY_LIMIT};
use crate::error::{SelectionError, SelectionTarget};

/// Step direction for the primary media carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Navigate to next media.
    Next,
    /// Navigate to previous media.
    Previous,
}

/// Preview overlay sub-state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open {
        image_url: String,
    },
}

impl OverlayState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open { .. })
    }

    /// URL shown by the overlay, `None` while closed.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match self {
            OverlayState::Open { image_url } => Some(image_url),
            OverlayState::Closed => None,
        }
    }
}

/// The mutable gallery state a host keeps for one mounted product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GallerySelection {
    current_media_index: usize,
    selected_variant_index: Option<usize>,
    selected_review_image_index: Option<usize>,
    overlay: OverlayState,
}

impl GallerySelection {
    /// Initial selection for a freshly mounted product: first media entry,
    /// nothing else selected, overlay closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_media_index(&self) -> usize {
        self.current_media_index
    }

    #[must_use]
    pub fn selected_variant_index(&self) -> Option<usize> {
        self.selected_variant_index
    }

    #[must_use]
    pub fn selected_review_image_index(&self) -> Option<usize> {
        self.selected_review_image_index
    }

    #[must_use]
    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }
}

/// Read-only entry lists for one render.
#[derive(Debug, Clone, Copy)]
pub struct GalleryData<'a> {
    pub media: &'a [MediaEntry],
    pub variants: &'a [VariantEntry],
    pub review_images: &'a [String],
}

/// User actions the host can forward to [`reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    /// Arrow click or arrow key.
    Advance(Direction),
    /// Thumbnail or indicator dot click.
    SelectMedia(usize),
    /// Variant swatch click.
    SelectVariant(usize),
    /// Click on the current image in the primary viewport.
    PreviewCurrentMedia,
    /// Click on a review photo.
    PreviewReviewImage(usize),
    /// Dismiss gesture from the overlay.
    CloseOverlay,
}

/// Steps the primary media index with wrap-around.
///
/// Stepping past the last entry returns to index 0 and stepping before
/// index 0 returns to the last one. With zero or one entry this is a no-op.
#[must_use]
pub fn advance_media(
    selection: &GallerySelection,
    media: &[MediaEntry],
    direction: Direction,
) -> GallerySelection {
    let len = media.len();
    if len <= 1 {
        return selection.clone();
    }

    let current = selection.current_media_index;
    let next = match direction {
        Direction::Next => (current + 1) % len,
        Direction::Previous => (current + len - 1) % len,
    };

    GallerySelection {
        current_media_index: next,
        ..selection.clone()
    }
}

/// Sets the primary media index directly (thumbnails, indicator dots).
pub fn select_media_index(
    selection: &GallerySelection,
    target_index: usize,
    media: &[MediaEntry],
) -> Result<GallerySelection, SelectionError> {
    check_bounds(SelectionTarget::Media, target_index, media.len())?;
    Ok(GallerySelection {
        current_media_index: target_index,
        ..selection.clone()
    })
}

/// Highlights a variant swatch.
///
/// Only `selected_variant_index` changes; the primary viewport and the
/// overlay are left as they are.
pub fn select_variant(
    selection: &GallerySelection,
    target_index: usize,
    variants: &[VariantEntry],
) -> Result<GallerySelection, SelectionError> {
    check_bounds(SelectionTarget::Variant, target_index, variants.len())?;
    Ok(GallerySelection {
        selected_variant_index: Some(target_index),
        ..selection.clone()
    })
}

/// Opens (or re-targets) the overlay on the current media entry.
///
/// Embed entries cannot be previewed; for those, and for a stale index that
/// no longer points into `media`, the selection is returned unchanged.
#[must_use]
pub fn open_overlay_with_media(
    selection: &GallerySelection,
    media: &[MediaEntry],
) -> GallerySelection {
    match media.get(selection.current_media_index) {
        Some(entry) if entry.is_previewable() => GallerySelection {
            overlay: OverlayState::Open {
                image_url: entry.url().to_string(),
            },
            ..selection.clone()
        },
        Some(entry) => {
            tracing::debug!(url = entry.url(), "embed media cannot be previewed");
            selection.clone()
        }
        None => selection.clone(),
    }
}

/// Selects a review photo and opens the overlay on it in one transition.
///
/// Only the first [`REVIEW_IMAGE_DISPLAY_LIMIT`] photos are selectable.
pub fn open_overlay_with_review_image(
    selection: &GallerySelection,
    review_images: &[String],
    target_index: usize,
) -> Result<GallerySelection, SelectionError> {
    let bound = review_images.len().min(REVIEW_IMAGE_DISPLAY_LIMIT);
    check_bounds(SelectionTarget::ReviewImage, target_index, bound)?;

    Ok(GallerySelection {
        selected_review_image_index: Some(target_index),
        overlay: OverlayState::Open {
            image_url: review_images[target_index].clone(),
        },
        ..selection.clone()
    })
}

/// Closes the overlay. Media, variant and review selections persist.
#[must_use]
pub fn close_overlay(selection: &GallerySelection) -> GallerySelection {
    GallerySelection {
        overlay: OverlayState::Closed,
        ..selection.clone()
    }
}

/// Applies one user action to `selection`.
pub fn reduce(
    selection: &GallerySelection,
    data: GalleryData<'_>,
    action: GalleryAction,
) -> Result<GallerySelection, SelectionError> {
    match action {
        GalleryAction::Advance(direction) => Ok(advance_media(selection, data.media, direction)),
        GalleryAction::SelectMedia(index) => select_media_index(selection, index, data.media),
        GalleryAction::SelectVariant(index) => select_variant(selection, index, data.variants),
        GalleryAction::PreviewCurrentMedia => Ok(open_overlay_with_media(selection, data.media)),
        GalleryAction::PreviewReviewImage(index) => {
            open_overlay_with_review_image(selection, data.review_images, index)
        }
        GalleryAction::CloseOverlay => Ok(close_overlay(selection)),
    }
}

fn check_bounds(target: SelectionTarget, index: usize, bound: usize) -> Result<(), SelectionError> {
    if index < bound {
        Ok(())
    } else {
        Err(SelectionError::IndexOutOfRange {
            target,
            index,
            bound,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<MediaEntry> {
        (0..n).map(|i| MediaEntry::image(format!("img{i}.jpg"))).collect()
    }

    fn variants(n: usize) -> Vec<VariantEntry> {
        (0..n)
            .map(|i| VariantEntry::new(format!("variant{i}.jpg"), format!("Variant {i}")))
            .collect()
    }

    fn reviews(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("review{i}.jpg")).collect()
    }

    fn at_index(media: &[MediaEntry], index: usize) -> GallerySelection {
        select_media_index(&GallerySelection::new(), index, media).expect("valid index")
    }

    #[test]
    fn new_selection_starts_on_first_media_with_overlay_closed() {
        let selection = GallerySelection::new();
        assert_eq!(selection.current_media_index(), 0);
        assert_eq!(selection.selected_variant_index(), None);
        assert_eq!(selection.selected_review_image_index(), None);
        assert_eq!(selection.overlay(), &OverlayState::Closed);
    }

    #[test]
    fn previous_from_first_wraps_to_last_and_next_wraps_back() {
        let media = images(3);
        let start = GallerySelection::new();

        let back = advance_media(&start, &media, Direction::Previous);
        assert_eq!(back.current_media_index(), 2);

        let forward = advance_media(&back, &media, Direction::Next);
        assert_eq!(forward.current_media_index(), 0);
    }

    #[test]
    fn full_rotation_returns_to_start_in_both_directions() {
        for n in 1..=6 {
            let media = images(n);
            for start_index in 0..n {
                let start = at_index(&media, start_index);
                for direction in [Direction::Next, Direction::Previous] {
                    let mut selection = start.clone();
                    for _ in 0..n {
                        selection = advance_media(&selection, &media, direction);
                    }
                    assert_eq!(selection, start, "n={n} start={start_index} {direction:?}");
                }
            }
        }
    }

    #[test]
    fn next_then_previous_is_identity() {
        let media = images(5);
        for start_index in 0..5 {
            let start = at_index(&media, start_index);
            let next = advance_media(&start, &media, Direction::Next);
            let back = advance_media(&next, &media, Direction::Previous);
            assert_eq!(back.current_media_index(), start_index);
        }
    }

    #[test]
    fn advance_is_noop_with_single_entry() {
        let media = images(1);
        let start = GallerySelection::new();
        assert_eq!(advance_media(&start, &media, Direction::Next), start);
        assert_eq!(advance_media(&start, &media, Direction::Previous), start);
    }

    #[test]
    fn select_media_index_rejects_out_of_range() {
        let media = images(3);
        let result = select_media_index(&GallerySelection::new(), 3, &media);
        assert_eq!(
            result,
            Err(SelectionError::IndexOutOfRange {
                target: SelectionTarget::Media,
                index: 3,
                bound: 3,
            })
        );
    }

    #[test]
    fn select_variant_leaves_media_index_alone() {
        let media = images(3);
        let start = at_index(&media, 2);
        let selected = select_variant(&start, 1, &variants(4)).expect("valid variant");
        assert_eq!(selected.selected_variant_index(), Some(1));
        assert_eq!(selected.current_media_index(), 2);
        assert_eq!(selected.overlay(), start.overlay());
    }

    #[test]
    fn media_navigation_leaves_variant_alone() {
        let media = images(3);
        let start = select_variant(&GallerySelection::new(), 3, &variants(4)).expect("valid");

        let advanced = advance_media(&start, &media, Direction::Next);
        assert_eq!(advanced.selected_variant_index(), Some(3));

        let selected = select_media_index(&advanced, 2, &media).expect("valid");
        assert_eq!(selected.selected_variant_index(), Some(3));
    }

    #[test]
    fn select_variant_without_variants_is_out_of_range() {
        let result = select_variant(&GallerySelection::new(), 0, &[]);
        assert!(matches!(
            result,
            Err(SelectionError::IndexOutOfRange {
                target: SelectionTarget::Variant,
                bound: 0,
                ..
            })
        ));
    }

    #[test]
    fn variant_then_advance_scenario() {
        let media = images(3);
        let selection = select_variant(&GallerySelection::new(), 2, &variants(4)).expect("valid");
        let selection = advance_media(&selection, &media, Direction::Next);
        assert_eq!(selection.selected_variant_index(), Some(2));
        assert_eq!(selection.current_media_index(), 1);
    }

    #[test]
    fn open_overlay_with_media_targets_current_image() {
        let media = images(3);
        let selection = open_overlay_with_media(&at_index(&media, 1), &media);
        assert_eq!(selection.overlay().image_url(), Some("img1.jpg"));
    }

    #[test]
    fn open_overlay_with_media_ignores_embeds() {
        let media = vec![
            MediaEntry::image("img0.jpg"),
            MediaEntry::embed("https://video.example/embed/1"),
        ];
        let on_embed = at_index(&media, 1);
        assert_eq!(open_overlay_with_media(&on_embed, &media), on_embed);
    }

    #[test]
    fn open_overlay_retargets_while_open() {
        let media = images(3);
        let review_images = reviews(2);
        let open = open_overlay_with_media(&GallerySelection::new(), &media);
        let retargeted = open_overlay_with_review_image(&open, &review_images, 1).expect("valid");
        assert_eq!(retargeted.overlay().image_url(), Some("review1.jpg"));

        let moved = advance_media(&retargeted, &media, Direction::Next);
        let back_to_media = open_overlay_with_media(&moved, &media);
        assert_eq!(back_to_media.overlay().image_url(), Some("img1.jpg"));
    }

    #[test]
    fn review_image_selection_opens_overlay_atomically() {
        let review_images = reviews(8);
        for index in 0..8 {
            let selection =
                open_overlay_with_review_image(&GallerySelection::new(), &review_images, index)
                    .expect("valid index");
            assert!(selection.overlay().is_open());
            assert_eq!(
                selection.overlay().image_url(),
                Some(review_images[index].as_str())
            );
            assert_eq!(selection.selected_review_image_index(), Some(index));
        }
    }

    #[test]
    fn review_images_beyond_display_limit_are_not_selectable() {
        let review_images = reviews(10);
        let start = GallerySelection::new();

        let rejected = open_overlay_with_review_image(&start, &review_images, 9);
        assert_eq!(
            rejected,
            Err(SelectionError::IndexOutOfRange {
                target: SelectionTarget::ReviewImage,
                index: 9,
                bound: REVIEW_IMAGE_DISPLAY_LIMIT,
            })
        );

        let accepted = open_overlay_with_review_image(&start, &review_images, 7).expect("valid");
        assert_eq!(accepted.overlay().image_url(), Some("review7.jpg"));
        assert_eq!(accepted.selected_review_image_index(), Some(7));
    }

    #[test]
    fn failed_review_selection_leaves_no_partial_state() {
        let review_images = reviews(3);
        let start = GallerySelection::new();
        assert!(open_overlay_with_review_image(&start, &review_images, 3).is_err());
        assert_eq!(start, GallerySelection::new());
    }

    #[test]
    fn close_overlay_keeps_other_selections() {
        let media = images(3);
        let selection = at_index(&media, 2);
        let selection = select_variant(&selection, 1, &variants(2)).expect("valid");
        let selection =
            open_overlay_with_review_image(&selection, &reviews(5), 4).expect("valid");

        let closed = close_overlay(&selection);
        assert_eq!(closed.overlay(), &OverlayState::Closed);
        assert_eq!(closed.overlay().image_url(), None);
        assert_eq!(closed.current_media_index(), 2);
        assert_eq!(closed.selected_variant_index(), Some(1));
        assert_eq!(closed.selected_review_image_index(), Some(4));
    }

    #[test]
    fn close_overlay_when_closed_is_harmless() {
        let selection = GallerySelection::new();
        assert_eq!(close_overlay(&selection), selection);
    }

    #[test]
    fn reduce_dispatches_each_action() {
        let media = images(3);
        let variant_list = variants(2);
        let review_images = reviews(4);
        let data = GalleryData {
            media: &media,
            variants: &variant_list,
            review_images: &review_images,
        };

        let actions = [
            GalleryAction::Advance(Direction::Previous),
            GalleryAction::SelectVariant(1),
            GalleryAction::PreviewCurrentMedia,
            GalleryAction::PreviewReviewImage(3),
            GalleryAction::CloseOverlay,
            GalleryAction::SelectMedia(1),
        ];
        let mut selection = GallerySelection::new();
        for action in actions {
            selection = reduce(&selection, data, action).expect("valid action");
        }

        assert_eq!(selection.current_media_index(), 1);
        assert_eq!(selection.selected_variant_index(), Some(1));
        assert_eq!(selection.selected_review_image_index(), Some(3));
        assert!(!selection.overlay().is_open());
    }

    #[test]
    fn reduce_surfaces_contract_violations() {
        let media = images(2);
        let data = GalleryData {
            media: &media,
            variants: &[],
            review_images: &[],
        };
        let result = reduce(
            &GallerySelection::new(),
            data,
            GalleryAction::SelectMedia(5),
        );
        assert!(matches!(
            result,
            Err(SelectionError::IndexOutOfRange {
                target: SelectionTarget::Media,
                ..
            })
        ));
    }
}
