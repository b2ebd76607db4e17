// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mounted floating content with an auto-update lifecycle.

use core::fmt;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;
use tether_event::{NodeBounds, NodeTree};
use tether_geometry::Side;

use crate::compute::{Geometry, Positioned, clipping_rect, compute_position};
use crate::types::{
    Align, FloatingError, FloatingOptions, Length, TransformOrigin, UpdateStrategy, validate_arrow,
};

/// Custom property carrying the width left inside the boundary.
pub const VAR_AVAILABLE_WIDTH: &str = "--tether-floating-available-width";
/// Custom property carrying the height left inside the boundary.
pub const VAR_AVAILABLE_HEIGHT: &str = "--tether-floating-available-height";
/// Custom property carrying the anchor's width.
pub const VAR_ANCHOR_WIDTH: &str = "--tether-floating-anchor-width";
/// Custom property carrying the anchor's height.
pub const VAR_ANCHOR_HEIGHT: &str = "--tether-floating-anchor-height";
/// Custom property carrying the transform origin.
pub const VAR_TRANSFORM_ORIGIN: &str = "--tether-floating-transform-origin";

/// What the content is positioned against.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Anchor<K> {
    /// A host node, measured on every update.
    Node(K),
    /// A fixed rect in the shared coordinate space, e.g. a text selection.
    Virtual(Rect),
}

impl<K> Anchor<K> {
    /// A zero-sized virtual anchor at `p`, e.g. a context menu's click point.
    pub fn point(p: Point) -> Self {
        Self::Virtual(Rect::from_origin_size(p, Size::ZERO))
    }
}

/// A value written to a content style property.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// A pixel length.
    Px(f64),
    /// A transform origin pair.
    Origin(TransformOrigin),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{}", Length::Px(*v)),
            Self::Origin(o) => write!(f, "{o}"),
        }
    }
}

/// Receives custom properties for the content node.
pub trait StyleSink {
    /// Set property `name` to `value`.
    fn set_property(&mut self, name: &'static str, value: StyleValue);
}

/// Styles for the content wrapper.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContentStyle {
    /// Translation to apply. `None` until the first successful placement, so
    /// hosts can keep the content off-screen instead of flashing it at the origin.
    pub translate: Option<Point>,
    /// Hide the content and make it ignore the pointer.
    pub hidden: bool,
    /// Origin for open and close animations.
    pub transform_origin: TransformOrigin,
}

/// Styles for the arrow glyph, relative to the content box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrowStyle {
    /// Left offset, for top and bottom placements.
    pub left: Option<f64>,
    /// Top offset, for left and right placements.
    pub top: Option<f64>,
    /// Content edge the arrow is pinned to: the one facing the anchor.
    pub base_side: Side,
    /// Rotation of a downward-pointing glyph, in degrees.
    pub rotation: f64,
    /// The arrow could not point at the anchor's center.
    pub hidden: bool,
}

/// Placement snapshot handed to rendering code.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementState {
    /// Resolved side.
    pub side: Side,
    /// Resolved alignment.
    pub align: Align,
    /// Content wrapper styles.
    pub content: ContentStyle,
    /// Arrow styles.
    pub arrow: ArrowStyle,
    /// Arrow offset along the anchor edge, when an arrow is present.
    pub arrow_offset: Option<f64>,
    /// Whether a placement has been computed since the content mounted.
    pub is_positioned: bool,
}

/// Floating content tied to an anchor.
///
/// The layer is subscribed to updates while both an anchor and mounted content
/// are present. Hosts forward scroll, resize and layout notifications, then
/// call [`FloatingLayer::update`]; with [`UpdateStrategy::Always`] they also
/// call [`FloatingLayer::on_frame`] once per animation frame. Unmounting the
/// content drops the subscription immediately.
///
/// Missing or detached nodes are not errors: the update is skipped and retried
/// on the next call.
#[derive(Clone, Debug)]
pub struct FloatingLayer<K> {
    options: FloatingOptions,
    anchor: Option<Anchor<K>>,
    content: Option<K>,
    arrow: Option<Size>,
    boundary: SmallVec<[K; 2]>,
    dirty: bool,
    last_anchor: Option<Rect>,
    last: Option<Positioned>,
}

impl<K: Copy + Eq + fmt::Debug> FloatingLayer<K> {
    /// Create an unmounted layer, rejecting unusable options up front.
    pub fn new(options: FloatingOptions) -> Result<Self, FloatingError> {
        options.validate()?;
        Ok(Self {
            options,
            anchor: None,
            content: None,
            arrow: None,
            boundary: SmallVec::new(),
            dirty: false,
            last_anchor: None,
            last: None,
        })
    }

    /// Current options.
    pub fn options(&self) -> &FloatingOptions {
        &self.options
    }

    /// Replace the options. Invalid options leave the layer untouched.
    pub fn set_options(&mut self, options: FloatingOptions) -> Result<(), FloatingError> {
        options.validate()?;
        self.options = options;
        self.invalidate();
        Ok(())
    }

    /// Point the layer at a new anchor, or at none.
    pub fn set_anchor(&mut self, anchor: Option<Anchor<K>>) {
        self.anchor = anchor;
        self.last_anchor = None;
        self.invalidate();
    }

    /// Set the arrow glyph size, or remove the arrow.
    pub fn set_arrow(&mut self, arrow: Option<Size>) -> Result<(), FloatingError> {
        self.arrow = arrow.map(validate_arrow).transpose()?;
        self.invalidate();
        Ok(())
    }

    /// Nodes whose boxes further restrict the viewport.
    pub fn set_collision_boundary(&mut self, nodes: impl IntoIterator<Item = K>) {
        self.boundary = nodes.into_iter().collect();
        self.invalidate();
    }

    /// The content node mounted; start tracking it.
    pub fn mount_content(&mut self, content: K) {
        tracing::debug!(?content, "floating content mounted");
        self.content = Some(content);
        self.last = None;
        self.dirty = true;
    }

    /// The content node unmounted; stop all updates and forget the placement.
    pub fn unmount_content(&mut self) {
        if let Some(content) = self.content.take() {
            tracing::debug!(?content, "floating content unmounted, auto-update stopped");
        }
        self.last = None;
        self.last_anchor = None;
        self.dirty = false;
    }

    /// Whether scroll, resize, and frame updates are currently relevant.
    pub fn is_subscribed(&self) -> bool {
        self.anchor.is_some() && self.content.is_some()
    }

    /// A scroll container or the document scrolled.
    pub fn notify_scroll(&mut self) {
        self.invalidate();
    }

    /// The viewport resized.
    pub fn notify_resize(&mut self) {
        self.invalidate();
    }

    /// The anchor, content, or a boundary node changed size or position.
    pub fn notify_layout_change(&mut self) {
        self.invalidate();
    }

    /// Whether the next [`FloatingLayer::update`] will recompute.
    pub fn needs_update(&self) -> bool {
        self.is_subscribed() && self.dirty
    }

    fn invalidate(&mut self) {
        if self.is_subscribed() {
            self.dirty = true;
        }
    }

    /// Recompute the placement if anything changed since the last one.
    ///
    /// Returns the current placement, or `None` while unsubscribed or when a
    /// node could not be measured.
    pub fn update<H>(&mut self, host: &H, viewport: Rect) -> Option<&Positioned>
    where
        H: NodeTree<K> + NodeBounds<K>,
    {
        if !self.is_subscribed() {
            return None;
        }
        if !self.dirty {
            return self.last.as_ref();
        }
        let Some(geometry) = self.measure(host, viewport) else {
            tracing::trace!("anchor or content not measurable, skipping placement");
            return None;
        };
        let placed = compute_position(&geometry, &self.options);
        tracing::trace!(placement = %placed.placement, x = placed.position.x, y = placed.position.y, "placed");
        self.last_anchor = Some(geometry.anchor);
        self.dirty = false;
        self.last = Some(placed);
        self.last.as_ref()
    }

    /// Per-frame hook for [`UpdateStrategy::Always`]: recompute when the
    /// anchor moved. Returns `true` if a new placement was computed.
    pub fn on_frame<H>(&mut self, host: &H, viewport: Rect) -> bool
    where
        H: NodeTree<K> + NodeBounds<K>,
    {
        if self.options.update_strategy != UpdateStrategy::Always || !self.is_subscribed() {
            return false;
        }
        let anchor = self.anchor_rect(host);
        if anchor.is_some() && anchor != self.last_anchor {
            self.dirty = true;
        }
        self.dirty && self.update(host, viewport).is_some()
    }

    /// The last computed placement.
    pub fn positioned(&self) -> Option<&Positioned> {
        self.last.as_ref()
    }

    /// Snapshot for rendering.
    pub fn placement_state(&self) -> PlacementState {
        let Some(p) = self.last else {
            let desired = self.options.desired_placement();
            return PlacementState {
                side: desired.side,
                align: desired.align,
                content: ContentStyle {
                    translate: None,
                    hidden: false,
                    transform_origin: TransformOrigin::default(),
                },
                arrow: arrow_style(desired.side, None, None, true),
                arrow_offset: None,
                is_positioned: false,
            };
        };
        let hidden_arrow = p.cannot_center_arrow();
        PlacementState {
            side: p.placement.side,
            align: p.placement.align,
            content: ContentStyle {
                translate: Some(p.snapped_position(self.options.device_pixel_ratio)),
                hidden: p.reference_hidden,
                transform_origin: p.transform_origin,
            },
            arrow: arrow_style(
                p.placement.side,
                p.arrow.and_then(|a| a.x()),
                p.arrow.and_then(|a| a.y()),
                hidden_arrow,
            ),
            arrow_offset: p.arrow.map(|a| a.offset),
            is_positioned: true,
        }
    }

    /// Write the sizing custom properties onto the content. Returns `false`
    /// (writing nothing) until a placement exists.
    pub fn apply_vars(&self, sink: &mut impl StyleSink) -> bool {
        let Some(p) = self.last else {
            return false;
        };
        sink.set_property(VAR_AVAILABLE_WIDTH, StyleValue::Px(p.available.width));
        sink.set_property(VAR_AVAILABLE_HEIGHT, StyleValue::Px(p.available.height));
        sink.set_property(VAR_ANCHOR_WIDTH, StyleValue::Px(p.anchor.width));
        sink.set_property(VAR_ANCHOR_HEIGHT, StyleValue::Px(p.anchor.height));
        sink.set_property(VAR_TRANSFORM_ORIGIN, StyleValue::Origin(p.transform_origin));
        true
    }

    fn anchor_rect<H>(&self, host: &H) -> Option<Rect>
    where
        H: NodeTree<K> + NodeBounds<K>,
    {
        match self.anchor? {
            Anchor::Node(node) => live_bounds(host, &node),
            Anchor::Virtual(rect) => Some(rect),
        }
    }

    fn measure<H>(&self, host: &H, viewport: Rect) -> Option<Geometry>
    where
        H: NodeTree<K> + NodeBounds<K>,
    {
        let anchor = self.anchor_rect(host)?;
        let content = live_bounds(host, &self.content?)?.size();
        let boundary = clipping_rect(
            viewport,
            self.boundary.iter().filter_map(|b| live_bounds(host, b)),
        );
        Some(Geometry {
            anchor,
            content,
            arrow: self.arrow,
            boundary,
        })
    }
}

fn live_bounds<K, H>(host: &H, node: &K) -> Option<Rect>
where
    H: NodeTree<K> + NodeBounds<K>,
{
    if host.is_connected(node) {
        host.bounds(node)
    } else {
        None
    }
}

fn arrow_style(side: Side, left: Option<f64>, top: Option<f64>, hidden: bool) -> ArrowStyle {
    ArrowStyle {
        left,
        top,
        base_side: side.opposite(),
        rotation: match side {
            Side::Top => 0.0,
            Side::Right => 90.0,
            Side::Bottom => 180.0,
            Side::Left => -90.0,
        },
        hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use tether_event::SimpleTree;

    const VIEW: Rect = Rect::new(0.0, 0.0, 1024.0, 768.0);

    #[derive(Default)]
    struct Sink(Vec<(&'static str, String)>);

    impl StyleSink for Sink {
        fn set_property(&mut self, name: &'static str, value: StyleValue) {
            self.0.push((name, value.to_string()));
        }
    }

    fn host() -> SimpleTree<u32> {
        let mut t = SimpleTree::new();
        t.insert(1, None, VIEW);
        // Trigger A.
        t.insert(2, Some(1), Rect::new(40.0, 20.0, 140.0, 52.0));
        // Content B, measured wherever it currently sits.
        t.insert(3, Some(2), Rect::new(0.0, 0.0, 180.0, 120.0));
        t
    }

    fn mounted(options: FloatingOptions) -> FloatingLayer<u32> {
        let mut layer = FloatingLayer::new(options).unwrap();
        layer.set_anchor(Some(Anchor::Node(2)));
        layer.mount_content(3);
        layer
    }

    #[test]
    fn bottom_start_sits_side_offset_below_anchor() {
        let host = host();
        let mut layer = mounted(FloatingOptions {
            align: Align::Start,
            side_offset: 8.0,
            ..FloatingOptions::default()
        });
        assert!(!layer.placement_state().is_positioned);

        let placed = layer.update(&host, VIEW).copied().unwrap();
        let anchor = host.bounds(&2).unwrap();
        assert_eq!(placed.position.y, anchor.y1 + 8.0);
        assert_eq!(placed.position.x, anchor.x0);

        let state = layer.placement_state();
        assert!(state.is_positioned);
        assert_eq!(state.side, Side::Bottom);
        assert_eq!(state.align, Align::Start);
        assert_eq!(state.content.translate, Some(Point::new(40.0, 60.0)));
        assert!(state.arrow.hidden);
        assert_eq!(state.arrow.base_side, Side::Top);
    }

    #[test]
    fn invalid_options_fail_fast() {
        let bad = FloatingOptions {
            arrow_padding: -2.0,
            ..FloatingOptions::default()
        };
        assert!(FloatingLayer::<u32>::new(bad.clone()).is_err());

        let mut layer = mounted(FloatingOptions::default());
        assert!(layer.set_options(bad).is_err());
        assert_eq!(layer.options(), &FloatingOptions::default());
        assert!(layer.set_arrow(Some(Size::new(f64::INFINITY, 5.0))).is_err());
    }

    #[test]
    fn missing_or_detached_nodes_are_skipped() {
        let mut host = host();
        let mut layer = FloatingLayer::new(FloatingOptions::default()).unwrap();
        // Nothing mounted.
        assert!(layer.update(&host, VIEW).is_none());
        layer.set_anchor(Some(Anchor::Node(2)));
        assert!(!layer.is_subscribed());
        assert!(layer.update(&host, VIEW).is_none());

        layer.mount_content(3);
        host.detach(&2);
        assert!(layer.update(&host, VIEW).is_none());
        assert!(layer.needs_update());
        assert!(!layer.placement_state().is_positioned);

        // Reattached: the pending update goes through.
        host.insert(2, Some(1), Rect::new(40.0, 20.0, 140.0, 52.0));
        assert!(layer.update(&host, VIEW).is_some());
    }

    #[test]
    fn unmount_tears_down_subscription() {
        let host = host();
        let mut layer = mounted(FloatingOptions {
            update_strategy: UpdateStrategy::Always,
            ..FloatingOptions::default()
        });
        assert!(layer.update(&host, VIEW).is_some());
        layer.unmount_content();
        assert!(!layer.is_subscribed());
        assert!(layer.positioned().is_none());
        assert!(!layer.on_frame(&host, VIEW));
        layer.notify_scroll();
        assert!(!layer.needs_update());
        assert!(!layer.apply_vars(&mut Sink::default()));
    }

    #[test]
    fn optimized_waits_for_notifications() {
        let mut host = host();
        let mut layer = mounted(FloatingOptions::default());
        layer.update(&host, VIEW);
        assert!(!layer.needs_update());

        host.set_bounds(&2, Rect::new(240.0, 20.0, 340.0, 52.0));
        // Frames do nothing under the optimized strategy.
        assert!(!layer.on_frame(&host, VIEW));
        assert_eq!(layer.positioned().unwrap().position.x, 0.0);

        layer.notify_scroll();
        assert!(layer.needs_update());
        let x = layer.update(&host, VIEW).unwrap().position.x;
        assert_eq!(x, 200.0);
    }

    #[test]
    fn always_strategy_follows_anchor_every_frame() {
        let mut host = host();
        let mut layer = mounted(FloatingOptions {
            update_strategy: UpdateStrategy::Always,
            ..FloatingOptions::default()
        });
        assert!(layer.on_frame(&host, VIEW));
        // Unchanged anchor: no work.
        assert!(!layer.on_frame(&host, VIEW));

        host.set_bounds(&2, Rect::new(240.0, 20.0, 340.0, 52.0));
        assert!(layer.on_frame(&host, VIEW));
        assert_eq!(layer.positioned().unwrap().position.x, 200.0);
    }

    #[test]
    fn virtual_point_anchor() {
        let host = host();
        let mut layer = FloatingLayer::new(FloatingOptions {
            side: Side::Right,
            align: Align::Start,
            ..FloatingOptions::default()
        })
        .unwrap();
        layer.set_anchor(Some(Anchor::point(Point::new(300.0, 200.0))));
        layer.mount_content(3);
        let p = layer.update(&host, VIEW).unwrap();
        assert_eq!(p.position, Point::new(300.0, 200.0));
        assert_eq!(layer.placement_state().arrow.rotation, 90.0);
    }

    #[test]
    fn boundary_nodes_restrict_the_viewport() {
        let mut host = host();
        // A scroll container that ends just below the anchor.
        host.insert(9, Some(1), Rect::new(0.0, 0.0, 600.0, 100.0));
        let mut layer = mounted(FloatingOptions::default());
        layer.set_collision_boundary([9]);
        let p = *layer.update(&host, VIEW).unwrap();
        // No room below within the container, none above either; bottom
        // overflows less.
        assert_eq!(p.placement.side, Side::Bottom);
        assert_eq!(p.available.height, 48.0);

        // A detached boundary node is ignored.
        host.detach(&9);
        layer.notify_layout_change();
        let p = *layer.update(&host, VIEW).unwrap();
        assert_eq!(p.available.height, 768.0 - 52.0);
    }

    #[test]
    fn vars_are_published() {
        let host = host();
        let mut layer = mounted(FloatingOptions::default());
        layer.update(&host, VIEW);
        let mut sink = Sink::default();
        assert!(layer.apply_vars(&mut sink));
        assert_eq!(sink.0.len(), 5);
        assert_eq!(sink.0[2], (VAR_ANCHOR_WIDTH, "100px".to_string()));
        assert_eq!(sink.0[3], (VAR_ANCHOR_HEIGHT, "32px".to_string()));
        assert_eq!(sink.0[4], (VAR_TRANSFORM_ORIGIN, "50% 0px".to_string()));
        assert_eq!(
            layer.placement_state().content.transform_origin.x,
            Length::Percent(50.0)
        );
    }

    #[test]
    fn detached_anchor_hides_content() {
        let mut host = host();
        host.set_bounds(&2, Rect::new(40.0, -200.0, 140.0, -160.0));
        let mut layer = mounted(FloatingOptions {
            hide_when_detached: true,
            ..FloatingOptions::default()
        });
        layer.update(&host, VIEW);
        assert!(layer.placement_state().content.hidden);
    }
}
