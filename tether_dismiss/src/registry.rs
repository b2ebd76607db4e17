// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layer stack and its arbitration rules.

use alloc::vec::Vec;
use core::fmt::Debug;

use smallvec::SmallVec;
use tether_event::{Deferred, Millis, NodeTree, PointerEvent, PointerType};

use crate::types::{Behavior, DismissEvent, InteractOutsideEvent, LayerId, LayerOptions};

/// Delay between the bubble-phase pointer-down and the outside-interaction
/// decision, in milliseconds.
pub const DISPATCH_DELAY_MS: Millis = 10;

/// Delay after a capture-phase pointer-down before interception marks and
/// responsibility are cleared, in milliseconds.
pub const RESET_DELAY_MS: Millis = 20;

#[derive(Clone, Debug)]
struct Layer<K> {
    id: LayerId,
    node: Option<K>,
    options: LayerOptions,
    intercepted: bool,
    responsible: bool,
    focus_inside: bool,
    awaiting_click: bool,
    dispatch: Deferred<PointerEvent<K>>,
    reset: Deferred<()>,
}

impl<K> Layer<K> {
    fn new(id: LayerId, node: Option<K>, options: LayerOptions) -> Self {
        Self {
            id,
            node,
            options,
            intercepted: false,
            responsible: false,
            focus_inside: false,
            awaiting_click: false,
            dispatch: Deferred::new(),
            reset: Deferred::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Due {
    Dispatch,
    Reset,
}

/// Stack of dismissible layers, topmost last.
///
/// The host forwards document-level events here and acts on the
/// [`DismissEvent`]s that come back. Pointer-downs are decided late: the
/// capture and bubble phases only record what happened, and the decision is
/// made by [`LayerRegistry::poll`] once [`DISPATCH_DELAY_MS`] has passed. That
/// gives inner handlers the whole gesture to claim the event first.
///
/// A layer without a node is inert: it is never responsible and never
/// dispatches.
///
/// ```
/// use kurbo::{Point, Rect};
/// use tether_dismiss::{DismissEvent, LayerOptions, LayerRegistry};
/// use tether_event::{PointerEvent, SimpleTree};
///
/// let mut tree = SimpleTree::new();
/// tree.insert(1_u32, None, Rect::new(0.0, 0.0, 100.0, 100.0)); // menu
/// tree.insert(2, None, Rect::new(200.0, 0.0, 300.0, 100.0)); // page
///
/// let mut layers = LayerRegistry::new();
/// let menu = layers.register(Some(1), LayerOptions::default());
///
/// let down = PointerEvent::primary(2, Point::new(250.0, 50.0));
/// layers.pointer_down_capture(&down, 0);
/// layers.pointer_down_bubble(&down, 0);
/// assert_eq!(layers.next_deadline(), Some(10));
///
/// let events = layers.poll(10, &tree);
/// assert!(matches!(
///     events.as_slice(),
///     [DismissEvent::InteractOutside { layer, .. }] if *layer == menu
/// ));
/// ```
#[derive(Clone, Debug)]
pub struct LayerRegistry<K> {
    layers: Vec<Layer<K>>,
    next_id: u64,
}

impl<K> Default for LayerRegistry<K> {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K: Copy + Eq + Debug> LayerRegistry<K> {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a layer on top of the stack.
    pub fn register(&mut self, node: Option<K>, options: LayerOptions) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push(Layer::new(id, node, options));
        tracing::debug!(?id, ?node, "layer registered");
        id
    }

    /// Remove a layer and drop everything it had pending.
    ///
    /// Returns `false` if `id` was not registered.
    pub fn deregister(&mut self, id: LayerId) -> bool {
        let Some(i) = self.index_of(id) else {
            return false;
        };
        self.layers.remove(i);
        tracing::debug!(?id, "layer deregistered");
        true
    }

    /// Whether `id` is currently registered.
    pub fn is_registered(&self, id: LayerId) -> bool {
        self.index_of(id).is_some()
    }

    /// Number of registered layers, inert ones included.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layers are registered.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Registered layers, bottom to top.
    pub fn layer_ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.layers.iter().map(|l| l.id)
    }

    /// The node currently associated with `id`.
    pub fn node(&self, id: LayerId) -> Option<K> {
        self.layer(id).and_then(|l| l.node)
    }

    /// Attach or detach the layer's node. Returns `false` for unknown ids.
    pub fn set_node(&mut self, id: LayerId, node: Option<K>) -> bool {
        let Some(layer) = self.layer_mut(id) else {
            return false;
        };
        layer.node = node;
        if node.is_none() {
            layer.focus_inside = false;
            layer.awaiting_click = false;
        }
        true
    }

    /// The layer's current options.
    pub fn options(&self, id: LayerId) -> Option<LayerOptions> {
        self.layer(id).map(|l| l.options)
    }

    /// Replace the layer's options. Returns `false` for unknown ids.
    pub fn set_options(&mut self, id: LayerId, options: LayerOptions) -> bool {
        let Some(layer) = self.layer_mut(id) else {
            return false;
        };
        layer.options = options;
        true
    }

    /// The layer that decides what an outside pointer interaction means.
    ///
    /// Scanning from the top, the first layer whose behavior is
    /// [`Behavior::Close`] or [`Behavior::Ignore`]; if there is none, the
    /// bottommost layer. Only layers with a node take part.
    pub fn responsible_layer(&self) -> Option<LayerId> {
        responsible(&self.layers, |o| o.interact_outside)
    }

    /// Same rule as [`LayerRegistry::responsible_layer`], applied to the
    /// Escape behaviors.
    pub fn responsible_escape_layer(&self) -> Option<LayerId> {
        responsible(&self.layers, |o| o.escape_keydown)
    }

    /// Capture-phase pointer-down on the document.
    ///
    /// Marks the gesture as intercepted for every layer and snapshots which
    /// layer is responsible for it.
    pub fn pointer_down_capture(&mut self, event: &PointerEvent<K>, now: Millis) {
        let responsible = self.responsible_layer();
        tracing::trace!(hit = ?event.target, ?responsible, "pointer down (capture)");
        for layer in &mut self.layers {
            layer.intercepted = true;
            layer.responsible = responsible == Some(layer.id);
            layer.reset.schedule(now, RESET_DELAY_MS, ());
        }
    }

    /// Bubble-phase pointer-down on the document.
    ///
    /// Hosts whose inner handlers stop propagation never call this, so the
    /// gesture stays intercepted and no layer dismisses.
    pub fn pointer_down_bubble(&mut self, event: &PointerEvent<K>, now: Millis) {
        for layer in &mut self.layers {
            layer.intercepted = false;
            layer.dispatch.schedule(now, DISPATCH_DELAY_MS, event.clone());
        }
    }

    /// Earliest time [`LayerRegistry::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.layers
            .iter()
            .flat_map(|l| [l.dispatch.due_at(), l.reset.due_at()])
            .flatten()
            .min()
    }

    /// Run every deferred action due at `now`, oldest first.
    pub fn poll(&mut self, now: Millis, tree: &impl NodeTree<K>) -> Vec<DismissEvent<K>> {
        let mut due: SmallVec<[(Millis, Due, usize); 8]> = SmallVec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            if let Some(at) = layer.dispatch.due_at().filter(|at| *at <= now) {
                due.push((at, Due::Dispatch, i));
            }
            if let Some(at) = layer.reset.due_at().filter(|at| *at <= now) {
                due.push((at, Due::Reset, i));
            }
        }
        due.sort_unstable();

        let mut out = Vec::new();
        for (_, kind, i) in due {
            match kind {
                Due::Reset => {
                    let layer = &mut self.layers[i];
                    layer.reset.cancel();
                    layer.intercepted = false;
                    layer.responsible = false;
                }
                Due::Dispatch => {
                    if let Some(event) = self.layers[i].dispatch.cancel() {
                        self.interact_outside(i, event, tree, &mut out);
                    }
                }
            }
        }
        out
    }

    fn interact_outside(
        &mut self,
        i: usize,
        event: PointerEvent<K>,
        tree: &impl NodeTree<K>,
        out: &mut Vec<DismissEvent<K>>,
    ) {
        let valid = self.layers[i]
            .node
            .is_some_and(|node| self.is_outside(i, node, &event, tree));
        let layer = &mut self.layers[i];
        if !layer.responsible || layer.intercepted || !valid {
            tracing::trace!(
                id = ?layer.id,
                responsible = layer.responsible,
                intercepted = layer.intercepted,
                valid,
                "outside interaction skipped"
            );
            layer.awaiting_click = false;
            return;
        }
        if !layer.options.interact_outside.closes() {
            layer.awaiting_click = false;
            return;
        }
        if event.pointer_type == PointerType::Touch {
            // Touch scrolls start with a pointer-down too; wait for the click.
            layer.awaiting_click = true;
            return;
        }
        tracing::debug!(id = ?layer.id, hit = ?event.target, "interact outside");
        out.push(DismissEvent::InteractOutside {
            layer: layer.id,
            event: InteractOutsideEvent::new(event),
        });
    }

    /// Document click. Fires the outside interactions that touch
    /// pointer-downs armed; each arming is used at most once.
    pub fn click(&mut self, event: &PointerEvent<K>) -> Vec<DismissEvent<K>> {
        let mut out = Vec::new();
        for layer in &mut self.layers {
            if core::mem::take(&mut layer.awaiting_click) && layer.node.is_some() {
                tracing::debug!(id = ?layer.id, hit = ?event.target, "interact outside (touch)");
                out.push(DismissEvent::InteractOutside {
                    layer: layer.id,
                    event: InteractOutsideEvent::new(event.clone()),
                });
            }
        }
        out
    }

    /// Focus entered the layer's node (capture phase on the node).
    pub fn focus_capture(&mut self, id: LayerId) -> bool {
        self.set_focus_inside(id, true)
    }

    /// Focus left the layer's node (capture phase on the node).
    pub fn blur_capture(&mut self, id: LayerId) -> bool {
        self.set_focus_inside(id, false)
    }

    fn set_focus_inside(&mut self, id: LayerId, inside: bool) -> bool {
        let Some(layer) = self.layer_mut(id) else {
            return false;
        };
        layer.focus_inside = inside;
        true
    }

    /// Document focus-in on `target`.
    ///
    /// Every layer whose node does not contain the target, and that did not
    /// see focus arrive through its own node, reports focus outside. Layers
    /// stacked above count as inside.
    pub fn focus_in(&self, target: K, tree: &impl NodeTree<K>) -> Vec<DismissEvent<K>> {
        let mut out = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            let Some(node) = layer.node else { continue };
            if layer.focus_inside || self.is_inside_stack(i, node, &target, tree) {
                continue;
            }
            tracing::debug!(id = ?layer.id, focused = ?target, "focus outside");
            out.push(DismissEvent::FocusOutside {
                layer: layer.id,
                target,
            });
        }
        out
    }

    /// The Escape key was pressed.
    pub fn escape_keydown(&self) -> Option<DismissEvent<K>> {
        let id = self.responsible_escape_layer()?;
        let behavior = self.layer(id)?.options.escape_keydown;
        if !behavior.closes() {
            tracing::trace!(?id, ?behavior, "escape claimed without closing");
            return None;
        }
        tracing::debug!(?id, "escape keydown");
        Some(DismissEvent::EscapeKeydown { layer: id })
    }

    fn is_outside(
        &self,
        i: usize,
        node: K,
        event: &PointerEvent<K>,
        tree: &impl NodeTree<K>,
    ) -> bool {
        event.is_primary_or_buttonless()
            && tree.is_connected(&event.target)
            && !self.is_inside_stack(i, node, &event.target, tree)
    }

    /// `target` is inside the node of layer `i` or of any layer above it.
    fn is_inside_stack(&self, i: usize, node: K, target: &K, tree: &impl NodeTree<K>) -> bool {
        tree.contains(&node, target)
            || self.layers[i + 1..]
                .iter()
                .filter_map(|l| l.node)
                .any(|above| tree.contains(&above, target))
    }

    fn index_of(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    fn layer(&self, id: LayerId) -> Option<&Layer<K>> {
        self.layers.iter().find(|l| l.id == id)
    }

    fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer<K>> {
        self.layers.iter_mut().find(|l| l.id == id)
    }
}

fn responsible<K>(layers: &[Layer<K>], behavior: impl Fn(&LayerOptions) -> Behavior) -> Option<LayerId> {
    let live = layers.iter().filter(|l| l.node.is_some());
    let bottom = live.clone().next()?;
    let top = live.rev().find(|l| behavior(&l.options).claims());
    Some(top.unwrap_or(bottom).id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::{Point, Rect};
    use tether_event::SimpleTree;

    const PAGE: u32 = 0;
    const MENU: u32 = 1;
    const MENU_ITEM: u32 = 2;
    const SUBMENU: u32 = 3;
    const SUBMENU_ITEM: u32 = 4;
    const OUTSIDE: u32 = 5;

    fn tree() -> SimpleTree<u32> {
        let mut t = SimpleTree::new();
        t.insert(PAGE, None, Rect::new(0.0, 0.0, 800.0, 600.0));
        t.insert(MENU, Some(PAGE), Rect::new(10.0, 10.0, 110.0, 210.0));
        t.insert(MENU_ITEM, Some(MENU), Rect::new(10.0, 10.0, 110.0, 40.0));
        // Portaled next to the menu, not inside it.
        t.insert(SUBMENU, Some(PAGE), Rect::new(110.0, 10.0, 210.0, 110.0));
        t.insert(SUBMENU_ITEM, Some(SUBMENU), Rect::new(110.0, 10.0, 210.0, 40.0));
        t.insert(OUTSIDE, Some(PAGE), Rect::new(400.0, 400.0, 500.0, 500.0));
        t
    }

    fn down(target: u32) -> PointerEvent<u32> {
        PointerEvent::primary(target, Point::new(1.0, 1.0))
    }

    fn press(reg: &mut LayerRegistry<u32>, event: &PointerEvent<u32>, now: Millis) {
        reg.pointer_down_capture(event, now);
        reg.pointer_down_bubble(event, now);
    }

    fn outside_layers(events: &[DismissEvent<u32>]) -> Vec<LayerId> {
        events
            .iter()
            .filter(|e| matches!(e, DismissEvent::InteractOutside { .. }))
            .map(DismissEvent::layer)
            .collect()
    }

    #[test]
    fn responsibility_is_topmost_claiming_layer() {
        let mut reg = LayerRegistry::new();
        assert_eq!(reg.responsible_layer(), None);
        let a = reg.register(Some(MENU), LayerOptions::uniform(Behavior::Close));
        assert_eq!(reg.responsible_layer(), Some(a));
        let _b = reg.register(Some(SUBMENU), LayerOptions::uniform(Behavior::DeferOtherwiseClose));
        assert_eq!(reg.responsible_layer(), Some(a));
        let c = reg.register(Some(OUTSIDE), LayerOptions::uniform(Behavior::Close));
        assert_eq!(reg.responsible_layer(), Some(c));
        reg.deregister(c);
        reg.set_options(a, LayerOptions::uniform(Behavior::DeferOtherwiseIgnore));
        // No claiming layer left: the bottommost decides.
        assert_eq!(reg.responsible_layer(), Some(a));
    }

    #[test]
    fn inert_layers_are_never_responsible() {
        let mut reg = LayerRegistry::new();
        let a = reg.register(None, LayerOptions::default());
        let b = reg.register(Some(MENU), LayerOptions::uniform(Behavior::DeferOtherwiseClose));
        assert_eq!(reg.responsible_layer(), Some(b));
        reg.set_node(a, Some(SUBMENU));
        assert_eq!(reg.responsible_layer(), Some(a));
    }

    #[test]
    fn outside_click_closes_only_the_responsible_layer() {
        let t = tree();
        let mut reg = LayerRegistry::new();
        let parent = reg.register(Some(MENU), LayerOptions::uniform(Behavior::Close));
        let _child = reg.register(
            Some(SUBMENU),
            LayerOptions::uniform(Behavior::DeferOtherwiseClose),
        );

        press(&mut reg, &down(OUTSIDE), 100);
        assert!(reg.poll(109, &t).is_empty());
        let events = reg.poll(110, &t);
        assert_eq!(outside_layers(&events), vec![parent]);
    }

    #[test]
    fn click_inside_child_layer_never_closes_parent() {
        let t = tree();
        let mut reg = LayerRegistry::new();
        let _parent = reg.register(Some(MENU), LayerOptions::uniform(Behavior::Close));
        let _child = reg.register(
            Some(SUBMENU),
            LayerOptions::uniform(Behavior::DeferOtherwiseClose),
        );

        press(&mut reg, &down(SUBMENU_ITEM), 0);
        assert!(reg.poll(50, &t).is_empty());

        press(&mut reg, &down(MENU_ITEM), 100);
        assert!(reg.poll(150, &t).is_empty());
    }

    #[test]
    fn stopped_propagation_keeps_gesture_intercepted() {
        let t = tree();
        let mut reg = LayerRegistry::new();
        reg.register(Some(MENU), LayerOptions::default());

        let first = down(OUTSIDE);
        press(&mut reg, &first, 0);
        // A second gesture within the window whose bubble phase never arrives.
        reg.pointer_down_capture(&down(OUTSIDE), 5);
        assert!(reg.poll(10, &t).is_empty());
        // The interception mark is cleared again once the reset runs.
        assert_eq!(reg.next_deadline(), Some(25));
        assert!(reg.poll(25, &t).is_empty());
        assert_eq!(reg.next_deadline(), None);
    }

    #[test]
    fn invalid_events_do_not_dismiss() {
        let mut t = tree();
        let mut reg = LayerRegistry::new();
        reg.register(Some(MENU), LayerOptions::default());

        press(&mut reg, &down(OUTSIDE).with_button(Some(2)), 0);
        assert!(reg.poll(10, &t).is_empty());

        press(&mut reg, &down(OUTSIDE).with_button(None), 100);
        assert_eq!(reg.poll(110, &t).len(), 1);

        press(&mut reg, &down(OUTSIDE), 200);
        t.detach(&OUTSIDE);
        assert!(reg.poll(210, &t).is_empty());
    }

    #[test]
    fn ignore_and_defer_ignore_swallow_the_interaction() {
        let t = tree();
        for behavior in [Behavior::Ignore, Behavior::DeferOtherwiseIgnore] {
            let mut reg = LayerRegistry::new();
            reg.register(Some(MENU), LayerOptions::uniform(behavior));
            press(&mut reg, &down(OUTSIDE), 0);
            assert!(reg.poll(10, &t).is_empty());
        }
    }

    #[test]
    fn bursts_dispatch_once_with_the_last_event() {
        let t = tree();
        let mut reg = LayerRegistry::new();
        reg.register(Some(MENU), LayerOptions::default());
        press(&mut reg, &down(PAGE), 0);
        press(&mut reg, &down(OUTSIDE), 4);
        assert!(reg.poll(10, &t).is_empty());
        let events = reg.poll(14, &t);
        assert_eq!(events.len(), 1);
        let DismissEvent::InteractOutside { event, .. } = &events[0] else {
            panic!("expected an outside interaction");
        };
        assert_eq!(*event.target(), OUTSIDE);
    }

    #[test]
    fn prevented_originals_are_wrapped() {
        let t = tree();
        let mut reg = LayerRegistry::new();
        reg.register(Some(MENU), LayerOptions::default());
        let mut e = down(OUTSIDE);
        e.default_prevented = true;
        press(&mut reg, &e, 0);
        let mut events = reg.poll(10, &t);
        let DismissEvent::InteractOutside { event, .. } = &mut events[0] else {
            panic!("expected an outside interaction");
        };
        assert!(event.original_default_prevented());
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn register_then_deregister_restores_the_stack() {
        let t = tree();
        let mut reg = LayerRegistry::new();
        let a = reg.register(Some(MENU), LayerOptions::default());
        let before: Vec<_> = reg.layer_ids().collect();
        let before_responsible = reg.responsible_layer();

        let b = reg.register(Some(SUBMENU), LayerOptions::default());
        press(&mut reg, &down(OUTSIDE), 0);
        assert!(reg.deregister(b));
        assert!(!reg.deregister(b));

        assert_eq!(reg.layer_ids().collect::<Vec<_>>(), before);
        assert_eq!(reg.responsible_layer(), before_responsible);
        // The removed layer left nothing behind; the survivor still decides
        // from its own snapshot, in which it was not responsible.
        assert!(reg.poll(100, &t).is_empty());
        assert!(reg.is_registered(a));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn layer_removed_mid_gesture_does_not_dispatch() {
        let t = tree();
        let mut reg = LayerRegistry::new();
        let a = reg.register(Some(MENU), LayerOptions::default());
        press(&mut reg, &down(OUTSIDE), 0);
        reg.deregister(a);
        assert!(reg.poll(10, &t).is_empty());
        assert_eq!(reg.next_deadline(), None);
    }

    #[test]
    fn node_cleared_mid_gesture_does_not_dispatch() {
        let t = tree();
        let mut reg = LayerRegistry::new();
        let a = reg.register(Some(MENU), LayerOptions::default());
        press(&mut reg, &down(OUTSIDE), 0);
        reg.set_node(a, None);
        assert!(reg.poll(10, &t).is_empty());
    }

    #[test]
    fn touch_waits_for_click() {
        let t = tree();
        let mut reg = LayerRegistry::new();
        let a = reg.register(Some(MENU), LayerOptions::default());
        let touch = down(OUTSIDE).with_pointer_type(PointerType::Touch);
        press(&mut reg, &touch, 0);
        assert!(reg.poll(10, &t).is_empty());

        let events = reg.click(&touch);
        assert_eq!(outside_layers(&events), vec![a]);
        assert!(reg.click(&touch).is_empty());
    }

    #[test]
    fn focus_outside_respects_inner_focus_and_stack() {
        let t = tree();
        let mut reg = LayerRegistry::new();
        let menu = reg.register(Some(MENU), LayerOptions::default());
        let sub = reg.register(Some(SUBMENU), LayerOptions::default());

        assert!(reg.focus_in(MENU_ITEM, &t).iter().all(|e| e.layer() == sub));
        // Focus in the submenu is inside the menu's stack.
        assert!(reg.focus_in(SUBMENU_ITEM, &t).is_empty());

        let events = reg.focus_in(OUTSIDE, &t);
        assert_eq!(events.iter().map(DismissEvent::layer).collect::<Vec<_>>(), vec![menu, sub]);

        reg.focus_capture(menu);
        let events = reg.focus_in(OUTSIDE, &t);
        assert_eq!(events.iter().map(DismissEvent::layer).collect::<Vec<_>>(), vec![sub]);
        reg.blur_capture(menu);
        assert_eq!(reg.focus_in(OUTSIDE, &t).len(), 2);
    }

    #[test]
    fn escape_goes_to_the_responsible_escape_layer() {
        let mut reg = LayerRegistry::<u32>::new();
        assert_eq!(reg.escape_keydown(), None);
        let menu = reg.register(Some(MENU), LayerOptions::default());
        let sub = reg.register(
            Some(SUBMENU),
            LayerOptions {
                interact_outside: Behavior::Close,
                escape_keydown: Behavior::DeferOtherwiseClose,
            },
        );
        assert_eq!(reg.responsible_layer(), Some(sub));
        assert_eq!(reg.escape_keydown(), Some(DismissEvent::EscapeKeydown { layer: menu }));

        reg.set_options(menu, LayerOptions::uniform(Behavior::Ignore));
        assert_eq!(reg.escape_keydown(), None);

        reg.set_options(menu, LayerOptions::uniform(Behavior::DeferOtherwiseIgnore));
        reg.set_options(sub, LayerOptions::uniform(Behavior::DeferOtherwiseIgnore));
        assert_eq!(reg.escape_keydown(), None);
    }

    #[test]
    fn stale_ids_are_no_ops() {
        let mut reg = LayerRegistry::<u32>::new();
        let a = reg.register(None, LayerOptions::default());
        reg.deregister(a);
        assert!(!reg.set_node(a, Some(MENU)));
        assert!(!reg.set_options(a, LayerOptions::default()));
        assert!(!reg.focus_capture(a));
        assert_eq!(reg.options(a), None);
        assert!(reg.is_empty());
        let b = reg.register(None, LayerOptions::default());
        assert_ne!(a, b);
    }
}
