use std::time::{Duration, Instant};

use map_layer_editor::core::sample::sample_document;
use map_layer_editor::core::tree::ensure_loaded_recursive;
use map_layer_editor::{
    AppController, AppIntent, AppState, ConcreteObject, LayerId, Modifiers, NodeId, OverlayKey,
    StyleId,
};

/// Kleiner deterministischer Zufallsgenerator (xorshift64).
struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.below(items.len())]
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.next() % 100 < percent
    }
}

struct Session {
    controller: AppController,
    state: AppState,
    clock: Instant,
}

impl Session {
    /// Beispielkarte mit vollständig geladenem Baum.
    fn loaded() -> Self {
        let mut state = AppState::with_document(sample_document());
        let root = state.tree.root();
        ensure_loaded_recursive(&mut state.tree, &state.document, root);
        Self {
            controller: AppController::new(),
            state,
            clock: Instant::now(),
        }
    }

    fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    /// Klick mit genügend Abstand, damit kein Doppelklick entsteht.
    fn click(&mut self, node: NodeId, modifiers: Modifiers) {
        self.clock += Duration::from_secs(1);
        let now = self.clock;
        self.send(AppIntent::NodeClicked {
            node,
            modifiers,
            now,
        });
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.state.tree.node_ids().collect()
    }
}

/// Baum und Dokument zeigen dieselben Reihenfolgen.
fn assert_tree_mirrors_document(state: &AppState, step: usize) {
    let tree = &state.tree;
    let doc = &state.document;
    let overlay_nodes = tree.children(tree.root());

    let tree_keys: Vec<OverlayKey> = overlay_nodes
        .iter()
        .filter_map(|id| tree.object(*id).and_then(ConcreteObject::overlay_key).cloned())
        .collect();
    let doc_keys: Vec<OverlayKey> = doc.overlays.keys().cloned().collect();
    assert_eq!(tree_keys, doc_keys, "Schritt {step}: Overlay-Reihenfolge");

    for overlay_node in overlay_nodes {
        let Some(key) = tree.object(*overlay_node).and_then(ConcreteObject::overlay_key) else {
            continue;
        };
        let tree_layers: Vec<LayerId> = tree
            .children(*overlay_node)
            .iter()
            .filter_map(|id| tree.object(*id).and_then(ConcreteObject::layer_id))
            .collect();
        let collection = doc
            .overlay(key)
            .map(|overlay| overlay.layers.snapshot())
            .unwrap_or_default();
        assert_eq!(tree_layers, collection, "Schritt {step}: Layer von {key}");
    }

    for id in tree.node_ids() {
        let Some(ConcreteObject::Style(style_id)) = tree.object(id) else {
            continue;
        };
        let tree_items: Vec<StyleId> = tree
            .children(id)
            .iter()
            .filter_map(|child| tree.object(*child).and_then(ConcreteObject::style_id))
            .collect();
        let composite = doc
            .style(*style_id)
            .map(|style| style.children.clone())
            .unwrap_or_default();
        assert_eq!(tree_items, composite, "Schritt {step}: Composite {style_id}");
    }
}

fn assert_selection_homogeneous(state: &AppState, step: usize) {
    let kinds: Vec<bool> = state
        .selection
        .selected_items
        .iter()
        .map(|id| state.tree.object(*id).is_some_and(ConcreteObject::is_layer))
        .collect();
    assert!(
        kinds.iter().all(|is_layer| *is_layer) || kinds.iter().all(|is_layer| !*is_layer),
        "Schritt {step}: gemischte Selektion {:?}",
        state.selection.selected_items
    );
}

#[test]
fn test_random_drag_gestures_keep_tree_and_collections_in_step() {
    for seed in [7, 1_234, 98_765] {
        let mut rng = XorShift::new(seed);
        let mut s = Session::loaded();
        assert_tree_mirrors_document(&s.state, 0);

        for step in 1..=150 {
            let nodes = s.nodes();
            let dragged = rng.pick(&nodes);
            let target = if rng.chance(10) {
                None
            } else {
                Some(rng.pick(&nodes))
            };
            let pointer_y = rng.below(36) as f32;

            s.click(dragged, Modifiers::NONE);
            s.send(AppIntent::DragStarted { node: dragged });
            s.send(AppIntent::DragOver { target, pointer_y });
            assert_tree_mirrors_document(&s.state, step);

            if rng.chance(85) {
                s.send(AppIntent::DropRequested { target });
            } else {
                s.send(AppIntent::DragCancelled);
            }
            assert!(!s.state.drag.is_active(), "Schritt {step}: Geste beendet");
            assert_tree_mirrors_document(&s.state, step);
        }
    }
}

#[test]
fn test_random_modifier_clicks_keep_selection_homogeneous() {
    let modifiers = [
        Modifiers::NONE,
        Modifiers::SHIFT,
        Modifiers::CTRL,
        Modifiers {
            shift: true,
            ctrl: true,
        },
    ];

    for seed in [3, 4_242, 31_337] {
        let mut rng = XorShift::new(seed);
        let mut s = Session::loaded();
        let nodes = s.nodes();

        for step in 1..=300 {
            let node = rng.pick(&nodes);
            s.click(node, rng.pick(&modifiers));
            assert_selection_homogeneous(&s.state, step);
        }
    }
}
