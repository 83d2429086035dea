//! Unterscheidung von Einzel- und Doppelklick auf Zeilen der Layer-Liste.
//!
//! Ein Klick wird zunächst vorgemerkt (`PendingClick`). Kommt innerhalb des
//! Doppelklick-Intervalls ein zweiter Klick auf denselben Knoten, wird der
//! vorgemerkte Einzelklick verworfen und ein Doppelklick gemeldet. Sonst löst
//! `tick` nach Ablauf des Intervalls den Einzelklick auf. Die Uhrzeit wird von
//! außen übergeben, damit der Automat ohne echte Wartezeit testbar bleibt.

use std::time::{Duration, Instant};

use super::state::Modifiers;
use crate::core::NodeId;

/// Kennung eines vorgemerkten Klicks (zum gezielten Abbrechen)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickHandle(u64);

/// Vorgemerkter Einzelklick, der auf einen möglichen zweiten Klick wartet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClick {
    /// Kennung für `cancel`
    pub handle: ClickHandle,
    /// Geklickter Knoten
    pub node: NodeId,
    /// Modifier beim Klick
    pub modifiers: Modifiers,
    /// Knoten war vor dem Klick bereits selektiert
    pub was_selected: bool,
    /// Zeitpunkt, ab dem der Klick als Einzelklick gilt
    pub deadline: Instant,
}

/// Ergebnis der Klick-Auflösung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResolution {
    /// Einzelklick nach Ablauf des Intervalls
    Single {
        /// Geklickter Knoten
        node: NodeId,
        /// Modifier beim Klick
        modifiers: Modifiers,
        /// Knoten war vor dem Klick bereits selektiert
        was_selected: bool,
    },
    /// Zweiter Klick auf denselben Knoten innerhalb des Intervalls
    Double {
        /// Geklickter Knoten
        node: NodeId,
    },
}

/// Zustandsautomat Idle → PendingClick → (aufgelöst) → Idle
#[derive(Debug, Clone)]
pub struct ClickTimer {
    interval: Duration,
    pending: Option<PendingClick>,
    next_handle: u64,
}

impl ClickTimer {
    /// Erstellt einen Automaten mit dem gegebenen Doppelklick-Intervall.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            next_handle: 1,
        }
    }

    /// Doppelklick-Intervall.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Aktuell vorgemerkter Klick.
    pub fn pending(&self) -> Option<&PendingClick> {
        self.pending.as_ref()
    }

    /// Kein Klick vorgemerkt.
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    /// Verarbeitet das Loslassen der Maustaste über einem Knoten.
    ///
    /// Gibt `Some(Double)` zurück, wenn der Klick einen vorgemerkten Klick auf
    /// denselben Knoten innerhalb des Intervalls ergänzt. Andernfalls wird der
    /// Klick vorgemerkt (ein älterer vorgemerkter Klick wird verworfen).
    pub fn mouse_up(
        &mut self,
        node: NodeId,
        modifiers: Modifiers,
        was_selected: bool,
        now: Instant,
    ) -> Option<ClickResolution> {
        if let Some(pending) = self.pending.take() {
            if pending.node == node && now < pending.deadline {
                log::debug!("Doppelklick auf {:?}", node);
                return Some(ClickResolution::Double { node });
            }
        }

        let handle = ClickHandle(self.next_handle);
        self.next_handle += 1;
        self.pending = Some(PendingClick {
            handle,
            node,
            modifiers,
            was_selected,
            deadline: now + self.interval,
        });
        None
    }

    /// Löst einen vorgemerkten Klick auf, sobald sein Intervall abgelaufen ist.
    pub fn tick(&mut self, now: Instant) -> Option<ClickResolution> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        Some(ClickResolution::Single {
            node: pending.node,
            modifiers: pending.modifiers,
            was_selected: pending.was_selected,
        })
    }

    /// Verwirft den vorgemerkten Klick mit dieser Kennung.
    pub fn cancel(&mut self, handle: ClickHandle) -> bool {
        match self.pending {
            Some(pending) if pending.handle == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Verwirft jeden vorgemerkten Klick (z.B. beim Start eines Drags).
    pub fn reset(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LayerTree;

    fn two_nodes() -> (NodeId, NodeId) {
        let mut tree = LayerTree::new("Karte");
        let root = tree.root();
        let a = tree
            .add_child(root, crate::core::TreeNode::new("A", None))
            .expect("Wurzel existiert");
        let b = tree
            .add_child(root, crate::core::TreeNode::new("B", None))
            .expect("Wurzel existiert");
        (a, b)
    }

    const INTERVAL: Duration = Duration::from_millis(500);

    #[test]
    fn single_click_resolves_after_interval() {
        let (a, _) = two_nodes();
        let mut timer = ClickTimer::new(INTERVAL);
        let t0 = Instant::now();

        assert_eq!(timer.mouse_up(a, Modifiers::NONE, true, t0), None);
        assert_eq!(timer.tick(t0 + Duration::from_millis(100)), None);
        assert_eq!(
            timer.tick(t0 + INTERVAL),
            Some(ClickResolution::Single {
                node: a,
                modifiers: Modifiers::NONE,
                was_selected: true,
            })
        );
        assert!(timer.is_idle());
    }

    #[test]
    fn second_click_within_interval_is_double_click() {
        let (a, _) = two_nodes();
        let mut timer = ClickTimer::new(INTERVAL);
        let t0 = Instant::now();

        timer.mouse_up(a, Modifiers::NONE, false, t0);
        let result = timer.mouse_up(a, Modifiers::NONE, true, t0 + Duration::from_millis(200));

        assert_eq!(result, Some(ClickResolution::Double { node: a }));
        assert!(timer.is_idle());
        assert_eq!(timer.tick(t0 + INTERVAL * 2), None);
    }

    #[test]
    fn click_on_other_node_replaces_pending_click() {
        let (a, b) = two_nodes();
        let mut timer = ClickTimer::new(INTERVAL);
        let t0 = Instant::now();

        timer.mouse_up(a, Modifiers::NONE, false, t0);
        assert_eq!(
            timer.mouse_up(b, Modifiers::CTRL, false, t0 + Duration::from_millis(50)),
            None
        );
        assert_eq!(timer.pending().map(|p| p.node), Some(b));
    }

    #[test]
    fn late_second_click_starts_new_pending_click() {
        let (a, _) = two_nodes();
        let mut timer = ClickTimer::new(INTERVAL);
        let t0 = Instant::now();

        timer.mouse_up(a, Modifiers::NONE, false, t0);
        assert_eq!(timer.mouse_up(a, Modifiers::NONE, true, t0 + INTERVAL), None);
        assert!(!timer.is_idle());
    }

    #[test]
    fn cancel_only_matches_current_handle() {
        let (a, b) = two_nodes();
        let mut timer = ClickTimer::new(INTERVAL);
        let t0 = Instant::now();

        timer.mouse_up(a, Modifiers::NONE, false, t0);
        let stale = timer.pending().map(|p| p.handle).expect("vorgemerkt");
        timer.mouse_up(b, Modifiers::NONE, false, t0);
        let current = timer.pending().map(|p| p.handle).expect("vorgemerkt");

        assert!(!timer.cancel(stale));
        assert!(timer.cancel(current));
        assert!(timer.is_idle());
    }
}
