//! Index-Arithmetik für das Wiedereinfügen eines verschobenen Eintrags.
//!
//! Alle Indizes beziehen sich auf die Liste nach dem Herauslösen des
//! gezogenen Eintrags. Derselbe Rechenweg gilt für Baum-Kinder und für die
//! gespiegelte Sammlung, damit beide Reihenfolgen identisch bleiben.

/// Zielindex beim Verschieben innerhalb derselben Liste.
///
/// `lower` = Einfügemarke an der Unterkante des Ziels (danach einfügen).
pub fn reinsert_index(source: usize, target: usize, lower: bool) -> usize {
    if target > source {
        if lower {
            target
        } else {
            target.saturating_sub(1)
        }
    } else if lower {
        target + 1
    } else {
        target
    }
}

/// Zielindex beim Einfügen in eine andere Liste (neben dem Ziel).
pub fn insert_index(target: usize, lower: bool) -> usize {
    if lower {
        target + 1
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(items: &[char], source: usize, target: usize, lower: bool) -> Vec<char> {
        let mut items = items.to_vec();
        let moved = items.remove(source);
        items.insert(reinsert_index(source, target, lower), moved);
        items
    }

    #[test]
    fn moving_up_lands_on_requested_side() {
        let items = ['A', 'B', 'C'];
        assert_eq!(apply(&items, 2, 0, false), vec!['C', 'A', 'B']);
        assert_eq!(apply(&items, 2, 0, true), vec!['A', 'C', 'B']);
    }

    #[test]
    fn moving_down_lands_on_requested_side() {
        let items = ['A', 'B', 'C'];
        assert_eq!(apply(&items, 0, 2, true), vec!['B', 'C', 'A']);
        assert_eq!(apply(&items, 0, 2, false), vec!['B', 'A', 'C']);
    }

    #[test]
    fn neighbour_drops_without_drift() {
        let items = ['A', 'B', 'C'];
        assert_eq!(apply(&items, 0, 1, false), vec!['A', 'B', 'C']);
        assert_eq!(apply(&items, 1, 0, true), vec!['A', 'B', 'C']);
        assert_eq!(apply(&items, 0, 1, true), vec!['B', 'A', 'C']);
    }

    #[test]
    fn insert_index_follows_indicator() {
        assert_eq!(insert_index(0, false), 0);
        assert_eq!(insert_index(0, true), 1);
    }
}
