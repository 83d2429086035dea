//! Achsen-alignierte Ausdehnung (Bounding-Box) in Kartenkoordinaten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Rechteckige Ausdehnung in Kartenkoordinaten
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Linke untere Ecke
    pub min: DVec2,
    /// Rechte obere Ecke
    pub max: DVec2,
}

impl Extent {
    /// Erstellt eine Ausdehnung aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Breite der Ausdehnung.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Höhe der Ausdehnung.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Mittelpunkt der Ausdehnung.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Vereinigung zweier Ausdehnungen.
    pub fn union(&self, other: &Extent) -> Extent {
        Extent {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Vereinigt alle übergebenen Ausdehnungen. `None` bei leerer Eingabe.
    pub fn union_all<'a>(extents: impl IntoIterator<Item = &'a Extent>) -> Option<Extent> {
        extents
            .into_iter()
            .fold(None, |acc: Option<Extent>, e| match acc {
                Some(acc) => Some(acc.union(e)),
                None => Some(*e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_corners_normalizes_min_max() {
        let extent = Extent::from_corners(DVec2::new(10.0, -2.0), DVec2::new(-4.0, 8.0));
        assert_eq!(extent.min, DVec2::new(-4.0, -2.0));
        assert_eq!(extent.max, DVec2::new(10.0, 8.0));
        assert_relative_eq!(extent.width(), 14.0);
        assert_relative_eq!(extent.height(), 10.0);
    }

    #[test]
    fn union_all_covers_every_extent() {
        let a = Extent::from_corners(DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0));
        let b = Extent::from_corners(DVec2::new(5.0, -3.0), DVec2::new(6.0, 2.0));
        let union = Extent::union_all([&a, &b]).expect("nicht leer");
        assert_eq!(union.min, DVec2::new(0.0, -3.0));
        assert_eq!(union.max, DVec2::new(6.0, 2.0));
        assert_relative_eq!(union.center().x, 3.0);
    }

    #[test]
    fn union_all_of_nothing_is_none() {
        assert!(Extent::union_all(std::iter::empty()).is_none());
    }
}
