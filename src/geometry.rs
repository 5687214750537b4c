//! Element layout along the boom.
//!
//! The reflector sits at the boom origin and the beam points along +x. Elements lie in the
//! horizontal plane along the y axis, centred on the boom.

use std::fmt;

use crate::design::AntennaDesign;
use crate::math::{Scalar, R3};

/// Role of an element in the array.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Rear parasitic element.
    Reflector,
    /// Fed element.
    Driven,
    /// Forward parasitic element; index 0 is nearest the driven element.
    Director(usize),
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reflector => f.write_str("Reflector"),
            Self::Driven => f.write_str("Driven"),
            Self::Director(i) => write!(f, "Director {}", i + 1),
        }
    }
}

/// One element placed on the boom.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Role in the array.
    pub kind: ElementKind,
    /// Distance from the reflector along the boom (m).
    pub position_m: Scalar,
    /// Tip-to-tip length (m).
    pub length_m: Scalar,
}

impl Element {
    /// Element centre on the boom.
    #[must_use]
    pub fn center(&self) -> R3 {
        R3::new(self.position_m, 0.0, 0.0)
    }

    /// Tip coordinates `(−y, +y)`.
    #[must_use]
    pub fn endpoints(&self) -> (R3, R3) {
        let half = R3::new(0.0, self.length_m / 2.0, 0.0);
        let c = self.center();
        (c - half, c + half)
    }
}

/// Lays out every element of `design`, reflector first.
#[must_use]
pub fn layout(design: &AntennaDesign) -> Vec<Element> {
    let driven_at = design.reflector_spacing_m;
    let mut elements = Vec::with_capacity(design.element_count());
    elements.push(Element {
        kind: ElementKind::Reflector,
        position_m: 0.0,
        length_m: design.reflector_length_m,
    });
    elements.push(Element {
        kind: ElementKind::Driven,
        position_m: driven_at,
        length_m: design.driven_length_m,
    });
    elements.extend(
        design
            .director_lengths_m
            .iter()
            .zip(&design.director_spacings_m)
            .enumerate()
            .map(|(i, (&length_m, &offset))| Element {
                kind: ElementKind::Director(i),
                position_m: driven_at + offset,
                length_m,
            }),
    );
    elements
}

/// Gaps between neighbouring elements in boom order.
#[must_use]
pub fn element_gaps(elements: &[Element]) -> Vec<Scalar> {
    elements
        .windows(2)
        .map(|pair| pair[1].position_m - pair[0].position_m)
        .collect()
}
