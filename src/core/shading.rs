use kurbo::{Affine, Point};

use crate::core::function::StitchingFunction;
use crate::core::writer::PdfObject;

/// Everything an axial (ShadingType 2) shading needs.
#[derive(Debug, Clone, PartialEq)]
pub struct AxialShading {
    /// Always `DeviceRGB`; stop colors are not converted.
    pub color_space: &'static str,
    pub coords: [Point; 2],
    pub domain: [f64; 2],
    pub function: StitchingFunction,
    /// Pattern space to current space (context transform, then the
    /// gradient's own transform).
    pub matrix: Affine,
}

impl AxialShading {
    /// Color at gradient parameter `t`, clamped to the shading domain.
    pub fn color_at(&self, t: f64) -> [f64; 3] {
        self.function.evaluate(t.clamp(self.domain[0], self.domain[1]))
    }

    /// The shading dictionary, with its function inlined.
    pub fn to_pdf_object(&self) -> PdfObject {
        let [start, end] = self.coords;
        PdfObject::dict(vec![
            ("ShadingType", PdfObject::Integer(2)),
            ("ColorSpace", PdfObject::name(self.color_space)),
            ("Coords", PdfObject::reals(&[start.x, start.y, end.x, end.y])),
            ("Domain", PdfObject::reals(&self.domain)),
            ("Function", self.function.to_pdf_object()),
            ("Extend", PdfObject::Array(vec![PdfObject::Boolean(false), PdfObject::Boolean(false)])),
        ])
    }
}

/// Pattern dictionary wrapping a shading object; identity matrices are left out.
pub fn shading_pattern_object(shading: PdfObject, matrix: Option<Affine>) -> PdfObject {
    let mut entries = vec![
        ("Type", PdfObject::name("Pattern")),
        ("PatternType", PdfObject::Integer(2)),
        ("Shading", shading),
    ];
    if let Some(matrix) = matrix.filter(|m| *m != Affine::IDENTITY) {
        entries.push(("Matrix", PdfObject::reals(&matrix.as_coeffs())));
    }
    PdfObject::dict(entries)
}

/// Receives finished shadings and turns them into pattern colors, e.g. a
/// document registering PDF objects.
pub trait ShadingSink {
    type Shading;
    type Pattern;

    fn axial_shading(&mut self, shading: &AxialShading) -> Self::Shading;

    /// `matrix` is `None` when the pattern space is the current space.
    fn shading_pattern(&mut self, shading: Self::Shading, matrix: Option<Affine>) -> Self::Pattern;
}
