//! Flip (edge-fold) correction of a plate pair.
use crate::InvalidInput;

/// Reference spacing of the shortened hypotenuse.
///
/// Two rules have been used in the field. They agree for symmetric plates
/// but give offsets of opposite sign when `spacing_a < spacing_b`.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "kebab-case")
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Hash)]
pub enum Baseline {
    /// Use the wider channel, `max(spacing_a, spacing_b)`
    #[default]
    Wider,
    /// Always use the A-side channel
    SideA,
}

impl Baseline {
    /// Reference spacing of the given channels.
    pub fn spacing(&self, spacing_a: f64, spacing_b: f64) -> f64 {
        match self {
            Self::Wider => spacing_a.max(spacing_b),
            Self::SideA => spacing_a,
        }
    }
}

impl std::fmt::Display for Baseline {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Wider => write!(f, "wider channel"),
            Self::SideA => write!(f, "A channel"),
        }
    }
}

/// Measurements of a plate pair, all in millimeters.
///
/// The B plate is fixed, the correction applies to the plate on the wider
/// channel side.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FlipParam {
    /// Channel spacing of the A side (B plate stacked on A)
    pub spacing_a: f64,
    /// Channel spacing of the B side (A plate stacked on B)
    pub spacing_b: f64,
    /// Nominal plate length
    pub length: f64,
    /// Nominal plate width
    pub width: f64,
    /// Plate material thickness
    pub thickness: f64,
    /// Nominal corner fillet radius
    pub fillet_radius: f64,
}

impl FlipParam {
    /// Opposite side of the fold triangle, `2 * thickness`.
    pub fn opposite(&self) -> f64 {
        2. * self.thickness
    }

    /// Hypotenuse of the fold triangle, `spacing_a + spacing_b + 2 * thickness`.
    pub fn hypotenuse(&self) -> f64 {
        self.spacing_a + self.spacing_b + 2. * self.thickness
    }

    /// Compute the correction with the wider channel as baseline.
    pub fn flip(&self) -> Result<Flip, InvalidInput> {
        self.flip_with(Baseline::Wider)
    }

    /// Compute the correction with the given baseline.
    pub fn flip_with(&self, baseline: Baseline) -> Result<Flip, InvalidInput> {
        let Self {
            spacing_a,
            spacing_b,
            length,
            width,
            thickness,
            fillet_radius,
        } = *self;
        [
            ("spacing_a", spacing_a),
            ("spacing_b", spacing_b),
            ("length", length),
            ("width", width),
            ("thickness", thickness),
            ("fillet_radius", fillet_radius),
        ]
        .into_iter()
        .try_for_each(finite)?;
        let opposite = self.opposite();
        let hypotenuse = self.hypotenuse();
        if hypotenuse == 0. {
            return Err(InvalidInput::ZeroHypotenuse);
        }
        let sin = opposite / hypotenuse;
        if !(-1. ..=1.).contains(&sin) {
            return Err(InvalidInput::SineOutOfRange(sin));
        }
        let angle = sin.asin().to_degrees();
        let hypotenuse_min = baseline.spacing(spacing_a, spacing_b) + thickness - hypotenuse / 2.;
        let offset = hypotenuse_min * angle.to_radians().tan();
        let flip = Flip {
            offset,
            angle,
            flip_angle: 90. + angle,
            draft_angle: angle,
            length: length - 2. * offset,
            width: width - 2. * offset,
            fillet_radius: fillet_radius - offset,
        };
        flip.fields().into_iter().try_for_each(finite)?;
        Ok(flip)
    }
}

fn finite((field, v): (&'static str, f64)) -> Result<(), InvalidInput> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(InvalidInput::NonFinite(field))
    }
}

/// Flip correction of a plate pair.
///
/// Lengths are in millimeters, angles are in degrees.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Flip {
    /// Equidistant offset of the plate outline
    pub offset: f64,
    /// Fold angle
    pub angle: f64,
    /// Flip angle, `90 + angle`
    pub flip_angle: f64,
    /// Draft angle, equal to `angle`
    pub draft_angle: f64,
    /// Adjusted plate length, `length - 2 * offset`
    pub length: f64,
    /// Adjusted plate width, `width - 2 * offset`
    pub width: f64,
    /// Adjusted fillet radius, `fillet_radius - offset`
    pub fillet_radius: f64,
}

impl Flip {
    /// Field names and values in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("offset", self.offset),
            ("angle", self.angle),
            ("flip_angle", self.flip_angle),
            ("draft_angle", self.draft_angle),
            ("length", self.length),
            ("width", self.width),
            ("fillet_radius", self.fillet_radius),
        ]
    }
}

/// Compute the flip correction from raw measurements.
///
/// Same as [`FlipParam::flip()`].
pub fn compute(
    spacing_a: f64,
    spacing_b: f64,
    length: f64,
    width: f64,
    thickness: f64,
    fillet_radius: f64,
) -> Result<Flip, InvalidInput> {
    FlipParam {
        spacing_a,
        spacing_b,
        length,
        width,
        thickness,
        fillet_radius,
    }
    .flip()
}
