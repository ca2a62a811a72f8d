use crate::Rgb;

/// The shape of a gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

/// A two-color gradient.
///
/// Linear and conic gradients have an angle in degrees, which wraps around at
/// 360. Radial gradients are circles and ignore the angle. Displaying a
/// gradient produces its CSS image value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gradient {
    kind: GradientKind,
    start: Rgb,
    end: Rgb,
    angle: u16,
}

impl Gradient {
    /// Create a new gradient.
    pub const fn new(kind: GradientKind, start: Rgb, end: Rgb, angle: u16) -> Self {
        Self {
            kind,
            start,
            end,
            angle: angle % 360,
        }
    }

    /// Create a new linear gradient.
    pub const fn linear(start: Rgb, end: Rgb, angle: u16) -> Self {
        Self::new(GradientKind::Linear, start, end, angle)
    }

    /// Create a new radial gradient.
    pub const fn radial(start: Rgb, end: Rgb) -> Self {
        Self::new(GradientKind::Radial, start, end, 0)
    }

    /// Create a new conic gradient.
    pub const fn conic(start: Rgb, end: Rgb, angle: u16) -> Self {
        Self::new(GradientKind::Conic, start, end, angle)
    }

    /// Get the shape.
    pub const fn kind(&self) -> GradientKind {
        self.kind
    }

    /// Get the start and end colors.
    pub const fn colors(&self) -> (Rgb, Rgb) {
        (self.start, self.end)
    }

    /// Get the angle in degrees.
    pub const fn angle(&self) -> u16 {
        self.angle
    }

    /// Render the `background` declaration using this gradient.
    pub fn to_declaration(&self) -> String {
        format!("background: {};", self)
    }
}

impl std::fmt::Display for Gradient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            GradientKind::Linear => write!(
                f,
                "linear-gradient({}deg, {}, {})",
                self.angle, self.start, self.end
            ),
            GradientKind::Radial => {
                write!(f, "radial-gradient(circle, {}, {})", self.start, self.end)
            }
            GradientKind::Conic => write!(
                f,
                "conic-gradient(from {}deg, {}, {})",
                self.angle, self.start, self.end
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Gradient;
    use crate::Rgb;

    #[test]
    fn test_gradient() {
        let start = Rgb::new(30, 136, 229);
        let end = Rgb::new(255, 255, 255);

        assert_eq!(
            Gradient::linear(start, end, 90).to_declaration(),
            "background: linear-gradient(90deg, #1e88e5, #ffffff);"
        );
        assert_eq!(
            Gradient::radial(start, end).to_string(),
            "radial-gradient(circle, #1e88e5, #ffffff)"
        );
        assert_eq!(
            Gradient::conic(start, end, 450).to_string(),
            "conic-gradient(from 90deg, #1e88e5, #ffffff)"
        );
    }
}
