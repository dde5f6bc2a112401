use std::fmt;

// Common aspect ratios as (decimal ratio, display tag), landscape first,
// then portrait. Order matters: ties resolve to the earlier entry.
const COMMON_RATIOS: &[(f64, &str)] = &[
    (1.0, "1:1"),
    (1.25, "5:4"),
    (1.33, "4:3"),
    (1.5, "3:2"),
    (1.6, "16:10"),
    (1.78, "16:9"),
    (2.0, "2:1"),
    (2.35, "21:9"),
    (2.4, "12:5"),
    (3.0, "3:1"),
    (0.75, "3:4"),
    (0.67, "2:3"),
    (0.625, "5:8"),
    (0.56, "9:16"),
    (0.5, "1:2"),
    (0.42, "5:12"),
    (0.33, "1:3"),
];

// Minimum column width of the "WxH" part, so tags line up in the dropdown.
const DIMENSIONS_COLUMN: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Square,
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Square => "Square",
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn orientation(&self) -> Orientation {
        if self.width == self.height {
            Orientation::Square
        } else if self.width < self.height {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// Nearest entry of the common-ratio table by absolute difference.
    /// Always produces a tag; uncommon ratios map to the closest match.
    pub fn aspect_tag(&self) -> &'static str {
        let actual = self.width as f64 / self.height as f64;

        let mut closest = COMMON_RATIOS[0];
        let mut min_diff = (actual - closest.0).abs();
        for &candidate in COMMON_RATIOS {
            let diff = (actual - candidate.0).abs();
            if diff < min_diff {
                min_diff = diff;
                closest = candidate;
            }
        }

        closest.1
    }

    /// Display label, e.g. `"1920x1080    (16:9 Landscape)"`.
    pub fn label(&self) -> String {
        format!(
            "{:<width$}({} {})",
            format!("{}x{}", self.width, self.height),
            self.aspect_tag(),
            self.orientation().as_str(),
            width = DIMENSIONS_COLUMN,
        )
    }

    /// Recovers the pair from a label, padded or not. Accepts anything whose
    /// first whitespace-separated token is `"WxH"`, so a bare `"1920x1080"`
    /// parses too.
    pub fn parse(label: &str) -> Option<Self> {
        let token = label.split_whitespace().next()?;
        let (width, height) = token.split_once('x')?;
        Some(Self::new(width.parse().ok()?, height.parse().ok()?))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
