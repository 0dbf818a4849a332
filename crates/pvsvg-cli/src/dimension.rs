//! Canvas width/height normalization.

use crate::error::RenderError;
use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A width or height as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Absolute size, rendered as `"{n}px"`. Negative counts are rejected.
    Pixels(i64),
    /// Fraction of the container, rendered as `"{ratio * 100}%"`.
    Ratio(f64),
    /// Pre-formatted size; must end in `px` or `%`.
    Text(String),
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Dimension::Pixels(i64::from(value))
    }
}

impl From<i64> for Dimension {
    fn from(value: i64) -> Self {
        Dimension::Pixels(value)
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Ratio(value)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Text(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Dimension::Text(value)
    }
}

impl FromStr for Dimension {
    type Err = Infallible;

    /// Integer-shaped input parses as pixels, any other plain number as a ratio,
    /// everything else is kept as text and validated on normalization.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let digits = input.strip_prefix(['-', '+']).unwrap_or(input);

        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            // Out-of-range integers stay text and fail the suffix check.
            return Ok(match input.parse::<i64>() {
                Ok(pixels) => Dimension::Pixels(pixels),
                Err(_) => Dimension::Text(input.to_string()),
            });
        }
        if let Ok(ratio) = input.parse::<f64>() {
            return Ok(Dimension::Ratio(ratio));
        }
        Ok(Dimension::Text(input.to_string()))
    }
}

/// A validated CSS size: either `<n>px` or `<number>%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDimension(String);

impl NormalizedDimension {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shortest round-trip decimal that always keeps a fractional part (`50.0`,
/// `33.300000000000004`). Exponents carry a sign and at least two digits (`1e+17`,
/// `9.999999999999999e-06`).
fn format_float(value: f64) -> String {
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

pub fn normalize(axis: &'static str, input: &Dimension) -> Result<NormalizedDimension, RenderError> {
    let normalized = match input {
        Dimension::Pixels(pixels) => {
            if *pixels < 0 {
                return Err(RenderError::InvalidDimension {
                    axis,
                    value: pixels.to_string(),
                });
            }
            format!("{pixels}px")
        }
        Dimension::Ratio(ratio) => {
            let percent = ratio * 100.0;
            if !percent.is_finite() {
                return Err(RenderError::InvalidDimension {
                    axis,
                    value: format_float(*ratio),
                });
            }
            format!("{}%", format_float(percent))
        }
        Dimension::Text(text) => {
            if !(text.ends_with("px") || text.ends_with('%')) {
                return Err(RenderError::InvalidDimension {
                    axis,
                    value: text.clone(),
                });
            }
            text.clone()
        }
    };

    Ok(NormalizedDimension(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: impl Into<Dimension>) -> Result<String, RenderError> {
        normalize("width", &input.into()).map(|d| d.to_string())
    }

    #[test]
    fn test_pixels() {
        assert_eq!(norm(800u32).unwrap(), "800px");
        assert_eq!(norm(0u32).unwrap(), "0px");
        assert_eq!(norm(5_000_000_000i64).unwrap(), "5000000000px");
    }

    #[test]
    fn test_negative_pixels_are_rejected() {
        match norm(-5i64) {
            Err(RenderError::InvalidDimension { axis, value }) => {
                assert_eq!(axis, "width");
                assert_eq!(value, "-5");
            }
            other => panic!("expected InvalidDimension, got {other:?}"),
        }
    }

    #[test]
    fn test_ratio() {
        assert_eq!(norm(0.5).unwrap(), "50.0%");
        assert_eq!(norm(1.0).unwrap(), "100.0%");
        assert_eq!(norm(0.333).unwrap(), "33.300000000000004%");
    }

    #[test]
    fn test_ratio_exponent_formatting() {
        assert_eq!(norm(1e-7).unwrap(), "9.999999999999999e-06%");
        assert_eq!(norm(1e15).unwrap(), "1e+17%");
    }

    #[test]
    fn test_non_finite_ratio_is_rejected() {
        assert!(matches!(
            norm(f64::NAN),
            Err(RenderError::InvalidDimension { axis: "width", .. })
        ));
        assert!(norm(f64::INFINITY).is_err());
    }

    #[test]
    fn test_suffixed_strings_pass_through() {
        assert_eq!(norm("100%").unwrap(), "100%");
        assert_eq!(norm("750px").unwrap(), "750px");
        assert_eq!(norm("12.5%").unwrap(), "12.5%");
        assert_eq!(norm("calc(100%)%").unwrap(), "calc(100%)%");
    }

    #[test]
    fn test_unsuffixed_strings_are_rejected() {
        for bad in ["100", "100em", "", "px100", "50 %x", "calc(100% - 10px)"] {
            match norm(bad) {
                Err(RenderError::InvalidDimension { axis, value }) => {
                    assert_eq!(axis, "width");
                    assert_eq!(value, bad);
                }
                other => panic!("expected InvalidDimension for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("640".parse::<Dimension>().unwrap(), Dimension::Pixels(640));
        assert_eq!("0.75".parse::<Dimension>().unwrap(), Dimension::Ratio(0.75));
        assert_eq!(
            "90%".parse::<Dimension>().unwrap(),
            Dimension::Text("90%".to_string())
        );
    }

    #[test]
    fn test_from_str_integers_never_become_ratios() {
        assert_eq!("-5".parse::<Dimension>().unwrap(), Dimension::Pixels(-5));
        assert_eq!("+5".parse::<Dimension>().unwrap(), Dimension::Pixels(5));
        assert_eq!(
            "5000000000".parse::<Dimension>().unwrap(),
            Dimension::Pixels(5_000_000_000)
        );
        assert!(norm("-5".parse::<Dimension>().unwrap()).is_err());

        let huge = "99999999999999999999".parse::<Dimension>().unwrap();
        assert_eq!(huge, Dimension::Text("99999999999999999999".to_string()));
        assert!(matches!(
            norm(huge),
            Err(RenderError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Sizes {
            width: Dimension,
            height: Dimension,
            other: Dimension,
        }

        let sizes: Sizes = toml::from_str("width = 640\nheight = 0.5\nother = \"10px\"").unwrap();
        assert_eq!(sizes.width, Dimension::Pixels(640));
        assert_eq!(sizes.height, Dimension::Ratio(0.5));
        assert_eq!(sizes.other, Dimension::Text("10px".to_string()));
    }

    #[test]
    fn test_deserialize_integers_from_toml() {
        #[derive(Deserialize)]
        struct Width {
            width: Dimension,
        }

        let large: Width = toml::from_str("width = 5000000000").unwrap();
        assert_eq!(large.width, Dimension::Pixels(5_000_000_000));
        assert_eq!(norm(large.width).unwrap(), "5000000000px");

        let negative: Width = toml::from_str("width = -5").unwrap();
        assert_eq!(negative.width, Dimension::Pixels(-5));
        assert!(matches!(
            norm(negative.width),
            Err(RenderError::InvalidDimension { .. })
        ));
    }
}
