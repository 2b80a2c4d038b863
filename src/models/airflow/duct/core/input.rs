use thiserror::Error;
use uom::si::{
    f64::{Length, VolumeRate},
    length::inch,
    volume_rate::cubic_foot_per_minute,
};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

use super::{DuctGeometry, DuctShape};

/// A validated duct calculation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuctInput {
    /// Duct cross-section.
    pub geometry: DuctGeometry,

    /// Volumetric flow rate through the duct.
    pub flow_rate: Constrained<VolumeRate, StrictlyPositive>,
}

/// Unparsed text fields as entered in a duct sizing form.
///
/// The flow rate is in cubic feet per minute and every dimension is in
/// inches. Only the dimension fields belonging to [`shape`](Self::shape) are
/// read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDuctInput<'a> {
    /// Selected duct shape.
    pub shape: DuctShape,

    /// Flow rate, cfm.
    pub flow_rate: &'a str,

    /// Round duct diameter, in.
    pub diameter: &'a str,

    /// Rectangular duct width, in.
    pub width: &'a str,

    /// Rectangular duct height, in.
    pub height: &'a str,
}

/// Errors that can occur while parsing a [`RawDuctInput`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A field holds text that isn't a number.
    #[error("{field} is not a number: {text:?}")]
    NotANumber {
        /// Name of the field.
        field: &'static str,

        /// Trimmed field text.
        text: String,
    },

    /// A field holds a number that violates its constraint.
    #[error("invalid {field}")]
    Constraint {
        /// Name of the field.
        field: &'static str,

        /// Constraint that was violated.
        #[source]
        source: ConstraintError,
    },
}

impl DuctInput {
    /// Constructs a validated input.
    ///
    /// # Errors
    ///
    /// Returns an error if the flow rate is not strictly positive and finite.
    pub fn new(geometry: DuctGeometry, flow_rate: VolumeRate) -> Result<Self, ConstraintError> {
        let flow_rate = StrictlyPositive::new(flow_rate)?;
        if !flow_rate.as_ref().is_finite() {
            return Err(ConstraintError::NotFinite);
        }
        Ok(Self {
            geometry,
            flow_rate,
        })
    }

    /// Parses form text into a validated input.
    ///
    /// Returns `Ok(None)` while any field the selected shape needs is blank,
    /// which callers should treat as "no input yet" rather than a failure.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if a required field is not a number or
    /// violates its constraint.
    ///
    /// # Example
    ///
    /// ```
    /// use ductulator_models::models::airflow::duct::{DuctInput, DuctShape, RawDuctInput};
    ///
    /// let mut raw = RawDuctInput {
    ///     shape: DuctShape::Rectangular,
    ///     flow_rate: "500",
    ///     diameter: "",
    ///     width: "12",
    ///     height: "",
    /// };
    /// assert_eq!(DuctInput::parse(&raw), Ok(None));
    ///
    /// raw.height = "8";
    /// assert!(DuctInput::parse(&raw).unwrap().is_some());
    /// ```
    pub fn parse(raw: &RawDuctInput<'_>) -> Result<Option<Self>, InputError> {
        let Some(flow_rate) = parse_field("flow rate", raw.flow_rate)? else {
            return Ok(None);
        };

        let geometry = match raw.shape {
            DuctShape::Round => {
                let Some(diameter) = parse_field("diameter", raw.diameter)? else {
                    return Ok(None);
                };
                DuctGeometry::round(Length::new::<inch>(diameter))
                    .map_err(|source| InputError::Constraint {
                        field: "diameter",
                        source,
                    })?
            }
            DuctShape::Rectangular => {
                let (Some(width), Some(height)) = (
                    parse_field("width", raw.width)?,
                    parse_field("height", raw.height)?,
                ) else {
                    return Ok(None);
                };
                DuctGeometry::rectangular(Length::new::<inch>(width), Length::new::<inch>(height))
                    .map_err(|source| InputError::Constraint {
                        field: "width or height",
                        source,
                    })?
            }
        };

        let input = Self::new(geometry, VolumeRate::new::<cubic_foot_per_minute>(flow_rate))
            .map_err(|source| InputError::Constraint {
                field: "flow rate",
                source,
            })?;

        Ok(Some(input))
    }
}

/// Parses a single numeric field, mapping blank text to `None`.
fn parse_field(field: &'static str, text: &str) -> Result<Option<f64>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<f64>()
        .map(Some)
        .map_err(|_| InputError::NotANumber {
            field,
            text: text.to_owned(),
        })
}
