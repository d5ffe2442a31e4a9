//! Scene configuration
//!
//! A `Configuration` is an immutable snapshot of every user-tunable
//! parameter. The host hands over a fresh one on every input change; it
//! replaces the previous snapshot wholesale.

use serde::Deserialize;

use crate::core::Vec2;

use super::color::Color;
use super::error::ConfigError;
use super::kinds::ShapeKind;

pub const DEFAULT_SHAPE_COUNT: u32 = 10;
pub const DEFAULT_SIZE: f32 = 10.0;
pub const DEFAULT_FILL: Color = Color::rgb(255, 0, 0);
pub const DEFAULT_STROKE_WEIGHT: f32 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    pub shape_count: u32,
    pub size: f32,
    pub fill_color: Color,
    pub stroke_weight: f32,
    /// `None` spawns shapes at the canvas center
    pub origin: Option<Vec2>,
    pub shape_kind: ShapeKind,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            shape_count: DEFAULT_SHAPE_COUNT,
            size: DEFAULT_SIZE,
            fill_color: DEFAULT_FILL,
            stroke_weight: DEFAULT_STROKE_WEIGHT,
            origin: None,
            shape_kind: ShapeKind::Bubble,
        }
    }
}

impl Configuration {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfiguration = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Build from the individual control values the host reads off its form.
    pub fn from_controls(
        shape_count: i64,
        size: f32,
        fill_color: &str,
        stroke_weight: f32,
        shape_kind: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            shape_count: clamp_count(shape_count),
            size,
            fill_color: Color::parse(fill_color)?,
            stroke_weight,
            origin: None,
            shape_kind: ShapeKind::from_name(shape_kind)?,
        })
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Some(Vec2::new(x, y));
        self
    }
}

/// Wire form of a configuration, as posted by the host page.
///
/// Missing fields fall back to the defaults of the initial scene.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawConfiguration {
    pub shape_count: Option<i64>,
    pub size: Option<f32>,
    pub fill_color: Option<String>,
    pub stroke_weight: Option<f32>,
    pub origin_x: Option<f32>,
    pub origin_y: Option<f32>,
    #[serde(alias = "type")]
    pub shape_kind: Option<String>,
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = ConfigError;

    fn try_from(raw: RawConfiguration) -> Result<Self, Self::Error> {
        let defaults = Configuration::default();

        let shape_kind = match raw.shape_kind.as_deref() {
            Some(name) => ShapeKind::from_name(name)?,
            None => defaults.shape_kind,
        };
        let fill_color = match raw.fill_color.as_deref() {
            Some(color) => Color::parse(color)?,
            None => defaults.fill_color,
        };
        let origin = match (raw.origin_x, raw.origin_y) {
            (Some(x), Some(y)) => Some(Vec2::new(x, y)),
            _ => None,
        };

        Ok(Self {
            shape_count: raw.shape_count.map(clamp_count).unwrap_or(defaults.shape_count),
            size: raw.size.unwrap_or(defaults.size),
            fill_color,
            stroke_weight: raw.stroke_weight.unwrap_or(defaults.stroke_weight),
            origin,
            shape_kind,
        })
    }
}

fn clamp_count(count: i64) -> u32 {
    if count < 0 {
        console_warn!("shape count {} clamped to 0", count);
    }
    count.clamp(0, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let json = r##"{
            "shapeCount": 3,
            "size": 10,
            "fillColor": "#00ff00",
            "strokeWeight": 2,
            "originX": 400,
            "originY": 300,
            "shapeKind": "Square"
        }"##;
        let config = Configuration::from_json(json).unwrap();
        assert_eq!(config.shape_count, 3);
        assert_eq!(config.size, 10.0);
        assert_eq!(config.fill_color, Color::rgb(0, 255, 0));
        assert_eq!(config.stroke_weight, 2.0);
        assert_eq!(config.origin, Some(Vec2::new(400.0, 300.0)));
        assert_eq!(config.shape_kind, ShapeKind::Square);
    }

    #[test]
    fn type_alias_matches_form_field() {
        let config = Configuration::from_json(r#"{"type": "Square"}"#).unwrap();
        assert_eq!(config.shape_kind, ShapeKind::Square);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = Configuration::from_json("{}").unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn half_an_origin_means_center() {
        let config = Configuration::from_json(r#"{"originX": 5}"#).unwrap();
        assert_eq!(config.origin, None);
    }

    #[test]
    fn negative_count_is_clamped() {
        let config = Configuration::from_json(r#"{"shapeCount": -4}"#).unwrap();
        assert_eq!(config.shape_count, 0);
    }

    #[test]
    fn negative_size_passes_through() {
        let config = Configuration::from_json(r#"{"size": -3.5}"#).unwrap();
        assert_eq!(config.size, -3.5);
    }

    #[test]
    fn unknown_kind_is_a_typed_error() {
        let err = Configuration::from_json(r#"{"shapeKind": "Triangle"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedShapeKind(_)));
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = Configuration::from_json(r#"{"fillColor": "nope"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = Configuration::from_json(r#"{"shapeCount": "#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn from_controls_validates_kind() {
        assert!(Configuration::from_controls(3, 10.0, "#ffffff", 1.0, "Bubble").is_ok());
        assert!(matches!(
            Configuration::from_controls(3, 10.0, "#ffffff", 1.0, "Hexagon"),
            Err(ConfigError::UnsupportedShapeKind(_))
        ));
    }
}
