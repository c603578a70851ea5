//! Dimension values - opaque glyph sequences with a trend annotation

use crate::dimension::Dimension;
use crate::trend::Trend;

/// The value of one dimension: a glyph sequence plus an optional trend
///
/// The glyph sequence is an ordered run of symbolic code points that the
/// codec never decomposes; meaning is assigned only by interpreter lookup.
/// Validated by non-emptiness, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DimensionValue {
    glyphs: String,
    trend: Trend,
}

impl DimensionValue {
    /// Create a new dimension value
    ///
    /// # Errors
    /// Returns an error if the glyph sequence is empty; callers that want
    /// the default content should use [`DimensionValue::default_for`].
    pub fn new(glyphs: String, trend: Trend) -> Result<Self, String> {
        if glyphs.is_empty() {
            return Err("Dimension value cannot be empty".to_string());
        }

        Ok(Self { glyphs, trend })
    }

    /// The documented default value for a dimension, with no trend
    pub fn default_for(dimension: Dimension) -> Self {
        Self {
            glyphs: dimension.default_glyphs().to_string(),
            trend: Trend::None,
        }
    }

    /// Build a value from parsed content, substituting the dimension default
    /// when the content is empty
    ///
    /// The trend survives the substitution, so a captured group that is all
    /// trend glyph still records its direction.
    pub fn from_parts(dimension: Dimension, content: &str, trend: Trend) -> Self {
        if content.is_empty() {
            Self {
                glyphs: dimension.default_glyphs().to_string(),
                trend,
            }
        } else {
            Self {
                glyphs: content.to_string(),
                trend,
            }
        }
    }

    /// Get the glyph sequence (trend glyph excluded)
    pub fn glyphs(&self) -> &str {
        &self.glyphs
    }

    /// Get the trend annotation
    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Replace the trend annotation
    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = trend;
        self
    }

    /// Render the value as it appears inside a delimiter group
    pub fn render(&self) -> String {
        match self.trend.glyph() {
            Some(g) => {
                let mut out = self.glyphs.clone();
                out.push(g);
                out
            }
            None => self.glyphs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_glyphs() {
        assert!(DimensionValue::new(String::new(), Trend::None).is_err());
        assert!(DimensionValue::new(String::new(), Trend::Up).is_err());
    }

    #[test]
    fn test_default_for_carries_no_trend() {
        let value = DimensionValue::default_for(Dimension::Topic);
        assert_eq!(value.glyphs(), "💻🌐");
        assert_eq!(value.trend(), Trend::None);
    }

    #[test]
    fn test_from_parts_substitutes_default() {
        let value = DimensionValue::from_parts(Dimension::Style, "", Trend::Up);
        assert_eq!(value.glyphs(), "📊");
        assert_eq!(value.trend(), Trend::Up);
    }

    #[test]
    fn test_render_appends_trend_glyph() {
        let value = DimensionValue::new("💻🌐".to_string(), Trend::Down).unwrap();
        assert_eq!(value.render(), "💻🌐📉");

        let flat = value.with_trend(Trend::None);
        assert_eq!(flat.render(), "💻🌐");
    }
}
