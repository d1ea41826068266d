use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// Inline CSS properties written onto the preview image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum StyleProperty {
    #[strum(serialize = "max-height")]
    MaxHeight,
    #[strum(serialize = "border-radius")]
    BorderRadius,
    #[strum(serialize = "margin-top")]
    MarginTop,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        self.into()
    }

    /// Value in CSS pixels, matching the server-rendered current image preview.
    pub fn pixels(self) -> u32 {
        match self {
            StyleProperty::MaxHeight => 200,
            StyleProperty::BorderRadius => 10,
            StyleProperty::MarginTop => 10,
        }
    }

    pub fn value(self) -> String {
        format!("{}px", self.pixels())
    }
}

/// Property/value pairs in the order they are applied.
pub fn declarations() -> impl Iterator<Item = (&'static str, String)> {
    StyleProperty::iter().map(|property| (property.css_name(), property.value()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_match_admin_preview() {
        assert_eq!(
            declarations().collect::<Vec<_>>(),
            vec![
                ("max-height", "200px".to_string()),
                ("border-radius", "10px".to_string()),
                ("margin-top", "10px".to_string()),
            ]
        );
    }

    #[test]
    fn css_names_are_kebab_case() {
        assert_eq!(StyleProperty::MaxHeight.css_name(), "max-height");
        assert_eq!(StyleProperty::BorderRadius.pixels(), 10);
        assert_eq!(StyleProperty::MarginTop.value(), "10px");
    }
}
