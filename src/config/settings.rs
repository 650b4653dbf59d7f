use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::ConfigError;
use crate::color::Rgb;
use crate::data::model::SeriesName;

// ---------------------------------------------------------------------------
// Settings – the typed settings record
// ---------------------------------------------------------------------------

/// Every user-tunable setting, persisted as a flat JSON object whose keys are
/// the PascalCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    /// Largest accepted sample file, in KiB.
    pub max_file_size: u32,
    pub value_visible: bool,
    pub differential_visible: bool,
    pub integrate_visible: bool,
    pub value_marker: bool,
    pub differential_marker: bool,
    pub integrate_marker: bool,
    pub show_grid: bool,
    pub plot_bg_color: Rgb,
    pub plot_curve_color: Rgb,
    /// Marker glyph, e.g. `"o"`.
    pub marker: String,
    pub marker_color: Rgb,
    pub window_width: u32,
    pub window_height: u32,
    pub plot_width: u32,
    pub plot_height: u32,
    pub label_one_font_style: String,
    pub label_two_font_style: String,
    pub label_three_font_style: String,
    pub icon_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_file_size: 50,
            value_visible: true,
            differential_visible: true,
            integrate_visible: true,
            value_marker: true,
            differential_marker: true,
            integrate_marker: true,
            show_grid: true,
            plot_bg_color: Rgb::BLACK,
            plot_curve_color: Rgb::WHITE,
            marker: "o".to_string(),
            marker_color: Rgb::BLUE,
            window_width: 1800,
            window_height: 1400,
            plot_width: 1500,
            plot_height: 400,
            label_one_font_style: "QLabel{color:rgb(0,0,200);font-size:20px;font-weight:normal;font-family:Arial;}".to_string(),
            label_two_font_style: "QLabel{color:rgb(0,0,0);font-size:15px;font-weight:normal;font-family:Arial;}".to_string(),
            label_three_font_style: "QLabel{color:rgb(0,0,0);font-size:18px;font-weight:normal;font-family:Arial;}".to_string(),
            icon_path: "icon.png".to_string(),
        }
    }
}

impl Settings {
    /// Whether the plot for `series` starts out visible.
    pub fn is_visible(&self, series: SeriesName) -> bool {
        match series {
            SeriesName::Value => self.value_visible,
            SeriesName::Differential => self.differential_visible,
            SeriesName::Integrate => self.integrate_visible,
        }
    }

    /// Whether the plot for `series` draws point markers.
    pub fn has_marker(&self, series: SeriesName) -> bool {
        match series {
            SeriesName::Value => self.value_marker,
            SeriesName::Differential => self.differential_marker,
            SeriesName::Integrate => self.integrate_marker,
        }
    }

    /// Generic read access for callers that address settings by name.
    pub fn get(&self, key: SettingKey) -> SettingValue {
        use SettingKey::*;
        use SettingValue::{Bool, Color, Integer, Text};
        match key {
            MaxFileSize => Integer(self.max_file_size),
            ValueVisible => Bool(self.value_visible),
            DifferentialVisible => Bool(self.differential_visible),
            IntegrateVisible => Bool(self.integrate_visible),
            ValueMarker => Bool(self.value_marker),
            DifferentialMarker => Bool(self.differential_marker),
            IntegrateMarker => Bool(self.integrate_marker),
            ShowGrid => Bool(self.show_grid),
            PlotBgColor => Color(self.plot_bg_color),
            PlotCurveColor => Color(self.plot_curve_color),
            Marker => Text(self.marker.clone()),
            MarkerColor => Color(self.marker_color),
            WindowWidth => Integer(self.window_width),
            WindowHeight => Integer(self.window_height),
            PlotWidth => Integer(self.plot_width),
            PlotHeight => Integer(self.plot_height),
            LabelOneFontStyle => Text(self.label_one_font_style.clone()),
            LabelTwoFontStyle => Text(self.label_two_font_style.clone()),
            LabelThreeFontStyle => Text(self.label_three_font_style.clone()),
            IconPath => Text(self.icon_path.clone()),
        }
    }

    /// The record as a JSON object, one entry per [`SettingKey`].
    pub fn to_json_map(&self) -> Map<String, JsonValue> {
        SettingKey::ALL
            .iter()
            .map(|key| (key.as_str().to_string(), self.get(*key).to_json()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// SettingKey – the closed set of setting names
// ---------------------------------------------------------------------------

/// Names of all settings, exactly as they appear in the persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingKey {
    MaxFileSize,
    ValueVisible,
    DifferentialVisible,
    IntegrateVisible,
    ValueMarker,
    DifferentialMarker,
    IntegrateMarker,
    ShowGrid,
    PlotBgColor,
    PlotCurveColor,
    Marker,
    MarkerColor,
    WindowWidth,
    WindowHeight,
    PlotWidth,
    PlotHeight,
    LabelOneFontStyle,
    LabelTwoFontStyle,
    LabelThreeFontStyle,
    IconPath,
}

impl SettingKey {
    pub const ALL: [SettingKey; 20] = [
        SettingKey::MaxFileSize,
        SettingKey::ValueVisible,
        SettingKey::DifferentialVisible,
        SettingKey::IntegrateVisible,
        SettingKey::ValueMarker,
        SettingKey::DifferentialMarker,
        SettingKey::IntegrateMarker,
        SettingKey::ShowGrid,
        SettingKey::PlotBgColor,
        SettingKey::PlotCurveColor,
        SettingKey::Marker,
        SettingKey::MarkerColor,
        SettingKey::WindowWidth,
        SettingKey::WindowHeight,
        SettingKey::PlotWidth,
        SettingKey::PlotHeight,
        SettingKey::LabelOneFontStyle,
        SettingKey::LabelTwoFontStyle,
        SettingKey::LabelThreeFontStyle,
        SettingKey::IconPath,
    ];

    pub fn as_str(&self) -> &'static str {
        use SettingKey::*;
        match self {
            MaxFileSize => "MaxFileSize",
            ValueVisible => "ValueVisible",
            DifferentialVisible => "DifferentialVisible",
            IntegrateVisible => "IntegrateVisible",
            ValueMarker => "ValueMarker",
            DifferentialMarker => "DifferentialMarker",
            IntegrateMarker => "IntegrateMarker",
            ShowGrid => "ShowGrid",
            PlotBgColor => "PlotBgColor",
            PlotCurveColor => "PlotCurveColor",
            Marker => "Marker",
            MarkerColor => "MarkerColor",
            WindowWidth => "WindowWidth",
            WindowHeight => "WindowHeight",
            PlotWidth => "PlotWidth",
            PlotHeight => "PlotHeight",
            LabelOneFontStyle => "LabelOneFontStyle",
            LabelTwoFontStyle => "LabelTwoFontStyle",
            LabelThreeFontStyle => "LabelThreeFontStyle",
            IconPath => "IconPath",
        }
    }

    /// The value kind a persisted entry must have to be accepted.
    pub fn kind(&self) -> SettingKind {
        use SettingKey::*;
        match self {
            MaxFileSize | WindowWidth | WindowHeight | PlotWidth | PlotHeight => {
                SettingKind::Integer
            }
            ValueVisible | DifferentialVisible | IntegrateVisible | ValueMarker
            | DifferentialMarker | IntegrateMarker | ShowGrid => SettingKind::Bool,
            PlotBgColor | PlotCurveColor | MarkerColor => SettingKind::Color,
            Marker | LabelOneFontStyle | LabelTwoFontStyle | LabelThreeFontStyle | IconPath => {
                SettingKind::Text
            }
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SettingKind / SettingValue – generic view of one setting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Non-negative whole number that fits in `u32`.
    Integer,
    Bool,
    /// `[r, g, b]` with 8-bit channels.
    Color,
    Text,
}

impl SettingKind {
    /// Whether a raw JSON value is acceptable for this kind.
    pub fn matches(&self, value: &JsonValue) -> bool {
        match self {
            SettingKind::Integer => value
                .as_u64()
                .is_some_and(|v| u32::try_from(v).is_ok()),
            SettingKind::Bool => value.is_boolean(),
            SettingKind::Color => Rgb::from_json(value).is_some(),
            SettingKind::Text => value.is_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Integer(u32),
    Bool(bool),
    Color(Rgb),
    Text(String),
}

impl SettingValue {
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingValue::Integer(_) => SettingKind::Integer,
            SettingValue::Bool(_) => SettingKind::Bool,
            SettingValue::Color(_) => SettingKind::Color,
            SettingValue::Text(_) => SettingKind::Text,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            SettingValue::Integer(v) => JsonValue::from(*v),
            SettingValue::Bool(b) => JsonValue::Bool(*b),
            SettingValue::Color(c) => JsonValue::from(c.0.to_vec()),
            SettingValue::Text(s) => JsonValue::String(s.clone()),
        }
    }

}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Integer(v) => write!(f, "{v}"),
            SettingValue::Bool(b) => write!(f, "{b}"),
            SettingValue::Color(c) => write!(f, "{c}"),
            SettingValue::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_map_uses_persisted_names() {
        let map = Settings::default().to_json_map();
        assert_eq!(map.len(), SettingKey::ALL.len());
        assert_eq!(map["MaxFileSize"], json!(50));
        assert_eq!(map["PlotCurveColor"], json!([255, 255, 255]));
        assert_eq!(map["Marker"], json!("o"));
    }

    #[test]
    fn serde_and_key_table_agree() {
        let via_serde = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(via_serde, JsonValue::Object(Settings::default().to_json_map()));
    }

    #[test]
    fn every_default_matches_its_declared_kind() {
        let settings = Settings::default();
        for key in SettingKey::ALL {
            let value = settings.get(key);
            assert_eq!(value.kind(), key.kind(), "{key}");
            assert!(key.kind().matches(&value.to_json()), "{key}");
        }
    }

    #[test]
    fn integer_kind_rejects_negative_fractional_and_text() {
        let kind = SettingKind::Integer;
        assert!(kind.matches(&json!(120)));
        assert!(!kind.matches(&json!(-1)));
        assert!(!kind.matches(&json!(1.5)));
        assert!(!kind.matches(&json!("50")));
        assert!(!kind.matches(&json!(u64::from(u32::MAX) + 1)));
    }

    #[test]
    fn visibility_follows_per_series_flags() {
        let settings = Settings {
            differential_visible: false,
            integrate_marker: false,
            ..Settings::default()
        };
        assert!(settings.is_visible(SeriesName::Value));
        assert!(!settings.is_visible(SeriesName::Differential));
        assert!(!settings.has_marker(SeriesName::Integrate));
    }

    #[test]
    fn unknown_key_names_fail_to_parse() {
        assert_eq!("ShowGrid".parse::<SettingKey>().unwrap(), SettingKey::ShowGrid);
        assert!(matches!(
            "Foo".parse::<SettingKey>(),
            Err(ConfigError::UnknownKey(name)) if name == "Foo"
        ));
    }
}
