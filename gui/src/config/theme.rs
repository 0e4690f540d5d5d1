// Theme palette and the stylesheet generated from it
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub sidebar: String,
    pub foreground: String,
    pub muted: String,
    pub accent: String,
    pub positive: String,
    pub negative: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#0e1117".to_string(),
            sidebar: "#262730".to_string(),
            foreground: "#fafafa".to_string(),
            muted: "#a3a8b8".to_string(),
            accent: "#ff4b4b".to_string(),
            positive: "#26a69a".to_string(),
            negative: "#ef5350".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            sidebar: "#f0f2f6".to_string(),
            foreground: "#31333f".to_string(),
            muted: "#6b6f7b".to_string(),
            accent: "#ff4b4b".to_string(),
            positive: "#09ab3b".to_string(),
            negative: "#ff2b2b".to_string(),
        }
    }

    /// Unknown names fall back to dark.
    pub fn named(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::default_light(),
            _ => Self::default_dark(),
        }
    }

    pub fn stylesheet(&self) -> String {
        format!(
            r#"
body {{ margin: 0; font-family: sans-serif; background: {bg}; color: {fg}; }}
.layout {{ display: flex; min-height: 100vh; }}
.sidebar {{ width: 300px; padding: 16px; background: {side}; display: flex; flex-direction: column; gap: 8px; }}
.sidebar .info {{ color: {muted}; font-size: 0.9em; }}
.sidebar input, .sidebar select {{ padding: 6px; }}
.sidebar button {{ padding: 8px; background: {accent}; color: #fff; border: none; cursor: pointer; }}
.main {{ flex: 1; padding: 16px 32px; overflow-x: auto; }}
.metric .label {{ color: {muted}; font-size: 0.85em; }}
.metric .value {{ font-size: 1.8em; }}
.metric .delta.up {{ color: {pos}; }}
.metric .delta.down {{ color: {neg}; }}
.metric-row {{ display: flex; gap: 48px; margin: 12px 0; }}
.error {{ color: {neg}; }}
table {{ border-collapse: collapse; font-size: 0.85em; }}
th, td {{ padding: 2px 10px; text-align: right; }}
.table-scroll {{ max-height: 320px; overflow-y: auto; margin-bottom: 24px; }}
"#,
            bg = self.background,
            fg = self.foreground,
            side = self.sidebar,
            muted = self.muted,
            accent = self.accent,
            pos = self.positive,
            neg = self.negative,
        )
    }
}
