use crate::error::TenantError;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Colour token stored the way CSS consumes it inside `rgb(var(--x))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

impl FromStr for RgbColor {
    type Err = TenantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TenantError::InvalidColor(s.to_string());

        if let Some(hex) = s.trim().strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(RgbColor(channel(0)?, channel(2)?, channel(4)?));
        }

        let channels = s
            .split(',')
            .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match channels.as_slice() {
            [r, g, b] => Ok(RgbColor(*r, *g, *b)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for RgbColor {
    type Error = TenantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customization {
    pub primary: RgbColor,
    pub secondary: RgbColor,
    pub tertiary: RgbColor,
    pub neutral: RgbColor,
    pub wash: RgbColor,
    pub line: RgbColor,
    pub positive: RgbColor,
    pub negative: RgbColor,
    pub brand_primary: RgbColor,
    pub brand_secondary: RgbColor,
    pub font: Option<String>,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            primary: RgbColor(23, 23, 23),
            secondary: RgbColor(64, 64, 64),
            tertiary: RgbColor(115, 115, 115),
            neutral: RgbColor(255, 255, 255),
            wash: RgbColor(250, 250, 250),
            line: RgbColor(229, 229, 229),
            positive: RgbColor(97, 209, 97),
            negative: RgbColor(226, 54, 54),
            brand_primary: RgbColor(23, 23, 23),
            brand_secondary: RgbColor(255, 255, 255),
            font: None,
        }
    }
}

impl Customization {
    fn colors(&self) -> [(&'static str, RgbColor); 10] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("tertiary", self.tertiary),
            ("neutral", self.neutral),
            ("wash", self.wash),
            ("line", self.line),
            ("positive", self.positive),
            ("negative", self.negative),
            ("brand-primary", self.brand_primary),
            ("brand-secondary", self.brand_secondary),
        ]
    }
}

/// Partial colour overrides layered onto a tenant's customization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizationOverride {
    pub primary: Option<RgbColor>,
    pub secondary: Option<RgbColor>,
    pub tertiary: Option<RgbColor>,
    pub neutral: Option<RgbColor>,
    pub wash: Option<RgbColor>,
    pub line: Option<RgbColor>,
    pub positive: Option<RgbColor>,
    pub negative: Option<RgbColor>,
    pub brand_primary: Option<RgbColor>,
    pub brand_secondary: Option<RgbColor>,
    pub font: Option<String>,
}

impl CustomizationOverride {
    pub fn is_empty(&self) -> bool {
        self == &CustomizationOverride::default()
    }

    pub fn apply_to(&self, target: &mut Customization) {
        let slots = [
            (&mut target.primary, self.primary),
            (&mut target.secondary, self.secondary),
            (&mut target.tertiary, self.tertiary),
            (&mut target.neutral, self.neutral),
            (&mut target.wash, self.wash),
            (&mut target.line, self.line),
            (&mut target.positive, self.positive),
            (&mut target.negative, self.negative),
            (&mut target.brand_primary, self.brand_primary),
            (&mut target.brand_secondary, self.brand_secondary),
        ];
        for (slot, value) in slots {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(font) = &self.font {
            target.font = Some(font.clone());
        }
    }
}

/// CSS custom properties derived from a customization, keyed by property
/// name (`--primary`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeVariables(BTreeMap<String, String>);

impl ThemeVariables {
    pub fn from_customization(customization: &Customization) -> Self {
        let mut vars: BTreeMap<String, String> = customization
            .colors()
            .into_iter()
            .map(|(name, color)| (format!("--{name}"), color.to_string()))
            .collect();
        if let Some(font) = &customization.font {
            vars.insert("--font".to_string(), font.clone());
        }
        Self(vars)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Properties set here but absent from `next`.
    pub fn stale_in<'a>(&'a self, next: &'a ThemeVariables) -> impl Iterator<Item = &'a str> {
        self.0
            .keys()
            .filter(move |name| !next.0.contains_key(*name))
            .map(String::as_str)
    }

    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

/// Where theme variables are written, normally the document root.
pub trait ThemeSink {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryThemeSink {
    properties: BTreeMap<String, String>,
}

impl InMemoryThemeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn to_css(&self) -> String {
        ThemeVariables(self.properties.clone()).to_css()
    }
}

impl ThemeSink for InMemoryThemeSink {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.remove(name);
    }
}
