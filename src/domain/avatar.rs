use serde::{Deserialize, Serialize};

/// Decoration drawn on top of the avatar body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessory {
    #[default]
    None,
    Headband,
    Dumbbells,
    Cape,
}

impl Accessory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accessory::None => "none",
            Accessory::Headband => "headband",
            Accessory::Dumbbells => "dumbbells",
            Accessory::Cape => "cape",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "headband" => Some(Self::Headband),
            "dumbbells" => Some(Self::Dumbbells),
            "cape" => Some(Self::Cape),
            _ => None,
        }
    }

    /// Human-readable name shown in the GUI
    pub fn label(&self) -> &'static str {
        match self {
            Accessory::None => "Nenhum",
            Accessory::Headband => "Faixa",
            Accessory::Dumbbells => "Halteres",
            Accessory::Cape => "Capa",
        }
    }
}

impl std::fmt::Display for Accessory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Facial expression of the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    #[default]
    Happy,
    Determined,
    Exhausted,
}

impl Expression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expression::Happy => "happy",
            Expression::Determined => "determined",
            Expression::Exhausted => "exhausted",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "happy" => Some(Self::Happy),
            "determined" => Some(Self::Determined),
            "exhausted" => Some(Self::Exhausted),
            _ => None,
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual descriptor of an avatar.
///
/// Treated as an immutable snapshot: updates build a new value with
/// [`AvatarConfig::with_expression`] / [`AvatarConfig::with_accessory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarConfig {
    /// Fill color of the body, as a CSS-style hex string (e.g. "#10b981")
    pub body_color: String,
    #[serde(default)]
    pub accessory: Accessory,
    #[serde(default)]
    pub expression: Expression,
}

impl AvatarConfig {
    pub fn new(body_color: impl Into<String>, accessory: Accessory, expression: Expression) -> Self {
        Self {
            body_color: body_color.into(),
            accessory,
            expression,
        }
    }

    pub fn with_expression(&self, expression: Expression) -> Self {
        Self {
            expression,
            ..self.clone()
        }
    }

    pub fn with_accessory(&self, accessory: Accessory) -> Self {
        Self {
            accessory,
            ..self.clone()
        }
    }
}
