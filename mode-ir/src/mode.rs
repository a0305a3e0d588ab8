//! Mode model.

/// Suffix appended to a mode identifier to form its constant name.
pub const MODE_SUFFIX: &str = "Mode";

/// A single named mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    /// `UpperCamel` form of the literal (e.g., "BlueGreen").
    pub identifier: String,
    /// Identifier plus [`MODE_SUFFIX`] (e.g., "BlueGreenMode").
    pub constant_name: String,
    /// The string value of the mode (e.g., "blue-green").
    pub literal: String,
    /// Hook action run when the mode becomes current.
    pub meta: Option<String>,
}

impl Mode {
    /// Create a mode from its literal and derived identifier.
    pub fn new(literal: impl Into<String>, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            constant_name: format!("{}{}", identifier, MODE_SUFFIX),
            identifier,
            literal: literal.into(),
            meta: None,
        }
    }

    /// Attach a hook action.
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }
}

/// The validated, ordered set of modes plus the resolved default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeModel {
    modes: Vec<Mode>,
    default: usize,
}

impl ModeModel {
    /// Build a model.
    ///
    /// `default_constant` selects the default by constant name; `None` picks
    /// the first mode. Returns `None` if `modes` is empty or no mode has the
    /// requested constant name.
    pub fn new(modes: Vec<Mode>, default_constant: Option<&str>) -> Option<Self> {
        let default = match default_constant {
            Some(name) => modes.iter().position(|m| m.constant_name == name)?,
            None if modes.is_empty() => return None,
            None => 0,
        };
        Some(Self { modes, default })
    }

    /// All modes in declaration order.
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// The default mode.
    pub fn default_mode(&self) -> &Mode {
        &self.modes[self.default]
    }

    /// Constant name of the default mode.
    pub fn default_constant(&self) -> &str {
        &self.default_mode().constant_name
    }

    /// Find a mode by literal.
    pub fn get(&self, literal: &str) -> Option<&Mode> {
        self.modes.iter().find(|m| m.literal == literal)
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
