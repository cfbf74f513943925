use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct InputSymbol {
    pub name: String, // Textual representation of the symbol
}

/// How the empty word is printed, and its only spelling besides a blank
/// symbol in textual descriptions.
pub const EPSILON: &str = "ε";

impl InputSymbol {
    /// Create a new InputSymbol
    pub fn new(name: &str) -> Self {
        InputSymbol {
            name: name.to_string(),
        }
    }

    /// Get the name of the symbol
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for InputSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The label of an NFA edge. Epsilon is kept apart from the symbols so it can
/// never end up in an alphabet or in a DFA transition.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Label {
    Epsilon,
    Symbol(InputSymbol),
}

impl Label {
    pub fn symbol(name: &str) -> Self {
        Label::Symbol(InputSymbol::new(name))
    }

    /// Reads a label as written in a description. Only the empty string and
    /// [`EPSILON`] denote epsilon.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() || text == EPSILON {
            Label::Epsilon
        } else {
            Label::symbol(text)
        }
    }
}

impl From<InputSymbol> for Label {
    fn from(symbol: InputSymbol) -> Self {
        Label::Symbol(symbol)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => f.write_str(EPSILON),
            Label::Symbol(symbol) => fmt::Display::fmt(symbol, f),
        }
    }
}

pub fn epsilon() -> Label {
    Label::Epsilon
}
