use crate::symbol::Symbol;
use crate::{DefaultRule, Extension, Literal};

impl Literal {
    pub fn positive(text: &str) -> Self {
        Self { symbol: Symbol::new(text), negated: false }
    }
    pub fn negative(text: &str) -> Self {
        Self { symbol: Symbol::new(text), negated: true }
    }
    /// Strips at most one leading negation marker; everything after it is
    /// one opaque symbol. `¬B∧C` is the negation of the symbol `B∧C`.
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        match text.strip_prefix('¬').or_else(|| text.strip_prefix('!')) {
            Some(rest) => Self::negative(rest.trim_start()),
            None => Self::positive(text),
        }
    }
    pub fn negate(self) -> Self {
        Self { negated: !self.negated, ..self }
    }
}

impl DefaultRule {
    fn prerequisite_holds(&self, extension: &Extension) -> bool {
        match &self.prerequisite {
            None => true,
            Some(literal) => extension.contains(literal),
        }
    }
    /// Fires iff the prerequisite holds, the justification is not
    /// contradicted, and the consequence is not already known.
    pub fn applicable_in(&self, extension: &Extension) -> bool {
        self.prerequisite_holds(extension)
            && !extension.contains(&self.justification.negate())
            && !extension.contains(&self.consequence)
    }
}
