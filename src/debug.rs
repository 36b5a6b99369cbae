use crate::{DefaultRule, Literal};
use std::fmt::{Debug, Formatter, Result as FmtResult};

impl Debug for Literal {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        if self.negated {
            write!(f, "¬")?;
        }
        self.symbol.fmt(f)
    }
}

impl Debug for DefaultRule {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "(")?;
        if let Some(prerequisite) = &self.prerequisite {
            write!(f, "{prerequisite:?}")?;
        }
        write!(f, " : {:?} / {:?})", self.justification, self.consequence)
    }
}
