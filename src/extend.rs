use crate::{Extension, Theory};

impl Theory {
    /// Saturates the world under the default rules. Every pass judges each
    /// rule against the extension as it stood when the pass began, so the
    /// fixed point does not depend on rule order; order only decides the
    /// trace order of additions within a pass.
    ///
    /// No retraction: a fired consequence stays even when a later pass adds
    /// a literal contradicting the justification that produced it — from
    /// then on the contradiction merely blocks rules. Contrary defaults
    /// that must be kept apart belong in `crate::scenario`.
    pub fn extension(&self) -> Extension {
        let mut extension: Extension = self.world.clone();
        loop {
            let snapshot = extension.clone();
            let mut changed = false;
            for rule in &self.rules {
                if rule.applicable_in(&snapshot) {
                    changed |= extension.insert(rule.consequence);
                }
            }
            if !changed {
                // a full pass added nothing: closed under rule application.
                // termination: every changing pass adds a literal from the
                // finite universe of rule consequences
                return extension;
            }
        }
    }
}
