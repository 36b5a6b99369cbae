use crate::parse;
use crate::symbol::Symbol;
use crate::util::VecSet;
use crate::Literal;
use std::collections::HashMap;
use thiserror::Error;

/// Well-formed propositional formula, the collaborator that turns a
/// scenario into its classical closure `Th(W ∪ consequences)`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Formula {
    /// The empty formula, trivially true.
    True,
    Lit(Literal),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Closure enumerates truth assignments, so the number of distinct
    /// symbols per formula is capped.
    pub max_symbols: usize,
}
impl Default for Config {
    fn default() -> Self {
        Self { max_symbols: 16 }
    }
}

#[derive(Debug, Error)]
pub enum ClosureError {
    #[error("formula syntax error:\n{0}")]
    Syntax(String),
    #[error("formula has {found} distinct symbols, limit is {limit}")]
    TooManySymbols { found: usize, limit: usize },
}

impl Formula {
    fn visit_literals(&self, visitor: &mut impl FnMut(&Literal)) {
        match self {
            Self::True => {}
            Self::Lit(literal) => visitor(literal),
            Self::Not(inner) => inner.visit_literals(visitor),
            Self::And(a, b) | Self::Or(a, b) => {
                a.visit_literals(visitor);
                b.visit_literals(visitor);
            }
        }
    }
    fn symbols(&self) -> VecSet<Symbol> {
        let mut symbols = VecSet::default();
        self.visit_literals(&mut |literal| {
            symbols.insert(literal.symbol);
        });
        symbols
    }
    fn eval(&self, assignment: &HashMap<Symbol, bool>) -> bool {
        match self {
            Self::True => true,
            Self::Lit(literal) => {
                assignment.get(&literal.symbol).copied().unwrap_or(false) != literal.negated
            }
            Self::Not(inner) => !inner.eval(assignment),
            Self::And(a, b) => a.eval(assignment) && b.eval(assignment),
            Self::Or(a, b) => a.eval(assignment) || b.eval(assignment),
        }
    }
}

/// Every literal over the formula's symbols that holds in all of its
/// models. An unsatisfiable formula entails everything over its signature.
pub fn closure_of(formula: &Formula, config: &Config) -> Result<VecSet<Literal>, ClosureError> {
    let symbols = formula.symbols();
    let limit = config.max_symbols.min(63); // assignments are one u64 mask
    if symbols.len() > limit {
        return Err(ClosureError::TooManySymbols { found: symbols.len(), limit });
    }
    let slice = symbols.as_slice();
    let mut always_true = vec![true; slice.len()];
    let mut always_false = vec![true; slice.len()];
    let mut model_count = 0u64;
    let mut assignment = HashMap::new();
    for mask in 0u64..(1u64 << slice.len()) {
        assignment.clear();
        for (i, &symbol) in slice.iter().enumerate() {
            assignment.insert(symbol, mask & (1u64 << i) != 0);
        }
        if formula.eval(&assignment) {
            model_count += 1;
            for i in 0..slice.len() {
                if mask & (1u64 << i) != 0 {
                    always_false[i] = false;
                } else {
                    always_true[i] = false;
                }
            }
        }
    }
    let mut closure = VecSet::default();
    if model_count == 0 {
        for &symbol in slice {
            closure.insert(Literal { symbol, negated: false });
            closure.insert(Literal { symbol, negated: true });
        }
        return Ok(closure);
    }
    for (i, &symbol) in slice.iter().enumerate() {
        if always_true[i] {
            closure.insert(Literal { symbol, negated: false });
        }
        if always_false[i] {
            closure.insert(Literal { symbol, negated: true });
        }
    }
    Ok(closure)
}

pub fn closure(text: &str, config: &Config) -> Result<VecSet<Literal>, ClosureError> {
    let formula = match parse::ended(parse::formula)(text) {
        Ok((_rest, formula)) => formula,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(ClosureError::Syntax(nom::error::convert_error(text, e)))
        }
        Err(nom::Err::Incomplete(_)) => {
            return Err(ClosureError::Syntax("incomplete input".to_string()))
        }
    };
    closure_of(&formula, config)
}

/// Renders literals as formula text, `¬a & b & c`. Empty input renders as
/// the empty formula.
pub fn conjunction(literals: &[Literal]) -> String {
    literals.iter().map(|literal| format!("{literal:?}")).collect::<Vec<_>>().join(" & ")
}

/// Formula text for `W ∪ scenario`, fed back through the parser so exotic
/// world literals surface as recoverable closure errors.
pub fn union_formula(world: &[Literal], scenario: &[Literal]) -> String {
    let world_text = conjunction(world);
    let scenario_text = conjunction(scenario);
    match (world_text.is_empty(), scenario_text.is_empty()) {
        (true, true) => String::new(),
        (true, false) => format!("({scenario_text})"),
        (false, true) => format!("({world_text})"),
        (false, false) => format!("(({world_text}) & ({scenario_text}))"),
    }
}
