use reiter::closure::{self, Config};
use reiter::report::Reporter;
use reiter::scenario::{possible_scenarios, Priorities};
use reiter::{DefaultRule, Literal, Theory, World};
use std::io::{self, Write};

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    known_worlds_demo(&mut reporter)?;
    prioritized_theory_demo(&mut reporter)
}

// the two defaults (A : B / C) and (A : ¬C / D) against four worlds,
// one of which holds a compound literal that never decomposes
fn known_worlds_demo(reporter: &mut Reporter<impl Write>) -> io::Result<()> {
    let rules = vec![
        DefaultRule {
            prerequisite: Some(Literal::from_text("A")),
            justification: Literal::from_text("B"),
            consequence: Literal::from_text("C"),
        },
        DefaultRule {
            prerequisite: Some(Literal::from_text("A")),
            justification: Literal::from_text("¬C"),
            consequence: Literal::from_text("D"),
        },
    ];
    let worlds: Vec<World> = vec![
        [Literal::from_text("¬A")].into_iter().collect(),
        [Literal::from_text("A"), Literal::from_text("¬B")].into_iter().collect(),
        [Literal::from_text("A"), Literal::from_text("¬C ∨ ¬D")].into_iter().collect(),
        [Literal::from_text("A"), Literal::from_text("¬B ∧ C")].into_iter().collect(),
    ];
    for (i, world) in worlds.into_iter().enumerate() {
        let theory = Theory { world, rules: rules.clone() };
        let extension = theory.extension();
        reporter.line(format!("==== World W{} ====", i + 1))?;
        reporter.line(format!("Input: {:?}", theory.world))?;
        reporter.line(format!("Extension: {extension:?}"))?;
        reporter.blank()?;
    }
    Ok(())
}

// the prioritized theory: W = ∅, d1 = (a : b / b), d2 = ( : ¬a / ¬a),
// d3 = ( : a / a), priorities d1 ≤ d3 ≤ d2
fn prioritized_theory_demo(reporter: &mut Reporter<impl Write>) -> io::Result<()> {
    let rules = vec![
        DefaultRule {
            prerequisite: Some(Literal::from_text("a")),
            justification: Literal::from_text("b"),
            consequence: Literal::from_text("b"),
        },
        DefaultRule {
            prerequisite: None,
            justification: Literal::from_text("¬a"),
            consequence: Literal::from_text("¬a"),
        },
        DefaultRule {
            prerequisite: None,
            justification: Literal::from_text("a"),
            consequence: Literal::from_text("a"),
        },
    ];
    let theory = Theory { world: World::default(), rules };
    let priorities = Priorities::from_order(&[0, 2, 1]);
    let annotation = priorities
        .ascending()
        .iter()
        .map(|ridx| format!("d{}", ridx + 1))
        .collect::<Vec<_>>()
        .join(" ≤ ");

    reporter.line("/**************** Prioritized default theory ****************/")?;
    reporter.blank()?;
    reporter.line(format!("W = {:?}", theory.world))?;
    reporter.line("D = {")?;
    reporter.inc_indent();
    for (ridx, rule) in theory.rules.iter().enumerate() {
        let sep = if ridx + 1 < theory.rules.len() { " ;" } else { "" };
        reporter.line(format!("d{}: {rule:?}{sep}", ridx + 1))?;
    }
    reporter.dec_indent();
    reporter.line("}")?;
    reporter.blank()?;
    reporter.line(format!("Priorities: {annotation}"))?;
    reporter.blank()?;
    reporter.line("Possible classical extensions:")?;
    reporter.blank()?;

    let config = Config::default();
    for scenario in possible_scenarios(&theory, &priorities) {
        reporter.line(format!("E: Th(W ∪ ({}))", closure::conjunction(&scenario)))?;
        reporter.inc_indent();
        let combined = closure::union_formula(theory.world.as_slice(), &scenario);
        // closure failure is recoverable: report it and move on
        match closure::closure(&combined, &config) {
            Ok(entailed) => reporter.line(format!("= {entailed:?}"))?,
            Err(err) => reporter.line(format!("closure failed: {err}"))?,
        }
        reporter.dec_indent();
        reporter.blank()?;
    }
    Ok(())
}
