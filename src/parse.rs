use crate::closure::Formula;
use crate::symbol::Symbol;
use crate::{DefaultRule, Literal, Theory, World};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char as nomchar, multispace0},
    combinator::{all_consuming, map as nommap, opt, recognize},
    error::ParseError,
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded, separated_pair, terminated},
};
pub type IResult<I, O, E = nom::error::VerboseError<I>> = Result<(I, O), nom::Err<E>>;

//////////////////////////////////////

type In<'a> = &'a str;

// characters that can never be part of a bare symbol token
const STRUCTURAL: &str = ":,/(){}.&|!¬∧∨";

pub fn wsl<'a, F, O, E>(inner: F) -> impl FnMut(In<'a>) -> IResult<In<'a>, O, E>
where
    E: ParseError<In<'a>>,
    F: FnMut(In<'a>) -> IResult<In<'a>, O, E> + 'a,
{
    preceded(multispace0, inner)
}

pub fn ended<'a, F, O, E>(inner: F) -> impl FnMut(In<'a>) -> IResult<In<'a>, O, E>
where
    E: ParseError<In<'a>>,
    F: FnMut(In<'a>) -> IResult<In<'a>, O, E> + 'a,
{
    all_consuming(terminated(inner, multispace0))
}

pub fn symbol_token(s: In) -> IResult<In, In> {
    wsl(take_while1(|c: char| !c.is_whitespace() && !STRUCTURAL.contains(c)))(s)
}

pub fn neg(s: In) -> IResult<In, In> {
    wsl(alt((tag("¬"), tag("!"))))(s)
}

pub fn literal(s: In) -> IResult<In, Literal> {
    nommap(pair(opt(neg), symbol_token), |(marker, token)| Literal {
        symbol: Symbol::new(token),
        negated: marker.is_some(),
    })(s)
}

pub fn rulesep(s: In) -> IResult<In, In> {
    wsl(recognize(nomchar('.')))(s)
}

pub fn default_rule(s: In) -> IResult<In, DefaultRule> {
    let lhs = terminated(opt(literal), wsl(nomchar(':')));
    let rhs = separated_pair(literal, wsl(nomchar('/')), literal);
    nommap(pair(lhs, rhs), |(prerequisite, (justification, consequence))| DefaultRule {
        prerequisite,
        justification,
        consequence,
    })(s)
}

pub fn world(s: In) -> IResult<In, World> {
    let literals = separated_list0(wsl(nomchar(',')), literal);
    nommap(delimited(wsl(nomchar('{')), literals, wsl(nomchar('}'))), |literals| {
        literals.into_iter().collect()
    })(s)
}

pub fn theory(s: In) -> IResult<In, Theory> {
    let rules = many0(terminated(default_rule, rulesep));
    nommap(pair(opt(world), rules), |(world, rules)| Theory {
        world: world.unwrap_or_default(),
        rules,
    })(s)
}

//////////////////////////////////////
// propositional formulas, precedence ¬ > ∧ > ∨

pub fn formula(s: In) -> IResult<In, Formula> {
    // absent formula text is the empty formula
    alt((disjunction, nommap(multispace0, |_| Formula::True)))(s)
}

pub fn disjunction(s: In) -> IResult<In, Formula> {
    let op = wsl(alt((tag("|"), tag("∨"))));
    nommap(pair(conjunction, many0(preceded(op, conjunction))), |(first, rest)| {
        rest.into_iter().fold(first, |a, b| Formula::Or(Box::new(a), Box::new(b)))
    })(s)
}

pub fn conjunction(s: In) -> IResult<In, Formula> {
    let op = wsl(alt((tag("&"), tag("∧"))));
    nommap(pair(negation, many0(preceded(op, negation))), |(first, rest)| {
        rest.into_iter().fold(first, |a, b| Formula::And(Box::new(a), Box::new(b)))
    })(s)
}

pub fn negation(s: In) -> IResult<In, Formula> {
    let negated = nommap(preceded(neg, negation), |inner| Formula::Not(Box::new(inner)));
    alt((negated, operand))(s)
}

pub fn operand(s: In) -> IResult<In, Formula> {
    let parenthesized = delimited(wsl(nomchar('(')), disjunction, wsl(nomchar(')')));
    let lit = nommap(symbol_token, |token| {
        Formula::Lit(Literal { symbol: Symbol::new(token), negated: false })
    });
    alt((parenthesized, lit))(s)
}
