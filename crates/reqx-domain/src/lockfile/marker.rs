use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use uv_pep508::{ExtraOperator, MarkerExpression, MarkerTree};

/// Environment condition attached to a locked package.
///
/// An absent marker is the always-true tree and renders as an empty string.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Marker(MarkerTree);

impl Marker {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        MarkerTree::from_str(trimmed)
            .map(Self)
            .map_err(|err| anyhow!("invalid marker `{trimmed}`: {err}"))
    }

    /// Drops every `extra == ...` clause, keeping the rest of the expression.
    ///
    /// Works on the disjunctive normal form: `extra ==` leaves are removed from
    /// each conjunction and a conjunction made only of such leaves is removed
    /// from the disjunction. `extra != ...` clauses are kept.
    #[must_use]
    pub fn without_extras(&self) -> Self {
        if self.0.is_true() || self.0.is_false() {
            return *self;
        }
        let mut stripped = MarkerTree::FALSE;
        let mut kept_any = false;
        for conjunction in self.0.to_dnf() {
            let had_terms = !conjunction.is_empty();
            let mut clause = MarkerTree::TRUE;
            let mut kept_terms = false;
            for expression in conjunction {
                if is_extra_equality(&expression) {
                    continue;
                }
                clause.and(MarkerTree::expression(expression));
                kept_terms = true;
            }
            if had_terms && !kept_terms {
                continue;
            }
            stripped.or(clause);
            kept_any = true;
        }
        if kept_any {
            Self(stripped)
        } else {
            Self::default()
        }
    }

    pub fn is_always_true(&self) -> bool {
        self.0.is_true()
    }
}

fn is_extra_equality(expression: &MarkerExpression) -> bool {
    matches!(
        expression,
        MarkerExpression::Extra {
            operator: ExtraOperator::Equal,
            ..
        }
    )
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_to_string() {
            Some(rendered) => f.write_str(&rendered),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marker({self})")
    }
}
