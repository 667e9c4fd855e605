//! Algorithm syntax rules
//!
//! A closed set of rules checked against an expression and the menu it
//! belongs to. Each rule tokenizes the expression itself and never sees
//! the state of another rule. The validator runs its rules in order and
//! stops at the first violation.

mod comb_bx_offset;
mod cuts_defined;
mod dist_objects;
mod dist_range;
mod function_cuts;

pub use dist_range::CutRange;

use crate::classifier::FunctionToken;
use crate::context::MenuContext;
use crate::error::{Result, SyntaxError};
use crate::tokenizer::tokenize;
use crate::types::FunctionType;
use std::fmt;

/// Function tokens of `expression` whose type satisfies `family`, in
/// token order.
fn function_tokens(
    expression: &str,
    family: impl Fn(FunctionType) -> bool,
) -> Result<Vec<(String, FunctionToken)>> {
    let mut functions = Vec::new();
    for token in tokenize(expression)? {
        let Some(function_type) = FunctionType::from_token(&token) else {
            continue;
        };
        if !family(function_type) {
            continue;
        }
        let function =
            FunctionToken::parse(&token).map_err(|e| SyntaxError::new(expression, e))?;
        functions.push((token, function));
    }
    Ok(functions)
}

/// Syntax rule kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxRule {
    /// Objects of `comb{...}` share one bunch crossing offset
    CombBxOffset,
    /// `dist{...}` takes exactly two objects
    DistObjects,
    /// Delta-eta and delta-phi cuts of `dist{...}` fit the object scales
    DistDeltaRange,
    /// Every referenced cut exists in the menu
    CutsDefined,
    /// Function cuts are of a type the function accepts
    FunctionCutTypes,
}

impl SyntaxRule {
    /// Rules of the default validator, in order
    pub const DEFAULT: &'static [SyntaxRule] = &[
        SyntaxRule::CombBxOffset,
        SyntaxRule::DistObjects,
        SyntaxRule::DistDeltaRange,
    ];

    /// Rules of the strict validator, in order
    pub const STRICT: &'static [SyntaxRule] = &[
        SyntaxRule::CombBxOffset,
        SyntaxRule::DistObjects,
        SyntaxRule::DistDeltaRange,
        SyntaxRule::CutsDefined,
        SyntaxRule::FunctionCutTypes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SyntaxRule::CombBxOffset => "comb-bx-offset",
            SyntaxRule::DistObjects => "dist-objects",
            SyntaxRule::DistDeltaRange => "dist-delta-range",
            SyntaxRule::CutsDefined => "cuts-defined",
            SyntaxRule::FunctionCutTypes => "function-cut-types",
        }
    }

    /// Check `expression` against this rule.
    pub fn check(self, expression: &str, context: &dyn MenuContext) -> Result<()> {
        match self {
            SyntaxRule::CombBxOffset => comb_bx_offset::check(expression),
            SyntaxRule::DistObjects => dist_objects::check(expression),
            SyntaxRule::DistDeltaRange => dist_range::check(expression, context),
            SyntaxRule::CutsDefined => cuts_defined::check(expression, context),
            SyntaxRule::FunctionCutTypes => function_cuts::check(expression, context),
        }
    }
}

impl fmt::Display for SyntaxRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, fail-fast list of syntax rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmSyntaxValidator {
    rules: Vec<SyntaxRule>,
}

impl Default for AlgorithmSyntaxValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl AlgorithmSyntaxValidator {
    /// Validator with the default rules
    pub fn new() -> Self {
        Self {
            rules: SyntaxRule::DEFAULT.to_vec(),
        }
    }

    /// Validator with every rule
    pub fn strict() -> Self {
        Self {
            rules: SyntaxRule::STRICT.to_vec(),
        }
    }

    /// Validator without rules
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; a rule already present is not added twice.
    pub fn add_rule(&mut self, rule: SyntaxRule) -> &mut Self {
        if !self.rules.contains(&rule) {
            self.rules.push(rule);
        }
        self
    }

    pub fn remove_rule(&mut self, rule: SyntaxRule) -> &mut Self {
        self.rules.retain(|known| *known != rule);
        self
    }

    pub fn rules(&self) -> &[SyntaxRule] {
        &self.rules
    }

    /// Run every rule in order; the first violation is returned.
    pub fn validate(&self, expression: &str, context: &dyn MenuContext) -> Result<()> {
        for rule in &self.rules {
            log::debug!("checking rule {rule} on `{expression}`");
            if let Err(e) = rule.check(expression, context) {
                log::debug!("rule {rule} failed: {e}");
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::menu::Menu;

    #[test]
    fn test_rule_order() {
        assert_eq!(AlgorithmSyntaxValidator::new().rules(), SyntaxRule::DEFAULT);
        assert_eq!(&AlgorithmSyntaxValidator::strict().rules()[..3], SyntaxRule::DEFAULT);
    }

    #[test]
    fn test_first_violation_wins() {
        let menu = Menu::new("test");
        // violates both the offset and the arity rule
        let expression = "comb{MU1,MU1+1} AND dist{MU1,MU1,MU1}";
        match AlgorithmSyntaxValidator::new().validate(expression, &menu) {
            Err(Error::Rule(e)) => assert_eq!(e.token(), Some("comb{MU1,MU1+1}")),
            other => panic!("Expected rule violation, got {other:?}"),
        }

        let mut validator = AlgorithmSyntaxValidator::new();
        validator.remove_rule(SyntaxRule::CombBxOffset);
        match validator.validate(expression, &menu) {
            Err(Error::Rule(e)) => assert_eq!(e.token(), Some("dist{MU1,MU1,MU1}")),
            other => panic!("Expected rule violation, got {other:?}"),
        }
    }

    #[test]
    fn test_add_rule_is_idempotent() {
        let mut validator = AlgorithmSyntaxValidator::empty();
        validator
            .add_rule(SyntaxRule::CutsDefined)
            .add_rule(SyntaxRule::CutsDefined);
        assert_eq!(validator.rules(), &[SyntaxRule::CutsDefined]);
    }

    #[test]
    fn test_syntax_errors_surface_through_rules() {
        let menu = Menu::new("test");
        assert!(AlgorithmSyntaxValidator::empty()
            .validate("MU10 AND", &menu)
            .is_ok());
        assert!(matches!(
            AlgorithmSyntaxValidator::new().validate("MU10 AND", &menu),
            Err(Error::Syntax(_))
        ));
    }
}
