//! Delta-eta and delta-phi cut limits of distance functions must lie
//! within the range the operand objects can reach

use super::function_tokens;
use crate::classifier::cut_type_of;
use crate::context::MenuContext;
use crate::error::{AlgorithmSyntaxError, Result};
use crate::model::Scale;
use crate::types::{CutType, ScaleType};

/// Inclusive range of valid cut limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutRange {
    pub minimum: f64,
    pub maximum: f64,
}

impl CutRange {
    /// `[0, |min| + max]` of an eta scale
    pub fn delta_eta(scale: &Scale) -> Self {
        Self {
            minimum: 0.0,
            maximum: scale.minimum.abs() + scale.maximum,
        }
    }

    /// `[0, max / 2]` of a phi scale
    pub fn delta_phi(scale: &Scale) -> Self {
        Self {
            minimum: 0.0,
            maximum: scale.maximum / 2.0,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.minimum <= value && value <= self.maximum
    }
}

fn scale_kind(cut_type: CutType) -> Option<ScaleType> {
    match cut_type {
        CutType::DeltaEta => Some(ScaleType::Eta),
        CutType::DeltaPhi => Some(ScaleType::Phi),
        _ => None,
    }
}

fn valid_range(kind: ScaleType, scale: &Scale) -> CutRange {
    match kind {
        ScaleType::Phi => CutRange::delta_phi(scale),
        _ => CutRange::delta_eta(scale),
    }
}

pub(super) fn check(expression: &str, context: &dyn MenuContext) -> Result<()> {
    for (token, function) in function_tokens(expression, |ty| ty.is_distance())? {
        for name in function.cuts() {
            // Undefined cuts only matter when their name says DETA or DPHI
            let Some(cut) = context.cut_by_name(name) else {
                if cut_type_of(name).and_then(scale_kind).is_some() {
                    return Err(AlgorithmSyntaxError::with_token(
                        format!("Cut \"{name}\" is not defined"),
                        &token,
                    )
                    .into());
                }
                continue;
            };
            let Some(kind) = scale_kind(cut.cut_type) else {
                continue;
            };
            let Some((minimum, maximum)) = cut.limits() else {
                log::debug!("skipping range check of data cut {name}");
                continue;
            };

            for object in function.objects() {
                let object_type = object.object_type();
                let scale = context.scale_for(object_type, kind).ok_or_else(|| {
                    AlgorithmSyntaxError::with_token(
                        format!(
                            "Missing {kind} scale for object type {object_type}, unable to validate cut \"{name}\""
                        ),
                        &token,
                    )
                })?;
                let range = valid_range(kind, scale);
                log::trace!("cut {name} on {object_type}: valid range {range:?}");

                if !range.contains(minimum) {
                    return Err(AlgorithmSyntaxError::with_token(
                        format!(
                            "Cut \"{name}\" minimum limit of {minimum} exceed valid object {} range of {}",
                            cut.cut_type, range.minimum
                        ),
                        &token,
                    )
                    .into());
                }
                if !range.contains(maximum) {
                    return Err(AlgorithmSyntaxError::with_token(
                        format!(
                            "Cut \"{name}\" maximum limit of {maximum} exceed valid object {} range of {}",
                            cut.cut_type, range.maximum
                        ),
                        &token,
                    )
                    .into());
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::menu::Menu;
    use crate::model::Cut;
    use crate::types::ObjectType;
    use std::f64::consts::PI;

    fn menu() -> Menu {
        let mut menu = Menu::new("test");
        menu.add_scale(Scale::new(ObjectType::Mu, ScaleType::Eta, -2.5, 2.5));
        menu.add_scale(Scale::new(ObjectType::Mu, ScaleType::Phi, 0.0, 2.0 * PI));
        menu.add_scale(Scale::new(ObjectType::Jet, ScaleType::Eta, -5.0, 5.0));
        menu.import_cuts(vec![
            Cut::range("DETA_5", None, CutType::DeltaEta, 0.0, 5.0),
            Cut::range("DETA_6", None, CutType::DeltaEta, 0.0, 6.0),
            Cut::range("DETA_neg", None, CutType::DeltaEta, -1.0, 1.0),
            Cut::range("DPHI_half", None, CutType::DeltaPhi, 0.0, PI),
            Cut::range("DPHI_over", None, CutType::DeltaPhi, 0.0, PI + 0.01),
            Cut::range("DR_1", None, CutType::DeltaR, 0.0, 100.0),
        ]);
        menu
    }

    #[test]
    fn test_delta_eta_range() {
        let scale = Scale::new(ObjectType::Mu, ScaleType::Eta, -2.5, 2.5);
        assert_eq!(
            CutRange::delta_eta(&scale),
            CutRange {
                minimum: 0.0,
                maximum: 5.0
            }
        );
    }

    #[test]
    fn test_delta_eta_limits() {
        let menu = menu();
        assert!(check("dist{MU10,MU10}[DETA_5]", &menu).is_ok());
        match check("dist{MU10,MU10}[DETA_6]", &menu) {
            Err(Error::Rule(e)) => {
                assert_eq!(
                    e.message(),
                    "Cut \"DETA_6\" maximum limit of 6 exceed valid object DETA range of 5"
                );
                assert_eq!(e.token(), Some("dist{MU10,MU10}[DETA_6]"));
            }
            other => panic!("Expected rule violation, got {other:?}"),
        }
        assert!(check("dist{MU10,MU10}[DETA_neg]", &menu).is_err());
    }

    #[test]
    fn test_each_object_type_is_checked() {
        let menu = menu();
        // JET reaches 10 in eta, MU only 5
        assert!(check("dist{JET30,JET30}[DETA_6]", &menu).is_ok());
        assert!(check("dist{JET30,MU10}[DETA_6]", &menu).is_err());
    }

    #[test]
    fn test_delta_phi_boundary_is_inclusive() {
        let menu = menu();
        assert!(check("dist{MU10,MU10}[DPHI_half]", &menu).is_ok());
        assert!(check("dist{MU10,MU10}[DPHI_over]", &menu).is_err());
    }

    #[test]
    fn test_other_cut_types_are_ignored() {
        assert!(check("dist{MU10,MU10}[DR_1]", &menu()).is_ok());
    }

    #[test]
    fn test_undefined_cuts_of_other_types_are_ignored() {
        let menu = Menu::new("empty");
        assert!(check("dist{MU10,MU10}[DR_1]", &menu).is_ok());
        assert!(check("dist{MU10,EG20}[TBPT_20]", &menu).is_ok());
        assert!(crate::rules::AlgorithmSyntaxValidator::new()
            .validate("dist{MU10,MU10}[DR_1,TBPT_20]", &menu)
            .is_ok());
        assert!(check("dist{MU10,MU10}[DPHI_1]", &menu).is_err());
    }

    #[test]
    fn test_missing_cut_or_scale() {
        let menu = menu();
        assert!(matches!(
            check("dist{MU10,MU10}[DETA_unknown]", &menu),
            Err(Error::Rule(_))
        ));
        // no EG scales registered
        match check("dist{EG10,EG10}[DETA_5]", &menu) {
            Err(Error::Rule(e)) => assert!(e.message().contains("Missing ETA scale")),
            other => panic!("Expected rule violation, got {other:?}"),
        }
    }
}
