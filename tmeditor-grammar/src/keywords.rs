//! Keyword tables of the algorithm language
//!
//! Gate symbols, object type names, function names and cut type names as
//! they appear in expression text. Higher layers build their typed tables
//! on top of these constants.

// ========= Gates =========

/// Logical conjunction
pub const AND: &str = "AND";
/// Logical disjunction
pub const OR: &str = "OR";
/// Exclusive disjunction
pub const XOR: &str = "XOR";
/// Logical negation (unary)
pub const NOT: &str = "NOT";

/// All gate symbols
pub const GATES: &[&str] = &[AND, OR, XOR, NOT];

// ========= Object types =========

pub const MU: &str = "MU";
pub const EG: &str = "EG";
pub const JET: &str = "JET";
pub const TAU: &str = "TAU";
pub const ETM: &str = "ETM";
pub const HTM: &str = "HTM";
pub const ETT: &str = "ETT";
pub const HTT: &str = "HTT";
pub const ETTEM: &str = "ETTEM";
pub const ETMHF: &str = "ETMHF";
pub const MBT0HFP: &str = "MBT0HFP";
pub const MBT1HFP: &str = "MBT1HFP";
pub const MBT0HFM: &str = "MBT0HFM";
pub const MBT1HFM: &str = "MBT1HFM";
pub const TOWERCOUNT: &str = "TOWERCOUNT";

/// Object type names ordered so that the first prefix match is also the
/// longest one (`ETMHF` before `ETM`, `ETTEM` before `ETT`).
pub const OBJECT_PREFIXES: &[&str] = &[
    TOWERCOUNT, MBT0HFP, MBT1HFP, MBT0HFM, MBT1HFM, ETTEM, ETMHF, ETM, ETT, HTM, HTT, JET, TAU,
    MU, EG,
];

/// Object types cut on an ET threshold; these may spell the threshold as
/// `TYPE-ET<threshold>` (`MU-ET10`).
pub const THRESHOLD_OBJECTS: &[&str] = &[MU, EG, JET, TAU, ETM, HTM, ETT, HTT, ETTEM, ETMHF];

/// External signal type name
pub const EXT: &str = "EXT";

/// Prefix carried by every external signal token
pub const EXT_PREFIX: &str = "EXT_";

// ========= Comparison operators =========

/// Greater or equal (default)
pub const GE: &str = ".ge.";
/// Equal
pub const EQ: &str = ".eq.";

// ========= Functions =========

pub const COMB: &str = "comb";
pub const DIST: &str = "dist";
pub const MASS_INV: &str = "mass_inv";
pub const MASS_TRV: &str = "mass_trv";
pub const COMB_ORM: &str = "comb_orm";
pub const DIST_ORM: &str = "dist_orm";
pub const MASS_INV_ORM: &str = "mass_inv_orm";

/// Function names, longest first so `comb_orm{` never matches as `comb`.
pub const FUNCTION_PREFIXES: &[&str] = &[
    MASS_INV_ORM,
    COMB_ORM,
    DIST_ORM,
    MASS_INV,
    MASS_TRV,
    COMB,
    DIST,
];

// ========= Cuts =========

pub const ET: &str = "ET";
pub const ETA: &str = "ETA";
pub const PHI: &str = "PHI";
pub const ISO: &str = "ISO";
pub const QLTY: &str = "QLTY";
pub const CHG: &str = "CHG";
pub const SLICE: &str = "SLICE";
pub const CHGCOR: &str = "CHGCOR";
pub const DETA: &str = "DETA";
pub const DPHI: &str = "DPHI";
pub const DR: &str = "DR";
pub const MASS: &str = "MASS";
pub const TBPT: &str = "TBPT";
pub const ORMDETA: &str = "ORMDETA";
pub const ORMDPHI: &str = "ORMDPHI";
pub const ORMDR: &str = "ORMDR";

/// Cut type names accepted in cut references
pub const CUT_TYPES: &[&str] = &[
    ETA, PHI, ISO, QLTY, CHG, SLICE, CHGCOR, DETA, DPHI, DR, MASS, TBPT, ORMDETA, ORMDPHI, ORMDR,
];

/// Separator between object and cut type in cut names (`MU-ETA_2p1`)
pub const SEPARATOR: char = '-';

// ========= Predicates =========

/// Returns true if token is a gate symbol.
pub fn is_gate(token: &str) -> bool {
    GATES.contains(&token)
}

/// Type name of an object token, if the token starts with one.
pub fn object_prefix(token: &str) -> Option<&'static str> {
    OBJECT_PREFIXES
        .iter()
        .copied()
        .find(|name| token.starts_with(name))
}

/// Returns true if token is an object requirement or an external signal.
pub fn is_object(token: &str) -> bool {
    token.starts_with(EXT_PREFIX) || object_prefix(token).is_some()
}

/// Function name of a function token, if the token starts with `name{`.
pub fn function_prefix(token: &str) -> Option<&'static str> {
    FUNCTION_PREFIXES.iter().copied().find(|name| {
        token
            .strip_prefix(name)
            .is_some_and(|rest| rest.starts_with('{'))
    })
}

/// Returns true if token is a function.
pub fn is_function(token: &str) -> bool {
    function_prefix(token).is_some()
}

/// Returns true if token is a cut reference, with or without object scope
/// (`MU-ETA_2p1`, `DETA_0to2`).
pub fn is_cut_name(token: &str) -> bool {
    let unscoped = match token.split_once(SEPARATOR) {
        Some((object, rest)) if OBJECT_PREFIXES.contains(&object) => rest,
        _ => token,
    };
    CUT_TYPES.iter().any(|cut_type| {
        unscoped
            .strip_prefix(cut_type)
            .is_some_and(|tail| tail.is_empty() || tail.starts_with('_'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gates() {
        assert!(is_gate("AND"));
        assert!(is_gate("NOT"));
        assert!(!is_gate("and"));
        assert!(!is_gate("MU10"));
    }

    #[test]
    fn test_longest_object_prefix_wins() {
        assert_eq!(object_prefix("ETMHF40"), Some(ETMHF));
        assert_eq!(object_prefix("ETM40"), Some(ETM));
        assert_eq!(object_prefix("ETTEM30"), Some(ETTEM));
        assert_eq!(object_prefix("ETT30"), Some(ETT));
        assert_eq!(object_prefix("MBT0HFP1"), Some(MBT0HFP));
        assert_eq!(object_prefix("comb{MU10,MU10}"), None);
    }

    #[test]
    fn test_object_and_external() {
        assert!(is_object("MU10"));
        assert!(is_object("EXT_BPTX_plus+1"));
        assert!(!is_object("XYZ10"));
        assert!(!is_object("dist{MU10,MU10}"));
    }

    #[test]
    fn test_function_prefix() {
        assert_eq!(function_prefix("comb{MU10,MU10}"), Some(COMB));
        assert_eq!(function_prefix("comb_orm{MU10,JET20}"), Some(COMB_ORM));
        assert_eq!(function_prefix("mass_inv_orm{EG5,EG5,JET20}"), Some(MASS_INV_ORM));
        assert_eq!(function_prefix("comb"), None);
        assert_eq!(function_prefix("combo{MU10}"), None);
    }

    #[test]
    fn test_cut_names() {
        assert!(is_cut_name("MU-ETA_2p1"));
        assert!(is_cut_name("JET-PHI_barrel"));
        assert!(is_cut_name("DETA_0to2"));
        assert!(is_cut_name("ORMDR_0p2"));
        assert!(is_cut_name("CHGCOR_OS"));
        assert!(!is_cut_name("MU-FOO_1"));
        assert!(!is_cut_name("DETAX_1"));
        assert!(!is_cut_name("MU10"));
    }
}
