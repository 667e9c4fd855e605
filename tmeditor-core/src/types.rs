//! Domain type tables
//!
//! Object types, cut types, function types, comparison operators and scale
//! types, plus the object-to-scale and function-to-cut mappings. The tables
//! are compile-time constants.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tmeditor_grammar::keywords as kw;

/// Declares a closed keyword enum with its expression-text names.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $keyword:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// All variants in table order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Name as written in expressions
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $keyword),+
                }
            }

            /// Look up a variant by its exact name
            pub fn from_name(name: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.name() == name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| ParseError::UnknownKeyword {
                    kind: stringify!($name),
                    name: s.to_string(),
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.name()
            }
        }
    };
}

keyword_enum! {
    /// Detector object types, threshold types first, then count types
    pub enum ObjectType {
        Mu => kw::MU,
        Eg => kw::EG,
        Jet => kw::JET,
        Tau => kw::TAU,
        Etm => kw::ETM,
        Htm => kw::HTM,
        Ett => kw::ETT,
        Htt => kw::HTT,
        Ettem => kw::ETTEM,
        Etmhf => kw::ETMHF,
        Mbt0Hfp => kw::MBT0HFP,
        Mbt1Hfp => kw::MBT1HFP,
        Mbt0Hfm => kw::MBT0HFM,
        Mbt1Hfm => kw::MBT1HFM,
        TowerCount => kw::TOWERCOUNT,
    }
}

impl ObjectType {
    /// Object types cut on an ET threshold
    pub const THRESHOLD: &'static [ObjectType] = &[
        ObjectType::Mu,
        ObjectType::Eg,
        ObjectType::Jet,
        ObjectType::Tau,
        ObjectType::Etm,
        ObjectType::Htm,
        ObjectType::Ett,
        ObjectType::Htt,
        ObjectType::Ettem,
        ObjectType::Etmhf,
    ];

    /// Object types cut on a count
    pub const COUNT: &'static [ObjectType] = &[
        ObjectType::Mbt0Hfp,
        ObjectType::Mbt1Hfp,
        ObjectType::Mbt0Hfm,
        ObjectType::Mbt1Hfm,
        ObjectType::TowerCount,
    ];

    /// Object type a token starts with. The first prefix in the grammar's
    /// table wins, and that table lists longer names first.
    pub fn from_prefix(token: &str) -> Option<Self> {
        kw::object_prefix(token).and_then(Self::from_name)
    }

    /// Whether the object is a count type
    pub fn is_count(self) -> bool {
        Self::COUNT.contains(&self)
    }

    /// Scale type of the object's threshold (`ET` or `COUNT`)
    pub fn threshold_scale(self) -> ScaleType {
        if self.is_count() {
            ScaleType::Count
        } else {
            ScaleType::Et
        }
    }

    /// Name of the threshold cut (`MU-ET`), count types have none
    pub fn threshold_cut_name(self) -> Option<String> {
        (!self.is_count()).then(|| format!("{}{}{}", self.name(), kw::SEPARATOR, kw::ET))
    }
}

keyword_enum! {
    /// Cut types, object level first, then function level
    pub enum CutType {
        Eta => kw::ETA,
        Phi => kw::PHI,
        Iso => kw::ISO,
        Qlty => kw::QLTY,
        Chg => kw::CHG,
        Slice => kw::SLICE,
        ChgCor => kw::CHGCOR,
        DeltaEta => kw::DETA,
        DeltaPhi => kw::DPHI,
        DeltaR => kw::DR,
        Mass => kw::MASS,
        TwoBodyPt => kw::TBPT,
        OrmDeltaEta => kw::ORMDETA,
        OrmDeltaPhi => kw::ORMDPHI,
        OrmDeltaR => kw::ORMDR,
    }
}

impl CutType {
    /// Cuts attached to objects
    pub const OBJECT: &'static [CutType] = &[
        CutType::Eta,
        CutType::Phi,
        CutType::Iso,
        CutType::Qlty,
        CutType::Chg,
        CutType::Slice,
    ];

    /// Cuts attached to functions
    pub const FUNCTION: &'static [CutType] = &[
        CutType::ChgCor,
        CutType::DeltaEta,
        CutType::DeltaPhi,
        CutType::DeltaR,
        CutType::Mass,
        CutType::TwoBodyPt,
        CutType::OrmDeltaEta,
        CutType::OrmDeltaPhi,
        CutType::OrmDeltaR,
    ];

    /// Whether the cut belongs to functions
    pub fn is_function_cut(self) -> bool {
        Self::FUNCTION.contains(&self)
    }

    /// Whether the cut carries a data bitmask instead of a numeric range
    pub fn is_data(self) -> bool {
        matches!(
            self,
            CutType::Iso | CutType::Qlty | CutType::Chg | CutType::ChgCor
        )
    }
}

keyword_enum! {
    /// Combinatorial and kinematic functions
    pub enum FunctionType {
        Comb => kw::COMB,
        Dist => kw::DIST,
        MassInv => kw::MASS_INV,
        MassTrv => kw::MASS_TRV,
        CombOrm => kw::COMB_ORM,
        DistOrm => kw::DIST_ORM,
        MassInvOrm => kw::MASS_INV_ORM,
    }
}

impl FunctionType {
    /// Function type of a function token (`dist{...}` is `Dist`)
    pub fn from_token(token: &str) -> Option<Self> {
        kw::function_prefix(token).and_then(Self::from_name)
    }

    /// `comb{...}` and its overlap removal variant
    pub fn is_combination(self) -> bool {
        matches!(self, FunctionType::Comb | FunctionType::CombOrm)
    }

    /// `dist{...}` and its overlap removal variant
    pub fn is_distance(self) -> bool {
        matches!(self, FunctionType::Dist | FunctionType::DistOrm)
    }

    /// Cut types a function of this type may carry
    pub fn permitted_cuts(self) -> &'static [CutType] {
        use CutType::*;
        match self {
            FunctionType::Comb => &[ChgCor, TwoBodyPt],
            FunctionType::Dist => &[DeltaEta, DeltaPhi, DeltaR, TwoBodyPt],
            FunctionType::MassInv => &[Mass, DeltaEta, DeltaPhi, DeltaR, TwoBodyPt],
            FunctionType::MassTrv => &[DeltaEta, DeltaPhi, DeltaR, TwoBodyPt],
            FunctionType::CombOrm => &[OrmDeltaEta, OrmDeltaPhi, OrmDeltaR, TwoBodyPt],
            FunctionType::DistOrm => &[
                OrmDeltaEta,
                OrmDeltaPhi,
                OrmDeltaR,
                DeltaEta,
                DeltaPhi,
                DeltaR,
                TwoBodyPt,
            ],
            FunctionType::MassInvOrm => &[
                Mass,
                OrmDeltaEta,
                OrmDeltaPhi,
                OrmDeltaR,
                DeltaEta,
                DeltaPhi,
                DeltaR,
                TwoBodyPt,
            ],
        }
    }
}

keyword_enum! {
    /// Comparison operator of an object threshold
    pub enum ComparisonOperator {
        Ge => kw::GE,
        Eq => kw::EQ,
    }
}

impl Default for ComparisonOperator {
    fn default() -> Self {
        ComparisonOperator::Ge
    }
}

keyword_enum! {
    /// Quantity a detector scale describes
    pub enum ScaleType {
        Et => kw::ET,
        Eta => kw::ETA,
        Phi => kw::PHI,
        Count => "COUNT",
    }
}
