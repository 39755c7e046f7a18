//! Clinical resource categories.
//!
//! A [`Disposition`] describes one category of clinical resource use: the fraction of the infected
//! population that ends up in that state, and the average number of days a patient stays there.
//! For example, if 2.5 percent of infected people are hospitalized for an average of 7 days, the
//! hospitalized disposition is `Disposition::new(0.025, 7.0)`.
//!
//! `Disposition` is only a transport value; it does no checking of its own. Its fields are validated
//! when a [`Parameters`](crate::Parameters) is built.
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Disposition {
    /// Fraction of the infected population in this state.
    pub rate: f64,
    /// Average number of days spent in this state.
    pub days: f64,
}

impl Disposition {
    #[must_use]
    pub fn new(rate: f64, days: f64) -> Self {
        Disposition { rate, days }
    }

    /// A disposition with a zero rate contributes no patients, so its duration carries no meaning.
    #[must_use]
    pub fn is_inactive(&self) -> bool {
        self.rate == 0.0
    }
}

impl From<(f64, f64)> for Disposition {
    fn from((rate, days): (f64, f64)) -> Self {
        Disposition::new(rate, days)
    }
}

/// The three dispositions every parameter set carries.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Debug,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DispositionKind {
    Hospitalized,
    Icu,
    Ventilated,
}

impl DispositionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Field names used when reporting validation failures for this disposition.
    pub(crate) fn field_names(self) -> (&'static str, &'static str) {
        match self {
            DispositionKind::Hospitalized => ("hospitalized.rate", "hospitalized.days"),
            DispositionKind::Icu => ("icu.rate", "icu.days"),
            DispositionKind::Ventilated => ("ventilated.rate", "ventilated.days"),
        }
    }
}
