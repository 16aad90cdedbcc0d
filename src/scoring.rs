// src/scoring.rs
//! Aptitude schemes.
//!
//! Every scheme is static data: the derived columns it writes, each one a
//! fixed formula over existing columns, plus the columns worth showing next
//! to it. Scoring a table appends (or overwrites) the derived columns, so a
//! scheme can be re-run on the same table without anything accumulating.

use std::{fmt, str::FromStr};

use crate::error::ConfigurationError;
use crate::table::StaffTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    Overall,
    Coaching,
    GoalkeeperCoaching,
    FitnessCoaching,
    HeadYouthDev,
    HeadCoach,
}

#[derive(Debug)]
pub enum Formula {
    /// Σ weight × column.
    Weighted(&'static [(&'static str, i64)]),
    /// Σ of every attribute-vocabulary column the table has.
    AllAttributes,
    /// Row-wise max over columns written earlier in the same scheme.
    RowMax(&'static [&'static str]),
    /// Row-wise sum over columns written earlier in the same scheme.
    RowSum(&'static [&'static str]),
}

#[derive(Debug)]
pub struct Metric {
    pub name: &'static str,
    pub formula: Formula,
}

#[derive(Debug)]
pub struct SchemeSpec {
    pub scheme: Scheme,
    pub name: &'static str,
    pub about: &'static str,
    pub metrics: &'static [Metric],
    /// Default ranking column.
    pub sort_by: &'static str,
    /// Input columns shown before the derived ones. Empty for `overall`,
    /// which shows whatever attribute columns the table has.
    pub inputs_shown: &'static [&'static str],
}

/* ---------------- Coaching ---------------- */

pub const COACHING_APTITUDES: &[&str] =
    &["Att-Tec", "Att-TCo", "Def-Tec", "Def-TCo", "Men-Tec", "Men-TCo"];

// 2*(Det+Dis+Mot) + 6*area + 3*style
const ATT_TEC: &[(&str, i64)] = &[("Det", 2), ("Dis", 2), ("Mot", 2), ("Att", 6), ("Tec", 3)];
const ATT_TCO: &[(&str, i64)] = &[("Det", 2), ("Dis", 2), ("Mot", 2), ("Att", 6), ("TCo", 3)];
const DEF_TEC: &[(&str, i64)] = &[("Det", 2), ("Dis", 2), ("Mot", 2), ("Def", 6), ("Tec", 3)];
const DEF_TCO: &[(&str, i64)] = &[("Det", 2), ("Dis", 2), ("Mot", 2), ("Def", 6), ("TCo", 3)];
const MEN_TEC: &[(&str, i64)] = &[("Det", 2), ("Dis", 2), ("Mot", 2), ("Men", 6), ("Tec", 3)];
const MEN_TCO: &[(&str, i64)] = &[("Det", 2), ("Dis", 2), ("Mot", 2), ("Men", 6), ("TCo", 3)];

pub const MAX_COACHING: &str = "max_coaching_aptitude";
pub const TOTAL_COACHING: &str = "total_coaching_aptitude";

/* ---------------- Registry ---------------- */

pub static SCHEMES: &[SchemeSpec] = &[
    SchemeSpec {
        scheme: Scheme::Overall,
        name: "overall",
        about: "sum of all attributes",
        metrics: &[Metric { name: "sum_all_attributes", formula: Formula::AllAttributes }],
        sort_by: "sum_all_attributes",
        inputs_shown: &[],
    },
    SchemeSpec {
        scheme: Scheme::Coaching,
        name: "coaching",
        about: "coaching aptitude per area (Att/Def/Men) and style (Tec/TCo)",
        metrics: &[
            Metric { name: "Att-Tec", formula: Formula::Weighted(ATT_TEC) },
            Metric { name: "Att-TCo", formula: Formula::Weighted(ATT_TCO) },
            Metric { name: "Def-Tec", formula: Formula::Weighted(DEF_TEC) },
            Metric { name: "Def-TCo", formula: Formula::Weighted(DEF_TCO) },
            Metric { name: "Men-Tec", formula: Formula::Weighted(MEN_TEC) },
            Metric { name: "Men-TCo", formula: Formula::Weighted(MEN_TCO) },
            Metric { name: MAX_COACHING, formula: Formula::RowMax(COACHING_APTITUDES) },
            Metric { name: TOTAL_COACHING, formula: Formula::RowSum(COACHING_APTITUDES) },
        ],
        sort_by: MAX_COACHING,
        inputs_shown: &[],
    },
    SchemeSpec {
        scheme: Scheme::GoalkeeperCoaching,
        name: "goalkeeper_coaching",
        about: "goalkeeper coaching: GkD + GkH + GkS",
        metrics: &[Metric {
            name: "gk_coaching_aptitude",
            formula: Formula::Weighted(&[("GkD", 1), ("GkH", 1), ("GkS", 1)]),
        }],
        sort_by: "gk_coaching_aptitude",
        inputs_shown: &["GkD", "GkH", "GkS", "Det", "Dis", "Mot"],
    },
    SchemeSpec {
        scheme: Scheme::FitnessCoaching,
        name: "fitness_coaching",
        about: "fitness coaching: 9*Fit + 2*(Det + Dis + Mot)",
        metrics: &[Metric {
            name: "fitness_coaching_aptitude",
            formula: Formula::Weighted(&[("Fit", 9), ("Det", 2), ("Dis", 2), ("Mot", 2)]),
        }],
        sort_by: "fitness_coaching_aptitude",
        inputs_shown: &["Fit", "Det", "Dis", "Mot"],
    },
    SchemeSpec {
        scheme: Scheme::HeadYouthDev,
        name: "head_youth_dev",
        about: "head of youth development: Judge A + Judge P + Youth",
        metrics: &[Metric {
            name: "head_yth_dev_aptitude",
            formula: Formula::Weighted(&[("Judge A", 1), ("Judge P", 1), ("Youth", 1)]),
        }],
        sort_by: "head_yth_dev_aptitude",
        inputs_shown: &[
            "Judge A",
            "Judge P",
            "Youth",
            "Preferred Formation",
            "Tactical Style",
            "Personality",
        ],
    },
    SchemeSpec {
        scheme: Scheme::HeadCoach,
        name: "head_coach",
        about: "head coach: Man + Mot + Judge A + Judge P + Tac Knw",
        metrics: &[Metric {
            name: "head_coach_aptitude",
            formula: Formula::Weighted(&[
                ("Man", 1),
                ("Mot", 1),
                ("Judge A", 1),
                ("Judge P", 1),
                ("Tac Knw", 1),
            ]),
        }],
        sort_by: "head_coach_aptitude",
        inputs_shown: &["Man", "Mot", "Judge A", "Judge P", "Tac Knw"],
    },
];

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::Overall,
        Scheme::Coaching,
        Scheme::GoalkeeperCoaching,
        Scheme::FitnessCoaching,
        Scheme::HeadYouthDev,
        Scheme::HeadCoach,
    ];

    pub fn spec(self) -> &'static SchemeSpec {
        // Registry order matches `ALL`.
        &SCHEMES[self as usize]
    }

    pub fn name(self) -> &'static str { self.spec().name }

    pub fn default_sort(self) -> &'static str { self.spec().sort_by }

    /// Derived columns this scheme writes, in order.
    pub fn outputs(self) -> Vec<&'static str> {
        self.spec().metrics.iter().map(|m| m.name).collect()
    }

    /// Columns worth printing for this scheme on `table` (Name excluded).
    pub fn display_columns(self, table: &StaffTable) -> Vec<String> {
        let spec = self.spec();
        let mut cols: Vec<String> = match self {
            Scheme::Overall => table.attribute_columns().into_iter().map(String::from).collect(),
            _ => spec.inputs_shown.iter().map(|s| s!(*s)).collect(),
        };
        cols.extend(spec.metrics.iter().map(|m| s!(m.name)));
        cols
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let scheme = match key.as_str() {
            "overall" | "o" => Scheme::Overall,
            "coaching" | "c" => Scheme::Coaching,
            "goalkeeper_coaching" | "goalkeeper" | "gk" => Scheme::GoalkeeperCoaching,
            "fitness_coaching" | "fitness" | "f" => Scheme::FitnessCoaching,
            "head_youth_dev" | "youth_dev" | "yd" => Scheme::HeadYouthDev,
            "head_coach" | "hc" => Scheme::HeadCoach,
            _ => return Err(format!("unknown scheme: {s}")),
        };
        Ok(scheme)
    }
}

/* ---------------- Evaluation ---------------- */

/// Compute every derived column of `scheme` on `table`.
///
/// Inputs are checked before anything is written, so a schema mismatch
/// leaves the table untouched.
pub fn score(table: &mut StaffTable, scheme: Scheme) -> Result<(), ConfigurationError> {
    let spec = scheme.spec();
    check_inputs(table, spec)?;

    for metric in spec.metrics {
        let values = evaluate(table, spec, &metric.formula)?;
        table.set_int_column(metric.name, values);
    }
    Ok(())
}

fn check_inputs(table: &StaffTable, spec: &SchemeSpec) -> Result<(), ConfigurationError> {
    let missing = |column: &str| ConfigurationError { scheme: spec.name, column: s!(column) };

    for metric in spec.metrics {
        match &metric.formula {
            Formula::Weighted(terms) => {
                for (col, _) in terms.iter() {
                    if table.ints(col).is_none() {
                        return Err(missing(*col));
                    }
                }
            }
            Formula::AllAttributes => {
                if table.attribute_columns().is_empty() {
                    return Err(missing("<any attribute>"));
                }
            }
            Formula::RowMax(_) | Formula::RowSum(_) => {}
        }
    }
    Ok(())
}

fn evaluate(
    table: &StaffTable,
    spec: &SchemeSpec,
    formula: &Formula,
) -> Result<Vec<Option<i64>>, ConfigurationError> {
    let column = |name: &str| {
        table.ints(name).ok_or_else(|| ConfigurationError { scheme: spec.name, column: s!(name) })
    };

    let values = match formula {
        Formula::Weighted(terms) => {
            let mut cols = Vec::with_capacity(terms.len());
            for (name, weight) in terms.iter() {
                cols.push((column(*name)?, *weight));
            }
            fold_rows(table.len(), &cols, |acc, v, w| acc.saturating_add(v.saturating_mul(w)), 0)
        }
        Formula::AllAttributes => {
            let mut cols = Vec::new();
            for name in table.attribute_columns() {
                cols.push((column(name)?, 1));
            }
            fold_rows(table.len(), &cols, |acc, v, _| acc.saturating_add(v), 0)
        }
        Formula::RowSum(names) => {
            let cols = unit_columns(names, column)?;
            fold_rows(table.len(), &cols, |acc, v, _| acc.saturating_add(v), 0)
        }
        Formula::RowMax(names) => {
            let cols = unit_columns(names, column)?;
            fold_rows(table.len(), &cols, |acc, v, _| acc.max(v), i64::MIN)
        }
    };
    Ok(values)
}

fn unit_columns<'t, F>(
    names: &[&str],
    column: F,
) -> Result<Vec<(&'t [Option<i64>], i64)>, ConfigurationError>
where
    F: Fn(&str) -> Result<&'t [Option<i64>], ConfigurationError>,
{
    names.iter().map(|n| column(*n).map(|c| (c, 1))).collect()
}

/// Row-wise fold; a row with any missing input yields a missing result.
fn fold_rows<F>(len: usize, cols: &[(&[Option<i64>], i64)], step: F, init: i64) -> Vec<Option<i64>>
where
    F: Fn(i64, i64, i64) -> i64,
{
    (0..len)
        .map(|row| {
            let mut acc = init;
            for (col, weight) in cols {
                acc = step(acc, (*col.get(row)?)?, *weight);
            }
            Some(acc)
        })
        .collect()
}
