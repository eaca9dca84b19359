// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the covering integer program which is built on top of
//! the pattern catalogue. It is meant to be solved by an external MILP solver
//! (through the `MilpSolver` trait, or by exporting it in LP format) so that
//! the outcome can be compared with the one of the branch-and-bound.
//!
//! The program has one integer column `x_p >= 0` per pattern (in catalogue
//! order) and one row per item type:
//!
//! ```plain
//! minimize    sum_p x_p
//! subject to  sum_p count[p][j] * x_p >= demand[j]    for each item type j
//! ```

use std::fmt::Write;

use derive_builder::Builder;

use crate::{Instance, PatternCatalogue, Solution, MilpOutcome, Error};

/// This is how you configure the LP text produced by `CoveringProgram::to_lp`
#[derive(Debug, Clone, Builder)]
pub struct LpConfig {
    /// The name of the problem written in the header comment
    #[builder(setter(into), default="\"Bin-Packing\".to_string()")]
    problem_name: String,
    /// Columns are named with this prefix followed by the pattern index
    #[builder(setter(into), default="\"m\".to_string()")]
    column_prefix: String,
    /// Rows are named with this prefix followed by the item type number
    /// (starting at 1)
    #[builder(setter(into), default="\"piece\".to_string()")]
    row_prefix: String,
    /// This flag must be true if you want the null coefficients to be
    /// written in the constraints
    #[builder(default="false")]
    dense: bool,
}

/// The covering program of an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveringProgram {
    /// The right hand side of each row (the demand of each item type)
    rhs: Vec<usize>,
    /// `columns[p][j]` is the number of units of type `j` in pattern `p`
    columns: Vec<Vec<usize>>,
}

impl CoveringProgram {
    pub fn new(instance: &Instance, catalogue: &PatternCatalogue) -> Self {
        CoveringProgram {
            rhs: instance.demands(),
            columns: catalogue.iter().map(|p| p.counts().to_vec()).collect(),
        }
    }
    pub fn nb_rows(&self) -> usize {
        self.rhs.len()
    }
    pub fn nb_columns(&self) -> usize {
        self.columns.len()
    }
    pub fn rhs(&self, row: usize) -> usize {
        self.rhs[row]
    }
    pub fn coefficient(&self, row: usize, column: usize) -> usize {
        self.columns[column][row]
    }
    /// The value of the objective function (number of bins) for `usage`
    pub fn objective(&self, usage: &[usize]) -> usize {
        usage.iter().sum()
    }
    /// True iff `usage` satisfies all the rows of the program
    pub fn is_feasible(&self, usage: &[usize]) -> bool {
        self.first_violated_row(usage).is_none()
    }
    fn first_violated_row(&self, usage: &[usize]) -> Option<usize> {
        (0..self.nb_rows()).find(|&row| {
            let lhs: usize = self.columns.iter().zip(usage.iter())
                .map(|(col, &x)| col[row] * x)
                .sum();
            lhs < self.rhs[row]
        })
    }

    /// Validates the outcome reported by an external solver and turns it into
    /// a solution that can be compared with those of the branch-and-bound.
    pub fn accept(&self, outcome: &MilpOutcome) -> Result<Solution, Error> {
        if outcome.usage.len() != self.nb_columns() {
            return Err(Error::BadUsage(format!(
                "expected {} columns, got {}", self.nb_columns(), outcome.usage.len())));
        }
        let objective = self.objective(&outcome.usage);
        if objective != outcome.objective {
            return Err(Error::BadUsage(format!(
                "the usage totals {} bins but the objective is {}", objective, outcome.objective)));
        }
        if let Some(row) = self.first_violated_row(&outcome.usage) {
            return Err(Error::BadUsage(format!("item type {} is not covered", row)));
        }
        Ok(Solution::new(outcome.usage.clone()))
    }

    /// Writes the program in CPLEX LP format.
    pub fn to_lp(&self, config: &LpConfig) -> String {
        let col = |p: usize| format!("{}{}", config.column_prefix, p);
        let mut out = String::new();

        // writing to a String cannot fail
        let _ = writeln!(out, "\\ Problem: {}", config.problem_name);
        let _ = writeln!(out);
        let _ = writeln!(out, "Minimize");
        let objective = (0..self.nb_columns()).map(col).collect::<Vec<_>>().join(" + ");
        let _ = writeln!(out, " obj: {}", objective);
        let _ = writeln!(out);

        let _ = writeln!(out, "Subject To");
        for row in 0..self.nb_rows() {
            let mut terms = vec![];
            for p in 0..self.nb_columns() {
                let coef = self.coefficient(row, p);
                if coef != 0 || config.dense {
                    terms.push(format!("{} {}", coef, col(p)));
                }
            }
            if terms.is_empty() && self.nb_columns() > 0 {
                terms.push(format!("0 {}", col(0)));
            }
            let _ = writeln!(out, " {}{}: {} >= {}",
                config.row_prefix, row + 1, terms.join(" + "), self.rhs[row]);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Generals");
        for p in 0..self.nb_columns() {
            let _ = writeln!(out, " {}", col(p));
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "End");
        out
    }
}
