#![cfg(test)]
extern crate binpack;

use std::path::PathBuf;

use regex::Regex;
use binpack::*;

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/binpack/")
        .join(id)
}

fn instance(id: &str) -> Instance {
    read_instance(locate(id)).expect("could not load the instance")
}

fn solve_with(id: &str, obsolescence: &dyn Obsolescence) -> Completion {
    let inst       = instance(id);
    let catalogue  = PatternCatalogue::enumerate(&inst);
    let mut solver = BranchAndBound::new(&inst, &catalogue, &NoCutoff, obsolescence);
    let completion = solver.minimize();

    if completion.best_value.is_some() {
        let solution = solver.best_solution().expect("a solution must exist");
        let packing  = catalogue.unfold(&inst, &solution);
        assert_eq!(packing.totals(inst.nb_types()), inst.demands());
        assert!(packing.bins.iter().all(|b| b.load <= inst.capacity()));
        assert_eq!(Some(solution.nb_bins()), completion.best_value);
    }
    completion
}

fn solve(id: &str) -> Completion {
    let completion = solve_with(id, &UselessPattern);
    assert!(completion.is_exact);
    completion
}

fn first_fit_bins(id: &str) -> usize {
    first_fit(&instance(id)).nb_bins()
}

#[test]
fn demo() {
    let c = solve("demo.txt");
    assert_eq!(c.best_value, Some(2));
    assert!(!c.from_search);
}

#[test]
fn single() {
    let c = solve("single.txt");
    assert_eq!(c.best_value, Some(1));
    assert!(!c.from_search);
}

#[test]
fn pairs() {
    let c = solve("pairs.txt");
    assert_eq!(c.best_value, Some(2));
    assert!(!c.from_search);
}

#[test]
fn improve_18() {
    assert_eq!(first_fit_bins("improve_18.txt"), 3);
    let c = solve("improve_18.txt");
    assert_eq!(c.best_value, Some(2));
    assert!(c.from_search);
}

#[test]
fn zero_demand() {
    assert_eq!(first_fit_bins("zero_demand.txt"), 4);
    let c = solve("zero_demand.txt");
    assert_eq!(c.best_value, Some(3));
    assert!(c.from_search);
}

#[test]
fn improve_20() {
    assert_eq!(first_fit_bins("improve_20.txt"), 4);
    let c = solve("improve_20.txt");
    assert_eq!(c.best_value, Some(3));
    assert!(c.from_search);
}

#[test]
fn improve_30() {
    assert_eq!(first_fit_bins("improve_30.txt"), 6);
    let c = solve("improve_30.txt");
    assert_eq!(c.best_value, Some(5));
    assert!(c.from_search);
}

#[test]
fn improve_50() {
    assert_eq!(first_fit_bins("improve_50.txt"), 8);
    let c = solve("improve_50.txt");
    assert_eq!(c.best_value, Some(7));
    assert!(c.from_search);
}

#[test]
fn proof_40() {
    assert_eq!(instance("proof_40.txt").lower_bound(), 8);
    let c = solve("proof_40.txt");
    assert_eq!(c.best_value, Some(10));
    assert!(!c.from_search);
}

#[test]
fn proof_50() {
    assert_eq!(instance("proof_50.txt").lower_bound(), 8);
    let c = solve("proof_50.txt");
    assert_eq!(c.best_value, Some(9));
    assert!(!c.from_search);
}

#[test]
fn saturated_type_misses_the_optimum_of_improve_18() {
    let c = solve_with("improve_18.txt", &SaturatedType);
    assert_eq!(c.best_value, Some(3));
    assert!(!c.is_exact);
}

#[test]
fn saturated_type_misses_the_optimum_of_zero_demand() {
    let c = solve_with("zero_demand.txt", &SaturatedType);
    assert_eq!(c.best_value, Some(4));
    assert!(!c.is_exact);
}

#[test]
fn saturated_type_never_beats_the_exact_search() {
    for id in ["demo.txt", "improve_20.txt", "improve_30.txt", "improve_50.txt", "proof_50.txt"] {
        let exact     = solve(id).best_value;
        let heuristic = solve_with(id, &SaturatedType).best_value;
        assert!(heuristic >= exact, "{}", id);
    }
}

#[test]
fn a_time_budget_still_yields_a_packing() {
    let inst       = instance("proof_40.txt");
    let catalogue  = PatternCatalogue::enumerate(&inst);
    let budget     = TimeBudget::new(std::time::Duration::from_secs(60));
    let mut solver = BranchAndBound::new(&inst, &catalogue, &budget, &UselessPattern);
    let c = solver.minimize();
    assert_eq!(c.best_value, Some(10));
    assert!(solver.best_lower_bound() <= solver.best_upper_bound());
}

#[test]
fn lp_export_has_one_row_per_type_and_one_general_per_pattern() {
    let inst      = instance("improve_30.txt");
    let catalogue = PatternCatalogue::enumerate(&inst);
    let program   = CoveringProgram::new(&inst, &catalogue);
    let lp        = program.to_lp(&LpConfigBuilder::default().build().unwrap());

    let row     = Regex::new(r"^ piece(\d+): (\d+ m\d+)( \+ \d+ m\d+)* >= (\d+)$").unwrap();
    let general = Regex::new(r"^ m\d+$").unwrap();

    let mut rows = vec![];
    for line in lp.lines() {
        if let Some(caps) = row.captures(line) {
            let j: usize = caps[1].parse().unwrap();
            let d: usize = caps[4].parse().unwrap();
            rows.push((j, d));
        }
    }
    let expected = inst.demands().into_iter().enumerate()
        .map(|(j, d)| (j + 1, d))
        .collect::<Vec<_>>();
    assert_eq!(rows, expected);

    let generals = lp.split("Generals").nth(1).unwrap()
        .lines()
        .filter(|l| general.is_match(l))
        .count();
    assert_eq!(generals, catalogue.len());
}

/// An external solver backed by the branch-and-bound itself
struct Internal<'a>(&'a Instance, &'a PatternCatalogue);
impl MilpSolver for Internal<'_> {
    fn solve(&self, _: &CoveringProgram) -> Result<MilpOutcome, Error> {
        let mut solver = BranchAndBound::new(self.0, self.1, &NoCutoff, &UselessPattern);
        let completion = solver.minimize();
        let usage = solver.best_solution().map(|s| s.usage().to_vec()).unwrap_or_default();
        Ok(MilpOutcome { objective: completion.best_value.unwrap_or(0), usage })
    }
}

#[test]
fn the_covering_program_accepts_the_branch_and_bound_solution() {
    let inst      = instance("improve_50.txt");
    let catalogue = PatternCatalogue::enumerate(&inst);
    let program   = CoveringProgram::new(&inst, &catalogue);
    let outcome   = Internal(&inst, &catalogue).solve(&program).unwrap();
    let solution  = program.accept(&outcome).unwrap();
    assert_eq!(solution.nb_bins(), 7);
    assert!(program.is_feasible(solution.usage()));
}
