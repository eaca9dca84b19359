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

//! This is the command line front end of binpack. It loads an instance from
//! file, enumerates the patterns, computes the first fit packing and then
//! minimizes the number of bins with the branch-and-bound. Everything is
//! reported in plain text on the standard output.

use std::{fs, time::{Duration, Instant}};

use clap::{Parser, ValueEnum};
use binpack::*;

/// This structure uses `clap-derive` annotations and define the arguments that can
/// be passed on to the executable solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the instance file
    fname: String,
    /// The maximum amount of time (in seconds) you would like this solver to run
    #[clap(short, long)]
    duration: Option<u64>,
    /// The policy used to abandon the branches of the search
    #[clap(short, long, value_enum, default_value = "useless-pattern")]
    obsolescence: Policy,
    /// If set, the covering program is written in LP format at this path
    #[clap(short, long)]
    lp: Option<String>,
    /// Print the whole pattern catalogue
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Skip the patterns which pack none of the remaining items (exact)
    UselessPattern,
    /// Stop a branch as soon as one item type is saturated (heuristic)
    SaturatedType,
}

/// An utility function to return a cutoff heuristic that can either be a time budget policy
/// (if timeout is fixed) or no cutoff policy.
fn cutoff(timeout: Option<u64>) -> Box<dyn Cutoff> {
    if let Some(t) = timeout {
        Box::new(TimeBudget::new(Duration::from_secs(t)))
    } else {
        Box::new(NoCutoff)
    }
}

fn obsolescence(policy: Policy) -> Box<dyn Obsolescence> {
    match policy {
        Policy::UselessPattern => Box::new(UselessPattern),
        Policy::SaturatedType  => Box::new(SaturatedType),
    }
}

fn print_instance(instance: &Instance) {
    println!("Capacity:   {}", instance.capacity());
    println!("Types:      {}", instance.nb_types());
    for item in instance.items() {
        println!("  {:>6} x {}", item.size, item.demand);
    }
    println!("Total size: {}", instance.total_size());
}

fn print_catalogue(catalogue: &PatternCatalogue) {
    for (p, pattern) in catalogue.iter().enumerate() {
        println!("  m{:<5} weight {:>6} {:?}", p, pattern.weight(), pattern.counts());
    }
}

fn print_packing(packing: &Packing) {
    for bin in packing.bins.iter() {
        println!("  load {:>6} {:?}", bin.load, bin.counts);
    }
}

/// This is your executable's entry point. It is the place where all the pieces are put together
/// to create a fast an effective solver for the bin packing problem.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let instance = read_instance(&args.fname)?;
    print_instance(&instance);

    let catalogue = PatternCatalogue::enumerate(&instance);
    println!("Patterns:   {}", catalogue.len());
    if args.verbose {
        print_catalogue(&catalogue);
    }

    if let Some(path) = args.lp.as_ref() {
        let config = LpConfigBuilder::default().build()?;
        let program = CoveringProgram::new(&instance, &catalogue);
        fs::write(path, program.to_lp(&config))?;
        println!("LP file:    {}", path);
    }

    let greedy = first_fit(&instance);
    println!("First fit:  {}", greedy.nb_bins());
    print_packing(&greedy);

    let cutoff = cutoff(args.duration);
    let obsolescence = obsolescence(args.obsolescence);
    let mut solver = BranchAndBound::new(&instance, &catalogue, cutoff.as_ref(), obsolescence.as_ref());

    let Completion { is_exact, best_value, from_search } = solver.minimize();

    let duration = start.elapsed();
    let best_solution = solver.best_solution().unwrap_or_default();

    println!("Duration:   {:.3} seconds", duration.as_secs_f32());
    println!("Explored:   {}",            solver.explored());
    println!("Objective:  {}",            best_value.map(|x| x as isize).unwrap_or(-1));
    println!("Upper Bnd:  {}",            solver.best_upper_bound());
    println!("Lower Bnd:  {}",            solver.best_lower_bound());
    println!("Gap:        {:.3}",         solver.gap());
    println!("Aborted:    {}",            !is_exact);
    println!("Improved:   {}",            from_search);
    println!("Solution:   {:?}",          best_solution.usage());
    if best_value.is_some() {
        print_packing(&catalogue.unfold(&instance, &best_solution));
    }
    Ok(())
}
