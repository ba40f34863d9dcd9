use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use hybridize::{
    core::io::{pdb::PdbFile, traits::MolecularFile},
    workflows::{self, inspect::InspectionReport},
};
use std::fmt::Write;
use tracing::{info, warn};

pub fn run(args: InspectArgs) -> Result<()> {
    info!("Loading input structure from {:?}", &args.input);
    let records = PdbFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    let report = workflows::inspect::run(&records);
    let unclassified = report.unclassified().count();
    if unclassified > 0 {
        warn!(
            "{} atom(s) have no hybridization for their bond count; 'convert' would fail.",
            unclassified
        );
    }

    print!("{}", format_report(&report));
    Ok(())
}

fn format_report(report: &InspectionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5}  {:<9}  {:>3}  {:>5}  Hybridization",
        "Index", "Element", "Z", "Bonds"
    );
    for atom in &report.atoms {
        let hybridization = atom
            .hybridization
            .map_or_else(|| "?".to_string(), |h| h.to_string());
        let _ = writeln!(
            out,
            "{:>5}  {:<9}  {:>3}  {:>5}  {}",
            atom.index,
            atom.element.name(),
            atom.element.atomic_number(),
            atom.bond_count,
            hybridization
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Formula:        {}", report.formula());
    let _ = writeln!(out, "Mass:           {:.3}", report.total_mass());
    let _ = writeln!(out, "Atoms:          {}", report.atoms.len());
    let _ = writeln!(out, "Bonds:          {}", report.unique_bonds);
    let _ = writeln!(
        out,
        "CONECT records: {} of {}",
        report.connectivity_records,
        report.atoms.len()
    );

    let flagged: Vec<String> = report
        .unclassified()
        .map(|a| a.index.to_string())
        .collect();
    if !flagged.is_empty() {
        let _ = writeln!(out, "Unclassified:   {}", flagged.join(", "));
    }
    out
}
