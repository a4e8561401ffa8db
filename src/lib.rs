// Model-based diagnosis of combinational circuits built from two-input
// AND/OR/XOR gates. A circuit description is encoded as a propositional
// fault model (one abnormality variable per gate weakening its logic
// constraint), a SAT oracle is queried over every subset of "assumed
// healthy" gates to find the minimal conflict sets, and the minimal
// hitting sets of those conflicts are the candidate diagnoses.

pub mod error;
pub mod document;
pub mod circuit;
pub mod formula;
pub mod encode;
pub mod subsets;
pub mod conflict;
pub mod hitting;
pub mod score;

use std::collections::BTreeSet;

use log::info;

pub use crate::circuit::Circuit;
pub use crate::conflict::minimal_conflict_sets;
pub use crate::document::Document;
pub use crate::error::DiagError;
pub use crate::hitting::{hitting_sets,HittingSets};
pub use crate::score::{jaccard,score};

// Result of a full diagnosis run. All collections are sorted by
// (cardinality, lexicographic member order), so the shape is reproducible
// whatever order the searches discover things in.
pub struct Diagnosis {
    pub minimal_conflicts:Vec<BTreeSet<String>>,
    pub hitting_sets:Vec<BTreeSet<String>>,
    pub minimal_hitting_sets:Vec<BTreeSet<String>>
}

pub fn diagnose(circuit:&Circuit)->Result<Diagnosis,DiagError> {
    let minimal_conflicts = conflict::minimal_conflict_sets(circuit)?;
    let hs = hitting::hitting_sets(&minimal_conflicts)?;
    info!("{} minimal conflict sets, {} minimal hitting sets",
	  minimal_conflicts.len(),hs.minimal.len());
    Ok(Diagnosis{
	minimal_conflicts,
	hitting_sets:hs.all,
	minimal_hitting_sets:hs.minimal
    })
}
