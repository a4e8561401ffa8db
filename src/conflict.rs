use std::collections::BTreeSet;

use cryptominisat::{Lbool,Lit};
use log::debug;

use crate::circuit::Circuit;
use crate::encode::FaultModel;
use crate::error::{DiagError,Result};
use crate::subsets::{is_subset,minimal_masks};

// All minimal conflict sets of a circuit: the inclusion-minimal sets of
// gates that cannot all be assumed healthy at once given the observations.
// Every non-empty subset of the gate set is tried against the oracle, so
// this is exponential in the gate count by construction.
pub fn minimal_conflict_sets(circuit:&Circuit)->Result<Vec<BTreeSet<String>>> {
    let n = circuit.gates.len();
    if n == 0 {
	return Err(DiagError::InvalidInput(String::from("conflict search requires at least one gate")));
    }
    if n >= 64 {
	return Err(DiagError::InvalidInput(format!("cannot enumerate the subsets of {} gates",n)));
    }
    let model = FaultModel::build(circuit);
    let mut solver = model.formula.solver();
    let mut conflicts:Vec<u64> = Vec::new();
    for mask in 1..(1_u64 << n) {
	// Conflict sets are upward closed, so a superset of a recorded
	// conflict is a conflict without asking the oracle.
	if conflicts.iter().any(|&c| is_subset(c,mask)) {
	    conflicts.push(mask);
	    continue;
	}
	// Gates in the subset are assumed healthy (!AB), the rest are left
	// possibly faulty (AB), which silences their logic constraint.
	let ass:Vec<Lit> = (0..n)
	    .map(|g| model.formula.lit(model.ab[g],mask >> g & 1 != 0))
	    .collect();
	if solver.solve_with_assumptions(&ass) == Lbool::False {
	    debug!("conflict subset {:b}",mask);
	    conflicts.push(mask);
	}
    }
    debug!("{} conflict subsets out of {}",conflicts.len(),(1_u64 << n) - 1);
    Ok(minimal_masks(&conflicts).iter().map(|&m| gate_set(circuit,m)).collect())
}

fn gate_set(circuit:&Circuit,mask:u64)->BTreeSet<String> {
    circuit.gates.iter().enumerate()
	.filter(|&(g,_)| mask >> g & 1 != 0)
	.map(|(_,gate)| gate.id.clone())
	.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn circuit(text:&str)->Circuit {
	Circuit::parse(&Document::new(text)).unwrap()
    }

    fn set(ids:&[&str])->BTreeSet<String> {
	ids.iter().map(|&s| String::from(s)).collect()
    }

    #[test]
    fn consistent_circuit_has_no_conflicts() {
	let c = circuit("
	    COMPONENTS:
	    ANDG(G1)
	    ORG(G2)
	    XORG(G3)
	    ENDCOMPONENTS
	    BEHAVIOUR:
	    IN1(G1)=i1
	    IN2(G1)=i2
	    IN1(G2)=i1
	    IN2(G2)=i3
	    IN1(G3)=OUT(G1)
	    IN2(G3)=OUT(G2)
	    ENDBEHAVIOUR
	    OBSERVATIONS:
	    i1=1
	    i2=0
	    i3=0
	    ENDOBSERVATIONS
	    OUTOBSERVATIONS:
	    OUT(G3)=1
	    ENDOUTOBSERVATIONS
	    ");
	assert!(minimal_conflict_sets(&c).unwrap().is_empty());
    }

    #[test]
    fn flipped_output_yields_the_full_gate_conflict() {
	let c = circuit("
	    COMPONENTS:
	    ANDG(G1)
	    ORG(G2)
	    XORG(G3)
	    ENDCOMPONENTS
	    BEHAVIOUR:
	    IN1(G1)=i1
	    IN2(G1)=i2
	    IN1(G2)=i1
	    IN2(G2)=i3
	    IN1(G3)=OUT(G1)
	    IN2(G3)=OUT(G2)
	    ENDBEHAVIOUR
	    OBSERVATIONS:
	    i1=1
	    i2=0
	    i3=0
	    ENDOBSERVATIONS
	    OUTOBSERVATIONS:
	    OUT(G3)=0
	    ENDOUTOBSERVATIONS
	    ");
	// no proper subset of the three gates explains OUT(G3)=0
	assert_eq!(minimal_conflict_sets(&c).unwrap(),vec![set(&["G1","G2","G3"])]);
    }

    #[test]
    fn single_faulty_gate_is_a_singleton_conflict() {
	let c = circuit("
	    COMPONENTS:
	    ANDG(A1)
	    ENDCOMPONENTS
	    BEHAVIOUR:
	    ENDBEHAVIOUR
	    OBSERVATIONS:
	    IN1(A1)=1
	    IN2(A1)=0
	    ENDOBSERVATIONS
	    OUTOBSERVATIONS:
	    OUT(A1)=1
	    ENDOUTOBSERVATIONS
	    ");
	assert_eq!(minimal_conflict_sets(&c).unwrap(),vec![set(&["A1"])]);
    }

    #[test]
    fn supersets_of_a_conflict_are_filtered_out() {
	// G1 contradicts its observation on its own; G2 is consistent, so
	// {G1,G2} is a conflict too but not a minimal one
	let c = circuit("
	    COMPONENTS:
	    ANDG(G1)
	    ORG(G2)
	    ENDCOMPONENTS
	    BEHAVIOUR:
	    IN1(G1)=i1
	    IN2(G1)=i2
	    IN1(G2)=i1
	    IN2(G2)=i3
	    ENDBEHAVIOUR
	    OBSERVATIONS:
	    i1=1
	    i2=0
	    i3=0
	    ENDOBSERVATIONS
	    OUTOBSERVATIONS:
	    OUT(G1)=1
	    OUT(G2)=1
	    ENDOUTOBSERVATIONS
	    ");
	assert_eq!(minimal_conflict_sets(&c).unwrap(),vec![set(&["G1"])]);
    }

    #[test]
    fn empty_gate_set_is_invalid_input() {
	let c = Circuit{ inputs:Vec::new(), gates:Vec::new(), in_obs:Vec::new(), out_obs:Vec::new() };
	match minimal_conflict_sets(&c) {
	    Err(DiagError::InvalidInput(_)) => (),
	    other => panic!("expected invalid input, got {:?}",other)
	}
    }
}
