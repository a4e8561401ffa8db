use crate::circuit::{Circuit,GateKind,Source};
use crate::formula::{Formula,Var};

// Propositional fault model of a circuit. Per gate g there is an
// abnormality variable AB(g) and an output variable OUT(g), tied by
//
//     AB(g) | (OUT(g) <-> kind(in1,in2))
//
// so assuming a gate abnormal (AB true) silences its logic entirely, and
// assuming it healthy (AB false) forces the output to follow its inputs.
// Observations become unit clauses on the input/output variables.
pub struct FaultModel {
    pub formula:Formula,
    pub ab:Vec<Var>,
    pub out:Vec<Var>,
    pub input:Vec<Var>
}

impl FaultModel {
    pub fn build(circuit:&Circuit)->FaultModel {
	let mut formula = Formula::new();
	let input:Vec<Var> = circuit.inputs.iter().map(|_| formula.new_var()).collect();
	let ab:Vec<Var> = circuit.gates.iter().map(|_| formula.new_var()).collect();
	let out:Vec<Var> = circuit.gates.iter().map(|_| formula.new_var()).collect();
	let mut model = FaultModel{ formula, ab, out, input };
	for (g,gate) in circuit.gates.iter().enumerate() {
	    let a = model.source_var(gate.in1);
	    let b = model.source_var(gate.in2);
	    model.gate_clauses(g,gate.kind,a,b);
	}
	for &(i,v) in circuit.in_obs.iter() {
	    model.formula.unit(model.input[i],v);
	}
	for &(g,v) in circuit.out_obs.iter() {
	    model.formula.unit(model.out[g],v);
	}
	model
    }

    fn source_var(&self,src:Source)->Var {
	match src {
	    Source::Input(i) => self.input[i],
	    Source::Gate(g) => self.out[g]
	}
    }

    // CNF of AB | (o <-> op(a,b)): every clause of the equivalence carries
    // the positive abnormality literal.
    fn gate_clauses(&mut self,g:usize,kind:GateKind,a:Var,b:Var) {
	let o = self.out[g];
	let ab = self.formula.lit(self.ab[g],false);
	let o_p = self.formula.lit(o,false);
	let o_n = self.formula.lit(o,true);
	let a_p = self.formula.lit(a,false);
	let a_n = self.formula.lit(a,true);
	let b_p = self.formula.lit(b,false);
	let b_n = self.formula.lit(b,true);
	match kind {
	    GateKind::And => {
		self.formula.add_clause(vec![ab,o_n,a_p]);
		self.formula.add_clause(vec![ab,o_n,b_p]);
		self.formula.add_clause(vec![ab,o_p,a_n,b_n]);
	    },
	    GateKind::Or => {
		self.formula.add_clause(vec![ab,o_p,a_n]);
		self.formula.add_clause(vec![ab,o_p,b_n]);
		self.formula.add_clause(vec![ab,o_n,a_p,b_p]);
	    },
	    GateKind::Xor => {
		self.formula.add_clause(vec![ab,o_n,a_p,b_p]);
		self.formula.add_clause(vec![ab,o_n,a_n,b_n]);
		self.formula.add_clause(vec![ab,o_p,a_p,b_n]);
		self.formula.add_clause(vec![ab,o_p,a_n,b_p]);
	    }
	}
    }
}
