use cryptominisat::{Lit,Solver};

pub type Var = u32;

// Explicit CNF formula context: variable allocation plus the clause list.
// One value per diagnosis run, threaded by reference through encoding and
// search; there is no process-wide solver state anywhere.
pub struct Formula {
    nvars:Var,
    clauses:Vec<Vec<Lit>>
}

impl Formula {
    pub fn new()->Self {
	Formula{ nvars:0, clauses:Vec::new() }
    }

    pub fn new_var(&mut self)->Var {
	let v = self.nvars;
	self.nvars += 1;
	v
    }

    pub fn lit(&self,var:Var,negated:bool)->Lit {
	debug_assert!(var < self.nvars);
	Lit::new(var,negated).unwrap()
    }

    pub fn add_clause(&mut self,lits:Vec<Lit>) {
	self.clauses.push(lits);
    }

    // Unit clause fixing `var` to `value`
    pub fn unit(&mut self,var:Var,value:bool) {
	let l = self.lit(var,!value);
	self.add_clause(vec![l]);
    }

    pub fn nvars(&self)->Var {
	self.nvars
    }

    pub fn clause_count(&self)->usize {
	self.clauses.len()
    }

    // Fresh solver loaded with every clause of the formula. Queries vary
    // only by assumptions, so nothing asserted for one query can leak into
    // the next.
    pub fn solver(&self)->Solver {
	let mut solver = Solver::new();
	solver.new_vars(self.nvars as usize);
	for c in self.clauses.iter() {
	    solver.add_clause(c);
	}
	solver
    }
}
