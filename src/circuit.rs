use std::collections::BTreeMap;

use crate::document::Document;
use crate::error::{DiagError,Result};

#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash,PartialOrd,Ord)]
#[repr(u8)]
pub enum GateKind {
    And = 0,
    Or = 1,
    Xor = 2
}

impl GateKind {
    fn from_token(token:&str)->Option<GateKind> {
	match token {
	    "ANDG" => Some(GateKind::And),
	    "ORG" => Some(GateKind::Or),
	    "XORG" => Some(GateKind::Xor),
	    _ => None
	}
    }
}

// Where a gate input slot is wired to: a primary input or another gate's
// output, both as indices resolved once at parse time.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Source {
    Input(usize),
    Gate(usize)
}

#[derive(Debug,Clone)]
pub struct Gate {
    pub id:String,
    pub kind:GateKind,
    pub in1:Source,
    pub in2:Source
}

// Validated circuit model. Built once from a description and read-only
// afterwards; all identifier lookups happen here, downstream code works
// with indices only.
#[derive(Debug,Clone)]
pub struct Circuit {
    pub inputs:Vec<String>,
    pub gates:Vec<Gate>,
    pub in_obs:Vec<(usize,bool)>,
    pub out_obs:Vec<(usize,bool)>
}

impl Circuit {
    pub fn parse(doc:&Document)->Result<Circuit> {
	let comps = doc.section("COMPONENTS:","ENDCOMPONENTS")?;
	let behaviour = doc.section("BEHAVIOUR:","ENDBEHAVIOUR")?;
	let obs = doc.section("OBSERVATIONS:","ENDOBSERVATIONS")?;
	let out_obs_lines = doc.section("OUTOBSERVATIONS:","ENDOUTOBSERVATIONS")?;

	if comps.is_empty() {
	    return Err(DiagError::Structural(String::from("no components declared")));
	}

	// Component list: KIND(identifier), one per line
	let mut ids = Vec::new();
	let mut kinds = Vec::new();
	let mut gate_index = BTreeMap::new();
	for line in comps.iter() {
	    let (kind_tok,id) = split_call(line)?;
	    if id.is_empty() {
		return Err(DiagError::Structural(format!("component line {:?} has an empty identifier",line)));
	    }
	    let kind = GateKind::from_token(kind_tok)
		.ok_or_else(|| DiagError::UnsupportedGateKind{ gate:String::from(id), kind:String::from(kind_tok) })?;
	    if gate_index.insert(String::from(id),ids.len()).is_some() {
		return Err(DiagError::Structural(format!("component {} declared twice",id)));
	    }
	    ids.push(String::from(id));
	    kinds.push(kind);
	}

	// Each component must have exactly one IN1 and one IN2 binding,
	// counted across the wiring list and the input observations.
	let mut c1 = vec![0usize;ids.len()];
	let mut c2 = vec![0usize;ids.len()];
	for line in behaviour.iter().chain(obs.iter()) {
	    let (lhs,_) = match split_assign(line) {
		Ok(x) => x,
		Err(_) => continue
	    };
	    if let Ok((slot,gid)) = split_call(lhs) {
		if let Some(&g) = gate_index.get(gid) {
		    match slot {
			"IN1" => c1[g] += 1,
			"IN2" => c2[g] += 1,
			_ => ()
		    }
		}
	    }
	}
	let mut errors = Vec::new();
	for g in 0..ids.len() {
	    if c1[g] != 1 || c2[g] != 1 {
		errors.push(format!("component {} has {} IN1 connections and {} IN2 connections",ids[g],c1[g],c2[g]));
	    }
	}
	if !errors.is_empty() {
	    return Err(DiagError::Structural(format!("invalid component connections: {}",errors.join("; "))));
	}

	// Input observations: name=0 or name=1. A name of the form
	// IN1(id)/IN2(id) doubles as the binding for that gate slot.
	if obs.is_empty() {
	    return Err(DiagError::Structural(String::from("no input observations")));
	}
	let mut inputs = Vec::new();
	let mut input_index = BTreeMap::new();
	let mut in_obs = Vec::new();
	for line in obs.iter() {
	    let (name,value) = split_assign(line)?;
	    let v = parse_bit(value,line)?;
	    let ix = intern(&mut inputs,&mut input_index,name);
	    in_obs.push((ix,v));
	}

	// Wiring list first, input observations second (per gate slot)
	let mut in1:Vec<Option<Source>> = vec![None;ids.len()];
	let mut in2:Vec<Option<Source>> = vec![None;ids.len()];
	for line in behaviour.iter() {
	    let (lhs,rhs) = split_assign(line)?;
	    let (slot,gid) = split_call(lhs)?;
	    let g = *gate_index.get(gid)
		.ok_or_else(|| DiagError::Structural(format!("wiring for unknown component {}",gid)))?;
	    let src = match strip_out(rhs) {
		Some(other) => {
		    let o = *gate_index.get(other)
			.ok_or_else(|| DiagError::Structural(format!("component {} wired to unknown component {}",gid,other)))?;
		    Source::Gate(o)
		},
		None => Source::Input(intern(&mut inputs,&mut input_index,rhs))
	    };
	    match slot {
		"IN1" => in1[g] = Some(src),
		"IN2" => in2[g] = Some(src),
		_ => return Err(DiagError::Structural(format!("bad wiring line {:?}",line)))
	    }
	}
	let mut gates = Vec::new();
	for (g,id) in ids.iter().enumerate() {
	    let slot_input = |slot:&str| input_index.get(&format!("{}({})",slot,id)).map(|&ix| Source::Input(ix));
	    let in1 = in1[g].or_else(|| slot_input("IN1"));
	    let in2 = in2[g].or_else(|| slot_input("IN2"));
	    match (in1,in2) {
		(Some(in1),Some(in2)) => gates.push(Gate{ id:id.clone(), kind:kinds[g], in1, in2 }),
		_ => return Err(DiagError::Structural(format!("no inputs resolved for gate {}",id)))
	    }
	}

	// Output observations: OUT(id)=0 or OUT(id)=1
	if out_obs_lines.is_empty() {
	    return Err(DiagError::Structural(String::from("no output observations")));
	}
	let mut out_obs = Vec::new();
	for line in out_obs_lines.iter() {
	    let (lhs,value) = split_assign(line)?;
	    let id = strip_out(lhs)
		.ok_or_else(|| DiagError::Structural(format!("output observation {:?} must name OUT(component)",line)))?;
	    let g = *gate_index.get(id)
		.ok_or_else(|| DiagError::Structural(format!("output observation for unknown component {}",id)))?;
	    let v = parse_bit(value,line)?;
	    out_obs.push((g,v));
	}

	Ok(Circuit{ inputs, gates, in_obs, out_obs })
    }

    pub fn gate_ids(&self)->Vec<&str> {
	self.gates.iter().map(|g| g.id.as_str()).collect()
    }
}

// "KIND(name)" -> ("KIND","name")
fn split_call(s:&str)->Result<(&str,&str)> {
    let open = s.find('(');
    let close = s.rfind(')');
    match (open,close) {
	(Some(i),Some(j)) if i < j && j == s.len() - 1 =>
	    Ok((s[..i].trim(),s[i+1..j].trim())),
	_ => Err(DiagError::Structural(format!("malformed line {:?}",s)))
    }
}

// "lhs=rhs" -> ("lhs","rhs"), both trimmed
fn split_assign(s:&str)->Result<(&str,&str)> {
    match s.split_once('=') {
	Some((l,r)) => Ok((l.trim(),r.trim())),
	None => Err(DiagError::Structural(format!("expected an assignment, got {:?}",s)))
    }
}

// "OUT(name)" -> Some("name")
fn strip_out(s:&str)->Option<&str> {
    s.strip_prefix("OUT(").and_then(|r| r.strip_suffix(')')).map(|r| r.trim())
}

fn parse_bit(v:&str,line:&str)->Result<bool> {
    match v {
	"0" => Ok(false),
	"1" => Ok(true),
	_ => Err(DiagError::Structural(format!("observation {:?} must assign a literal 0 or 1",line)))
    }
}

fn intern(names:&mut Vec<String>,index:&mut BTreeMap<String,usize>,name:&str)->usize {
    match index.get(name) {
	Some(&i) => i,
	None => {
	    let i = names.len();
	    names.push(String::from(name));
	    index.insert(String::from(name),i);
	    i
	}
    }
}
