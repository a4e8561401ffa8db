use std::collections::{BTreeMap,BTreeSet};

use log::debug;

use crate::error::{DiagError,Result};
use crate::subsets::{minimal_masks,sort_small_first};

pub struct HittingSets {
    pub all:Vec<BTreeSet<String>>,
    pub minimal:Vec<BTreeSet<String>>
}

// Hitting sets of a collection of conflict sets: the subsets of the union
// of all conflict elements that intersect every conflict set. The minimal
// ones are the candidate multiple-fault diagnoses. Also used directly on a
// guessed collection of sets, which is why the elements are plain strings
// rather than gate indices.
pub fn hitting_sets(conflicts:&[BTreeSet<String>])->Result<HittingSets> {
    if conflicts.is_empty() {
	return Ok(HittingSets{ all:Vec::new(), minimal:Vec::new() });
    }
    let mut universe = BTreeSet::new();
    for c in conflicts.iter() {
	if c.is_empty() {
	    return Err(DiagError::InvalidInput(String::from("conflict sets must be non-empty")));
	}
	for e in c.iter() {
	    universe.insert(e.as_str());
	}
    }
    let elems:Vec<&str> = universe.into_iter().collect();
    let u = elems.len();
    if u >= 64 {
	return Err(DiagError::InvalidInput(format!("cannot enumerate the subsets of {} conflict elements",u)));
    }
    let mut index = BTreeMap::new();
    for (i,&e) in elems.iter().enumerate() {
	index.insert(e,i);
    }
    let conflict_masks:Vec<u64> = conflicts.iter()
	.map(|c| c.iter().fold(0_u64,|m,e| m | 1 << index[e.as_str()]))
	.collect();
    let mut all_masks = Vec::new();
    for mask in 1..(1_u64 << u) {
	if conflict_masks.iter().all(|&c| c & mask != 0) {
	    all_masks.push(mask);
	}
    }
    debug!("{} hitting sets over a universe of {} elements",all_masks.len(),u);
    let minimal = minimal_masks(&all_masks);
    sort_small_first(&mut all_masks);
    Ok(HittingSets{
	all:all_masks.iter().map(|&m| name_set(&elems,m)).collect(),
	minimal:minimal.iter().map(|&m| name_set(&elems,m)).collect()
    })
}

fn name_set(elems:&[&str],mask:u64)->BTreeSet<String> {
    elems.iter().enumerate()
	.filter(|&(i,_)| mask >> i & 1 != 0)
	.map(|(_,&e)| String::from(e))
	.collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids:&[&str])->BTreeSet<String> {
	ids.iter().map(|&s| String::from(s)).collect()
    }

    #[test]
    fn classic_two_conflict_example() {
	let hs = hitting_sets(&[set(&["a","b"]),set(&["b","c"])]).unwrap();
	assert_eq!(hs.minimal,vec![set(&["b"]),set(&["a","c"])]);
	assert!(hs.all.contains(&set(&["a","b"])));
	assert!(hs.all.contains(&set(&["a","b","c"])));
	assert!(!hs.all.contains(&set(&["a"])));
    }

    #[test]
    fn single_conflict_hits_on_singletons() {
	let hs = hitting_sets(&[set(&["G1","G2","G3"])]).unwrap();
	assert_eq!(hs.minimal,vec![set(&["G1"]),set(&["G2"]),set(&["G3"])]);
	// 2^3 - 1 non-empty subsets, all of them hit
	assert_eq!(hs.all.len(),7);
    }

    #[test]
    fn every_hitting_set_hits_every_conflict() {
	let conflicts = [set(&["a","b"]),set(&["b","c"]),set(&["c","d"])];
	let hs = hitting_sets(&conflicts).unwrap();
	for h in hs.all.iter().chain(hs.minimal.iter()) {
	    for c in conflicts.iter() {
		assert!(h.intersection(c).next().is_some(),"{:?} misses {:?}",h,c);
	    }
	}
    }

    #[test]
    fn no_minimal_hitting_set_contains_another() {
	let hs = hitting_sets(&[set(&["a","b"]),set(&["b","c"]),set(&["a","c"])]).unwrap();
	for x in hs.minimal.iter() {
	    for y in hs.minimal.iter() {
		if x != y {
		    assert!(!x.is_superset(y),"{:?} contains {:?}",x,y);
		}
	    }
	}
    }

    #[test]
    fn empty_collection_means_no_faults() {
	let hs = hitting_sets(&[]).unwrap();
	assert!(hs.all.is_empty());
	assert!(hs.minimal.is_empty());
    }

    #[test]
    fn empty_conflict_set_is_invalid_input() {
	match hitting_sets(&[set(&["a"]),set(&[])]) {
	    Err(DiagError::InvalidInput(_)) => (),
	    _ => panic!("expected invalid input")
	}
    }
}
