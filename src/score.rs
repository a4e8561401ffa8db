use std::collections::BTreeSet;

// Jaccard similarity of two sets; two empty sets count as identical.
pub fn jaccard(a:&BTreeSet<String>,b:&BTreeSet<String>)->f64 {
    let union = a.union(b).count();
    if union == 0 {
	return 1.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

// Score a guessed collection of sets against the ground truth, in [0,100].
// Each truth set is credited with its best-matching guess by Jaccard
// similarity; the average credit is then penalized by the number of guessed
// sets that matched nothing, normalized by the truth count. An identical
// guess scores 100, a guess sharing no element with any truth set scores 0.
pub fn score(truth:&[BTreeSet<String>],guess:&[BTreeSet<String>])->f64 {
    if truth.is_empty() {
	return if guess.is_empty() { 100.0 } else { 0.0 };
    }
    let mut matched = BTreeSet::new();
    let mut total = 0.0;
    for t in truth.iter() {
	let mut best = 0.0;
	let mut best_ix = None;
	for (i,g) in guess.iter().enumerate() {
	    let s = jaccard(t,g);
	    if s > best {
		best = s;
		best_ix = Some(i);
	    }
	}
	total += best;
	if let Some(i) = best_ix {
	    matched.insert(i);
	}
    }
    let extra = guess.len() - matched.len();
    let penalty = extra as f64 / truth.len() as f64;
    (total / truth.len() as f64 - penalty).max(0.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids:&[&str])->BTreeSet<String> {
	ids.iter().map(|&s| String::from(s)).collect()
    }

    #[test]
    fn identical_guess_scores_100() {
	let truth = vec![set(&["G1","G2"]),set(&["G3"])];
	let guess = vec![set(&["G3"]),set(&["G1","G2"])];
	assert!((score(&truth,&guess) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_guess_scores_0() {
	let truth = vec![set(&["G1","G2"])];
	let guess = vec![set(&["G7"]),set(&["G8","G9"])];
	assert_eq!(score(&truth,&guess),0.0);
    }

    #[test]
    fn partial_overlap_stays_in_bounds() {
	let truth = vec![set(&["G1","G2"]),set(&["G2","G3"])];
	let guess = vec![set(&["G1"]),set(&["G3"])];
	let s = score(&truth,&guess);
	assert!(s > 0.0 && s < 100.0,"score {} out of range",s);
	assert!((s - 50.0).abs() < 1e-9);
    }

    #[test]
    fn extra_guessed_sets_are_penalized() {
	let truth = vec![set(&["G1"])];
	let padded = vec![set(&["G1"]),set(&["G7"]),set(&["G8"])];
	assert!(score(&truth,&padded) < score(&truth,&truth));
    }

    #[test]
    fn empty_truth_matches_only_an_empty_guess() {
	assert_eq!(score(&[],&[]),100.0);
	assert_eq!(score(&[],&[set(&["G1"])]),0.0);
    }

    #[test]
    fn jaccard_of_empty_sets_is_one() {
	assert_eq!(jaccard(&set(&[]),&set(&[])),1.0);
	assert_eq!(jaccard(&set(&["a"]),&set(&[])),0.0);
	assert!((jaccard(&set(&["a","b"]),&set(&["b","c"])) - 1.0/3.0).abs() < 1e-9);
    }
}
