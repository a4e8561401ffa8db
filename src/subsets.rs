// Bitmask subset machinery shared by the conflict and hitting searches.
// Bit i of a mask means "element i is in the subset", so containment is a
// bitwise test and the powerset of n elements is just 0..2^n.

pub fn is_subset(a:u64,b:u64)->bool {
    a & b == a
}

// Masks with no strict subset among `masks`, smallest first. Strictness
// matters: a set never disqualifies itself, equality is not containment.
pub fn minimal_masks(masks:&[u64])->Vec<u64> {
    let mut minimal:Vec<u64> = masks.iter().copied()
	.filter(|&m| !masks.iter().any(|&o| o != m && is_subset(o,m)))
	.collect();
    sort_small_first(&mut minimal);
    minimal
}

// Deterministic order, independent of discovery order: cardinality first,
// then the bit pattern itself.
pub fn sort_small_first(masks:&mut Vec<u64>) {
    masks.sort_by_key(|&m| (m.count_ones(),m));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_is_bitwise_containment() {
	assert!(is_subset(0b001,0b011));
	assert!(is_subset(0b011,0b011));
	assert!(!is_subset(0b100,0b011));
    }

    #[test]
    fn minimal_drops_strict_supersets_only() {
	let m = minimal_masks(&[0b111,0b011,0b110,0b100]);
	assert_eq!(m,vec![0b100,0b011]);
    }

    #[test]
    fn equal_masks_survive_minimality() {
	let m = minimal_masks(&[0b01,0b10]);
	assert_eq!(m,vec![0b01,0b10]);
    }

    #[test]
    fn sort_is_by_cardinality_then_pattern() {
	let mut m = vec![0b110,0b001,0b011,0b010];
	sort_small_first(&mut m);
	assert_eq!(m,vec![0b001,0b010,0b011,0b110]);
    }
}
