/// Sorts a pair of values into nondescending order.
pub fn sort_pair<K: Ord>(a: K, b: K) -> (K, K) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
#[test]
fn test_sort_pair() {
    assert_eq!(sort_pair(1, 2), (1, 2));
    assert_eq!(sort_pair(2, 1), (1, 2));
    assert_eq!(sort_pair(3, 3), (3, 3));
}
