use rand::{Rng, SeedableRng, XorShiftRng};
use streamsort::treap::{DuplicatePolicy, Treap};

#[test]
fn int_test_treap_against_sorted_vec() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut treap = Treap::new();
    let mut expected = Vec::new();
    for _ in 0..100_000 {
        let key = rng.gen::<u16>();
        treap.insert(key);
        expected.push(key);
    }

    expected.sort();

    assert_eq!(treap.len(), expected.len());
    assert_eq!(treap.min(), Some(&expected[0]));
    assert_eq!(treap.max(), Some(&expected[expected.len() - 1]));
    assert_eq!(treap.iter().cloned().collect::<Vec<u16>>(), expected);

    let mut expected_len = expected.len();
    for key in &expected {
        assert_eq!(treap.remove(key), Some(*key));
        expected_len -= 1;
        assert_eq!(treap.len(), expected_len);
    }

    assert!(treap.is_empty());
    assert_eq!(treap.remove(&0), None);
}

#[test]
fn int_test_interleaved_inserts_and_removes() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([2, 2, 2, 2]);
    let mut treap = Treap::new();
    let mut live: Vec<u16> = Vec::new();

    for round in 0..10_000 {
        if round % 4 == 0 && !live.is_empty() {
            let target = live.swap_remove(rng.gen::<usize>() % live.len());
            assert_eq!(treap.remove(&target), Some(target));
        } else {
            let key = rng.gen::<u16>() % 512;
            treap.insert(key);
            live.push(key);
        }
        assert_eq!(treap.len(), live.len());
    }

    let mut expected = live;
    expected.sort();
    assert_eq!(treap.iter().cloned().collect::<Vec<u16>>(), expected);
}

#[test]
fn int_test_ascending_inserts_then_remove() {
    let mut treap = Treap::new();
    for key in 0..20 {
        treap.insert(key);
    }
    assert_eq!(
        treap.iter().cloned().collect::<Vec<u32>>(),
        (0..20).collect::<Vec<u32>>(),
    );

    assert_eq!(treap.remove(&10), Some(10));
    let mut expected: Vec<u32> = (0..20).collect();
    expected.retain(|&key| key != 10);
    assert_eq!(treap.iter().cloned().collect::<Vec<u32>>(), expected);
    assert_eq!(treap.remove(&10), None);
}

#[test]
fn int_test_replace_policy_keeps_one_occurrence() {
    let mut treap = Treap::with_policy(DuplicatePolicy::Replace);
    for _ in 0..100 {
        treap.insert(7);
    }
    assert_eq!(treap.len(), 1);
    assert_eq!(treap.iter().collect::<Vec<&u32>>(), vec![&7]);
}

// With priorities drawn independently per node, the height of the tree stays logarithmic with
// high probability. The bound of 4 * log2(n) sits far above the expected constant, so a failure
// here indicates broken rebalancing rather than bad luck.
#[test]
fn int_test_expected_height_stays_logarithmic() {
    let n: usize = 10_000;
    let limit = (4.0 * (n as f64).log2()).ceil() as usize;

    for trial in 0..100u32 {
        let seed = trial + 1;
        let mut rng: XorShiftRng = SeedableRng::from_seed([seed, seed + 1, seed + 2, seed + 3]);
        let mut keys: Vec<u32> = (0..n as u32).collect();
        rng.shuffle(&mut keys);

        let priority_rng: XorShiftRng =
            SeedableRng::from_seed([seed + 4, seed + 5, seed + 6, seed + 7]);
        let mut treap = Treap::with_rng(priority_rng);
        for key in keys {
            treap.insert(key);
        }

        assert_eq!(treap.len(), n);
        assert!(
            treap.height() <= limit,
            "trial {}: height {} exceeded {}",
            trial,
            treap.height(),
            limit,
        );
    }
}
