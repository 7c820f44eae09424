//! Phase 4 tests: Index consistency under random mutation, checked against a plain-vector model.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use contact_index::types::{fold_case, ContactError, Entry};
use contact_index::ContactIndex;

// ==================== Helpers ====================

const FIRST: [&str; 7] = ["Sally", "sally", "Bandit", "Chilli", "", "Bo", "ΣΑΣΑ"];
const LAST: [&str; 5] = ["Heeler", "heeler", "Graham", "", "Bond"];
const PHONE: [&str; 3] = ["", "0161", "+44"];

fn random_entry(rng: &mut impl Rng) -> Entry {
    Entry::new(
        FIRST[rng.gen_range(0..FIRST.len())],
        LAST[rng.gen_range(0..LAST.len())],
        PHONE[rng.gen_range(0..PHONE.len())],
    )
}

/// Reference behaviour: entries in insertion order, sorted on demand.
#[derive(Default)]
struct Model {
    entries: Vec<Entry>,
}

impl Model {
    fn sorted(&self, key: fn(&Entry) -> String) -> Vec<Entry> {
        let mut sorted = self.entries.clone();
        // Stable sort keeps insertion order among equal keys
        sorted.sort_by_key(|e| key(e));
        sorted
    }

    fn find(&self, query: &str) -> Vec<Entry> {
        let q = fold_case(query);
        let by_first: Vec<Entry> = self
            .sorted(Entry::first_key)
            .into_iter()
            .filter(|e| e.first_key().starts_with(&q))
            .collect();
        let by_last = self
            .sorted(Entry::last_key)
            .into_iter()
            .filter(|e| e.last_key().starts_with(&q) && !e.first_key().starts_with(&q));
        by_first.into_iter().chain(by_last).collect()
    }
}

fn owned(entries: Vec<&Entry>) -> Vec<Entry> {
    entries.into_iter().cloned().collect()
}

// ==================== Randomized Tests ====================

#[test]
fn test_random_mutation_matches_model() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut index = ContactIndex::new();
    let mut model = Model::default();

    for _ in 0..2_000 {
        let entry = random_entry(&mut rng);
        if rng.gen_bool(0.6) {
            let expected_ok = entry.is_valid() && !model.entries.contains(&entry);
            match index.add(entry.clone()) {
                Ok(_) => {
                    assert!(expected_ok);
                    model.entries.push(entry);
                }
                Err(ContactError::InvalidEntry) => assert!(!entry.is_valid()),
                Err(ContactError::Duplicate(_)) => assert!(model.entries.contains(&entry)),
                Err(e) => panic!("Unexpected error: {}", e),
            }
        } else {
            match model.entries.iter().position(|e| *e == entry) {
                Some(pos) => {
                    assert_eq!(index.remove(&entry).unwrap(), entry);
                    model.entries.remove(pos);
                }
                None => assert!(matches!(
                    index.remove(&entry),
                    Err(ContactError::NotFound(_))
                )),
            }
        }

        assert!(index.is_consistent());
        assert_eq!(index.len(), model.entries.len());
    }

    assert_eq!(owned(index.iter().collect()), model.entries);
    assert_eq!(
        owned(index.sorted_by_first_name()),
        model.sorted(Entry::first_key)
    );
    assert_eq!(
        owned(index.sorted_by_last_name()),
        model.sorted(Entry::last_key)
    );
    for query in ["", "s", "SAL", "h", "heeler", "b", "bo", "bon", "zz", "ΣΑΣ", "σ"] {
        assert_eq!(owned(index.find(query)), model.find(query), "query {:?}", query);
    }
}

#[test]
fn test_random_merge_and_difference_match_model() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let a: ContactIndex = (0..20).map(|_| random_entry(&mut rng)).collect();
        let b: ContactIndex = (0..20).map(|_| random_entry(&mut rng)).collect();

        let merged = a.merge(&b);
        let mut expected: Vec<Entry> = a.iter().cloned().collect();
        for e in b.iter() {
            if !expected.contains(e) {
                expected.push(e.clone());
            }
        }
        assert_eq!(owned(merged.iter().collect()), expected);
        assert!(merged.is_consistent());

        let diff = a.difference(&b);
        let expected: Vec<Entry> = a.iter().filter(|e| !b.contains(e)).cloned().collect();
        assert_eq!(owned(diff.iter().collect()), expected);
        assert!(diff.is_consistent());

        // (a - b) and b never overlap, and together with a they cover a ∪ b
        assert!(diff.iter().all(|e| !b.contains(e)));
        assert_eq!(diff.merge(&b).len(), merged.len());
    }
}
