use rand::prelude::random;

use crate::config::{Config, GteMode};
use crate::error::RbtError;
use crate::rbt::Rbt;

fn keys_1_to_9() -> Rbt<i64, i64> {
    let mut rbt: Rbt<i64, i64> = Rbt::new("test-rbt");
    for key in [1, 3, 5, 7, 9].iter() {
        assert!(rbt.insert(*key, key * 10));
    }
    rbt
}

#[test]
fn test_id() {
    let rbt: Rbt<i64, i64> = Rbt::new("test-rbt");
    assert_eq!(rbt.id(), "test-rbt".to_string());
    assert_eq!(rbt.config().gte_mode, GteMode::Compat);
}

#[test]
fn test_len() {
    let rbt: Rbt<i64, i64> = Rbt::new("test-rbt");
    assert_eq!(rbt.len(), 0);
    assert!(rbt.is_empty());
    assert_eq!(rbt.stats().entries(), 0);
}

#[test]
fn test_empty() {
    let mut rbt: Rbt<i64, i64> = Rbt::new("test-rbt");
    assert_eq!(rbt.find(&1), None);
    assert_eq!(rbt.min(), None);
    assert_eq!(rbt.max(), None);
    assert!(rbt.find_range(&0, &100).is_empty());
    assert!(rbt.lte(&100).is_empty());
    assert!(rbt.gte(&0).is_empty());
    assert!(rbt.to_vec().is_empty());
    assert_eq!(rbt.update(1, 10), None);
    assert_eq!(rbt.delete(&1), None);

    let stats = rbt.validate().unwrap();
    assert_eq!(stats.blacks(), Some(0));
    assert!(stats.depths().is_none());
}

#[test]
fn test_insert() {
    let mut rbt: Rbt<i64, i64> = Rbt::new("test-rbt");
    let mut refns = RefNodes::new(10);

    for key in [2, 1, 3, 6, 5, 4, 8, 0, 9, 7].iter() {
        assert!(rbt.insert(*key, 10));
        assert!(refns.insert(*key, 10));
        rbt.validate().unwrap();
    }
    assert_eq!(rbt.len(), 10);

    // duplicate key is not overwritten.
    assert!(!rbt.insert(7, 20));
    assert_eq!(rbt.find(&7), Some(10));
    assert_eq!(rbt.len(), 10);

    for i in 0..10 {
        assert_eq!(rbt.find(&i), refns.get(i));
    }
    assert_eq!(rbt.to_vec(), refns.to_vec());
    assert_eq!(rbt.min(), Some((0, 10)));
    assert_eq!(rbt.max(), Some((9, 10)));
}

#[test]
fn test_insert_sequential() {
    let mut rbt: Rbt<i64, i64> = Rbt::new("test-rbt");
    for key in 0..1000 {
        assert!(rbt.insert(key, key));
    }
    for key in (1000..2000).rev() {
        assert!(rbt.insert(key, key));
    }
    let stats = rbt.validate().unwrap();
    assert_eq!(stats.entries(), 2000);
    // height of red-black tree is bounded by 2*log2(n+1).
    let depths = stats.depths().unwrap();
    assert_eq!(depths.samples(), 2001);
    assert!(depths.max() <= 22, "{}", depths);
    assert_eq!(rbt.min(), Some((0, 0)));
    assert_eq!(rbt.max(), Some((1999, 1999)));
}

#[test]
fn test_update() {
    let mut rbt: Rbt<i64, i64> = Rbt::new("test-rbt");
    assert_eq!(rbt.update(5, 50), None);
    assert!(rbt.is_empty());

    assert!(rbt.insert(5, 50));
    assert!(rbt.insert(6, 60));
    assert_eq!(rbt.update(5, 55), Some(50));
    assert_eq!(rbt.find(&5), Some(55));
    assert_eq!(rbt.update(6, 66), Some(60));
    assert_eq!(rbt.max(), Some((6, 66)));
    assert_eq!(rbt.update(7, 70), None);
    assert_eq!(rbt.find(&7), None);
    assert_eq!(rbt.len(), 2);
    rbt.validate().unwrap();
}

#[test]
fn test_delete() {
    let mut rbt: Rbt<i64, i64> = Rbt::new("test-rbt");
    let mut refns = RefNodes::new(11);

    for key in [2, 1, 3, 6, 5, 4, 8, 0, 9, 7].iter() {
        assert!(rbt.insert(*key, 100 + key));
        refns.insert(*key, 100 + key);
    }

    // delete a missing node, twice.
    assert_eq!(rbt.delete(&10), None);
    assert_eq!(rbt.delete(&10), None);
    assert!(refns.delete(10).is_none());
    assert_eq!(rbt.len(), 10);
    rbt.validate().unwrap();
    assert_eq!(rbt.to_vec(), refns.to_vec());

    // delete all entries.
    for i in [5, 0, 9, 2, 7, 1, 8, 3, 6, 4].iter() {
        let val = rbt.delete(i);
        let refval = refns.delete(*i);
        assert_eq!(val, refval);
        assert_eq!(rbt.find(i), None);
        rbt.validate().unwrap();
        assert_eq!(rbt.to_vec(), refns.to_vec());
        assert_eq!(rbt.min(), refns.min());
        assert_eq!(rbt.max(), refns.max());
    }
    assert_eq!(rbt.len(), 0);
    assert!(rbt.to_vec().is_empty());

    // tree is reusable after it was drained.
    assert!(rbt.insert(42, 420));
    assert_eq!(rbt.min(), Some((42, 420)));
    assert_eq!(rbt.max(), Some((42, 420)));
    rbt.validate().unwrap();
}

#[test]
fn test_delete_patterns() {
    let n = 512;
    let orders: Vec<Vec<i64>> = vec![
        (0..n).collect(),
        (0..n).rev().collect(),
        (0..n).filter(|k| k % 2 == 0).chain((0..n).filter(|k| k % 2 == 1)).collect(),
        (0..n).map(|k| (k * 37) % n).collect(),
    ];
    for order in orders.iter() {
        let mut rbt: Rbt<i64, i64> = Rbt::new("test-rbt");
        for key in 0..n {
            assert!(rbt.insert(key, -key));
        }
        for (i, key) in order.iter().enumerate() {
            assert_eq!(rbt.delete(key), Some(-key));
            assert_eq!(rbt.len(), (n as usize) - i - 1);
            if i % 16 == 0 {
                rbt.validate().unwrap();
            }
        }
        rbt.validate().unwrap();
        assert!(rbt.is_empty());
    }
}

#[test]
fn test_round_trip() {
    let mut rbt: Rbt<i64, String> = Rbt::new("test-rbt");
    for key in 0..100 {
        assert!(rbt.insert(key, format!("value-{}", key)));
        assert_eq!(rbt.find(&key), Some(format!("value-{}", key)));
    }
    for key in (0..100).step_by(3) {
        assert_eq!(rbt.delete(&key), Some(format!("value-{}", key)));
        assert_eq!(rbt.find(&key), None);
    }
    rbt.validate().unwrap();
    assert_eq!(rbt.len(), 66);
}

#[test]
fn test_range_queries() {
    let rbt = keys_1_to_9();
    assert_eq!(rbt.find_range(&2, &8), vec![30, 50, 70]);
    assert_eq!(rbt.find_range(&1, &9), vec![10, 30, 50, 70, 90]);
    assert_eq!(rbt.find_range(&3, &3), vec![30]);
    assert_eq!(rbt.find_range(&10, &20), Vec::<i64>::new());
    assert_eq!(rbt.find_range(&-5, &0), Vec::<i64>::new());
    // mis-ordered bounds are not validated.
    assert_eq!(rbt.find_range(&8, &2), Vec::<i64>::new());

    assert_eq!(rbt.lte(&5), vec![50, 30, 10]);
    assert_eq!(rbt.lte(&6), vec![50, 30, 10]);
    assert_eq!(rbt.lte(&9), vec![90, 70, 50, 30, 10]);
    assert_eq!(rbt.lte(&100), vec![90, 70, 50, 30, 10]);
    assert_eq!(rbt.lte(&0), Vec::<i64>::new());

    assert_eq!(rbt.gte(&5), vec![50, 70, 90]);
    assert_eq!(rbt.gte(&4), vec![50, 70, 90]);
    assert_eq!(rbt.gte(&0), vec![10, 30, 50, 70, 90]);
    assert_eq!(rbt.gte(&10), Vec::<i64>::new());
}

#[test]
fn test_gte_at_max() {
    let rbt = keys_1_to_9();
    assert_eq!(rbt.gte(&9), Vec::<i64>::new());
    assert_eq!(rbt.gte(&8), vec![90]);

    let mut config = Config::default();
    config.set_gte_mode(GteMode::Inclusive);
    let mut rbt: Rbt<i64, i64> = Rbt::with_config("test-rbt", config);
    assert!(rbt.gte(&0).is_empty());
    for key in [1, 3, 5, 7, 9].iter() {
        assert!(rbt.insert(*key, key * 10));
    }
    assert_eq!(rbt.gte(&9), vec![90]);
    assert_eq!(rbt.gte(&5), vec![50, 70, 90]);
    assert_eq!(rbt.gte(&10), Vec::<i64>::new());
}

#[test]
fn test_max_after_delete() {
    let mut rbt: Rbt<i64, &str> = Rbt::new("test-rbt");
    assert!(rbt.insert(10, "ten"));
    assert!(rbt.insert(20, "twenty"));
    assert!(rbt.insert(30, "thirty"));
    assert_eq!(rbt.max(), Some((30, "thirty")));

    assert_eq!(rbt.delete(&30), Some("thirty"));
    assert_eq!(rbt.max(), Some((20, "twenty")));
    assert_eq!(rbt.delete(&10), Some("ten"));
    assert_eq!(rbt.min(), Some((20, "twenty")));
    rbt.validate().unwrap();
}

#[test]
fn test_cache_after_invalidate() {
    let mut rbt: Rbt<i64, i64> = Rbt::new("test-rbt");
    for key in [10, 20, 30, 40].iter() {
        assert!(rbt.insert(*key, *key));
    }
    assert_eq!(rbt.delete(&10), Some(10));
    assert_eq!(rbt.delete(&40), Some(40));
    // inserts that are not extremes shall not poison the dropped caches.
    assert!(rbt.insert(25, 25));
    rbt.validate().unwrap();
    assert_eq!(rbt.min(), Some((20, 20)));
    assert_eq!(rbt.max(), Some((30, 30)));

    assert!(rbt.insert(5, 5));
    assert!(rbt.insert(50, 50));
    assert_eq!(rbt.min(), Some((5, 5)));
    assert_eq!(rbt.max(), Some((50, 50)));
    assert_eq!(rbt.find(&5), Some(5));
    assert_eq!(rbt.find(&50), Some(50));
    assert_eq!(rbt.gte(&30), vec![30, 50]);
    rbt.validate().unwrap();
}

#[test]
fn test_string_keys() {
    let mut rbt: Rbt<String, u32> = Rbt::new("test-rbt");
    for (i, word) in ["pear", "apple", "fig", "kiwi", "banana", "cherry"]
        .iter()
        .enumerate()
    {
        assert!(rbt.insert(word.to_string(), i as u32));
    }
    assert!(!rbt.insert("fig".to_string(), 99));
    assert_eq!(rbt.find("kiwi"), Some(3));
    assert_eq!(rbt.find("grape"), None);
    assert_eq!(rbt.find_range("b", "g"), vec![4, 5, 2]);
    assert_eq!(rbt.lte("cherry"), vec![5, 4, 1]);
    assert_eq!(rbt.gte("kiwi"), vec![3, 0]);
    assert_eq!(rbt.min(), Some(("apple".to_string(), 1)));
    assert_eq!(rbt.delete("pear"), Some(0));
    assert_eq!(rbt.max(), Some(("kiwi".to_string(), 3)));
    rbt.validate().unwrap();
}

#[test]
fn test_load_from() {
    let iter = (0..100).map(|key| (key, key * 2));
    let rbt: Rbt<i64, i64> = Rbt::load_from("test-rbt", iter).unwrap();
    assert_eq!(rbt.len(), 100);
    assert_eq!(rbt.find(&42), Some(84));
    assert_eq!(rbt.min(), Some((0, 0)));
    assert_eq!(rbt.max(), Some((99, 198)));
    rbt.validate().unwrap();

    let iter = vec![(1, 1), (2, 2), (1, 3)].into_iter();
    match Rbt::<i64, i64>::load_from("test-rbt", iter) {
        Err(err) => {
            assert_eq!(err, RbtError::DuplicateKey(1));
            assert_eq!(err.to_string(), "duplicate key 1");
        }
        Ok(_) => panic!("duplicate key accepted"),
    }
}

#[test]
fn test_validate_stats() {
    let rbt = keys_1_to_9();
    let stats = rbt.validate().unwrap();
    assert_eq!(stats.entries(), 5);
    assert!(stats.blacks().unwrap() >= 2);
    let depths = stats.depths().unwrap();
    assert_eq!(depths.samples(), 6);
    assert!(depths.min() >= 2);
    assert!(depths.max() <= 4);
    assert!(rbt.stats().depths().is_none());
    assert!(rbt.stats().blacks().is_none());
}

#[test]
fn test_crud() {
    let size = 1000;
    let mut rbt: Rbt<i64, i64> = Rbt::new("test-rbt");
    let mut refns = RefNodes::new(size);

    for i in 0..20_000 {
        let key: i64 = (random::<u64>() % (size as u64)) as i64;
        let value: i64 = random();
        match random::<u8>() % 4 {
            0 => {
                assert_eq!(rbt.insert(key, value), refns.insert(key, value));
            }
            1 => {
                assert_eq!(rbt.update(key, value), refns.update(key, value));
            }
            2 => {
                assert_eq!(rbt.delete(&key), refns.delete(key));
            }
            3 => {
                assert_eq!(rbt.find(&key), refns.get(key));
            }
            op => panic!("unreachable {}", op),
        };
        if i % 100 == 0 {
            rbt.validate().unwrap();
            assert_eq!(rbt.min(), refns.min());
            assert_eq!(rbt.max(), refns.max());
        }
    }

    rbt.validate().unwrap();
    assert_eq!(rbt.to_vec(), refns.to_vec());

    // ranges and thresholds
    for _ in 0..1_000 {
        let (low, high) = random_low_high(size);
        assert_eq!(rbt.find_range(&low, &high), refns.find_range(low, high));
        assert_eq!(rbt.lte(&high), refns.lte(high));
        assert_eq!(rbt.gte(&low), refns.gte(low, GteMode::Compat));
    }
}

include!("./ref_test.rs");
