extern crate autostrut;

use autostrut::utils::prelude::*;

#[test]
fn handle_set() {
    let mut set: HandlePool<Handle> = HandlePool::new();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());

    let e1 = set.create();
    assert!(e1.is_valid());
    assert!(set.contains(e1));
    assert_eq!(set.len(), 1);

    assert!(!set.contains(Handle::nil()));

    assert!(set.free(e1));
    assert!(!set.contains(e1));
    assert!(!set.free(e1));
    assert_eq!(set.len(), 0);
}

#[test]
fn index_reuse() {
    let mut set: HandlePool<Handle> = HandlePool::new();

    let v: Vec<_> = (0..10).map(|_| set.create()).collect();
    for &e in &v {
        set.free(e);
    }

    // Freed indices come back lowest first, with a bumped version.
    for i in 0..10 {
        let e = set.create();
        assert_eq!(e.index(), i);
        assert_eq!(e.version(), 3);
        assert!(!set.contains(v[i as usize]));
    }

    assert_eq!(set.len(), 10);
}

#[test]
fn iter() {
    let mut set: HandlePool<Handle> = HandlePool::new();
    let v: Vec<_> = (0..6).map(|_| set.create()).collect();

    set.free(v[1]);
    set.free(v[4]);

    let alive: Vec<_> = set.iter().collect();
    assert_eq!(alive, [v[0], v[2], v[3], v[5]]);
}
