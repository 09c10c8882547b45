extern crate autostrut;
extern crate rand;

use autostrut::prelude::*;

fn part(assembly: &mut Assembly, name: &str) -> PartId {
    assembly.create(PartTemplate::new(name))
}

#[test]
fn hierarchy() {
    let mut assembly = Assembly::new();
    let e1 = part(&mut assembly, "e1");
    let e2 = part(&mut assembly, "e2");
    let e3 = part(&mut assembly, "e3");
    let e4 = part(&mut assembly, "e4");

    assembly.set_parent(e4, e3).unwrap();
    assembly.set_parent(e3, e1).unwrap();
    assembly.set_parent(e2, e1).unwrap();
    // e1 <- (e3 <- (e4), e2)

    assert!(assembly.is_ancestor(e2, e1));
    assert!(assembly.is_ancestor(e3, e1));
    assert!(assembly.is_ancestor(e4, e1));
    assert!(assembly.is_ancestor(e4, e3));

    assert!(!assembly.is_ancestor(e1, e1));
    assert!(!assembly.is_ancestor(e1, e2));
    assert!(!assembly.is_ancestor(e2, e4));

    assert!(assembly.is_root(e1));
    assert!(!assembly.is_root(e2));
    assert!(!assembly.is_root(e4));

    assert!(!assembly.is_leaf(e1));
    assert!(assembly.is_leaf(e2));
    assert!(!assembly.is_leaf(e3));
    assert!(assembly.is_leaf(e4));

    assert_eq!(assembly.roots().collect::<Vec<_>>(), [e1]);
}

#[test]
fn invalid_parents() {
    let mut assembly = Assembly::new();
    let e1 = part(&mut assembly, "e1");
    let e2 = part(&mut assembly, "e2");
    let e3 = part(&mut assembly, "e3");

    assembly.set_parent(e2, e1).unwrap();
    assembly.set_parent(e3, e2).unwrap();

    match assembly.set_parent(e1, e1) {
        Err(Error::CanNotAttachSelfAsParent) => {}
        other => panic!("unexpected {:?}", other),
    }

    match assembly.set_parent(e1, e3) {
        Err(Error::CanNotAttachToDescendant(v)) => assert_eq!(v, e3),
        other => panic!("unexpected {:?}", other),
    }

    // Failed attempts leave the tree untouched.
    assert!(assembly.is_root(e1));
    assert_eq!(assembly.parent(e3), Some(e2));

    let stale = part(&mut assembly, "stale");
    assembly.delete(stale);
    match assembly.set_parent(stale, e1) {
        Err(Error::PartNotFound(v)) => assert_eq!(v, stale),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn remove_from_parent() {
    let mut assembly = Assembly::new();
    let e1 = part(&mut assembly, "e1");
    let e2 = part(&mut assembly, "e2");
    let e3 = part(&mut assembly, "e3");
    let e4 = part(&mut assembly, "e4");

    assembly.set_parent(e2, e1).unwrap();
    assembly.set_parent(e3, e1).unwrap();
    assembly.set_parent(e4, e1).unwrap();
    assert_eq!(assembly.children(e1).collect::<Vec<_>>(), [e2, e3, e4]);

    assembly.remove_from_parent(e3).unwrap();
    assert_eq!(assembly.children(e1).collect::<Vec<_>>(), [e2, e4]);
    assert!(assembly.is_root(e3));

    assembly.remove_from_parent(e2).unwrap();
    assert_eq!(assembly.children(e1).collect::<Vec<_>>(), [e4]);

    assembly.set_parent(e2, e1).unwrap();
    assembly.set_parent(e3, e1).unwrap();
    assert_eq!(assembly.children(e1).collect::<Vec<_>>(), [e4, e2, e3]);

    // Re-parenting moves the whole subtree.
    assembly.set_parent(e3, e4).unwrap();
    assert_eq!(assembly.children(e1).collect::<Vec<_>>(), [e4, e2]);
    assert_eq!(assembly.ancestors(e3).collect::<Vec<_>>(), [e4, e1]);
}

#[test]
fn delete() {
    let mut assembly = Assembly::new();
    let e1 = part(&mut assembly, "e1");
    let e2 = part(&mut assembly, "e2");
    let e3 = part(&mut assembly, "e3");
    let e4 = part(&mut assembly, "e4");
    let e5 = part(&mut assembly, "e5");
    let e6 = part(&mut assembly, "e6");

    assembly.set_parent(e2, e1).unwrap();
    assembly.set_parent(e3, e1).unwrap();
    assembly.set_parent(e4, e3).unwrap();
    assembly.set_parent(e5, e3).unwrap();
    assembly.set_parent(e6, e5).unwrap();
    // e1 <- (e2, e3 <- (e4, e5 <- e6))

    assert_eq!(assembly.len(), 6);

    let removed = assembly.delete(e3).unwrap();
    assert_eq!(removed, [e3, e4, e5, e6]);

    assert!(assembly.contains(e1));
    assert!(assembly.contains(e2));
    assert!(!assembly.contains(e3));
    assert!(!assembly.contains(e4));
    assert!(!assembly.contains(e5));
    assert!(!assembly.contains(e6));
    assert_eq!(assembly.len(), 2);
    assert_eq!(assembly.children(e1).collect::<Vec<_>>(), [e2]);
    assert_eq!(assembly.name(e2), Some("e2"));

    assert!(assembly.delete(e3).is_none());

    // Recycled slots never resurrect stale ids.
    let e7 = part(&mut assembly, "e7");
    assert!(assembly.contains(e7));
    assert!(!assembly.contains(e3));
    assert_eq!(assembly.name(e7), Some("e7"));
}

#[test]
fn symmetry() {
    let mut assembly = Assembly::new();
    let e1 = part(&mut assembly, "e1");
    let e2 = part(&mut assembly, "e2");
    let e3 = part(&mut assembly, "e3");
    let e4 = part(&mut assembly, "e4");

    assembly.link_symmetry(&[e1, e2, e3]).unwrap();
    assert_eq!(assembly.symmetry(e1), [e2, e3]);
    assert_eq!(assembly.symmetry(e2), [e1, e3]);
    assert_eq!(assembly.symmetry(e3), [e1, e2]);

    match assembly.link_symmetry(&[e4, e4]) {
        Err(Error::SymmetryWithSelf(v)) => assert_eq!(v, e4),
        other => panic!("unexpected {:?}", other),
    }

    // Joining another group leaves the old one behind.
    assembly.link_symmetry(&[e3, e4]).unwrap();
    assert_eq!(assembly.symmetry(e1), [e2]);
    assert_eq!(assembly.symmetry(e2), [e1]);
    assert_eq!(assembly.symmetry(e3), [e4]);
    assert_eq!(assembly.symmetry(e4), [e3]);

    assembly.delete(e4);
    assert!(assembly.symmetry(e3).is_empty());

    assembly.unlink_symmetry(e1);
    assert!(assembly.symmetry(e1).is_empty());
    assert!(assembly.symmetry(e2).is_empty());
}

#[test]
fn find() {
    let mut assembly = Assembly::new();

    let e1 = part(&mut assembly, "pod");
    let e2 = part(&mut assembly, "decoupler");
    let e3 = part(&mut assembly, "tank");
    let e4 = part(&mut assembly, "engine");

    assembly.set_parent(e2, e1).unwrap();
    assembly.set_parent(e3, e1).unwrap();
    assembly.set_parent(e4, e3).unwrap();

    assert_eq!(assembly.find("pod"), Some(e1));
    assert_eq!(assembly.find("pod/"), Some(e1));
    assert_eq!(assembly.find("/pod"), Some(e1));
    assert_eq!(assembly.find("//pod//"), Some(e1));

    assert_eq!(assembly.find("pod/decoupler"), Some(e2));
    assert_eq!(assembly.find("pod/tank"), Some(e3));
    assert_eq!(assembly.find("pod/tank/engine"), Some(e4));
    assert_eq!(assembly.find("pod/blahblah"), None);
    assert_eq!(assembly.find("tank"), None);

    assert_eq!(assembly.find_from(e3, "engine"), Some(e4));
    assert_eq!(assembly.find_from(e1, "/tank/engine"), Some(e4));
    assert_eq!(assembly.find_from(e1, ""), Some(e1));
}

#[test]
fn iteration() {
    let mut assembly = Assembly::new();
    let e1 = part(&mut assembly, "e1");
    let e2 = part(&mut assembly, "e2");
    let e3 = part(&mut assembly, "e3");
    let e4 = part(&mut assembly, "e4");
    let e5 = part(&mut assembly, "e5");
    let e6 = part(&mut assembly, "e6");

    // e1 <- (e2, e3 <- (e4 <- (e5), e6))
    assembly.set_parent(e2, e1).unwrap();
    assembly.set_parent(e3, e1).unwrap();
    assembly.set_parent(e4, e3).unwrap();
    assembly.set_parent(e5, e4).unwrap();
    assembly.set_parent(e6, e3).unwrap();

    assert_eq!(
        assembly.descendants(e1).collect::<Vec<_>>(),
        [e2, e3, e4, e5, e6]
    );
    assert_eq!(assembly.descendants(e3).collect::<Vec<_>>(), [e4, e5, e6]);
    assert_eq!(assembly.descendants(e4).collect::<Vec<_>>(), [e5]);
    assert_eq!(assembly.descendants(e6).count(), 0);

    assert_eq!(assembly.children(e1).collect::<Vec<_>>(), [e2, e3]);
    assert_eq!(assembly.ancestors(e1).count(), 0);
    assert_eq!(assembly.ancestors(e2).collect::<Vec<_>>(), [e1]);
    assert_eq!(assembly.ancestors(e5).collect::<Vec<_>>(), [e4, e3, e1]);
}

#[test]
fn random_iteration() {
    let mut assembly = Assembly::new();

    let mut parts = vec![];
    for _ in 0..255 {
        parts.push(part(&mut assembly, ""));
    }

    let mut constructed = vec![];
    constructed.push(parts.pop().unwrap());

    let mut count = 0;
    for i in 0..254 {
        let idx = rand::random::<usize>() % parts.len();
        let pidx = rand::random::<usize>() % constructed.len();

        if pidx == 0 {
            count += 1;
        }

        assembly.set_parent(parts[idx], constructed[pidx]).unwrap();

        let len = assembly.descendants(constructed[0]).count();
        assert_eq!(len, i + 1);

        constructed.push(parts[idx]);
        parts.remove(idx);
    }

    assert_eq!(assembly.children(constructed[0]).count(), count);
    assert_eq!(assembly.descendants(constructed[0]).count(), 254);
}
