// Registration, alias bookkeeping and entry removal

use std::cell::RefCell;
use std::rc::Rc;

use vislist::list::SeqList;
use vislist::shadow::Registry;

type Handle = Rc<RefCell<SeqList<i32>>>;

fn handle(values: &[i32]) -> Handle {
    Rc::new(RefCell::new(values.iter().copied().collect()))
}

#[test]
fn registering_copies_the_current_contents() {
    let list = handle(&[1, 2, 3]);
    let mut registry = Registry::new();

    let ordinal = registry.register(&list, "numbers");

    assert_eq!(ordinal, Some(0));
    let entry = registry.get(0).expect("entry");
    assert_eq!(entry.mirror(), &[1, 2, 3]);
    assert_eq!(entry.cursor(), None);
    assert_eq!(entry.names(), ["numbers"]);
}

#[test]
fn registering_a_known_list_adds_an_alias_instead_of_an_entry() {
    let list = handle(&[1]);
    let mut registry = Registry::new();

    registry.register(&list, "numbers");
    let ordinal = registry.register(&list, "same_numbers");

    assert_eq!(ordinal, Some(0));
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.get(0).unwrap().names(),
        ["numbers", "same_numbers"]
    );
}

#[test]
fn re_registering_an_alias_is_idempotent() {
    let list = handle(&[]);
    let mut registry = Registry::new();

    registry.register(&list, "numbers");
    registry.register(&list, "numbers");

    assert_eq!(registry.get(0).unwrap().names(), ["numbers"]);
}

#[test]
fn an_alias_claimed_by_another_list_is_declined() {
    let first = handle(&[1]);
    let second = handle(&[2]);
    let mut registry = Registry::new();

    registry.register(&first, "shared");
    assert_eq!(registry.register(&second, "shared"), None);
    assert_eq!(registry.len(), 1);

    // a fresh alias still works afterwards
    assert_eq!(registry.register(&second, "own"), Some(1));
    assert_eq!(registry.len(), 2);
}

#[test]
fn an_empty_alias_is_declined() {
    let list = handle(&[1]);
    let mut registry = Registry::new();

    assert_eq!(registry.register(&list, ""), None);
    assert!(registry.is_empty());
}

#[test]
fn unregistering_compacts_and_frees_the_aliases() {
    let a = handle(&[1]);
    let b = handle(&[2]);
    let c = handle(&[3]);
    let mut registry = Registry::new();
    registry.register(&a, "a");
    registry.register(&b, "b");
    registry.register(&c, "c");

    registry.unregister(&b);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.find(&a), Some(0));
    assert_eq!(registry.find(&c), Some(1));
    assert_eq!(registry.find(&b), None);

    // the removed entry's alias may be claimed again
    let d = handle(&[4]);
    assert_eq!(registry.register(&d, "b"), Some(2));
}

#[test]
fn unregistering_an_unknown_list_is_silent() {
    let known = handle(&[1]);
    let stranger = handle(&[2]);
    let mut registry = Registry::new();
    registry.register(&known, "known");

    registry.unregister(&stranger);

    assert_eq!(registry.len(), 1);
}

#[test]
fn identity_is_by_handle_not_by_contents() {
    let a = handle(&[1, 2]);
    let twin = handle(&[1, 2]);
    let mut registry = Registry::new();

    registry.register(&a, "a");

    assert_eq!(registry.find(&twin), None);
    assert_eq!(registry.register(&twin, "twin"), Some(1));
    assert_eq!(registry.len(), 2);
}
