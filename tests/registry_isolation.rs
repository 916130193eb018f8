//! Integration tests for isolated sentinel registries.
//!
//! Each `define_sentinels!` registry owns its markers. Equal flavors in two
//! registries produce two different sentinels.

use nada_sentinel::{define_sentinels, get_or_create, Error};

#[test]
fn test_multiple_isolated_registries() {
    define_sentinels!(lexer);
    define_sentinels!(parser);
    define_sentinels!(codegen);

    let a = lexer::get_or_create("end");
    let b = parser::get_or_create("end");
    let c = codegen::get_or_create("end");

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);

    // Each registry keeps returning its own marker
    assert_eq!(lexer::get_or_create("end"), a);
    assert_eq!(parser::get_or_create("end"), b);
    assert_eq!(codegen::get_or_create("end"), c);
}

#[test]
fn test_isolated_registry_differs_from_global() {
    define_sentinels!(private);

    let local = private::get_or_create("isolation-global");
    let global = get_or_create("isolation-global");

    assert_ne!(local, global);
    assert_eq!(local.flavor(), global.flavor());
}

#[test]
fn test_registry_does_not_leak_between_instances() {
    define_sentinels!(isolated_a);
    define_sentinels!(isolated_b);

    isolated_a::get_or_create(String::from("only in A"));

    assert!(isolated_a::contains(&String::from("only in A")));
    assert!(!isolated_b::contains(&String::from("only in A")));

    let result = isolated_b::lookup(&String::from("only in A"));
    assert_eq!(
        result.unwrap_err(),
        Error::FlavorNotFound {
            type_name: "alloc::string::String"
        }
    );
}

#[test]
fn test_flavor_counts_are_per_registry() {
    define_sentinels!(count_a);
    define_sentinels!(count_b);

    count_a::get_or_create(1u64);
    count_a::get_or_create(2u64);
    count_a::get_or_create(2u64);
    count_b::get_or_create(9u64);

    assert_eq!(count_a::flavor_count::<u64>(), 2);
    assert_eq!(count_b::flavor_count::<u64>(), 1);
    assert_eq!(count_b::flavor_count::<u32>(), 0);
}

#[test]
fn test_multiple_flavor_types_in_one_registry() {
    define_sentinels!(mixed);

    #[derive(Debug, PartialEq, Eq, Hash)]
    enum Slot {
        Unset,
        Deleted,
    }

    let unset = mixed::get_or_create(Slot::Unset);
    let deleted = mixed::get_or_create(Slot::Deleted);
    let by_name = mixed::get_or_create("unset");
    let by_number = mixed::get_or_create(0u8);

    assert_ne!(unset, deleted);
    assert_ne!(unset.id(), by_name.id());
    assert_ne!(by_name.id(), by_number.id());
    assert_eq!(mixed::flavor_count::<Slot>(), 2);
    assert_eq!(mixed::flavor_count::<&str>(), 1);
}
