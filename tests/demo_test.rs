use constructable::demo::{self, Plain, Signal, WithNew};
use constructable::runner;
use constructable_core::{create, ErrorDetails};

#[test]
fn test_demo_prints_ok_once_per_construction() -> Result<(), Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    runner::run_demo(&mut out)?;
    assert_eq!(String::from_utf8(out)?, "OK\nOK\nOK\nOK\n");
    Ok(())
}

#[test]
fn test_factory_instances_are_independent() {
    let mut a: Plain = create();
    let b: Plain = create();
    let mut sink = Vec::new();
    a.signal(&mut sink).unwrap();
    a.signal(&mut sink).unwrap();
    assert_eq!(a.signals_sent(), 2);
    assert_eq!(b.signals_sent(), 0);
}

#[test]
fn test_explicit_and_implicit_constructors_are_equivalent() {
    let mut out = Vec::new();
    let mut with_new: WithNew = create();
    let mut plain: Plain = create();
    with_new.signal(&mut out).unwrap();
    plain.signal(&mut out).unwrap();
    assert_eq!(out, b"OK\nOK\n");
}

#[test]
fn test_registry_constructs_by_name() {
    let registry = demo::registry();
    let mut out = Vec::new();
    for name in ["WithNew", "Plain"] {
        let mut instance = registry.construct(name).unwrap();
        instance.signal(&mut out).unwrap();
        assert_eq!(instance.signals_sent(), 1);
    }
    assert_eq!(out, b"OK\nOK\n");
}

#[test]
fn test_unknown_class_is_rejected_without_a_signal() {
    let registry = demo::registry();
    match registry.construct("NoSuchClass") {
        Ok(_) => panic!("expected InvalidDescriptor"),
        Err(err) => {
            assert_eq!(err.details, ErrorDetails::InvalidDescriptor);
            assert!(err.msg.contains("NoSuchClass"));
        }
    }
}

#[test]
fn test_descriptor_listing() {
    let registry = demo::registry();
    let info = registry.info();
    assert_eq!(info.len(), 2);
    assert_eq!(info[0].name, "Plain");
    assert_eq!(info[1].name, "WithNew");
    assert!(info[0].produces.ends_with("Plain"));
}
