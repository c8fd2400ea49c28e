/// A class that can be invoked with `new` to produce an instance of itself.
///
/// Object languages spell this in several equivalent ways (a construct
/// signature `{ new(): T }`, a constructor type literal `new() => T`, a
/// utility interface over them). All of those collapse here to one trait:
/// the implementing type is its own descriptor, and `construct` is the one
/// operation a descriptor supports.
pub trait Constructable: Sized {
    /// Build a fresh, fully initialized instance.
    fn construct() -> Self;
}

/// The generic factory: given a constructable class `T`, produce a new `T`.
///
/// Passing a type that is not constructable is rejected at compile time by
/// the trait bound; there is no runtime failure path on this surface.
pub fn create<T: Constructable>() -> T {
    T::construct()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        count: u32,
    }

    impl Constructable for Counter {
        fn construct() -> Self {
            Counter { count: 0 }
        }
    }

    #[test]
    fn test_create_returns_fresh_instances() {
        let mut a: Counter = create();
        let b: Counter = create();
        a.count += 1;
        assert_eq!(a.count, 1);
        assert_eq!(b.count, 0);
    }
}
