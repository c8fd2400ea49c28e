use constructable_core::{Constructable, Descriptor, Registry};
use std::io::{self, Write};

/// The fixed confirmation printed by every demo instance.
pub const SIGNAL: &str = "OK";

/// The one operation a produced instance exposes, and the erased interface
/// the demo registry produces.
pub trait Signal {
    /// Write the confirmation signal to `out`.
    fn signal(&mut self, out: &mut dyn Write) -> io::Result<()>;
    /// How many times this instance has signaled.
    fn signals_sent(&self) -> u32;
}

/// Demo class that declares an explicit constructor.
#[derive(Debug)]
pub struct WithNew {
    signals_sent: u32,
}

impl WithNew {
    pub fn new() -> WithNew {
        WithNew { signals_sent: 0 }
    }
}

impl Constructable for WithNew {
    fn construct() -> Self {
        WithNew::new()
    }
}

impl Signal for WithNew {
    fn signal(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.signals_sent += 1;
        writeln!(out, "{}", SIGNAL)
    }

    fn signals_sent(&self) -> u32 {
        self.signals_sent
    }
}

/// Demo class without one; the derived default is its implicit constructor.
/// Both classes are equally constructable, which is the whole demonstration.
#[derive(Debug, Default)]
pub struct Plain {
    signals_sent: u32,
}

impl Constructable for Plain {
    fn construct() -> Self {
        Plain::default()
    }
}

impl Signal for Plain {
    fn signal(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.signals_sent += 1;
        writeln!(out, "{}", SIGNAL)
    }

    fn signals_sent(&self) -> u32 {
        self.signals_sent
    }
}

/// Both demo classes, registered under their class names.
pub fn registry() -> Registry<dyn Signal> {
    let mut registry: Registry<dyn Signal> = Registry::new();
    registry.register(Descriptor::new(
        "WithNew",
        std::any::type_name::<WithNew>(),
        || Box::new(WithNew::construct()),
    ));
    registry.register(Descriptor::new(
        "Plain",
        std::any::type_name::<Plain>(),
        || Box::new(Plain::construct()),
    ));
    registry
}
