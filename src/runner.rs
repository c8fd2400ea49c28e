use crate::demo::{self, Plain, Signal, WithNew};
use anyhow::Result;
use constructable_core::create;
use std::io::{self, Write};

/// Construct each demo class through every factory path, emitting one
/// signal per produced instance.
pub fn demo() -> Result<()> {
    run_demo(&mut io::stdout())
}

/// Body of the `demo` command; writes to `out` instead of stdout so tests
/// can capture the output.
pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut a: WithNew = create();
    log::debug!("constructed WithNew with the generic factory");
    a.signal(&mut *out)?;

    let mut b: Plain = create();
    log::debug!("constructed Plain with the generic factory");
    b.signal(&mut *out)?;

    let registry = demo::registry();
    log::debug!("built demo registry ({} descriptors)", registry.len());
    let mut c = registry.construct("WithNew")?;
    c.signal(&mut *out)?;
    let mut d = registry.construct("Plain")?;
    d.signal(&mut *out)?;
    Ok(())
}

/// Construct one registered class by name and invoke its signal.
pub fn construct(name: &str) -> Result<()> {
    let registry = demo::registry();
    let mut instance = registry.construct(name)?;
    log::debug!("constructed {}", name);
    instance.signal(&mut io::stdout())?;
    Ok(())
}

/// Print the registered descriptors as JSON.
pub fn list() -> Result<()> {
    let registry = demo::registry();
    let json = serde_json::to_string_pretty(&registry.info())?;
    println!("{}", json);
    Ok(())
}
