//! Name command implementation.

use tokensmith_canonical::CanonicalName;

pub fn run(raw: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    for name in raw {
        let canonical = CanonicalName::derive(&name)
            .ok_or_else(|| format!("'{}' has no canonical name", name))?;
        println!("{}", canonical);
    }
    Ok(())
}
