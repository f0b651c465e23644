use std::fmt::Display;

/// A single symbol taken from a map file.
/// The address is kept as the hex text found in the map, it is never parsed.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct SymbolRecord {
    pub name: String,
    pub address: String,
}

impl SymbolRecord {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// openMSX debugger syntax: `<name>: equ <address>H`
impl Display for SymbolRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: equ {}H", self.name, self.address)
    }
}
