//! Code module descriptors.

use std::fmt;

use super::Address;

/// Name and build identifier of a code module (library or executable).
///
/// This is the key a symbol supplier uses to find the symbol table for a
/// module. Neither field is validated; they are stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleDescriptor
{
    name: String,
    identifier: String,
}

impl ModuleDescriptor
{
    /// Create a descriptor from a module name and build identifier.
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self
    {
        Self {
            name: name.into(),
            identifier: identifier.into(),
        }
    }

    /// Module file name, e.g. `libfoo.so`.
    pub fn name(&self) -> &str
    {
        &self.name
    }

    /// Build identifier (debug id / build-id) of the module.
    pub fn identifier(&self) -> &str
    {
        &self.identifier
    }
}

impl fmt::Display for ModuleDescriptor
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{} ({})", self.name, self.identifier)
    }
}

/// A module together with the address it was loaded at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleContext
{
    /// The module itself.
    pub module: ModuleDescriptor,
    /// Runtime load address of the module.
    pub base: Address,
}

impl ModuleContext
{
    /// Build a context from its parts.
    pub fn new(module: ModuleDescriptor, base: Address) -> Self
    {
        Self { module, base }
    }
}
