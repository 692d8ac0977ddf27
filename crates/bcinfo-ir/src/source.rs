//! The named-table lookup capability.

use crate::operand::NamedMetadata;

/// Anything offering lookup of named metadata tables.
///
/// A missing table is `None`; absence is a valid state, not an error.
/// Implemented by [`Module`](crate::Module), and by adapters over other IR
/// object models or test doubles.
pub trait MetadataSource {
    fn named_metadata(&self, name: &str) -> Option<NamedMetadata<'_>>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    fn named_metadata(&self, name: &str) -> Option<NamedMetadata<'_>> {
        (**self).named_metadata(name)
    }
}

impl<T: MetadataSource + ?Sized> MetadataSource for Box<T> {
    fn named_metadata(&self, name: &str) -> Option<NamedMetadata<'_>> {
        (**self).named_metadata(name)
    }
}
