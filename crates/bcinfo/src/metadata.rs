//! The decoded result set.

use std::fmt;

/// Minimal floating-point precision a module requires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum FloatPrecision {
    #[default]
    Full = 0,
    Relaxed = 1,
}

impl FloatPrecision {
    /// Decode the on-disk value. Unknown values are `None`.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Full),
            1 => Some(Self::Relaxed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for FloatPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one extraction pass decodes.
///
/// Built whole by the extractor and never mutated afterwards; a later
/// extraction replaces it as a unit. The default value is the empty state
/// observed before extraction and after a failed one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub(crate) export_var_names: Vec<String>,
    pub(crate) export_func_names: Vec<String>,
    pub(crate) export_for_each_names: Vec<String>,
    pub(crate) export_for_each_signatures: Vec<u32>,
    pub(crate) pragma_keys: Vec<String>,
    pub(crate) pragma_values: Vec<String>,
    pub(crate) object_slots: Vec<u32>,
    pub(crate) compiler_version: u32,
    pub(crate) optimization_level: u32,
    pub(crate) float_precision: FloatPrecision,
    pub(crate) is_threadable: bool,
    pub(crate) build_checksum: Option<String>,
    pub(crate) has_debug_info: bool,
}

impl Default for ExtractedMetadata {
    fn default() -> Self {
        Self {
            export_var_names: Vec::new(),
            export_func_names: Vec::new(),
            export_for_each_names: Vec::new(),
            export_for_each_signatures: Vec::new(),
            pragma_keys: Vec::new(),
            pragma_values: Vec::new(),
            object_slots: Vec::new(),
            compiler_version: 0,
            optimization_level: 0,
            float_precision: FloatPrecision::Full,
            is_threadable: true,
            build_checksum: None,
            has_debug_info: false,
        }
    }
}

impl ExtractedMetadata {
    pub fn export_var_count(&self) -> usize {
        self.export_var_names.len()
    }

    pub fn export_var_names(&self) -> &[String] {
        &self.export_var_names
    }

    pub fn export_func_count(&self) -> usize {
        self.export_func_names.len()
    }

    pub fn export_func_names(&self) -> &[String] {
        &self.export_func_names
    }

    /// Number of foreach kernels. Names and signatures always agree on it.
    pub fn export_for_each_signature_count(&self) -> usize {
        self.export_for_each_signatures.len()
    }

    pub fn export_for_each_names(&self) -> &[String] {
        &self.export_for_each_names
    }

    /// Raw signatures, upper bits preserved as declared.
    pub fn export_for_each_signatures(&self) -> &[u32] {
        &self.export_for_each_signatures
    }

    /// Kernels as (name, signature) pairs.
    pub fn export_for_each(&self) -> impl Iterator<Item = (&str, u32)> {
        self.export_for_each_names
            .iter()
            .map(String::as_str)
            .zip(self.export_for_each_signatures.iter().copied())
    }

    pub fn pragma_count(&self) -> usize {
        self.pragma_keys.len()
    }

    pub fn pragma_keys(&self) -> &[String] {
        &self.pragma_keys
    }

    pub fn pragma_values(&self) -> &[String] {
        &self.pragma_values
    }

    /// Pragmas as (key, value) pairs in declaration order, duplicates kept.
    pub fn pragmas(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pragma_keys
            .iter()
            .map(String::as_str)
            .zip(self.pragma_values.iter().map(String::as_str))
    }

    pub fn object_slot_count(&self) -> usize {
        self.object_slots.len()
    }

    /// Object slots the driver must release on teardown.
    pub fn object_slots(&self) -> &[u32] {
        &self.object_slots
    }

    pub fn compiler_version(&self) -> u32 {
        self.compiler_version
    }

    pub fn optimization_level(&self) -> u32 {
        self.optimization_level
    }

    pub fn float_precision(&self) -> FloatPrecision {
        self.float_precision
    }

    pub fn is_threadable(&self) -> bool {
        self.is_threadable
    }

    pub fn build_checksum(&self) -> Option<&str> {
        self.build_checksum.as_deref()
    }

    pub fn has_debug_info(&self) -> bool {
        self.has_debug_info
    }
}
