//! The extraction orchestrator.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use bcinfo_ir::{LoadConfig, MetadataSource, Module, ModuleError};
use log::{debug, warn};

use crate::constants::{
    BUILD_CHECKSUM_METADATA, COMPILER_VERSION_METADATA, DEBUG_INFO_METADATA,
    EXPORT_FOREACH_METADATA, EXPORT_FOREACH_NAME_METADATA, EXPORT_FUNC_METADATA,
    EXPORT_VAR_METADATA, FLOAT_PRECISION_METADATA, OBJECT_SLOT_METADATA,
    OPTIMIZATION_LEVEL_METADATA, PRAGMA_METADATA, THREADABLE_METADATA,
};
use crate::decode;
use crate::error::ExtractError;
use crate::metadata::{ExtractedMetadata, FloatPrecision};

/// How the extractor holds its module.
///
/// `Owned` modules are private to the extractor and dropped with it.
/// `Borrowed` modules belong to the caller, who must keep them alive and
/// unmodified for the extractor's lifetime; the borrow checker enforces both.
pub enum ModuleHandle<'m, M: ?Sized> {
    Owned(Box<M>),
    Borrowed(&'m M),
}

impl<M: ?Sized> ModuleHandle<'_, M> {
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl<M: ?Sized> Deref for ModuleHandle<'_, M> {
    type Target = M;

    fn deref(&self) -> &M {
        match self {
            Self::Owned(module) => module,
            Self::Borrowed(module) => module,
        }
    }
}

/// Reads the reserved metadata tables of a module.
///
/// Construction only establishes access to the module. [`extract`](Self::extract)
/// decodes every table, checks them against each other, and commits the
/// result as a unit; accessors read the committed result and report the
/// empty default before a successful extraction or after a failed one.
pub struct MetadataExtractor<'m, M: MetadataSource + ?Sized = Module> {
    module: Result<ModuleHandle<'m, M>, Arc<ModuleError>>,
    metadata: ExtractedMetadata,
}

impl MetadataExtractor<'static, Module> {
    /// Load a module from container bytes. The extractor owns the result.
    ///
    /// A buffer that fails to load leaves an extractor whose extraction fails.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_bytes_with(bytes, &LoadConfig::default())
    }

    /// Like [`from_bytes`](Self::from_bytes) with explicit loader settings.
    pub fn from_bytes_with(bytes: &[u8], config: &LoadConfig) -> Self {
        let module = Module::from_bytes_with(bytes, config)
            .map(|module| ModuleHandle::Owned(Box::new(module)))
            .map_err(Arc::new);
        if let Err(err) = &module {
            warn!("failed to load module ({} bytes): {err}", bytes.len());
        }
        Self {
            module,
            metadata: ExtractedMetadata::default(),
        }
    }
}

impl<'m, M: MetadataSource + ?Sized> MetadataExtractor<'m, M> {
    pub fn new(module: ModuleHandle<'m, M>) -> Self {
        Self {
            module: Ok(module),
            metadata: ExtractedMetadata::default(),
        }
    }

    /// Borrow a caller-owned module.
    pub fn from_module(module: &'m M) -> Self {
        Self::new(ModuleHandle::Borrowed(module))
    }

    /// Take ownership of an already-parsed module.
    pub fn from_boxed(module: Box<M>) -> Self {
        Self::new(ModuleHandle::Owned(module))
    }

    /// The module, unless loading it failed.
    pub fn module(&self) -> Option<&M> {
        self.module.as_ref().ok().map(|handle| &**handle)
    }

    /// Whether the module is owned (and released) by this extractor.
    pub fn owns_module(&self) -> bool {
        self.module.as_ref().is_ok_and(ModuleHandle::is_owned)
    }

    /// Run the extraction. Returns `true` on success.
    ///
    /// On failure every category reverts to its empty default. Calling it
    /// again on an unchanged module yields the same result.
    pub fn extract(&mut self) -> bool {
        self.try_extract().is_ok()
    }

    /// Run the extraction, reporting why it failed.
    pub fn try_extract(&mut self) -> Result<(), ExtractError> {
        let decoded = match &self.module {
            Ok(module) => decode_module(&**module),
            Err(err) => Err(ExtractError::Load(Arc::clone(err))),
        };

        match decoded {
            Ok(metadata) => {
                debug!(
                    "extracted metadata: {} vars, {} funcs, {} foreach, {} pragmas, {} object slots",
                    metadata.export_var_count(),
                    metadata.export_func_count(),
                    metadata.export_for_each_signature_count(),
                    metadata.pragma_count(),
                    metadata.object_slot_count(),
                );
                self.metadata = metadata;
                Ok(())
            }
            Err(err) => {
                warn!("metadata extraction failed: {err}");
                self.metadata = ExtractedMetadata::default();
                Err(err)
            }
        }
    }

    /// The committed result.
    pub fn metadata(&self) -> &ExtractedMetadata {
        &self.metadata
    }

    pub fn export_var_count(&self) -> usize {
        self.metadata.export_var_count()
    }

    pub fn export_var_names(&self) -> &[String] {
        self.metadata.export_var_names()
    }

    pub fn export_func_count(&self) -> usize {
        self.metadata.export_func_count()
    }

    pub fn export_func_names(&self) -> &[String] {
        self.metadata.export_func_names()
    }

    pub fn export_for_each_signature_count(&self) -> usize {
        self.metadata.export_for_each_signature_count()
    }

    pub fn export_for_each_names(&self) -> &[String] {
        self.metadata.export_for_each_names()
    }

    pub fn export_for_each_signatures(&self) -> &[u32] {
        self.metadata.export_for_each_signatures()
    }

    pub fn pragma_count(&self) -> usize {
        self.metadata.pragma_count()
    }

    pub fn pragma_keys(&self) -> &[String] {
        self.metadata.pragma_keys()
    }

    pub fn pragma_values(&self) -> &[String] {
        self.metadata.pragma_values()
    }

    pub fn pragmas(&self) -> impl Iterator<Item = (&str, &str)> {
        self.metadata.pragmas()
    }

    pub fn object_slot_count(&self) -> usize {
        self.metadata.object_slot_count()
    }

    pub fn object_slots(&self) -> &[u32] {
        self.metadata.object_slots()
    }

    pub fn compiler_version(&self) -> u32 {
        self.metadata.compiler_version()
    }

    pub fn optimization_level(&self) -> u32 {
        self.metadata.optimization_level()
    }

    pub fn float_precision(&self) -> FloatPrecision {
        self.metadata.float_precision()
    }

    pub fn is_threadable(&self) -> bool {
        self.metadata.is_threadable()
    }

    pub fn build_checksum(&self) -> Option<&str> {
        self.metadata.build_checksum()
    }

    pub fn has_debug_info(&self) -> bool {
        self.metadata.has_debug_info()
    }
}

impl<M: MetadataSource + ?Sized> fmt::Debug for MetadataExtractor<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataExtractor")
            .field("loaded", &self.module.is_ok())
            .field("owned", &self.owns_module())
            .field("metadata", &self.metadata)
            .finish()
    }
}

/// Decode every reserved table into a fresh result.
fn decode_module<M>(module: &M) -> Result<ExtractedMetadata, ExtractError>
where
    M: MetadataSource + ?Sized,
{
    let table = |name: &str| module.named_metadata(name);

    let compiler_version = decode::scalar_u32(table(COMPILER_VERSION_METADATA))?;
    let optimization_level = decode::scalar_u32(table(OPTIMIZATION_LEVEL_METADATA))?;
    let float_precision = decode::float_precision(table(FLOAT_PRECISION_METADATA))?;

    let export_var_names = decode::string_list(table(EXPORT_VAR_METADATA))?;
    let export_func_names = decode::string_list(table(EXPORT_FUNC_METADATA))?;
    let (export_for_each_names, export_for_each_signatures) = decode::for_each(
        table(EXPORT_FOREACH_NAME_METADATA),
        table(EXPORT_FOREACH_METADATA),
    )?;
    let (pragma_keys, pragma_values) = decode::pragmas(table(PRAGMA_METADATA))?;
    let object_slots = decode::integer_list(table(OBJECT_SLOT_METADATA))?;

    let is_threadable = decode::threadable(table(THREADABLE_METADATA));
    let build_checksum = decode::build_checksum(table(BUILD_CHECKSUM_METADATA));
    let has_debug_info = decode::has_rows(table(DEBUG_INFO_METADATA));

    Ok(ExtractedMetadata {
        export_var_names,
        export_func_names,
        export_for_each_names,
        export_for_each_signatures,
        pragma_keys,
        pragma_values,
        object_slots,
        compiler_version,
        optimization_level,
        float_precision,
        is_threadable,
        build_checksum,
        has_debug_info,
    })
}
