/// Configuration of [`ParserAdapter`](crate::ParserAdapter)
/// and [`SerializerAdapter`](crate::SerializerAdapter).
#[derive(Clone, Debug, Default)]
pub struct AdapterConfig {
    /// Whether synchronous backends run on the blocking thread pool of the runtime,
    /// rather than inline in the calling task.
    ///
    /// Offloaded backends require a multi-threaded runtime to run in parallel with other tasks.
    /// A panic of an offloaded backend is reported as an error.
    pub offload: bool,
}

impl AdapterConfig {
    /// Build the default configuration (synchronous backends run inline).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether synchronous backends are offloaded to the blocking thread pool.
    pub fn with_offload(mut self, offload: bool) -> Self {
        self.offload = offload;
        self
    }
}
