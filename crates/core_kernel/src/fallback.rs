//! Ordered "first non-empty wins" resolution
//!
//! Due dates and price lists are both resolved by trying a fixed sequence of
//! sources and stopping at the first one that yields a value. A
//! [`FallbackChain`] holds those sources as closures and evaluates them in
//! order; sources after the winning one are never called.
//!
//! ```rust
//! use core_kernel::fallback::FallbackChain;
//!
//! let resolved = FallbackChain::<u32, ()>::new()
//!     .then("account", || Ok(None))
//!     .then("party", || Ok(Some(5)))
//!     .then("company", || panic!("never consulted"))
//!     .resolve()
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(resolved.value, 5);
//! assert_eq!(resolved.source, "party");
//! ```

use tracing::trace;

type Source<'a, T, E> = Box<dyn FnOnce() -> Result<Option<T>, E> + 'a>;

/// A value together with the label of the source that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: &'static str,
}

/// An ordered list of lazily evaluated resolution sources
pub struct FallbackChain<'a, T, E> {
    sources: Vec<(&'static str, Source<'a, T, E>)>,
}

impl<'a, T, E> FallbackChain<'a, T, E> {
    /// Creates an empty chain
    pub fn new() -> Self {
        Self { sources: Vec::new() }
    }

    /// Appends a source; it runs only if every earlier source came up empty
    pub fn then(
        mut self,
        label: &'static str,
        source: impl FnOnce() -> Result<Option<T>, E> + 'a,
    ) -> Self {
        self.sources.push((label, Box::new(source)));
        self
    }

    /// Appends a source only when `condition` holds
    pub fn then_if(
        self,
        condition: bool,
        label: &'static str,
        source: impl FnOnce() -> Result<Option<T>, E> + 'a,
    ) -> Self {
        if condition {
            self.then(label, source)
        } else {
            self
        }
    }

    /// Evaluates the sources in order and returns the first value found
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a source; later sources are not run.
    pub fn resolve(self) -> Result<Option<Resolved<T>>, E> {
        for (label, source) in self.sources {
            if let Some(value) = source()? {
                trace!(source = label, "fallback source resolved");
                return Ok(Some(Resolved { value, source: label }));
            }
            trace!(source = label, "fallback source empty");
        }
        Ok(None)
    }
}

impl<T, E> Default for FallbackChain<'_, T, E> {
    fn default() -> Self {
        Self::new()
    }
}
