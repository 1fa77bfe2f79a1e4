//! Text transformation pipeline for transcript cleaning.
//!
//! This module provides the [`Transform`] trait and [`TransformChain`] for
//! applying in-place rewrites to transcript text. Each cleaning stage
//! (control-sequence stripping, line reconstruction) is a transform, and the
//! default cleaning pipeline is simply a chain of them.
//!
//! # Design Principles
//!
//! - **In-place mutation**: Transforms rewrite the `String` they are given,
//!   so a chain never holds more than one copy of the transcript alive
//! - **Stateful transforms**: The `&mut self` receiver lets transforms keep
//!   statistics across calls (e.g., how many sequences were stripped)
//! - **Composable**: Multiple transforms can be chained together
//!
//! # Example
//!
//! ```
//! use scriptlog::transcript::{Transform, TransformChain};
//!
//! /// Upper-cases everything.
//! struct Shout;
//!
//! impl Transform for Shout {
//!     fn transform(&mut self, text: &mut String) {
//!         *text = text.to_uppercase();
//!     }
//! }
//!
//! /// Drops trailing whitespace.
//! struct TrimEnd;
//!
//! impl Transform for TrimEnd {
//!     fn transform(&mut self, text: &mut String) {
//!         let len = text.trim_end().len();
//!         text.truncate(len);
//!     }
//! }
//!
//! let mut chain = TransformChain::new().with(Shout).with(TrimEnd);
//! let mut text = String::from("echo hi   ");
//! chain.transform(&mut text);
//! assert_eq!(text, "ECHO HI");
//! ```

/// A transformation that rewrites transcript text in place.
///
/// # Infallibility
///
/// Transforms are infallible (`()` return type). Input a transform does not
/// recognize is passed through unchanged rather than reported.
pub trait Transform {
    /// Apply this transformation to the text.
    fn transform(&mut self, text: &mut String);
}

/// A chain of transforms applied in sequence.
///
/// Each transform sees the result of the previous transforms in the chain.
pub struct TransformChain {
    transforms: Vec<Box<dyn Transform + Send>>,
}

impl TransformChain {
    /// Create an empty transform chain.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the end of the chain.
    ///
    /// Returns self for method chaining.
    pub fn with<T: Transform + Send + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Check if the chain has no transforms.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Get the number of transforms in the chain.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }
}

impl Default for TransformChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for TransformChain {
    /// Apply all transforms in sequence.
    fn transform(&mut self, text: &mut String) {
        for transform in &mut self.transforms {
            transform.transform(text);
        }
    }
}
