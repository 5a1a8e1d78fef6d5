//! Quark compiler - atomic CSS from declarative style definitions
//!
//! Values are normalized, classified into a cascade priority, hashed into a
//! class name and emitted once per build through a shared [`BuildStore`].

pub mod compiler;
pub mod emitter;
pub mod error;
pub mod hash;
pub mod input;
pub mod normalizer;
pub mod options;
pub mod priority;
pub mod properties;
pub mod store;

pub use compiler::{CompiledModule, Compiler};
pub use emitter::{AtomicClass, Declaration, NormalizedKeyframes};
pub use error::{CompileError, CompileResult, InputError, IntegrityError, NormalizationError};
pub use input::{
    KeyframesDef, Namespace, RawValue, Scalar, SelectorContext, StyleEntry, StyleProperty,
    StyleSheetInput, StyleValue,
};
pub use normalizer::{normalize, normalize_with_options, NormalizedValue};
pub use options::CompilerOptions;
pub use priority::{classify, Priority};
pub use store::{BuildStore, InjectedRule, Stylesheet};

pub use quark_runtime::CompiledStyleObject;
