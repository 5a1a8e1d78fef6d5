//! Quark runtime - merges compiled style objects into class name strings.
//!
//! The compiler bakes cascade precedence into stylesheet order, so merging
//! only has to decide which class wins each property key.

pub mod error;
pub mod merge;
pub mod style_object;

pub use error::MergeInputError;
pub use merge::{merge, merge_json, MergeInput, MergeResult, Skip};
pub use style_object::{CompiledStyleObject, CSS_MARKER};

/// Merge any number of arguments convertible into [`MergeInput`] and return
/// the space-joined class names.
///
/// ```
/// use quark_runtime::{props, CompiledStyleObject, Skip};
///
/// let base: CompiledStyleObject = [("color", Some("x1e2nbdu"))].into_iter().collect();
/// let reset: CompiledStyleObject = [("color", None::<&str>)].into_iter().collect();
///
/// assert_eq!(props!(&base), "x1e2nbdu");
/// assert_eq!(props!(&base, Skip::False, &reset), "");
/// ```
#[macro_export]
macro_rules! props {
    ($($input:expr),* $(,)?) => {
        $crate::merge(&[$($crate::MergeInput::from($input)),*]).to_string()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_macro_with_conditional_style() {
        let base: CompiledStyleObject =
            [("display", Some("x78zum5")), ("color", Some("x1e2nbdu"))].into_iter().collect();
        let active: CompiledStyleObject = [("color", Some("x1heor9g"))].into_iter().collect();

        let is_active = true;
        let class_name = props!(&base, is_active.then_some(&active));
        assert_eq!(class_name, "x1heor9g x78zum5");

        let is_active = false;
        let class_name = props!(&base, is_active.then_some(&active));
        assert_eq!(class_name, "x1e2nbdu x78zum5");
    }

    #[test]
    fn test_props_macro_empty() {
        assert_eq!(props!(), "");
    }
}
