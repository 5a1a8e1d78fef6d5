use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    #[error("Invalid style JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A value that doesn't fit its property's grammar. Reported per
/// declaration; the declaration is skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizationError {
    #[error("Unknown unit '{unit}' in '{value}' for property '{property}'")]
    UnknownUnit {
        property: String,
        value: String,
        unit: String,
    },

    #[error("Rule contains an unclosed function: '{value}' for property '{property}'")]
    UnclosedFunction { property: String, value: String },

    #[error("Unexpected ')' in '{value}' for property '{property}'")]
    UnbalancedParenthesis { property: String, value: String },

    #[error("Unexpected input at {pos} in '{value}' for property '{property}'")]
    UnexpectedInput {
        property: String,
        value: String,
        pos: usize,
    },

    #[error("Property '{property}' expects a number, found '{value}'")]
    ExpectedNumber { property: String, value: String },

    #[error("Empty value for property '{property}'")]
    EmptyValue { property: String },

    #[error("Number for property '{property}' is not finite")]
    NonFiniteNumber { property: String },

    #[error("Invalid keyframes selector '{selector}'")]
    InvalidKeyframeSelector { selector: String },
}

impl NormalizationError {
    pub fn unknown_unit(property: &str, value: &str, unit: &str) -> Self {
        Self::UnknownUnit {
            property: property.to_string(),
            value: value.to_string(),
            unit: unit.to_string(),
        }
    }

    pub fn unclosed_function(property: &str, value: &str) -> Self {
        Self::UnclosedFunction {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    pub fn unbalanced_parenthesis(property: &str, value: &str) -> Self {
        Self::UnbalancedParenthesis {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    pub fn unexpected_input(property: &str, value: &str, pos: usize) -> Self {
        Self::UnexpectedInput {
            property: property.to_string(),
            value: value.to_string(),
            pos,
        }
    }

    pub fn expected_number(property: &str, value: &str) -> Self {
        Self::ExpectedNumber {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    /// Property the failing value belonged to, if any
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::UnknownUnit { property, .. }
            | Self::UnclosedFunction { property, .. }
            | Self::UnbalancedParenthesis { property, .. }
            | Self::UnexpectedInput { property, .. }
            | Self::ExpectedNumber { property, .. }
            | Self::EmptyValue { property }
            | Self::NonFiniteNumber { property } => Some(property),
            Self::InvalidKeyframeSelector { .. } => None,
        }
    }
}

/// The build store no longer maps declarations to class names one to one.
/// Fatal: output determinism can't be guaranteed past this point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("Class name '{class_name}' was generated for two different declarations: {existing} and {incoming}")]
    HashCollision {
        class_name: String,
        existing: String,
        incoming: String,
    },

    #[error("Declaration {declaration} produced two different rules for '{class_name}': {existing} and {incoming}")]
    RuleMismatch {
        class_name: String,
        declaration: String,
        existing: String,
        incoming: String,
    },
}

/// Style input that isn't shaped like a style definition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("A style sheet must be an object of namespaces.")]
    NonObjectStyleSheet,

    #[error("A namespace must be an object: '{namespace}'")]
    IllegalNamespaceValue { namespace: String },

    #[error("Pseudo objects can't be nested: '{key}' inside '{parent}'")]
    IllegalNestedPseudo { parent: String, key: String },

    #[error("Invalid pseudo selector, not on the whitelist: '{pseudo}'")]
    InvalidPseudo { pseudo: String },

    #[error("A style value can only contain an array, string, number or null: '{key}'")]
    IllegalPropValue { key: String },

    #[error("A style array value can only contain strings or numbers: '{key}'")]
    IllegalPropArrayValue { key: String },

    #[error("Keyframes step '{step}' must be an object of properties")]
    IllegalKeyframesStep { step: String },
}
