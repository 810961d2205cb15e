use crate::validate::Capability;
use thiserror::Error as ThisError;

///
/// DslError
///
/// Every failure the builder layer can raise. All variants are raised
/// synchronously at the offending call site and propagate to the caller;
/// nothing is caught or suppressed internally. A node either serializes
/// fully or returns an error before producing any output.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DslError {
    /// A dynamic argument does not conform to the expected node family.
    #[error("Argument must be an instance of {expected}")]
    NotAnInstance { expected: Capability },

    /// A token outside a closed enumeration was supplied for a parameter.
    #[error("The '{param}' parameter should belong to {allowed}; got '{got}' (see {reference})")]
    InvalidEnumValue {
        param: &'static str,
        allowed: &'static str,
        got: String,
        reference: &'static str,
    },

    /// A field the wire shape requires was never set on the node.
    #[error("'{field}' is required for {node}")]
    MissingRequired {
        node: &'static str,
        field: &'static str,
    },
}

impl DslError {
    /// Shorthand used by serialization paths that discover an unset
    /// required field.
    #[must_use]
    pub(crate) const fn required(node: &'static str, field: &'static str) -> Self {
        Self::MissingRequired { node, field }
    }
}
