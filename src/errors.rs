//! Errors
//!
//! Custom error types used throughout the `catree` crate.
use thiserror::Error;

/// Broad class an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Attribute sets or labels that disagree with the active schema.
    Schema,
    /// A value that is not admissible where it was supplied.
    Domain,
    /// Decision resolution could not reach a terminal decision.
    Traversal,
    /// A constructor or parameter contract was violated.
    Construction,
    /// Reading, parsing or writing external data failed.
    Io,
}

/// Errors that can occur while building or querying a tree.
#[derive(Debug, Error, PartialEq)]
pub enum CatreeError {
    /// Category is not part of the schema it was looked up in.
    #[error("Category {0} not found in schema.")]
    CategoryNotFound(String),
    /// First value is the expected category names, second is what was provided.
    #[error("Entry categories must match the data categories, expected [{0}] but [{1}] provided.")]
    AttributeMismatch(String, String),
    /// Decision label that is not one of the declared outputs.
    #[error("Output {0} is not one of the declared outputs [{1}].")]
    UnknownOutput(String, String),
    /// Two categories of one schema share a name.
    #[error("Category {0} appears more than once in the schema.")]
    DuplicateCategory(String),
    /// First value is the value, second is the category name.
    #[error("Value {0} not valid for category {1}.")]
    InvalidValue(String, String),
    /// A value on a node already resolves to a decision or a child.
    #[error("Value {0} of category {1} already has a decision or a child.")]
    BranchOccupied(String, String),
    /// Entry index out of range, first value is the index, second the length.
    #[error("Entry index {0} out of bounds for dataset of length {1}.")]
    IndexOutOfBounds(usize, usize),
    /// The query does not assert a value for a category the tree splits on.
    #[error("Category {0} missing from query.")]
    MissingQueryCategory(String),
    /// First value is the category name, second the observed value.
    #[error("No decision available for {0} = {1}.")]
    NoDecision(String, String),
    /// Tree without a root node.
    #[error("Tree has no root node.")]
    NoRoot,
    /// Category with an unusable definition.
    #[error("Invalid category {0}: {1}.")]
    InvalidCategory(String, String),
    /// Declared output set is unusable.
    #[error("Invalid outputs: {0}.")]
    InvalidOutputs(String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// Unable to read from file.
    #[error("Unable to read from file {0}")]
    UnableToRead(String),
    /// Input could be read but is not a valid description.
    #[error("Unable to parse input: {0}")]
    UnableToParse(String),
    /// Unable to write to file.
    #[error("Unable to write to file: {0}")]
    UnableToWrite(String),
}

impl CatreeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatreeError::CategoryNotFound(_)
            | CatreeError::AttributeMismatch(..)
            | CatreeError::UnknownOutput(..)
            | CatreeError::DuplicateCategory(_) => ErrorKind::Schema,
            CatreeError::InvalidValue(..) | CatreeError::BranchOccupied(..) | CatreeError::IndexOutOfBounds(..) => {
                ErrorKind::Domain
            }
            CatreeError::MissingQueryCategory(_) | CatreeError::NoDecision(..) | CatreeError::NoRoot => {
                ErrorKind::Traversal
            }
            CatreeError::InvalidCategory(..)
            | CatreeError::InvalidOutputs(_)
            | CatreeError::InvalidParameter(..)
            | CatreeError::ParseString(..) => ErrorKind::Construction,
            CatreeError::UnableToRead(_) | CatreeError::UnableToParse(_) | CatreeError::UnableToWrite(_) => {
                ErrorKind::Io
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatreeError>;
