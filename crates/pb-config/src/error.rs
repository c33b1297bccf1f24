/// Error type for budget validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid budget JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Budget file is not defined as an array of budgets.")]
    NotAnArray,
    #[error("Budget at index {index} is not an object.")]
    BudgetNotObject { index: usize },
    #[error("Unsupported budget property: {keys}. Valid properties are: {valid}")]
    UnsupportedProperty { keys: String, valid: &'static str },
    #[error("Invalid path {path}. 'Path' should be specified in the 'robots.txt' format: a leading '/', at most one '*', and an optional trailing '$'.")]
    InvalidPath { path: String },
    #[error("{field} must be {expected}.")]
    WrongType { field: &'static str, expected: &'static str },
    #[error("Invalid resource type: {value}. Valid resource types are: {valid}")]
    InvalidResourceType { value: String, valid: String },
    #[error("Invalid timing metric: {value}. Valid timing metrics are: {valid}")]
    InvalidTimingMetric { value: String, valid: String },
    #[error("Invalid budget: {value}")]
    InvalidBudget { value: String },
    #[error("Invalid tolerance: {value}")]
    InvalidTolerance { value: String },
    #[error("{kind} has unrecognized properties: [{keys}]")]
    UnrecognizedProperties { kind: &'static str, keys: String },
    #[error("{list} has duplicate entry of type {value}")]
    Duplicate { list: &'static str, value: String },
    #[error("{hostname} is not a valid hostname.")]
    InvalidHostname { hostname: String },
    #[error("Invalid public suffix list: {message}")]
    SuffixList { message: String },
}
