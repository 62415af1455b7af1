/// Filter expression errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("filter expression '{expression}' not of form 'var_name==var_value'")]
    Malformed { expression: String },
}
