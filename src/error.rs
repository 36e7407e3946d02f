use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExprError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("syntax error: {0}")]
    Syntax(String),
    #[error("unknown operator: {0}")]
    UnknownOperator(String),
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),
    #[error("invalid variable assignment `{0}`, expected name=value")]
    InvalidAssignment(String),
}

impl ExprError {
    pub(crate) fn syntax(msg: impl Into<String>) -> Self {
        ExprError::Syntax(msg.into())
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ExprError::Syntax(_))
    }
}
