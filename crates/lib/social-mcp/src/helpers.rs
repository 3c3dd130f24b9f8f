use std::borrow::Cow;

use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use social_core::control::ControlError;
use social_core::store::StoreError;
use tracing::warn;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn map_err(err: ControlError) -> ErrorData {
    warn!(error = %err, "graph query failed");
    match err {
        ControlError::Store(StoreError::InvalidInput(message)) => {
            mcp_err(ErrorCode::INVALID_PARAMS, message)
        }
        other => mcp_err(ErrorCode::INTERNAL_ERROR, other.to_string()),
    }
}
