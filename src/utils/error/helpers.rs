//! Helper functions for creating specific error types

use super::types::FileDropError;

impl FileDropError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn missing_input<S: Into<String>>(message: S) -> Self {
        Self::MissingInput(message.into())
    }

    pub fn invalid_name<S: Into<String>>(message: S) -> Self {
        Self::InvalidName(message.into())
    }

    pub fn multipart<S: Into<String>>(message: S) -> Self {
        Self::Multipart(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn directory_read<S: Into<String>>(message: S) -> Self {
        Self::DirectoryRead(message.into())
    }

    pub fn write<S: Into<String>>(message: S) -> Self {
        Self::Write(message.into())
    }

    pub fn delete<S: Into<String>>(message: S) -> Self {
        Self::Delete(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingInput(_) | Self::InvalidName(_) | Self::Multipart(_) | Self::NotFound(_)
        )
    }
}
