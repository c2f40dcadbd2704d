// mongodb::error::Error -> StoreError mapping

use mongo_probe_core::StoreError;
use mongodb::error::{Error, ErrorKind};

/// Server error code for AuthenticationFailed
const AUTHENTICATION_FAILED: i32 = 18;

/// Convert a driver error into a StoreError, keeping the driver message
pub fn map_mongo_error(err: Error) -> StoreError {
    let message = err.to_string();

    match err.kind.as_ref() {
        ErrorKind::Authentication { .. } => StoreError::Authentication(message),
        ErrorKind::ServerSelection { .. } | ErrorKind::DnsResolve { .. } | ErrorKind::Io(_) => {
            StoreError::Unreachable(message)
        }
        ErrorKind::InvalidArgument { .. } => StoreError::InvalidTarget(message),
        ErrorKind::Command(cmd) if cmd.code == AUTHENTICATION_FAILED => {
            StoreError::Authentication(message)
        }
        ErrorKind::Command(_) | ErrorKind::Write(_) => StoreError::Rejected(message),
        _ => StoreError::Internal(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_unreachable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let mapped = map_mongo_error(Error::from(io));

        match mapped {
            StoreError::Unreachable(msg) => assert!(msg.contains("connection refused")),
            other => panic!("expected Unreachable, got {:?}", other),
        }
    }
}
