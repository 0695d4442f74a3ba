use crate::SessionHandle;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Connection limit exceeded: {current} connections (max: {max}) {location}")]
    ConnectionLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Invalid message: {message} {location}")]
    InvalidMessage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Delivery to {handle} failed: {reason} {location}")]
    DeliveryFailed {
        handle: SessionHandle,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Broadcast dispatcher is no longer running {location}")]
    DispatcherStopped { location: ErrorLocation },

    #[error("Failed to encode frame: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl WsError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionClosed { .. } => "CONNECTION_CLOSED",
            Self::ConnectionLimitExceeded { .. } => "CONNECTION_LIMIT",
            Self::InvalidMessage { .. } => "INVALID_MESSAGE",
            Self::DeliveryFailed { .. } => "DELIVERY_FAILED",
            Self::DispatcherStopped { .. } => "DISPATCHER_STOPPED",
            Self::Encode { .. } => "ENCODE_ERROR",
        }
    }

    #[track_caller]
    pub fn delivery_failed(handle: SessionHandle, reason: impl Into<String>) -> Self {
        Self::DeliveryFailed {
            handle,
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn connection_closed(reason: impl Into<String>) -> Self {
        Self::ConnectionClosed {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for WsError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
