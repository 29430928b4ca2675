/// Device acquisition failure.
///
/// This is the only failure the engine defines as part of startup. It is fatal:
/// callers report it and stop, nothing retries.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// No adapter, or no device on the adapter, could be obtained.
    #[error("need a GPU and driver that support WebGPU: {reason}")]
    Unsupported { reason: String },
}

impl DeviceError {
    pub(crate) fn unsupported(reason: impl std::fmt::Display) -> Self {
        Self::Unsupported {
            reason: reason.to_string(),
        }
    }
}

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_message_is_user_facing() {
        let err = DeviceError::unsupported("no adapter");
        let msg = err.to_string();
        assert!(msg.starts_with("need a GPU and driver that support WebGPU"));
        assert!(msg.ends_with("no adapter"));
    }
}
