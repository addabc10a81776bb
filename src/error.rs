/// Errors reported by the LED and button façades.
///
/// Every operation either succeeds or returns one of these; nothing at
/// this layer retries or aborts the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Required configuration was missing or unusable.
    InvalidArgument,
    /// No transport is compiled in for the addressable strip.
    BackendUnavailable,
    /// The platform driver produced no usable device handle.
    DeviceCreationFailed,
    /// A write to already-initialized hardware failed.
    TransportFailure,
}
