/// Ports layer - Interface definitions
///
/// Ports isolate the application core from infrastructure. Only outbound
/// (driven) ports exist in this tool; the single inbound operation is the
/// use case itself.
pub mod outbound;
