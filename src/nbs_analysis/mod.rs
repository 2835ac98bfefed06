/// NBS analysis - domain layer
///
/// Pure business logic for finding which NBS binary packages are safely
/// removable from the archive. No I/O happens here; index lookups reach
/// the outside world only through the IndexRepository port.
pub mod domain;
pub mod services;
