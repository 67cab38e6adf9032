//! Application services
//!
//! One module per entity service plus the two loading workflows. The
//! validation order inside each operation is significant: existence
//! checks precede state checks precede capacity checks, and a
//! same-source-as-destination transfer is rejected before any lookup.
//! The first failing rule determines the reported error.

pub mod containers;
pub mod ship_containers;
pub mod ships;
pub mod truck_containers;
pub mod trucks;
