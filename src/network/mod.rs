//! Network reachability checks performed before each search.

pub mod connectivity;

pub use connectivity::{ConnectivityProbe, TcpConnectivityProbe};
