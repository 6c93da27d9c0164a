use serde::{Deserialize, Serialize};

/// Configuration options that control the behaviour of [`Netlist`](crate::Netlist).
///
/// The default rejects empty nets and places no cap on net degree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetlistConfig {
    /// Whether nets without any member module may be added.
    pub allow_empty_nets: bool,
    /// Maximum number of pins permitted on a single net.
    pub max_net_degree: Option<usize>,
}
