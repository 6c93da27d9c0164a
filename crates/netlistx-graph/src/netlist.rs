use std::collections::BTreeSet;

use netlistx_core::{Handle, Hypergraph, NetId, NetlistError, NodeId, WeightMap};

use crate::flags::NetlistConfig;
use crate::ids::{canonicalize_pins, check_node, unknown_net, unknown_node};

#[derive(Debug, Clone, Default)]
pub(crate) struct ModuleRecord {
    nets: Vec<NetId>,
}

#[derive(Debug, Clone)]
pub(crate) struct NetRecord {
    members: Vec<NodeId>,
}

/// Hypergraph of modules joined by nets.
///
/// Modules are numbered `0..number_of_modules()` and nets
/// `0..number_of_nets()`. Degree bookkeeping is maintained on every
/// insertion.
#[derive(Debug, Clone)]
pub struct Netlist {
    config: NetlistConfig,
    modules: Vec<ModuleRecord>,
    nets: Vec<NetRecord>,
    module_weight: Vec<u32>,
    module_fixed: BTreeSet<NodeId>,
    max_degree: usize,
    max_net_degree: usize,
    num_pins: usize,
}

impl Netlist {
    /// Creates an empty netlist with the provided configuration.
    pub fn new(config: NetlistConfig) -> Self {
        Self {
            config,
            modules: Vec::new(),
            nets: Vec::new(),
            module_weight: Vec::new(),
            module_fixed: BTreeSet::new(),
            max_degree: 0,
            max_net_degree: 0,
            num_pins: 0,
        }
    }

    /// Creates a netlist with `num_modules` unconnected modules.
    pub fn with_modules(num_modules: usize) -> Self {
        Self {
            modules: vec![ModuleRecord::default(); num_modules],
            ..Self::default()
        }
    }

    /// Builds a netlist from raw pin lists, one list per net.
    pub fn from_nets(num_modules: usize, nets: &[&[u64]]) -> Result<Self, NetlistError> {
        let mut netlist = Self::with_modules(num_modules);
        for pins in nets {
            let members: Vec<NodeId> = pins.iter().copied().map(NodeId::from_raw).collect();
            netlist.add_net(&members)?;
        }
        Ok(netlist)
    }

    /// Returns the configuration used by this netlist.
    pub fn config(&self) -> &NetlistConfig {
        &self.config
    }

    /// Appends a new module.
    pub fn add_module(&mut self) -> NodeId {
        let id = NodeId::from_index(self.modules.len());
        self.modules.push(ModuleRecord::default());
        id
    }

    /// Adds a net joining `members`; duplicate pins collapse to one.
    pub fn add_net(&mut self, members: &[NodeId]) -> Result<NetId, NetlistError> {
        let members = canonicalize_pins(members);
        if members.is_empty() && !self.config.allow_empty_nets {
            return Err(NetlistError::graph("empty-net", "nets require at least one module")
                .with_hint("enable allow_empty_nets to accept floating nets"));
        }
        if let Some(cap) = self.config.max_net_degree {
            if members.len() > cap {
                return Err(
                    NetlistError::graph("net-degree-cap", "net degree cap would be exceeded")
                        .with_context("cap", cap)
                        .with_context("attempted", members.len()),
                );
            }
        }
        for node in &members {
            check_node(*node, self.modules.len())?;
        }
        let id = NetId::from_index(self.nets.len());
        for node in &members {
            let record = &mut self.modules[node.index()];
            record.nets.push(id);
            self.max_degree = self.max_degree.max(record.nets.len());
        }
        self.max_net_degree = self.max_net_degree.max(members.len());
        self.num_pins += members.len();
        self.nets.push(NetRecord { members });
        Ok(id)
    }

    /// Installs per-module weights; one entry per module.
    pub fn set_module_weights(&mut self, weights: Vec<u32>) -> Result<(), NetlistError> {
        if weights.len() != self.modules.len() {
            return Err(NetlistError::config(
                "weight-length",
                "module weights must cover every module",
            )
            .with_context("modules", self.modules.len())
            .with_context("weights", weights.len()));
        }
        self.module_weight = weights;
        Ok(())
    }

    /// Returns the weight of a module; `1` when no weights were installed.
    pub fn module_weight(&self, node: NodeId) -> Result<u32, NetlistError> {
        check_node(node, self.modules.len())?;
        Ok(self.module_weight.get(node.index()).copied().unwrap_or(1))
    }

    /// Returns the weight of a net; every net currently weighs `1`.
    pub fn net_weight(&self, net: NetId) -> Result<u32, NetlistError> {
        self.net(net)?;
        Ok(1)
    }

    /// Dense ledger of module weights for the solvers.
    pub fn module_weights(&self) -> WeightMap<NodeId, u32> {
        WeightMap::from_fn(self.modules.len(), |node: NodeId| {
            self.module_weight.get(node.index()).copied().unwrap_or(1)
        })
    }

    /// Dense ledger of net weights for the solvers.
    pub fn net_weights(&self) -> WeightMap<NetId, u32> {
        WeightMap::uniform(self.nets.len(), 1)
    }

    /// Marks a module as fixed (pre-assigned by the caller).
    pub fn fix_module(&mut self, node: NodeId) -> Result<(), NetlistError> {
        check_node(node, self.modules.len())?;
        self.module_fixed.insert(node);
        Ok(())
    }

    /// Returns whether any module is fixed.
    pub fn has_fixed_modules(&self) -> bool {
        !self.module_fixed.is_empty()
    }

    /// Returns the set of fixed modules.
    pub fn fixed_modules(&self) -> &BTreeSet<NodeId> {
        &self.module_fixed
    }

    /// Number of modules.
    pub fn number_of_modules(&self) -> usize {
        self.modules.len()
    }

    /// Number of nets.
    pub fn number_of_nets(&self) -> usize {
        self.nets.len()
    }

    /// Total number of module-to-net pins.
    pub fn number_of_pins(&self) -> usize {
        self.num_pins
    }

    /// Largest number of nets incident to a single module.
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Largest number of modules on a single net.
    pub fn max_net_degree(&self) -> usize {
        self.max_net_degree
    }

    fn net(&self, id: NetId) -> Result<&NetRecord, NetlistError> {
        self.nets.get(id.index()).ok_or_else(|| unknown_net(id))
    }
}

impl Default for Netlist {
    fn default() -> Self {
        Self::new(NetlistConfig::default())
    }
}

impl Hypergraph for Netlist {
    fn module_count(&self) -> usize {
        self.modules.len()
    }

    fn nets(&self) -> Box<dyn ExactSizeIterator<Item = NetId> + '_> {
        Box::new((0..self.nets.len()).map(NetId::from_index))
    }

    fn net_members(&self, net: NetId) -> Result<&[NodeId], NetlistError> {
        Ok(&self.net(net)?.members)
    }

    fn incident_nets(&self, node: NodeId) -> Result<&[NetId], NetlistError> {
        self.modules
            .get(node.index())
            .map(|record| record.nets.as_slice())
            .ok_or_else(|| unknown_node(node))
    }
}
