//! Capability table per adapter mode

use crate::domain::AdapterMode;
use serde::Serialize;

/// Operations an adapter mode supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityMap {
    pub open_document: bool,
    pub manifest: bool,
    pub list_layers: bool,
    pub apply_ops: bool,
    pub render: bool,
    pub checkpoints: bool,
    pub events: bool,
}

impl CapabilityMap {
    /// `(name, supported)` pairs in declaration order, using the wire names.
    pub fn entries(&self) -> [(&'static str, bool); 7] {
        [
            ("openDocument", self.open_document),
            ("manifest", self.manifest),
            ("listLayers", self.list_layers),
            ("applyOps", self.apply_ops),
            ("render", self.render),
            ("checkpoints", self.checkpoints),
            ("events", self.events),
        ]
    }
}

const DESKTOP_CAPABILITIES: CapabilityMap = CapabilityMap {
    open_document: true,
    manifest: true,
    list_layers: true,
    apply_ops: true,
    render: true,
    checkpoints: true,
    events: true,
};

pub fn capabilities_for_mode(mode: AdapterMode) -> CapabilityMap {
    match mode {
        AdapterMode::Desktop => DESKTOP_CAPABILITIES,
    }
}
