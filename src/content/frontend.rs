use crate::models::RoleMeta;

use super::Partition;

pub const META: RoleMeta = RoleMeta {
    id: "frontend",
    label: "Frontend Developer",
    icon: "layout",
    color: "#F59E0B",
    tagline: "Browsers, JavaScript and the UI layer",
};

pub const PARTITIONS: &[Partition] = &[Partition {
    name: "frontend/core",
    source: include_str!("../../content/frontend/core.json"),
}];
