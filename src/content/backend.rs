use crate::models::RoleMeta;

use super::Partition;

pub const META: RoleMeta = RoleMeta {
    id: "backend",
    label: "Backend Developer",
    icon: "server",
    color: "#4F46E5",
    tagline: "APIs, data and the systems behind them",
};

pub const PARTITIONS: &[Partition] = &[
    Partition {
        name: "backend/apis",
        source: include_str!("../../content/backend/apis.json"),
    },
    Partition {
        name: "backend/systems",
        source: include_str!("../../content/backend/systems.json"),
    },
];
