use crate::models::LanguageMeta;

use super::Partition;

pub const META: LanguageMeta = LanguageMeta {
    id: "go",
    label: "Go",
    icon: "go",
    color: "#00ADD8",
    doc_url: "https://go.dev/doc/",
    tagline: "Simple, reliable, efficient software",
    playground_url: "https://go.dev/play/",
    execution_api: "go",
};

pub const PARTITIONS: &[Partition] = &[
    Partition {
        name: "go/basics",
        source: include_str!("../../content/go/basics.json"),
    },
    Partition {
        name: "go/types",
        source: include_str!("../../content/go/types.json"),
    },
    Partition {
        name: "go/collections",
        source: include_str!("../../content/go/collections.json"),
    },
];
