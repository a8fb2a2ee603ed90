//! # Stage Catalog
//!
//! The immutable, ordered table of stages.
//!
//! The reference catalog is compiled in and built once per process with
//! [`StageCatalog::reference`]. Every catalog, reference or custom, goes
//! through [`StageCatalog::new`], which rejects data the controller cannot
//! navigate (no stages) and out-of-range percents.
//!
//! Monotonic maturity is a data-quality property of the reference table, not a
//! construction rule. [`StageCatalog::is_monotonic`] reports it.

use crate::primitives::MAX_PERCENT;
use crate::types::{Item, Kpi, MaturityError, Stage, StageId, StageItems, ViewMode};
use serde::Serialize;
use std::collections::BTreeSet;

// =============================================================================
// STAGE CATALOG
// =============================================================================

/// Read-only ordered sequence of stages. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageCatalog {
    stages: Vec<Stage>,
}

impl StageCatalog {
    /// Build a catalog from stage records, validating them.
    pub fn new(stages: Vec<Stage>) -> Result<Self, MaturityError> {
        if stages.is_empty() {
            return Err(MaturityError::EmptyCatalog);
        }

        let mut seen = BTreeSet::new();
        for stage in &stages {
            if !seen.insert(stage.id) {
                return Err(MaturityError::DuplicateStage(stage.id));
            }
            validate_stage(stage)?;
        }

        Ok(Self { stages })
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage at `index`, or `InvalidIndex` outside `[0, len)`.
    pub fn stage_at(&self, index: usize) -> Result<&Stage, MaturityError> {
        self.stages
            .get(index)
            .ok_or_else(|| MaturityError::invalid_index(index, self.len()))
    }

    /// Position of a stage identifier in the catalog.
    #[must_use]
    pub fn position(&self, id: StageId) -> Option<usize> {
        self.stages.iter().position(|s| s.id == id)
    }

    /// Stage with the given identifier.
    #[must_use]
    pub fn get(&self, id: StageId) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    /// True when maturity never decreases along the catalog order.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.stages
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.maturity <= b.maturity))
    }
}

impl<'a> IntoIterator for &'a StageCatalog {
    type Item = &'a Stage;
    type IntoIter = std::slice::Iter<'a, Stage>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}

fn validate_stage(stage: &Stage) -> Result<(), MaturityError> {
    if stage.maturity > MAX_PERCENT {
        return Err(MaturityError::InvalidMaturity {
            stage: stage.id,
            value: stage.maturity,
        });
    }

    if let Some(kpi) = stage.kpis.iter().find(|k| k.value > MAX_PERCENT) {
        return Err(MaturityError::InvalidKpi {
            stage: stage.id,
            label: kpi.label.clone(),
            value: kpi.value,
        });
    }

    for mode in ViewMode::ALL {
        let mut ids = BTreeSet::new();
        for item in &stage.items[mode] {
            if !ids.insert(item.id.as_str()) {
                return Err(MaturityError::DuplicateItem {
                    stage: stage.id,
                    mode,
                    id: item.id.clone(),
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// REFERENCE DATA
// =============================================================================

impl StageCatalog {
    /// The compiled-in five-stage catalog.
    #[must_use]
    pub fn reference() -> Self {
        // The reference table is valid by construction; tests assert that
        // `new` accepts it.
        Self {
            stages: reference_stages(),
        }
    }
}

impl Default for StageCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

fn reference_stages() -> Vec<Stage> {
    vec![
        Stage {
            id: StageId::Foundation,
            title: "Foundation".into(),
            subtitle: "Establishing Core Data".into(),
            description: "The bedrock of CSDM. Focusing on accurate referencing of core data \
                          and reporting requirements before moving to complex relationships."
                .into(),
            maturity: 15,
            kpis: vec![
                Kpi::new("Data Accuracy", 85),
                Kpi::new("Referential Integrity", 90),
                Kpi::new("Visibility", 20),
            ],
            items: StageItems::new(
                vec![
                    Item::new(
                        "app-rep",
                        "Reporting Requirements",
                        "Defining what needs to be measured.",
                    ),
                    Item::new(
                        "app-core",
                        "Core Data",
                        "Foundation data referenced by applications.",
                    ),
                ],
                vec![
                    Item::new(
                        "svc-core",
                        "Core Data",
                        "Foundation data like Companies & Departments.",
                    ),
                    Item::new("svc-users", "Users", "Identity management integration."),
                    Item::new("svc-groups", "Groups", "Assignment and approval groups."),
                    Item::new("svc-loc", "Locations", "Physical and logical locations."),
                ],
            ),
        },
        Stage {
            id: StageId::Crawl,
            title: "Crawl".into(),
            subtitle: "Identifying Applications".into(),
            description: "Cataloging what you have. Creating the inventory of applications \
                          and services to begin basic management and ownership."
                .into(),
            maturity: 35,
            kpis: vec![
                Kpi::new("Inventory Coverage", 60),
                Kpi::new("Ownership Assigned", 50),
                Kpi::new("Visibility", 45),
            ],
            items: StageItems::new(
                vec![
                    Item::new(
                        "app-ba",
                        "Business Application",
                        "Inventory of software used for business capabilities.",
                    ),
                    Item::new(
                        "app-sdlc",
                        "SDLC Component",
                        "DevOps representation of the app.",
                    ),
                    Item::new(
                        "app-svcs",
                        "Application Services",
                        "Logical representation of a deployed application stack.",
                    ),
                    Item::new(
                        "app-disc",
                        "Discoverable Parts",
                        "Infrastructure configuration items.",
                    ),
                ],
                vec![
                    Item::new(
                        "svc-bs",
                        "Business Services",
                        "Services consumed by business users.",
                    ),
                    Item::new(
                        "svc-ts",
                        "Technical Services",
                        "Services consumed by technical teams.",
                    ),
                    Item::new(
                        "svc-off",
                        "Service Offerings",
                        "Specific options of a service.",
                    ),
                    Item::new(
                        "svc-as",
                        "Application Services",
                        "Logical instances of services.",
                    ),
                ],
            ),
        },
        Stage {
            id: StageId::Walk,
            title: "Walk".into(),
            subtitle: "Connecting Infrastructure".into(),
            description: "Mapping the physical world to logical services. Moving from \
                          inventory to operational visibility and impact analysis."
                .into(),
            maturity: 60,
            kpis: vec![
                Kpi::new("Impact Analysis", 75),
                Kpi::new("MTTR Reduction", 40),
                Kpi::new("Visibility", 70),
            ],
            items: StageItems::new(
                vec![
                    Item::new(
                        "app-dcg",
                        "Dynamic CI Group",
                        "Automated grouping of CIs based on queries.",
                    ),
                    Item::new(
                        "app-tso",
                        "Tech Service Offering",
                        "Support variants for technology.",
                    ),
                    Item::new(
                        "app-ts",
                        "Technical Service",
                        "Underlying technology services.",
                    ),
                    Item::new(
                        "app-port",
                        "Service Portfolio",
                        "Collection of services managed together.",
                    ),
                ],
                vec![
                    Item::new(
                        "svc-disc",
                        "Discoverable CIs",
                        "Servers, Network Gear, IoT.",
                    ),
                    Item::new(
                        "svc-map",
                        "Map CIs to Services",
                        "Service Mapping & Relationships.",
                    ),
                    Item::new(
                        "svc-dcg",
                        "Dynamic CI Groups",
                        "Query-based CI management.",
                    ),
                ],
            ),
        },
        Stage {
            id: StageId::Run,
            title: "Run".into(),
            subtitle: "Business Context".into(),
            description: "Adding business context to technology. Understanding who consumes \
                          services and managing the full lifecycle."
                .into(),
            maturity: 80,
            kpis: vec![
                Kpi::new("SLA Adherence", 90),
                Kpi::new("Cost Allocation", 65),
                Kpi::new("Visibility", 90),
            ],
            items: StageItems::new(
                vec![
                    Item::new(
                        "app-bso",
                        "Business Service Offering",
                        "Specific service options for business users.",
                    ),
                    Item::new(
                        "app-bs",
                        "Business Service",
                        "Services supporting business capabilities.",
                    ),
                ],
                vec![
                    Item::new(
                        "svc-ba",
                        "Business Application",
                        "Strategic view of software assets.",
                    ),
                    Item::new(
                        "svc-sdlc",
                        "SDLC Component",
                        "Development lifecycle objects.",
                    ),
                ],
            ),
        },
        Stage {
            id: StageId::Fly,
            title: "Fly".into(),
            subtitle: "Strategic Intelligence".into(),
            description: "Full strategic alignment. Connecting investments to capabilities, \
                          optimizing portfolios, and enabling digital transformation."
                .into(),
            maturity: 100,
            kpis: vec![
                Kpi::new("Strategic Alignment", 95),
                Kpi::new("Portfolio Opt.", 92),
                Kpi::new("Visibility", 100),
            ],
            items: StageItems::new(
                vec![
                    Item::new(
                        "app-cap",
                        "Business Capability",
                        "What the business does.",
                    ),
                    Item::new(
                        "app-info",
                        "Information Object",
                        "Data domains and sensitivity.",
                    ),
                    Item::new(
                        "app-cat",
                        "Catalog Items",
                        "Requestable items in the portal.",
                    ),
                    Item::new(
                        "app-port",
                        "Application Portfolio",
                        "Strategic management of app landscape.",
                    ),
                ],
                vec![
                    Item::new(
                        "svc-cap",
                        "Business Capability",
                        "High-level business abilities.",
                    ),
                    Item::new("svc-info", "Information Object", "Data assets managed."),
                    Item::new("svc-cat", "Catalog Items", "Service catalog entries."),
                    Item::new(
                        "svc-dig",
                        "Digital Portfolio",
                        "Unified view of digital assets.",
                    ),
                ],
            ),
        },
    ]
}

// =============================================================================
// TESTS
// =============================================================================
