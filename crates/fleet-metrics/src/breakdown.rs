//! Derived dashboard views.

use fleet_core::entities::{Asset, DashboardMetrics, MaintenanceRecord};
use fleet_core::enums::{AssetStatus, MaintenanceStatus};
use serde::Serialize;

use crate::percentage;

/// Count and share of one status within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusShare<S> {
    pub status: S,
    pub count: u64,
    pub percentage: u32,
}

/// Percentages derived from the admin dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardBreakdown {
    pub pending_maintenance: u32,
    pub completed_maintenance: u32,
    pub approved_checklists: u32,
    pub rejected_checklists: u32,
}

impl DashboardBreakdown {
    #[must_use]
    pub fn from_metrics(metrics: &DashboardMetrics) -> Self {
        Self {
            pending_maintenance: percentage(metrics.pending_maintenance, metrics.total_maintenance),
            completed_maintenance: percentage(
                metrics.completed_maintenance,
                metrics.total_maintenance,
            ),
            approved_checklists: percentage(metrics.approved_checklists, metrics.total_checklists),
            rejected_checklists: percentage(metrics.rejected_checklists, metrics.total_checklists),
        }
    }
}

/// Asset counts per status. Every status appears, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetStatusBreakdown {
    pub total: u64,
    pub by_status: Vec<StatusShare<AssetStatus>>,
    /// Available plus in use.
    pub operational: u64,
    pub operational_percentage: u32,
}

impl FleetStatusBreakdown {
    #[must_use]
    pub fn from_assets(assets: &[Asset]) -> Self {
        let total = count(assets.iter());
        let by_status = AssetStatus::ALL
            .iter()
            .map(|&status| {
                let n = count(assets.iter().filter(|asset| asset.status == status));
                StatusShare {
                    status,
                    count: n,
                    percentage: percentage(n, total),
                }
            })
            .collect();
        let operational = count(assets.iter().filter(|asset| asset.status.is_operational()));

        Self {
            total,
            by_status,
            operational,
            operational_percentage: percentage(operational, total),
        }
    }

    #[must_use]
    pub fn count(&self, status: AssetStatus) -> u64 {
        self.by_status
            .iter()
            .find(|share| share.status == status)
            .map_or(0, |share| share.count)
    }
}

/// Maintenance record counts per status with cost and effort totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceBreakdown {
    pub total: u64,
    pub by_status: Vec<StatusShare<MaintenanceStatus>>,
    pub total_cost: f64,
    pub total_estimated_hours: u64,
}

impl MaintenanceBreakdown {
    #[must_use]
    pub fn from_records(records: &[MaintenanceRecord]) -> Self {
        let total = count(records.iter());
        let by_status = MaintenanceStatus::ALL
            .iter()
            .map(|&status| {
                let n = count(records.iter().filter(|record| record.status == status));
                StatusShare {
                    status,
                    count: n,
                    percentage: percentage(n, total),
                }
            })
            .collect();

        Self {
            total,
            by_status,
            total_cost: records.iter().map(|record| record.cost).sum(),
            total_estimated_hours: records
                .iter()
                .map(|record| u64::from(record.estimated_hours))
                .sum(),
        }
    }

    #[must_use]
    pub fn count(&self, status: MaintenanceStatus) -> u64 {
        self.by_status
            .iter()
            .find(|share| share.status == status)
            .map_or(0, |share| share.count)
    }
}

fn count<I: Iterator>(iter: I) -> u64 {
    u64::try_from(iter.count()).unwrap_or(u64::MAX)
}
