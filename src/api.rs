use crate::config::SideSelection;
use crate::effects::EffectCatalog;
use crate::error::GfResult;
use crate::export;
use crate::filter::{InventoryStats, ItemFilter};
use crate::inventory::{self, InventoryLoad};
use crate::matching::MatchCriteria;
use crate::model::Item;
use crate::optimizer::{OptimizationOptions, OptimizationResult, Optimizer};
use crate::scorer::ScoringStrategy;
use tracing::{info, warn};

/// Everything one optimizer call needs.
#[derive(Debug, Clone)]
pub struct OptimizationRequest {
    pub sides: SideSelection,
    pub criteria: MatchCriteria,
    pub strategy: ScoringStrategy,
    pub options: OptimizationOptions,
}

impl OptimizationRequest {
    pub fn new(sides: SideSelection, criteria: MatchCriteria) -> Self {
        Self {
            sides,
            criteria,
            strategy: ScoringStrategy::default(),
            options: OptimizationOptions::default(),
        }
    }
}

/// Runs the optimizer once per requested side. Pure with respect to `items`.
pub fn optimize(items: &[Item], request: &OptimizationRequest) -> GfResult<Vec<OptimizationResult>> {
    let optimizer = Optimizer::new(
        request.criteria.clone(),
        request.strategy.clone(),
        request.options.clone(),
    )?;

    Ok(request
        .sides
        .sides()
        .into_iter()
        .map(|side| optimizer.run(items, side))
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub items: usize,
    pub raw_rows: usize,
    pub unknown_effects: usize,
}

/// The current inventory and the last computed results.
#[derive(Debug, Default)]
pub struct Session {
    items: Vec<Item>,
    unknown_effects: usize,
    last_results: Option<Vec<OptimizationResult>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the inventory. Previous results are discarded, also when the
    /// new inventory fails to parse.
    pub fn load_inventory(&mut self, json: &str, catalog: &EffectCatalog) -> GfResult<LoadSummary> {
        self.reset();
        let InventoryLoad {
            items,
            unknown_effects,
            raw_rows,
        } = inventory::parse_inventory(json, catalog)?;
        let summary = LoadSummary {
            items: items.len(),
            raw_rows,
            unknown_effects,
        };
        info!(
            "Loaded {} items (raw rows: {}). Unknown effects encountered: {}.",
            summary.items, summary.raw_rows, summary.unknown_effects
        );
        self.items = items;
        self.unknown_effects = unknown_effects;
        Ok(summary)
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.reset();
        self.items = items;
    }

    pub fn reset(&mut self) {
        self.items.clear();
        self.unknown_effects = 0;
        self.last_results = None;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn unknown_effects(&self) -> usize {
        self.unknown_effects
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::collect(&self.items)
    }

    pub fn filtered(&self, filter: &ItemFilter) -> Vec<&Item> {
        filter.apply(&self.items)
    }

    /// Computes and keeps the results. On error the previous results stay.
    pub fn compute(&mut self, request: &OptimizationRequest) -> GfResult<&[OptimizationResult]> {
        self.compute_all(std::slice::from_ref(request))
    }

    /// Runs several requests and keeps all of their results together, e.g.
    /// one keyword preset per side.
    pub fn compute_all(
        &mut self,
        requests: &[OptimizationRequest],
    ) -> GfResult<&[OptimizationResult]> {
        if self.items.is_empty() {
            warn!("Optimizing an empty inventory; every slot will be missing.");
        }
        let mut results = Vec::new();
        for request in requests {
            results.extend(optimize(&self.items, request)?);
        }
        for r in &results {
            if !r.warnings.is_empty() {
                warn!("{}: {}", r.side, r.warnings.join(" • "));
            }
        }
        let stored = self.last_results.insert(results);
        Ok(stored.as_slice())
    }

    pub fn last_results(&self) -> Option<&[OptimizationResult]> {
        self.last_results.as_deref()
    }

    /// JSON export of each last result, or `None` before any computation.
    pub fn export_json(&self) -> GfResult<Option<Vec<String>>> {
        let Some(results) = &self.last_results else {
            return Ok(None);
        };
        let docs = results
            .iter()
            .map(export::to_json_string)
            .collect::<GfResult<Vec<String>>>()?;
        Ok(Some(docs))
    }
}
