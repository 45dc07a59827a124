//! Selection state for the text overlay
//!
//! `OverlayState` holds the current recognition results, tracks which of
//! them are selected, answers hit-test queries and builds the selected text.
//! It is owned by the host view and touched from the UI thread only.

use serde::{Deserialize, Serialize};

use crate::domain::{Point, RegionId, TextRegion};

/// Order in which selected regions are joined into the selected text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinOrder {
    /// Order of the region sequence, independent of tap order
    #[default]
    RegionOrder,
    /// Order the regions were selected in
    SelectionOrder,
}

#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    regions: Vec<TextRegion>,
    /// Indices into `regions`, in the order they were selected
    selected: Vec<usize>,
    generation: u64,
    needs_redraw: bool,
    join_order: JoinOrder,
}

impl OverlayState {
    pub fn new(join_order: JoinOrder) -> Self {
        Self {
            join_order,
            ..Self::default()
        }
    }

    pub fn join_order(&self) -> JoinOrder {
        self.join_order
    }

    pub fn set_join_order(&mut self, join_order: JoinOrder) {
        if self.join_order != join_order {
            self.join_order = join_order;
            if !self.selected.is_empty() {
                self.needs_redraw = true;
            }
        }
    }

    /// Replace the region sequence and clear the selection
    pub fn set_regions(&mut self, regions: Vec<TextRegion>) {
        log::debug!(
            "Replacing {} regions with {} (dropping {} selected)",
            self.regions.len(),
            regions.len(),
            self.selected.len()
        );
        self.regions = regions;
        self.selected.clear();
        self.generation = self.generation.wrapping_add(1);
        self.needs_redraw = true;
    }

    pub fn regions(&self) -> &[TextRegion] {
        &self.regions
    }

    /// Regions paired with their identity keys, in sequence order
    pub fn ids(&self) -> impl Iterator<Item = (RegionId, &TextRegion)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(index, region)| (self.id_at(index), region))
    }

    pub fn region(&self, id: RegionId) -> Option<&TextRegion> {
        self.resolve(id).map(|index| &self.regions[index])
    }

    /// First region in sequence order whose bounds contain `point`
    pub fn hit_test(&self, point: Point) -> Option<RegionId> {
        self.regions
            .iter()
            .position(|region| region.bounds.contains(point))
            .map(|index| self.id_at(index))
    }

    /// Select the region if it isn't, deselect it if it is
    ///
    /// Ids from a replaced region sequence are ignored.
    pub fn toggle_selection(&mut self, id: RegionId) {
        let Some(index) = self.resolve(id) else {
            log::debug!("Ignoring toggle for stale region id {:?}", id);
            return;
        };

        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
        } else {
            self.selected.push(index);
        }
        self.needs_redraw = true;
    }

    pub fn is_selected(&self, id: RegionId) -> bool {
        self.resolve(id)
            .is_some_and(|index| self.selected.contains(&index))
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn clear_selection(&mut self) {
        if !self.selected.is_empty() {
            self.selected.clear();
            self.needs_redraw = true;
        }
    }

    /// Selected regions' text joined with single spaces
    pub fn selected_text(&self) -> String {
        let mut indices = self.selected.clone();
        if self.join_order == JoinOrder::RegionOrder {
            indices.sort_unstable();
        }
        indices
            .into_iter()
            .map(|index| self.regions[index].text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Read and clear the redraw request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn id_at(&self, index: usize) -> RegionId {
        RegionId {
            generation: self.generation,
            index,
        }
    }

    fn resolve(&self, id: RegionId) -> Option<usize> {
        (id.generation == self.generation && id.index < self.regions.len()).then_some(id.index)
    }
}
