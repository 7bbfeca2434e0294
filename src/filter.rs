use crate::model::{Item, Side, SlotCategory, SLOT_COUNT};
use crate::util::normalize_whitespace;
use std::collections::HashSet;

/// Inventory list filter: side, slot types and an effect-name search.
#[derive(Debug, Clone)]
pub struct ItemFilter {
    /// `None` keeps both sides (and unknown ones).
    pub side: Option<Side>,
    pub slots: HashSet<SlotCategory>,
    pub search: String,
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self {
            side: None,
            slots: SlotCategory::all().collect(),
            search: String::new(),
        }
    }
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(side) = self.side {
            if !item.is_side(side) {
                return false;
            }
        }
        match item.slot_category() {
            Some(slot) if self.slots.contains(&slot) => {}
            _ => return false,
        }

        let query = normalize_whitespace(&self.search).to_lowercase();
        query.is_empty()
            || item
                .effects
                .iter()
                .any(|e| e.name.to_lowercase().contains(&query))
    }

    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|it| self.matches(it)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub total: usize,
    pub commander: usize,
    pub castellan: usize,
    pub by_slot: [usize; SLOT_COUNT],
}

impl InventoryStats {
    pub fn collect(items: &[Item]) -> Self {
        let mut stats = Self {
            total: items.len(),
            ..Self::default()
        };
        for item in items {
            match item.faction() {
                Some(Side::Commander) => stats.commander += 1,
                Some(Side::Castellan) => stats.castellan += 1,
                None => {}
            }
            if let Some(slot) = item.slot_category() {
                stats.by_slot[slot.index()] += 1;
            }
        }
        stats
    }

    pub fn slot_count(&self, slot: SlotCategory) -> usize {
        self.by_slot[slot.index()]
    }
}

/// One page of a filtered list. Pages are 1-based and clamped to range.
pub fn page<T>(list: &[T], page: usize, page_size: usize) -> (&[T], usize, usize) {
    let size = page_size.max(1);
    let total_pages = list.len().div_ceil(size).max(1);
    let current = page.clamp(1, total_pages);
    let start = (current - 1) * size;
    let end = (start + size).min(list.len());
    (&list[start..end], current, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Effect;

    fn items() -> Vec<Item> {
        vec![
            Item::new(
                SlotCategory::Weapon,
                Side::Commander,
                vec![Effect::new("Melee unit strength when attacking", 10.0, 108)],
            ),
            Item::new(
                SlotCategory::Armor,
                Side::Castellan,
                vec![Effect::new("wall protection", 5.0, 110)],
            ),
            Item {
                slot: "Unknown type (9)".into(),
                side: "Commander".into(),
                effects: vec![],
            },
        ]
    }

    #[test]
    fn default_filter_keeps_known_slots() {
        let items = items();
        assert_eq!(ItemFilter::default().apply(&items).len(), 2);
    }

    #[test]
    fn side_slot_and_search_combine() {
        let items = items();
        let filter = ItemFilter {
            side: Some(Side::Commander),
            search: "  MELEE ".into(),
            ..ItemFilter::default()
        };
        assert_eq!(filter.apply(&items).len(), 1);

        let filter = ItemFilter {
            slots: [SlotCategory::Hero].into_iter().collect(),
            ..ItemFilter::default()
        };
        assert!(filter.apply(&items).is_empty());
    }

    #[test]
    fn stats_count_sides_and_slots() {
        let stats = InventoryStats::collect(&items());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.commander, 2);
        assert_eq!(stats.castellan, 1);
        assert_eq!(stats.slot_count(SlotCategory::Weapon), 1);
    }

    #[test]
    fn paging_clamps() {
        let data: Vec<usize> = (0..120).collect();
        let (rows, current, total) = page(&data, 9, 50);
        assert_eq!((rows.len(), current, total), (20, 3, 3));
        let empty: Vec<usize> = vec![];
        assert_eq!(page(&empty, 1, 50).2, 1);
    }
}
