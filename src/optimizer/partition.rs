use crate::model::{Item, Side, SlotCategory, SLOT_COUNT};

/// One side's items grouped by slot, in input order. Every slot is present,
/// possibly empty.
#[derive(Debug, Clone, Default)]
pub struct BySlot<'a> {
    lists: [Vec<&'a Item>; SLOT_COUNT],
}

impl<'a> BySlot<'a> {
    pub fn get(&self, slot: SlotCategory) -> &[&'a Item] {
        &self.lists[slot.index()]
    }

    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Items of other sides and items without a known slot are left out.
pub fn partition(items: &[Item], side: Side) -> BySlot<'_> {
    let mut by_slot = BySlot::default();
    for item in items.iter().filter(|it| it.is_side(side)) {
        if let Some(slot) = item.slot_category() {
            by_slot.lists[slot.index()].push(item);
        }
    }
    by_slot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_other_sides_and_unknown_slots() {
        let items = vec![
            Item::new(SlotCategory::Hero, Side::Commander, vec![]),
            Item::new(SlotCategory::Hero, Side::Castellan, vec![]),
            Item {
                slot: "Unknown type (9)".into(),
                side: "Commander".into(),
                effects: vec![],
            },
        ];
        let by_slot = partition(&items, Side::Commander);
        assert_eq!(by_slot.len(), 1);
        assert_eq!(by_slot.get(SlotCategory::Hero).len(), 1);
        assert!(by_slot.get(SlotCategory::Armor).is_empty());
    }
}
