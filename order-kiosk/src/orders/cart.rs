//! Cart aggregation engine
//!
//! A multiset of cart lines keyed by id, kept in first-add order. Totals are
//! recomputed from the lines on every read.

use serde::Serialize;
use shared::order::CartLine;

use super::{FlowResult, Rejection};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Current quantity of `id`, 0 when absent
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.get(id).map_or(0, |l| l.qty)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a line, merging into an existing line with the same id.
    ///
    /// On a merge only the quantity changes: the existing name, price and
    /// detail are kept. Returns the line's quantity afterwards.
    pub fn add(&mut self, line: CartLine) -> u32 {
        if line.qty == 0 {
            return self.quantity_of(&line.id);
        }
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == line.id) {
            existing.qty = existing.qty.saturating_add(line.qty);
            return existing.qty;
        }
        let qty = line.qty;
        self.lines.push(line);
        qty
    }

    /// Change the quantity of `id` by `delta`; a line reaching 0 is removed.
    ///
    /// Returns the quantity afterwards (0 when removed).
    pub fn adjust_qty(&mut self, id: &str, delta: i32) -> FlowResult<u32> {
        let idx = self
            .lines
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| Rejection::UnknownLine(id.to_string()))?;

        let next = i64::from(self.lines[idx].qty) + i64::from(delta);
        if next <= 0 {
            self.lines.remove(idx);
            return Ok(0);
        }
        let qty = u32::try_from(next).unwrap_or(u32::MAX);
        self.lines[idx].qty = qty;
        Ok(qty)
    }

    /// Σ qty
    pub fn total_items(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(u64::from(l.qty)))
    }

    /// Σ price × qty, saturating like [`Cart::add`]
    pub fn total_price(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.line_total()))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
