//! Combo builder - 招牌汤面 (汤头 + 面体)
//!
//! Base and modifier are chosen independently and in any order. Committing
//! synthesizes one fixed-price cart line and clears both choices.

use serde::Serialize;
use shared::models::Catalog;
use shared::order::CartLine;

use super::{Cart, FlowResult, Rejection};

/// In-progress combo selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComboBuilder {
    base: Option<String>,
    modifier: Option<String>,
}

impl ComboBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    pub fn modifier(&self) -> Option<&str> {
        self.modifier.as_deref()
    }

    /// Both choices made
    pub fn is_ready(&self) -> bool {
        self.base.is_some() && self.modifier.is_some()
    }

    pub fn select_base(&mut self, catalog: &Catalog, id: &str) -> FlowResult {
        if catalog.base(id).is_none() {
            return Err(Rejection::UnknownOption(id.to_string()));
        }
        self.base = Some(id.to_string());
        Ok(())
    }

    pub fn select_modifier(&mut self, catalog: &Catalog, id: &str) -> FlowResult {
        if catalog.modifier(id).is_none() {
            return Err(Rejection::UnknownOption(id.to_string()));
        }
        self.modifier = Some(id.to_string());
        Ok(())
    }

    pub fn clear_base(&mut self) {
        self.base = None;
    }

    pub fn clear_modifier(&mut self) {
        self.modifier = None;
    }

    pub fn clear(&mut self) {
        self.base = None;
        self.modifier = None;
    }

    /// The line `commit` would add, without touching anything
    pub fn preview(&self, catalog: &Catalog) -> FlowResult<CartLine> {
        let (Some(base_id), Some(modifier_id)) = (self.base.as_deref(), self.modifier.as_deref())
        else {
            return Err(Rejection::IncompleteCombo);
        };
        let base = catalog
            .base(base_id)
            .ok_or_else(|| Rejection::UnknownOption(base_id.to_string()))?;
        let modifier = catalog
            .modifier(modifier_id)
            .ok_or_else(|| Rejection::UnknownOption(modifier_id.to_string()))?;

        Ok(CartLine::new(
            CartLine::combo_id(&base.id, &modifier.id),
            format!("{}{}", base.name, modifier.name),
            catalog.combo.price,
        )
        .with_detail(catalog.combo.detail.clone()))
    }

    /// Add the synthesized combo to `cart` and reset the selection.
    ///
    /// Returns the combo line's quantity afterwards.
    pub fn commit(&mut self, catalog: &Catalog, cart: &mut Cart) -> FlowResult<u32> {
        let line = self.preview(catalog)?;
        let qty = cart.add(line);
        self.clear();
        Ok(qty)
    }
}
