//! Session - one customer's ordering session
//!
//! Owns the order context, cart, combo selection and flow state, and is the
//! only way callers mutate them. Every operation is synchronous; a rejected
//! operation leaves all four untouched.
//!
//! # Operation Guard
//!
//! ```text
//! SelectingMode  → context edits, proceed_to_menu
//! BuildingOrder  → cart / combo / cursor ops, back, submit
//! Submitted      → reset
//! (any)          → reset
//! ```

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use shared::models::{Catalog, ItemList};
use shared::order::{CartLine, DiningMode, ReservationKind, SubmittedOrder};
use std::sync::Arc;

use super::flow::{FlowState, MainSub, MenuSection};
use super::{Cart, ComboBuilder, ContextRules, FlowResult, OrderContext, Rejection, submission};
use crate::catalog::CatalogProvider;
use crate::utils::time::business_now;

pub struct Session {
    /// Log correlation id, regenerated on reset
    session_id: String,
    provider: Arc<dyn CatalogProvider>,
    catalog: Arc<Catalog>,
    rules: Arc<ContextRules>,
    tz: Tz,
    context: OrderContext,
    cart: Cart,
    combo: ComboBuilder,
    flow: FlowState,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("session_id", &self.session_id)
            .field("provider", &"<CatalogProvider>")
            .field("tz", &self.tz)
            .field("context", &self.context)
            .field("cart", &self.cart)
            .field("combo", &self.combo)
            .field("flow", &self.flow)
            .finish()
    }
}

impl Session {
    pub fn new(provider: Arc<dyn CatalogProvider>, rules: Arc<ContextRules>, tz: Tz) -> Self {
        let catalog = provider.snapshot();
        let session_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(session_id = %session_id, "Session started");
        Self {
            session_id,
            provider,
            catalog,
            rules,
            tz,
            context: OrderContext::default(),
            cart: Cart::default(),
            combo: ComboBuilder::default(),
            flow: FlowState::default(),
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> &FlowState {
        &self.flow
    }

    pub fn context(&self) -> &OrderContext {
        &self.context
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn combo(&self) -> &ComboBuilder {
        &self.combo
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &ContextRules {
        &self.rules
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn total_price(&self) -> u64 {
        self.cart.total_price()
    }

    /// Whether `proceed_to_menu` would succeed right now
    pub fn can_proceed(&self) -> bool {
        self.flow.is_selecting_mode() && self.context.is_complete()
    }

    /// UI guard for the submit button: building an order with a non-empty cart
    pub fn can_submit(&self) -> bool {
        self.flow.is_building_order() && !self.cart.is_empty()
    }

    /// The combo line that `commit_combo` would add
    pub fn combo_preview(&self) -> FlowResult<CartLine> {
        self.combo.preview(&self.catalog)
    }

    pub fn submitted_order(&self) -> Option<&SubmittedOrder> {
        self.flow.submitted_order()
    }

    // ========================================================================
    // Mode screen (SelectingMode)
    // ========================================================================

    pub fn select_mode(&mut self, mode: DiningMode) -> FlowResult {
        self.guard(|s| {
            s.flow.require_selecting_mode()?;
            s.context.select_mode(mode);
            Ok(())
        })
    }

    pub fn select_table(&mut self, table: &str) -> FlowResult {
        self.guard(|s| {
            s.flow.require_selecting_mode()?;
            s.context.select_table(&s.rules, table)
        })
    }

    pub fn set_customer_name(&mut self, name: &str) -> FlowResult {
        self.guard(|s| {
            s.flow.require_selecting_mode()?;
            s.context.set_customer_name(name)
        })
    }

    pub fn select_reservation_kind(&mut self, kind: ReservationKind) -> FlowResult {
        self.guard(|s| {
            s.flow.require_selecting_mode()?;
            s.context.select_reservation_kind(kind);
            Ok(())
        })
    }

    pub fn set_reservation_time(&mut self, value: &str) -> FlowResult {
        self.guard(|s| {
            s.flow.require_selecting_mode()?;
            s.context.set_reservation_time(&s.rules, value)
        })
    }

    pub fn set_party_size(&mut self, size: u8) -> FlowResult {
        self.guard(|s| {
            s.flow.require_selecting_mode()?;
            s.context.set_party_size(&s.rules, size)
        })
    }

    /// `SelectingMode → BuildingOrder`
    pub fn proceed_to_menu(&mut self) -> FlowResult {
        self.guard(|s| s.flow.proceed_to_menu(&s.context))?;
        tracing::debug!(
            session_id = %self.session_id,
            mode = ?self.context.mode(),
            "Entered menu"
        );
        Ok(())
    }

    // ========================================================================
    // Menu (BuildingOrder)
    // ========================================================================

    /// `BuildingOrder → SelectingMode`, keeping context and cart
    pub fn back_to_mode_selection(&mut self) -> FlowResult {
        self.guard(|s| s.flow.back_to_mode_selection())
    }

    pub fn open_section(&mut self, section: MenuSection) -> FlowResult {
        self.guard(|s| s.flow.open_section(section))
    }

    pub fn open_main_sub(&mut self, sub: MainSub) -> FlowResult {
        self.guard(|s| s.flow.open_main_sub(sub))
    }

    pub fn close_main_sub(&mut self) -> FlowResult {
        self.guard(|s| s.flow.close_main_sub())
    }

    /// Add one unit of a flat-priced catalog item.
    ///
    /// Returns the item's cart quantity afterwards.
    pub fn add_item(&mut self, list: ItemList, id: &str) -> FlowResult<u32> {
        self.guard(|s| {
            s.flow.require_building_order()?;
            let item = s
                .catalog
                .item(list, id)
                .ok_or_else(|| Rejection::UnknownItem(id.to_string()))?;
            if !item.available {
                return Err(Rejection::ItemUnavailable(id.to_string()));
            }
            let line = CartLine::new(item.id.clone(), item.name.clone(), item.price);
            Ok(s.cart.add(line))
        })
    }

    /// Change a cart line's quantity; reaching 0 removes it.
    pub fn adjust_qty(&mut self, id: &str, delta: i32) -> FlowResult<u32> {
        self.guard(|s| {
            s.flow.require_building_order()?;
            s.cart.adjust_qty(id, delta)
        })
    }

    pub fn select_combo_base(&mut self, id: &str) -> FlowResult {
        self.guard(|s| {
            s.flow.require_building_order()?;
            s.combo.select_base(&s.catalog, id)
        })
    }

    pub fn select_combo_modifier(&mut self, id: &str) -> FlowResult {
        self.guard(|s| {
            s.flow.require_building_order()?;
            s.combo.select_modifier(&s.catalog, id)
        })
    }

    pub fn clear_combo_base(&mut self) -> FlowResult {
        self.guard(|s| {
            s.flow.require_building_order()?;
            s.combo.clear_base();
            Ok(())
        })
    }

    pub fn clear_combo_modifier(&mut self) -> FlowResult {
        self.guard(|s| {
            s.flow.require_building_order()?;
            s.combo.clear_modifier();
            Ok(())
        })
    }

    /// Add the selected combo to the cart (加入订单)
    pub fn commit_combo(&mut self) -> FlowResult<u32> {
        self.guard(|s| {
            s.flow.require_building_order()?;
            s.combo.commit(&s.catalog, &mut s.cart)
        })
    }

    // ========================================================================
    // Submission & reset
    // ========================================================================

    /// Submit at the current business-local time.
    pub fn submit(&mut self) -> FlowResult<SubmittedOrder> {
        let now = business_now(self.tz);
        self.submit_at(now)
    }

    /// `BuildingOrder → Submitted`. An empty cart is not blocked here.
    pub fn submit_at(&mut self, submitted_at: DateTime<FixedOffset>) -> FlowResult<SubmittedOrder> {
        self.guard(|s| s.flow.require_building_order())?;

        let order = submission::submit(&self.context, &self.cart, submitted_at);
        self.flow.mark_submitted(order.clone())?;

        tracing::info!(
            session_id = %self.session_id,
            order_id = %order.order_id,
            mode = ?order.mode,
            lines = order.items.len(),
            total_items = order.total_items,
            total = order.total,
            "Order submitted"
        );
        if order.items.is_empty() {
            tracing::warn!(order_id = %order.order_id, "Submitted order has no items");
        }
        Ok(order)
    }

    /// Back to an empty session (开始新订单).
    ///
    /// Allowed from any step; context, cart, combo and flow return to their
    /// initial values together and a fresh catalog snapshot is taken.
    pub fn reset(&mut self) {
        let previous = std::mem::replace(&mut self.session_id, uuid::Uuid::new_v4().to_string());
        self.catalog = self.provider.snapshot();
        self.context = OrderContext::default();
        self.cart = Cart::default();
        self.combo = ComboBuilder::default();
        self.flow = FlowState::default();
        tracing::debug!(
            previous_session = %previous,
            session_id = %self.session_id,
            "Session reset"
        );
    }

    /// Run an operation and log a rejection
    fn guard<T>(&mut self, op: impl FnOnce(&mut Self) -> FlowResult<T>) -> FlowResult<T> {
        op(self).inspect_err(|rejection| {
            tracing::debug!(
                session_id = %self.session_id,
                step = self.flow.name(),
                code = ?rejection.code(),
                "Operation rejected: {}",
                rejection
            );
        })
    }
}

#[cfg(test)]
mod tests;
