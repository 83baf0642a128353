//! Catalog Model
//!
//! 菜单目录：小菜、隐藏菜单，以及招牌汤面的两组组合选项（汤头 × 面体）。

use serde::{Deserialize, Serialize};

/// Flat-priced catalog entry (小菜 / 隐藏菜单)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    /// Unique within its own list
    pub id: String,
    pub name: String,
    /// Whole currency units
    pub price: u32,
    #[serde(default = "default_true")]
    pub available: bool,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            available: true,
        }
    }

    /// Mark the item as sold out (已售完)
    pub fn sold_out(mut self) -> Self {
        self.available = false;
        self
    }
}

fn default_true() -> bool {
    true
}

/// One choice of a combo option set (汤头 or 面体)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComboOption {
    pub id: String,
    pub name: String,
}

impl ComboOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Combo pricing: one fixed price regardless of the chosen options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComboPricing {
    pub price: u32,
    /// Label attached to every synthesized combo line
    pub detail: String,
}

impl Default for ComboPricing {
    fn default() -> Self {
        Self {
            price: 90,
            detail: "招牌湯麵".to_string(),
        }
    }
}

/// Which flat list an item lives in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemList {
    /// 小菜
    Sides,
    /// 隐藏菜单
    Hidden,
}

/// Full catalog handed to a session (read-only)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    /// 汤头 (combo base)
    pub combo_bases: Vec<ComboOption>,
    /// 面体 (combo modifier)
    pub combo_modifiers: Vec<ComboOption>,
    #[serde(default)]
    pub combo: ComboPricing,
    #[serde(default)]
    pub sides: Vec<CatalogItem>,
    #[serde(default)]
    pub hidden: Vec<CatalogItem>,
}

impl Catalog {
    pub fn base(&self, id: &str) -> Option<&ComboOption> {
        self.combo_bases.iter().find(|o| o.id == id)
    }

    pub fn modifier(&self, id: &str) -> Option<&ComboOption> {
        self.combo_modifiers.iter().find(|o| o.id == id)
    }

    pub fn items(&self, list: ItemList) -> &[CatalogItem] {
        match list {
            ItemList::Sides => &self.sides,
            ItemList::Hidden => &self.hidden,
        }
    }

    pub fn item(&self, list: ItemList, id: &str) -> Option<&CatalogItem> {
        self.items(list).iter().find(|i| i.id == id)
    }

    /// 内置菜单
    pub fn house_menu() -> Self {
        Self {
            combo_bases: vec![
                ComboOption::new("original", "原味"),
                ComboOption::new("shrimp", "蝦醬"),
                ComboOption::new("miso", "味噌"),
            ],
            combo_modifiers: vec![
                ComboOption::new("thin", "細麵"),
                ComboOption::new("handmade", "手打麵"),
                ComboOption::new("glass", "冬粉"),
            ],
            combo: ComboPricing::default(),
            sides: vec![
                CatalogItem::new("s1", "燙青菜", 30),
                CatalogItem::new("s2", "滷蛋", 10),
                CatalogItem::new("s3", "豆干", 15),
                CatalogItem::new("s4", "小菜拼盤", 50),
            ],
            hidden: vec![
                CatalogItem::new("h1", "原味炒飯", 80),
                CatalogItem::new("h2", "映竹麵", 85),
            ],
        }
    }
}
