//! Read-only inventory aggregates derived from the product list.

use crate::product::Product;

/// Products with fewer units than this count as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryAnalytics {
    pub total_value: f64,
    pub average_price: f64,
    pub total_stock: i64,
    pub low_stock_items: usize,
    pub category_breakdown: CategoryBreakdown,
}

impl InventoryAnalytics {
    pub fn from_products(products: &[Product]) -> Self {
        let total_value = products.iter().map(|p| p.precio * p.stock as f64).sum();
        let average_price = if products.is_empty() {
            0.0
        } else {
            products.iter().map(|p| p.precio).sum::<f64>() / products.len() as f64
        };
        let total_stock = products.iter().map(|p| p.stock).sum();
        let low_stock_items = products
            .iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .count();

        let mut category_breakdown = CategoryBreakdown::default();
        for product in products {
            category_breakdown.add(&product.categoria);
        }

        Self {
            total_value,
            average_price,
            total_stock,
            low_stock_items,
            category_breakdown,
        }
    }
}

/// Product count per category, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBreakdown {
    entries: Vec<(String, usize)>,
}

impl CategoryBreakdown {
    fn add(&mut self, category: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((category.to_string(), 1)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Share of `count` in the whole breakdown, in percent.
    pub fn percentage(&self, count: usize) -> f64 {
        match self.total() {
            0 => 0.0,
            total => count as f64 / total as f64 * 100.0,
        }
    }
}
