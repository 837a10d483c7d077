//! Manual expense entry and the editable draft of a scanned receipt.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::format::parse_amount;
use crate::{NewExpenseRequest, ReceiptItem, ReceiptScanResponse, ScanMethod};

pub const SCAN_UNREADABLE: &str = "Could not read receipt. Try a clearer image.";
pub const SCAN_FAILED: &str = "Scan failed. Please try again.";

const RECEIPT_CATEGORY: &str = "groceries";

/// State of the "Log Expense" modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub amount_input: String,
    pub category: Option<String>,
}

impl ExpenseDraft {
    pub fn can_submit(&self) -> bool {
        self.to_request().is_some()
    }

    pub fn to_request(&self) -> Option<NewExpenseRequest> {
        Some(NewExpenseRequest {
            amount: parse_amount(&self.amount_input)?,
            category: self.category.clone()?,
            merchant: None,
        })
    }
}

fn typed_money(input: &str) -> Decimal {
    input.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Editable copy of a parsed receipt. Editing a price or removing a line
/// recomputes the total; editing the total directly does not touch the lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptDraft {
    pub merchant: String,
    pub date: String,
    pub items: Vec<ReceiptItem>,
    pub total: Decimal,
    pub method: ScanMethod,
}

impl ReceiptDraft {
    /// Turns a scan response into a draft, or the banner message to show instead.
    pub fn from_scan(response: ReceiptScanResponse) -> Result<Self, String> {
        match response.parsed {
            Some(parsed) if response.success => Ok(Self {
                merchant: parsed.merchant.unwrap_or_default(),
                date: parsed.date.unwrap_or_default(),
                items: parsed.items,
                total: parsed.total.unwrap_or_default(),
                method: response.method,
            }),
            _ => Err(response
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| SCAN_UNREADABLE.to_string())),
        }
    }

    fn items_sum(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price)
            .sum::<Decimal>()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn rename_item(&mut self, index: usize, name: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.name = name.to_string();
        }
    }

    /// Unparseable input counts as zero.
    pub fn set_price(&mut self, index: usize, input: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.price = typed_money(input);
            self.total = self.items_sum();
        }
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
            self.total = self.items_sum();
        }
    }

    pub fn add_item(&mut self) {
        self.items.push(ReceiptItem {
            name: String::new(),
            price: Decimal::ZERO,
        });
    }

    pub fn set_total(&mut self, input: &str) {
        self.total = typed_money(input);
    }

    pub fn recalculate(&mut self) {
        self.total = self.items_sum();
    }

    pub fn can_confirm(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn to_expense(&self) -> NewExpenseRequest {
        NewExpenseRequest {
            amount: self.total,
            category: RECEIPT_CATEGORY.to_string(),
            merchant: Some(self.merchant.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParsedReceipt;

    fn item(name: &str, cents: i64) -> ReceiptItem {
        ReceiptItem {
            name: name.to_string(),
            price: Decimal::new(cents, 2),
        }
    }

    fn draft() -> ReceiptDraft {
        ReceiptDraft {
            merchant: "Lidl".to_string(),
            date: "2025-02-10".to_string(),
            items: vec![item("Milk", 189), item("Bread", 109), item("Eggs", 259)],
            total: Decimal::new(557, 2),
            method: ScanMethod::Ai,
        }
    }

    #[test]
    fn test_expense_draft_requires_amount_and_category() {
        let mut expense = ExpenseDraft {
            amount_input: "4.50".to_string(),
            category: None,
        };
        assert!(!expense.can_submit());

        expense.category = Some("coffee".to_string());
        let request = expense.to_request().unwrap();
        assert_eq!(request.amount, Decimal::new(450, 2));
        assert_eq!(request.category, "coffee");

        expense.amount_input = "0".to_string();
        assert!(!expense.can_submit());
    }

    #[test]
    fn test_from_scan_success() {
        let response = ReceiptScanResponse {
            success: true,
            parsed: Some(ParsedReceipt {
                merchant: None,
                date: Some("2025-02-10".to_string()),
                items: vec![item("Milk", 189)],
                total: None,
                currency: None,
            }),
            message: None,
            method: ScanMethod::Ocr,
        };
        let draft = ReceiptDraft::from_scan(response).unwrap();
        assert_eq!(draft.merchant, "");
        assert_eq!(draft.total, Decimal::ZERO);
        assert_eq!(draft.method.label(), "Local OCR");
    }

    #[test]
    fn test_from_scan_failure_message() {
        let response = ReceiptScanResponse {
            success: false,
            parsed: None,
            message: None,
            method: ScanMethod::Demo,
        };
        assert_eq!(ReceiptDraft::from_scan(response), Err(SCAN_UNREADABLE.to_string()));

        let response = ReceiptScanResponse {
            success: false,
            parsed: None,
            message: Some("Image too small".to_string()),
            method: ScanMethod::Demo,
        };
        assert_eq!(ReceiptDraft::from_scan(response), Err("Image too small".to_string()));
    }

    #[test]
    fn test_price_edit_recomputes_total() {
        let mut draft = draft();
        draft.set_price(0, "2.004");
        assert_eq!(draft.total, Decimal::new(568, 2));

        draft.set_price(1, "oops");
        assert_eq!(draft.items[1].price, Decimal::ZERO);
        assert_eq!(draft.total, Decimal::new(459, 2));
    }

    #[test]
    fn test_remove_item_recomputes_total() {
        let mut draft = draft();
        draft.remove_item(2);
        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.total, Decimal::new(298, 2));
        draft.remove_item(9);
        assert_eq!(draft.items.len(), 2);
    }

    #[test]
    fn test_manual_total_then_recalculate() {
        let mut draft = draft();
        draft.set_total("20");
        assert_eq!(draft.total, Decimal::from(20));
        draft.add_item();
        draft.rename_item(3, "Butter");
        assert_eq!(draft.total, Decimal::from(20));

        draft.recalculate();
        assert_eq!(draft.total, Decimal::new(557, 2));
    }

    #[test]
    fn test_confirm_posts_groceries() {
        let mut draft = draft();
        let expense = draft.to_expense();
        assert_eq!(expense.category, "groceries");
        assert_eq!(expense.merchant.as_deref(), Some("Lidl"));
        assert_eq!(expense.amount, Decimal::new(557, 2));

        while !draft.items.is_empty() {
            draft.remove_item(0);
        }
        assert!(!draft.can_confirm());
    }
}
