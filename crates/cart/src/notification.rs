//! User-facing failure messages.
//!
//! The engine reports failures as typed errors; callers map them to these
//! fixed messages before firing the notification sink. The strings are part
//! of the user-visible contract and are kept verbatim.

use crate::error::CartError;

/// The cart operation a failure occurred in.
///
/// Determines which fixed message the user sees for non-stock failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add,
    Remove,
    UpdateAmount,
}

impl CartOp {
    /// Label used for logging and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            CartOp::Add => "add",
            CartOp::Remove => "remove",
            CartOp::UpdateAmount => "update_amount",
        }
    }
}

impl std::fmt::Display for CartOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shown when a requested quantity cannot be satisfied by current stock.
pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";

/// Shown when adding a product fails for any other reason.
pub const ADD_FAILED: &str = "Erro na adição do produto";

/// Shown when removing a product fails.
pub const REMOVE_FAILED: &str = "Erro na remoção do produto";

/// Shown when changing a product's quantity fails for any other reason.
pub const UPDATE_FAILED: &str = "Erro na alteração de quantidade do produto";

/// Maps a failed operation to its fixed user-facing message.
pub fn failure_message(op: CartOp, error: &CartError) -> &'static str {
    match (op, error) {
        (_, CartError::OutOfStock { .. }) => OUT_OF_STOCK,
        (CartOp::Add, _) => ADD_FAILED,
        (CartOp::Remove, _) => REMOVE_FAILED,
        (CartOp::UpdateAmount, _) => UPDATE_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ProductId;

    #[test]
    fn out_of_stock_message_is_the_same_for_add_and_update() {
        let err = CartError::OutOfStock {
            product_id: ProductId::new(1),
        };
        assert_eq!(failure_message(CartOp::Add, &err), OUT_OF_STOCK);
        assert_eq!(failure_message(CartOp::UpdateAmount, &err), OUT_OF_STOCK);
    }

    #[test]
    fn other_failures_map_by_operation() {
        let err = CartError::StockService("boom".to_string());
        assert_eq!(failure_message(CartOp::Add, &err), ADD_FAILED);
        assert_eq!(failure_message(CartOp::UpdateAmount, &err), UPDATE_FAILED);

        let err = CartError::NotInCart {
            product_id: ProductId::new(1),
        };
        assert_eq!(failure_message(CartOp::Remove, &err), REMOVE_FAILED);
        assert_eq!(failure_message(CartOp::UpdateAmount, &err), UPDATE_FAILED);
    }

    #[test]
    fn op_labels() {
        assert_eq!(CartOp::Add.as_str(), "add");
        assert_eq!(CartOp::Remove.as_str(), "remove");
        assert_eq!(CartOp::UpdateAmount.to_string(), "update_amount");
    }
}
