use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum ShoppingError {
    /// The add dialog's quantity buffer is not an integer.
    #[error("quantity {text:?} is not a whole number")]
    InvalidQuantity {
        text: String,
        #[source]
        source: ParseIntError,
    },
}
