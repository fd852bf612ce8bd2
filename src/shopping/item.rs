pub type ItemId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i32,
}
