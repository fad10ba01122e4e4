pub use super::inventory::Entity as Inventory;
pub use super::menu_item::Entity as MenuItem;
pub use super::order::Entity as Order;
pub use super::purchase_request::Entity as PurchaseRequest;
pub use super::recipe::Entity as Recipe;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
