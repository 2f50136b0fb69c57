pub mod dish;
pub mod price;

pub use dish::{Dish, DishId, NewDish};
pub use price::Price;
