pub mod currency;
pub mod item;
pub mod menu;

pub use item::{Category, DrinkOption, Extra, Ingredient, MenuItem, SideOption};
pub use menu::{MenuRepository, StaticMenu};
